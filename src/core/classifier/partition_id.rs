//! 파티션 식별자와 분류 맵

use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// 스펙트럼 빈별 파티션 번호 맵 (NK × NTH)
///
/// 0 은 어느 파티션에도 속하지 않음(전체 스펙트럼에만 합산), 1..N 은 개별 파티션.
pub type PartitionMap = Array2<usize>;

/// 파티션 식별자
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartitionId {
    /// 전체 스펙트럼 (항상 계산)
    FullSpectrum,
    /// 풍랑
    WindSea,
    /// 너울
    Swell,
    /// 일반 N-파티션 방법의 번호 (0 = 미할당)
    Indexed(usize),
}

impl PartitionId {
    /// 누적 배열에서의 내부 번호
    pub fn index(&self) -> usize {
        match self {
            PartitionId::FullSpectrum => 0,
            PartitionId::WindSea => 1,
            PartitionId::Swell => 2,
            PartitionId::Indexed(i) => *i,
        }
    }

    /// 방법별 내부 번호에서 식별자 복원
    pub fn from_index(method: PartitionMethod, index: usize) -> Self {
        match (method, index) {
            (_, 0) => PartitionId::FullSpectrum,
            (PartitionMethod::WaveAge, 1) => PartitionId::WindSea,
            (PartitionMethod::WaveAge, 2) => PartitionId::Swell,
            (_, i) => PartitionId::Indexed(i),
        }
    }
}

/// 분할 방법. 최소 파고 미만 파티션 처리 정책이 다르다
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PartitionMethod {
    /// 파랑 연령 기준 풍랑/너울 2분할. 미달 파티션도 센티넬 행을 남긴다
    WaveAge,
    /// 호출자 제공 N-파티션 맵. 미달 파티션은 행을 만들지 않는다
    General,
}
