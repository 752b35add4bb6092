//! # 파티션 분류 모듈
//!
//! 각 (주파수, 방향) 빈에 파티션 번호를 붙인다. 분류 규칙은
//! `PartitionClassifier` 하나로 교체 가능하며 누적/파라미터 단계는
//! 규칙을 알지 못한다.

pub mod partition_id;
pub mod wave_age;
pub mod map_classifier;

pub use partition_id::{PartitionId, PartitionMap, PartitionMethod};
pub use wave_age::{wind_sea_cutoffs, WaveAgeClassifier, WindForcing};
pub use map_classifier::MapClassifier;

use crate::core::grid::GridModel;
use crate::core::systems::error::PartitionResult;

/// 빈 분류 규칙
pub trait PartitionClassifier: Send + Sync {
    /// 미달 파티션 정책을 결정하는 분할 방법
    fn method(&self) -> PartitionMethod;

    /// 전체 스펙트럼을 제외한 파티션 개수 N
    fn partition_count(&self) -> usize;

    /// 분류 전에 격자와 형상 검증
    fn check_shape(&self, _grid: &GridModel) -> PartitionResult<()> {
        Ok(())
    }

    /// 분류에 쓴 주파수별 파수. 있으면 평가 전체가 이 값을 쓴다
    fn wavenumbers(&self) -> Option<&[f64]> {
        None
    }

    fn classify(&self, grid: &GridModel, ik: usize, ith: usize) -> PartitionId;
}

/// 격자 전체를 분류해 파티션 맵 생성
pub fn classify_spectrum<C>(grid: &GridModel, classifier: &C) -> PartitionResult<PartitionMap>
where
    C: PartitionClassifier + ?Sized,
{
    classifier.check_shape(grid)?;
    Ok(PartitionMap::from_shape_fn((grid.nk(), grid.nth()), |(ik, ith)| {
        classifier.classify(grid, ik, ith).index()
    }))
}

#[cfg(test)]
mod __tests__;
