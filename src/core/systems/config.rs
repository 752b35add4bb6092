//! # 파티션 평가 설정
//!
//! 파랑 연령 배수, 최소 유의파고, 최대 파티션 수, 고주파 꼬리 지수를
//! 평가 호출마다 명시적으로 전달한다. 프로세스 전역 상태는 없다.

use serde::{Deserialize, Serialize};

use super::error::{PartitionError, PartitionResult};

/// 결측 파라미터를 나타내는 센티넬 값
pub const UNDEF: f64 = -999.9;

/// 중력 가속도 (m/s²)
pub const GRAVITY: f64 = 9.81;

/// 파티션 평가 설정
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartitionConfig {
    /// 파랑 연령 배수 (풍속 투영에 곱해짐)
    pub wave_age_multiplier: f64,
    /// 최소 유의파고 (m)
    pub min_significant_height: f64,
    /// 출력 파티션 최대 개수
    pub max_partitions: usize,
    /// 고주파 꼬리 σ^-n 의 지수 n
    pub tail_power: f64,
}

impl Default for PartitionConfig {
    fn default() -> Self {
        Self {
            wave_age_multiplier: 1.7,
            min_significant_height: 0.05,
            max_partitions: 100,
            tail_power: 5.0,
        }
    }
}

impl PartitionConfig {
    /// 설정 검증
    pub fn validate(&self) -> PartitionResult<()> {
        if !(self.wave_age_multiplier >= 0.0) {
            return Err(PartitionError::invalid_config(
                "wave_age_multiplier",
                self.wave_age_multiplier,
                "must be non-negative",
            ));
        }
        if !(self.min_significant_height >= 0.0) {
            return Err(PartitionError::invalid_config(
                "min_significant_height",
                self.min_significant_height,
                "must be non-negative",
            ));
        }
        // 2차 모멘트 꼬리 적분이 수렴하려면 n > 3
        if !(self.tail_power > 3.0) {
            return Err(PartitionError::invalid_config(
                "tail_power",
                self.tail_power,
                "must exceed 3 for the second moment tail to converge",
            ));
        }
        Ok(())
    }

    pub fn with_max_partitions(mut self, max_partitions: usize) -> Self {
        self.max_partitions = max_partitions;
        self
    }

    pub fn with_min_significant_height(mut self, height: f64) -> Self {
        self.min_significant_height = height;
        self
    }
}
