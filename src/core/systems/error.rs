//! # 파티션 평가 오류 타입
//!
//! 격자 설정/입력 형상 오류는 분류 전에 즉시 실패하고,
//! 용량 초과는 부분 결과와 함께 전달되는 비치명적 신호로만 쓰인다.

use std::fmt;

/// 파티션 평가 결과 타입 별칭
pub type PartitionResult<T> = Result<T, PartitionError>;

/// 파티션 평가 오류
#[derive(Debug, Clone, PartialEq)]
pub enum PartitionError {
    /// NK/NTH/XFR/FR1 값이 허용 범위를 벗어남
    InvalidGridConfig {
        parameter: String,
        value: String,
        reason: String,
    },

    /// 스펙트럼/파수/파티션 맵 형상이 격자와 불일치
    ShapeMismatch {
        context: String,
        expected: String,
        got: String,
    },

    /// 튜닝 상수 설정 오류
    InvalidConfiguration {
        parameter: String,
        value: String,
        reason: String,
    },

    /// 최대 파티션 수 초과 (비치명적)
    PartitionCapacityExceeded { max: usize, available: usize },
}

impl PartitionError {
    pub fn invalid_grid(parameter: &str, value: impl fmt::Display, reason: &str) -> Self {
        PartitionError::InvalidGridConfig {
            parameter: parameter.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn shape_mismatch(
        context: &str,
        expected: impl fmt::Display,
        got: impl fmt::Display,
    ) -> Self {
        PartitionError::ShapeMismatch {
            context: context.to_string(),
            expected: expected.to_string(),
            got: got.to_string(),
        }
    }

    pub fn invalid_config(parameter: &str, value: impl fmt::Display, reason: &str) -> Self {
        PartitionError::InvalidConfiguration {
            parameter: parameter.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }

    /// 평가를 중단시키는 오류인지 여부
    pub fn is_fatal(&self) -> bool {
        !matches!(self, PartitionError::PartitionCapacityExceeded { .. })
    }
}

impl fmt::Display for PartitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartitionError::InvalidGridConfig {
                parameter,
                value,
                reason,
            } => write!(
                f,
                "invalid grid configuration: {} = {} ({})",
                parameter, value, reason
            ),
            PartitionError::ShapeMismatch {
                context,
                expected,
                got,
            } => write!(
                f,
                "shape mismatch in {}: expected {}, got {}",
                context, expected, got
            ),
            PartitionError::InvalidConfiguration {
                parameter,
                value,
                reason,
            } => write!(
                f,
                "invalid configuration: {} = {} ({})",
                parameter, value, reason
            ),
            PartitionError::PartitionCapacityExceeded { max, available } => write!(
                f,
                "partition capacity exceeded: {} partitions available, capacity {}",
                available, max
            ),
        }
    }
}

impl std::error::Error for PartitionError {}
