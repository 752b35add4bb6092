//! # 적분 파라미터 모듈
//!
//! 파티션 모멘트 → 15개 적분 파라미터

pub mod bulk;
pub mod peak;
pub mod spread_fit;

pub use bulk::{compass_direction, compute_parameters, PartitionParameters, PARAMETER_NAMES};
pub use peak::refine_peak_energy;
pub use spread_fit::frequency_spread;

#[cfg(test)]
mod __tests__;
