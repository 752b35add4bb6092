//! # 모멘트 모듈
//!
//! 분류된 스펙트럼 → 행별 누적합 → 파티션별 스펙트럼 모멘트

pub mod accumulator;
pub mod integration;

pub use accumulator::{
    accumulate_rows, check_spectrum_shape, tail_energy_factor, wind_sea_weight, PartitionRowSums,
};
pub use integration::{discrete_peak, integrate, PartitionMoments, TailWeights};
