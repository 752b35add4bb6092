//! # 평가 시스템 모듈
//!
//! 설정, 오류 타입, 평가 진입점

pub mod config;
pub mod error;
pub mod engine;

pub use config::{PartitionConfig, GRAVITY, UNDEF};
pub use error::{PartitionError, PartitionResult};
pub use engine::{
    evaluate, evaluate_batch, evaluate_detailed, evaluate_with, wave_age_classifier,
    PartitionEvaluation, SpectrumInput,
};
