//! # 스펙트럼 격자 모듈
//!
//! 주파수/방향 축과 분산 관계

pub mod grid_model;
pub mod dispersion;

pub use grid_model::GridModel;
pub use dispersion::{wavenumber, phase_speed};

#[cfg(test)]
mod __tests__;
