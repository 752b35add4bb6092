//! # 스펙트럼 분할 핵심 모듈
//!
//! 격자 → 분류 → 누적 → 모멘트/파라미터 → 조립 순서로만 데이터가 흐른다.

pub mod grid;
pub mod classifier;
pub mod moments;
pub mod parameters;
pub mod assembler;
pub mod systems;

// 주요 타입들 재수출
pub use grid::GridModel;
pub use classifier::{
    PartitionClassifier, PartitionId, PartitionMap, PartitionMethod, WaveAgeClassifier,
    MapClassifier, WindForcing,
};
pub use moments::{PartitionRowSums, PartitionMoments};
pub use parameters::PartitionParameters;
pub use assembler::{PartitionRow, PartitionTable};
pub use systems::*;
