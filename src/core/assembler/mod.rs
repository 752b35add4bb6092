//! # 파티션 조립 모듈

pub mod assembler;

pub use assembler::{assemble, PartitionRow, PartitionTable};
