//! 방향 파랑 스펙트럼 분할 라이브러리
//!
//! 주파수 × 방향 에너지 스펙트럼을 파랑 연령 기준으로 풍랑/너울로 나누고
//! 파티션별 적분 파라미터(유의파고, 주기, 방향, 형상 계수)를 계산한다.

pub mod core;
pub mod io;

// 핵심 타입들 재수출
pub use crate::core::{
    // 격자와 분류
    GridModel, PartitionClassifier, PartitionId, PartitionMap, PartitionMethod,
    WaveAgeClassifier, MapClassifier, WindForcing,
    // 모멘트와 파라미터
    PartitionRowSums, PartitionMoments, PartitionParameters,
    // 조립과 평가
    PartitionRow, PartitionTable, PartitionConfig, PartitionError, PartitionResult,
    SpectrumInput, PartitionEvaluation, evaluate, evaluate_batch, evaluate_with,
    UNDEF,
};
