//! 파티션 행 조립
//!
//! 최소 파고 정책을 적용하고, 남은 파티션에 1부터 번호를 다시 매기며,
//! 최대 파티션 수에서 자른다. 잘린 경우에도 이미 만든 행은 돌려준다.

use serde::{Deserialize, Serialize};

use crate::core::classifier::{PartitionId, PartitionMethod};
use crate::core::parameters::PartitionParameters;
use crate::core::systems::error::PartitionError;

/// 출력 행 하나
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartitionRow {
    /// 출력 번호 (1부터)
    pub number: usize,
    /// 내부 파티션 식별자
    pub id: PartitionId,
    pub parameters: PartitionParameters,
}

/// 한 스펙트럼의 파티션 결과 표
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartitionTable {
    pub method: PartitionMethod,
    /// 전체 스펙트럼 파라미터 (항상 존재)
    pub total: PartitionParameters,
    pub rows: Vec<PartitionRow>,
    /// 출력 행 번호 → 내부 파티션 번호
    pub index_map: Vec<usize>,
    /// 용량 초과로 행이 잘렸는지
    pub capacity_exceeded: bool,
    /// 용량 제한 전 출력 가능했던 행 수
    pub available: usize,
    pub max_partitions: usize,
}

impl PartitionTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 내부 파티션 식별자에 해당하는 출력 행
    pub fn row_for(&self, id: PartitionId) -> Option<&PartitionRow> {
        self.rows.iter().find(|row| row.id == id)
    }

    /// 내부 파티션 번호 → 출력 행 번호 (0부터)
    pub fn row_index_of(&self, partition: usize) -> Option<usize> {
        self.index_map.iter().position(|&p| p == partition)
    }

    /// 용량 초과 신호
    pub fn capacity_error(&self) -> Option<PartitionError> {
        self.capacity_exceeded.then(|| PartitionError::PartitionCapacityExceeded {
            max: self.max_partitions,
            available: self.available,
        })
    }
}

/// 파티션 1..=N 의 계산 결과(미달이면 `None`)를 표로 조립
pub fn assemble(
    method: PartitionMethod,
    total: Option<PartitionParameters>,
    partitions: Vec<Option<PartitionParameters>>,
    max_partitions: usize,
) -> PartitionTable {
    let candidates: Vec<(usize, PartitionParameters)> = partitions
        .into_iter()
        .enumerate()
        .filter_map(|(i, params)| {
            let index = i + 1;
            match (method, params) {
                (_, Some(p)) => Some((index, p)),
                (PartitionMethod::WaveAge, None) => Some((index, PartitionParameters::undefined())),
                (PartitionMethod::General, None) => None,
            }
        })
        .collect();

    let available = candidates.len();
    let capacity_exceeded = available > max_partitions;

    let (rows, index_map): (Vec<PartitionRow>, Vec<usize>) = candidates
        .into_iter()
        .take(max_partitions)
        .enumerate()
        .map(|(row, (index, parameters))| {
            let id = PartitionId::from_index(method, index);
            (
                PartitionRow {
                    number: row + 1,
                    id,
                    parameters,
                },
                index,
            )
        })
        .unzip();

    PartitionTable {
        method,
        total: total.unwrap_or_else(PartitionParameters::undefined),
        rows,
        index_map,
        capacity_exceeded,
        available,
        max_partitions,
    }
}
