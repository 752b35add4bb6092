//! 호출자가 제공한 파티션 맵을 그대로 쓰는 일반 N-파티션 분류기

use super::{PartitionClassifier, PartitionId, PartitionMap, PartitionMethod};
use crate::core::grid::GridModel;
use crate::core::systems::error::{PartitionError, PartitionResult};

#[derive(Debug, Clone)]
pub struct MapClassifier {
    map: PartitionMap,
    count: usize,
}

impl MapClassifier {
    /// 맵의 최대 번호를 파티션 개수로 사용
    pub fn new(map: PartitionMap) -> Self {
        let count = map.iter().copied().max().unwrap_or(0);
        Self { map, count }
    }

    pub fn map(&self) -> &PartitionMap {
        &self.map
    }
}

impl PartitionClassifier for MapClassifier {
    fn method(&self) -> PartitionMethod {
        PartitionMethod::General
    }

    fn partition_count(&self) -> usize {
        self.count
    }

    fn check_shape(&self, grid: &GridModel) -> PartitionResult<()> {
        let (rows, cols) = self.map.dim();
        if rows != grid.nk() || cols != grid.nth() {
            return Err(PartitionError::shape_mismatch(
                "partition map",
                format!("{}x{}", grid.nk(), grid.nth()),
                format!("{}x{}", rows, cols),
            ));
        }
        let bins = grid.nk() * grid.nth();
        if self.count > bins {
            return Err(PartitionError::invalid_config(
                "partition id",
                self.count,
                "exceeds the number of spectral bins",
            ));
        }
        Ok(())
    }

    fn classify(&self, _grid: &GridModel, ik: usize, ith: usize) -> PartitionId {
        PartitionId::Indexed(self.map[[ik, ith]])
    }
}
