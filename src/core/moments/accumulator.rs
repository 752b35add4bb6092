//! 주파수 행별 파티션 누적합
//!
//! 스펙트럼을 한 번 훑으며 파티션 0(전체)에는 모든 빈을, 번호가 있는 빈은
//! 해당 파티션에도 한 번 더 더한다. 마지막에 고주파 꼬리 행을 합성한다.

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::core::classifier::PartitionMap;
use crate::core::grid::GridModel;
use crate::core::systems::error::{PartitionError, PartitionResult};

/// 한 파티션의 주파수 행별 누적합 (길이 NK + 1, 마지막은 꼬리 행)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartitionRowSums {
    /// Σ E
    pub e: Vec<f64>,
    /// Σ E·fact (풍랑 비율용)
    pub ew: Vec<f64>,
    /// Σ E·cosθ
    pub ex: Vec<f64>,
    /// Σ E·sinθ
    pub ey: Vec<f64>,
}

impl PartitionRowSums {
    fn zeros(rows: usize) -> Self {
        Self {
            e: vec![0.0; rows],
            ew: vec![0.0; rows],
            ex: vec![0.0; rows],
            ey: vec![0.0; rows],
        }
    }

    /// 꼬리 행 번호 (= NK)
    pub fn tail_row(&self) -> usize {
        self.e.len() - 1
    }

    /// 해상된 행의 에너지 합
    pub fn resolved_energy(&self) -> &[f64] {
        &self.e[..self.tail_row()]
    }

    fn add(&mut self, ik: usize, energy: f64, fact: f64, cos: f64, sin: f64) {
        self.e[ik] += energy;
        self.ew[ik] += energy * fact;
        self.ex[ik] += energy * cos;
        self.ey[ik] += energy * sin;
    }

    fn with_tail(mut self, factor: f64) -> Self {
        let nk = self.tail_row();
        self.e[nk] = self.e[nk - 1] * factor;
        self.ew[nk] = self.ew[nk - 1] * factor;
        self.ex[nk] = self.ex[nk - 1] * factor;
        self.ey[nk] = self.ey[nk - 1] * factor;
        self
    }
}

/// 꼬리 행의 에너지 배율 XFR^(-n)
pub fn tail_energy_factor(grid: &GridModel, tail_power: f64) -> f64 {
    grid.xfr().powf(-tail_power)
}

/// 빈 `ik` 중 차단 주파수 `cutoff` 위에 놓인 비율
pub fn wind_sea_weight(grid: &GridModel, ik: usize, cutoff: f64) -> f64 {
    (1.0 - (cutoff - grid.lower_edge(ik)) / grid.dsi()[ik]).clamp(0.0, 1.0)
}

/// 스펙트럼 형상 검증
pub fn check_spectrum_shape(grid: &GridModel, spectrum: &Array2<f64>) -> PartitionResult<()> {
    let (rows, cols) = spectrum.dim();
    if rows != grid.nk() || cols != grid.nth() {
        return Err(PartitionError::shape_mismatch(
            "spectrum",
            format!("{}x{}", grid.nk(), grid.nth()),
            format!("{}x{}", rows, cols),
        ));
    }
    Ok(())
}

/// 파티션 0..=N 의 행별 누적합 계산
///
/// `cutoffs` 는 방향별 풍랑 차단 각주파수.
pub fn accumulate_rows(
    grid: &GridModel,
    spectrum: &Array2<f64>,
    map: &PartitionMap,
    partition_count: usize,
    cutoffs: &[f64],
    tail_power: f64,
) -> PartitionResult<Vec<PartitionRowSums>> {
    check_spectrum_shape(grid, spectrum)?;
    if map.dim() != spectrum.dim() {
        let (rows, cols) = map.dim();
        return Err(PartitionError::shape_mismatch(
            "partition map",
            format!("{}x{}", grid.nk(), grid.nth()),
            format!("{}x{}", rows, cols),
        ));
    }
    if cutoffs.len() != grid.nth() {
        return Err(PartitionError::shape_mismatch(
            "wind-sea cutoffs",
            grid.nth(),
            cutoffs.len(),
        ));
    }

    let count = map.iter().copied().fold(partition_count, usize::max);
    // 빈 개수보다 많은 파티션은 만들 수 없다
    let bins = grid.nk() * grid.nth();
    if count > bins {
        return Err(PartitionError::invalid_config(
            "partition id",
            count,
            "exceeds the number of spectral bins",
        ));
    }
    let rows = grid.nk() + 1;
    let (ecos, esin) = (grid.cos_theta(), grid.sin_theta());

    let sums = spectrum.indexed_iter().fold(
        vec![PartitionRowSums::zeros(rows); count + 1],
        |mut sums, ((ik, ith), &energy)| {
            let fact = wind_sea_weight(grid, ik, cutoffs[ith]);
            sums[0].add(ik, energy, fact, ecos[ith], esin[ith]);
            let ip = map[[ik, ith]];
            if ip != 0 {
                sums[ip].add(ik, energy, fact, ecos[ith], esin[ith]);
            }
            sums
        },
    );

    let factor = tail_energy_factor(grid, tail_power);
    Ok(sums.into_iter().map(|s| s.with_tail(factor)).collect())
}
