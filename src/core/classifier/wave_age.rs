//! 파랑 연령 기준 풍랑/너울 분류기
//!
//! 파 진행 방향으로 투영한 바람 속도 Upar 가 위상 속도 C 보다 크면 풍랑,
//! 아니면 너울로 분류한다.

use super::{PartitionClassifier, PartitionId, PartitionMethod};
use crate::core::grid::{phase_speed, GridModel};
use crate::core::systems::error::{PartitionError, PartitionResult};

/// 투영 풍속이 이보다 작으면 해당 방향에 풍랑 영역이 없다고 본다
const MIN_PROJECTED_WIND: f64 = 1e-3;

/// 국지 바람 벡터
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindForcing {
    /// 풍속 (m/s)
    pub speed: f64,
    /// 풍향 (도, 방향 축과 같은 수학 좌표계)
    pub direction: f64,
}

impl WindForcing {
    pub fn new(speed: f64, direction: f64) -> Self {
        Self { speed, direction }
    }

    /// 방향 `theta` (rad) 로 투영한 풍속에 배수를 곱한 값
    pub fn projected(&self, theta: f64, multiplier: f64) -> f64 {
        multiplier * self.speed * (theta - self.direction.to_radians()).cos().max(0.0)
    }
}

/// 방향별 풍랑 차단 각주파수
///
/// 위상 속도 C = σ/k 가 처음으로 Upar 이하가 되는 행과 그 앞 행 사이를
/// C 에 대해 선형 보간한다. 파수는 분류기와 같은 값이어야 한다.
/// Upar 가 마지막 행의 C 보다 작으면 격자 위 2·σ_tail 로 밀어낸다.
pub fn wind_sea_cutoffs(
    grid: &GridModel,
    wind: &WindForcing,
    multiplier: f64,
    wavenumbers: &[f64],
) -> PartitionResult<Vec<f64>> {
    if wavenumbers.len() != grid.nk() {
        return Err(PartitionError::shape_mismatch(
            "wave numbers",
            grid.nk(),
            wavenumbers.len(),
        ));
    }

    let sigma = grid.sigma();
    let speeds: Vec<f64> = sigma
        .iter()
        .zip(wavenumbers)
        .map(|(&s, &k)| phase_speed(s, k))
        .collect();
    let above_grid = 2.0 * grid.tail_sigma();

    Ok(grid
        .theta()
        .iter()
        .map(|&theta| {
            let upar = wind.projected(theta, multiplier);
            if upar < MIN_PROJECTED_WIND || upar < speeds[grid.nk() - 1] {
                return above_grid;
            }
            let ik = (1..grid.nk())
                .find(|&ik| upar >= speeds[ik])
                .unwrap_or(grid.nk() - 1);
            let span = speeds[ik - 1] - speeds[ik];
            if !(span > 0.0) || !span.is_finite() {
                return sigma[ik];
            }
            let ratio = ((upar - speeds[ik]) / span).clamp(0.0, 1.0);
            (1.0 - ratio) * sigma[ik] + ratio * sigma[ik - 1]
        })
        .collect())
}

/// 파랑 연령 분류기
#[derive(Debug, Clone)]
pub struct WaveAgeClassifier {
    wind: WindForcing,
    multiplier: f64,
    wavenumbers: Vec<f64>,
}

impl WaveAgeClassifier {
    pub fn new(wind: WindForcing, multiplier: f64, wavenumbers: Vec<f64>) -> Self {
        Self {
            wind,
            multiplier,
            wavenumbers,
        }
    }

    pub fn wind(&self) -> &WindForcing {
        &self.wind
    }

    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }
}

impl PartitionClassifier for WaveAgeClassifier {
    fn method(&self) -> PartitionMethod {
        PartitionMethod::WaveAge
    }

    fn partition_count(&self) -> usize {
        2
    }

    fn check_shape(&self, grid: &GridModel) -> PartitionResult<()> {
        if self.wavenumbers.len() != grid.nk() {
            return Err(PartitionError::shape_mismatch(
                "wave numbers",
                grid.nk(),
                self.wavenumbers.len(),
            ));
        }
        Ok(())
    }

    fn wavenumbers(&self) -> Option<&[f64]> {
        Some(&self.wavenumbers)
    }

    fn classify(&self, grid: &GridModel, ik: usize, ith: usize) -> PartitionId {
        let upar = self.wind.projected(grid.theta()[ith], self.multiplier);
        let c = phase_speed(grid.sigma()[ik], self.wavenumbers[ik]);
        if upar > c {
            PartitionId::WindSea
        } else {
            PartitionId::Swell
        }
    }
}
