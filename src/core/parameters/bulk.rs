//! 파티션 적분 파라미터 (15개)
//!
//! 모멘트와 첨두 정보, 방향 합으로부터 파고/주기/방향/형상 파라미터를 만든다.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use super::peak::refine_peak_energy;
use super::spread_fit::frequency_spread;
use crate::core::grid::GridModel;
use crate::core::moments::{PartitionMoments, PartitionRowSums};
use crate::core::systems::config::UNDEF;

/// 파라미터 이름 (출력 열 순서)
pub const PARAMETER_NAMES: [&str; 15] = [
    "hs", "tp", "lp", "dir_mean", "dir_spread", "wind_sea_fraction", "dir_peak",
    "spectral_width", "peak_enhancement", "peakedness", "freq_spread", "energy_period",
    "mean_period", "zero_crossing_period", "peak_density",
];

/// 한 파티션의 적분 파라미터
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PartitionParameters {
    /// 유의파고 Hs (m)
    pub hs: f64,
    /// 첨두 주기 Tp (s)
    pub tp: f64,
    /// 첨두 파장 (m)
    pub lp: f64,
    /// 평균 방향 (도, 오는 방향)
    pub dir_mean: f64,
    /// 평균 방향 분산 (도)
    pub dir_spread: f64,
    /// 풍랑 에너지 비율
    pub wind_sea_fraction: f64,
    /// 첨두 방향 (도)
    pub dir_peak: f64,
    /// Longuet-Higgins 스펙트럼 폭
    pub spectral_width: f64,
    /// 첨두 증폭 계수 γ
    pub peak_enhancement: f64,
    /// Goda 첨예도 Qp
    pub peakedness: f64,
    /// 가우시안 주파수 폭 (Hz)
    pub freq_spread: f64,
    /// 에너지 주기 Tm-1,0 (s)
    pub energy_period: f64,
    /// 평균 주기 Tm0,1 (s)
    pub mean_period: f64,
    /// 영점 교차 주기 Tm0,2 (s)
    pub zero_crossing_period: f64,
    /// 첨두 스펙트럼 밀도 (m²/Hz)
    pub peak_density: f64,
}

impl PartitionParameters {
    /// 모든 값이 결측인 행. 풍랑 비율만 0
    pub fn undefined() -> Self {
        Self {
            hs: UNDEF,
            tp: UNDEF,
            lp: UNDEF,
            dir_mean: UNDEF,
            dir_spread: UNDEF,
            wind_sea_fraction: 0.0,
            dir_peak: UNDEF,
            spectral_width: UNDEF,
            peak_enhancement: UNDEF,
            peakedness: UNDEF,
            freq_spread: UNDEF,
            energy_period: UNDEF,
            mean_period: UNDEF,
            zero_crossing_period: UNDEF,
            peak_density: UNDEF,
        }
    }

    /// 파고가 추정 가능한 행인지
    pub fn is_defined(&self) -> bool {
        self.hs != UNDEF
    }

    pub fn to_array(&self) -> [f64; 15] {
        [
            self.hs,
            self.tp,
            self.lp,
            self.dir_mean,
            self.dir_spread,
            self.wind_sea_fraction,
            self.dir_peak,
            self.spectral_width,
            self.peak_enhancement,
            self.peakedness,
            self.freq_spread,
            self.energy_period,
            self.mean_period,
            self.zero_crossing_period,
            self.peak_density,
        ]
    }
}

/// 수학 좌표계 방향 성분 → 오는 방향 나침반 각도 [0, 360)
pub fn compass_direction(sum_y: f64, sum_x: f64) -> f64 {
    (630.0 - sum_y.atan2(sum_x).to_degrees()).rem_euclid(360.0)
}

fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        UNDEF
    } else {
        numerator / denominator
    }
}

/// 한 파티션의 파라미터 계산
///
/// 유의파고가 `min_hs` 미만이거나 에너지가 없으면 `None`.
/// 미달 파티션을 센티넬 행으로 남길지는 호출자(분할 방법)가 정한다.
pub fn compute_parameters(
    grid: &GridModel,
    sums: &PartitionRowSums,
    moments: &PartitionMoments,
    wavenumbers: &[f64],
    min_hs: f64,
) -> Option<PartitionParameters> {
    let m0 = moments.m0;
    let hs = 4.0 * m0.max(0.0).sqrt();
    if hs < min_hs || m0 <= 0.0 {
        return None;
    }

    let dth = grid.dth();
    let kp = moments.peak_index;
    let sigma_p = grid.sigma()[kp];
    let fp = sigma_p / (2.0 * PI);
    let energy = sums.resolved_energy();

    let lp = match wavenumbers.get(kp) {
        Some(&k) if k > 0.0 => 2.0 * PI / k,
        _ => UNDEF,
    };

    let resultant = (moments.ex.powi(2) + moments.ey.powi(2)) / (m0 * m0);
    let dir_spread = (2.0 * (1.0 - resultant.max(0.0).sqrt())).max(0.0).sqrt().to_degrees();

    let spectral_width = if moments.m1 == 0.0 {
        UNDEF
    } else {
        ((m0 * moments.m2 / (moments.m1 * moments.m1)).max(1.0) - 1.0).sqrt()
    };

    let peak_density = refine_peak_energy(energy, kp) * dth;
    // 같은 Hs, fp 의 Pierson-Moskowitz 첨두 밀도 대비
    let pm_density = 5.0 / 16.0 * hs * hs / fp * (-1.25f64).exp();

    let zero_crossing_period = if moments.m2 == 0.0 {
        UNDEF
    } else {
        (m0 / moments.m2).max(0.0).sqrt()
    };

    Some(PartitionParameters {
        hs,
        tp: 1.0 / fp,
        lp,
        dir_mean: compass_direction(moments.ey, moments.ex),
        dir_spread,
        wind_sea_fraction: (moments.ew / m0).clamp(0.0, 1.0),
        dir_peak: compass_direction(sums.ey[kp], sums.ex[kp]),
        spectral_width,
        peak_enhancement: peak_density / pm_density,
        peakedness: 2.0 * moments.qp / (m0 * m0),
        freq_spread: frequency_spread(energy, grid.sigma(), sigma_p, dth),
        energy_period: moments.m_minus1 / m0,
        mean_period: ratio(m0, moments.m1),
        zero_crossing_period,
        peak_density,
    })
}
