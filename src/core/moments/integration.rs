//! 주파수 적분 → 스펙트럼 모멘트
//!
//! 내부 행은 중점 규칙(E·dσ), 꼬리 행은 σ^-n 꼬리를 마지막 빈의 상단
//! 경계부터 무한대까지 해석적으로 적분한 가중치를 쓴다.
//!
//! 꼬리 밀도 E(σ) = E_T·(σ/σ_T)^-n 에 대해
//! ∫_{σu}^∞ E σ^m dσ = E_T · σ_T^n · σu^(m+1-n) / (n-1-m)

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use super::accumulator::PartitionRowSums;
use crate::core::grid::GridModel;

const TPI: f64 = 2.0 * PI;

/// 꼬리 행 적분 가중치
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TailWeights {
    /// σ^-1 모멘트
    pub inverse: f64,
    /// 0차
    pub zeroth: f64,
    /// 1차
    pub first: f64,
    /// 2차
    pub second: f64,
    /// E²·σ 적분 (Goda Qp)
    pub squared: f64,
}

impl TailWeights {
    pub fn new(grid: &GridModel, tail_power: f64) -> Self {
        let n = tail_power;
        let sigma_t = grid.tail_sigma();
        let sigma_u = grid.upper_edge();
        let weight = |m: f64| sigma_t.powf(n) * sigma_u.powf(m + 1.0 - n) / (n - 1.0 - m);

        Self {
            inverse: weight(-1.0),
            zeroth: weight(0.0),
            first: weight(1.0),
            second: weight(2.0),
            squared: sigma_t.powf(2.0 * n) * sigma_u.powf(2.0 - 2.0 * n) / (2.0 * n - 2.0),
        }
    }
}

/// 한 파티션의 스펙트럼 모멘트
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PartitionMoments {
    /// 0차 모멘트 (m²)
    pub m0: f64,
    /// 1차 모멘트 (m²·Hz)
    pub m1: f64,
    /// 2차 모멘트 (m²·Hz²)
    pub m2: f64,
    /// -1차 모멘트 (m²·s)
    pub m_minus1: f64,
    /// ∫ f·S(f)² df
    pub qp: f64,
    /// 풍랑 가중 에너지 (m²)
    pub ew: f64,
    /// 동서 방향 성분 (m²)
    pub ex: f64,
    /// 남북 방향 성분 (m²)
    pub ey: f64,
    /// 이산 첨두 행
    pub peak_index: usize,
    /// 첨두 행의 Σ E
    pub peak_energy: f64,
}

/// 이산 첨두 탐색 (해상된 행만, 동률이면 첫 행)
pub fn discrete_peak(energy: &[f64]) -> (usize, f64) {
    energy
        .iter()
        .enumerate()
        .fold((0, f64::NEG_INFINITY), |(best_k, best_e), (k, &e)| {
            if e > best_e {
                (k, e)
            } else {
                (best_k, best_e)
            }
        })
}

/// 행별 누적합을 주파수 방향으로 적분
pub fn integrate(grid: &GridModel, sums: &PartitionRowSums, tail: &TailWeights) -> PartitionMoments {
    let nk = grid.nk();
    let (sigma, dsi) = (grid.sigma(), grid.dsi());

    let mut m0 = 0.0;
    let mut m1 = 0.0;
    let mut m2 = 0.0;
    let mut m_minus1 = 0.0;
    let mut qp = 0.0;
    let mut ew = 0.0;
    let mut ex = 0.0;
    let mut ey = 0.0;

    for ik in 0..nk {
        let e = sums.e[ik] * dsi[ik];
        m0 += e;
        m1 += e * sigma[ik];
        m2 += e * sigma[ik] * sigma[ik];
        m_minus1 += e / sigma[ik];
        qp += sums.e[ik] * e * sigma[ik];
        ew += sums.ew[ik] * dsi[ik];
        ex += sums.ex[ik] * dsi[ik];
        ey += sums.ey[ik] * dsi[ik];
    }

    let e_tail = sums.e[nk];
    m0 += e_tail * tail.zeroth;
    m1 += e_tail * tail.first;
    m2 += e_tail * tail.second;
    m_minus1 += e_tail * tail.inverse;
    qp += e_tail * e_tail * tail.squared;
    ew += sums.ew[nk] * tail.zeroth;
    ex += sums.ex[nk] * tail.zeroth;
    ey += sums.ey[nk] * tail.zeroth;

    // dσ/2π = df, σ/2π = f
    let dth = grid.dth();
    let scale = dth / TPI;
    let (peak_index, peak_energy) = discrete_peak(sums.resolved_energy());

    PartitionMoments {
        m0: m0 * scale,
        m1: m1 * scale / TPI,
        m2: m2 * scale / (TPI * TPI),
        m_minus1: m_minus1 * dth,
        qp: qp * scale * scale,
        ew: ew * scale,
        ex: ex * scale,
        ey: ey * scale,
        peak_index,
        peak_energy,
    }
}
