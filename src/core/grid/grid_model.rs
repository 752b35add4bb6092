//! 주파수 × 방향 격자 모델
//!
//! 기하급수 주파수 축(비율 XFR)과 등간격 방향 축, 그리고 대역폭과
//! 방향 코사인/사인 캐시를 한 번에 계산한다. 생성 후 불변이며
//! 같은 격자를 쓰는 평가들 사이에서 그대로 재사용할 수 있다.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use super::dispersion::wavenumber;
use crate::core::systems::error::{PartitionError, PartitionResult};

const TPI: f64 = 2.0 * PI;

/// 주파수/방향 격자
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridModel {
    nk: usize,
    nth: usize,
    xfr: f64,
    fr1: f64,
    /// 격자 아래 주파수 (첫 빈의 하단 경계 계산용)
    sigma_below: f64,
    /// 각주파수 (rad/s), 길이 nk + 1. 마지막 원소는 꼬리 주파수
    sigma: Vec<f64>,
    /// 빈 대역폭 (rad/s), 길이 nk
    dsi: Vec<f64>,
    /// 방향 (rad)
    theta: Vec<f64>,
    ecos: Vec<f64>,
    esin: Vec<f64>,
    dth: f64,
}

impl GridModel {
    /// 새로운 격자 생성
    ///
    /// `XFR ≤ 1.00001`, `FR1 < 1e-6`, `NK < 3`, `NTH < 1` 이면 `InvalidGridConfig`.
    pub fn new(nk: usize, nth: usize, xfr: f64, fr1: f64) -> PartitionResult<Self> {
        if nk < 3 {
            return Err(PartitionError::invalid_grid("NK", nk, "at least 3 frequencies required"));
        }
        if nth < 1 {
            return Err(PartitionError::invalid_grid("NTH", nth, "at least 1 direction required"));
        }
        if !(xfr > 1.00001) {
            return Err(PartitionError::invalid_grid("XFR", xfr, "frequency ratio must exceed 1.00001"));
        }
        if !(fr1 >= 1e-6) {
            return Err(PartitionError::invalid_grid("FR1", fr1, "first frequency must be at least 1e-6"));
        }

        let sigma_below = fr1 * TPI / xfr;
        let mut sigma = Vec::with_capacity(nk + 1);
        let mut current = sigma_below;
        for _ in 0..=nk {
            current *= xfr;
            sigma.push(current);
        }

        let band = 0.5 * (xfr - 1.0 / xfr);
        let dsi = sigma[..nk].iter().map(|s| s * band).collect();

        let dth = TPI / nth as f64;
        let theta: Vec<f64> = (0..nth).map(|j| j as f64 * dth).collect();
        let ecos = theta.iter().map(|t| t.cos()).collect();
        let esin = theta.iter().map(|t| t.sin()).collect();

        Ok(Self {
            nk,
            nth,
            xfr,
            fr1,
            sigma_below,
            sigma,
            dsi,
            theta,
            ecos,
            esin,
            dth,
        })
    }

    /// 주파수 개수
    pub fn nk(&self) -> usize {
        self.nk
    }

    /// 방향 개수
    pub fn nth(&self) -> usize {
        self.nth
    }

    pub fn xfr(&self) -> f64 {
        self.xfr
    }

    pub fn fr1(&self) -> f64 {
        self.fr1
    }

    /// 방향 간격 (rad)
    pub fn dth(&self) -> f64 {
        self.dth
    }

    /// 해상된 주파수 (rad/s), 길이 nk
    pub fn sigma(&self) -> &[f64] {
        &self.sigma[..self.nk]
    }

    /// 마지막 해상 주파수 다음의 꼬리 주파수
    pub fn tail_sigma(&self) -> f64 {
        self.sigma[self.nk]
    }

    /// 빈 대역폭 (rad/s)
    pub fn dsi(&self) -> &[f64] {
        &self.dsi
    }

    pub fn theta(&self) -> &[f64] {
        &self.theta
    }

    pub fn cos_theta(&self) -> &[f64] {
        &self.ecos
    }

    pub fn sin_theta(&self) -> &[f64] {
        &self.esin
    }

    /// 빈 `ik` 의 하단 경계 0.5·(σ[k-1] + σ[k])
    pub fn lower_edge(&self, ik: usize) -> f64 {
        let previous = if ik == 0 {
            self.sigma_below
        } else {
            self.sigma[ik - 1]
        };
        0.5 * (previous + self.sigma[ik])
    }

    /// 마지막 해상 빈의 상단 경계 (꼬리 적분 시작점)
    pub fn upper_edge(&self) -> f64 {
        self.lower_edge(self.nk)
    }

    /// 수심에 대한 각 주파수의 파수 (rad/m)
    pub fn wavenumbers(&self, depth: f64) -> Vec<f64> {
        self.sigma()
            .iter()
            .map(|&s| wavenumber(s, depth).0)
            .collect()
    }
}
