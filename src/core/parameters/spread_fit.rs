//! 가우시안 주파수 폭 가중 최소제곱 적합
//!
//! ln S(f) = a − (f − fp)² / (2s²) 에서 x = −½(f − fp)² 에 대한 기울기 b = 1/s².
//! 가중치는 S 자신이다.

use std::f64::consts::PI;

use crate::core::systems::config::UNDEF;

/// 적합에 쓰는 최소 에너지
const MIN_FIT_ENERGY: f64 = 1e-15;

/// 주파수 폭 s (Hz). 적합이 불가능하면 `UNDEF`
///
/// `energy` 는 해상된 행의 Σ E, `sigma` 는 대응 각주파수.
pub fn frequency_spread(energy: &[f64], sigma: &[f64], peak_sigma: f64, dth: f64) -> f64 {
    let mut count = 0usize;
    let (mut sw, mut swx, mut swy, mut swxx, mut swxy) = (0.0, 0.0, 0.0, 0.0, 0.0);

    for (&e, &s) in energy.iter().zip(sigma) {
        let density = e * dth;
        if density < MIN_FIT_ENERGY {
            continue;
        }
        let x = -0.5 * ((s - peak_sigma) / (2.0 * PI)).powi(2);
        let y = density.ln();
        sw += density;
        swx += density * x;
        swy += density * y;
        swxx += density * x * x;
        swxy += density * x * y;
        count += 1;
    }

    let denom = sw * swxx - swx * swx;
    if count < 2 || denom == 0.0 {
        return UNDEF;
    }

    let slope = (sw * swxy - swx * swy) / denom;
    if slope > 0.0 {
        1.0 / slope.sqrt()
    } else {
        UNDEF
    }
}
