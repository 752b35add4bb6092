//! 선형 분산 관계
//!
//! Beji (2003) 의 개선된 Eckart 근사로 파수와 군속도를 반복 없이 계산

use crate::core::systems::config::GRAVITY;

/// kd 상한 (심해 근사로 전환)
const KD_MAX: f64 = 20.0;

/// 고유 각주파수 `sigma` (rad/s) 와 수심 `depth` (m) 에 대한 (파수 rad/m, 군속도 m/s)
///
/// 수심이 양수가 아니면 심해 관계 k = σ²/g 를 쓴다.
pub fn wavenumber(sigma: f64, depth: f64) -> (f64, f64) {
    if sigma <= 0.0 {
        return (0.0, 0.0);
    }
    if !(depth > 0.0) {
        let k = sigma * sigma / GRAVITY;
        return (k, 0.5 * sigma / k);
    }

    let kh0 = sigma * sigma * depth / GRAVITY;
    let denom = 1.55 + 1.3 * kh0 + 0.216 * kh0 * kh0;
    let kh = kh0 * (1.0 + kh0.powf(1.09) * (-denom.min(KD_MAX)).exp())
        / kh0.min(KD_MAX).tanh().sqrt();
    let k = kh / depth;
    let cg = 0.5 * (1.0 + 2.0 * kh / (2.0 * kh).min(KD_MAX).sinh()) * sigma / k;

    (k, cg)
}

/// 위상 속도 C = σ / k
pub fn phase_speed(sigma: f64, wavenumber: f64) -> f64 {
    if wavenumber > 0.0 {
        sigma / wavenumber
    } else {
        f64::INFINITY
    }
}
