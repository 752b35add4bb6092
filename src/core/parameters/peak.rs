//! 첨두 보정

/// 이산 첨두 에너지의 포물선 보정
///
/// 첨두가 내부 행일 때만 양 이웃으로 포물선을 맞춘다. 분모가 정확히 0 이면
/// 보정하지 않는다.
pub fn refine_peak_energy(energy: &[f64], peak_index: usize) -> f64 {
    let peak = energy[peak_index];
    if peak_index == 0 || peak_index + 1 >= energy.len() {
        return peak;
    }

    let low = energy[peak_index - 1];
    let high = energy[peak_index + 1];
    let denom = low - 2.0 * peak + high;
    if denom == 0.0 {
        return peak;
    }
    peak - 0.125 * (low - high).powi(2) / denom
}
