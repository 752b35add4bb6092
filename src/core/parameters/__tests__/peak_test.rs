use crate::core::parameters::refine_peak_energy;

#[test]
fn 포물선_보정은_이산_최대값_이상() {
    let cases: [&[f64]; 3] = [&[1.0, 4.0, 3.0], &[3.0, 4.0, 1.0], &[0.5, 2.0, 1.9, 0.1]];
    for energy in cases {
        let refined = refine_peak_energy(energy, 1);
        println!("{:?} → {:.4}", energy, refined);
        assert!(refined >= energy[1]);
    }
    assert_eq!(refine_peak_energy(&[1.0, 4.0, 3.0], 1), 4.125);
}

#[test]
fn 대칭_첨두는_보정_없음() {
    assert_eq!(refine_peak_energy(&[1.0, 4.0, 1.0], 1), 4.0);
}

#[test]
fn 경계_첨두와_평탄_구간은_원래값() {
    assert_eq!(refine_peak_energy(&[5.0, 4.0, 1.0], 0), 5.0);
    assert_eq!(refine_peak_energy(&[1.0, 4.0, 5.0], 2), 5.0);
    // 분모가 정확히 0
    assert_eq!(refine_peak_energy(&[2.0, 2.0, 2.0], 1), 2.0);
}
