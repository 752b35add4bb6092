use std::f64::consts::PI;

use approx::assert_relative_eq;
use ndarray::Array2;

use crate::core::grid::GridModel;
use crate::core::moments::{accumulate_rows, integrate, PartitionRowSums, TailWeights};
use crate::core::parameters::{compass_direction, compute_parameters, PartitionParameters};
use crate::core::systems::config::UNDEF;

fn 전체_누적(grid: &GridModel, spectrum: &Array2<f64>) -> PartitionRowSums {
    let map = Array2::zeros(spectrum.dim());
    let cutoffs = vec![2.0 * grid.tail_sigma(); grid.nth()];
    accumulate_rows(grid, spectrum, &map, 0, &cutoffs, 5.0)
        .expect("누적 실패")
        .remove(0)
}

#[test]
fn 단일_빈_파라미터_테스트() -> anyhow::Result<()> {
    let grid = GridModel::new(25, 24, 1.1, 0.0418)?;
    let (k0, j0, energy) = (8, 3, 4.0);
    let mut spectrum = Array2::zeros((25, 24));
    spectrum[[k0, j0]] = energy;

    let sums = 전체_누적(&grid, &spectrum);
    let moments = integrate(&grid, &sums, &TailWeights::new(&grid, 5.0));
    let wavenumbers = grid.wavenumbers(1000.0);
    let params = compute_parameters(&grid, &sums, &moments, &wavenumbers, 0.0)
        .expect("파라미터가 정의되어야 함");

    let sigma = grid.sigma()[k0];
    let hs = 4.0 * (energy * grid.dsi()[k0] * grid.dth() / (2.0 * PI)).sqrt();
    let direction = compass_direction(grid.theta()[j0].sin(), grid.theta()[j0].cos());

    assert_relative_eq!(params.hs, hs, max_relative = 1e-12);
    assert_relative_eq!(params.tp, 2.0 * PI / sigma, max_relative = 1e-12);
    assert_relative_eq!(params.lp, 2.0 * PI / wavenumbers[k0], max_relative = 1e-12);
    assert_relative_eq!(params.dir_mean, direction, epsilon = 1e-9);
    assert_relative_eq!(params.dir_peak, direction, epsilon = 1e-9);
    assert!(params.dir_spread < 1e-4, "방향 분산 {}", params.dir_spread);
    assert!(params.spectral_width < 1e-6);
    assert_relative_eq!(params.mean_period, 2.0 * PI / sigma, max_relative = 1e-12);
    assert_relative_eq!(params.zero_crossing_period, 2.0 * PI / sigma, max_relative = 1e-12);
    assert_relative_eq!(params.energy_period, 2.0 * PI / sigma, max_relative = 1e-12);
    assert_relative_eq!(params.peak_density, energy * grid.dth(), max_relative = 1e-12);
    assert_eq!(params.freq_spread, UNDEF);
    assert_eq!(params.wind_sea_fraction, 0.0);
    Ok(())
}

#[test]
fn 최소_파고_미달이면_없음() -> anyhow::Result<()> {
    let grid = GridModel::new(10, 8, 1.1, 0.05)?;
    let mut spectrum = Array2::zeros((10, 8));
    spectrum[[4, 2]] = 1e-6;

    let sums = 전체_누적(&grid, &spectrum);
    let moments = integrate(&grid, &sums, &TailWeights::new(&grid, 5.0));
    let wavenumbers = grid.wavenumbers(100.0);

    assert!(compute_parameters(&grid, &sums, &moments, &wavenumbers, 0.05).is_none());
    // 에너지가 전혀 없으면 임계값 0 에서도 없음
    let zero = 전체_누적(&grid, &Array2::zeros((10, 8)));
    let zero_moments = integrate(&grid, &zero, &TailWeights::new(&grid, 5.0));
    assert!(compute_parameters(&grid, &zero, &zero_moments, &wavenumbers, 0.0).is_none());
    Ok(())
}

#[test]
fn 방향_분기선_근처도_범위_안() {
    let near_cut = [
        (-1e-12, -1.0),
        (1e-12, -1.0),
        (-0.0, -1.0),
        (0.0, 1.0),
        (-1.0, 1e-15),
        (1.0, -1e-15),
        (0.0, 0.0),
    ];
    for (y, x) in near_cut {
        let direction = compass_direction(y, x);
        println!("atan2({}, {}) → {:.6}°", y, x, direction);
        assert!((0.0..360.0).contains(&direction), "범위 밖: {}", direction);
    }
    // θ = 0 (동쪽으로 진행) → 서쪽(270°)에서 옴
    assert_relative_eq!(compass_direction(0.0, 1.0), 270.0);
    assert_relative_eq!(compass_direction(1.0, 0.0), 180.0);
}

#[test]
fn 피어슨_모스코비츠_스펙트럼_테스트() -> anyhow::Result<()> {
    let grid = GridModel::new(150, 1, 1.02, 0.03)?;
    let (hs, fp) = (2.0, grid.sigma()[40] / (2.0 * PI));
    let spectrum = Array2::from_shape_fn((150, 1), |(ik, _)| {
        let f = grid.sigma()[ik] / (2.0 * PI);
        let density = 5.0 / 16.0 * hs * hs * fp.powi(4) * f.powi(-5)
            * (-1.25 * (fp / f).powi(4)).exp();
        density / grid.dth()
    });

    let sums = 전체_누적(&grid, &spectrum);
    let moments = integrate(&grid, &sums, &TailWeights::new(&grid, 5.0));
    let params = compute_parameters(&grid, &sums, &moments, &grid.wavenumbers(500.0), 0.05)
        .expect("파라미터가 정의되어야 함");

    println!("Hs {:.4}, Tp {:.3}, γ {:.4}, Qp {:.4}", params.hs, params.tp, params.peak_enhancement, params.peakedness);
    assert_relative_eq!(params.hs, hs, max_relative = 0.01);
    assert_relative_eq!(params.tp, 1.0 / fp, max_relative = 1e-9);
    assert_relative_eq!(params.peak_enhancement, 1.0, max_relative = 0.03);
    assert!(params.spectral_width > 0.0);
    assert!(params.energy_period > params.mean_period);
    assert!(params.mean_period > params.zero_crossing_period);
    Ok(())
}

#[test]
fn 결측_행_구성_테스트() {
    let undefined = PartitionParameters::undefined();
    let values = undefined.to_array();

    assert!(!undefined.is_defined());
    assert_eq!(values[5], 0.0);
    assert_eq!(values.iter().filter(|&&v| v == UNDEF).count(), 14);
}
