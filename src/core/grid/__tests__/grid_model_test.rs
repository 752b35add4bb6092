use std::f64::consts::PI;

use approx::assert_relative_eq;

use crate::core::grid::GridModel;
use crate::core::systems::error::PartitionError;

#[test]
fn 주파수_축_기하급수_생성_테스트() -> anyhow::Result<()> {
    let grid = GridModel::new(25, 24, 1.1, 0.04)?;

    assert_eq!(grid.sigma().len(), 25);
    assert_relative_eq!(grid.sigma()[0], 2.0 * PI * 0.04, max_relative = 1e-12);
    for k in 1..grid.nk() {
        assert_relative_eq!(grid.sigma()[k] / grid.sigma()[k - 1], 1.1, max_relative = 1e-12);
    }
    assert_relative_eq!(grid.tail_sigma(), grid.sigma()[24] * 1.1, max_relative = 1e-12);

    // dsi = σ · 0.5·(XFR − 1/XFR)
    for (s, d) in grid.sigma().iter().zip(grid.dsi()) {
        assert_relative_eq!(*d, s * 0.5 * (1.1 - 1.0 / 1.1), max_relative = 1e-12);
    }
    Ok(())
}

#[test]
fn 빈_경계와_대역폭_일치_테스트() -> anyhow::Result<()> {
    let grid = GridModel::new(10, 12, 1.07, 0.05)?;

    // 하단 경계 간격은 대역폭과 근사적으로 같고, 상단 경계는 꼬리 시작점
    for k in 0..grid.nk() - 1 {
        let width = grid.lower_edge(k + 1) - grid.lower_edge(k);
        assert_relative_eq!(width, grid.dsi()[k], max_relative = 0.01);
    }
    let last = grid.nk() - 1;
    assert_relative_eq!(
        grid.upper_edge(),
        0.5 * (grid.sigma()[last] + grid.tail_sigma()),
        max_relative = 1e-12
    );
    Ok(())
}

#[test]
fn 방향_축_캐시_테스트() -> anyhow::Result<()> {
    let grid = GridModel::new(5, 36, 1.1, 0.04)?;

    assert_relative_eq!(grid.dth(), 2.0 * PI / 36.0, max_relative = 1e-12);
    assert_eq!(grid.theta()[0], 0.0);
    assert_relative_eq!(grid.theta()[9], PI / 2.0, max_relative = 1e-12);
    assert_relative_eq!(grid.cos_theta()[18], -1.0, max_relative = 1e-12);
    assert_relative_eq!(grid.sin_theta()[9], 1.0, max_relative = 1e-12);
    Ok(())
}

#[test]
fn 잘못된_격자_설정_거부_테스트() {
    let cases = [
        GridModel::new(2, 24, 1.1, 0.04),
        GridModel::new(25, 0, 1.1, 0.04),
        GridModel::new(25, 24, 1.00001, 0.04),
        GridModel::new(25, 24, 1.1, 1e-7),
        GridModel::new(25, 24, f64::NAN, 0.04),
    ];

    for (i, result) in cases.into_iter().enumerate() {
        match result {
            Err(PartitionError::InvalidGridConfig { parameter, .. }) => {
                println!("케이스 {}: {} 거부됨", i, parameter);
            }
            other => panic!("케이스 {}: InvalidGridConfig 기대, 결과 {:?}", i, other),
        }
    }
}

#[test]
fn 수심별_파수_테스트() -> anyhow::Result<()> {
    let grid = GridModel::new(5, 8, 1.1, 0.05)?;

    let deep = grid.wavenumbers(5000.0);
    let shallow = grid.wavenumbers(5.0);
    for (k, s) in deep.iter().zip(grid.sigma()) {
        assert_relative_eq!(*k, s * s / 9.81, max_relative = 1e-6);
    }
    // 얕은 물에서는 같은 주파수의 파수가 더 크다
    for (ks, kd) in shallow.iter().zip(&deep) {
        assert!(ks > kd, "얕은 물 파수 {} <= 심해 파수 {}", ks, kd);
    }
    Ok(())
}
