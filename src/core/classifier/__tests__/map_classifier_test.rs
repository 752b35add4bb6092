use ndarray::Array2;

use crate::core::classifier::{
    classify_spectrum, MapClassifier, PartitionClassifier, PartitionId, PartitionMethod,
};
use crate::core::grid::GridModel;
use crate::core::systems::error::PartitionError;

#[test]
fn 제공된_맵_그대로_사용_테스트() -> anyhow::Result<()> {
    let grid = GridModel::new(4, 3, 1.1, 0.05)?;
    let map = Array2::from_shape_fn((4, 3), |(ik, ith)| (ik + ith) % 4);
    let classifier = MapClassifier::new(map.clone());

    assert_eq!(classifier.partition_count(), 3);
    assert_eq!(classifier.method(), PartitionMethod::General);
    assert_eq!(classifier.classify(&grid, 1, 2), PartitionId::Indexed(3));
    assert_eq!(classify_spectrum(&grid, &classifier)?, map);
    Ok(())
}

#[test]
fn 맵_형상_불일치_거부_테스트() -> anyhow::Result<()> {
    let grid = GridModel::new(4, 3, 1.1, 0.05)?;
    let classifier = MapClassifier::new(Array2::zeros((3, 4)));

    let result = classify_spectrum(&grid, &classifier);
    assert!(matches!(result, Err(PartitionError::ShapeMismatch { .. })));
    Ok(())
}

#[test]
fn 과대_파티션_번호_거부_테스트() -> anyhow::Result<()> {
    let grid = GridModel::new(4, 3, 1.1, 0.05)?;
    let mut map = Array2::zeros((4, 3));
    map[[1, 0]] = usize::MAX;
    let classifier = MapClassifier::new(map);

    match classify_spectrum(&grid, &classifier) {
        Err(PartitionError::InvalidConfiguration { parameter, .. }) => {
            assert_eq!(parameter, "partition id")
        }
        other => panic!("InvalidConfiguration 기대, 결과 {:?}", other),
    }
    Ok(())
}

#[test]
fn 식별자_번호_변환_테스트() {
    assert_eq!(PartitionId::from_index(PartitionMethod::WaveAge, 0), PartitionId::FullSpectrum);
    assert_eq!(PartitionId::from_index(PartitionMethod::WaveAge, 1), PartitionId::WindSea);
    assert_eq!(PartitionId::from_index(PartitionMethod::WaveAge, 2), PartitionId::Swell);
    assert_eq!(PartitionId::from_index(PartitionMethod::General, 2), PartitionId::Indexed(2));
    assert_eq!(PartitionId::Indexed(5).index(), 5);
}
