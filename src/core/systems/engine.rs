//! # 스펙트럼 분할 평가
//!
//! 격자 → 분류 → 누적 → 모멘트/파라미터 → 조립 순서로 한 스펙트럼을 처리한다.
//! 평가마다 입력과 출력만 건드리므로 서로 다른 스펙트럼은 병렬로 돌릴 수 있다.

use log::{debug, trace, warn};
use ndarray::Array2;
use rayon::prelude::*;

use super::config::PartitionConfig;
use super::error::{PartitionError, PartitionResult};
use crate::core::assembler::{assemble, PartitionTable};
use crate::core::classifier::{
    classify_spectrum, wind_sea_cutoffs, PartitionClassifier, PartitionMap, WaveAgeClassifier,
    WindForcing,
};
use crate::core::grid::GridModel;
use crate::core::moments::{
    accumulate_rows, check_spectrum_shape, integrate, PartitionMoments, PartitionRowSums,
    TailWeights,
};
use crate::core::parameters::compute_parameters;

/// 한 스펙트럼 평가 입력
#[derive(Debug, Clone)]
pub struct SpectrumInput {
    /// 에너지 밀도 E[k][j] (NK × NTH)
    pub spectrum: Array2<f64>,
    /// 주파수별 파수. 없으면 수심으로 계산
    pub wavenumbers: Option<Vec<f64>>,
    pub wind: WindForcing,
    /// 수심 (m)
    pub depth: f64,
}

impl SpectrumInput {
    pub fn new(spectrum: Array2<f64>, wind: WindForcing, depth: f64) -> Self {
        Self {
            spectrum,
            wavenumbers: None,
            wind,
            depth,
        }
    }

    pub fn with_wavenumbers(mut self, wavenumbers: Vec<f64>) -> Self {
        self.wavenumbers = Some(wavenumbers);
        self
    }

    /// 파수 벡터 (제공값 또는 분산 관계)
    pub fn resolve_wavenumbers(&self, grid: &GridModel) -> Vec<f64> {
        self.wavenumbers
            .clone()
            .unwrap_or_else(|| grid.wavenumbers(self.depth))
    }
}

/// 중간 산출물까지 포함한 평가 결과
#[derive(Debug, Clone)]
pub struct PartitionEvaluation {
    pub map: PartitionMap,
    /// 파티션 0..=N 의 행별 누적합
    pub row_sums: Vec<PartitionRowSums>,
    /// 파티션 0..=N 의 모멘트
    pub moments: Vec<PartitionMoments>,
    pub table: PartitionTable,
}

/// 임의의 분류기로 평가하고 중간 산출물을 돌려준다
pub fn evaluate_detailed<C>(
    grid: &GridModel,
    input: &SpectrumInput,
    classifier: &C,
    config: &PartitionConfig,
) -> PartitionResult<PartitionEvaluation>
where
    C: PartitionClassifier + ?Sized,
{
    config.validate()?;
    check_spectrum_shape(grid, &input.spectrum)?;
    // 분류기가 파수를 들고 있으면 그것이 유일한 출처
    let wavenumbers = match classifier.wavenumbers() {
        Some(k) => k.to_vec(),
        None => input.resolve_wavenumbers(grid),
    };
    if wavenumbers.len() != grid.nk() {
        return Err(PartitionError::shape_mismatch(
            "wave numbers",
            grid.nk(),
            wavenumbers.len(),
        ));
    }

    let map = classify_spectrum(grid, classifier)?;
    let cutoffs = wind_sea_cutoffs(grid, &input.wind, config.wave_age_multiplier, &wavenumbers)?;
    let row_sums = accumulate_rows(
        grid,
        &input.spectrum,
        &map,
        classifier.partition_count(),
        &cutoffs,
        config.tail_power,
    )?;

    let tail = TailWeights::new(grid, config.tail_power);
    let moments: Vec<PartitionMoments> = row_sums
        .iter()
        .map(|sums| integrate(grid, sums, &tail))
        .collect();

    let mut parameters = row_sums.iter().zip(&moments).enumerate().map(|(ip, (sums, m))| {
        let params = compute_parameters(grid, sums, m, &wavenumbers, config.min_significant_height);
        trace!(
            "partition {}: m0 = {:.4e}, peak row {}, defined = {}",
            ip,
            m.m0,
            m.peak_index,
            params.is_some()
        );
        params
    });
    let total = parameters.next().flatten();
    let partitions: Vec<_> = parameters.collect();

    let table = assemble(classifier.method(), total, partitions, config.max_partitions);
    if let Some(signal) = table.capacity_error() {
        warn!("{}", signal);
    }
    debug!(
        "{:?} partitioning on {}x{} grid: {} rows, total hs = {:.3}",
        table.method,
        grid.nk(),
        grid.nth(),
        table.len(),
        table.total.hs
    );

    Ok(PartitionEvaluation {
        map,
        row_sums,
        moments,
        table,
    })
}

/// 임의의 분류기로 평가
pub fn evaluate_with<C>(
    grid: &GridModel,
    input: &SpectrumInput,
    classifier: &C,
    config: &PartitionConfig,
) -> PartitionResult<PartitionTable>
where
    C: PartitionClassifier + ?Sized,
{
    evaluate_detailed(grid, input, classifier, config).map(|evaluation| evaluation.table)
}

/// 입력의 바람으로 만든 파랑 연령 분류기
pub fn wave_age_classifier(
    grid: &GridModel,
    input: &SpectrumInput,
    config: &PartitionConfig,
) -> WaveAgeClassifier {
    WaveAgeClassifier::new(
        input.wind,
        config.wave_age_multiplier,
        input.resolve_wavenumbers(grid),
    )
}

/// 파랑 연령 방법으로 풍랑/너울 분할
pub fn evaluate(
    grid: &GridModel,
    input: &SpectrumInput,
    config: &PartitionConfig,
) -> PartitionResult<PartitionTable> {
    let classifier = wave_age_classifier(grid, input, config);
    evaluate_with(grid, input, &classifier, config)
}

/// 독립된 여러 스펙트럼을 병렬로 평가. 결과 순서는 입력 순서와 같다
pub fn evaluate_batch(
    grid: &GridModel,
    inputs: &[SpectrumInput],
    config: &PartitionConfig,
) -> Vec<PartitionResult<PartitionTable>> {
    inputs
        .par_iter()
        .map(|input| evaluate(grid, input, config))
        .collect()
}
