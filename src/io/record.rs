//! JSON 스펙트럼 입력 레코드
//!
//! 파일/서비스 계층이 디코딩한 스펙트럼을 평가 입력으로 옮긴다.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::core::assembler::PartitionTable;
use crate::core::classifier::{MapClassifier, WindForcing};
use crate::core::grid::GridModel;
use crate::core::systems::{
    evaluate, evaluate_with, PartitionConfig, PartitionError, PartitionResult, SpectrumInput,
};

/// 한 지점/시각의 스펙트럼 입력 레코드
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpectrumRecord {
    pub nk: usize,
    pub nth: usize,
    /// 주파수 비율
    pub xfr: f64,
    /// 첫 주파수 (Hz)
    pub fr1: f64,
    /// E[k][j] (m²/Hz/rad)
    pub spectrum: Vec<Vec<f64>>,
    /// 주파수별 파수 (rad/m). 없으면 수심으로 계산
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wave_number: Option<Vec<f64>>,
    /// 풍속 (m/s)
    pub wind_speed: f64,
    /// 풍향 (도)
    pub wind_direction: f64,
    /// 수심 (m)
    pub depth: f64,
    /// 일반 방법용 파티션 맵. 있으면 파랑 연령 분류 대신 사용
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition_map: Option<Vec<Vec<usize>>>,
    /// 튜닝 상수 (누락 필드는 기본값)
    #[serde(flatten)]
    pub config: PartitionConfig,
}

fn to_array<T: Copy>(rows: &[Vec<T>], nk: usize, nth: usize, context: &str) -> PartitionResult<Array2<T>> {
    if rows.len() != nk {
        return Err(PartitionError::shape_mismatch(
            context,
            format!("{} rows", nk),
            format!("{} rows", rows.len()),
        ));
    }
    if let Some((ik, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != nth) {
        return Err(PartitionError::shape_mismatch(
            context,
            format!("{} columns in row {}", nth, ik),
            format!("{} columns", row.len()),
        ));
    }

    let flat: Vec<T> = rows.iter().flatten().copied().collect();
    Array2::from_shape_vec((nk, nth), flat)
        .map_err(|e| PartitionError::shape_mismatch(context, format!("{}x{}", nk, nth), e))
}

impl SpectrumRecord {
    /// 레코드의 격자
    pub fn grid(&self) -> PartitionResult<GridModel> {
        GridModel::new(self.nk, self.nth, self.xfr, self.fr1)
    }

    /// 평가 입력으로 변환
    pub fn to_input(&self) -> PartitionResult<SpectrumInput> {
        let spectrum = to_array(&self.spectrum, self.nk, self.nth, "spectrum")?;
        let mut input = SpectrumInput::new(
            spectrum,
            WindForcing::new(self.wind_speed, self.wind_direction),
            self.depth,
        );
        input.wavenumbers = self.wave_number.clone();
        Ok(input)
    }

    /// 레코드 전체 평가
    pub fn evaluate(&self) -> PartitionResult<PartitionTable> {
        let grid = self.grid()?;
        let input = self.to_input()?;
        match &self.partition_map {
            Some(rows) => {
                let map = to_array(rows, self.nk, self.nth, "partition map")?;
                evaluate_with(&grid, &input, &MapClassifier::new(map), &self.config)
            }
            None => evaluate(&grid, &input, &self.config),
        }
    }
}

/// JSON 레코드 파일 읽기
pub fn load_record<P: AsRef<Path>>(path: P) -> Result<SpectrumRecord> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read spectrum record {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("failed to parse spectrum record {}", path.display()))
}

/// 파티션 표를 JSON 으로 직렬화
pub fn table_to_json(table: &PartitionTable, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(table)?
    } else {
        serde_json::to_string(table)?
    };
    Ok(json)
}

/// 파티션 표를 JSON 파일로 저장
pub fn save_table<P: AsRef<Path>>(path: P, table: &PartitionTable, pretty: bool) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, table_to_json(table, pretty)?)
        .with_context(|| format!("failed to write partition table {}", path.display()))
}
