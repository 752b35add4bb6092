//! # 레코드 입출력 모듈
//!
//! JSON 입력 레코드 ↔ 평가 입력, 파티션 표 → JSON

pub mod record;

pub use record::{load_record, save_table, table_to_json, SpectrumRecord};
