//! CSV 汇总服务 - 业务能力层
//!
//! 只负责"把一批记录写成 CSV"能力，不关心流程

use crate::error::{AppError, AppResult};
use crate::models::record::Record;
use std::path::Path;

/// 字段标识符 → 可读列名
///
/// 静态映射只覆盖 f1040ez 第一页的一部分字段，
/// 未覆盖的列保留原标识符
pub static COLUMN_LABELS: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "f1_10" => "firstname",
    "f1_20" => "lastname",
    "f1_30" => "ssn",
    "f1_60" => "adress",
    "f1_70" => "apt no",
    "f1_80" => "adress2",
    "f1_120" => "wages",
    "f1_140" => "interest",
    "f1_160" => "un-comp",
    "f1_180" => "gross",
    "f1_200" => "adjusted_gross_income",
    "f1_220" => "deduction",
    "f1_240" => "tax",
    "f1_260" => "total_payments",
    "f1_300" => "taxable-income",
    "f1_320" => "withheld",
    "f1_340" => "total_income",
    "f1_360" => "total-tax",
    "f1_380" => "refund",
    "f1_400" => "refund",
    "f1_410" => "amount_owed",
    "f1_420" => "owed",
    "f1_470" => "occupation",
    "f1_480" => "phone",
};

/// 批次中的一条成功结果
#[derive(Debug, Clone)]
pub struct BatchEntry {
    /// 该周期实际写出的 PDF 文件名
    pub file_name: String,
    /// 生成的记录
    pub record: Record,
}

/// CSV 汇总写出器
pub struct TableWriter;

impl TableWriter {
    /// 创建写出器
    pub fn new() -> Self {
        Self
    }

    /// 把批次写成 CSV
    ///
    /// 第一列是 File_name，其余列取第一条记录的列顺序；
    /// 个别记录缺失的列写空串
    pub fn write(&self, csv_path: &Path, batch: &[BatchEntry]) -> AppResult<()> {
        let first = match batch.first() {
            Some(entry) => entry,
            None => return Ok(()),
        };

        let mut writer = csv::Writer::from_path(csv_path)
            .map_err(|e| AppError::serialization_csv_failed(csv_path, e))?;

        let mut header = vec!["File_name".to_string()];
        header.extend(
            first
                .record
                .columns()
                .map(|column| COLUMN_LABELS.get(column).copied().unwrap_or(column).to_string()),
        );
        writer
            .write_record(&header)
            .map_err(|e| AppError::serialization_csv_failed(csv_path, e))?;

        for entry in batch {
            let mut row = vec![entry.file_name.clone()];
            row.extend(first.record.columns().map(|column| {
                entry
                    .record
                    .get(column)
                    .map(|value| value.to_string())
                    .unwrap_or_default()
            }));
            writer
                .write_record(&row)
                .map_err(|e| AppError::serialization_csv_failed(csv_path, e))?;
        }

        writer
            .flush()
            .map_err(|e| AppError::serialization_csv_failed(csv_path, e))?;

        Ok(())
    }
}

impl Default for TableWriter {
    fn default() -> Self {
        Self::new()
    }
}
