//! 填表服务 - 业务能力层
//!
//! 只负责"把一条记录写进一份 PDF"能力，不关心流程

use crate::error::{AppError, AppResult};
use crate::infrastructure::{FieldNameCleaner, FormDocument};
use crate::models::record::Record;
use std::path::Path;

/// 填表器
///
/// 职责：
/// - 打开模板，把记录里匹配上的字段写入 `/V`
/// - 没匹配上的控件保持原样
/// - 写出一份新 PDF，模板本身不动
pub struct FormFiller {
    cleaner: FieldNameCleaner,
}

impl FormFiller {
    /// 创建填表器
    pub fn new() -> Self {
        Self {
            cleaner: FieldNameCleaner::new(),
        }
    }

    /// 用记录填写模板，写出到目标路径
    ///
    /// 返回实际写入的字段数量
    pub fn fill(&self, template_path: &Path, record: &Record, output_path: &Path) -> AppResult<usize> {
        let mut doc = FormDocument::load(template_path)
            .map_err(|e| AppError::form_write_template_parse_failed(template_path, e))?;

        let widgets = doc.widget_fields()?;
        let mut filled = 0;

        for (annot_id, raw_name) in widgets {
            let field = self.cleaner.clean(&raw_name);
            if let Some(value) = record.get(&field) {
                if doc.set_field_value(annot_id, &value.to_string()) {
                    filled += 1;
                }
            }
        }

        doc.save(output_path)?;

        Ok(filled)
    }
}

impl Default for FormFiller {
    fn default() -> Self {
        Self::new()
    }
}
