//! 字段提取服务 - 业务能力层
//!
//! 只负责"从模板读出字段标识符列表"能力，不关心流程

use crate::error::{AppError, AppResult};
use crate::infrastructure::{FieldNameCleaner, FormDocument};
use std::path::Path;

/// 字段提取器
///
/// 职责：
/// - 打开模板，收集第一页控件的字段标识符
/// - 保持注释列表中的出现顺序
/// - 名称解码和清洗委托给基础设施层
pub struct FieldExtractor {
    cleaner: FieldNameCleaner,
}

impl FieldExtractor {
    /// 创建字段提取器
    pub fn new() -> Self {
        Self {
            cleaner: FieldNameCleaner::new(),
        }
    }

    /// 提取模板的有序字段标识符列表
    pub fn extract(&self, template_path: &Path) -> AppResult<Vec<String>> {
        let doc = FormDocument::load(template_path)
            .map_err(|e| AppError::form_read_parse_failed(template_path, e))?;

        let fields = doc.widget_fields()?;

        Ok(fields
            .into_iter()
            .map(|(_, raw_name)| self.cleaner.clean(&raw_name))
            .collect())
    }
}

impl Default for FieldExtractor {
    fn default() -> Self {
        Self::new()
    }
}
