//! 周期处理上下文
//!
//! 封装"我正在生成第几份表单、写到哪里"这一信息

use std::fmt::Display;
use std::path::PathBuf;

/// 周期处理上下文
///
/// 包含处理单个生成周期所需的所有上下文信息
#[derive(Debug, Clone)]
pub struct CycleCtx {
    /// 周期索引（从1开始，仅用于日志和文件命名）
    pub cycle_index: usize,

    /// 模板路径
    pub template_path: PathBuf,

    /// 本周期写出的 PDF 路径
    pub output_pdf_path: PathBuf,
}

impl CycleCtx {
    /// 创建新的周期上下文
    pub fn new(cycle_index: usize, template_path: PathBuf, output_pdf_path: PathBuf) -> Self {
        Self {
            cycle_index,
            template_path,
            output_pdf_path,
        }
    }

    /// 输出 PDF 的文件名（CSV 的 File_name 列用）
    pub fn pdf_file_name(&self) -> String {
        self.output_pdf_path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .into_owned()
    }
}

impl Display for CycleCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[表单 #{} → {}]",
            self.cycle_index,
            self.output_pdf_path.display()
        )
    }
}
