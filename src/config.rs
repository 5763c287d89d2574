use crate::models::money::Money;
use crate::services::record_generator::TaxParams;
use std::path::PathBuf;

/// 程序配置
///
/// 路径和数量来自命令行，调优项可用环境变量覆盖
#[derive(Clone, Debug)]
pub struct Config {
    /// PDF 模板路径
    pub template_path: PathBuf,
    /// 生成的 PDF 输出目录
    pub output_dir: PathBuf,
    /// 汇总 CSV 输出路径
    pub csv_path: PathBuf,
    /// 生成的记录数量
    pub num_records: usize,
    /// 固定随机种子（可复现生成结果）
    pub seed: Option<u64>,
    /// 字段角色配置文件（TOML，覆盖内置 f1040ez 布局）
    pub profile_path: Option<PathBuf>,
    /// 同时处理的周期数量
    pub max_concurrent_cycles: usize,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 输出日志文件
    pub output_log_file: String,
    /// 税务参数
    pub tax: TaxParams,
}

impl Config {
    /// 由命令行参数构建，调优项从环境变量读取
    pub fn new(
        template_path: PathBuf,
        output_dir: PathBuf,
        csv_path: PathBuf,
        num_records: usize,
        seed: Option<u64>,
        profile_path: Option<PathBuf>,
    ) -> Self {
        let default_tax = TaxParams::default();
        Self {
            template_path,
            output_dir,
            csv_path,
            num_records,
            seed,
            profile_path,
            max_concurrent_cycles: std::env::var("MAX_CONCURRENT_CYCLES").ok().and_then(|v| v.parse().ok()).unwrap_or(8),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(false),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or("output.txt".to_string()),
            tax: TaxParams {
                standard_deduction: std::env::var("STANDARD_DEDUCTION").ok().and_then(|v| v.parse().ok()).map(Money::from_dollars).unwrap_or(default_tax.standard_deduction),
                tax_rate_percent: std::env::var("TAX_RATE_PERCENT").ok().and_then(|v| v.parse().ok()).unwrap_or(default_tax.tax_rate_percent),
            },
        }
    }
}
