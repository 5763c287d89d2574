use anyhow::Result;
use clap::Parser;
use pdf_form_filler::config::Config;
use pdf_form_filler::orchestrator::App;
use pdf_form_filler::utils::logging;
use std::path::PathBuf;

/// 批量生成填好的 PDF 表单和汇总 CSV
#[derive(Parser, Debug)]
#[command(name = "pdf_form_filler", version, about = "读取 PDF 模板字段，批量生成填好的表单和汇总 CSV")]
struct Cli {
    /// PDF 模板路径
    template: PathBuf,

    /// 生成的 PDF 输出目录
    output_dir: PathBuf,

    /// 汇总 CSV 输出路径
    csv_file: PathBuf,

    /// 生成的记录数量
    #[arg(long, default_value_t = 1)]
    num: usize,

    /// 固定随机种子（可复现生成结果）
    #[arg(long)]
    seed: Option<u64>,

    /// 字段角色配置文件（TOML，覆盖内置 f1040ez 布局）
    #[arg(long)]
    profile: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    logging::init();

    // 解析命令行并加载配置
    let cli = Cli::parse();
    let config = Config::new(
        cli.template,
        cli.output_dir,
        cli.csv_file,
        cli.num,
        cli.seed,
        cli.profile,
    );

    // 初始化并运行应用
    App::initialize(config).await?.run().await?;

    Ok(())
}
