//! 周期处理流程 - 流程层
//!
//! 核心职责：定义"一份表单"的完整生成流程
//!
//! 流程顺序：
//! 1. 提取字段 → 2. 角色绑定 → 3. 生成记录 → 4. 填表写出
//!
//! 任何一步失败都以带类型的结果返回，不靠异常吞掉

use tracing::info;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::profile::FormProfile;
use crate::models::record::Record;
use crate::services::{DataSampler, FieldExtractor, FormFiller, RecordGenerator};
use crate::workflow::cycle_ctx::CycleCtx;

/// 周期处理结果
///
/// 失败是显式的一等结果，编排层据此统计并排除该周期
#[derive(Debug)]
pub enum CycleOutcome {
    /// 生成成功，记录进入批次
    Generated(Record),
    /// 生成失败，周期被排除
    Failed(AppError),
}

/// 周期处理流程
///
/// - 编排完整的单周期生成流程
/// - 不持有任何文件资源
/// - 只依赖业务能力（services）
pub struct CycleFlow {
    field_extractor: FieldExtractor,
    record_generator: RecordGenerator,
    form_filler: FormFiller,
    profile: FormProfile,
    verbose_logging: bool,
}

impl CycleFlow {
    /// 创建新的周期处理流程
    pub fn new(config: &Config, profile: FormProfile) -> Self {
        Self {
            field_extractor: FieldExtractor::new(),
            record_generator: RecordGenerator::new(config.tax),
            form_filler: FormFiller::new(),
            profile,
            verbose_logging: config.verbose_logging,
        }
    }

    /// 执行一个完整周期
    pub fn run(&self, ctx: &CycleCtx, sampler: &mut DataSampler) -> CycleOutcome {
        match self.run_inner(ctx, sampler) {
            Ok(record) => CycleOutcome::Generated(record),
            Err(e) => CycleOutcome::Failed(e),
        }
    }

    fn run_inner(&self, ctx: &CycleCtx, sampler: &mut DataSampler) -> AppResult<Record> {
        // ========== 流程 1: 提取字段 ==========
        let fields = self.field_extractor.extract(&ctx.template_path)?;

        if self.verbose_logging {
            info!("[表单 {}] 提取到 {} 个字段", ctx.cycle_index, fields.len());
        }

        // ========== 流程 2: 角色绑定 ==========
        let binding = self.profile.resolve(&fields)?;

        // ========== 流程 3: 生成记录 ==========
        let record = self.record_generator.generate(&binding, sampler);

        // ========== 流程 4: 填表写出 ==========
        let filled = self
            .form_filler
            .fill(&ctx.template_path, &record, &ctx.output_pdf_path)?;

        info!(
            "[表单 {}] ✓ 已写出 {} (填入 {} 个字段)",
            ctx.cycle_index,
            ctx.output_pdf_path.display(),
            filled
        );

        Ok(record)
    }
}
