//! 批量表单处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责批量生成周期的调度和收尾。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：启动前校验模板、准备输出目录、加载角色配置
//! 2. **并发控制**：使用 Semaphore 限制并发数量
//! 3. **分批处理**：将周期分批次处理，每批完成后再开始下一批
//! 4. **失败隔离**：单个周期失败只排除该周期，不中断批次，不重试
//! 5. **批次收尾**：有成功记录才写 CSV，空批次只告警
//! 6. **全局统计**：汇总所有周期的处理结果
//!
//! ## 设计特点
//!
//! - **顶层编排**：不处理单个周期的细节
//! - **向下委托**：委托 workflow::CycleFlow 处理单个周期
//! - **阻塞隔离**：PDF 读写是同步操作，放到 spawn_blocking 里跑

use crate::config::Config;
use crate::error::AppError;
use crate::models::load_profile_from_toml;
use crate::models::profile::FormProfile;
use crate::services::{BatchEntry, DataSampler, TableWriter};
use crate::utils::logging::init_log_file;
use crate::workflow::{CycleCtx, CycleFlow, CycleOutcome};
use anyhow::Result;
use std::fs;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{error, info, warn};

/// 应用主结构
pub struct App {
    config: Config,
    profile: FormProfile,
}

impl App {
    /// 初始化应用
    ///
    /// 配置错误（模板缺失、输出目录不可写、角色配置坏掉）
    /// 在这里终止，任何生成工作都不会开始
    pub async fn initialize(config: Config) -> Result<Self> {
        // 初始化日志文件
        init_log_file(&config.output_log_file)?;

        log_startup(&config);

        // 启动前校验
        if !config.template_path.is_file() {
            return Err(AppError::config_template_not_found(&config.template_path).into());
        }

        fs::create_dir_all(&config.output_dir)
            .map_err(|e| AppError::config_output_dir_create_failed(&config.output_dir, e))?;

        // 加载角色配置（未指定时用内置 f1040ez 布局）
        let profile = match &config.profile_path {
            Some(path) => load_profile_from_toml(path)
                .await
                .map_err(|e| AppError::config_profile_load_failed(path, e))?,
            None => FormProfile::default(),
        };

        Ok(Self { config, profile })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<()> {
        let (batch, stats) = self.process_all_cycles().await?;

        // 批次收尾：有成功记录才写 CSV
        if batch.is_empty() {
            warn!("⚠️ 没有成功生成任何记录，CSV 不会写出");
        } else {
            match TableWriter::new().write(&self.config.csv_path, &batch) {
                Ok(_) => info!("✓ CSV 已保存: {}", self.config.csv_path.display()),
                Err(e) => error!("❌ CSV 写出失败: {}", e),
            }
        }

        // 输出最终统计
        print_final_stats(&stats, &self.config);

        Ok(())
    }

    /// 处理所有周期
    async fn process_all_cycles(&self) -> Result<(Vec<BatchEntry>, ProcessingStats)> {
        let total_cycles = self.config.num_records;
        let max_concurrent = self.config.max_concurrent_cycles.max(1);

        let semaphore = Arc::new(Semaphore::new(max_concurrent));
        let mut batch = Vec::new();
        let mut stats = ProcessingStats {
            total: total_cycles,
            ..Default::default()
        };

        if total_cycles == 0 {
            warn!("⚠️ 请求的记录数为 0，没有可生成的表单");
            return Ok((batch, stats));
        }

        log_cycles_planned(total_cycles, max_concurrent);

        // 分批处理
        for batch_start in (0..total_cycles).step_by(max_concurrent) {
            let batch_end = (batch_start + max_concurrent).min(total_cycles);
            let batch_num = (batch_start / max_concurrent) + 1;
            let total_batches = (total_cycles + max_concurrent - 1) / max_concurrent;

            log_batch_start(batch_num, total_batches, batch_start + 1, batch_end, total_cycles);

            // 处理本批
            let batch_result = self
                .process_batch(batch_start + 1, batch_end, semaphore.clone(), &mut batch)
                .await?;

            stats.success += batch_result.success;
            stats.failed += batch_result.failed;

            log_batch_complete(batch_num, &batch_result);
        }

        Ok((batch, stats))
    }

    /// 处理单个批次（周期索引区间为 [first_cycle, last_cycle]，闭区间，1 起始）
    async fn process_batch(
        &self,
        first_cycle: usize,
        last_cycle: usize,
        semaphore: Arc<Semaphore>,
        batch: &mut Vec<BatchEntry>,
    ) -> Result<BatchResult> {
        let mut batch_handles = Vec::new();

        // 为本批创建并发任务
        for cycle_index in first_cycle..=last_cycle {
            let permit = semaphore.clone().acquire_owned().await?;

            let ctx = CycleCtx::new(
                cycle_index,
                self.config.template_path.clone(),
                self.config
                    .output_dir
                    .join(format!("form_{}.pdf", cycle_index)),
            );
            let file_name = ctx.pdf_file_name();

            let flow = CycleFlow::new(&self.config, self.profile.clone());

            // 固定种子时每个周期用 种子+周期索引 派生自己的序列
            let mut sampler = match self.config.seed {
                Some(seed) => DataSampler::from_seed(seed.wrapping_add(cycle_index as u64)),
                None => DataSampler::from_entropy(),
            };

            let handle = tokio::spawn(async move {
                let _permit = permit;
                // PDF 读写是同步阻塞操作，挪到阻塞线程池
                let joined =
                    tokio::task::spawn_blocking(move || flow.run(&ctx, &mut sampler)).await;

                match joined {
                    Ok(CycleOutcome::Generated(record)) => {
                        info!("[表单 {}] ✅ 生成成功", cycle_index);
                        Some(BatchEntry { file_name, record })
                    }
                    Ok(CycleOutcome::Failed(e)) => {
                        error!("[表单 {}] ❌ 生成失败: {}", cycle_index, e);
                        None
                    }
                    Err(e) => {
                        error!("[表单 {}] 任务执行失败: {}", cycle_index, e);
                        None
                    }
                }
            });
            batch_handles.push((cycle_index, handle));
        }

        // 等待本批所有任务完成
        let mut result = BatchResult::default();

        for (cycle_index, handle) in batch_handles {
            match handle.await {
                Ok(Some(entry)) => {
                    batch.push(entry);
                    result.success += 1;
                }
                Ok(None) => {
                    result.failed += 1;
                }
                Err(e) => {
                    error!("[表单 {}] 任务执行失败: {}", cycle_index, e);
                    result.failed += 1;
                }
            }
        }

        Ok(result)
    }
}

/// 处理统计
#[derive(Debug, Default)]
struct ProcessingStats {
    success: usize,
    failed: usize,
    total: usize,
}

/// 批次处理结果
#[derive(Debug, Default)]
struct BatchResult {
    success: usize,
    failed: usize,
}

// ========== 日志辅助函数 ==========

fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 批量表单生成模式");
    info!("📄 模板: {}", config.template_path.display());
    info!("📊 记录数: {} / 最大并发数: {}", config.num_records, config.max_concurrent_cycles);
    info!("{}", "=".repeat(60));
}

fn log_cycles_planned(total: usize, max_concurrent: usize) {
    info!("📋 将以每批 {} 个的方式生成 {} 份表单", max_concurrent, total);
    info!("💡 每批完成后再开始下一批\n");
}

fn log_batch_start(batch_num: usize, total_batches: usize, start: usize, end: usize, total: usize) {
    info!("\n{}", "=".repeat(60));
    info!("📦 开始处理第 {}/{} 批", batch_num, total_batches);
    info!("📄 本批表单: {}-{} / 共 {} 个", start, end, total);
    info!("{}", "=".repeat(60));
}

fn log_batch_complete(batch_num: usize, result: &BatchResult) {
    info!("\n{}", "─".repeat(60));
    info!(
        "✓ 第 {} 批完成: 成功 {}/{}",
        batch_num,
        result.success,
        result.success + result.failed
    );
    info!("{}", "─".repeat(60));
}

fn print_final_stats(stats: &ProcessingStats, config: &Config) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 成功: {}/{}", stats.success, stats.total);
    info!("❌ 失败: {}", stats.failed);
    info!("{}", "=".repeat(60));
    info!("\n日志已保存至: {}", config.output_log_file);
}
