//! # PDF Form Filler
//!
//! 一个用于批量生成填好的 PDF 表单的 Rust 应用程序：
//! 从模板读出 AcroForm 字段，按角色配置生成合成记录（含税额派生字段），
//! 每条记录写出一份 PDF，最后汇总成一份列名可读的 CSV
//!
//! ## 架构设计
//!
//! 本系统采用严格的四层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有稀缺资源（lopdf Document），只暴露能力
//! - `FormDocument` - 唯一的 Document owner，提供控件遍历 / 写值 / 保存能力
//! - `field_name` - `/T` 原始字节的解码与清洗
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单条记录
//! - `FieldExtractor` - 字段提取能力
//! - `DataSampler` / `RecordGenerator` - 抽样与记录生成能力
//! - `FormFiller` - 填表能力
//! - `TableWriter` - 写 CSV 能力
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一份表单"的完整生成流程
//! - `CycleCtx` - 上下文封装（周期索引 + 输入输出路径）
//! - `CycleFlow` - 流程编排（extract → bind → generate → fill）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 批量表单处理器，管理并发和统计
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod infrastructure;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use infrastructure::FormDocument;
pub use models::{FieldRole, FieldValue, FormProfile, Money, Record, RoleBinding};
pub use orchestrator::App;
pub use services::{
    BatchEntry, DataSampler, FieldExtractor, FormFiller, RecordGenerator, TableWriter, TaxParams,
};
pub use workflow::{CycleCtx, CycleFlow, CycleOutcome};
