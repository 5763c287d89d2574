//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责批量生成周期的调度和收尾，是整个系统的"指挥中心"。
//!
//! ## 模块划分
//!
//! ### `batch_processor` - 批量表单处理器
//! - 管理应用生命周期（初始化、运行、收尾）
//! - 启动前校验配置（模板、输出目录、角色配置）
//! - 控制并发数量（Semaphore）
//! - 隔离单周期失败，汇总全局统计
//! - 批次结束后写出 CSV
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (调度 N 个周期)
//!     ↓
//! workflow::CycleFlow (处理单个周期)
//!     ↓
//! services (能力层：extract / generate / fill / csv)
//!     ↓
//! infrastructure (基础设施：FormDocument / field_name)
//! ```
//!
//! ## 设计原则
//!
//! 1. **单一职责**：batch_processor 管批量，CycleFlow 管单个
//! 2. **失败隔离**：周期之间完全独立，无共享可变状态
//! 3. **向下依赖**：编排层 → workflow → services → infrastructure
//! 4. **无业务逻辑**：只做调度和统计，不做具体业务判断

pub mod batch_processor;

pub use batch_processor::App;
