//! # Student Form
//!
//! 学生资料表单：通过远程 HTTP API 新增、查询、修改、删除学生记录
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Clients）
//! - `clients/` - 持有 HTTP 客户端，只暴露"发请求、取信封"的能力
//! - `StudentApi` - 学生 API 能力接口，`HttpStudentClient` 为 reqwest 实现
//!
//! ### ② 业务能力层（Services）
//! - `BusyFlag` - 单飞保护，同一时间只允许一个操作
//! - `Outcome` - 远程调用结果分类
//! - `Notifier` - 用户提示
//!
//! ### ③ 编排层（Orchestration）
//! - `orchestrator/form_orchestrator` - 列表、表单、查询结果的唯一持有者
//!
//! ### ④ 前端（App）
//! - `app` - 终端命令解析与渲染
//!
//! ## 模块结构

pub mod app;
pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use app::App;
pub use clients::{HttpStudentClient, StudentApi};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{FormBuffer, FormField, StudentRecord};
pub use orchestrator::{Completion, FormOrchestrator};
pub use services::{Notice, Outcome};
