//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 持有学生列表、表单缓冲区、查询结果和忙碌标志，
//! 把"校验 → 请求 → 更新状态 → 提示"串成一次完整操作。
//!
//! ## 层次关系
//!
//! ```text
//! app (终端前端：命令解析 / 渲染)
//!     ↓
//! orchestrator::FormOrchestrator (单次操作的编排)
//!     ↓
//! services (能力层：busy / outcome / notifier)
//!     ↓
//! clients (基础设施：StudentApi / HttpStudentClient)
//! ```

pub mod form_orchestrator;

pub use form_orchestrator::{Completion, FormOrchestrator, FormState};
