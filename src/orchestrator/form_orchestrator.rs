//! 表单编排器
//!
//! 每个操作的顺序固定为：校验 → 取得忙碌凭证 → 等待网络 → 更新状态 → 释放凭证。
//! 状态锁只在不跨 await 的短临界区内持有，操作之间的互斥由 [`BusyToken`] 保证。

use crate::clients::StudentApi;
use crate::models::{FormBuffer, FormField, StudentRecord};
use crate::services::{BusyFlag, BusyToken, Notice, Notifier, Outcome};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};

/// 一次操作的结束方式
#[derive(Debug, Clone, PartialEq)]
pub enum Completion<T> {
    /// 已有操作在进行，直接拒绝，没有发出请求
    Busy,
    /// 必填字段为空，没有发出请求
    Invalid,
    /// 请求已完成
    Finished(Outcome<T>),
}

impl<T> Completion<T> {
    pub fn outcome(&self) -> Option<&Outcome<T>> {
        match self {
            Completion::Finished(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.outcome().is_some_and(Outcome::is_success)
    }
}

/// 编排器持有的可变状态
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    /// 最近一次成功查询到的完整列表
    pub students: Vec<StudentRecord>,
    pub form: FormBuffer,
    /// 查询结果（至多一条）
    pub searched: Option<StudentRecord>,
}

/// 表单编排器
pub struct FormOrchestrator {
    api: Arc<dyn StudentApi>,
    notifier: Arc<dyn Notifier>,
    busy: BusyFlag,
    mounted: AtomicBool,
    state: Mutex<FormState>,
}

impl FormOrchestrator {
    pub fn new(api: Arc<dyn StudentApi>, notifier: Arc<dyn Notifier>) -> Self {
        Self::with_busy_flag(api, notifier, BusyFlag::new())
    }

    /// 使用外部提供的忙碌标志创建编排器
    ///
    /// 前端可以持有同一个 [`BusyFlag`] 的克隆，用来禁用输入或显示加载状态。
    ///
    /// # 参数
    /// - `api`: 学生 API 客户端
    /// - `notifier`: 用户提示的输出端
    /// - `busy`: 与外部共享的忙碌标志
    pub fn with_busy_flag(
        api: Arc<dyn StudentApi>,
        notifier: Arc<dyn Notifier>,
        busy: BusyFlag,
    ) -> Self {
        Self {
            api,
            notifier,
            busy,
            mounted: AtomicBool::new(false),
            state: Mutex::new(FormState::default()),
        }
    }

    // ========== 状态读取 ==========

    pub fn is_busy(&self) -> bool {
        self.busy.is_busy()
    }

    /// 返回共享的忙碌标志
    pub fn busy_flag(&self) -> BusyFlag {
        self.busy.clone()
    }

    pub async fn students(&self) -> Vec<StudentRecord> {
        self.state.lock().await.students.clone()
    }

    pub async fn searched(&self) -> Option<StudentRecord> {
        self.state.lock().await.searched.clone()
    }

    pub async fn form(&self) -> FormBuffer {
        self.state.lock().await.form.clone()
    }

    pub async fn snapshot(&self) -> FormState {
        self.state.lock().await.clone()
    }

    /// 修改一个表单字段；忙碌时输入被禁用
    pub async fn edit(&self, field: FormField, value: impl Into<String>) -> bool {
        if self.busy.is_busy() {
            self.notifier.notify(Notice::Busy);
            return false;
        }
        self.state.lock().await.form.set(field, value);
        true
    }

    // ========== 操作 ==========

    /// 首次挂载时拉取一次列表，之后调用不再请求
    ///
    /// 只有取得忙碌凭证后才算挂载；挂载时恰好忙碌会返回 `Some(Busy)`，
    /// 下次调用仍会拉取。
    ///
    /// # 返回
    /// 已挂载过返回 `None`，否则返回本次拉取的结果
    pub async fn mount(&self) -> Option<Completion<usize>> {
        if self.mounted.load(Ordering::Acquire) {
            return None;
        }
        let Some(token) = self.acquire() else {
            return Some(Completion::Busy);
        };
        if self.mounted.swap(true, Ordering::AcqRel) {
            return None;
        }
        Some(Completion::Finished(self.refresh(&token).await))
    }

    /// 拉取完整列表并整体替换本地列表
    pub async fn fetch_all(&self) -> Completion<usize> {
        let Some(token) = self.acquire() else {
            return Completion::Busy;
        };
        Completion::Finished(self.refresh(&token).await)
    }

    /// 新增学生
    pub async fn insert(&self) -> Completion<()> {
        let payload = self.state.lock().await.form.insert_payload();
        let Some(payload) = payload else {
            self.notifier.notify(Notice::MissingInsertFields);
            return Completion::Invalid;
        };
        let Some(token) = self.acquire() else {
            return Completion::Busy;
        };

        info!("➕ 新增学生: {}", payload.user_name);
        let outcome = Outcome::from_response(self.api.insert_one(&payload).await);

        match &outcome {
            Outcome::Success(_) => {
                info!("✓ 新增成功: {}", payload.user_name);
                self.notifier.notify(Notice::Inserted);
                self.refresh(&token).await;
                self.state.lock().await.form.clear_insert();
            }
            Outcome::Conflict => {
                warn!("⚠️ 帐号重复: {}", payload.user_name);
                self.notifier.notify(Notice::DuplicateAccount);
            }
            Outcome::NotFound | Outcome::ServerError { .. } => {
                warn!("⚠️ 新增失败: {:?}", outcome);
                self.notifier.notify(Notice::ServerError);
            }
            Outcome::TransportError(detail) => {
                warn!("❌ 新增出错: {}", detail);
                self.notifier.notify(Notice::InsertError(detail.clone()));
            }
        }

        Completion::Finished(outcome.map(|_| ()))
    }

    /// 按 ID 修改姓名
    pub async fn update(&self) -> Completion<()> {
        let payload = self.state.lock().await.form.update_payload();
        let Some(payload) = payload else {
            self.notifier.notify(Notice::MissingUpdateFields);
            return Completion::Invalid;
        };
        let Some(token) = self.acquire() else {
            return Completion::Busy;
        };

        info!("✏️ 修改学生 {} 的姓名", payload.id);
        let outcome = Outcome::from_response(self.api.update_name(&payload).await);

        match &outcome {
            Outcome::Success(_) => {
                info!("✓ 更新成功: {}", payload.id);
                self.notifier.notify(Notice::Updated);
                self.refresh(&token).await;
                self.state.lock().await.form.clear_update();
            }
            Outcome::NotFound => {
                warn!("⚠️ 找不到学生: {}", payload.id);
                self.notifier.notify(Notice::UserNotFound);
            }
            Outcome::Conflict | Outcome::ServerError { .. } => {
                warn!("⚠️ 更新失败: {:?}", outcome);
                self.notifier.notify(Notice::ServerError);
            }
            Outcome::TransportError(detail) => {
                warn!("❌ 更新出错: {}", detail);
                self.notifier.notify(Notice::UpdateError(detail.clone()));
            }
        }

        Completion::Finished(outcome.map(|_| ()))
    }

    /// 按 ID 删除
    pub async fn delete(&self) -> Completion<()> {
        let id = self.state.lock().await.form.delete_target();
        let Some(id) = id else {
            self.notifier.notify(Notice::MissingDeleteId);
            return Completion::Invalid;
        };
        let Some(token) = self.acquire() else {
            return Completion::Busy;
        };

        info!("🗑️ 删除学生: {}", id);
        let outcome = Outcome::from_response(self.api.delete_by_id(&id).await);

        match &outcome {
            Outcome::Success(_) => {
                info!("✓ 删除成功: {}", id);
                self.notifier.notify(Notice::Deleted);
                self.refresh(&token).await;
                self.state.lock().await.form.clear_delete();
            }
            Outcome::NotFound => {
                warn!("⚠️ 找不到学生: {}", id);
                self.notifier.notify(Notice::UserNotFound);
            }
            Outcome::Conflict | Outcome::ServerError { .. } => {
                warn!("⚠️ 删除失败: {:?}", outcome);
                self.notifier.notify(Notice::ServerError);
            }
            Outcome::TransportError(detail) => {
                warn!("❌ 删除出错: {}", detail);
                self.notifier.notify(Notice::DeleteError(detail.clone()));
            }
        }

        Completion::Finished(outcome.map(|_| ()))
    }

    /// 按 ID 查询
    ///
    /// 总是重新拉取完整列表，不复用本地列表；本地列表也不会被替换。
    /// `Success(None)` 表示列表中没有该 ID。
    pub async fn search(&self) -> Completion<Option<StudentRecord>> {
        let id = self.state.lock().await.form.search_target();
        let Some(id) = id else {
            self.notifier.notify(Notice::MissingSearchId);
            return Completion::Invalid;
        };
        let Some(_token) = self.acquire() else {
            return Completion::Busy;
        };

        info!("🔍 查询学生: {}", id);
        let outcome = Outcome::from_response(self.api.find_all().await)
            .map(|students| students.into_iter().find(|s| s.id == id));

        match &outcome {
            Outcome::Success(Some(found)) => {
                info!("✓ 找到学生: {} ({})", found.id, found.name);
                self.state.lock().await.searched = Some(found.clone());
            }
            Outcome::Success(None) => {
                warn!("⚠️ 列表中没有该学生: {}", id);
                self.notifier.notify(Notice::StudentNotFound);
                self.state.lock().await.searched = None;
            }
            Outcome::NotFound | Outcome::Conflict | Outcome::ServerError { .. } => {
                warn!("⚠️ 查询失败: {:?}", outcome);
                self.notifier.notify(Notice::ServerError);
            }
            Outcome::TransportError(detail) => {
                warn!("❌ 查询出错: {}", detail);
                self.notifier.notify(Notice::SearchError(detail.clone()));
            }
        }

        Completion::Finished(outcome)
    }

    // ========== 内部方法 ==========

    fn acquire(&self) -> Option<BusyToken> {
        let token = self.busy.try_acquire();
        if token.is_none() {
            warn!("⚠️ 已有操作在进行中，忽略本次请求");
            self.notifier.notify(Notice::Busy);
        }
        token
    }

    /// 拉取列表；调用方必须已持有忙碌凭证
    async fn refresh(&self, _token: &BusyToken) -> Outcome<usize> {
        let outcome = Outcome::from_response(self.api.find_all().await);

        match outcome {
            Outcome::Success(students) => {
                let count = students.len();
                self.state.lock().await.students = students;
                info!("✓ 学生列表已刷新，共 {} 条", count);
                Outcome::Success(count)
            }
            Outcome::TransportError(detail) => {
                warn!("❌ 获取学生列表出错: {}", detail);
                self.notifier.notify(Notice::FetchError(detail.clone()));
                Outcome::TransportError(detail)
            }
            other => {
                warn!("⚠️ 获取学生列表失败: {:?}", other);
                self.notifier.notify(Notice::FetchFailed);
                other.map(|students| students.len())
            }
        }
    }
}
