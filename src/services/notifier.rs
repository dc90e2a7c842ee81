//! 提示服务 - 业务能力层
//!
//! 只负责把提示交给用户，不关心提示从哪个流程来

use std::fmt;
use std::sync::Mutex;
use tracing::{debug, warn};

/// 面向用户的提示
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// 已有操作在进行中
    Busy,

    FetchFailed,
    FetchError(String),

    MissingInsertFields,
    Inserted,
    DuplicateAccount,
    InsertError(String),

    MissingUpdateFields,
    Updated,
    UpdateError(String),

    MissingDeleteId,
    Deleted,
    DeleteError(String),

    MissingSearchId,
    StudentNotFound,
    SearchError(String),

    /// 修改 / 删除时 404
    UserNotFound,
    /// 无法识别的业务码
    ServerError,
}

impl Notice {
    /// 是否属于失败类提示
    pub fn is_failure(&self) -> bool {
        !matches!(self, Notice::Inserted | Notice::Updated | Notice::Deleted)
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Busy => write!(f, "處理中，請稍候"),
            Notice::FetchFailed => write!(f, "獲取學生列表失敗"),
            Notice::FetchError(e) => write!(f, "獲取學生列表時發生錯誤：{}", e),
            Notice::MissingInsertFields => write!(f, "請完整填寫所有欄位"),
            Notice::Inserted => write!(f, "新增成功"),
            Notice::DuplicateAccount => write!(f, "重複的使用者帳號"),
            Notice::InsertError(e) => write!(f, "新增時發生錯誤：{}", e),
            Notice::MissingUpdateFields => write!(f, "請輸入完整的修改資料"),
            Notice::Updated => write!(f, "更新成功"),
            Notice::UpdateError(e) => write!(f, "更新時發生錯誤：{}", e),
            Notice::MissingDeleteId => write!(f, "請輸入刪除的 ID"),
            Notice::Deleted => write!(f, "刪除成功"),
            Notice::DeleteError(e) => write!(f, "刪除出錯：{}", e),
            Notice::MissingSearchId => write!(f, "請輸入查詢的 ID"),
            Notice::StudentNotFound => write!(f, "找不到該學生"),
            Notice::SearchError(e) => write!(f, "查詢時發生錯誤：{}", e),
            Notice::UserNotFound => write!(f, "找不到使用者"),
            Notice::ServerError => write!(f, "伺服器錯誤"),
        }
    }
}

/// 提示输出能力
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// 终端提示：直接打印给用户
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: Notice) {
        if notice.is_failure() {
            warn!("提示: {:?}", notice);
        } else {
            debug!("提示: {:?}", notice);
        }
        println!("【提示】{}", notice);
    }
}

/// 记录所有提示，便于断言
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn last(&self) -> Option<Notice> {
        self.notices().last().cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(notice);
    }
}
