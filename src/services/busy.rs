//! 忙碌标志 - 单飞保护
//!
//! 任何操作开始前必须拿到 [`BusyToken`]，token 被 drop 时标志自动清除，
//! 所以无论成功、失败还是提前返回，都不会残留忙碌状态。

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// 忙碌标志（可克隆，克隆体共享同一个标志）
#[derive(Debug, Clone, Default)]
pub struct BusyFlag {
    inner: Arc<AtomicBool>,
}

impl BusyFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// 尝试进入忙碌状态；已忙碌时返回 `None`，不排队
    pub fn try_acquire(&self) -> Option<BusyToken> {
        self.inner
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| BusyToken {
                flag: Arc::clone(&self.inner),
            })
    }

    pub fn is_busy(&self) -> bool {
        self.inner.load(Ordering::Acquire)
    }
}

/// 独占的忙碌凭证
#[derive(Debug)]
pub struct BusyToken {
    flag: Arc<AtomicBool>,
}

impl Drop for BusyToken {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
