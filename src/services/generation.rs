// 请求代次跟踪
//
// 每次发起请求都领取一个递增的代次号，只有仍是最新代次的结果才能写回状态。
// 关闭（组件销毁）后所有未完成请求的结果都会被丢弃。

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio_util::sync::CancellationToken;

/// 一次请求的代次标记
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

#[derive(Debug, Default)]
pub struct RequestTracker {
    latest: AtomicU64,
    lifecycle: CancellationToken,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// 领取新代次，之前领取的代次随即失效
    pub fn issue(&self) -> RequestTicket {
        RequestTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// 使所有已领取的代次失效，不领取新的
    pub fn invalidate(&self) {
        self.latest.fetch_add(1, Ordering::SeqCst);
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        !self.lifecycle.is_cancelled() && self.latest.load(Ordering::SeqCst) == ticket.0
    }

    /// 关闭后不再接受任何结果
    pub fn close(&self) {
        self.lifecycle.cancel();
    }

    pub fn is_closed(&self) -> bool {
        self.lifecycle.is_cancelled()
    }

    /// 执行请求，关闭时立即放弃并返回 None
    pub async fn run<F: Future>(&self, request: F) -> Option<F::Output> {
        tokio::select! {
            _ = self.lifecycle.cancelled() => None,
            output = request => Some(output),
        }
    }
}
