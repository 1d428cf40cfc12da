// 远程调用错误类型定义
//
// 任何失败的 HTTP 调用（网络错误、非 2xx 状态、超时、响应无法解析）
// 都统一为 RemoteError，由状态层记录并展示。

use thiserror::Error;

/// 远程服务调用失败
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}{message}", status_prefix(.status))]
pub struct RemoteError {
    /// HTTP 状态码（网络层失败时为空）
    pub status: Option<u16>,
    pub message: String,
}

impl RemoteError {
    pub fn new(status: Option<u16>, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// 非 2xx 响应
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::new(Some(status), message)
    }

    /// 网络层失败，没有状态码
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(None, message)
    }

    pub fn timeout() -> Self {
        Self::network("request timed out")
    }

    pub fn is_timeout(&self) -> bool {
        self.status.is_none() && self.message == "request timed out"
    }
}

fn status_prefix(status: &Option<u16>) -> String {
    match status {
        Some(code) => format!("HTTP {}: ", code),
        None => String::new(),
    }
}

// 实现从 reqwest::Error 到 RemoteError 的转换
impl From<reqwest::Error> for RemoteError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            RemoteError::timeout()
        } else if let Some(status) = err.status() {
            RemoteError::http(status.as_u16(), err.to_string())
        } else if err.is_decode() {
            RemoteError::network(format!("invalid response body: {}", err))
        } else {
            RemoteError::network(err.to_string())
        }
    }
}
