// 界面偏好（深色模式）
//
// 偏好以显式的上下文对象传递，读写能力通过 PreferenceStorage 注入，
// 不使用进程级全局变量。偏好只在单次会话内有效：初始化时清除已存储的值。

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::fs;
use tokio::sync::RwLock;

/// 偏好存储错误
#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON 序列化错误: {0}")]
    Json(#[from] serde_json::Error),
}

/// 偏好的持久化能力
#[async_trait]
pub trait PreferenceStorage: Send + Sync {
    async fn store(&self, dark_mode: bool) -> Result<(), PreferenceError>;

    async fn clear(&self) -> Result<(), PreferenceError>;
}

/// 界面主题
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// 根元素上需要添加的样式类
    pub fn css_class(&self) -> Option<&'static str> {
        match self {
            Theme::Light => None,
            Theme::Dark => Some("dark"),
        }
    }
}

/// 偏好上下文
pub struct Preferences {
    storage: Arc<dyn PreferenceStorage>,
    dark_mode: RwLock<bool>,
}

impl Preferences {
    /// 应用启动时调用：清除上次会话的值，默认浅色模式
    pub async fn initialize(storage: Arc<dyn PreferenceStorage>) -> Self {
        if let Err(e) = storage.clear().await {
            tracing::warn!("Failed to clear stored preferences: {}", e);
        }
        Self {
            storage,
            dark_mode: RwLock::new(false),
        }
    }

    pub async fn is_dark_mode(&self) -> bool {
        *self.dark_mode.read().await
    }

    pub async fn theme(&self) -> Theme {
        if self.is_dark_mode().await {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// 设置深色模式并写入存储
    ///
    /// 内存中的值总会更新；写入失败时返回错误，由调用方决定是否提示。
    pub async fn set_dark_mode(&self, enabled: bool) -> Result<(), PreferenceError> {
        *self.dark_mode.write().await = enabled;
        self.storage.store(enabled).await
    }

    /// 切换深色模式，返回切换后的值
    pub async fn toggle(&self) -> Result<bool, PreferenceError> {
        let enabled = {
            let mut dark_mode = self.dark_mode.write().await;
            *dark_mode = !*dark_mode;
            *dark_mode
        };
        self.storage.store(enabled).await?;
        Ok(enabled)
    }
}

/// 内存存储
#[derive(Debug, Default)]
pub struct MemoryPreferenceStorage {
    value: RwLock<Option<bool>>,
}

impl MemoryPreferenceStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn stored(&self) -> Option<bool> {
        *self.value.read().await
    }
}

#[async_trait]
impl PreferenceStorage for MemoryPreferenceStorage {
    async fn store(&self, dark_mode: bool) -> Result<(), PreferenceError> {
        *self.value.write().await = Some(dark_mode);
        Ok(())
    }

    async fn clear(&self) -> Result<(), PreferenceError> {
        *self.value.write().await = None;
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredPreferences {
    dark_mode: bool,
}

/// JSON 文件存储，内容形如 `{"dark_mode": true}`
#[derive(Debug, Clone)]
pub struct JsonFilePreferenceStorage {
    path: PathBuf,
}

impl JsonFilePreferenceStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 读取已存储的值，文件不存在时为 None
    pub async fn load(&self) -> Result<Option<bool>, PreferenceError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path).await?;
        let stored: StoredPreferences = serde_json::from_str(&content)?;
        Ok(Some(stored.dark_mode))
    }
}

#[async_trait]
impl PreferenceStorage for JsonFilePreferenceStorage {
    async fn store(&self, dark_mode: bool) -> Result<(), PreferenceError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }
        let content = serde_json::to_string_pretty(&StoredPreferences { dark_mode })?;
        fs::write(&self.path, content).await?;
        tracing::debug!("Saved preferences to {:?}", self.path);
        Ok(())
    }

    async fn clear(&self) -> Result<(), PreferenceError> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
