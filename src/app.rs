// 应用上下文
//
// 启动时创建一次：加载配置、建立共享的远程客户端、初始化界面偏好，
// 各页面所需的状态存储都从这里创建。

use std::sync::Arc;

use thiserror::Error;

use crate::config::{AppConfig, ConfigError};
use crate::external::{MovieSource, RemoteError, TmdbClient};
use crate::models::ImageUrlBuilder;
use crate::services::{
    DetailStore, FilterStore, GenreCatalog, ListingKind, ListingStore, PreferenceStorage,
    Preferences, SearchStore,
};

/// 启动失败
#[derive(Debug, Error)]
pub enum AppError {
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP 客户端初始化失败: {0}")]
    Client(#[from] RemoteError),
}

pub struct MovieApp {
    config: AppConfig,
    source: Arc<dyn MovieSource>,
    preferences: Arc<Preferences>,
    images: ImageUrlBuilder,
}

impl MovieApp {
    /// 初始化日志、读取环境配置并创建应用
    pub async fn bootstrap(storage: Arc<dyn PreferenceStorage>) -> Result<Self, AppError> {
        Self::init_tracing();
        let config = AppConfig::from_env()?;
        let app = Self::new(config, storage).await?;
        tracing::info!(
            "{} v{} ready (api: {})",
            app.config.app_name,
            app.config.app_version,
            app.config.api_base_url
        );
        Ok(app)
    }

    /// 重复调用无副作用
    pub fn init_tracing() {
        let _ = tracing_subscriber::fmt().try_init();
    }

    pub async fn new(
        config: AppConfig,
        storage: Arc<dyn PreferenceStorage>,
    ) -> Result<Self, AppError> {
        let client = TmdbClient::from_config(&config)?;
        Ok(Self::with_source(config, Arc::new(client), storage).await)
    }

    /// 使用任意数据源创建（测试时注入替身）
    pub async fn with_source(
        config: AppConfig,
        source: Arc<dyn MovieSource>,
        storage: Arc<dyn PreferenceStorage>,
    ) -> Self {
        let images = ImageUrlBuilder::new(config.image_base_url.clone());
        let preferences = Arc::new(Preferences::initialize(storage).await);
        Self {
            config,
            source,
            preferences,
            images,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn source(&self) -> Arc<dyn MovieSource> {
        self.source.clone()
    }

    pub fn preferences(&self) -> Arc<Preferences> {
        self.preferences.clone()
    }

    pub fn image_urls(&self) -> &ImageUrlBuilder {
        &self.images
    }

    pub fn search_store(&self) -> SearchStore {
        SearchStore::new(self.source.clone())
    }

    /// 首页使用 `ListingKind::Popular`
    pub fn listing_store(&self, kind: ListingKind) -> ListingStore {
        ListingStore::new(kind, self.source.clone())
    }

    pub fn detail_store(&self) -> DetailStore {
        DetailStore::new(self.source.clone())
    }

    pub fn genre_catalog(&self) -> GenreCatalog {
        GenreCatalog::new(self.source.clone())
    }

    pub fn filter_store(&self) -> FilterStore {
        FilterStore::new()
    }
}
