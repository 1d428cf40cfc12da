// 应用配置
//
// 从环境变量（以及 .env 文件）读取远程服务地址、凭证和图片 CDN 地址。

use std::time::Duration;

use thiserror::Error;
use url::Url;

use crate::external::DEFAULT_TIMEOUT;

pub const DEFAULT_API_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";
pub const DEFAULT_APP_NAME: &str = "Movie Search App";
pub const DEFAULT_APP_VERSION: &str = "1.0.0";

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("TMDB_API_KEY is not configured")]
    MissingApiKey,

    #[error("invalid URL in {key}: {source}")]
    InvalidUrl {
        key: &'static str,
        #[source]
        source: url::ParseError,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub api_key: String,
    pub image_base_url: String,
    pub app_name: String,
    pub app_version: String,
    pub request_timeout: Duration,
}

impl AppConfig {
    /// 读取 .env 后从进程环境变量加载
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 从任意键值来源加载，空字符串视为未设置
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = get("TMDB_API_KEY").ok_or(ConfigError::MissingApiKey)?;
        let api_base_url = parse_base_url(
            "TMDB_BASE_URL",
            get("TMDB_BASE_URL").unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
        )?;
        let image_base_url = parse_base_url(
            "TMDB_IMAGE_BASE_URL",
            get("TMDB_IMAGE_BASE_URL").unwrap_or_else(|| DEFAULT_IMAGE_BASE_URL.to_string()),
        )?;

        Ok(Self {
            api_base_url,
            api_key,
            image_base_url,
            app_name: get("APP_NAME").unwrap_or_else(|| DEFAULT_APP_NAME.to_string()),
            app_version: get("APP_VERSION").unwrap_or_else(|| DEFAULT_APP_VERSION.to_string()),
            request_timeout: DEFAULT_TIMEOUT,
        })
    }

    /// 使用默认地址，仅指定凭证
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            api_key: api_key.into(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            app_name: DEFAULT_APP_NAME.to_string(),
            app_version: DEFAULT_APP_VERSION.to_string(),
            request_timeout: DEFAULT_TIMEOUT,
        }
    }
}

fn parse_base_url(key: &'static str, raw: String) -> Result<String, ConfigError> {
    Url::parse(&raw).map_err(|source| ConfigError::InvalidUrl { key, source })?;
    Ok(raw.trim_end_matches('/').to_string())
}
