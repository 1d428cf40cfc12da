use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::error::RemoteError;
use super::params::{discover_params, page_params, search_params, QueryParams};
use super::MovieSource;
use crate::config::AppConfig;
use crate::models::{FilterSet, GenreList, MovieCredits, MovieDetails, MovieList, SortBy};

/// 所有请求共用的超时时间
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// TMDB API客户端
///
/// 每个操作只发出一次 GET 请求：不重试、不缓存、不合并相同请求。
/// `api_key` 由 [`TmdbClient::get_json`] 统一附加，调用方不可见。
#[derive(Clone)]
pub struct TmdbClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl TmdbClient {
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, RemoteError> {
        let client = Client::builder().timeout(timeout).build()?;
        let base_url: String = base_url.into();

        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, RemoteError> {
        Self::new(
            config.api_key.clone(),
            config.api_base_url.clone(),
            config.request_timeout,
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// 发出 GET 请求并把响应体解析为 `T`
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &QueryParams,
    ) -> Result<T, RemoteError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("Making API request: {}", path);

        let response = self
            .client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .query(params)
            .send()
            .await
            .map_err(|e| {
                let error = RemoteError::from(e);
                tracing::error!("TMDB request {} failed: {}", path, error);
                error
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = error_message(&body).unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            });
            tracing::warn!("TMDB API error: {} {} ({})", path, status, message);
            return Err(RemoteError::http(status.as_u16(), message));
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| {
            tracing::warn!("TMDB response for {} could not be decoded: {}", path, e);
            RemoteError::http(status.as_u16(), format!("invalid response body: {}", e))
        })
    }
}

/// 错误响应体中的说明文字
#[derive(Debug, Deserialize)]
struct ErrorBody {
    status_message: Option<String>,
}

fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.status_message)
        .filter(|m| !m.is_empty())
}

#[async_trait]
impl MovieSource for TmdbClient {
    /// 搜索电影
    async fn search_movies(&self, query: &str, page: u32) -> Result<MovieList, RemoteError> {
        self.get_json("/search/movie", &search_params(query, page)).await
    }

    /// 获取热门电影
    async fn popular_movies(&self, page: u32) -> Result<MovieList, RemoteError> {
        self.get_json("/movie/popular", &page_params(page)).await
    }

    /// 获取高分电影
    async fn top_rated_movies(&self, page: u32) -> Result<MovieList, RemoteError> {
        self.get_json("/movie/top_rated", &page_params(page)).await
    }

    /// 按筛选条件发现电影
    async fn discover_movies(
        &self,
        filters: &FilterSet,
        sort_by: SortBy,
        page: u32,
    ) -> Result<MovieList, RemoteError> {
        self.get_json("/discover/movie", &discover_params(filters, sort_by, page))
            .await
    }

    /// 获取电影详情
    async fn movie_details(&self, movie_id: u32) -> Result<MovieDetails, RemoteError> {
        let path = format!("/movie/{}", movie_id);
        self.get_json(&path, &QueryParams::new()).await
    }

    /// 获取电影演职人员
    async fn movie_credits(&self, movie_id: u32) -> Result<MovieCredits, RemoteError> {
        let path = format!("/movie/{}/credits", movie_id);
        self.get_json(&path, &QueryParams::new()).await
    }

    /// 获取电影类型列表
    async fn genres(&self) -> Result<GenreList, RemoteError> {
        self.get_json("/genre/movie/list", &QueryParams::new()).await
    }
}
