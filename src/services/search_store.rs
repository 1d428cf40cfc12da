use std::sync::Arc;

use tokio::sync::RwLock;

use super::generation::RequestTracker;
use crate::external::{MovieSource, RemoteError};
use crate::models::Movie;

/// 搜索状态快照
#[derive(Debug, Clone, PartialEq)]
pub struct SearchState {
    pub query: String,
    pub results: Vec<Movie>,
    pub is_loading: bool,
    pub error: Option<RemoteError>,
    pub current_page: u32,
    pub total_pages: u32,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            query: String::new(),
            results: Vec::new(),
            is_loading: false,
            error: None,
            current_page: 1,
            total_pages: 0,
        }
    }
}

/// 搜索状态存储
///
/// 后发起的搜索总是胜出：每次搜索领取一个代次，只有最新代次的结果会写回，
/// 先发后至的旧结果直接丢弃。
pub struct SearchStore {
    source: Arc<dyn MovieSource>,
    state: RwLock<SearchState>,
    tracker: RequestTracker,
}

impl SearchStore {
    pub fn new(source: Arc<dyn MovieSource>) -> Self {
        Self {
            source,
            state: RwLock::new(SearchState::default()),
            tracker: RequestTracker::new(),
        }
    }

    /// 搜索第一页
    pub async fn search(&self, query: &str) -> bool {
        self.start_search(query, 1).await
    }

    /// 发起搜索
    ///
    /// 查询为空或只有空白时不做任何事并返回 `false`；
    /// 存储关闭后同样不再发请求。
    pub async fn start_search(&self, query: &str, page: u32) -> bool {
        if query.trim().is_empty() || self.tracker.is_closed() {
            return false;
        }
        let page = page.max(1);

        let ticket = {
            let mut state = self.state.write().await;
            let ticket = self.tracker.issue();
            state.is_loading = true;
            state.error = None;
            state.query = query.to_string();
            state.current_page = page;
            ticket
        };

        tracing::debug!("Searching movies: {} (page {})", query, page);
        let Some(result) = self.tracker.run(self.source.search_movies(query, page)).await else {
            tracing::debug!("Search store closed, dropping request for: {}", query);
            return true;
        };

        let mut state = self.state.write().await;
        if !self.tracker.is_current(ticket) {
            tracing::debug!("Discarding stale search result for: {}", query);
            return true;
        }

        match result {
            Ok(list) => {
                state.results = list.results;
                state.total_pages = list.total_pages;
            }
            Err(e) => {
                tracing::warn!("Movie search failed for {}: {}", query, e);
                state.results.clear();
                state.error = Some(e);
            }
        }
        state.is_loading = false;
        true
    }

    /// 以当前查询跳转到指定页
    pub async fn go_to_page(&self, page: u32) -> bool {
        let query = self.state.read().await.query.clone();
        self.start_search(&query, page).await
    }

    /// 重置全部状态，进行中的搜索结果将被丢弃
    pub async fn clear_search(&self) {
        let mut state = self.state.write().await;
        self.tracker.invalidate();
        *state = SearchState::default();
    }

    /// 组件销毁时调用
    pub fn close(&self) {
        self.tracker.close();
    }

    pub async fn snapshot(&self) -> SearchState {
        self.state.read().await.clone()
    }
}
