use std::sync::Arc;

use tokio::sync::RwLock;

use super::generation::RequestTracker;
use crate::external::{MovieSource, RemoteError};
use crate::models::{FilterSet, Movie, MovieList, SortBy};

/// 列表页类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingKind {
    Popular,
    TopRated,
}

impl ListingKind {
    /// 有筛选条件时发现接口使用的排序
    pub fn sort_by(&self) -> SortBy {
        match self {
            ListingKind::Popular => SortBy::PopularityDesc,
            ListingKind::TopRated => SortBy::VoteAverageDesc,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ListingKind::Popular => "popular",
            ListingKind::TopRated => "top rated",
        }
    }
}

/// 列表页状态快照
#[derive(Debug, Clone, PartialEq)]
pub struct ListingState {
    pub movies: Vec<Movie>,
    pub is_loading: bool,
    pub error: Option<RemoteError>,
    pub current_page: u32,
    pub total_pages: u32,
    /// 当前结果是否来自带筛选条件的发现接口
    pub filtered: bool,
}

impl Default for ListingState {
    fn default() -> Self {
        Self {
            movies: Vec::new(),
            is_loading: false,
            error: None,
            current_page: 1,
            total_pages: 0,
            filtered: false,
        }
    }
}

/// 热门 / 高分列表页
///
/// 没有筛选条件时走固定接口；有筛选条件时改走发现接口，排序取决于列表类型。
/// 与搜索一样只接受最新一次请求的结果。首页即热门列表的第一页。
pub struct ListingStore {
    kind: ListingKind,
    source: Arc<dyn MovieSource>,
    filters: RwLock<FilterSet>,
    state: RwLock<ListingState>,
    tracker: RequestTracker,
}

impl ListingStore {
    pub fn new(kind: ListingKind, source: Arc<dyn MovieSource>) -> Self {
        Self {
            kind,
            source,
            filters: RwLock::new(FilterSet::default()),
            state: RwLock::new(ListingState::default()),
            tracker: RequestTracker::new(),
        }
    }

    pub fn kind(&self) -> ListingKind {
        self.kind
    }

    /// 加载指定页
    pub async fn load_page(&self, page: u32) {
        if self.tracker.is_closed() {
            return;
        }
        let page = page.max(1);
        let filters = self.filters.read().await.clone();
        let filtered = filters.is_active();

        let ticket = {
            let mut state = self.state.write().await;
            let ticket = self.tracker.issue();
            state.is_loading = true;
            state.error = None;
            ticket
        };

        let Some(result) = self.tracker.run(self.fetch(&filters, page)).await else {
            return;
        };

        let mut state = self.state.write().await;
        if !self.tracker.is_current(ticket) {
            tracing::debug!("Discarding stale {} page {}", self.kind.label(), page);
            return;
        }

        match result {
            Ok(list) => {
                state.movies = list.results;
                state.total_pages = list.total_pages;
                state.current_page = page;
                state.filtered = filtered;
            }
            Err(e) => {
                tracing::warn!("Failed to load {} movies (page {}): {}", self.kind.label(), page, e);
                state.movies.clear();
                state.error = Some(e);
            }
        }
        state.is_loading = false;
    }

    /// 更换筛选条件并回到第一页
    pub async fn apply_filters(&self, filters: FilterSet) {
        *self.filters.write().await = filters;
        self.load_page(1).await;
    }

    /// 重新加载当前页
    pub async fn reload(&self) {
        let page = self.state.read().await.current_page;
        self.load_page(page).await;
    }

    pub fn close(&self) {
        self.tracker.close();
    }

    pub async fn filters(&self) -> FilterSet {
        self.filters.read().await.clone()
    }

    pub async fn snapshot(&self) -> ListingState {
        self.state.read().await.clone()
    }

    async fn fetch(&self, filters: &FilterSet, page: u32) -> Result<MovieList, RemoteError> {
        if filters.is_active() {
            return self
                .source
                .discover_movies(filters, self.kind.sort_by(), page)
                .await;
        }
        match self.kind {
            ListingKind::Popular => self.source.popular_movies(page).await,
            ListingKind::TopRated => self.source.top_rated_movies(page).await,
        }
    }
}
