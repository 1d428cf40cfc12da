use crate::external::{build_params, QueryParams};
use crate::models::{FilterChange, FilterSet, Genre};

/// 筛选条件状态
///
/// 所有派生值（接口参数、是否有生效条件）在每次修改后同步重算，
/// 本身不发请求，由使用方根据 [`FilterStore::revision`] 决定何时重新加载。
#[derive(Debug, Clone, Default)]
pub struct FilterStore {
    filters: FilterSet,
    api_params: QueryParams,
    has_active_filters: bool,
    revision: u64,
}

impl FilterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filters(filters: FilterSet) -> Self {
        let mut store = Self::default();
        store.update_filters(filters);
        store
    }

    /// 整体替换筛选条件
    pub fn update_filters(&mut self, filters: FilterSet) {
        if filters != self.filters {
            self.revision += 1;
        }
        self.filters = filters;
        self.recompute();
    }

    /// 修改单个字段
    pub fn apply(&mut self, change: FilterChange) {
        let next = self.filters.clone().with(change);
        self.update_filters(next);
    }

    pub fn clear_filters(&mut self) {
        self.update_filters(FilterSet::default());
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    /// 去掉空值后的接口参数
    pub fn api_params(&self) -> &QueryParams {
        &self.api_params
    }

    pub fn has_active_filters(&self) -> bool {
        self.has_active_filters
    }

    /// 筛选条件实际变化的次数
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// 已生效条件的展示文本
    ///
    /// 类型名从 `genres` 中查找，找不到时跳过该项。
    pub fn active_filter_labels(&self, genres: &[Genre]) -> Vec<String> {
        let mut labels = Vec::new();

        if let Some(genre_id) = self.filters.genre {
            if let Some(genre) = genres.iter().find(|g| g.id == genre_id) {
                labels.push(genre.name.clone());
            }
        }
        if let Some(year) = self.filters.release_year {
            labels.push(year.to_string());
        }
        if let Some(min) = self.filters.min_rating {
            labels.push(format!("{}+ rating", min));
        }
        if let Some(max) = self.filters.max_rating {
            labels.push(format!("Max {} rating", max));
        }

        labels
    }

    fn recompute(&mut self) {
        self.api_params = build_params(&self.filters, std::iter::empty());
        self.has_active_filters = self.filters.is_active();
    }
}
