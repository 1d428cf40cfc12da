use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};

/// 年份下拉框覆盖的年数（含当年）
pub const YEAR_OPTION_SPAN: i32 = 30;

/// 发现页筛选条件
///
/// 内部模型保持扁平、强类型；远程接口的参数名只在 `external::params` 里出现。
/// `None` 表示未选择，不会被发送到远程服务。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSet {
    pub genre: Option<u32>,
    pub release_year: Option<i32>,
    pub min_rating: Option<f32>,
    pub max_rating: Option<f32>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 是否有任一条件被设置
    pub fn is_active(&self) -> bool {
        self.genre.is_some()
            || self.release_year.is_some()
            || self.min_rating.is_some()
            || self.max_rating.is_some()
    }

    /// 应用单个字段的修改
    pub fn apply(&mut self, change: FilterChange) {
        match change {
            FilterChange::Genre(value) => self.genre = value,
            FilterChange::ReleaseYear(value) => self.release_year = value,
            FilterChange::MinRating(value) => self.min_rating = value,
            FilterChange::MaxRating(value) => self.max_rating = value,
        }
    }

    pub fn with(mut self, change: FilterChange) -> Self {
        self.apply(change);
        self
    }
}

/// 单个筛选字段的修改，`None` 表示清空该字段
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FilterChange {
    Genre(Option<u32>),
    ReleaseYear(Option<i32>),
    MinRating(Option<f32>),
    MaxRating(Option<f32>),
}

/// 发现接口的排序方式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortBy {
    #[default]
    PopularityDesc,
    VoteAverageDesc,
    ReleaseDateDesc,
}

impl SortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::PopularityDesc => "popularity.desc",
            SortBy::VoteAverageDesc => "vote_average.desc",
            SortBy::ReleaseDateDesc => "primary_release_date.desc",
        }
    }
}

impl std::fmt::Display for SortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 筛选面板的可选项
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOptions {
    pub years: Vec<i32>,
    pub min_ratings: Vec<u8>,
    pub max_ratings: Vec<u8>,
}

impl FilterOptions {
    /// 以本地当前年份生成
    pub fn current() -> Self {
        Self::for_year(Local::now().year())
    }

    /// 年份从 `current_year` 倒序到 `current_year - 30`
    pub fn for_year(current_year: i32) -> Self {
        Self {
            years: (current_year - YEAR_OPTION_SPAN..=current_year).rev().collect(),
            min_ratings: (1..=9).collect(),
            max_ratings: (2..=10).collect(),
        }
    }
}
