use std::collections::BTreeMap;

use crate::models::{FilterSet, SortBy};

/// 查询参数集合，键的顺序对远程调用无意义
pub type QueryParams = BTreeMap<String, String>;

pub const PARAM_PAGE: &str = "page";
pub const PARAM_SORT_BY: &str = "sort_by";
pub const PARAM_QUERY: &str = "query";
pub const PARAM_GENRE: &str = "with_genres";
pub const PARAM_RELEASE_YEAR: &str = "primary_release_year";
pub const PARAM_MIN_RATING: &str = "vote_average.gte";
pub const PARAM_MAX_RATING: &str = "vote_average.lte";

/// 把筛选条件翻译为远程接口的参数名
///
/// 未设置的字段保持为 `None`，由 [`build_params`] 统一剔除。
fn filter_entries<'a>(filters: &FilterSet) -> [(&'a str, Option<String>); 4] {
    [
        (PARAM_GENRE, filters.genre.map(|v| v.to_string())),
        (PARAM_RELEASE_YEAR, filters.release_year.map(|v| v.to_string())),
        (PARAM_MIN_RATING, filters.min_rating.map(|v| v.to_string())),
        (PARAM_MAX_RATING, filters.max_rating.map(|v| v.to_string())),
    ]
}

/// 合并筛选条件与额外参数，去掉空值
///
/// - `extra` 先写入，筛选字段后写入，同名键以筛选字段为准
/// - 值为 `None` 或空字符串的键不会出现在结果中（已有同名键也会被移除）
/// - 不做类型转换和范围校验，最低分高于最高分时原样发送
pub fn build_params<'a, I>(filters: &FilterSet, extra: I) -> QueryParams
where
    I: IntoIterator<Item = (&'a str, Option<String>)>,
{
    let mut params = QueryParams::new();

    let entries = extra.into_iter().chain(filter_entries(filters));

    for (key, value) in entries {
        match value {
            Some(value) if !value.is_empty() => {
                params.insert(key.to_string(), value);
            }
            _ => {
                params.remove(key);
            }
        }
    }

    params
}

/// 发现接口的完整参数：分页、排序加筛选条件
pub fn discover_params(filters: &FilterSet, sort_by: SortBy, page: u32) -> QueryParams {
    build_params(
        filters,
        [
            (PARAM_PAGE, Some(page.to_string())),
            (PARAM_SORT_BY, Some(sort_by.as_str().to_string())),
        ],
    )
}

/// 搜索接口参数
pub fn search_params(query: &str, page: u32) -> QueryParams {
    build_params(
        &FilterSet::default(),
        [
            (PARAM_QUERY, Some(query.to_string())),
            (PARAM_PAGE, Some(page.to_string())),
        ],
    )
}

/// 只带分页的列表接口参数
pub fn page_params(page: u32) -> QueryParams {
    build_params(&FilterSet::default(), [(PARAM_PAGE, Some(page.to_string()))])
}
