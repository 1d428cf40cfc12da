use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::image::{ImageKind, ImageSize, ImageUrlBuilder};

/// 详情页默认展示的主演数量
pub const MAIN_CAST_LIMIT: usize = 6;

/// 详情页默认展示的出品公司数量
pub const TOP_COMPANIES_LIMIT: usize = 3;

/// 电影基本信息（列表接口返回）
///
/// 远程服务的原样数据，缺失字段一律取默认值，调用方自行判断可选字段。
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Movie {
    pub id: u32,
    pub title: String,
    pub original_title: Option<String>,
    pub overview: Option<String>,
    pub release_date: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub vote_average: f32,
    pub vote_count: u32,
    pub genre_ids: Vec<u32>,
    pub popularity: f32,
    pub adult: bool,
}

impl Movie {
    /// 上映年份
    pub fn release_year(&self) -> Option<i32> {
        release_year(self.release_date.as_deref())
    }

    /// 评分文本，保留一位小数，无评分时为 "N/A"
    pub fn rating_label(&self) -> String {
        rating_label(self.vote_average)
    }

    pub fn rating_tier(&self) -> Option<RatingTier> {
        (self.vote_average > 0.0).then(|| RatingTier::from_rating(self.vote_average))
    }

    pub fn poster_url(&self, images: &ImageUrlBuilder, size: ImageSize) -> Option<String> {
        self.poster_path
            .as_deref()
            .map(|path| images.url(path, ImageKind::Poster, size))
    }

    pub fn backdrop_url(&self, images: &ImageUrlBuilder, size: ImageSize) -> Option<String> {
        self.backdrop_path
            .as_deref()
            .map(|path| images.url(path, ImageKind::Backdrop, size))
    }
}

/// 列表类接口的分页响应（搜索、热门、高分、发现）
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MovieList {
    pub page: u32,
    pub results: Vec<Movie>,
    pub total_pages: u32,
    pub total_results: u32,
}

/// 电影详情
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MovieDetails {
    pub id: u32,
    pub title: String,
    pub original_title: Option<String>,
    pub overview: Option<String>,
    pub tagline: Option<String>,
    pub status: Option<String>,
    pub release_date: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub vote_average: f32,
    pub vote_count: u32,
    pub runtime: Option<u32>,
    pub budget: u64,
    pub revenue: u64,
    pub imdb_id: Option<String>,
    pub genres: Vec<Genre>,
    pub production_companies: Vec<ProductionCompany>,
    pub production_countries: Vec<ProductionCountry>,
    pub spoken_languages: Vec<SpokenLanguage>,
    pub popularity: f32,
}

impl MovieDetails {
    pub fn release_year(&self) -> Option<i32> {
        release_year(self.release_date.as_deref())
    }

    pub fn rating_label(&self) -> String {
        rating_label(self.vote_average)
    }

    /// 片长文本，例如 "2h 5m"
    pub fn runtime_label(&self) -> Option<String> {
        match self.runtime {
            Some(minutes) if minutes > 0 => Some(format!("{}h {}m", minutes / 60, minutes % 60)),
            _ => None,
        }
    }

    pub fn budget_label(&self) -> Option<String> {
        (self.budget > 0).then(|| format_usd(self.budget))
    }

    pub fn revenue_label(&self) -> Option<String> {
        (self.revenue > 0).then(|| format_usd(self.revenue))
    }

    pub fn genre_names(&self) -> Vec<&str> {
        self.genres.iter().map(|g| g.name.as_str()).collect()
    }

    pub fn top_production_companies(&self, limit: usize) -> Vec<&str> {
        self.production_companies
            .iter()
            .take(limit)
            .map(|c| c.name.as_str())
            .collect()
    }

    /// 出品国家，以逗号连接；没有时返回 None
    pub fn production_countries_label(&self) -> Option<String> {
        if self.production_countries.is_empty() {
            return None;
        }
        let names: Vec<&str> = self
            .production_countries
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        Some(names.join(", "))
    }

    pub fn poster_url(&self, images: &ImageUrlBuilder, size: ImageSize) -> Option<String> {
        self.poster_path
            .as_deref()
            .map(|path| images.url(path, ImageKind::Poster, size))
    }

    pub fn backdrop_url(&self, images: &ImageUrlBuilder, size: ImageSize) -> Option<String> {
        self.backdrop_path
            .as_deref()
            .map(|path| images.url(path, ImageKind::Backdrop, size))
    }
}

/// 电影类型
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Genre {
    pub id: u32,
    pub name: String,
}

/// 类型列表响应
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct GenreList {
    pub genres: Vec<Genre>,
}

/// 出品公司
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ProductionCompany {
    pub id: u32,
    pub name: String,
    pub logo_path: Option<String>,
    pub origin_country: Option<String>,
}

/// 出品国家
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ProductionCountry {
    pub iso_3166_1: String,
    pub name: String,
}

/// 语言
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SpokenLanguage {
    pub iso_639_1: String,
    pub name: String,
    pub english_name: Option<String>,
}

/// 演职人员信息
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MovieCredits {
    pub id: u32,
    pub cast: Vec<CastMember>,
    pub crew: Vec<CrewMember>,
}

impl MovieCredits {
    /// 导演（第一个 job 为 Director 的制作人员）
    pub fn director(&self) -> Option<&CrewMember> {
        self.crew.iter().find(|c| c.job == "Director")
    }

    pub fn main_cast(&self, limit: usize) -> &[CastMember] {
        &self.cast[..self.cast.len().min(limit)]
    }
}

/// 演员
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CastMember {
    pub id: u32,
    pub name: String,
    pub character: String,
    pub order: u32,
    pub profile_path: Option<String>,
}

impl CastMember {
    pub fn profile_url(&self, images: &ImageUrlBuilder) -> Option<String> {
        self.profile_path
            .as_deref()
            .map(|path| images.url(path, ImageKind::Poster, ImageSize::Small))
    }
}

/// 制作人员
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CrewMember {
    pub id: u32,
    pub name: String,
    pub job: String,
    pub department: String,
}

/// 评分档位，用于卡片上的评分徽章
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RatingTier {
    High,
    Good,
    Fair,
    Poor,
}

impl RatingTier {
    pub fn from_rating(rating: f32) -> Self {
        if rating >= 8.0 {
            RatingTier::High
        } else if rating >= 6.0 {
            RatingTier::Good
        } else if rating >= 4.0 {
            RatingTier::Fair
        } else {
            RatingTier::Poor
        }
    }
}

fn release_year(date: Option<&str>) -> Option<i32> {
    let date = date?;
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .map(|d| d.year())
}

fn rating_label(rating: f32) -> String {
    if rating > 0.0 {
        format!("{:.1}", rating)
    } else {
        "N/A".to_string()
    }
}

/// 美元金额格式化，不带小数，例如 "$1,234,567"
pub fn format_usd(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("${}", grouped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_lenient_deserialization() {
        let json = r#"{"id": 155, "title": "The Dark Knight"}"#;
        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.id, 155);
        assert!(movie.poster_path.is_none());
        assert_eq!(movie.vote_average, 0.0);
        assert!(movie.genre_ids.is_empty());
    }

    #[test]
    fn test_movie_list_missing_fields_default() {
        let list: MovieList = serde_json::from_str("{}").unwrap();
        assert!(list.results.is_empty());
        assert_eq!(list.total_pages, 0);
    }

    #[test]
    fn test_release_year_and_rating_label() {
        let movie = Movie {
            release_date: Some("2008-07-16".to_string()),
            vote_average: 8.52,
            ..Default::default()
        };
        assert_eq!(movie.release_year(), Some(2008));
        assert_eq!(movie.rating_label(), "8.5");
        assert_eq!(movie.rating_tier(), Some(RatingTier::High));

        let unknown = Movie {
            release_date: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(unknown.release_year(), None);
        assert_eq!(unknown.rating_label(), "N/A");
        assert_eq!(unknown.rating_tier(), None);
    }

    #[test]
    fn test_rating_tiers() {
        assert_eq!(RatingTier::from_rating(8.0), RatingTier::High);
        assert_eq!(RatingTier::from_rating(6.5), RatingTier::Good);
        assert_eq!(RatingTier::from_rating(4.0), RatingTier::Fair);
        assert_eq!(RatingTier::from_rating(3.9), RatingTier::Poor);
    }

    #[test]
    fn test_runtime_and_money_labels() {
        let details = MovieDetails {
            runtime: Some(152),
            budget: 185_000_000,
            revenue: 0,
            ..Default::default()
        };
        assert_eq!(details.runtime_label().as_deref(), Some("2h 32m"));
        assert_eq!(details.budget_label().as_deref(), Some("$185,000,000"));
        assert!(details.revenue_label().is_none());

        let no_runtime = MovieDetails {
            runtime: Some(0),
            ..Default::default()
        };
        assert!(no_runtime.runtime_label().is_none());
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(0), "$0");
        assert_eq!(format_usd(999), "$999");
        assert_eq!(format_usd(1000), "$1,000");
        assert_eq!(format_usd(1_234_567), "$1,234,567");
    }

    #[test]
    fn test_credits_director_and_main_cast() {
        let credits = MovieCredits {
            id: 1,
            cast: (0..8)
                .map(|i| CastMember {
                    id: i,
                    name: format!("Actor {}", i),
                    ..Default::default()
                })
                .collect(),
            crew: vec![
                CrewMember {
                    name: "Writer".to_string(),
                    job: "Screenplay".to_string(),
                    ..Default::default()
                },
                CrewMember {
                    name: "Christopher Nolan".to_string(),
                    job: "Director".to_string(),
                    ..Default::default()
                },
            ],
        };
        assert_eq!(credits.director().map(|d| d.name.as_str()), Some("Christopher Nolan"));
        assert_eq!(credits.main_cast(MAIN_CAST_LIMIT).len(), 6);
        assert_eq!(credits.main_cast(20).len(), 8);
        assert!(MovieCredits::default().director().is_none());
    }

    #[test]
    fn test_production_labels() {
        let details = MovieDetails {
            production_companies: ["A", "B", "C", "D"]
                .iter()
                .map(|n| ProductionCompany {
                    name: n.to_string(),
                    ..Default::default()
                })
                .collect(),
            production_countries: vec![
                ProductionCountry {
                    iso_3166_1: "US".to_string(),
                    name: "United States of America".to_string(),
                },
                ProductionCountry {
                    iso_3166_1: "GB".to_string(),
                    name: "United Kingdom".to_string(),
                },
            ],
            ..Default::default()
        };
        assert_eq!(details.top_production_companies(TOP_COMPANIES_LIMIT), vec!["A", "B", "C"]);
        assert_eq!(
            details.production_countries_label().as_deref(),
            Some("United States of America, United Kingdom")
        );
    }
}
