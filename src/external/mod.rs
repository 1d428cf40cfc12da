pub mod error;
pub mod params;
pub mod tmdb;

use async_trait::async_trait;

pub use error::RemoteError;
pub use params::{build_params, discover_params, QueryParams};
pub use tmdb::{TmdbClient, DEFAULT_TIMEOUT};

use crate::models::{FilterSet, GenreList, MovieCredits, MovieDetails, MovieList, SortBy};

/// 远程电影数据源
///
/// 每个方法对应一个远程资源，失败时原样返回 [`RemoteError`]，
/// 由调用方（状态层）负责记录和展示。
#[async_trait]
pub trait MovieSource: Send + Sync {
    async fn search_movies(&self, query: &str, page: u32) -> Result<MovieList, RemoteError>;

    async fn popular_movies(&self, page: u32) -> Result<MovieList, RemoteError>;

    async fn top_rated_movies(&self, page: u32) -> Result<MovieList, RemoteError>;

    async fn discover_movies(
        &self,
        filters: &FilterSet,
        sort_by: SortBy,
        page: u32,
    ) -> Result<MovieList, RemoteError>;

    async fn movie_details(&self, movie_id: u32) -> Result<MovieDetails, RemoteError>;

    async fn movie_credits(&self, movie_id: u32) -> Result<MovieCredits, RemoteError>;

    async fn genres(&self) -> Result<GenreList, RemoteError>;
}
