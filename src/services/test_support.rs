// 测试用的脚本化数据源

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::oneshot;

use crate::external::{MovieSource, RemoteError};
use crate::models::{
    FilterSet, Genre, GenreList, Movie, MovieCredits, MovieDetails, MovieList, SortBy,
};

type Reply<T> = Result<T, RemoteError>;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Search(String, u32),
    Popular(u32),
    TopRated(u32),
    Discover(FilterSet, SortBy, u32),
    Details(u32),
    Credits(u32),
    Genres,
}

/// 按预设脚本应答的数据源，未设置的请求返回 404
#[derive(Default)]
pub struct ScriptedSource {
    search: Mutex<HashMap<String, Reply<MovieList>>>,
    gated_search: Mutex<HashMap<String, oneshot::Receiver<Reply<MovieList>>>>,
    lists: Mutex<HashMap<&'static str, Reply<MovieList>>>,
    gated_lists: Mutex<HashMap<&'static str, oneshot::Receiver<Reply<MovieList>>>>,
    details: Mutex<HashMap<u32, Reply<MovieDetails>>>,
    gated_details: Mutex<HashMap<u32, oneshot::Receiver<Reply<MovieDetails>>>>,
    credits: Mutex<HashMap<u32, Reply<MovieCredits>>>,
    genres: Mutex<Option<Reply<GenreList>>>,
    calls: Mutex<Vec<Call>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond_search(&self, query: &str, reply: Reply<MovieList>) {
        self.search.lock().unwrap().insert(query.to_string(), reply);
    }

    /// 结果由测试通过 oneshot 在任意时刻放行
    pub fn gate_search(&self, query: &str, rx: oneshot::Receiver<Reply<MovieList>>) {
        self.gated_search.lock().unwrap().insert(query.to_string(), rx);
    }

    pub fn respond_popular(&self, reply: Reply<MovieList>) {
        self.lists.lock().unwrap().insert("popular", reply);
    }

    pub fn respond_top_rated(&self, reply: Reply<MovieList>) {
        self.lists.lock().unwrap().insert("top_rated", reply);
    }

    pub fn respond_discover(&self, reply: Reply<MovieList>) {
        self.lists.lock().unwrap().insert("discover", reply);
    }

    pub fn gate_popular(&self, rx: oneshot::Receiver<Reply<MovieList>>) {
        self.gated_lists.lock().unwrap().insert("popular", rx);
    }

    pub fn gate_discover(&self, rx: oneshot::Receiver<Reply<MovieList>>) {
        self.gated_lists.lock().unwrap().insert("discover", rx);
    }

    pub fn respond_details(&self, movie_id: u32, reply: Reply<MovieDetails>) {
        self.details.lock().unwrap().insert(movie_id, reply);
    }

    pub fn gate_details(&self, movie_id: u32, rx: oneshot::Receiver<Reply<MovieDetails>>) {
        self.gated_details.lock().unwrap().insert(movie_id, rx);
    }

    pub fn respond_credits(&self, movie_id: u32, reply: Reply<MovieCredits>) {
        self.credits.lock().unwrap().insert(movie_id, reply);
    }

    pub fn respond_genres(&self, reply: Reply<GenreList>) {
        *self.genres.lock().unwrap() = Some(reply);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn search_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, Call::Search(..)))
            .count()
    }

    pub fn last_search(&self) -> Option<(String, u32)> {
        self.calls().into_iter().rev().find_map(|c| match c {
            Call::Search(query, page) => Some((query, page)),
            _ => None,
        })
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    async fn list(&self, key: &str) -> Reply<MovieList> {
        let gate = self.gated_lists.lock().unwrap().remove(key);
        if let Some(rx) = gate {
            return released(rx).await;
        }
        self.lists
            .lock()
            .unwrap()
            .get(key)
            .cloned()
            .unwrap_or_else(|| Err(not_scripted()))
    }
}

fn not_scripted() -> RemoteError {
    RemoteError::http(404, "not scripted")
}

async fn released<T>(rx: oneshot::Receiver<Reply<T>>) -> Reply<T> {
    rx.await
        .unwrap_or_else(|_| Err(RemoteError::network("gate dropped")))
}

#[async_trait]
impl MovieSource for ScriptedSource {
    async fn search_movies(&self, query: &str, page: u32) -> Result<MovieList, RemoteError> {
        self.record(Call::Search(query.to_string(), page));
        let gate = self.gated_search.lock().unwrap().remove(query);
        if let Some(rx) = gate {
            return released(rx).await;
        }
        self.search
            .lock()
            .unwrap()
            .get(query)
            .cloned()
            .unwrap_or_else(|| Err(not_scripted()))
    }

    async fn popular_movies(&self, page: u32) -> Result<MovieList, RemoteError> {
        self.record(Call::Popular(page));
        self.list("popular").await
    }

    async fn top_rated_movies(&self, page: u32) -> Result<MovieList, RemoteError> {
        self.record(Call::TopRated(page));
        self.list("top_rated").await
    }

    async fn discover_movies(
        &self,
        filters: &FilterSet,
        sort_by: SortBy,
        page: u32,
    ) -> Result<MovieList, RemoteError> {
        self.record(Call::Discover(filters.clone(), sort_by, page));
        self.list("discover").await
    }

    async fn movie_details(&self, movie_id: u32) -> Result<MovieDetails, RemoteError> {
        self.record(Call::Details(movie_id));
        let gate = self.gated_details.lock().unwrap().remove(&movie_id);
        if let Some(rx) = gate {
            return released(rx).await;
        }
        self.details
            .lock()
            .unwrap()
            .get(&movie_id)
            .cloned()
            .unwrap_or_else(|| Err(not_scripted()))
    }

    async fn movie_credits(&self, movie_id: u32) -> Result<MovieCredits, RemoteError> {
        self.record(Call::Credits(movie_id));
        self.credits
            .lock()
            .unwrap()
            .get(&movie_id)
            .cloned()
            .unwrap_or_else(|| Err(not_scripted()))
    }

    async fn genres(&self) -> Result<GenreList, RemoteError> {
        self.record(Call::Genres);
        self.genres
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| Err(not_scripted()))
    }
}

/// `count` 部电影、共 `total_pages` 页的列表
pub fn movies(count: u32, total_pages: u32) -> MovieList {
    MovieList {
        page: 1,
        results: (1..=count)
            .map(|id| Movie {
                id,
                title: format!("Movie {}", id),
                ..Default::default()
            })
            .collect(),
        total_pages,
        total_results: count,
    }
}

pub fn details(movie_id: u32, title: &str) -> MovieDetails {
    MovieDetails {
        id: movie_id,
        title: title.to_string(),
        ..Default::default()
    }
}

pub fn genre_list() -> GenreList {
    GenreList {
        genres: vec![
            Genre { id: 28, name: "Action".to_string() },
            Genre { id: 18, name: "Drama".to_string() },
        ],
    }
}
