use std::sync::Arc;

use tokio::sync::RwLock;

use super::generation::RequestTracker;
use crate::external::{MovieSource, RemoteError};
use crate::models::{MovieCredits, MovieDetails};

/// 详情页状态快照
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailState {
    pub movie_id: Option<u32>,
    pub movie: Option<MovieDetails>,
    pub credits: Option<MovieCredits>,
    pub is_loading: bool,
    pub error: Option<RemoteError>,
}

/// 电影详情页
///
/// 详情与演职人员并发请求，任一失败即整体失败。
pub struct DetailStore {
    source: Arc<dyn MovieSource>,
    state: RwLock<DetailState>,
    tracker: RequestTracker,
}

impl DetailStore {
    pub fn new(source: Arc<dyn MovieSource>) -> Self {
        Self {
            source,
            state: RwLock::new(DetailState::default()),
            tracker: RequestTracker::new(),
        }
    }

    pub async fn load(&self, movie_id: u32) {
        if self.tracker.is_closed() {
            return;
        }

        let ticket = {
            let mut state = self.state.write().await;
            let ticket = self.tracker.issue();
            state.movie_id = Some(movie_id);
            state.is_loading = true;
            state.error = None;
            ticket
        };

        let request = async {
            tokio::try_join!(
                self.source.movie_details(movie_id),
                self.source.movie_credits(movie_id),
            )
        };
        let Some(result) = self.tracker.run(request).await else {
            return;
        };

        let mut state = self.state.write().await;
        if !self.tracker.is_current(ticket) {
            tracing::debug!("Discarding stale details for movie {}", movie_id);
            return;
        }

        match result {
            Ok((movie, credits)) => {
                state.movie = Some(movie);
                state.credits = Some(credits);
            }
            Err(e) => {
                tracing::warn!("Failed to load movie {}: {}", movie_id, e);
                state.movie = None;
                state.credits = None;
                state.error = Some(e);
            }
        }
        state.is_loading = false;
    }

    pub fn close(&self) {
        self.tracker.close();
    }

    pub async fn snapshot(&self) -> DetailState {
        self.state.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CrewMember, MovieCredits};
    use crate::services::test_support::{details, ScriptedSource};
    use tokio::sync::oneshot;

    fn credits_with_director(movie_id: u32, director: &str) -> MovieCredits {
        MovieCredits {
            id: movie_id,
            cast: Vec::new(),
            crew: vec![CrewMember {
                name: director.to_string(),
                job: "Director".to_string(),
                ..Default::default()
            }],
        }
    }

    #[tokio::test]
    async fn test_load_details_and_credits() {
        let source = Arc::new(ScriptedSource::new());
        source.respond_details(155, Ok(details(155, "The Dark Knight")));
        source.respond_credits(155, Ok(credits_with_director(155, "Christopher Nolan")));
        let store = DetailStore::new(source);

        store.load(155).await;

        let state = store.snapshot().await;
        assert!(!state.is_loading);
        assert!(state.error.is_none());
        assert_eq!(state.movie.map(|m| m.title), Some("The Dark Knight".to_string()));
        assert_eq!(
            state.credits.as_ref().and_then(|c| c.director()).map(|d| d.name.clone()),
            Some("Christopher Nolan".to_string())
        );
    }

    #[tokio::test]
    async fn test_credits_failure_fails_whole_load() {
        let source = Arc::new(ScriptedSource::new());
        source.respond_details(7, Ok(details(7, "Seven")));
        source.respond_credits(7, Err(RemoteError::timeout()));
        let store = DetailStore::new(source);

        store.load(7).await;

        let state = store.snapshot().await;
        assert!(state.movie.is_none());
        assert!(state.credits.is_none());
        assert!(state.error.as_ref().map(|e| e.is_timeout()).unwrap_or(false));
        assert!(!state.is_loading);
    }

    #[tokio::test]
    async fn test_stale_details_discarded() {
        let source = Arc::new(ScriptedSource::new());
        let (tx, rx) = oneshot::channel();
        source.gate_details(1, rx);
        source.respond_credits(1, Ok(MovieCredits::default()));
        source.respond_details(2, Ok(details(2, "Second")));
        source.respond_credits(2, Ok(MovieCredits::default()));
        let store = DetailStore::new(source);

        let release = async {
            tokio::task::yield_now().await;
            store.load(2).await;
            tx.send(Ok(details(1, "First"))).ok();
        };
        tokio::join!(store.load(1), release);

        let state = store.snapshot().await;
        assert_eq!(state.movie_id, Some(2));
        assert_eq!(state.movie.map(|m| m.title), Some("Second".to_string()));
    }

    #[tokio::test]
    async fn test_close_discards_pending_load() {
        let source = Arc::new(ScriptedSource::new());
        let (tx, rx) = oneshot::channel();
        source.gate_details(3, rx);
        source.respond_credits(3, Ok(MovieCredits::default()));
        let store = DetailStore::new(source);

        let close_then_release = async {
            tokio::task::yield_now().await;
            store.close();
            tx.send(Ok(details(3, "Third"))).ok();
        };
        tokio::join!(store.load(3), close_then_release);

        assert!(store.snapshot().await.movie.is_none());
    }
}
