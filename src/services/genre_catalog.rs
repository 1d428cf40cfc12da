use std::sync::Arc;

use tokio::sync::RwLock;

use crate::external::MovieSource;
use crate::models::Genre;

/// 类型列表，供筛选面板使用
///
/// 加载失败只记录日志，列表保持为空，不影响其他功能。
pub struct GenreCatalog {
    source: Arc<dyn MovieSource>,
    genres: RwLock<Vec<Genre>>,
}

impl GenreCatalog {
    pub fn new(source: Arc<dyn MovieSource>) -> Self {
        Self {
            source,
            genres: RwLock::new(Vec::new()),
        }
    }

    /// 拉取类型列表，返回加载到的数量
    pub async fn load(&self) -> usize {
        match self.source.genres().await {
            Ok(list) => {
                let count = list.genres.len();
                *self.genres.write().await = list.genres;
                count
            }
            Err(e) => {
                tracing::error!("Error fetching genres: {}", e);
                self.genres.write().await.clear();
                0
            }
        }
    }

    pub async fn genres(&self) -> Vec<Genre> {
        self.genres.read().await.clone()
    }

    pub async fn name_for(&self, genre_id: u32) -> Option<String> {
        self.genres
            .read()
            .await
            .iter()
            .find(|g| g.id == genre_id)
            .map(|g| g.name.clone())
    }
}
