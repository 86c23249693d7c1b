use crate::error::Result;
use crate::models::{NewPost, Post};
use crate::store::PostStore;
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

/// In-memory post store with monotonically assigned ids.
///
/// Backs the unit and integration test suites. Ordering matches the
/// PostgreSQL store: newest (highest id) first.
#[derive(Default)]
pub struct InMemoryPostStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    next_id: i64,
    posts: Vec<Post>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn find_all(&self) -> Result<Vec<Post>> {
        let inner = self.inner.lock().await;
        let mut posts = inner.posts.clone();
        posts.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(posts)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>> {
        let inner = self.inner.lock().await;
        Ok(inner.posts.iter().find(|p| p.id == id).cloned())
    }

    async fn create(&self, post: NewPost) -> Result<Post> {
        let mut inner = self.inner.lock().await;
        inner.next_id += 1;
        let created = Post {
            id: inner.next_id,
            content: post.content,
            posted_by: post.posted_by,
            tracking_cookie: post.tracking_cookie,
            created_at: Utc::now(),
        };
        inner.posts.push(created.clone());
        Ok(created)
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let mut inner = self.inner.lock().await;
        inner.posts.retain(|p| p.id != id);
        Ok(())
    }
}
