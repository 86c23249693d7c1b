/// Persistence layer for board-service
///
/// Handlers depend on the narrow `PostStore` trait only. The PostgreSQL
/// implementation backs production; the in-memory implementation backs the
/// test suite and credential-free local runs.
pub mod memory;
pub mod postgres;

pub use memory::InMemoryPostStore;
pub use postgres::PgPostStore;

use crate::error::Result;
use crate::models::{NewPost, Post};
use async_trait::async_trait;
use std::sync::Arc;

/// Storage operations needed by the post endpoints.
///
/// `find_all` returns posts in descending id order (newest first); `create`
/// assigns the id. Every method is attempted exactly once per request.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// All posts, newest first.
    async fn find_all(&self) -> Result<Vec<Post>>;

    /// Keyed lookup. `None` when the id is unknown.
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>>;

    /// Persist a new post and return it with its assigned id.
    async fn create(&self, post: NewPost) -> Result<Post>;

    /// Destroy a post. A missing id is not an error here; existence is
    /// checked by the delete flow before this is called.
    async fn delete(&self, id: i64) -> Result<()>;
}

/// Shared handle handed to the HTTP layer.
pub type SharedPostStore = Arc<dyn PostStore>;
