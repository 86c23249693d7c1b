/// Data models for board-service
///
/// - Post: a single user-submitted text entry on the board
/// - NewPost: the insert payload produced by the create flow
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored board post.
///
/// `id` is assigned by the store and doubles as the ordering key: the list
/// flow presents posts in descending id order. `posted_by` is set once at
/// creation and is the sole authorization key for deletion.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
    pub id: i64,
    pub content: Option<String>,
    pub posted_by: String,
    pub tracking_cookie: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a new post. `content` stays `None` when the form
/// field was absent; the record is created regardless.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub content: Option<String>,
    pub posted_by: String,
    pub tracking_cookie: Option<String>,
}
