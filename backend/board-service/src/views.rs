/// Server-rendered views for board-service
use askama::Template;

use crate::models::Post;

/// The board page: submission form plus the post collection, newest first.
/// Delete controls are rendered only for posts authored by `user`.
#[derive(Template)]
#[template(path = "posts.html")]
pub struct PostsTemplate<'a> {
    pub posts: &'a [Post],
    pub user: &'a str,
}
