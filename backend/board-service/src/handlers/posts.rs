/// Post handlers - the three request flows of the board
///
/// Each write flow follows the same lifecycle: accumulate the request body
/// to completion, decode the url-encoded form, authorize where required,
/// hit the store, then redirect. No response is written before the awaited
/// store operation has completed.
use actix_web::http::header;
use actix_web::{web, HttpRequest, HttpResponse};
use askama::Template;
use futures_util::StreamExt;
use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::middleware::AuthenticatedUser;
use crate::models::NewPost;
use crate::store::SharedPostStore;
use crate::tracking;
use crate::views::PostsTemplate;

#[derive(Debug, Deserialize)]
pub struct CreateForm {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteForm {
    pub id: Option<i64>,
}

/// GET /posts - render the board, newest post first.
pub async fn list(
    req: HttpRequest,
    store: web::Data<SharedPostStore>,
    user: AuthenticatedUser,
) -> Result<HttpResponse> {
    let visitor = tracking::obtain(&req);

    let posts = store.find_all().await?;
    let html = PostsTemplate {
        posts: &posts,
        user: &user.0,
    }
    .render()?;

    let connection = req.connection_info().clone();
    tracing::info!(
        user = %user.0,
        tracking_id = %visitor.value,
        remote_addr = %connection.realip_remote_addr().unwrap_or("-"),
        user_agent = %req
            .headers()
            .get(header::USER_AGENT)
            .and_then(|h| h.to_str().ok())
            .unwrap_or("-"),
        "posts viewed"
    );

    let mut resp = HttpResponse::Ok();
    resp.content_type("text/html; charset=utf-8");
    if let Some(cookie) = visitor.issued {
        resp.cookie(cookie);
    }
    Ok(resp.body(html))
}

/// POST /posts - create a post attributed to the current user.
///
/// An absent `content` field still produces a record; the redirect is only
/// built once the store has accepted the create.
pub async fn create(
    req: HttpRequest,
    payload: web::Payload,
    store: web::Data<SharedPostStore>,
    user: AuthenticatedUser,
) -> Result<HttpResponse> {
    let body = read_body(payload).await?;
    let form: CreateForm = decode_form(&body)?;

    let visitor = tracking::obtain(&req);
    tracing::info!(user = %user.0, content = ?form.content, "post submitted");

    store
        .create(NewPost {
            content: form.content,
            posted_by: user.0,
            tracking_cookie: Some(visitor.value.clone()),
        })
        .await?;

    let mut resp = HttpResponse::SeeOther();
    resp.insert_header((header::LOCATION, "/posts"));
    if let Some(cookie) = visitor.issued {
        resp.cookie(cookie);
    }
    Ok(resp.finish())
}

/// POST /posts/delete - destroy a post if the requester is its author.
pub async fn destroy(
    payload: web::Payload,
    store: web::Data<SharedPostStore>,
    user: AuthenticatedUser,
) -> Result<HttpResponse> {
    let body = read_body(payload).await?;
    let form: DeleteForm = decode_form(&body)?;
    let id = form
        .id
        .ok_or_else(|| AppError::BadRequest("post id missing from delete form".to_string()))?;

    let post = store.find_by_id(id).await?.ok_or_else(|| {
        tracing::warn!(post_id = id, "delete requested for unknown post");
        AppError::NotFound(format!("post {id} not found"))
    })?;

    if post.posted_by != user.0 {
        tracing::warn!(
            post_id = id,
            user = %user.0,
            author = %post.posted_by,
            "delete rejected: requester is not the author"
        );
        return Err(AppError::Forbidden(
            "only the author can delete a post".to_string(),
        ));
    }

    store.delete(id).await?;
    tracing::info!(post_id = id, user = %user.0, "post deleted");

    Ok(HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/posts"))
        .finish())
}

/// Buffer the request body until the stream signals completion. Nothing is
/// decoded from a partial body.
async fn read_body(mut payload: web::Payload) -> Result<web::BytesMut> {
    let mut body = web::BytesMut::new();
    while let Some(chunk) = payload.next().await {
        let chunk =
            chunk.map_err(|e| AppError::BadRequest(format!("failed to read request body: {e}")))?;
        body.extend_from_slice(&chunk);
    }
    Ok(body)
}

fn decode_form<'de, T: Deserialize<'de>>(body: &'de [u8]) -> Result<T> {
    serde_urlencoded::from_bytes(body)
        .map_err(|e| AppError::BadRequest(format!("undecodable form body: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_form_field_is_optional() {
        let form: CreateForm = decode_form(b"content=hello").unwrap();
        assert_eq!(form.content.as_deref(), Some("hello"));

        let form: CreateForm = decode_form(b"").unwrap();
        assert!(form.content.is_none());
    }

    #[test]
    fn create_form_decodes_percent_encoding() {
        let form: CreateForm = decode_form(b"content=hello%20world%21").unwrap();
        assert_eq!(form.content.as_deref(), Some("hello world!"));
    }

    #[test]
    fn delete_form_wants_a_numeric_id() {
        let form: DeleteForm = decode_form(b"id=42").unwrap();
        assert_eq!(form.id, Some(42));

        let form: DeleteForm = decode_form(b"").unwrap();
        assert!(form.id.is_none());

        assert!(decode_form::<DeleteForm>(b"id=not-a-number").is_err());
    }
}
