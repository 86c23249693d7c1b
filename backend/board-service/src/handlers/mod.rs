/// HTTP handlers for the board endpoints
///
/// - `posts`: list, create, and delete flows
/// - `bad_request`: shared fallback for unrouted methods and paths
pub mod posts;

pub use posts::{create, destroy, list};

use actix_web::{HttpRequest, HttpResponse};

/// Generic bad-request responder, registered as the default service. Any
/// method the endpoints do not support lands here and never reaches the
/// store.
pub async fn bad_request(req: HttpRequest) -> HttpResponse {
    tracing::warn!(method = %req.method(), path = %req.path(), "unsupported request");
    HttpResponse::BadRequest()
        .content_type("text/plain; charset=utf-8")
        .body("Bad Request")
}

/// Liveness probe, outside the authenticated scope.
pub async fn health_summary() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "service": "board-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
