/// HTTP middleware for board-service
///
/// Basic authentication guarding the board routes. The middleware validates
/// the `Authorization` header against the configured credential table and
/// stores the authenticated name in request extensions, where the
/// `AuthenticatedUser` extractor recovers it for handlers.
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use futures_util::future::LocalBoxFuture;
use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;

use crate::error::AppError;

/// Authenticated user name stored in request extensions after auth.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub String);

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<AuthenticatedUser>()
                .cloned()
                .ok_or_else(|| AppError::Unauthorized("user identity missing".to_string()).into()),
        )
    }
}

/// Actix middleware that validates HTTP Basic credentials.
pub struct BasicAuthMiddleware {
    users: Arc<Vec<(String, String)>>,
}

impl BasicAuthMiddleware {
    pub fn new(users: Vec<(String, String)>) -> Self {
        Self {
            users: Arc::new(users),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for BasicAuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = BasicAuthMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(BasicAuthMiddlewareService {
            service: Rc::new(service),
            users: self.users.clone(),
        }))
    }
}

pub struct BasicAuthMiddlewareService<S> {
    service: Rc<S>,
    users: Arc<Vec<(String, String)>>,
}

impl<S, B> Service<ServiceRequest> for BasicAuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let users = self.users.clone();

        Box::pin(async move {
            let auth_header = req
                .headers()
                .get("Authorization")
                .and_then(|h| h.to_str().ok())
                .ok_or_else(|| unauthorized("missing Authorization header"))?;

            let encoded = auth_header
                .strip_prefix("Basic ")
                .ok_or_else(|| unauthorized("invalid Authorization scheme"))?;

            let name = verify_credentials(encoded, &users)
                .ok_or_else(|| unauthorized("invalid credentials"))?;

            req.extensions_mut().insert(AuthenticatedUser(name));

            service.call(req).await
        })
    }
}

fn unauthorized(reason: &str) -> Error {
    AppError::Unauthorized(reason.to_string()).into()
}

/// Decode a Basic credential blob and match it against the user table.
/// Returns the user name on success.
fn verify_credentials(encoded: &str, users: &[(String, String)]) -> Option<String> {
    let decoded = BASE64.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (name, password) = decoded.split_once(':')?;

    users
        .iter()
        .find(|(n, p)| n == name && p == password)
        .map(|(n, _)| n.clone())
}
