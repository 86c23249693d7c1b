/// Anonymous-visitor tracking cookie
///
/// The list and create flows call [`obtain`] before building their
/// responses: when the inbound jar lacks the tracking key, a fresh token is
/// generated and a cookie with a 24-hour expiry is attached to the
/// response; an existing cookie is left untouched.
use actix_web::cookie::time::{Duration, OffsetDateTime};
use actix_web::cookie::Cookie;
use actix_web::HttpRequest;
use rand::Rng;

/// Cookie key carrying the visitor token.
pub const TRACKING_COOKIE: &str = "tracking_id";

/// Tokens are drawn uniformly from the safe-integer domain `[0, 2^53)`.
const TOKEN_BOUND: u64 = 1 << 53;

/// Tracking token for the current request, plus the cookie to set when the
/// token was issued just now.
pub struct TrackingId {
    pub value: String,
    pub issued: Option<Cookie<'static>>,
}

/// Read the visitor token from the request jar, issuing a new one if absent.
pub fn obtain(req: &HttpRequest) -> TrackingId {
    if let Some(cookie) = req.cookie(TRACKING_COOKIE) {
        return TrackingId {
            value: cookie.value().to_string(),
            issued: None,
        };
    }

    let token = rand::thread_rng().gen_range(0..TOKEN_BOUND);
    let cookie = Cookie::build(TRACKING_COOKIE, token.to_string())
        .path("/")
        .expires(OffsetDateTime::now_utc() + Duration::hours(24))
        .finish();

    TrackingId {
        value: token.to_string(),
        issued: Some(cookie),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn issues_token_when_jar_is_empty() {
        let req = TestRequest::default().to_http_request();
        let tracking = obtain(&req);

        let cookie = tracking.issued.expect("cookie should be issued");
        assert_eq!(cookie.name(), TRACKING_COOKIE);
        assert_eq!(cookie.value(), tracking.value);

        let token: u64 = tracking.value.parse().expect("token is an integer");
        assert!(token < TOKEN_BOUND);
    }

    #[test]
    fn keeps_existing_token() {
        let req = TestRequest::default()
            .cookie(Cookie::new(TRACKING_COOKIE, "12345"))
            .to_http_request();
        let tracking = obtain(&req);

        assert_eq!(tracking.value, "12345");
        assert!(tracking.issued.is_none());
    }

    #[test]
    fn issued_cookie_expires_in_a_day() {
        let req = TestRequest::default().to_http_request();
        let cookie = obtain(&req).issued.expect("cookie should be issued");

        let expires = cookie
            .expires_datetime()
            .expect("expiry should be a datetime");
        let lifetime = expires - OffsetDateTime::now_utc();
        assert!(lifetime <= Duration::hours(24));
        assert!(lifetime > Duration::hours(23));
    }
}
