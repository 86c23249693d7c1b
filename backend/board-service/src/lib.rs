/// Board Service Library
///
/// A minimal authenticated message board: list posts, create a post, and
/// delete your own post, with anonymous-visitor tracking via a short-lived
/// cookie.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers for the board endpoints
/// - `models`: Post data structures
/// - `store`: Persistence trait plus PostgreSQL and in-memory stores
/// - `middleware`: Basic authentication
/// - `tracking`: Tracking-cookie issuance
/// - `views`: Server-rendered templates
/// - `error`: Error types and handling
/// - `config`: Configuration management
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod store;
pub mod tracking;
pub mod views;

pub use config::Config;
pub use error::{AppError, Result};
