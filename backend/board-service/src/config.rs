/// Configuration management for board-service
///
/// Configuration is loaded from environment variables with development
/// defaults. `BOARD_USERS` holds the Basic-auth credential table as a
/// comma-separated list of `name:password` pairs.
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application settings
    pub app: AppConfig,
    /// Database configuration
    pub database: DatabaseConfig,
    /// Basic-auth credential table
    pub auth: AuthConfig,
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment (dev, staging, prod)
    pub env: String,
    /// Server host to bind to
    pub host: String,
    /// Server port to bind to
    pub port: u16,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database URL
    pub url: String,
    /// Max connections in pool
    pub max_connections: u32,
}

/// Basic-auth configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// `name:password` pairs accepted by the auth middleware
    pub users: Vec<(String, String)>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        let users = match std::env::var("BOARD_USERS") {
            Ok(value) => parse_user_table(&value)?,
            Err(_) if app_env.eq_ignore_ascii_case("production") => {
                return Err("BOARD_USERS must be set in production".to_string())
            }
            Err(_) => vec![
                ("admin".to_string(), "password".to_string()),
                ("guest1".to_string(), "guest1".to_string()),
                ("guest2".to_string(), "guest2".to_string()),
            ],
        };

        Ok(Config {
            app: AppConfig {
                env: app_env,
                host: std::env::var("BOARD_SERVICE_HOST")
                    .unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: std::env::var("BOARD_SERVICE_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(8080),
            },
            database: DatabaseConfig {
                url: std::env::var("DATABASE_URL")
                    .unwrap_or_else(|_| "postgresql://localhost/board".to_string()),
                max_connections: std::env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|c| c.parse().ok())
                    .unwrap_or(10),
            },
            auth: AuthConfig { users },
        })
    }
}

fn parse_user_table(raw: &str) -> Result<Vec<(String, String)>, String> {
    let mut users = Vec::new();
    for pair in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let (name, password) = pair
            .split_once(':')
            .ok_or_else(|| format!("BOARD_USERS entry '{}' is not name:password", pair))?;
        if name.is_empty() {
            return Err(format!("BOARD_USERS entry '{}' has an empty name", pair));
        }
        users.push((name.to_string(), password.to_string()));
    }
    if users.is_empty() {
        return Err("BOARD_USERS contained no usable entries".to_string());
    }
    Ok(users)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_user_table() {
        let users = parse_user_table("alice:secret, bob:hunter2").unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0], ("alice".to_string(), "secret".to_string()));
        assert_eq!(users[1], ("bob".to_string(), "hunter2".to_string()));
    }

    #[test]
    fn rejects_entries_without_separator() {
        assert!(parse_user_table("alice").is_err());
        assert!(parse_user_table(":secret").is_err());
        assert!(parse_user_table("  ,  ").is_err());
    }

    #[test]
    fn password_may_contain_colons() {
        let users = parse_user_table("alice:a:b:c").unwrap();
        assert_eq!(users[0].1, "a:b:c");
    }
}
