use std::str::FromStr;

use axum::http::HeaderValue;

use crate::auth::jwt::JwtConfig;

/// Startup configuration problems. Any of these aborts the server.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be a valid {expected}, got '{value}'")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("{present} is set but {missing} is not; set both to enable admin auth")]
    Incomplete {
        present: &'static str,
        missing: &'static str,
    },
}

/// Which origins the CORS layer admits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    Any,
    List(Vec<HeaderValue>),
}

/// PostgreSQL connection settings. Absent means the in-memory store is used.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

/// Admin authentication settings. Absent means mutations are open.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Argon2id PHC string of the admin password.
    pub admin_password_hash: String,
    pub jwt: JwtConfig,
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, from comma-separated `CORS_ORIGINS` (`*` = any).
    pub cors_origins: CorsOrigins,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    pub database: Option<DatabaseConfig>,
    pub auth: Option<AuthConfig>,
}

const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_ACCESS_EXPIRY_MINS: i64 = 60;

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                    | Default                 |
    /// |----------------------------|-------------------------|
    /// | `HOST`                     | `0.0.0.0`               |
    /// | `PORT`                     | `3000`                  |
    /// | `CORS_ORIGINS`             | `*`                     |
    /// | `REQUEST_TIMEOUT_SECS`     | `30`                    |
    /// | `DATABASE_URL`             | unset (in-memory store) |
    /// | `DATABASE_MAX_CONNECTIONS` | `5`                     |
    /// | `ADMIN_PASSWORD_HASH`      | unset (auth disabled)   |
    /// | `JWT_SECRET`               | unset (auth disabled)   |
    /// | `JWT_ACCESS_EXPIRY_MINS`   | `60`                    |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let host = var("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = parse_or(var("PORT"), "PORT", "u16", 3000)?;
        let cors_origins = parse_cors_origins(var("CORS_ORIGINS").as_deref().unwrap_or("*"))?;
        let request_timeout_secs =
            parse_or(var("REQUEST_TIMEOUT_SECS"), "REQUEST_TIMEOUT_SECS", "u64", 30)?;

        let database = match var("DATABASE_URL") {
            Some(url) => Some(DatabaseConfig {
                url,
                max_connections: parse_or(
                    var("DATABASE_MAX_CONNECTIONS"),
                    "DATABASE_MAX_CONNECTIONS",
                    "u32",
                    DEFAULT_MAX_CONNECTIONS,
                )?,
            }),
            None => None,
        };

        let auth = match (var("ADMIN_PASSWORD_HASH"), var("JWT_SECRET")) {
            (Some(admin_password_hash), Some(secret)) => {
                if argon2::PasswordHash::new(&admin_password_hash).is_err() {
                    return Err(ConfigError::Invalid {
                        name: "ADMIN_PASSWORD_HASH",
                        expected: "PHC password hash",
                        value: admin_password_hash,
                    });
                }
                let access_token_expiry_mins = parse_or(
                    var("JWT_ACCESS_EXPIRY_MINS"),
                    "JWT_ACCESS_EXPIRY_MINS",
                    "i64",
                    DEFAULT_ACCESS_EXPIRY_MINS,
                )?;
                Some(AuthConfig {
                    admin_password_hash,
                    jwt: JwtConfig {
                        secret,
                        access_token_expiry_mins,
                    },
                })
            }
            (Some(_), None) => {
                return Err(ConfigError::Incomplete {
                    present: "ADMIN_PASSWORD_HASH",
                    missing: "JWT_SECRET",
                })
            }
            (None, Some(_)) => {
                return Err(ConfigError::Incomplete {
                    present: "JWT_SECRET",
                    missing: "ADMIN_PASSWORD_HASH",
                })
            }
            (None, None) => None,
        };

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            database,
            auth,
        })
    }
}

fn parse_or<T: FromStr>(
    value: Option<String>,
    name: &'static str,
    expected: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
            name,
            expected,
            value: raw,
        }),
        None => Ok(default),
    }
}

fn parse_cors_origins(raw: &str) -> Result<CorsOrigins, ConfigError> {
    let origins: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if origins.is_empty() || origins.contains(&"*") {
        return Ok(CorsOrigins::Any);
    }

    origins
        .into_iter()
        .map(|o| {
            HeaderValue::from_str(o).map_err(|_| ConfigError::Invalid {
                name: "CORS_ORIGINS",
                expected: "origin list",
                value: o.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(CorsOrigins::List)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|name| map.get(name).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = load(&[]).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.cors_origins, CorsOrigins::Any);
        assert_eq!(config.request_timeout_secs, 30);
        assert!(config.database.is_none());
        assert!(config.auth.is_none());
    }

    #[test]
    fn explicit_origins_are_parsed() {
        let config = load(&[("CORS_ORIGINS", "http://a.test, http://b.test")]).unwrap();
        assert_eq!(
            config.cors_origins,
            CorsOrigins::List(vec![
                HeaderValue::from_static("http://a.test"),
                HeaderValue::from_static("http://b.test"),
            ])
        );
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = load(&[("PORT", "not-a-port")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "PORT", .. }));
    }

    #[test]
    fn database_url_enables_postgres() {
        let config = load(&[
            ("DATABASE_URL", "postgres://localhost/folio"),
            ("DATABASE_MAX_CONNECTIONS", "9"),
        ])
        .unwrap();
        let database = config.database.unwrap();
        assert_eq!(database.url, "postgres://localhost/folio");
        assert_eq!(database.max_connections, 9);
    }

    #[test]
    fn auth_requires_both_hash_and_secret() {
        let err = load(&[("JWT_SECRET", "s3cret")]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Incomplete {
                present: "JWT_SECRET",
                ..
            }
        ));
    }

    #[test]
    fn auth_rejects_malformed_hash() {
        let err = load(&[("ADMIN_PASSWORD_HASH", "plaintext"), ("JWT_SECRET", "s")]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                name: "ADMIN_PASSWORD_HASH",
                ..
            }
        ));
    }

    #[test]
    fn auth_enabled_with_valid_hash() {
        let hash = crate::auth::password::hash_password("correct-horse").unwrap();
        let config = load(&[
            ("ADMIN_PASSWORD_HASH", hash.as_str()),
            ("JWT_SECRET", "s3cret"),
            ("JWT_ACCESS_EXPIRY_MINS", "5"),
        ])
        .unwrap();
        let auth = config.auth.unwrap();
        assert_eq!(auth.jwt.secret, "s3cret");
        assert_eq!(auth.jwt.access_token_expiry_mins, 5);
    }
}
