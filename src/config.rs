//! Application configuration loaded from environment variables.
//!
//! Every value has a default suitable for local development only; override
//! them in production.

use std::env;

/// Default JWT secret, for local development only.
const INSECURE_DEFAULT_SECRET: &str = "supersecret";

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// MongoDB connection string
    pub mongodb_uri: String,
    /// Database name
    pub db_name: String,
    /// JWT signing key for session tokens (raw bytes)
    pub jwt_signing_key: Vec<u8>,
    /// Directory of static client assets
    pub static_dir: String,
    /// Frontend origin allowed by CORS (in addition to localhost)
    pub frontend_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Loads a `.env` file if present. Warns when the JWT secret is left at
    /// its insecure default.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let jwt_secret =
            env::var("JWT_SECRET").unwrap_or_else(|_| INSECURE_DEFAULT_SECRET.to_string());
        if jwt_secret == INSECURE_DEFAULT_SECRET {
            tracing::warn!("JWT_SECRET not set, using insecure default (local dev only)");
        }

        Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "4000".to_string())
                .parse()
                .unwrap_or(4000),
            mongodb_uri: env::var("MONGODB_URI")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            db_name: env::var("DB_NAME").unwrap_or_else(|_| "leaderboardDB".to_string()),
            jwt_signing_key: jwt_secret.into_bytes(),
            static_dir: env::var("STATIC_DIR").unwrap_or_else(|_| "public".to_string()),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:4000".to_string()),
        }
    }

    /// Default config for tests.
    pub fn test_default() -> Self {
        Self {
            port: 4000,
            mongodb_uri: "mongodb://localhost:27017".to_string(),
            db_name: "leaderboardDB_test".to_string(),
            jwt_signing_key: b"test_jwt_key_32_bytes_minimum!!".to_vec(),
            static_dir: "public".to_string(),
            frontend_url: "http://localhost:4000".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test because env vars are process-global and tests run in
    // parallel.
    #[test]
    fn test_config_defaults_and_override() {
        env::remove_var("PORT");
        env::remove_var("DB_NAME");

        let config = Config::from_env();
        assert_eq!(config.port, 4000);
        assert_eq!(config.db_name, "leaderboardDB");
        assert_eq!(config.static_dir, "public");

        env::set_var("PORT", "9999");
        let config = Config::from_env();
        assert_eq!(config.port, 9999);
        env::remove_var("PORT");
    }
}
