//! Database configuration module

use serde::{Deserialize, Serialize};

/// Database configuration for MongoDB connections
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// MongoDB connection URI
    pub uri: String,

    /// Database name
    pub database: String,

    /// Connection timeout in seconds
    pub connect_timeout: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            uri: String::from("mongodb://localhost:27017"),
            database: String::from("curezone"),
            connect_timeout: 30,
        }
    }
}

impl DatabaseConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let uri = std::env::var("MONGODB_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let database =
            std::env::var("MONGODB_DATABASE").unwrap_or_else(|_| "curezone".to_string());
        let connect_timeout = std::env::var("MONGODB_CONNECT_TIMEOUT")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30);

        Self {
            uri,
            database,
            connect_timeout,
        }
    }

    /// Create a new database configuration with a connection URI
    pub fn new(uri: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            database: database.into(),
            ..Default::default()
        }
    }
}
