mod client;
pub mod documents;
pub mod fetch;
mod response;

pub use client::Client;
pub use documents::Query;
pub use fetch::{FetchState, QueryHandle};

use std::time::Duration;

use toml::{map::Map, Value};
use tracing::info;
use util::{config_integer, config_str};

static DEFAULT_USER_AGENT: &str = "Chainboard-Rust-App";

pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(60);
pub const DEFAULT_CACHE_CAPACITY: u64 = 1_000;

#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("in reqwest crate: {}: {}", message, source)]
    ReqwestError {
        message: String,
        source: reqwest::Error,
    },

    #[error("in serde_json crate: {}: {}", message, source)]
    SerdeJsonError {
        message: String,
        source: serde_json::Error,
    },

    #[error("invalid header value: {}: {}", message, source)]
    InvalidHeaderValue {
        message: String,
        source: reqwest::header::InvalidHeaderValue,
    },

    #[error("failed status code {}: {}", status_code, message)]
    FailedStatusCode {
        status_code: reqwest::StatusCode,
        message: String,
    },

    /// Errors reported by the GraphQL backend, verbatim.
    #[error("{}", message)]
    GraphQl { message: String },

    #[error("{}", message)]
    Option { message: String },
}

#[derive(Clone, Debug)]
pub struct Config {
    pub endpoint: String,
    pub user_agent: String,
    /// How long a cached result is served before the next fetch goes back
    /// to the backend.
    pub cache_ttl: Duration,
    /// Upper bound on cached results.
    pub cache_capacity: u64,
}

impl Config {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            cache_ttl: DEFAULT_CACHE_TTL,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

pub fn init_config(config: &Map<String, Value>) -> anyhow::Result<Config> {
    let endpoint = config_str(config, "graphql", "endpoint")?;
    let user_agent = config_str(config, "graphql", "user_agent")
        .unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string());

    let cache_ttl = config_integer(config, "graphql", "cache_ttl_secs")
        .ok()
        .and_then(|secs| u64::try_from(secs).ok())
        .map(Duration::from_secs)
        .unwrap_or(DEFAULT_CACHE_TTL);
    let cache_capacity = config_integer(config, "graphql", "cache_capacity")
        .ok()
        .and_then(|capacity| u64::try_from(capacity).ok())
        .unwrap_or(DEFAULT_CACHE_CAPACITY);

    info!(
        task = "load graphql config",
        endpoint,
        cache_ttl_secs = cache_ttl.as_secs(),
        cache_capacity
    );

    Ok(Config {
        endpoint,
        user_agent,
        cache_ttl,
        cache_capacity,
    })
}

#[cfg(test)]
mod test {
    use util::parse_config;

    use super::*;

    #[test]
    fn test_init_config_defaults_user_agent() {
        // Arrange
        let config = parse_config(
            r#"
            [graphql]
            endpoint = "http://localhost:8080/v1/graphql"
            "#,
        )
        .unwrap();

        // Act
        let config = init_config(&config).unwrap();

        // Assert
        assert_eq!(config.endpoint, "http://localhost:8080/v1/graphql");
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(config.cache_ttl, DEFAULT_CACHE_TTL);
        assert_eq!(config.cache_capacity, DEFAULT_CACHE_CAPACITY);
    }

    #[test]
    fn test_init_config_reads_cache_bounds() {
        // Arrange
        let config = parse_config(
            r#"
            [graphql]
            endpoint = "http://localhost:8080/v1/graphql"
            cache_ttl_secs = 15
            cache_capacity = 200
            "#,
        )
        .unwrap();

        // Act
        let config = init_config(&config).unwrap();

        // Assert
        assert_eq!(config.cache_ttl, Duration::from_secs(15));
        assert_eq!(config.cache_capacity, 200);
    }

    #[test]
    fn test_init_config_requires_endpoint() {
        let config = parse_config("[graphql]\n").unwrap();

        assert!(init_config(&config).is_err());
    }
}
