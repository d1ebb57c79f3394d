// config.rs

use crate::errors::ServerError;
use std::env;
use std::net::SocketAddr;

const DEFAULT_DATABASE_PATH: &str = "property_explorer.sqlite3";
const DEFAULT_SCHEMA_PATH: &str = "sql/schema.sql";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5001";
const DEFAULT_MAX_WORKERS: usize = 8;

/// Runtime settings, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_path: String,
    pub schema_path: String,
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
}

impl AppConfig {
    /// Reads `DATABASE_PATH`, `SCHEMA_PATH`, `BIND_ADDR` and `MAX_WORKERS`,
    /// falling back to local-development defaults.
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_path =
            lookup("DATABASE_PATH").unwrap_or_else(|| DEFAULT_DATABASE_PATH.to_string());
        let schema_path = lookup("SCHEMA_PATH").unwrap_or_else(|| DEFAULT_SCHEMA_PATH.to_string());

        let raw_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .parse()
            .map_err(|e| ServerError::Config(format!("Invalid BIND_ADDR `{raw_addr}`: {e}")))?;

        let max_workers = match lookup("MAX_WORKERS") {
            Some(raw) => raw
                .parse()
                .map_err(|e| ServerError::Config(format!("Invalid MAX_WORKERS `{raw}`: {e}")))?,
            None => DEFAULT_MAX_WORKERS,
        };

        Ok(Self {
            database_path,
            schema_path,
            bind_addr,
            max_workers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = AppConfig::from_lookup(|_| None).unwrap();

        assert_eq!(config.database_path, DEFAULT_DATABASE_PATH);
        assert_eq!(config.schema_path, DEFAULT_SCHEMA_PATH);
        assert_eq!(config.bind_addr.port(), 5001);
        assert_eq!(config.max_workers, 8);
    }

    #[test]
    fn environment_overrides_defaults() {
        let vars: HashMap<&str, &str> = [
            ("DATABASE_PATH", "/tmp/sales.sqlite3"),
            ("BIND_ADDR", "0.0.0.0:8080"),
            ("MAX_WORKERS", "2"),
        ]
        .into_iter()
        .collect();

        let config = AppConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string())).unwrap();

        assert_eq!(config.database_path, "/tmp/sales.sqlite3");
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.max_workers, 2);
    }

    #[test]
    fn bad_worker_count_is_rejected() {
        let result = AppConfig::from_lookup(|k| (k == "MAX_WORKERS").then(|| "many".to_string()));
        assert!(matches!(result, Err(ServerError::Config(_))));
    }
}
