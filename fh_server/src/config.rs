//! Server configuration management.
//!
//! Consolidates all environment variable reads and provides validated configuration.

use std::collections::HashSet;
use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 5000;

/// Default number of rounds to play
pub const DEFAULT_TOTAL_ROUNDS: usize = 3;

/// Tables used when none are configured
pub const DEFAULT_TABLES: &str = "T1,T2,T3";

/// Complete server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server bind address
    pub bind: SocketAddr,
    /// Newline-delimited roster file
    pub players_file: PathBuf,
    /// Table names, in seating order
    pub tables: Vec<String>,
    /// Advisory number of rounds
    pub total_rounds: usize,
    /// Prometheus exporter address (disabled when unset)
    pub metrics_bind: Option<SocketAddr>,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Arguments
    ///
    /// * `bind_override` - Optional bind address override (from CLI args)
    /// * `players_override` - Optional roster file override (from CLI args)
    /// * `tables_override` - Optional table list or count override (from CLI args)
    /// * `rounds_override` - Optional round target override (from CLI args)
    ///
    /// # Errors
    ///
    /// Returns error if a set variable cannot be parsed
    pub fn from_env(
        bind_override: Option<SocketAddr>,
        players_override: Option<PathBuf>,
        tables_override: Option<String>,
        rounds_override: Option<usize>,
    ) -> Result<Self, ConfigError> {
        let bind = match bind_override {
            Some(bind) => bind,
            None => parse_env("SERVER_BIND")?
                .unwrap_or_else(|| SocketAddr::from((Ipv4Addr::LOCALHOST, DEFAULT_PORT))),
        };

        let players_file = players_override
            .or_else(|| std::env::var("PLAYERS_FILE").ok().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("players.txt"));

        let tables_setting = tables_override
            .or_else(|| std::env::var("TOURNAMENT_TABLES").ok())
            .unwrap_or_else(|| DEFAULT_TABLES.to_string());

        let total_rounds = match rounds_override {
            Some(rounds) => rounds,
            None => parse_env("TOTAL_ROUNDS")?.unwrap_or(DEFAULT_TOTAL_ROUNDS),
        };

        Ok(ServerConfig {
            bind,
            players_file,
            tables: parse_tables(&tables_setting),
            total_rounds,
            metrics_bind: parse_env("METRICS_BIND")?,
        })
    }

    /// Validate configuration after loading
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.total_rounds == 0 {
            return Err(ConfigError::Invalid {
                var: "TOTAL_ROUNDS".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        if self.tables.is_empty() {
            return Err(ConfigError::Invalid {
                var: "TOURNAMENT_TABLES".to_string(),
                reason: "At least one table is required".to_string(),
            });
        }

        let mut seen = HashSet::new();
        if let Some(duplicate) = self.tables.iter().find(|name| !seen.insert(name.as_str())) {
            return Err(ConfigError::Invalid {
                var: "TOURNAMENT_TABLES".to_string(),
                reason: format!("Table {duplicate} is listed twice"),
            });
        }

        Ok(())
    }
}

/// Parse a table list: either a count `N` (tables `T1..TN`) or
/// comma-separated names.
pub fn parse_tables(value: &str) -> Vec<String> {
    let value = value.trim();
    if let Ok(count) = value.parse::<usize>() {
        return (1..=count).map(|i| format!("T{i}")).collect();
    }

    value
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

/// Parse an optional environment variable. Unset is `None`; set but
/// unparseable is an error.
fn parse_env<T>(key: &str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|e: T::Err| ConfigError::Invalid {
                var: key.to_string(),
                reason: e.to_string(),
            }),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ServerConfig {
        ServerConfig {
            bind: "127.0.0.1:8080".parse().unwrap(),
            players_file: PathBuf::from("players.txt"),
            tables: parse_tables(DEFAULT_TABLES),
            total_rounds: 3,
            metrics_bind: None,
        }
    }

    #[test]
    fn test_parse_tables_count() {
        assert_eq!(parse_tables("4"), vec!["T1", "T2", "T3", "T4"]);
        assert!(parse_tables("0").is_empty());
    }

    #[test]
    fn test_parse_tables_names() {
        assert_eq!(
            parse_tables(" North Hall, Kitchen ,,Porch "),
            vec!["North Hall", "Kitchen", "Porch"]
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Invalid {
            var: "TOTAL_ROUNDS".to_string(),
            reason: "Must be greater than 0".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("TOTAL_ROUNDS"));
        assert!(msg.contains("greater than 0"));
    }

    #[test]
    fn test_config_validation_ok() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn test_config_validation_zero_rounds() {
        let config = ServerConfig {
            total_rounds: 0, // Invalid
            ..config()
        };

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn test_config_validation_no_tables() {
        let config = ServerConfig {
            tables: Vec::new(),
            ..config()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_duplicate_tables() {
        let config = ServerConfig {
            tables: parse_tables("T1,T2,T1"),
            ..config()
        };

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("T1"));
    }

    #[test]
    fn test_overrides_take_precedence() {
        let config = ServerConfig::from_env(
            Some("0.0.0.0:9000".parse().unwrap()),
            Some(PathBuf::from("roster.txt")),
            Some("2".to_string()),
            Some(5),
        )
        .unwrap();

        assert_eq!(config.bind.port(), 9000);
        assert_eq!(config.players_file, PathBuf::from("roster.txt"));
        assert_eq!(config.tables, vec!["T1", "T2"]);
        assert_eq!(config.total_rounds, 5);
    }
}
