//! Server configuration parsed from environment variables.

pub const DEFAULT_BIND_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}: {reason}")]
    InvalidPort { value: String, reason: String },
    #[error("BIND_HOST must not be empty")]
    EmptyBindHost,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `BIND_HOST`: default `0.0.0.0`
    /// - `PORT`: default 3000
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_host = match lookup("BIND_HOST") {
            Some(raw) if raw.trim().is_empty() => return Err(ConfigError::EmptyBindHost),
            Some(raw) => raw.trim().to_string(),
            None => DEFAULT_BIND_HOST.to_string(),
        };
        let port = match lookup("PORT") {
            Some(raw) => parse_port(&raw)?,
            None => DEFAULT_PORT,
        };
        Ok(Self { bind_host, port })
    }

    /// Socket address string accepted by `TcpListener::bind`.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.bind_host, self.port)
    }
}

fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    raw.trim()
        .parse::<u16>()
        .map_err(|e| ConfigError::InvalidPort { value: raw.to_string(), reason: e.to_string() })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
