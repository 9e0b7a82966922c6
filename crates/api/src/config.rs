use std::path::PathBuf;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults matching a plain local run; only `PORT` is
/// normally overridden.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Location of the persisted lock state document (default: `state.json`).
    pub state_file: PathBuf,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

/// A configuration variable that is present but unparsable.
#[derive(Debug, thiserror::Error)]
#[error("{var} must be {expected}, got {value:?}")]
pub struct ConfigError {
    pub var: &'static str,
    pub expected: &'static str,
    pub value: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default      |
    /// |------------------------|--------------|
    /// | `HOST`                 | `0.0.0.0`    |
    /// | `PORT`                 | `3000`       |
    /// | `STATE_FILE`           | `state.json` |
    /// | `REQUEST_TIMEOUT_SECS` | `30`         |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());

        let port = parse_var(&lookup, "PORT", "a valid u16", 3000u16)?;

        let state_file = lookup("STATE_FILE")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("state.json"));

        let request_timeout_secs =
            parse_var(&lookup, "REQUEST_TIMEOUT_SECS", "a valid u64", 30u64)?;

        Ok(Self {
            host,
            port,
            state_file,
            request_timeout_secs,
        })
    }
}

fn parse_var<F, T>(
    lookup: &F,
    var: &'static str,
    expected: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError {
            var,
            expected,
            value,
        }),
    }
}
