use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

const TIMEOUT_VAR: &str = "REQUEST_EASY_TIMEOUT_SECS";
const USER_AGENT_VAR: &str = "REQUEST_EASY_USER_AGENT";
const REJECT_STATUS_VAR: &str = "REQUEST_EASY_REJECT_ERROR_STATUS";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be {expected}, got '{value}'")]
    InvalidVar {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
    #[error("failed to read config file {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Settings passed through to the host adapters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FetcherConfig {
    /// Whole-request timeout in seconds.  `None` waits indefinitely.
    pub timeout_secs: Option<u64>,
    pub user_agent: String,
    /// Treat a non-2xx status as a transport error instead of decoding the
    /// body that came with it.
    pub reject_error_status: bool,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            timeout_secs: None,
            user_agent: format!("request-easy/{}", env!("CARGO_PKG_VERSION")),
            reject_error_status: false,
        }
    }
}

impl FetcherConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Defaults overlaid with the `REQUEST_EASY_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`FetcherConfig::from_env`] with an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(value) = lookup(TIMEOUT_VAR) {
            let secs = value.trim().parse().map_err(|_| ConfigError::InvalidVar {
                var: TIMEOUT_VAR,
                expected: "a whole number of seconds",
                value: value.clone(),
            })?;
            config.timeout_secs = Some(secs);
        }
        if let Some(value) = lookup(USER_AGENT_VAR) {
            config.user_agent = value;
        }
        if let Some(value) = lookup(REJECT_STATUS_VAR) {
            config.reject_error_status = parse_flag(&value).ok_or_else(|| ConfigError::InvalidVar {
                var: REJECT_STATUS_VAR,
                expected: "true or false",
                value: value.clone(),
            })?;
        }
        Ok(config)
    }

    /// Read a JSON config file.  Missing fields keep their defaults.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
