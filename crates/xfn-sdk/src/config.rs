use std::time::Duration;

use thiserror::Error;

/// Response TTL used when nothing else is configured.
pub const DEFAULT_TTL: Duration = Duration::from_secs(60);

/// Environment variable overriding the response TTL, in whole seconds.
pub const TTL_ENV: &str = "XFN_TTL_SECONDS";

/// Startup configuration shared by every invocation; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionConfig {
    /// Cache hint advertised in every response.
    pub ttl: Duration,
}

impl Default for FunctionConfig {
    fn default() -> Self {
        Self { ttl: DEFAULT_TTL }
    }
}

impl FunctionConfig {
    /// Build config from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(raw) = lookup(TTL_ENV) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidTtl(raw.clone()))?;
            config.ttl = Duration::from_secs(secs);
        }
        Ok(config)
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("XFN_TTL_SECONDS must be a whole number of seconds, got '{0}'")]
    InvalidTtl(String),
}
