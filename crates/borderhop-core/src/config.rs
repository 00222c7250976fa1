//! Layered configuration: defaults, then a TOML file, then `BORDERHOP_*`
//! environment variables.
//!
//! ```toml
//! [api]
//! base_url = "https://restcountries.com"
//! timeout_secs = 10
//! max_attempts = 3
//!
//! [storage]
//! data_dir = "/var/cache/borderhop"
//! ```
//!
//! Nested keys are addressed from the environment with a double underscore,
//! e.g. `BORDERHOP_API__MAX_ATTEMPTS=5`.

use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::gateway::{RetryPolicy, DEFAULT_MAX_ATTEMPTS};

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "borderhop.toml";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "BORDERHOP_";

/// Remote API settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the countries API.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Attempts per lookup, first one included.
    pub max_attempts: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://restcountries.com".to_string(),
            timeout_secs: 10,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl ApiConfig {
    /// Retry policy derived from `max_attempts`.
    #[must_use]
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.max_attempts)
    }
}

/// Local storage settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding the store file. Unset means "let the caller pick".
    pub data_dir: Option<PathBuf>,
}

/// Complete configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BorderhopConfig {
    /// Remote API settings.
    pub api: ApiConfig,
    /// Local storage settings.
    pub storage: StorageConfig,
}

impl BorderhopConfig {
    /// Loads the configuration.
    ///
    /// With `path` set, that file must exist. Without it,
    /// [`DEFAULT_CONFIG_FILE`] is read when present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let figment = match path {
            Some(path) => {
                if !path.exists() {
                    return Err(Error::Config(format!(
                        "config file not found: {}",
                        path.display()
                    )));
                }
                Self::figment(path)
            }
            None => Self::figment(Path::new(DEFAULT_CONFIG_FILE)),
        };
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Provider chain used by [`BorderhopConfig::load`].
    #[must_use]
    pub fn figment(path: &Path) -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<()> {
        if self.api.max_attempts == 0 {
            return Err(Error::Config("api.max_attempts must be at least 1".to_string()));
        }
        if self.api.timeout_secs == 0 {
            return Err(Error::Config("api.timeout_secs must be at least 1".to_string()));
        }
        if self.api.base_url.trim().is_empty() {
            return Err(Error::Config("api.base_url must not be empty".to_string()));
        }
        Ok(())
    }
}
