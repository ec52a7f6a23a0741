//! Configuration of change-notify watches.
//!
//! Provides hierarchical configuration loading and validation with:
//! - Default values as code base
//! - Configuration file support
//! - Environment variable overrides

use std::env;

use config::Config;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;
use serde::Serialize;

use crate::constants::DEFAULT_NOTIFY_BUFFER_SIZE;
use crate::constants::MAX_NOTIFY_BUFFER_SIZE;
use crate::Error;
use crate::NotifyFilter;
use crate::NotifyFilterFlag;
use crate::Result;

const ENV_PREFIX: &str = "NOTIFY";

/// Settings a [`WatchContext`](crate::WatchContext) can be built from
///
/// Combines defaults with overrides, in increasing priority:
/// 1. Default values from code implementation
/// 2. Configuration file specified by `CONFIG_PATH`
/// 3. Environment variables with `NOTIFY__` prefix
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct NotifyConfig {
    /// Size in bytes of the server-side buffer that collects changes between
    /// two polls. When more changes pile up than fit, the server answers
    /// with an overflow status and the watch returns an empty batch.
    ///
    /// **Default**: 1024
    #[serde(default = "default_buffer_size")]
    pub buffer_size: u32,

    /// Change classes to report
    #[serde(default = "default_filter")]
    pub filter: Vec<NotifyFilterFlag>,

    /// Report changes anywhere below the watched directory
    #[serde(default)]
    pub recursive: bool,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            buffer_size: default_buffer_size(),
            filter: default_filter(),
            recursive: false,
        }
    }
}

impl NotifyConfig {
    /// Loads configuration from hierarchical sources without validation.
    ///
    /// Configuration sources are merged in the following order (later sources override earlier):
    /// 1. Type defaults (lowest priority)
    /// 2. Configuration file from `CONFIG_PATH` environment variable (if set)
    /// 3. Environment variables with `NOTIFY__` prefix (highest priority)
    ///
    /// # Note
    /// This method does NOT validate the configuration. Callers MUST call `validate()`
    /// before using the configuration.
    ///
    /// # Examples
    /// ```ignore
    /// std::env::set_var("NOTIFY__BUFFER_SIZE", "8192");
    /// let cfg = NotifyConfig::new()?.validate()?;
    /// ```
    pub fn new() -> Result<Self> {
        let mut builder = Config::builder().add_source(Config::try_from(&Self::default())?);

        if let Ok(config_path) = env::var("CONFIG_PATH") {
            builder = builder.add_source(File::with_name(&config_path).required(true));
        }

        builder = builder.add_source(Self::environment());

        let config: Self = builder.build()?.try_deserialize()?;
        Ok(config)
    }

    /// Applies additional configuration overrides from file without validation.
    ///
    /// Merging order (later sources override earlier):
    /// 1. Current configuration values
    /// 2. New configuration file
    /// 3. Latest environment variables (highest priority)
    pub fn with_override_config(
        &self,
        path: &str,
    ) -> Result<Self> {
        let config: Self = Config::builder()
            .add_source(Config::try_from(self)?)
            .add_source(File::with_name(path))
            .add_source(Self::environment())
            .build()?
            .try_deserialize()?;
        Ok(config)
    }

    /// Validates configuration and returns validated instance.
    pub fn validate(self) -> Result<Self> {
        if self.buffer_size == 0 {
            return Err(Error::Config(ConfigError::Message(
                "buffer_size must be greater than 0".into(),
            )));
        }

        if self.buffer_size > MAX_NOTIFY_BUFFER_SIZE {
            return Err(Error::Config(ConfigError::Message(format!(
                "buffer_size {} exceeds maximum {} bytes",
                self.buffer_size, MAX_NOTIFY_BUFFER_SIZE
            ))));
        }

        if self.filter.is_empty() {
            return Err(Error::Config(ConfigError::Message(
                "filter must name at least one change class".into(),
            )));
        }

        Ok(self)
    }

    /// Configured flags folded into a single completion filter
    pub fn completion_filter(&self) -> NotifyFilter {
        self.filter.iter().copied().collect()
    }

    fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .ignore_empty(true)
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("filter")
    }
}

fn default_buffer_size() -> u32 {
    DEFAULT_NOTIFY_BUFFER_SIZE
}

fn default_filter() -> Vec<NotifyFilterFlag> {
    vec![
        NotifyFilterFlag::FileName,
        NotifyFilterFlag::DirName,
        NotifyFilterFlag::LastWrite,
    ]
}
