use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::Result;
use crate::error::Error as ToastkitError;
use crate::toast::ToastOptions;

mod defaults;
mod env;
mod raw;
mod serde;

pub(crate) use self::serde::HumantimeDuration;

pub const DEFAULT_CONFIG_FILE: &str = "toastkit.toml";

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub toast: ToastSettings,
}

#[derive(Debug, Clone)]
pub struct ToastSettings {
    pub appname: String,
    pub default_duration: Duration,
    pub icon: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a file and the environment.
    ///
    /// A missing file is not an error; every field has a default.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be parsed, when an environment
    /// override is malformed, or when the resulting values fail validation.
    pub fn from_env_and_file(path: impl AsRef<Path>) -> Result<Self> {
        let mut raw = raw::load(path).map_err(ToastkitError::from)?;
        raw.apply_env_overrides().map_err(ToastkitError::from)?;
        raw.validate_and_build()
    }
}

impl ToastSettings {
    /// Options the toast decorator merges under every bare call.
    #[must_use]
    pub fn default_options(&self) -> ToastOptions {
        ToastOptions::new().with_duration(self.default_duration)
    }
}

impl Default for ToastSettings {
    fn default() -> Self {
        Self {
            appname: defaults::default_appname(),
            default_duration: defaults::default_duration(),
            icon: None,
        }
    }
}
