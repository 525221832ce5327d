use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use serde_with::serde_as;

use crate::Result;
use crate::error::ConfigError;

use super::defaults::{default_appname, default_duration};
use super::env::{duration_var, env_string};
use super::{Config, HumantimeDuration, ToastSettings};

pub(super) fn load(path: impl AsRef<Path>) -> std::result::Result<RawConfig, ConfigError> {
    let mut builder = ::config::Config::builder();
    let path = path.as_ref();
    builder = builder.add_source(::config::File::from(path).required(false));
    builder = builder.add_source(
        ::config::Environment::with_prefix("TOASTKIT")
            .separator("__")
            .try_parsing(true),
    );

    builder
        .build()
        .map_err(|err| ConfigError::Other(err.to_string()))?
        .try_deserialize()
        .map_err(|err| ConfigError::Parse(err.to_string()))
}

#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub(super) struct RawConfig {
    #[serde(default)]
    pub(super) toast: RawToast,
}

#[serde_as]
#[derive(Debug, Deserialize)]
pub(super) struct RawToast {
    #[serde(default = "default_appname")]
    pub(super) appname: String,
    #[serde(default = "default_duration")]
    #[serde_as(as = "HumantimeDuration")]
    pub(super) default_duration: Duration,
    #[serde(default)]
    pub(super) icon: Option<PathBuf>,
}

impl RawConfig {
    pub(super) fn apply_env_overrides(&mut self) -> std::result::Result<(), ConfigError> {
        self.apply_overrides(env_string)
    }

    fn apply_overrides<F>(&mut self, lookup: F) -> std::result::Result<(), ConfigError>
    where
        F: Fn(&'static str) -> std::result::Result<Option<String>, ConfigError>,
    {
        if let Some(appname) = lookup("TOASTKIT_APPNAME")? {
            self.toast.appname = appname;
        }
        let key = "TOASTKIT_DEFAULT_DURATION";
        if let Some(duration) = duration_var(key, lookup(key)?)? {
            self.toast.default_duration = duration;
        }
        if let Some(icon) = lookup("TOASTKIT_ICON")? {
            self.toast.icon = (!icon.trim().is_empty()).then(|| PathBuf::from(icon));
        }
        Ok(())
    }

    pub(super) fn validate_and_build(self) -> Result<Config> {
        if self.toast.appname.trim().is_empty() {
            return Err(ConfigError::InvalidField {
                field: "toast.appname",
                message: "application name cannot be empty".to_string(),
            }
            .into());
        }
        if self.toast.default_duration.is_zero() {
            return Err(ConfigError::InvalidField {
                field: "toast.default_duration",
                message: "duration must be greater than zero".to_string(),
            }
            .into());
        }
        if self.toast.default_duration.as_millis() > u128::from(u32::MAX) {
            return Err(ConfigError::InvalidField {
                field: "toast.default_duration",
                message: format!("expected at most {}ms", u32::MAX),
            }
            .into());
        }

        Ok(Config {
            toast: ToastSettings {
                appname: self.toast.appname,
                default_duration: self.toast.default_duration,
                icon: self.toast.icon,
            },
        })
    }
}

impl Default for RawToast {
    fn default() -> Self {
        Self {
            appname: default_appname(),
            default_duration: default_duration(),
            icon: None,
        }
    }
}
