use std::time::Duration;

use crate::toast::DEFAULT_TOAST_DURATION;

pub(super) fn default_appname() -> String {
    "toastkit".to_string()
}

pub(super) const fn default_duration() -> Duration {
    DEFAULT_TOAST_DURATION
}
