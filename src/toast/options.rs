use std::time::Duration;

use humantime::parse_duration;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Reserved option controlling how long a toast stays on screen, in milliseconds.
pub const DURATION_KEY: &str = "duration";
pub const ICON_KEY: &str = "icon";
/// Asks the backend to replace the toast already shown under this id.
pub const ID_KEY: &str = "id";

pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(5_000);

/// Option mapping passed alongside a toast.
///
/// Keys are opaque to everything but the backend, which understands
/// [`DURATION_KEY`], [`ICON_KEY`] and [`ID_KEY`].
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ToastOptions(Map<String, Value>);

impl ToastOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    #[must_use]
    pub fn with_duration(self, duration: Duration) -> Self {
        self.with(DURATION_KEY, duration_to_millis(duration))
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Display duration, if the option holds milliseconds or a humantime string.
    #[must_use]
    pub fn duration(&self) -> Option<Duration> {
        match self.get(DURATION_KEY)? {
            Value::Number(ms) => ms.as_u64().map(Duration::from_millis),
            Value::String(raw) => parse_duration(raw.trim()).ok(),
            _ => None,
        }
    }

    #[must_use]
    pub fn icon(&self) -> Option<&str> {
        self.get(ICON_KEY).and_then(Value::as_str)
    }

    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.get(ID_KEY).and_then(Value::as_str)
    }

    /// Shallow merge: starts from `defaults` and overwrites with every key of `self`.
    #[must_use]
    pub fn merged_over(self, defaults: &Self) -> Self {
        let mut effective = defaults.clone();
        effective.0.extend(self.0);
        effective
    }
}

pub(crate) fn duration_to_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::{DURATION_KEY, ToastOptions};
    use serde_json::json;
    use std::time::Duration;

    #[test]
    fn caller_keys_win_on_overlap() {
        let defaults = ToastOptions::new()
            .with(DURATION_KEY, 5_000)
            .with("position", "top-center");
        let caller = ToastOptions::new().with(DURATION_KEY, 1_200);

        let effective = caller.merged_over(&defaults);
        assert_eq!(effective.get(DURATION_KEY), Some(&json!(1_200)));
        assert_eq!(effective.get("position"), Some(&json!("top-center")));
    }

    #[test]
    fn merge_is_shallow() {
        let defaults = ToastOptions::new().with("style", json!({ "color": "red", "padding": 4 }));
        let caller = ToastOptions::new().with("style", json!({ "color": "blue" }));

        let effective = caller.merged_over(&defaults);
        assert_eq!(effective.get("style"), Some(&json!({ "color": "blue" })));
    }

    #[test]
    fn duration_reads_millis_and_humantime() {
        let ms = ToastOptions::new().with(DURATION_KEY, 2_500);
        assert_eq!(ms.duration(), Some(Duration::from_millis(2_500)));

        let text = ToastOptions::new().with(DURATION_KEY, "3s");
        assert_eq!(text.duration(), Some(Duration::from_secs(3)));

        let bogus = ToastOptions::new().with(DURATION_KEY, true);
        assert_eq!(bogus.duration(), None);
        assert_eq!(ToastOptions::new().duration(), None);
    }

    #[test]
    fn with_duration_stores_milliseconds() {
        let opts = ToastOptions::new().with_duration(Duration::from_secs(2));
        assert_eq!(opts.get(DURATION_KEY), Some(&json!(2_000)));
    }
}
