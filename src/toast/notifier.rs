use std::fmt::{self, Display};
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::NotifyError;

use super::options::ToastOptions;

pub type NotifyResult<T> = std::result::Result<T, NotifyError>;

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ToastContent {
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl ToastContent {
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            body: None,
        }
    }

    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

impl From<&str> for ToastContent {
    fn from(summary: &str) -> Self {
        Self::new(summary)
    }
}

#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct ToastId(String);

impl ToastId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    #[default]
    Blank,
    Success,
    Error,
    Loading,
    Custom,
}

impl ToastKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blank => "blank",
            Self::Success => "success",
            Self::Error => "error",
            Self::Loading => "loading",
            Self::Custom => "custom",
        }
    }
}

impl Display for ToastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToastKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "blank" => Ok(Self::Blank),
            "success" => Ok(Self::Success),
            "error" => Ok(Self::Error),
            "loading" => Ok(Self::Loading),
            "custom" => Ok(Self::Custom),
            other => Err(format!("unknown toast kind: {other}")),
        }
    }
}

/// Full capability set of a toast facility.
///
/// `notify` and the variant constructors default to [`Notifier::show`];
/// implementors only have to provide `show`, `dismiss`, `remove` and `update`.
pub trait Notifier {
    fn show(
        &self,
        kind: ToastKind,
        content: &ToastContent,
        options: Option<ToastOptions>,
    ) -> NotifyResult<ToastId>;

    /// Close a toast, or every live toast when `id` is `None`.
    fn dismiss(&self, id: Option<&ToastId>) -> NotifyResult<()>;

    /// Drop a toast immediately, or every live toast when `id` is `None`.
    fn remove(&self, id: Option<&ToastId>) -> NotifyResult<()>;

    fn update(
        &self,
        id: &ToastId,
        content: &ToastContent,
        options: Option<ToastOptions>,
    ) -> NotifyResult<ToastId>;

    fn notify(&self, content: &ToastContent, options: Option<ToastOptions>) -> NotifyResult<ToastId> {
        self.show(ToastKind::Blank, content, options)
    }

    fn success(&self, content: &ToastContent, options: Option<ToastOptions>) -> NotifyResult<ToastId> {
        self.show(ToastKind::Success, content, options)
    }

    fn error(&self, content: &ToastContent, options: Option<ToastOptions>) -> NotifyResult<ToastId> {
        self.show(ToastKind::Error, content, options)
    }

    fn loading(&self, content: &ToastContent, options: Option<ToastOptions>) -> NotifyResult<ToastId> {
        self.show(ToastKind::Loading, content, options)
    }

    fn custom(&self, content: &ToastContent, options: Option<ToastOptions>) -> NotifyResult<ToastId> {
        self.show(ToastKind::Custom, content, options)
    }
}

macro_rules! forward_notifier {
    ($($ty:ty),+ $(,)?) => {$(
        impl<N: Notifier + ?Sized> Notifier for $ty {
            fn show(
                &self,
                kind: ToastKind,
                content: &ToastContent,
                options: Option<ToastOptions>,
            ) -> NotifyResult<ToastId> {
                (**self).show(kind, content, options)
            }

            fn dismiss(&self, id: Option<&ToastId>) -> NotifyResult<()> {
                (**self).dismiss(id)
            }

            fn remove(&self, id: Option<&ToastId>) -> NotifyResult<()> {
                (**self).remove(id)
            }

            fn update(
                &self,
                id: &ToastId,
                content: &ToastContent,
                options: Option<ToastOptions>,
            ) -> NotifyResult<ToastId> {
                (**self).update(id, content, options)
            }

            fn notify(&self, content: &ToastContent, options: Option<ToastOptions>) -> NotifyResult<ToastId> {
                (**self).notify(content, options)
            }

            fn success(&self, content: &ToastContent, options: Option<ToastOptions>) -> NotifyResult<ToastId> {
                (**self).success(content, options)
            }

            fn error(&self, content: &ToastContent, options: Option<ToastOptions>) -> NotifyResult<ToastId> {
                (**self).error(content, options)
            }

            fn loading(&self, content: &ToastContent, options: Option<ToastOptions>) -> NotifyResult<ToastId> {
                (**self).loading(content, options)
            }

            fn custom(&self, content: &ToastContent, options: Option<ToastOptions>) -> NotifyResult<ToastId> {
                (**self).custom(content, options)
            }
        }
    )+};
}

forward_notifier!(&N, Box<N>, Arc<N>);

#[cfg(test)]
mod tests {
    use super::ToastKind;
    use std::str::FromStr;

    #[test]
    fn kind_from_str_is_case_insensitive_without_aliases() {
        assert_eq!(ToastKind::from_str("Success"), Ok(ToastKind::Success));
        assert_eq!(ToastKind::from_str("error"), Ok(ToastKind::Error));
        assert!(ToastKind::from_str("ok").is_err());
        assert!(ToastKind::from_str("err").is_err());
        assert!(ToastKind::from_str("toast").is_err());
    }
}
