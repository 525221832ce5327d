//! Toast facility: the [`Notifier`] capability set, the [`WithDefaults`]
//! decorator and the concrete backends.

pub mod backends;
mod defaults;
mod notifier;
mod options;

pub use defaults::WithDefaults;
pub use notifier::{Notifier, NotifyResult, ToastContent, ToastId, ToastKind};
pub use options::{DEFAULT_TOAST_DURATION, DURATION_KEY, ICON_KEY, ID_KEY, ToastOptions};
