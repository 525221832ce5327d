use std::collections::HashMap;
use std::fmt::Display;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, PoisonError};

use notify_rust::{Notification, NotificationHandle, Timeout as LibTimeout, Urgency as LibUrgency};
use tracing::{debug, trace};

use crate::config::ToastSettings;
use crate::error::NotifyError;
use crate::toast::notifier::{Notifier, NotifyResult, ToastContent, ToastId, ToastKind};
use crate::toast::options::{ToastOptions, duration_to_millis};

/// Freedesktop notifications through `notify-rust`.
pub struct DesktopNotifier {
    appname: String,
    icon: Option<PathBuf>,
    handles: Mutex<HashMap<u32, LiveToast>>,
}

struct LiveToast {
    kind: ToastKind,
    handle: NotificationHandle,
}

impl DesktopNotifier {
    pub fn new(appname: impl Into<String>, icon: Option<PathBuf>) -> Self {
        Self {
            appname: appname.into(),
            icon,
            handles: Mutex::new(HashMap::new()),
        }
    }

    #[must_use]
    pub fn from_settings(settings: &ToastSettings) -> Self {
        Self::new(settings.appname.clone(), settings.icon.clone())
    }

    fn handles(&self) -> MutexGuard<'_, HashMap<u32, LiveToast>> {
        self.handles.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn apply(
        &self,
        notification: &mut Notification,
        kind: ToastKind,
        content: &ToastContent,
        options: Option<&ToastOptions>,
    ) {
        notification
            .summary(&content.summary)
            .body(content.body.as_deref().unwrap_or_default())
            .appname(&self.appname)
            .urgency(map_urgency(kind))
            .timeout(map_timeout(kind, options));

        let icon = options
            .and_then(ToastOptions::icon)
            .map(str::to_string)
            .or_else(|| self.icon.as_ref().map(|p| p.to_string_lossy().into_owned()));
        if let Some(icon) = icon {
            notification.icon(&icon);
        }
    }
}

impl Notifier for DesktopNotifier {
    fn show(
        &self,
        kind: ToastKind,
        content: &ToastContent,
        options: Option<ToastOptions>,
    ) -> NotifyResult<ToastId> {
        let mut builder = Notification::new();
        self.apply(&mut builder, kind, content, options.as_ref());

        if let Some(raw) = options.as_ref().and_then(ToastOptions::id) {
            let id = parse_id(raw)?;
            builder.id(id);
        }

        let handle = builder.show().map_err(backend_error)?;
        let id = handle.id();
        debug!(toast_id = id, %kind, "desktop toast shown");
        self.handles().insert(id, LiveToast { kind, handle });
        Ok(ToastId::new(id.to_string()))
    }

    fn dismiss(&self, id: Option<&ToastId>) -> NotifyResult<()> {
        let mut handles = self.handles();
        match id {
            Some(id) => {
                let key = parse_id(id.as_str())?;
                let live = handles
                    .remove(&key)
                    .ok_or_else(|| NotifyError::UnknownToast(id.to_string()))?;
                live.handle.close();
                trace!(toast_id = key, "desktop toast closed");
            }
            None => {
                for (key, live) in handles.drain() {
                    live.handle.close();
                    trace!(toast_id = key, "desktop toast closed");
                }
            }
        }
        Ok(())
    }

    fn remove(&self, id: Option<&ToastId>) -> NotifyResult<()> {
        // the notification server has no exit animation to skip
        self.dismiss(id)
    }

    fn update(
        &self,
        id: &ToastId,
        content: &ToastContent,
        options: Option<ToastOptions>,
    ) -> NotifyResult<ToastId> {
        let key = parse_id(id.as_str())?;
        let mut handles = self.handles();
        let live = handles
            .get_mut(&key)
            .ok_or_else(|| NotifyError::UnknownToast(id.to_string()))?;

        self.apply(&mut live.handle, live.kind, content, options.as_ref());
        live.handle.update().map_err(backend_error)?;
        debug!(toast_id = key, "desktop toast updated");
        Ok(id.clone())
    }
}

fn backend_error(err: impl Display) -> NotifyError {
    NotifyError::Backend(err.to_string())
}

fn parse_id(raw: &str) -> NotifyResult<u32> {
    raw.parse::<u32>()
        .map_err(|_| NotifyError::InvalidPayload(format!("desktop toast ids are numeric, got {raw:?}")))
}

const fn map_urgency(kind: ToastKind) -> LibUrgency {
    match kind {
        ToastKind::Error => LibUrgency::Critical,
        ToastKind::Loading => LibUrgency::Low,
        ToastKind::Blank | ToastKind::Success | ToastKind::Custom => LibUrgency::Normal,
    }
}

fn map_timeout(kind: ToastKind, options: Option<&ToastOptions>) -> LibTimeout {
    match options.and_then(ToastOptions::duration) {
        Some(duration) => {
            LibTimeout::Milliseconds(u32::try_from(duration_to_millis(duration)).unwrap_or(u32::MAX))
        }
        None if kind == ToastKind::Loading => LibTimeout::Never,
        None => LibTimeout::Default,
    }
}
