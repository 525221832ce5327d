use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::NotifyError;
use crate::toast::notifier::{Notifier, NotifyResult, ToastContent, ToastId, ToastKind};
use crate::toast::options::ToastOptions;

/// A toast as seen by [`DryRunNotifier`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ToastRecord {
    pub id: ToastId,
    pub kind: ToastKind,
    pub content: ToastContent,
    pub options: Option<ToastOptions>,
}

/// Logs what would be shown instead of showing it, and keeps the live toasts in memory.
#[derive(Debug, Default)]
pub struct DryRunNotifier {
    live: Mutex<BTreeMap<ToastId, ToastRecord>>,
    history: Mutex<Vec<ToastRecord>>,
}

impl DryRunNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every toast shown or updated, in call order.
    ///
    /// The log is never trimmed; it grows with every call for the life of the notifier.
    #[must_use]
    pub fn history(&self) -> Vec<ToastRecord> {
        lock(&self.history).clone()
    }

    #[must_use]
    pub fn live(&self) -> Vec<ToastRecord> {
        lock(&self.live).values().cloned().collect()
    }

    fn record(&self, record: ToastRecord) {
        lock(&self.history).push(record.clone());
        lock(&self.live).insert(record.id.clone(), record);
    }

    fn drop_live(&self, id: Option<&ToastId>, action: &'static str) -> NotifyResult<()> {
        let mut live = lock(&self.live);
        match id {
            Some(id) => {
                live.remove(id)
                    .ok_or_else(|| NotifyError::UnknownToast(id.to_string()))?;
                info!(toast_id = %id, action, "dry-run: toast closed");
            }
            None => {
                info!(count = live.len(), action, "dry-run: all toasts closed");
                live.clear();
            }
        }
        Ok(())
    }
}

impl Notifier for DryRunNotifier {
    fn show(
        &self,
        kind: ToastKind,
        content: &ToastContent,
        options: Option<ToastOptions>,
    ) -> NotifyResult<ToastId> {
        let id = options
            .as_ref()
            .and_then(ToastOptions::id)
            .map_or_else(|| ToastId::new(Uuid::now_v7().to_string()), ToastId::new);
        info!(
            toast_id = %id,
            %kind,
            summary = %content.summary,
            duration = ?options.as_ref().and_then(ToastOptions::duration),
            "dry-run: would show toast"
        );
        self.record(ToastRecord {
            id: id.clone(),
            kind,
            content: content.clone(),
            options,
        });
        Ok(id)
    }

    fn dismiss(&self, id: Option<&ToastId>) -> NotifyResult<()> {
        self.drop_live(id, "dismiss")
    }

    fn remove(&self, id: Option<&ToastId>) -> NotifyResult<()> {
        self.drop_live(id, "remove")
    }

    fn update(
        &self,
        id: &ToastId,
        content: &ToastContent,
        options: Option<ToastOptions>,
    ) -> NotifyResult<ToastId> {
        let mut live = lock(&self.live);
        let existing = live
            .get_mut(id)
            .ok_or_else(|| NotifyError::UnknownToast(id.to_string()))?;
        existing.content = content.clone();
        existing.options = options;
        debug!(toast_id = %id, "dry-run: would update toast");
        lock(&self.history).push(existing.clone());
        Ok(id.clone())
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::DryRunNotifier;
    use crate::toast::notifier::{Notifier, ToastContent, ToastId, ToastKind};
    use crate::toast::options::{ID_KEY, ToastOptions};

    #[test]
    fn show_records_and_tracks_live_toasts() {
        let notifier = DryRunNotifier::new();
        let id = match notifier.error(&ToastContent::new("disk full"), None) {
            Ok(id) => id,
            Err(err) => panic!("dry-run show failed: {err}"),
        };

        let live = notifier.live();
        assert_eq!(live.len(), 1);
        assert_eq!(live[0].id, id);
        assert_eq!(live[0].kind, ToastKind::Error);
    }

    #[test]
    fn explicit_id_option_is_reused() {
        let notifier = DryRunNotifier::new();
        let opts = ToastOptions::new().with(ID_KEY, "upload");
        let id = notifier.loading(&ToastContent::new("uploading"), Some(opts));
        assert_eq!(id.ok(), Some(ToastId::new("upload")));
    }

    #[test]
    fn unknown_ids_are_rejected() {
        let notifier = DryRunNotifier::new();
        let ghost = ToastId::new("ghost");
        assert!(notifier.dismiss(Some(&ghost)).is_err_and(|e| e.is_unknown_toast()));
        assert!(
            notifier
                .update(&ghost, &ToastContent::new("x"), None)
                .is_err_and(|e| e.is_unknown_toast())
        );
    }

    #[test]
    fn update_keeps_kind_and_dismiss_all_clears() {
        let notifier = DryRunNotifier::new();
        let Ok(id) = notifier.loading(&ToastContent::new("uploading"), None) else {
            panic!("dry-run show failed");
        };
        let updated = notifier.update(&id, &ToastContent::new("uploaded"), None);
        assert_eq!(updated.ok(), Some(id.clone()));

        let history = notifier.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[1].kind, ToastKind::Loading);
        assert_eq!(history[1].content.summary, "uploaded");

        assert!(notifier.dismiss(None).is_ok());
        assert!(notifier.live().is_empty());
    }

    #[test]
    fn dismissed_toast_cannot_be_updated_back() {
        let notifier = DryRunNotifier::new();
        let Ok(id) = notifier.notify(&ToastContent::new("draft"), None) else {
            panic!("dry-run show failed");
        };
        assert!(notifier.dismiss(Some(&id)).is_ok());
        assert!(
            notifier
                .update(&id, &ToastContent::new("edited"), None)
                .is_err_and(|e| e.is_unknown_toast())
        );
        assert!(notifier.live().is_empty());
    }

    #[test]
    fn racing_dismiss_and_update_never_revive_a_toast() {
        for _ in 0..50 {
            let notifier = Arc::new(DryRunNotifier::new());
            let Ok(id) = notifier.notify(&ToastContent::new("syncing"), None) else {
                panic!("dry-run show failed");
            };

            let updater = {
                let notifier = Arc::clone(&notifier);
                let id = id.clone();
                thread::spawn(move || {
                    let _ = notifier.update(&id, &ToastContent::new("synced"), None);
                })
            };
            let dismissed = notifier.dismiss(Some(&id));
            if updater.join().is_err() {
                panic!("updater thread panicked");
            }

            assert!(dismissed.is_ok());
            assert!(notifier.live().is_empty());
        }
    }
}
