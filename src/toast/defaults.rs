use tracing::trace;

use super::notifier::{Notifier, NotifyResult, ToastContent, ToastId, ToastKind};
use super::options::{DEFAULT_TOAST_DURATION, ToastOptions};

/// Notifier decorator injecting default options into the bare [`Notifier::notify`] call.
///
/// Every other member is forwarded to the wrapped notifier untouched, so the
/// variant constructors (`success`, `error`, ...) keep the inner defaults.
#[derive(Debug, Clone)]
pub struct WithDefaults<N> {
    inner: N,
    defaults: ToastOptions,
}

impl<N: Notifier> WithDefaults<N> {
    /// Wraps `inner` with a display duration of [`DEFAULT_TOAST_DURATION`].
    pub fn new(inner: N) -> Self {
        Self::with_options(inner, ToastOptions::new().with_duration(DEFAULT_TOAST_DURATION))
    }

    pub const fn with_options(inner: N, defaults: ToastOptions) -> Self {
        Self { inner, defaults }
    }

    pub const fn inner(&self) -> &N {
        &self.inner
    }

    /// Options that [`Notifier::notify`] hands to the inner notifier.
    #[must_use]
    pub fn effective_options(&self, options: Option<ToastOptions>) -> ToastOptions {
        options.unwrap_or_default().merged_over(&self.defaults)
    }
}

impl<N: Notifier> Notifier for WithDefaults<N> {
    fn notify(&self, content: &ToastContent, options: Option<ToastOptions>) -> NotifyResult<ToastId> {
        let effective = self.effective_options(options);
        trace!(options = effective.len(), "applying toast defaults");
        self.inner.notify(content, Some(effective))
    }

    fn show(
        &self,
        kind: ToastKind,
        content: &ToastContent,
        options: Option<ToastOptions>,
    ) -> NotifyResult<ToastId> {
        self.inner.show(kind, content, options)
    }

    fn success(&self, content: &ToastContent, options: Option<ToastOptions>) -> NotifyResult<ToastId> {
        self.inner.success(content, options)
    }

    fn error(&self, content: &ToastContent, options: Option<ToastOptions>) -> NotifyResult<ToastId> {
        self.inner.error(content, options)
    }

    fn loading(&self, content: &ToastContent, options: Option<ToastOptions>) -> NotifyResult<ToastId> {
        self.inner.loading(content, options)
    }

    fn custom(&self, content: &ToastContent, options: Option<ToastOptions>) -> NotifyResult<ToastId> {
        self.inner.custom(content, options)
    }

    fn dismiss(&self, id: Option<&ToastId>) -> NotifyResult<()> {
        self.inner.dismiss(id)
    }

    fn remove(&self, id: Option<&ToastId>) -> NotifyResult<()> {
        self.inner.remove(id)
    }

    fn update(
        &self,
        id: &ToastId,
        content: &ToastContent,
        options: Option<ToastOptions>,
    ) -> NotifyResult<ToastId> {
        self.inner.update(id, content, options)
    }
}
