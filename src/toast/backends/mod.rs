#[cfg(target_os = "linux")]
mod desktop;
mod dry_run;

#[cfg(target_os = "linux")]
pub use desktop::DesktopNotifier;
pub use dry_run::{DryRunNotifier, ToastRecord};
