use std::path::PathBuf;
use std::str::FromStr;

use toastkit::Result;
use toastkit::config::{Config, DEFAULT_CONFIG_FILE};
use toastkit::role::{Role, validate_role};
use toastkit::telemetry::init_tracing;
use toastkit::toast::backends::DryRunNotifier;
use toastkit::toast::{
    ICON_KEY, Notifier, NotifyResult, ToastContent, ToastId, ToastKind, ToastOptions, WithDefaults,
};
use tracing::{debug, info};

use super::cli::{Cli, Command, NotifyArgs, RoleArgs};

pub fn run(cli: Cli) -> Result<()> {
    init_tracing(cli.log_filter.as_deref(), cli.json_logs)?;

    match cli.command {
        Command::Notify(args) => {
            let config_path = cli
                .config
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
            let config = Config::from_env_and_file(&config_path)?;
            debug!(path = %config_path.display(), "configuration loaded");
            notify(&config, args)
        }
        Command::Role(args) => role(&args),
    }
}

fn notify(config: &Config, args: NotifyArgs) -> Result<()> {
    let backend = backend(config, args.dry_run)?;
    let notifier = WithDefaults::with_options(backend, config.toast.default_options());

    let mut content = ToastContent::new(args.summary);
    if let Some(body) = args.body {
        content = content.with_body(body);
    }

    let mut options = ToastOptions::new();
    if let Some(duration) = args.duration {
        options = options.with_duration(duration);
    }
    if let Some(icon) = args.icon {
        options.insert(ICON_KEY, icon.to_string_lossy().into_owned());
    }
    let options = (!options.is_empty()).then_some(options);

    let id = show(&notifier, args.kind, &content, options)?;
    info!(toast_id = %id, kind = %args.kind, "toast sent");
    println!("{id}");
    Ok(())
}

fn show<N: Notifier>(
    notifier: &N,
    kind: ToastKind,
    content: &ToastContent,
    options: Option<ToastOptions>,
) -> NotifyResult<ToastId> {
    match kind {
        ToastKind::Blank => notifier.notify(content, options),
        ToastKind::Success => notifier.success(content, options),
        ToastKind::Error => notifier.error(content, options),
        ToastKind::Loading => notifier.loading(content, options),
        ToastKind::Custom => notifier.custom(content, options),
    }
}

fn backend(config: &Config, dry_run: bool) -> Result<Box<dyn Notifier>> {
    if dry_run {
        return Ok(Box::new(DryRunNotifier::new()));
    }

    #[cfg(target_os = "linux")]
    {
        Ok(Box::new(
            toastkit::toast::backends::DesktopNotifier::from_settings(&config.toast),
        ))
    }

    #[cfg(not(target_os = "linux"))]
    {
        let _ = config;
        Err(toastkit::error::NotifyError::Unsupported.into())
    }
}

fn role(args: &RoleArgs) -> Result<()> {
    let role = if args.strict {
        Role::from_str(&args.value)?
    } else {
        validate_role(&args.value)
    };
    println!("{role}");
    Ok(())
}
