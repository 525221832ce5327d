use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Args, Parser, Subcommand};
use humantime::parse_duration;
use toastkit::toast::ToastKind;

#[derive(Parser, Debug)]
#[command(author, version, about = "Desktop toasts with sane defaults", long_about = None)]
pub struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Use a JSON log layer (`--features json-logs`).
    #[arg(long, action = ArgAction::SetTrue, global = true)]
    pub json_logs: bool,

    /// Explicit log filter (e.g. "toastkit=debug").
    #[arg(long, value_name = "FILTER", global = true)]
    pub log_filter: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show a toast.
    Notify(NotifyArgs),
    /// Print the role a raw value normalizes to.
    Role(RoleArgs),
}

#[derive(Args, Debug)]
pub struct NotifyArgs {
    pub summary: String,

    #[arg(long)]
    pub body: Option<String>,

    /// blank, success, error, loading or custom.
    #[arg(long, default_value = "blank")]
    pub kind: ToastKind,

    /// Display duration (e.g. "3s"); falls back to the configured default.
    #[arg(long, value_parser = parse_duration)]
    pub duration: Option<Duration>,

    #[arg(long, value_name = "PATH")]
    pub icon: Option<PathBuf>,

    /// Log the toast instead of showing it.
    #[arg(long, action = ArgAction::SetTrue)]
    pub dry_run: bool,
}

#[derive(Args, Debug)]
pub struct RoleArgs {
    pub value: String,

    /// Fail on anything other than `admin` or `user`.
    #[arg(long, action = ArgAction::SetTrue)]
    pub strict: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use clap::Parser;
    use std::time::Duration;
    use toastkit::toast::ToastKind;

    #[test]
    fn notify_parses_duration_and_kind() {
        let cli = match Cli::try_parse_from([
            "toastkit", "notify", "Build done", "--kind", "success", "--duration", "2s",
        ]) {
            Ok(cli) => cli,
            Err(err) => panic!("failed to parse args: {err}"),
        };
        let Command::Notify(args) = cli.command else {
            panic!("expected notify subcommand");
        };
        assert_eq!(args.kind, ToastKind::Success);
        assert_eq!(args.duration, Some(Duration::from_secs(2)));
    }

    #[test]
    fn global_flags_follow_subcommand() {
        let cli = Cli::try_parse_from(["toastkit", "role", "admin", "--log-filter", "debug"]);
        assert!(cli.is_ok_and(|cli| cli.log_filter.as_deref() == Some("debug")));
    }
}
