#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used)]

pub mod config;
pub mod error;
pub mod role;
pub mod telemetry;
pub mod toast;

pub type Result<T> = std::result::Result<T, error::Error>;
