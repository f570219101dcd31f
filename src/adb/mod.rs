//! The adb command facade, one module per information surface.
//!
//! Every operation builds an argument vector, optionally prefixes the
//! `-s <serial>` device selector, runs adb once under a timeout, and
//! parses whatever text comes back. No state, no caching, no retries;
//! each call is independent.

pub mod app;
pub mod device;
pub mod files;
pub mod forward;
pub mod input;
pub mod logcat;
pub mod screen;
pub mod shell;
pub mod sysinfo;

#[cfg(test)]
mod app_test;
#[cfg(test)]
mod files_test;
#[cfg(test)]
mod forward_test;
#[cfg(test)]
mod sysinfo_test;

use std::sync::{LazyLock, OnceLock};
use std::time::Duration;

use crate::config::Config;
use crate::exec::{self, CommandOutput};

/// Baseline timeout for quick commands.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
/// Installs stream the whole APK over the transport.
pub const INSTALL_TIMEOUT: Duration = Duration::from_secs(120);
/// push/pull may move arbitrarily large files.
pub const TRANSFER_TIMEOUT: Duration = Duration::from_secs(300);
/// logcat dumps can be chatty.
pub const LOGCAT_TIMEOUT: Duration = Duration::from_secs(60);

static TIMEOUT_OVERRIDE: OnceLock<Duration> = OnceLock::new();

/// Replace the baseline timeout tier for this process, as the CLI's
/// `--timeout` flag does. Set-once; later calls are ignored. The longer
/// install/transfer/logcat tiers are not affected.
pub fn set_default_timeout(timeout: Duration) {
    let _ = TIMEOUT_OVERRIDE.set(timeout);
}

/// The baseline tier, or the process-wide override when one is set.
pub(crate) fn default_timeout() -> Duration {
    TIMEOUT_OVERRIDE.get().copied().unwrap_or(DEFAULT_TIMEOUT)
}

static ADB_BINARY: LazyLock<String> = LazyLock::new(|| {
    if let Ok(path) = std::env::var("ADBX_ADB") {
        if !path.is_empty() {
            return path;
        }
    }
    Config::load()
        .adb_path
        .unwrap_or_else(|| "adb".to_string())
});

pub(crate) fn adb_binary() -> &'static str {
    &ADB_BINARY
}

/// Run one adb invocation with the resolved binary.
pub async fn run_adb(args: &[String], timeout: Duration) -> CommandOutput {
    exec::run_tool(adb_binary(), args, timeout).await
}

/// Assemble an argument vector, prefixing the `-s <serial>` selector pair
/// when a serial is given. The selector must come before the adb
/// subcommand, so this is the one place vectors are put together.
pub(crate) fn device_args<I, S>(serial: Option<&str>, args: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut argv: Vec<String> = Vec::new();
    if let Some(serial) = serial {
        argv.push("-s".to_string());
        argv.push(serial.to_string());
    }
    argv.extend(args.into_iter().map(Into::into));
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_pair_is_injected_before_the_command() {
        let argv = device_args(Some("emulator-5554"), ["shell", "getprop"]);
        assert_eq!(argv, vec!["-s", "emulator-5554", "shell", "getprop"]);
    }

    #[test]
    fn no_serial_leaves_the_vector_untouched() {
        let argv = device_args(None, ["devices", "-l"]);
        assert_eq!(argv, vec!["devices", "-l"]);
    }

    #[test]
    fn timeout_override_replaces_the_baseline_tier_once() {
        assert_eq!(default_timeout(), DEFAULT_TIMEOUT);
        set_default_timeout(Duration::from_secs(5));
        assert_eq!(default_timeout(), Duration::from_secs(5));
        set_default_timeout(Duration::from_secs(9));
        assert_eq!(default_timeout(), Duration::from_secs(5));
    }
}
