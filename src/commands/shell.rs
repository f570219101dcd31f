use std::time::Duration;

use crate::adb::{default_timeout, shell};
use crate::commands::finish;
use crate::error::Result;

pub async fn run(
    command: &str,
    root: bool,
    su: &str,
    serial: Option<&str>,
    timeout: Option<u64>,
) -> Result<()> {
    let timeout = timeout.map(Duration::from_secs).unwrap_or_else(default_timeout);
    let out = if root {
        shell::shell_root(command, su, serial, timeout).await
    } else {
        shell::shell(command, serial, timeout).await
    };
    finish(out)
}
