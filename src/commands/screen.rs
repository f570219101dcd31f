use std::path::PathBuf;

use chrono::Local;
use log::debug;

use crate::adb::screen;
use crate::commands::finish;
use crate::config::Config;
use crate::error::Result;

/// Pick the save path: an explicit one wins, then the configured
/// screenshot directory, then the current directory.
fn default_screenshot_path() -> PathBuf {
    let dir = Config::load()
        .screenshot_dir()
        .unwrap_or_else(|| PathBuf::from("."));
    let timestamp = Local::now().format("%Y%m%d-%H%M%S");
    dir.join(format!("adbx-screenshot-{timestamp}.png"))
}

pub async fn screenshot(file: Option<PathBuf>, serial: Option<&str>) -> Result<()> {
    let path = file.unwrap_or_else(default_screenshot_path);
    debug!("saving screenshot to {}", path.display());
    let out = screen::screenshot(&path, serial).await;
    if out.success {
        println!("Screenshot saved to: {}", path.display());
    }
    finish(out)
}

pub async fn screenrecord(time: u32, file: Option<PathBuf>, serial: Option<&str>) -> Result<()> {
    let out = screen::record_screen(time, file.as_deref(), serial).await;
    if out.success {
        if let Some(path) = &file {
            println!("Recording saved to: {}", path.display());
        }
    }
    finish(out)
}
