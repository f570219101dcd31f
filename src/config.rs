use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// Optional settings read from `~/.adbxconfig` (TOML). Everything has a
/// working default, so a missing or empty file is fine.
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Path to the adb binary. The `ADBX_ADB` environment variable wins
    /// over this; with neither set, `adb` is looked up on PATH.
    pub adb_path: Option<String>,

    pub screenshot: Option<ScreenshotConfig>,
}

#[derive(Debug, Deserialize, Default)]
pub struct ScreenshotConfig {
    /// Directory screenshots are saved to when no path is given.
    pub output: Option<String>,
}

impl Config {
    pub fn load() -> Self {
        let config_path = Config::config_path();
        debug!("Loading config from: {:?}", config_path);

        if let Ok(content) = fs::read_to_string(&config_path) {
            match Config::parse(&content) {
                Ok(config) => {
                    debug!("Parsed config: {:?}", config);
                    config
                }
                Err(e) => {
                    eprintln!("Error parsing config file: {}", e);
                    Config::default()
                }
            }
        } else {
            debug!("No config file found or unable to read it");
            Config::default()
        }
    }

    pub(crate) fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".adbxconfig")
    }

    /// Configured screenshot directory with `~` expanded, if any.
    pub fn screenshot_dir(&self) -> Option<PathBuf> {
        self.screenshot
            .as_ref()
            .and_then(|s| s.output.as_deref())
            .map(|p| PathBuf::from(shellexpand::tilde(p).into_owned()))
    }
}
