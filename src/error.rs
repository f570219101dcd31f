use thiserror::Error;

pub type Result<T> = std::result::Result<T, AdbError>;

#[derive(Debug, Error)]
pub enum AdbError {
    /// The tool ran (or failed to run) and reported failure; the payload is
    /// whatever diagnostic text it produced.
    #[error("adb command failed: {0}")]
    CommandFailed(String),

    #[error("No devices found")]
    NoDevicesFound,

    #[error("No device found matching ID: {0}")]
    DeviceNotFound(String),

    #[error("could not resolve a pid for {package}; is the app running?")]
    AppNotRunning { package: String },

    /// Output was captured fine but no line carried the expected marker.
    #[error("no line matching `{marker}` in `{command}` output")]
    MarkerNotFound { marker: String, command: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl From<String> for AdbError {
    fn from(s: String) -> Self {
        AdbError::Other(s)
    }
}
