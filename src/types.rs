use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Connection state reported by `adb devices`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceState {
    Device,
    Offline,
    Unauthorized,
    Unknown,
}

impl DeviceState {
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "device" => DeviceState::Device,
            "offline" => DeviceState::Offline,
            "unauthorized" => DeviceState::Unauthorized,
            _ => DeviceState::Unknown,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            DeviceState::Device => "device",
            DeviceState::Offline => "offline",
            DeviceState::Unauthorized => "unauthorized",
            DeviceState::Unknown => "unknown",
        }
    }
}

impl fmt::Display for DeviceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One row of `adb devices -l`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceEntry {
    pub serial: String,
    pub state: DeviceState,
    /// Trailing `key:value` descriptors: product, model, device,
    /// transport_id, usb. Whatever the row carries is kept verbatim.
    #[serde(flatten)]
    pub tags: HashMap<String, String>,
}

impl DeviceEntry {
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }

    pub fn model(&self) -> Option<&str> {
        self.tag("model")
    }

    pub fn product(&self) -> Option<&str> {
        self.tag("product")
    }

    pub fn transport_id(&self) -> Option<&str> {
        self.tag("transport_id")
    }
}

/// One row of `ls -la` on the device. All fields stay as the text they
/// were parsed from; nothing is converted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    pub permissions: String,
    pub links: String,
    pub owner: String,
    pub group: String,
    pub size: String,
    pub date: String,
    pub name: String,
}

/// One row of `df -h` on the device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageEntry {
    pub filesystem: String,
    pub size: String,
    pub used: String,
    pub available: String,
    pub use_percent: String,
    pub mounted_on: String,
}

/// One row of `adb forward --list` / `adb reverse --list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForwardEntry {
    pub serial: String,
    pub local: String,
    pub remote: String,
}
