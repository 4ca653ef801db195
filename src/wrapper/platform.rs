// src/wrapper/platform.rs
use serde::{Deserialize, Serialize};
use std::fmt;

const IOS_DEVICE_MARKERS: [&str; 3] = ["iphone", "ipad", "ipod"];

/// Which platform's rows a summary should cover.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    All,
    Ios,
    Android,
}

impl Platform {
    pub fn as_str(&self) -> &str {
        match self {
            Platform::All => "all",
            Platform::Ios => "ios",
            Platform::Android => "android",
        }
    }

    /// Device rows: anything that is not an Apple handheld counts as Android.
    pub fn keeps_device(&self, model: &str) -> bool {
        match self {
            Platform::All => true,
            Platform::Ios => is_ios_device(model),
            Platform::Android => !is_ios_device(model),
        }
    }

    /// OS rows are matched on the platform name in the label.
    pub fn keeps_os(&self, label: &str) -> bool {
        let lower = label.to_lowercase();
        match self {
            Platform::All => true,
            Platform::Ios => lower.contains("ios"),
            Platform::Android => lower.contains("android"),
        }
    }

    /// Friendly device names only exist for Android hardware.
    pub fn has_friendly_names(&self) -> bool {
        matches!(self, Platform::All | Platform::Android)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn is_ios_device(model: &str) -> bool {
    let lower = model.to_lowercase();
    IOS_DEVICE_MARKERS.iter().any(|m| lower.contains(m))
}
