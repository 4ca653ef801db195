// src/config.rs
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf};

use crate::wrapper::{OsOptions, OsOrder, Platform};

/// Settings for building a [`Report`](crate::Report), read from YAML.
/// Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReportConfig {
    pub platform: Platform,
    pub friendly_devices: bool,
    /// Defaults to 10 when unset.
    pub device_limit: Option<usize>,
    pub group_os: bool,
    pub os_order: OsOrder,
    /// Supported-devices CSV used for friendly names.
    pub device_catalog: Option<PathBuf>,
}

impl ReportConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config: {:?}", path.as_ref()))?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).context("Failed to parse config YAML")
    }

    pub fn os_options(&self) -> OsOptions {
        OsOptions {
            grouped: self.group_os,
            order: self.os_order,
        }
    }
}
