// src/report.rs
use serde::Serialize;
use tracing::warn;

use crate::config::ReportConfig;
use crate::error::{Error, Result};
use crate::reader::Section;
use crate::wrapper::{
    DeviceRecord, GenderAgeRecord, GenderRecord, OsRecord, Platform, PlatformRecord, Wrapper,
};

/// Every summary the wrapper can derive from one export.
///
/// Sections missing from the export are logged and left out; any other
/// error fails the whole report.
#[derive(Debug, Serialize)]
pub struct Report {
    pub platform: Platform,
    pub sections: Vec<Section>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os_total: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os: Option<Vec<OsRecord>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub devices: Option<Vec<DeviceRecord>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Vec<GenderRecord>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender_age: Option<Vec<GenderAgeRecord>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platforms: Option<Vec<PlatformRecord>>,
}

impl Report {
    pub fn build(wrapper: &Wrapper<'_>, config: &ReportConfig) -> Result<Self> {
        Ok(Self {
            platform: wrapper.platform(),
            sections: wrapper.reader().sections().collect(),
            os_total: optional(wrapper.os_total())?,
            os: optional(wrapper.os(config.os_options()))?,
            devices: optional(wrapper.devices(config.friendly_devices, config.device_limit))?,
            gender: optional(wrapper.gender())?,
            gender_age: optional(wrapper.gender_age())?,
            platforms: optional(wrapper.platforms())?,
        })
    }
}

fn optional<T>(result: Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(Error::DataNotFound(e)) => {
            warn!(
                section = %e.section,
                expected_header = e.expected_header,
                tip = e.tip.unwrap_or("-"),
                "section missing from export; omitted from report"
            );
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
