// src/wrapper/records.rs
use serde::Serialize;

/// One OS version (or major-version group) and its share of users.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OsRecord {
    pub version: String,
    pub count: u64,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceRecord {
    pub model: String,
    /// Only filled in when friendly names were requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friendly: Option<String>,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenderRecord {
    pub gender: String,
    pub count: u64,
}

/// Percentages of each gender within one age bracket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenderAgeRecord {
    pub age: String,
    pub male: f64,
    pub female: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlatformRecord {
    pub platform: String,
    pub count: u64,
    pub percentage: f64,
}
