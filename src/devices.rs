// src/devices.rs
use csv::ReaderBuilder;
use serde::Deserialize;
use std::{collections::HashMap, io::Read, path::Path};
use tracing::{debug, instrument};

use crate::error::Result;

/// Looks up a human-readable name for a raw device model string.
pub trait DeviceNameResolver {
    fn friendly_name(&self, model: &str) -> Option<String>;
}

impl DeviceNameResolver for HashMap<String, String> {
    fn friendly_name(&self, model: &str) -> Option<String> {
        self.get(model).cloned()
    }
}

/// One line of the Google Play supported-devices list.
#[derive(Debug, Deserialize)]
struct CatalogRecord {
    #[serde(rename = "Retail Branding")]
    brand: String,
    #[serde(rename = "Marketing Name")]
    marketing_name: String,
    #[serde(rename = "Model")]
    model: String,
}

impl CatalogRecord {
    fn display_name(&self) -> Option<String> {
        let brand = self.brand.trim();
        let name = self.marketing_name.trim();
        if name.is_empty() {
            return None;
        }
        if brand.is_empty() || name.to_lowercase().starts_with(&brand.to_lowercase()) {
            Some(name.to_string())
        } else {
            Some(format!("{} {}", brand, name))
        }
    }
}

/// Model → marketing name table, loaded from the supported-devices CSV
/// (`Retail Branding,Marketing Name,Device,Model`).
#[derive(Debug, Default, Clone)]
pub struct DeviceCatalog {
    by_model: HashMap<String, String>,
    by_lowercase_model: HashMap<String, String>,
}

impl DeviceCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    #[instrument(level = "info", skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let rdr = ReaderBuilder::new().flexible(true).from_path(path)?;
        Self::from_csv(rdr)
    }

    pub fn from_reader<R: Read>(rdr: R) -> Result<Self> {
        Self::from_csv(ReaderBuilder::new().flexible(true).from_reader(rdr))
    }

    fn from_csv<R: Read>(mut rdr: csv::Reader<R>) -> Result<Self> {
        let mut catalog = Self::new();
        let mut skipped = 0usize;
        for result in rdr.deserialize::<CatalogRecord>() {
            let record = result?;
            match record.display_name() {
                Some(name) => catalog.insert(record.model.trim(), name),
                None => skipped += 1,
            }
        }
        debug!(models = catalog.len(), skipped, "loaded device catalog");
        Ok(catalog)
    }

    /// Add a mapping; an earlier entry for the same model is kept.
    pub fn insert(&mut self, model: &str, name: String) {
        self.by_lowercase_model
            .entry(model.to_lowercase())
            .or_insert_with(|| name.clone());
        self.by_model.entry(model.to_string()).or_insert(name);
    }

    pub fn len(&self) -> usize {
        self.by_model.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_model.is_empty()
    }
}

impl DeviceNameResolver for DeviceCatalog {
    fn friendly_name(&self, model: &str) -> Option<String> {
        let model = model.trim();
        self.by_model
            .get(model)
            .or_else(|| self.by_lowercase_model.get(&model.to_lowercase()))
            .cloned()
    }
}
