// src/lib.rs
//! Parse Firebase Analytics dashboard exports into typed sections and
//! derive platform-filtered summaries from them.
//!
//! ```ignore
//! let mut reader = Reader::new();
//! reader.parse_file("analytics.csv")?;
//! let wrapper = Wrapper::new(&reader, Platform::Ios);
//! let os = wrapper.os_grouped()?;
//! ```

pub mod config;
pub mod devices;
pub mod error;
pub mod reader;
pub mod report;
pub mod wrapper;

#[cfg(test)]
mod testdata;

pub use config::ReportConfig;
pub use devices::{DeviceCatalog, DeviceNameResolver};
pub use error::{DataError, Error, Result};
pub use reader::{Reader, Row, Section, Table};
pub use report::Report;
pub use wrapper::{OsOptions, OsOrder, Platform, Wrapper};
