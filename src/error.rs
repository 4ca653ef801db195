// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

use crate::reader::Section;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A section that was asked for but never appeared in the parsed export.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("section `{section}` not found (expected a block headed `{expected_header}`)")]
pub struct DataError {
    pub section: Section,
    pub expected_header: &'static str,
    pub tip: Option<&'static str>,
}

impl DataError {
    pub fn new(section: Section) -> Self {
        Self {
            section,
            expected_header: section.signature(),
            tip: section.tip(),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    DataNotFound(#[from] DataError),

    #[error("section `{section}`, row {row}: column `{column}` value {value:?} is not a valid number")]
    MalformedNumber {
        section: Section,
        column: &'static str,
        row: usize,
        value: String,
    },

    #[error("section `{section}`: user counts add up to more than {max}", max = u64::MAX)]
    CountOverflow { section: Section },

    #[error("section `{section}`, row {row}: missing column `{column}`")]
    MissingColumn {
        section: Section,
        column: &'static str,
        row: usize,
    },

    #[error("failed to read {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read device catalog")]
    Catalog(#[from] csv::Error),
}
