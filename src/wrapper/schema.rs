// src/wrapper/schema.rs
//! Typed views of the sections the wrapper reads.
//!
//! The reader keeps every cell as a string; conversion happens here, once,
//! so a bad cell fails loudly instead of skewing a total.

use crate::error::{Error, Result};
use crate::reader::{Reader, Row, Section};

/// A row type that can be built from one row of its section.
pub trait SectionRow: Sized {
    const SECTION: Section;

    fn from_row(row: Row<'_>) -> Result<Self>;
}

/// Every row of `T`'s section, converted.
pub fn typed_rows<T: SectionRow>(reader: &Reader) -> Result<Vec<T>> {
    reader.get(T::SECTION)?.rows().map(T::from_row).collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct OsVersionRow {
    pub version: String,
    pub users: u64,
}

impl SectionRow for OsVersionRow {
    const SECTION: Section = Section::OsVersion;

    fn from_row(row: Row<'_>) -> Result<Self> {
        Ok(Self {
            version: text(Self::SECTION, &row, "OS with version")?.to_string(),
            users: count(Self::SECTION, &row, "Users")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeviceRow {
    pub model: String,
    pub users: u64,
}

impl SectionRow for DeviceRow {
    const SECTION: Section = Section::Devices;

    fn from_row(row: Row<'_>) -> Result<Self> {
        Ok(Self {
            model: text(Self::SECTION, &row, "Device model")?.to_string(),
            users: count(Self::SECTION, &row, "Users")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenderRow {
    pub gender: String,
    pub users: u64,
}

impl SectionRow for GenderRow {
    const SECTION: Section = Section::Gender;

    fn from_row(row: Row<'_>) -> Result<Self> {
        Ok(Self {
            gender: text(Self::SECTION, &row, "Gender")?.to_string(),
            users: count(Self::SECTION, &row, "Users")?,
        })
    }
}

/// Shares are stored as fractions of 1. `Other` only exists in newer exports.
#[derive(Debug, Clone, PartialEq)]
pub struct GenderAgeRow {
    pub category: String,
    pub male: f64,
    pub female: f64,
    pub other: Option<f64>,
}

impl SectionRow for GenderAgeRow {
    const SECTION: Section = Section::GenderAge;

    fn from_row(row: Row<'_>) -> Result<Self> {
        let other = match row.get("Other").map(str::trim) {
            None | Some("") => None,
            Some(_) => Some(fraction(Self::SECTION, &row, "Other")?),
        };
        Ok(Self {
            category: text(Self::SECTION, &row, "Category")?.to_string(),
            male: fraction(Self::SECTION, &row, "Male")?,
            female: fraction(Self::SECTION, &row, "Female")?,
            other,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlatformRow {
    pub platform: String,
    pub users: u64,
}

impl SectionRow for PlatformRow {
    const SECTION: Section = Section::Platform;

    fn from_row(row: Row<'_>) -> Result<Self> {
        Ok(Self {
            platform: text(Self::SECTION, &row, "Platform")?.to_string(),
            users: count(Self::SECTION, &row, "Users")?,
        })
    }
}

fn text<'a>(section: Section, row: &Row<'a>, column: &'static str) -> Result<&'a str> {
    row.get(column).ok_or(Error::MissingColumn {
        section,
        column,
        row: row.index(),
    })
}

fn count(section: Section, row: &Row<'_>, column: &'static str) -> Result<u64> {
    let raw = text(section, row, column)?;
    raw.trim().parse().map_err(|_| Error::MalformedNumber {
        section,
        column,
        row: row.index(),
        value: raw.to_string(),
    })
}

fn fraction(section: Section, row: &Row<'_>, column: &'static str) -> Result<f64> {
    let raw = text(section, row, column)?;
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| Error::MalformedNumber {
            section,
            column,
            row: row.index(),
            value: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testdata;

    fn reader(text: &str) -> Reader {
        let mut reader = Reader::new();
        reader.parse_str(text);
        reader
    }

    #[test]
    fn test_os_rows() {
        let rows: Vec<OsVersionRow> = typed_rows(&reader(testdata::APP)).unwrap();
        assert_eq!(rows.len(), 7);
        assert_eq!(
            rows[1],
            OsVersionRow {
                version: "iOS 16.4.1".into(),
                users: 2500
            }
        );
    }

    #[test]
    fn test_gender_age_column_order_does_not_matter() {
        let old: Vec<GenderAgeRow> = typed_rows(&reader(testdata::OLD_GENDER_AGE)).unwrap();
        let alt: Vec<GenderAgeRow> = typed_rows(&reader(testdata::OLD_GENDER_AGE_ALT)).unwrap();
        assert_eq!(old, alt);
        assert_eq!(old[0].female, 0.5012);
        assert_eq!(old[0].other, None);
    }

    #[test]
    fn test_gender_age_other_column() {
        let rows: Vec<GenderAgeRow> = typed_rows(&reader(testdata::NEW_GENDER_AGE)).unwrap();
        assert_eq!(rows[0].other, Some(0.05));
        assert_eq!(rows[4].other, Some(0.0));
        // empty cell in the Other column
        assert_eq!(rows[5].other, None);
    }

    #[test]
    fn test_malformed_count_is_an_error() {
        let err = typed_rows::<GenderRow>(&reader("Gender,Users\nfemale,12\nmale,lots\n"))
            .unwrap_err();
        match err {
            Error::MalformedNumber {
                section,
                column,
                row,
                value,
            } => {
                assert_eq!(section, Section::Gender);
                assert_eq!(column, "Users");
                assert_eq!(row, 1);
                assert_eq!(value, "lots");
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_negative_and_empty_counts_are_rejected() {
        assert!(typed_rows::<DeviceRow>(&reader("Device model,Users\nPixel 7,-4\n")).is_err());
        assert!(typed_rows::<DeviceRow>(&reader("Device model,Users\nPixel 7,\n")).is_err());
    }

    #[test]
    fn test_malformed_fraction_is_an_error() {
        let err = typed_rows::<GenderAgeRow>(&reader("Category,Male,Female\n18-24,NaN,0.5\n"))
            .unwrap_err();
        assert!(matches!(err, Error::MalformedNumber { column: "Male", .. }));
    }

    #[test]
    fn test_short_row_is_missing_column() {
        let err = typed_rows::<GenderRow>(&reader("Gender,Users\nfemale\n")).unwrap_err();
        assert!(matches!(
            err,
            Error::MissingColumn {
                column: "Users",
                row: 0,
                ..
            }
        ));
    }

    #[test]
    fn test_missing_section_propagates() {
        let err = typed_rows::<PlatformRow>(&reader(testdata::TWO_SECTION)).unwrap_err();
        assert!(matches!(err, Error::DataNotFound(ref e) if e.section == Section::Platform));
    }
}
