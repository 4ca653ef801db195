// src/wrapper/mod.rs
mod percent;
mod platform;
mod records;
mod schema;
mod version;

pub use percent::{as_percentage, fraction_to_percent, round_to};
pub use platform::{is_ios_device, Platform};
pub use records::{DeviceRecord, GenderAgeRecord, GenderRecord, OsRecord, PlatformRecord};
pub use schema::{
    typed_rows, DeviceRow, GenderAgeRow, GenderRow, OsVersionRow, PlatformRow, SectionRow,
};
pub use version::{major_version, DottedVersion};

use serde::{Deserialize, Serialize};
use std::{cmp::Reverse, collections::HashMap};
use tracing::{debug, trace};

use crate::devices::DeviceNameResolver;
use crate::error::{Error, Result};
use crate::reader::Section;

/// Number of devices returned when the caller gives no limit.
pub const DEFAULT_DEVICE_LIMIT: usize = 10;

/// Ordering of OS summaries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OsOrder {
    /// Largest share first; ties keep export order.
    #[default]
    Share,
    /// Newest version first, compared numerically.
    VersionDescending,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OsOptions {
    /// Merge point releases into their major version.
    pub grouped: bool,
    pub order: OsOrder,
}

/// Consumer-facing summaries over a parsed export.
///
/// Holds a borrowed [`Reader`](crate::Reader) and a platform filter;
/// every call derives fresh records and nothing is cached.
pub struct Wrapper<'a> {
    reader: &'a crate::Reader,
    platform: Platform,
    resolver: Option<&'a dyn DeviceNameResolver>,
}

impl<'a> Wrapper<'a> {
    pub fn new(reader: &'a crate::Reader, platform: Platform) -> Self {
        Self {
            reader,
            platform,
            resolver: None,
        }
    }

    /// Use `resolver` for friendly device names.
    pub fn with_resolver(mut self, resolver: &'a dyn DeviceNameResolver) -> Self {
        self.resolver = Some(resolver);
        self
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn reader(&self) -> &'a crate::Reader {
        self.reader
    }

    /// OS versions with their share of the platform's users.
    pub fn os(&self, options: OsOptions) -> Result<Vec<OsRecord>> {
        let rows = self.os_rows()?;
        let total = sum_users(OsVersionRow::SECTION, rows.iter().map(|r| r.users))?;

        let counts = if options.grouped {
            group_by_major_version(rows)?
        } else {
            rows.into_iter().map(|r| (r.version, r.users)).collect()
        };

        let mut records: Vec<OsRecord> = counts
            .into_iter()
            .map(|(version, count)| OsRecord {
                percentage: as_percentage(count, total),
                version,
                count,
            })
            .collect();

        match options.order {
            OsOrder::Share => records.sort_by_key(|r| Reverse(r.count)),
            OsOrder::VersionDescending => {
                records.sort_by_cached_key(|r| Reverse(DottedVersion::from_label(&r.version)))
            }
        }

        debug!(
            platform = %self.platform,
            grouped = options.grouped,
            records = records.len(),
            total,
            "summarised os versions"
        );
        Ok(records)
    }

    /// Every OS version, ungrouped, largest share first.
    pub fn os_version(&self) -> Result<Vec<OsRecord>> {
        self.os(OsOptions::default())
    }

    /// OS versions merged by major version, largest share first.
    pub fn os_grouped(&self) -> Result<Vec<OsRecord>> {
        self.os(OsOptions {
            grouped: true,
            order: OsOrder::Share,
        })
    }

    /// Users across the OS rows kept by the platform filter.
    pub fn os_total(&self) -> Result<u64> {
        sum_users(
            OsVersionRow::SECTION,
            self.os_rows()?.iter().map(|r| r.users),
        )
    }

    /// The top `limit` device models (10 when `None`).
    ///
    /// With `friendly` set, Android-capable platforms also get a marketing
    /// name; models the resolver doesn't know keep their raw name.
    pub fn devices(&self, friendly: bool, limit: Option<usize>) -> Result<Vec<DeviceRecord>> {
        let limit = limit.unwrap_or(DEFAULT_DEVICE_LIMIT);
        let resolve = friendly && self.platform.has_friendly_names();

        let records = typed_rows::<DeviceRow>(self.reader)?
            .into_iter()
            .filter(|r| self.platform.keeps_device(&r.model))
            .take(limit)
            .map(|r| DeviceRecord {
                friendly: resolve.then(|| self.friendly_name(&r.model)),
                model: r.model,
                count: r.users,
            })
            .collect();
        Ok(records)
    }

    /// Users per gender. Not filtered by platform.
    pub fn gender(&self) -> Result<Vec<GenderRecord>> {
        Ok(typed_rows::<GenderRow>(self.reader)?
            .into_iter()
            .map(|r| GenderRecord {
                gender: r.gender,
                count: r.users,
            })
            .collect())
    }

    /// Gender split per age bracket, as percentages.
    pub fn gender_age(&self) -> Result<Vec<GenderAgeRecord>> {
        Ok(typed_rows::<GenderAgeRow>(self.reader)?
            .into_iter()
            .map(|r| GenderAgeRecord {
                age: r.category,
                male: fraction_to_percent(r.male),
                female: fraction_to_percent(r.female),
                other: r.other.map(fraction_to_percent),
            })
            .collect())
    }

    /// Users per platform and their share of all users.
    pub fn platforms(&self) -> Result<Vec<PlatformRecord>> {
        let rows = typed_rows::<PlatformRow>(self.reader)?;
        let total = sum_users(PlatformRow::SECTION, rows.iter().map(|r| r.users))?;
        Ok(rows
            .into_iter()
            .map(|r| PlatformRecord {
                percentage: as_percentage(r.users, total),
                platform: r.platform,
                count: r.users,
            })
            .collect())
    }

    fn os_rows(&self) -> Result<Vec<OsVersionRow>> {
        let mut rows = typed_rows::<OsVersionRow>(self.reader)?;
        rows.retain(|r| self.platform.keeps_os(&r.version));
        Ok(rows)
    }

    fn friendly_name(&self, model: &str) -> String {
        self.resolver
            .and_then(|resolver| resolver.friendly_name(model))
            .unwrap_or_else(|| model.to_string())
    }
}

/// Total of `counts`, failing instead of wrapping past `u64::MAX`.
fn sum_users(section: Section, counts: impl IntoIterator<Item = u64>) -> Result<u64> {
    counts.into_iter().try_fold(0u64, |acc, n| {
        acc.checked_add(n).ok_or(Error::CountOverflow { section })
    })
}

/// Sum users per major version, in order of first appearance.
/// Labels without a recognisable major version form their own group.
fn group_by_major_version(rows: Vec<OsVersionRow>) -> Result<Vec<(String, u64)>> {
    let mut groups: Vec<(String, u64)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for row in rows {
        let key = major_version(&row.version).unwrap_or_else(|| {
            trace!(label = %row.version, "no major version; keeping label as its own group");
            row.version.trim().to_string()
        });
        match index.get(&key) {
            Some(&i) => {
                let sum = &mut groups[i].1;
                *sum = sum.checked_add(row.users).ok_or(Error::CountOverflow {
                    section: OsVersionRow::SECTION,
                })?;
            }
            None => {
                index.insert(key.clone(), groups.len());
                groups.push((key, row.users));
            }
        }
    }
    Ok(groups)
}
