// src/reader/section.rs
use serde::Serialize;
use std::fmt;

/// Header prefix shared by every known layout of the gender/age table.
/// Older exports order the columns `Female,Male`, others `Male,Female`,
/// and newer ones append `Other`.
const GENDER_AGE_PREFIX: &str = "Category,";

/// A semantically identified block of the analytics export.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    ActiveUsers,
    DailyEngagement,
    Screens,
    Revenue,
    CrashFreeUsers,
    VersionAdoption,
    Acquisition,
    RetentionCohorts,
    AudienceCountry,
    Devices,
    OsVersion,
    Gender,
    GenderAge,
    Platform,
    PlatformEngagement,
}

impl Section {
    pub const ALL: [Section; 15] = [
        Section::ActiveUsers,
        Section::DailyEngagement,
        Section::Screens,
        Section::Revenue,
        Section::CrashFreeUsers,
        Section::VersionAdoption,
        Section::Acquisition,
        Section::RetentionCohorts,
        Section::AudienceCountry,
        Section::Devices,
        Section::OsVersion,
        Section::Gender,
        Section::GenderAge,
        Section::Platform,
        Section::PlatformEngagement,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::ActiveUsers => "active_users",
            Section::DailyEngagement => "daily_engagement",
            Section::Screens => "screens",
            Section::Revenue => "revenue",
            Section::CrashFreeUsers => "crash_free_users",
            Section::VersionAdoption => "version_adoption",
            Section::Acquisition => "acquisition",
            Section::RetentionCohorts => "retention_cohorts",
            Section::AudienceCountry => "audience_country",
            Section::Devices => "devices",
            Section::OsVersion => "os_version",
            Section::Gender => "gender",
            Section::GenderAge => "gender_age",
            Section::Platform => "platform",
            Section::PlatformEngagement => "platform_engagement",
        }
    }

    /// The exact header row that identifies this section.
    ///
    /// `GenderAge` is matched by prefix rather than exactly; the signature
    /// reported here is the layout of the original export.
    pub fn signature(&self) -> &'static str {
        match self {
            Section::ActiveUsers => "Day,28-Day,7-Day,1-Day",
            Section::DailyEngagement => "Day,Average engagement time",
            Section::Screens => "Page path and screen class,User engagement,Screen views",
            Section::Revenue => "Day,Total revenue",
            Section::CrashFreeUsers => "App,Crash-free users",
            Section::VersionAdoption => "App,Version,Status",
            Section::Acquisition => "Source,first_open conversions,LTV",
            Section::RetentionCohorts => "Date,Week 0,Week 1,Week 2,Week 3,Week 4,Week 5",
            Section::AudienceCountry => "Country ID,Sessions,% Total",
            Section::Devices => "Device model,Users",
            Section::OsVersion => "OS with version,Users",
            Section::Gender => "Gender,Users",
            Section::GenderAge => "Category,Female,Male",
            Section::Platform => "Platform,Users",
            Section::PlatformEngagement => "Platform,Users,% Total,User engagement,Total revenue",
        }
    }

    /// Remediation hint shown when the section is missing from an export.
    pub fn tip(&self) -> Option<&'static str> {
        match self {
            Section::OsVersion => Some(
                "OS versions are only exported from the Analytics dashboard; \
                 make sure the 'Users by OS with version' table is visible before downloading",
            ),
            Section::GenderAge => Some(
                "gender and age breakdowns require Google signals to be enabled for the property",
            ),
            Section::Devices => Some(
                "device models are only exported from the Analytics dashboard; \
                 make sure the 'Users by Device model' table is visible before downloading",
            ),
            Section::Gender => Some(
                "gender breakdowns require Google signals to be enabled for the property",
            ),
            _ => None,
        }
    }

    /// Identify a block by its header row.
    ///
    /// Exact signatures are tried first; a header starting with `Category,`
    /// is taken to be the gender/age table whatever its column order.
    pub fn match_header(header: &str) -> Option<Self> {
        let header = header.trim();
        Section::ALL
            .iter()
            .copied()
            .filter(|section| *section != Section::GenderAge)
            .find(|section| section.signature() == header)
            .or_else(|| header.starts_with(GENDER_AGE_PREFIX).then_some(Section::GenderAge))
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
