// src/wrapper/version.rs
use std::cmp::Ordering;
use std::fmt;

/// Platform tokens that precede a major version in OS labels.
const OS_PREFIXES: [&str; 2] = ["iOS ", "Android "];

/// A dotted numeric version such as `16.4.1`.
///
/// Missing trailing components compare as zero, so `16` == `16.0`.
/// The empty version (a label with no digits) sorts below every other.
#[derive(Debug, Clone, Default)]
pub struct DottedVersion(Vec<u64>);

impl DottedVersion {
    /// Extract the first run of digits and dots from `label`.
    pub fn from_label(label: &str) -> Self {
        let Some(start) = label.find(|c: char| c.is_ascii_digit()) else {
            return Self::default();
        };
        let run: &str = label[start..]
            .split(|c: char| !(c.is_ascii_digit() || c == '.'))
            .next()
            .unwrap_or_default();

        let parts = run
            .split('.')
            .filter(|p| !p.is_empty())
            .map_while(|p| p.parse::<u64>().ok())
            .collect();
        Self(parts)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Ord for DottedVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_empty(), other.is_empty()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            (false, false) => {}
        }
        let len = self.0.len().max(other.0.len());
        (0..len)
            .map(|i| {
                let a = self.0.get(i).copied().unwrap_or(0);
                let b = other.0.get(i).copied().unwrap_or(0);
                a.cmp(&b)
            })
            .find(|o| o.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for DottedVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for DottedVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for DottedVersion {}

impl fmt::Display for DottedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, part) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", part)?;
        }
        Ok(())
    }
}

/// The major-version label of an OS string: `"iOS 16"` for `"iOS 16.4.1"`.
///
/// Returns `None` when the label has no `iOS `/`Android ` token followed by
/// digits.
pub fn major_version(label: &str) -> Option<String> {
    OS_PREFIXES.iter().find_map(|prefix| {
        let start = label.find(prefix)? + prefix.len();
        let rest = &label[start..];
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        (end > 0).then(|| format!("{}{}", prefix, &rest[..end]))
    })
}
