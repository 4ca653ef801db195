// src/reader/mod.rs
mod section;
mod table;

pub use section::Section;
pub use table::{Row, Table};

use std::{collections::BTreeMap, fs, path::Path};
use tracing::{debug, info, instrument, trace, warn};

use crate::error::{DataError, Error, Result};

/// Splits an analytics export into its sections.
///
/// Blocks are separated by blank lines; any line containing `#` is a comment
/// and is dropped before block boundaries are found. Each block's first line
/// decides its [`Section`]; unrecognised blocks are skipped. When a section
/// appears more than once, the first occurrence is kept.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Reader {
    data: BTreeMap<Section, Table>,
}

impl Reader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `path` and replace the current sections with its contents.
    #[instrument(level = "info", skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn parse_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.parse_str(text.strip_prefix('\u{feff}').unwrap_or(&text));
        info!(sections = self.num_sections(), "parsed export");
        Ok(())
    }

    pub fn parse_str(&mut self, text: &str) {
        self.parse(text.lines())
    }

    /// Replace the current sections with those found in `lines`.
    /// Nothing from a previous parse survives.
    pub fn parse<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut data = BTreeMap::new();
        let mut block: Vec<String> = Vec::new();
        let mut lines = lines.into_iter().peekable();

        while let Some(line) = lines.next() {
            let line = line.as_ref();
            let blank = line.trim().is_empty();

            if !blank && !is_comment(line) {
                block.push(line.trim_end_matches(['\r', '\n']).to_string());
            }

            if (blank || lines.peek().is_none()) && !block.is_empty() {
                process_block(&mut data, &block);
                block.clear();
            }
        }

        self.data = data;
    }

    /// The table for `section`, or a [`DataError`] naming the header that
    /// would have identified it.
    pub fn get(&self, section: Section) -> Result<&Table> {
        self.data
            .get(&section)
            .ok_or_else(|| DataError::new(section).into())
    }

    pub fn contains(&self, section: Section) -> bool {
        self.data.contains_key(&section)
    }

    /// Populated sections, in declaration order.
    pub fn sections(&self) -> impl Iterator<Item = Section> + '_ {
        self.data.keys().copied()
    }

    pub fn num_sections(&self) -> usize {
        self.data.len()
    }
}

fn is_comment(line: &str) -> bool {
    line.contains('#')
}

fn process_block(data: &mut BTreeMap<Section, Table>, lines: &[String]) {
    let header = lines[0].trim();
    let Some(section) = Section::match_header(header) else {
        trace!(header, "skipping unrecognised block");
        return;
    };

    if data.contains_key(&section) {
        debug!(%section, "section already parsed; keeping the first occurrence");
        return;
    }

    match Table::from_csv(&lines.join("\n")) {
        Ok(table) => {
            debug!(%section, rows = table.len(), "parsed section");
            data.insert(section, table);
        }
        Err(e) => warn!(%section, error = %e, "discarding malformed section"),
    }
}
