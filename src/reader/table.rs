// src/reader/table.rs
use csv::{ReaderBuilder, Trim};

/// One block of the export, parsed with its header row.
/// Body cells are kept exactly as they appear in the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    /// Column names, from the first line of the block.
    headers: Vec<String>,
    /// Each body line, one `String` per field.
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Parse a block (header line + body lines) as comma-separated values.
    ///
    /// Records may be shorter or longer than the header; missing trailing
    /// cells simply read as absent. Header names are trimmed so they agree
    /// with section matching; body cells are not.
    pub fn from_csv(text: &str) -> Result<Self, csv::Error> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::Headers)
            .from_reader(text.as_bytes());

        let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();

        let mut rows = Vec::new();
        for result in rdr.records() {
            let record = result?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(Self { headers, rows })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, index: usize) -> Option<Row<'_>> {
        self.rows.get(index).map(|cells| Row {
            index,
            headers: &self.headers,
            cells,
        })
    }

    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> + '_ {
        self.rows.iter().enumerate().map(move |(index, cells)| Row {
            index,
            headers: &self.headers,
            cells,
        })
    }
}

/// A borrowed view of one row, addressable by column name.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    index: usize,
    headers: &'a [String],
    cells: &'a [String],
}

impl<'a> Row<'a> {
    /// Zero-based position of this row in its table.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Cell under `column`; the first matching column wins on duplicates.
    pub fn get(&self, column: &str) -> Option<&'a str> {
        let pos = self.headers.iter().position(|h| h == column)?;
        self.cells.get(pos).map(String::as_str)
    }

    /// `(column, cell)` pairs in header order; missing trailing cells are skipped.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        self.headers
            .iter()
            .zip(self.cells.iter())
            .map(|(h, c)| (h.as_str(), c.as_str()))
    }
}
