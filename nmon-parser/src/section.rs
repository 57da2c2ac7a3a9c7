//! Section builder - splits raw report text into named tables.
//!
//! Every report line has the shape `<section>,<fields>`. Most sections are
//! metric tables whose first line is the header row. A few well-known
//! sections carry free text and get a fixed header instead, with their first
//! line kept as data.

use std::collections::BTreeMap;

use tracing::trace;

use crate::ParseError;

/// Host metadata, one key/value pair per line.
pub const METADATA_SECTION: &str = "AAA";

/// Free-text annotations, `<line>,<source>,<text>`.
pub const ANNOTATION_SECTION: &str = "BBBP";

/// Snapshot id to wall-clock time mapping.
pub const SNAPSHOT_SECTION: &str = "ZZZZ";

/// All sections of a report, keyed by section name.
pub type Sections = BTreeMap<String, Section>;

/// A named table within a report.
///
/// `header` gives the nominal column count. Rows may be shorter (or longer)
/// than the header; readers treat a missing cell as missing data.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Section {
    /// Column names. Column 0 is the row key (usually the snapshot id).
    pub header: Vec<String>,

    /// Data rows in input order.
    pub rows: Vec<Vec<String>>,
}

impl Section {
    /// Create an empty section with the given header.
    pub fn with_header(header: Vec<String>) -> Self {
        Self {
            header,
            rows: Vec::new(),
        }
    }

    /// Create a section from the first line seen for `name`.
    fn from_first_row(name: &str, row: Vec<String>) -> Self {
        let fixed: &[&str] = match name {
            METADATA_SECTION => &["key", "value"],
            ANNOTATION_SECTION => &["line", "source", "value"],
            SNAPSHOT_SECTION => &["snapshot", "time"],
            _ => return Self::with_header(row),
        };

        Self {
            header: fixed.iter().map(|h| h.to_string()).collect(),
            rows: vec![row],
        }
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the section has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of the only header column named `column`.
    pub fn unique_column(
        &self,
        section: &'static str,
        column: &'static str,
    ) -> Result<usize, ParseError> {
        let mut positions = self
            .header
            .iter()
            .enumerate()
            .filter(|(_, h)| h.as_str() == column)
            .map(|(i, _)| i);

        match (positions.next(), positions.next()) {
            (Some(i), None) => Ok(i),
            (None, _) => Err(ParseError::MissingColumn { section, column }),
            (Some(_), Some(_)) => Err(ParseError::DuplicateColumn { section, column }),
        }
    }
}

/// Split report text into sections.
///
/// Lines without a comma are skipped. A trailing carriage return is ignored.
pub fn build_sections(text: &str) -> Sections {
    let mut sections = Sections::new();

    for line in text.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);
        let Some((name, rest)) = line.split_once(',') else {
            if !line.is_empty() {
                trace!(line, "skipping line without a section tag");
            }
            continue;
        };

        let row = split_fields(name, rest);
        match sections.get_mut(name) {
            Some(section) => section.rows.push(row),
            None => {
                sections.insert(name.to_string(), Section::from_first_row(name, row));
            }
        }
    }

    sections
}

/// Split the part of a line after the section tag into cells.
///
/// Text sections keep everything after their last fixed field as one cell,
/// so embedded commas survive.
fn split_fields(name: &str, rest: &str) -> Vec<String> {
    let limit = match name {
        METADATA_SECTION | SNAPSHOT_SECTION => 2,
        ANNOTATION_SECTION => 3,
        _ => return rest.split(',').map(String::from).collect(),
    };
    rest.splitn(limit, ',').map(String::from).collect()
}

/// Remove the cells at `indices` from `cells`.
///
/// Indices refer to positions in the original row. They are removed from the
/// highest down, which keeps every index still pending removal valid. This
/// ordering must be kept if the routine is changed. Duplicate indices and
/// indices past the end of a short row are ignored.
pub fn remove_columns(mut cells: Vec<String>, indices: &[usize]) -> Vec<String> {
    let mut indices = indices.to_vec();
    indices.sort_unstable_by(|a, b| b.cmp(a));
    indices.dedup();

    for i in indices {
        if i < cells.len() {
            cells.remove(i);
        }
    }
    cells
}
