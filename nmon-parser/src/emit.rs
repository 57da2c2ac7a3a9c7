//! Series emission.
//!
//! Every metric column (other than the key column) of every section becomes
//! one numeric series named `<prefix>.<section>.<column>`. Every message
//! becomes a one-point text series named `<prefix>.MESSAGES.<message>`.
//! Sections, columns, rows and messages are walked in a fixed order, so the
//! same report always yields the same list.

use chrono::Utc;
use serde::Deserialize;
use tracing::debug;

use nmon_types::{Point, Series, Value};

use crate::section::Section;
use crate::Report;

/// Name segment under which messages are emitted.
pub const MESSAGES_SEGMENT: &str = "MESSAGES";

/// Caller options for [`Report::emit_with`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EmitOptions {
    /// Prepended (dot-separated) to the hostname in every series name.
    #[serde(default)]
    pub prefix: String,

    /// Leave out the `MESSAGES` series.
    #[serde(default)]
    pub ignore_text: bool,
}

impl EmitOptions {
    /// Options with a prefix and text series included.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            ignore_text: false,
        }
    }

    /// Set whether text series are left out.
    pub fn ignore_text(mut self, ignore: bool) -> Self {
        self.ignore_text = ignore;
        self
    }

    /// Options from string-valued query parameters.
    ///
    /// `prefix` is taken verbatim. `ignore_text` is set by any non-empty
    /// value. The first occurrence of a key wins; unknown keys are ignored.
    pub fn from_query<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut prefix = None;
        let mut ignore_text = None;
        for (key, value) in pairs {
            match key {
                "prefix" => {
                    prefix.get_or_insert(value);
                }
                "ignore_text" => {
                    ignore_text.get_or_insert(!value.is_empty());
                }
                _ => {}
            }
        }
        Self {
            prefix: prefix.unwrap_or_default().to_string(),
            ignore_text: ignore_text.unwrap_or(false),
        }
    }
}

impl Report {
    /// Emit all series.
    ///
    /// With an empty `prefix` names start with the hostname, otherwise with
    /// `prefix.hostname`. `suppress_text` leaves out the `MESSAGES` series.
    /// Series without any point are never emitted.
    pub fn emit(&self, prefix: &str, suppress_text: bool) -> Vec<Series> {
        let prefix = self.effective_prefix(prefix);

        let mut series = self.section_series(&prefix);
        let numeric = series.len();
        if !suppress_text {
            series.extend(self.message_series(&prefix));
        }

        debug!(
            numeric,
            text = series.len() - numeric,
            %prefix,
            "emitted series"
        );
        series
    }

    /// Emit all series using `options`.
    pub fn emit_with(&self, options: &EmitOptions) -> Vec<Series> {
        self.emit(&options.prefix, options.ignore_text)
    }

    fn effective_prefix(&self, prefix: &str) -> String {
        if prefix.is_empty() {
            self.hostname.clone()
        } else {
            format!("{}.{}", prefix, self.hostname)
        }
    }

    fn section_series(&self, prefix: &str) -> Vec<Series> {
        let mut out = Vec::new();
        for (name, section) in &self.sections {
            for (column, field) in section.header.iter().enumerate().skip(1) {
                let mut series = Series::new(join(&[prefix, name, field]));
                series.points = self.column_points(section, column);
                if !series.is_empty() {
                    out.push(series);
                }
            }
        }
        out
    }

    /// Points for one column. Rows without a resolved snapshot, without the
    /// cell or with a non-numeric cell contribute nothing.
    fn column_points(&self, section: &Section, column: usize) -> Vec<Point> {
        section
            .rows
            .iter()
            .filter_map(|row| {
                let time = self.snapshots.get(row.first()?)?;
                let value = parse_number(row.get(column)?)?;
                Some(Point::new(time.timestamp() * 1000, value))
            })
            .collect()
    }

    fn message_series(&self, prefix: &str) -> Vec<Series> {
        let timestamp_ms = self
            .earliest_snapshot()
            .unwrap_or_else(Utc::now)
            .timestamp()
            * 1000;

        self.messages
            .iter()
            .map(|(name, text)| {
                let mut series = Series::new(join(&[prefix, MESSAGES_SEGMENT, name]));
                series.push(Point::new(timestamp_ms, Value::Text(text.clone())));
                series
            })
            .collect()
    }
}

fn join(parts: &[&str]) -> String {
    parts.join(".")
}

/// A finite float, or nothing.
fn parse_number(cell: &str) -> Option<f64> {
    cell.parse::<f64>().ok().filter(|n| n.is_finite())
}
