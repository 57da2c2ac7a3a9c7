//! Report - the normalized model of one nmon capture.

use chrono::{DateTime, Utc};

use crate::messages::Messages;
use crate::pipeline::SectionSet;
use crate::section::{Section, Sections};
use crate::snapshot::Snapshots;
use crate::ParseError;

/// Parse a complete nmon report.
///
/// Every `%` in `raw` is replaced with `Percent` before anything else, so
/// section names, headers and values never contain `%`.
///
/// # Example
///
/// ```rust
/// let report = nmon_parser::parse(
///     "ZZZZ,T0001,14:00:00,01-Jan-2020\nAAA,host,server1\nCPU_ALL,CPU Total server1,User%,Sys%\nCPU_ALL,T0001,10.5,2.3\n",
/// )
/// .unwrap();
///
/// assert_eq!(report.hostname(), "server1");
/// let series = report.emit("", false);
/// assert_eq!(series[0].name, "server1.CPU_ALL.UserPercent");
/// ```
pub fn parse(raw: &str) -> Result<Report, ParseError> {
    let text = raw.replace('%', "Percent");

    Ok(SectionSet::build(&text)?
        .resolve_hostname()
        .resolve_snapshots()
        .normalize_top()?
        .aggregate_messages())
}

/// A fully normalized report, ready for series emission.
///
/// Holds only metric tables: `ZZZZ`, `AAA`, `BBBP` and `TOP` have been
/// consumed into snapshots, the hostname, messages and `TOP.<command>`
/// sections.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub(crate) sections: Sections,
    pub(crate) snapshots: Snapshots,
    pub(crate) messages: Messages,
    pub(crate) hostname: String,
}

impl Report {
    /// Parse a report. Same as [`parse`].
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        parse(raw)
    }

    /// Host name from `AAA`, empty if absent.
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// Metric sections by name.
    pub fn sections(&self) -> &Sections {
        &self.sections
    }

    /// A metric section by name.
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    /// Snapshot id to sampling time.
    pub fn snapshots(&self) -> &Snapshots {
        &self.snapshots
    }

    /// Free-text messages by name.
    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    /// The earliest sampling time, if any snapshot resolved.
    pub fn earliest_snapshot(&self) -> Option<DateTime<Utc>> {
        self.snapshots.values().min().copied()
    }

    /// Counts describing the report, for logging.
    pub fn summary(&self) -> ReportSummary {
        ReportSummary {
            sections: self.sections.len(),
            rows: self.sections.values().map(Section::len).sum(),
            snapshots: self.snapshots.len(),
            messages: self.messages.len(),
        }
    }
}

/// Size of a parsed report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReportSummary {
    pub sections: usize,
    pub rows: usize,
    pub snapshots: usize,
    pub messages: usize,
}
