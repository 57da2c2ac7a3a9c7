//! # nmon-parser
//!
//! Converts nmon performance captures into named, timestamped time series.
//!
//! An nmon report is a comma-separated, section-tagged log. Each line starts
//! with a section name (`CPU_ALL`, `MEM`, `TOP`, ...). Metric tables start
//! with a header line, and their rows are keyed by a snapshot id whose time
//! is recorded in `ZZZZ`. A few sections are special:
//!
//! - `ZZZZ` maps snapshot ids to times
//! - `AAA` carries host metadata (and names the host)
//! - `BBBP` carries free-text system configuration dumps
//! - `TOP` interleaves per-process rows for every command
//!
//! [`parse`] turns the text into a [`Report`] holding only plain metric
//! tables, and [`Report::emit`] turns the report into [`Series`].
//!
//! ## Example
//!
//! ```rust
//! use nmon_parser::{parse, EmitOptions};
//!
//! let text = "\
//! AAA,host,server1
//! ZZZZ,T0001,14:00:00,01-Jan-2020
//! CPU_ALL,CPU Total,User%,Sys%
//! CPU_ALL,T0001,10.5,2.3
//! ";
//!
//! let report = parse(text).unwrap();
//! let series = report.emit_with(&EmitOptions::new("dc1").ignore_text(true));
//!
//! assert_eq!(series.len(), 2);
//! assert_eq!(series[0].name, "dc1.server1.CPU_ALL.UserPercent");
//! assert_eq!(series[0].points[0].timestamp_ms, 1577887200000);
//! ```
//!
//! ## Error handling
//!
//! The format is a best-effort operational log, so a bad line never aborts
//! the conversion: unparsable times, numbers and short rows just drop the
//! affected points. [`ParseError`] is returned only when the text holds no
//! sections at all, or when `TOP` lacks the columns needed to regroup it.

mod emit;
mod error;
mod messages;
mod metadata;
mod report;
mod section;
mod snapshot;
mod top;

pub mod pipeline;

pub use emit::{EmitOptions, MESSAGES_SEGMENT};
pub use error::ParseError;
pub use messages::Messages;
pub use metadata::HOST_KEY;
pub use report::{parse, Report, ReportSummary};
pub use section::{
    build_sections, remove_columns, Section, Sections, ANNOTATION_SECTION, METADATA_SECTION,
    SNAPSHOT_SECTION,
};
pub use snapshot::{parse_snapshot_time, Snapshots, SNAPSHOT_TIME_FORMAT};
pub use top::{COMMAND_COLUMN, PID_COLUMN, PLACEHOLDER_HEADER, TOP_SECTION};

// Re-export types for convenience
pub use nmon_types::{Point, Series, Value};
