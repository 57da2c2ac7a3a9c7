//! The conversion response envelope and converter metadata.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use nmon_parser::{parse, EmitOptions};
use nmon_types::Series;

/// Result of converting one report.
///
/// Exactly one of the two fields is meaningful: on success `series` is set
/// and `error` is empty, on failure `series` is `None` (serialized as `null`)
/// and `error` holds the reason.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub series: Option<Vec<Series>>,
    pub error: String,
}

impl Response {
    /// A successful response.
    pub fn ok(series: Vec<Series>) -> Self {
        Self {
            series: Some(series),
            error: String::new(),
        }
    }

    /// A failed response.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            series: None,
            error: message.into(),
        }
    }

    /// Check if the conversion failed.
    pub fn is_error(&self) -> bool {
        !self.error.is_empty()
    }

    /// The converted series, empty on failure.
    pub fn series(&self) -> &[Series] {
        self.series.as_deref().unwrap_or_default()
    }
}

/// Convert a report body into a response. Never fails; parse errors end up
/// in [`Response::error`].
pub fn convert(body: &str, options: &EmitOptions) -> Response {
    match parse(body) {
        Ok(report) => {
            let summary = report.summary();
            debug!(
                hostname = report.hostname(),
                sections = summary.sections,
                rows = summary.rows,
                snapshots = summary.snapshots,
                messages = summary.messages,
                "parsed report"
            );
            Response::ok(report.emit_with(options))
        }
        Err(e) => {
            warn!(error = %e, "rejected report");
            Response::error(e.to_string())
        }
    }
}

/// Describes the converter and the options it accepts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Description {
    pub description: &'static str,
    pub author: &'static str,
    pub version: &'static str,
    pub arguments: Vec<Argument>,
}

/// One accepted option.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Argument {
    pub name: &'static str,
    pub description: &'static str,
    pub optional: bool,
    pub default: &'static str,
}

/// Metadata for this converter.
pub fn describe() -> Description {
    Description {
        description: "Converts nmon reports into time series for a time-series store",
        author: env!("CARGO_PKG_AUTHORS"),
        version: env!("CARGO_PKG_VERSION"),
        arguments: vec![
            Argument {
                name: "prefix",
                description: "Prefix of the series, separated from the hostname with a '.' if given",
                optional: true,
                default: "",
            },
            Argument {
                name: "ignore_text",
                description: "If any value is provided, the text passages of the report (AAA and BBBP sections) are left out",
                optional: true,
                default: "",
            },
        ],
    }
}
