//! Rendering and output destinations for converted series.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use nmon_types::{Series, Value};

use crate::response::Response;
use crate::settings::Format;

/// Output destination for a rendered response.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Output {
    /// Write to standard output.
    #[default]
    Stdout,

    /// Write to a file, replacing any previous content.
    File(PathBuf),
}

impl Output {
    /// Create a file output.
    ///
    /// # Example
    ///
    /// ```rust
    /// use nmon2series::Output;
    ///
    /// let output = Output::file("series.json");
    /// ```
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Output::File(path.into())
    }

    /// Write `rendered` to this output, newline-terminated.
    pub fn emit(&self, rendered: &str) -> io::Result<()> {
        let newline = if rendered.ends_with('\n') { "" } else { "\n" };
        match self {
            Output::Stdout => {
                let mut out = io::stdout().lock();
                out.write_all(rendered.as_bytes())?;
                out.write_all(newline.as_bytes())?;
                out.flush()
            }
            Output::File(path) => fs::write(path, format!("{}{}", rendered, newline)),
        }
    }
}

/// Render a response in the given format.
pub fn render(response: &Response, format: Format, pretty: bool) -> serde_json::Result<String> {
    match format {
        Format::Json if pretty => serde_json::to_string_pretty(response),
        Format::Json => serde_json::to_string(response),
        Format::Graphite => Ok(format_graphite(response.series())),
    }
}

/// Format series in the Graphite plaintext protocol.
///
/// One `<path> <value> <unix-seconds>` line per numeric point. Text points
/// have no Graphite representation and are skipped. Whitespace in names is
/// replaced with `_` since the protocol is space-delimited.
pub fn format_graphite(series: &[Series]) -> String {
    let mut output = String::new();

    for s in series {
        let path: String = s
            .name
            .chars()
            .map(|c| if c.is_whitespace() { '_' } else { c })
            .collect();

        for point in &s.points {
            if let Value::Number(v) = point.value {
                output.push_str(&format!(
                    "{} {} {}\n",
                    path,
                    v,
                    point.timestamp_ms.div_euclid(1000)
                ));
            }
        }
    }

    output
}
