//! # nmon2series
//!
//! Converts nmon performance reports into named time series.
//!
//! The parsing itself lives in [`nmon_parser`]; this crate wraps it in the
//! shape a time-series ingestion front end expects:
//!
//! - **[`response`]**: the [`Response`] envelope (`series` or `error`) and
//!   the [`describe`] metadata for the converter
//! - **[`settings`]**: layered [`Settings`] (embedded defaults, settings
//!   file, `NMON2SERIES_*` environment)
//! - **[`input`]** / **[`output`]**: where bodies come from and where
//!   rendered responses go, as JSON or Graphite plaintext
//!
//! ## Usage
//!
//! ```rust
//! use nmon2series::{convert, render, Format};
//! use nmon_parser::EmitOptions;
//!
//! let body = "AAA,host,web1\nZZZZ,T0001,14:00:00,01-Jan-2020\nCPU_ALL,CPU Total web1,User%\nCPU_ALL,T0001,7.0\n";
//! let response = convert(body, &EmitOptions::new("dc1").ignore_text(true));
//! assert!(!response.is_error());
//!
//! let text = render(&response, Format::Graphite, false).unwrap();
//! assert_eq!(text, "dc1.web1.CPU_ALL.UserPercent 7 1577887200\n");
//! ```

pub mod input;
pub mod output;
pub mod response;
pub mod settings;

use anyhow::{Context, Result};
use tracing::info;

pub use input::Input;
pub use output::{format_graphite, render, Output};
pub use response::{convert, describe, Argument, Description, Response};
pub use settings::{Format, Settings, ENV_PREFIX};

/// Read a report from `input`, convert it and write the rendered response
/// to `output`.
///
/// Conversion failures are not errors here: they are written out as an
/// error response and returned so the caller can decide on the exit code.
/// I/O and rendering failures are errors.
pub fn run(input: &Input, settings: &Settings, output: &Output) -> Result<Response> {
    let body = input.read()?;
    let response = convert(&body, &settings.emit);

    let rendered = render(&response, settings.format, settings.pretty)
        .context("rendering response")?;
    output
        .emit(&rendered)
        .with_context(|| format!("writing output to {:?}", output))?;

    info!(
        source = %input.description(),
        series = response.series().len(),
        error = %response.error,
        "converted report"
    );
    Ok(response)
}
