//! Layered settings.
//!
//! [`Settings::load`] merges, lowest priority first: the embedded defaults,
//! an optional settings file, and `NMON2SERIES_*` environment variables.
//! Command-line flags are applied on top by the binary.

use std::path::Path;

use anyhow::{Context, Result};
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

use nmon_parser::EmitOptions;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_SETTINGS: &str = r#"
prefix      = ""
ignore_text = false
format      = "json"
pretty      = false
"#;

/// Prefix of the environment variables read by [`Settings::load`].
pub const ENV_PREFIX: &str = "NMON2SERIES";

/// How converted series are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// The response envelope as JSON.
    #[default]
    Json,
    /// Graphite plaintext protocol, numeric points only.
    Graphite,
}

/// Converter settings.
///
/// `prefix` and `ignore_text` sit at the top level of the settings file and
/// are read straight into the parser's [`EmitOptions`].
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Settings {
    #[serde(flatten)]
    pub emit: EmitOptions,
    #[serde(default)]
    pub format: Format,
    /// Pretty-print JSON output.
    #[serde(default)]
    pub pretty: bool,
}

impl Settings {
    /// Load the defaults, then `path` if given, then the environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Toml));

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }

        builder
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()
            .and_then(|c| c.try_deserialize())
            .with_context(|| match path {
                Some(p) => format!("loading settings from {}", p.display()),
                None => "loading settings".to_string(),
            })
    }
}
