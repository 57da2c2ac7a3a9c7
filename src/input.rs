//! Where report bodies come from.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

/// A report source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Read the body from standard input.
    Stdin,
    /// Read the body from a file.
    File(PathBuf),
}

impl Input {
    /// Pick a source from an optional path argument. No path and `-` both
    /// mean standard input.
    pub fn from_arg(arg: Option<&Path>) -> Self {
        match arg {
            Some(path) if path != Path::new("-") => Input::File(path.to_path_buf()),
            _ => Input::Stdin,
        }
    }

    /// Human-readable description for log lines and error messages.
    pub fn description(&self) -> String {
        match self {
            Input::Stdin => "stdin".to_string(),
            Input::File(path) => format!("file: {}", path.display()),
        }
    }

    /// Read the whole body.
    ///
    /// nmon writes plain ASCII, but BBBP sections can carry arbitrary
    /// command output, so invalid UTF-8 is replaced rather than rejected.
    pub fn read(&self) -> Result<String> {
        let bytes = match self {
            Input::Stdin => {
                let mut buf = Vec::new();
                io::stdin()
                    .lock()
                    .read_to_end(&mut buf)
                    .context("reading report from stdin")?;
                buf
            }
            Input::File(path) => fs::read(path)
                .with_context(|| format!("reading report from {}", path.display()))?,
        };
        debug!(source = %self.description(), bytes = bytes.len(), "read report");

        Ok(match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn dash_and_missing_mean_stdin() {
        assert_eq!(Input::from_arg(None), Input::Stdin);
        assert_eq!(Input::from_arg(Some(Path::new("-"))), Input::Stdin);
        assert_eq!(
            Input::from_arg(Some(Path::new("a.nmon"))),
            Input::File(PathBuf::from("a.nmon"))
        );
    }

    #[test]
    fn reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "AAA,host,h").unwrap();

        let input = Input::File(file.path().to_path_buf());
        assert_eq!(input.read().unwrap(), "AAA,host,h\n");
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"BBBP,001,x,\"caf\xe9\"\n").unwrap();

        let text = Input::File(file.path().to_path_buf()).read().unwrap();
        assert_eq!(text, "BBBP,001,x,\"caf\u{fffd}\"\n");
    }

    #[test]
    fn missing_file_names_path() {
        let err = Input::File(PathBuf::from("/nonexistent/report.nmon"))
            .read()
            .unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/report.nmon"));
    }
}
