//! Error types for report parsing.

use thiserror::Error;

/// Errors that abort the conversion of a report.
///
/// Everything else that can go wrong with a single line, cell or timestamp is
/// absorbed by dropping the affected data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input contained no `<section>,<fields>` lines at all.
    #[error("no valid data")]
    NoValidData,

    /// A column the normalizer relies on is missing from a section header.
    ///
    /// Unlike a bad line, this rejects the whole report: no section is
    /// emitted, including sections unrelated to the broken one.
    #[error("section {section} has no {column} column")]
    MissingColumn {
        section: &'static str,
        column: &'static str,
    },

    /// A column the normalizer relies on appears more than once. Rejects
    /// the whole report like [`ParseError::MissingColumn`].
    #[error("section {section} has more than one {column} column")]
    DuplicateColumn {
        section: &'static str,
        column: &'static str,
    },
}
