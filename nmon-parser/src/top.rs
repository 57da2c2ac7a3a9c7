//! Per-process table normalization.
//!
//! `TOP` interleaves rows for every process in one table. Each row carries
//! the process id and command name next to the snapshot id and metrics. The
//! normalizer drops the id and command columns and moves each row into a
//! section of its own per command, `TOP.<command>`, so the result looks like
//! any other metric table keyed by snapshot id.

use tracing::{debug, trace};

use crate::section::{remove_columns, Section, Sections};
use crate::ParseError;

/// Name of the per-process table.
pub const TOP_SECTION: &str = "TOP";

/// Header some nmon versions emit before the real `TOP` header line
/// (`%CPU Utilisation` after `%` substitution).
pub const PLACEHOLDER_HEADER: &str = "PercentCPU Utilisation";

/// Process id column, dropped.
pub const PID_COLUMN: &str = "+PID";

/// Command column, used to group rows and then dropped.
pub const COMMAND_COLUMN: &str = "Command";

/// Replace `TOP` with one `TOP.<command>` section per command.
pub(crate) fn normalize(sections: &mut Sections) -> Result<(), ParseError> {
    let Some(mut top) = sections.remove(TOP_SECTION) else {
        return Ok(());
    };

    repair_header(&mut top);

    let pid = top.unique_column(TOP_SECTION, PID_COLUMN)?;
    let command = top.unique_column(TOP_SECTION, COMMAND_COLUMN)?;
    let stripped = [pid, command];
    let header = remove_columns(top.header, &stripped);

    let mut skipped = 0usize;
    for row in top.rows {
        let Some(name) = row.get(command).map(|c| format!("{}.{}", TOP_SECTION, c)) else {
            skipped += 1;
            continue;
        };
        let row = remove_columns(row, &stripped);
        sections
            .entry(name)
            .or_insert_with(|| Section::with_header(header.clone()))
            .rows
            .push(row);
    }

    if skipped > 0 {
        trace!(skipped, "TOP rows without a command cell");
    }
    debug!(
        processes = sections
            .keys()
            .filter(|k| k.starts_with("TOP."))
            .count(),
        "regrouped TOP by command"
    );
    Ok(())
}

/// Promote the first data row to header when the header is the placeholder.
fn repair_header(top: &mut Section) {
    if top.header.first().map(String::as_str) == Some(PLACEHOLDER_HEADER) && !top.rows.is_empty() {
        top.header = top.rows.remove(0);
    }
}
