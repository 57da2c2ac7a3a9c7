//! Host metadata from the `AAA` section.

use crate::section::{Sections, METADATA_SECTION};

/// `AAA` key holding the host name.
pub const HOST_KEY: &str = "host";

/// The host name recorded in `AAA`, or an empty string.
///
/// Leaves `AAA` in place; it is folded into a message later.
pub(crate) fn hostname(sections: &Sections) -> String {
    sections
        .get(METADATA_SECTION)
        .into_iter()
        .flat_map(|section| section.rows.iter())
        .filter_map(|row| match row.as_slice() {
            [key, value, ..] if key == HOST_KEY => Some(value),
            _ => None,
        })
        .last()
        .cloned()
        .unwrap_or_default()
}
