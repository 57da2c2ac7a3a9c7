//! Snapshot resolution from the `ZZZZ` section.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use tracing::trace;

use crate::section::{Sections, SNAPSHOT_SECTION};

/// `ZZZZ` time column format, e.g. `14:00:00,01-Jan-2020`.
pub const SNAPSHOT_TIME_FORMAT: &str = "%H:%M:%S,%d-%b-%Y";

/// Snapshot id (e.g. `T0001`) to sampling time.
pub type Snapshots = BTreeMap<String, DateTime<Utc>>;

/// Parse a `ZZZZ` time column. The report carries no zone, UTC is assumed.
pub fn parse_snapshot_time(s: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(s, SNAPSHOT_TIME_FORMAT)
        .ok()
        .map(|t| Utc.from_utc_datetime(&t))
}

/// Build the snapshot map and remove `ZZZZ` from `sections`.
///
/// Rows with an unparsable time are left out of the map.
pub(crate) fn resolve(sections: &mut Sections) -> Snapshots {
    let mut snapshots = Snapshots::new();

    let Some(section) = sections.remove(SNAPSHOT_SECTION) else {
        return snapshots;
    };

    for row in section.rows {
        let [id, time, ..] = row.as_slice() else {
            continue;
        };
        match parse_snapshot_time(time) {
            Some(t) => {
                snapshots.insert(id.clone(), t);
            }
            None => trace!(snapshot = %id, time = %time, "unparsable snapshot time"),
        }
    }

    snapshots
}
