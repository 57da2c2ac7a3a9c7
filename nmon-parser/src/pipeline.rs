//! Staged report construction.
//!
//! Each normalization pass is a transition from one stage type to the next,
//! and each stage type only offers the transition to its successor:
//!
//! ```text
//! SectionSet ─► HostResolved ─► SnapshotsResolved ─► TopNormalized ─► Report
//!   (build)    (hostname)       (ZZZZ)               (TOP)            (AAA, BBBP)
//! ```
//!
//! The hostname must be read from `AAA` before message aggregation consumes
//! it, and snapshots must exist before emission. Taking `self` by value makes
//! every pass finish, deletions included, before the next one starts.

use tracing::debug;

use crate::messages::{self, Messages};
use crate::metadata;
use crate::section::{build_sections, Sections};
use crate::snapshot::{self, Snapshots};
use crate::top;
use crate::{ParseError, Report};

/// Raw sections straight from the text.
#[derive(Debug)]
pub struct SectionSet {
    sections: Sections,
}

impl SectionSet {
    /// Split `text` into sections. Fails if no section was found.
    ///
    /// `text` is taken as is; [`crate::parse`] applies the `%` substitution
    /// first.
    pub fn build(text: &str) -> Result<Self, ParseError> {
        let sections = build_sections(text);
        if sections.is_empty() {
            return Err(ParseError::NoValidData);
        }
        debug!(sections = sections.len(), "built sections");
        Ok(Self { sections })
    }

    /// The sections found.
    pub fn sections(&self) -> &Sections {
        &self.sections
    }

    /// Read the hostname from `AAA`.
    pub fn resolve_hostname(self) -> HostResolved {
        let hostname = metadata::hostname(&self.sections);
        debug!(%hostname, "resolved hostname");
        HostResolved {
            sections: self.sections,
            hostname,
        }
    }
}

/// Sections plus the hostname.
#[derive(Debug)]
pub struct HostResolved {
    sections: Sections,
    hostname: String,
}

impl HostResolved {
    /// Resolved hostname, possibly empty.
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// Consume `ZZZZ` into the snapshot map.
    pub fn resolve_snapshots(mut self) -> SnapshotsResolved {
        let snapshots = snapshot::resolve(&mut self.sections);
        debug!(snapshots = snapshots.len(), "resolved snapshots");
        SnapshotsResolved {
            sections: self.sections,
            hostname: self.hostname,
            snapshots,
        }
    }
}

/// Sections without `ZZZZ`, with snapshots resolved.
#[derive(Debug)]
pub struct SnapshotsResolved {
    sections: Sections,
    hostname: String,
    snapshots: Snapshots,
}

impl SnapshotsResolved {
    /// Resolved snapshots.
    pub fn snapshots(&self) -> &Snapshots {
        &self.snapshots
    }

    /// Replace `TOP` with per-command sections.
    pub fn normalize_top(mut self) -> Result<TopNormalized, ParseError> {
        top::normalize(&mut self.sections)?;
        Ok(TopNormalized {
            sections: self.sections,
            hostname: self.hostname,
            snapshots: self.snapshots,
        })
    }
}

/// Sections without `ZZZZ` or `TOP`.
#[derive(Debug)]
pub struct TopNormalized {
    sections: Sections,
    hostname: String,
    snapshots: Snapshots,
}

impl TopNormalized {
    /// Current sections.
    pub fn sections(&self) -> &Sections {
        &self.sections
    }

    /// Fold `AAA` and `BBBP` into messages, completing the report.
    pub fn aggregate_messages(mut self) -> Report {
        let messages: Messages = messages::aggregate(&mut self.sections);
        debug!(messages = messages.len(), "aggregated messages");
        Report {
            sections: self.sections,
            snapshots: self.snapshots,
            messages,
            hostname: self.hostname,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_run_in_order() {
        let text = "AAA,host,h1\nZZZZ,T0001,00:00:01,02-Feb-2021\nTOP,+PID,Time,PercentCPU,Command\nTOP,1,T0001,2.0,bash\n";

        let set = SectionSet::build(text).unwrap();
        assert_eq!(set.sections().len(), 3);

        let host = set.resolve_hostname();
        assert_eq!(host.hostname(), "h1");

        let timed = host.resolve_snapshots();
        assert_eq!(timed.snapshots().len(), 1);

        let normalized = timed.normalize_top().unwrap();
        let names: Vec<&String> = normalized.sections().keys().collect();
        assert_eq!(names, ["AAA", "TOP.bash"]);

        let report = normalized.aggregate_messages();
        assert_eq!(report.hostname(), "h1");
        assert!(report.section("AAA").is_none());
        assert_eq!(report.messages()["AAA"], "host: h1\n");
    }

    #[test]
    fn empty_text_has_no_sections() {
        assert_eq!(SectionSet::build("").unwrap_err(), ParseError::NoValidData);
        assert_eq!(
            SectionSet::build("no commas here\n\n").unwrap_err(),
            ParseError::NoValidData
        );
    }
}
