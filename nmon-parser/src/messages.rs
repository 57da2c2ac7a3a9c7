//! Free-text message aggregation from `AAA` and `BBBP`.

use std::collections::BTreeMap;

use crate::section::{Sections, ANNOTATION_SECTION, METADATA_SECTION};

/// Message name to accumulated text, one line per source row.
pub type Messages = BTreeMap<String, String>;

/// Fold the text sections into messages and remove them from `sections`.
///
/// `AAA` rows become `key: value` lines of a single `AAA` message. `BBBP`
/// rows are grouped by their source column into `BBBP_<source>` messages;
/// rows without a text column are skipped.
pub(crate) fn aggregate(sections: &mut Sections) -> Messages {
    let mut messages = Messages::new();

    if let Some(section) = sections.remove(METADATA_SECTION) {
        for row in &section.rows {
            let text = messages.entry(METADATA_SECTION.to_string()).or_default();
            text.push_str(&row.join(": "));
            text.push('\n');
        }
    }

    if let Some(section) = sections.remove(ANNOTATION_SECTION) {
        for row in &section.rows {
            let [_, source, value, ..] = row.as_slice() else {
                continue;
            };
            let text = messages
                .entry(format!("{}_{}", ANNOTATION_SECTION, source))
                .or_default();
            text.push_str(value);
            text.push('\n');
        }
    }

    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::build_sections;

    #[test]
    fn metadata_rows_become_key_value_lines() {
        let mut sections = build_sections("AAA,host,server1\nAAA,cpus,4,2\n");
        let messages = aggregate(&mut sections);

        assert_eq!(messages["AAA"], "host: server1\ncpus: 4,2\n");
        assert!(sections.is_empty());
    }

    #[test]
    fn annotations_grouped_by_source() {
        let mut sections = build_sections(
            "BBBP,000,/etc/release,\"SUSE Linux\"\n\
             BBBP,001,lsconf,\"Model: x\"\n\
             BBBP,002,/etc/release,\"VERSION = 12\"\n\
             BBBP,003,lsconf\n\
             CPU_ALL,User\n",
        );
        let messages = aggregate(&mut sections);

        assert_eq!(messages.len(), 2);
        assert_eq!(
            messages["BBBP_/etc/release"],
            "\"SUSE Linux\"\n\"VERSION = 12\"\n"
        );
        assert_eq!(messages["BBBP_lsconf"], "\"Model: x\"\n");
        assert!(!sections.contains_key(ANNOTATION_SECTION));
        assert!(sections.contains_key("CPU_ALL"));
    }

    #[test]
    fn other_sections_untouched() {
        let mut sections = build_sections("CPU_ALL,User\nCPU_ALL,T0001,1\n");
        assert!(aggregate(&mut sections).is_empty());
        assert_eq!(sections["CPU_ALL"].rows.len(), 1);
    }
}
