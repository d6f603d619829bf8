//! Validation of the leader positions that carry closed vocabularies.
//!
//! Positions 05, 06, 07, 17 and 18 are each checked independently; every
//! unrecognized byte is reported once under the `LDR` tag.

use crate::diagnostic::{Diagnostic, LEADER_TAG};
use crate::leader::Leader;
use crate::record::Record;
use serde::{Deserialize, Serialize};

/// Allowed characters for each linted leader position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaderVocabularies {
    /// Position 05.
    pub record_status: Vec<char>,
    /// Position 06.
    pub record_type: Vec<char>,
    /// Position 07.
    pub bibliographic_level: Vec<char>,
    /// Position 17.
    pub encoding_level: Vec<char>,
    /// Position 18.
    pub cataloging_form: Vec<char>,
}

impl Default for LeaderVocabularies {
    fn default() -> Self {
        let codes = |position| {
            Leader::valid_values_at_position(position)
                .map(|values| values.into_iter().map(|(c, _)| c).collect())
                .unwrap_or_default()
        };
        LeaderVocabularies {
            record_status: codes(5),
            record_type: codes(6),
            bibliographic_level: codes(7),
            encoding_level: codes(17),
            cataloging_form: codes(18),
        }
    }
}

/// Check leader positions 05, 06, 07, 17 and 18 against the vocabularies.
#[must_use]
pub fn check_leader(record: &Record, vocabularies: &LeaderVocabularies) -> Vec<Diagnostic> {
    let leader = &record.leader;
    let checks: [(usize, &str, char, &[char]); 5] = [
        (5, "Record status", leader.record_status, &vocabularies.record_status),
        (6, "Type of record", leader.record_type, &vocabularies.record_type),
        (
            7,
            "Bibliographic level",
            leader.bibliographic_level,
            &vocabularies.bibliographic_level,
        ),
        (17, "Encoding level", leader.encoding_level, &vocabularies.encoding_level),
        (
            18,
            "Descriptive cataloging form",
            leader.cataloging_form,
            &vocabularies.cataloging_form,
        ),
    ];

    checks
        .iter()
        .filter(|(_, _, value, allowed)| !allowed.contains(value))
        .map(|(position, label, value, _)| {
            Diagnostic::new(
                LEADER_TAG,
                format!("Byte {position:02}, {label} ('{value}') is invalid."),
            )
        })
        .collect()
}
