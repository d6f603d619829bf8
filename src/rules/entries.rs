//! Indicator and presence relations between entry fields.

use crate::diagnostic::Diagnostic;
use crate::linter::RuleContext;
use crate::record::Record;
use crate::tag_range::TagRange;

/// 245 first indicator must agree with the presence of a 1xx main entry.
#[must_use]
pub fn check_245_ind1_vs_1xx(record: &Record, _ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
    let Some(title) = record.get_field("245") else {
        return Vec::new();
    };
    let has_main_entry = record.has_field_in_range(TagRange::MAIN_ENTRIES);
    match (title.indicator1, has_main_entry) {
        ('0', true) => vec![Diagnostic::new("245", "Indicator is 0 but 1xx exists.")],
        ('1', false) => vec![Diagnostic::new(
            "245",
            "Indicator is 1 but 1xx does not exist.",
        )],
        _ => Vec::new(),
    }
}

/// A uniform title (240) is only used with a 1xx main entry.
#[must_use]
pub fn check_240_vs_1xx(record: &Record, _ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
    if record.has_field("240") && !record.has_field_in_range(TagRange::MAIN_ENTRIES) {
        return vec![Diagnostic::new("240", "Is present but 1xx does not exist.")];
    }
    Vec::new()
}

/// A traced series statement (490 ind1 `1`) needs a series added entry (800-830).
#[must_use]
pub fn check_490_vs_8xx(record: &Record, _ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
    let traced = record.fields_by_tag("490").any(|f| f.indicator1 == '1');
    if traced && !record.has_field_in_range(TagRange::SERIES_ADDED_ENTRIES) {
        return vec![Diagnostic::new(
            "490",
            "Indicator is 1 but 8xx does not exist.",
        )];
    }
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leader::Leader;
    use crate::record::Field;
    use crate::rules::test_support::{field, run};

    fn record_with(fields: Vec<Field>) -> Record {
        let mut record = Record::new(Leader::default());
        for f in fields {
            record.add_field(f);
        }
        record
    }

    #[test]
    fn test_245_indicator_0_with_main_entry() {
        let record = record_with(vec![
            field("100", '1', ' ', &[('a', "Doe, Jane.")]),
            field("245", '0', '0', &[('a', "Cats.")]),
        ]);
        assert_eq!(
            run(check_245_ind1_vs_1xx, &record),
            vec!["245: Indicator is 0 but 1xx exists."]
        );
    }

    #[test]
    fn test_245_indicator_1_without_main_entry() {
        let record = record_with(vec![field("245", '1', '0', &[('a', "Cats.")])]);
        assert_eq!(
            run(check_245_ind1_vs_1xx, &record),
            vec!["245: Indicator is 1 but 1xx does not exist."]
        );
    }

    #[test]
    fn test_245_consistent() {
        let record = record_with(vec![
            field("110", '2', ' ', &[('a', "Acme.")]),
            field("245", '1', '0', &[('a', "Report.")]),
        ]);
        assert!(run(check_245_ind1_vs_1xx, &record).is_empty());
        assert!(run(check_245_ind1_vs_1xx, &Record::default()).is_empty());
    }

    #[test]
    fn test_240_needs_main_entry() {
        let record = record_with(vec![field("240", '1', '0', &[('a', "Works")])]);
        assert_eq!(
            run(check_240_vs_1xx, &record),
            vec!["240: Is present but 1xx does not exist."]
        );
    }

    #[test]
    fn test_490_traced_without_8xx() {
        let record = record_with(vec![
            field("490", '1', ' ', &[('a', "Series one")]),
            field("490", '1', ' ', &[('a', "Series two")]),
            field("856", '4', '0', &[('u', "http://example.org")]),
        ]);
        assert_eq!(
            run(check_490_vs_8xx, &record),
            vec!["490: Indicator is 1 but 8xx does not exist."]
        );
    }

    #[test]
    fn test_490_with_830() {
        let record = record_with(vec![
            field("490", '1', ' ', &[('a', "Series")]),
            field("830", ' ', '0', &[('a', "Series.")]),
        ]);
        assert!(run(check_490_vs_8xx, &record).is_empty());
        let untraced = record_with(vec![field("490", '0', ' ', &[('a', "Series")])]);
        assert!(run(check_490_vs_8xx, &untraced).is_empty());
    }
}
