//! Agreement of publication dates across 008, 050 and the imprint.

use crate::diagnostic::Diagnostic;
use crate::fixed_field::{Field008, MaterialType};
use crate::linter::RuleContext;
use crate::record::{Field, Record};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref CALL_NUMBER_YEAR: Regex =
        Regex::new(r"(\d{4})[a-z]?\s*$").expect("call number year pattern compiles");
    static ref CORRECTED_YEAR: Regex =
        Regex::new(r"\[i\.\s?e\.,?\s*(\d{4})\]").expect("corrected year pattern compiles");
    static ref ANY_YEAR: Regex = Regex::new(r"\d{4}").expect("year pattern compiles");
}

/// Where a compared year came from.
struct Source {
    label: &'static str,
    year: Result<String, Diagnostic>,
}

/// First 260 `$c`, or first 264 with second indicator `1`.
fn imprint(record: &Record) -> Option<(&'static str, &str)> {
    if let Some(date) = record
        .fields_by_tag("260")
        .find_map(|f| f.get_subfield('c'))
    {
        return Some(("260", date));
    }
    record
        .fields_by_tag("264")
        .filter(|f| f.indicator2 == '1')
        .find_map(|f| f.get_subfield('c'))
        .map(|date| ("264", date))
}

fn imprint_year(text: &str) -> Option<String> {
    CORRECTED_YEAR
        .captures(text)
        .and_then(|c| c.get(1))
        .or_else(|| ANY_YEAR.find(text))
        .map(|m| m.as_str().to_string())
}

fn extraction_failure(tag: &str, what: &str, value: &str) -> Diagnostic {
    Diagnostic::new(tag, format!("Unable to extract a year from {what} ('{value}')."))
}

fn is_conference(record: &Record, f008: &Field008) -> bool {
    let conference_byte = matches!(
        MaterialType::classify(&record.leader),
        Some(MaterialType::Book | MaterialType::ContinuingResource)
    ) && f008.byte(29) == Some('1');
    conference_byte || record.has_field("111")
}

fn call_number_date(field: &Field) -> Result<String, Diagnostic> {
    let Some(item) = field.get_subfield('b') else {
        return Err(Diagnostic::new(
            "050",
            "Unable to extract a year: subfield _b is missing.",
        ));
    };
    CALL_NUMBER_YEAR
        .captures(item)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| extraction_failure("050", "subfield _b", item))
}

/// Date 1 in 008, the year in the first 050 and the imprint year must agree.
///
/// Conference publications are often published later than the call number
/// date, so only 008 and the imprint are compared for them.
#[must_use]
pub fn check_pub_dates(record: &Record, ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
    if ctx.config.exempt_cip && record.leader.is_cip() {
        return Vec::new();
    }
    let Some(f008) = Field008::from_record(record) else {
        return Vec::new();
    };
    let Some((imprint_tag, imprint_text)) = imprint(record) else {
        return Vec::new();
    };

    let date1 = f008.date1();
    let mut sources = vec![Source {
        label: "008",
        year: if date1.chars().all(|c| c.is_ascii_digit()) {
            Ok(date1.clone())
        } else {
            Err(extraction_failure("008", "Date 1", &date1))
        },
    }];

    if !is_conference(record, &f008) {
        let Some(call_number) = record.get_field("050") else {
            return Vec::new();
        };
        sources.push(Source {
            label: "050",
            year: call_number_date(call_number),
        });
    }

    sources.push(Source {
        label: imprint_tag,
        year: imprint_year(imprint_text)
            .ok_or_else(|| extraction_failure(imprint_tag, "subfield _c", imprint_text)),
    });

    let failures: Vec<Diagnostic> = sources
        .iter()
        .filter_map(|s| s.year.as_ref().err().cloned())
        .collect();
    if !failures.is_empty() {
        return failures;
    }

    let years: Vec<(&str, &str)> = sources
        .iter()
        .filter_map(|s| s.year.as_ref().ok().map(|y| (s.label, y.as_str())))
        .collect();
    if years.iter().all(|(_, y)| *y == years[0].1) {
        return Vec::new();
    }
    let listing = years
        .iter()
        .map(|(label, year)| format!("{label} ({year})"))
        .collect::<Vec<_>>()
        .join(", ");
    vec![Diagnostic::new(
        "008",
        format!("Publication dates do not match: {listing}."),
    )]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LintConfig;
    use crate::rules::test_support::{field, leader, run, run_with};

    const BOOK: &str = "00000nam a2200000 a 4500";

    fn f008(date1: &str, conference: char) -> String {
        format!("860506s{date1}    nyu           {conference}00 1 eng d")
    }

    fn record(leader_str: &str, f008: &str, fields: Vec<Field>) -> Record {
        let mut record = Record::new(leader(leader_str));
        record.add_control_field_str("008", f008);
        for f in fields {
            record.add_field(f);
        }
        record
    }

    #[test]
    fn test_all_agree() {
        let r = record(
            BOOK,
            &f008("2004", '0'),
            vec![
                field("050", '0', '0', &[('a', "QA76.73.R87"), ('b', "B37 2004")]),
                field("260", ' ', ' ', &[('a', "New York :"), ('b', "Pub,"), ('c', "c2004.")]),
            ],
        );
        assert!(run(check_pub_dates, &r).is_empty());
    }

    #[test]
    fn test_mismatch_lists_all_sources() {
        let r = record(
            BOOK,
            &f008("2004", '0'),
            vec![
                field("050", '0', '0', &[('a', "QA76"), ('b', ".B37 2003")]),
                field("260", ' ', ' ', &[('c', "2004.")]),
            ],
        );
        assert_eq!(
            run(check_pub_dates, &r),
            vec!["008: Publication dates do not match: 008 (2004), 050 (2003), 260 (2004)."]
        );
    }

    #[test]
    fn test_corrected_imprint_year_wins() {
        let r = record(
            BOOK,
            &f008("1999", '0'),
            vec![
                field("050", '0', '0', &[('a', "PS3545"), ('b', ".I345 1999")]),
                field("264", ' ', '1', &[('c', "1899 [i.e. 1999]")]),
            ],
        );
        assert!(run(check_pub_dates, &r).is_empty());
    }

    #[test]
    fn test_conference_ignores_050() {
        let r = record(
            BOOK,
            &f008("2004", '1'),
            vec![
                field("050", '0', '0', &[('a', "QA76"), ('b', ".C66 2003")]),
                field("260", ' ', ' ', &[('c', "2004.")]),
            ],
        );
        assert!(run(check_pub_dates, &r).is_empty());

        let r = record(
            BOOK,
            &f008("2004", '0'),
            vec![
                field("111", '2', ' ', &[('a', "Symposium")]),
                field("260", ' ', ' ', &[('c', "2005.")]),
            ],
        );
        assert_eq!(
            run(check_pub_dates, &r),
            vec!["008: Publication dates do not match: 008 (2004), 260 (2005)."]
        );
    }

    #[test]
    fn test_extraction_failure_skips_comparison() {
        let r = record(
            BOOK,
            &f008("19uu", '0'),
            vec![
                field("050", '0', '0', &[('a', "QA76"), ('b', ".B37")]),
                field("260", ' ', ' ', &[('c', "2004.")]),
            ],
        );
        assert_eq!(
            run(check_pub_dates, &r),
            vec![
                "008: Unable to extract a year from Date 1 ('19uu').",
                "050: Unable to extract a year from subfield _b ('.B37').",
            ]
        );
    }

    #[test]
    fn test_missing_fields_make_rule_inapplicable() {
        let no_050 = record(
            BOOK,
            &f008("2004", '0'),
            vec![field("260", ' ', ' ', &[('c', "2003.")])],
        );
        assert!(run(check_pub_dates, &no_050).is_empty());
        let no_imprint = record(
            BOOK,
            &f008("2004", '0'),
            vec![field("050", '0', '0', &[('b', ".B37 2003")])],
        );
        assert!(run(check_pub_dates, &no_imprint).is_empty());
    }

    #[test]
    fn test_cip_exemption() {
        let fields = || {
            vec![
                field("050", '0', '0', &[('b', ".B37 2003")]),
                field("260", ' ', ' ', &[('c', "2004.")]),
            ]
        };
        let cip = record("00000nam a22000008a 4500", &f008("2004", '0'), fields());
        assert!(run(check_pub_dates, &cip).is_empty());
        let config = LintConfig::default().with_exempt_cip(false);
        assert_eq!(run_with(check_pub_dates, &cip, &config).len(), 1);
    }
}
