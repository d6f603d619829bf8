//! Validation of control field 008.
//!
//! The universal positions (00-17, 35-39) are checked first, each on its own.
//! Bytes 18-34 are then checked against the [`FixedFieldSchema`] ranges of the
//! record's material type. Only a wrong length stops the validator early.
//!
//! [`FixedFieldSchema`]: crate::fixed_field::FixedFieldSchema

use crate::code_tables::Classification;
use crate::config::LintConfig;
use crate::diagnostic::Diagnostic;
use crate::fixed_field::{Field008, MaterialType, FIELD_008_LENGTH};
use crate::linter::RuleContext;
use crate::record::Record;

const TAG: &str = "008";

const DATE_TYPES: &str = "bcdeikmnpqrstu|";
const MODIFIED_RECORD: &str = " dorsx|";
const CATALOGING_SOURCE: &str = " cdu|";

/// Check the record's 008.
///
/// A record without an 008 produces no diagnostics.
#[must_use]
pub fn check_008(record: &Record, ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
    let Some(value) = record.get_control_field(TAG) else {
        return Vec::new();
    };
    let Some(field) = Field008::parse(value) else {
        return vec![Diagnostic::new(
            TAG,
            format!(
                "Length is {} characters, not {FIELD_008_LENGTH}.",
                value.chars().count()
            ),
        )];
    };

    let mut diagnostics = Vec::new();
    diagnostics.extend(check_date_entered(&field.date_entered(), ctx.config));
    diagnostics.extend(check_date_type(field.date_type()));
    diagnostics.extend(check_date1(&field));
    diagnostics.extend(check_date2(&field));
    diagnostics.extend(check_country(&field, ctx));
    diagnostics.extend(check_language(&field, ctx));
    diagnostics.extend(check_single_byte(
        38,
        "Modified record",
        field.modified_record(),
        MODIFIED_RECORD,
    ));
    diagnostics.extend(check_single_byte(
        39,
        "Cataloging source",
        field.cataloging_source(),
        CATALOGING_SOURCE,
    ));

    if let Some(material) = MaterialType::classify(&record.leader) {
        diagnostics.extend(check_material_bytes(&field, material, ctx));
    }
    diagnostics
}

/// Check bytes 00-05 (yymmdd). All problems go into one diagnostic.
fn check_date_entered(date: &str, config: &LintConfig) -> Option<Diagnostic> {
    let head = format!("Bytes 00-05, Date entered on file ('{date}')");
    if date.len() != 6 || !date.bytes().all(|b| b.is_ascii_digit()) {
        return Some(Diagnostic::new(TAG, format!("{head} is not 6 digits.")));
    }

    let number = |range: std::ops::Range<usize>| date[range].parse::<u8>().unwrap_or_default();
    let (year, month, day) = (number(0..2), number(2..4), number(4..6));

    let mut problems = Vec::new();
    if year > config.date_entered_recent_max && year < config.date_entered_legacy_min {
        problems.push(format!("year '{year:02}' is out of range."));
    }
    if !(1..=12).contains(&month) {
        problems.push(format!("month '{month:02}' is out of range."));
    }
    if day == 0 || day > days_in_month(month) {
        problems.push(format!("day '{day:02}' is out of range."));
    }

    if problems.is_empty() {
        return None;
    }
    let mut parts = Vec::with_capacity(problems.len() + 1);
    parts.push(format!("{head} is invalid."));
    parts.extend(problems);
    Some(Diagnostic::with_parts(Some(TAG.to_string()), parts))
}

/// February is capped at 29; no leap-year rule applies.
fn days_in_month(month: u8) -> u8 {
    match month {
        2 => 29,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

fn check_date_type(date_type: char) -> Option<Diagnostic> {
    check_single_byte(6, "Type of date/publication status", date_type, DATE_TYPES)
}

fn is_coded_year(value: &str) -> bool {
    value == "||||"
        || (value.len() == 4 && value.chars().all(|c| c.is_ascii_digit() || c == 'u'))
}

fn check_date1(field: &Field008) -> Option<Diagnostic> {
    let date1 = field.date1();
    let blank_allowed = field.date_type() == 'b' && date1 == "    ";
    if blank_allowed || is_coded_year(&date1) {
        return None;
    }
    Some(Diagnostic::new(
        TAG,
        format!("Bytes 07-10, Date 1 ('{date1}') is invalid."),
    ))
}

fn check_date2(field: &Field008) -> Option<Diagnostic> {
    let date2 = field.date2();
    let date_type = field.date_type();
    if matches!(date_type, 's' | 'b') {
        if date2 == "    " {
            return None;
        }
        return Some(Diagnostic::new(
            TAG,
            format!("Bytes 11-14, Date 2 ('{date2}') must be blank for date type '{date_type}'."),
        ));
    }
    if is_coded_year(&date2) {
        return None;
    }
    Some(Diagnostic::new(
        TAG,
        format!("Bytes 11-14, Date 2 ('{date2}') is invalid."),
    ))
}

fn classification_diagnostic(
    position: &str,
    label: &str,
    code: &str,
    classification: Classification,
) -> Option<Diagnostic> {
    let verdict = match classification {
        Classification::Valid => return None,
        Classification::Obsolete => "may be obsolete",
        Classification::Unknown => "is invalid",
    };
    Some(Diagnostic::new(
        TAG,
        format!("{position}, {label} ('{code}') {verdict}."),
    ))
}

fn check_country(field: &Field008, ctx: &RuleContext<'_>) -> Option<Diagnostic> {
    let country = field.country();
    classification_diagnostic(
        "Bytes 15-17",
        "Country of publication",
        &country,
        ctx.code_tables.classify_country(&country),
    )
}

fn check_language(field: &Field008, ctx: &RuleContext<'_>) -> Option<Diagnostic> {
    let language = field.language();
    classification_diagnostic(
        "Bytes 35-37",
        "Language",
        &language,
        ctx.code_tables.classify_language(&language),
    )
}

fn check_single_byte(
    position: usize,
    label: &str,
    value: char,
    allowed: &str,
) -> Option<Diagnostic> {
    if allowed.contains(value) {
        return None;
    }
    Some(Diagnostic::new(
        TAG,
        format!("Byte {position:02}, {label} ('{value}') is invalid."),
    ))
}

fn check_material_bytes(
    field: &Field008,
    material: MaterialType,
    ctx: &RuleContext<'_>,
) -> Vec<Diagnostic> {
    ctx.schema
        .ranges(material)
        .iter()
        .filter_map(|range| {
            let value = field.range(range);
            if range.accepts(&value) {
                return None;
            }
            Some(Diagnostic::new(
                TAG,
                format!(
                    "{}, {} ('{value}') is invalid for {material}.",
                    range.position_label(),
                    range.label
                ),
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code_tables::CodeTables;
    use crate::fixed_field::FixedFieldSchema;
    use crate::leader::Leader;

    fn run(leader: &str, value: &str) -> Vec<String> {
        let tables = CodeTables::bundled();
        let schema = FixedFieldSchema::bundled();
        let config = LintConfig::default();
        let ctx = RuleContext::new(&tables, &schema, &config);
        let record = Record::builder(leader.parse::<Leader>().unwrap())
            .control_field_str("008", value)
            .build();
        check_008(&record, &ctx)
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    const BOOK: &str = "00000nam a2200000 a 4500";

    #[test]
    fn test_clean_008() {
        assert!(run(BOOK, "860506s1986    nyu           000 1 eng d").is_empty());
    }

    #[test]
    fn test_missing_008_is_silent() {
        let tables = CodeTables::bundled();
        let schema = FixedFieldSchema::bundled();
        let config = LintConfig::default();
        let ctx = RuleContext::new(&tables, &schema, &config);
        assert!(check_008(&Record::new(Leader::default()), &ctx).is_empty());
    }

    #[test]
    fn test_wrong_length_stops() {
        assert_eq!(
            run(BOOK, "741452s2004"),
            vec!["008: Length is 11 characters, not 40."]
        );
    }

    #[test]
    fn test_date_entered_parts() {
        let diags = run(BOOK, "741452s1986    nyu           000 1 eng d");
        assert_eq!(
            diags,
            vec![
                "008: Bytes 00-05, Date entered on file ('741452') is invalid.\t\
                 year '74' is out of range.\tmonth '14' is out of range.\t\
                 day '52' is out of range."
            ]
        );
    }

    #[test]
    fn test_date_entered_february_capped_at_29() {
        assert!(run(BOOK, "030229s1986    nyu           000 1 eng d").is_empty());
        let diags = run(BOOK, "030230s1986    nyu           000 1 eng d");
        assert_eq!(diags.len(), 1);
        assert!(diags[0].ends_with("day '30' is out of range."));
    }

    #[test]
    fn test_date_entered_not_digits() {
        let diags = run(BOOK, "86o506s1986    nyu           000 1 eng d");
        assert_eq!(
            diags,
            vec!["008: Bytes 00-05, Date entered on file ('86o506') is not 6 digits."]
        );
    }

    #[test]
    fn test_date2_must_be_blank_for_single_date() {
        let diags = run(BOOK, "860506s19861   nyu           000 1 eng d");
        assert_eq!(
            diags,
            vec!["008: Bytes 11-14, Date 2 ('1   ') must be blank for date type 's'."]
        );
    }

    #[test]
    fn test_date_range_types() {
        assert!(run(BOOK, "860506m19861990nyu           000 1 eng d").is_empty());
        assert!(run(BOOK, "860506q19uu19uunyu           000 1 eng d").is_empty());
        let diags = run(BOOK, "860506m19861x90nyu           000 1 eng d");
        assert_eq!(diags, vec!["008: Bytes 11-14, Date 2 ('1x90') is invalid."]);
    }

    #[test]
    fn test_date1_blank_only_for_type_b() {
        assert!(run(BOOK, "860506b        nyu           000 1 eng d").is_empty());
        let diags = run(BOOK, "860506s        nyu           000 1 eng d");
        assert_eq!(diags, vec!["008: Bytes 07-10, Date 1 ('    ') is invalid."]);
    }

    #[test]
    fn test_obsolete_country_is_soft() {
        let diags = run(BOOK, "860506s1986    us            000 1 eng d");
        assert_eq!(
            diags,
            vec!["008: Bytes 15-17, Country of publication ('us ') may be obsolete."]
        );
    }

    #[test]
    fn test_bad_date_type_and_modified_record() {
        let diags = run(BOOK, "860506x1986    nyu           000 1 engzd");
        assert_eq!(
            diags,
            vec![
                "008: Byte 06, Type of date/publication status ('x') is invalid.",
                "008: Bytes 11-14, Date 2 ('    ') is invalid.",
                "008: Byte 38, Modified record ('z') is invalid.",
            ]
        );
    }

    #[test]
    fn test_material_specific_bytes() {
        let diags = run(BOOK, "860506s1986    nyu           800 1 eng d");
        assert_eq!(
            diags,
            vec!["008: Byte 29, Conference publication ('8') is invalid for Books."]
        );
        // Same bytes are a form of item for maps, where '8' is also invalid.
        let diags = run("00000nem a2200000 a 4500", "860506s1986    nyu           800 1 eng d");
        assert!(diags
            .iter()
            .any(|d| d.contains("Form of item ('8') is invalid for Maps.")));
    }

    #[test]
    fn test_unknown_record_type_skips_material_bytes() {
        let diags = run("00000nzm a2200000 a 4500", "860506s1986    nyuxxxxxxxxxxxxxxxxxeng d");
        assert!(diags.is_empty());
    }

    #[test]
    fn test_scenario_a() {
        let diags = run(BOOK, "741452s20041   wisb          800 0 end p");
        assert_eq!(diags.len(), 6);
        assert!(diags[0].starts_with("008: Bytes 00-05, Date entered on file"));
        assert_eq!(diags[1], "008: Bytes 11-14, Date 2 ('1   ') must be blank for date type 's'.");
        assert_eq!(diags[2], "008: Bytes 15-17, Country of publication ('wis') is invalid.");
        assert_eq!(diags[3], "008: Bytes 35-37, Language ('end') is invalid.");
        assert_eq!(diags[4], "008: Byte 39, Cataloging source ('p') is invalid.");
        assert_eq!(diags[5], "008: Byte 29, Conference publication ('8') is invalid for Books.");
    }
}
