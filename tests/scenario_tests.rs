//! End-to-end lint scenarios over whole records.

mod common;

use common::{
    clean_book_with, create_clean_book, create_clean_book_in_series, field, make_leader, messages,
    BOOK_008,
};
use mrrc_lint::{validate_all, validate_control_field_008, validate_leader, Linter};

#[test]
fn test_clean_book_has_no_diagnostics() {
    let record = create_clean_book();
    assert_eq!(messages(&validate_all(&record)), Vec::<String>::new());
}

#[test]
fn test_scenario_a_bad_008() {
    let mut record = create_clean_book();
    record.control_fields.insert(
        "008".to_string(),
        vec!["741452s20041   wisb          800 0 end p".to_string()],
    );

    let found = messages(&validate_control_field_008(&record));
    assert_eq!(
        found,
        vec![
            "008: Bytes 00-05, Date entered on file ('741452') is invalid.\tyear '74' is out of range.\tmonth '14' is out of range.\tday '52' is out of range.",
            "008: Bytes 11-14, Date 2 ('1   ') must be blank for date type 's'.",
            "008: Bytes 15-17, Country of publication ('wis') is invalid.",
            "008: Bytes 35-37, Language ('end') is invalid.",
            "008: Byte 39, Cataloging source ('p') is invalid.",
            "008: Byte 29, Conference publication ('8') is invalid for Books.",
        ]
    );

    // The 008 diagnostics come first in the full run, right after the leader.
    let all = messages(&validate_all(&record));
    assert_eq!(&all[..6], &found[..]);
}

#[test]
fn test_scenario_b_untraced_series() {
    let series = field("490", '1', ' ', &[('a', "Occasional papers")]);
    let record = create_clean_book_in_series(series);
    assert_eq!(
        messages(&validate_all(&record)),
        vec!["490: Indicator is 1 but 8xx does not exist."]
    );

    let mut traced = record.clone();
    traced.add_field(field("830", ' ', '0', &[('a', "Occasional papers.")]));
    assert!(validate_all(&traced).is_empty());
}

#[test]
fn test_scenario_b_reported_once_for_repeated_490() {
    let mut record =
        create_clean_book_in_series(field("490", '1', ' ', &[('a', "First series")]));
    record.add_field(field("490", '1', ' ', &[('a', "Second series")]));
    let found = messages(&validate_all(&record));
    assert_eq!(found, vec!["490: Indicator is 1 but 8xx does not exist."]);
}

#[test]
fn test_scenario_c_dimensions_only() {
    let record = clean_book_with(
        "300",
        field("300", ' ', ' ', &[('a', "24 p."), ('c', "28 x 20")]),
    );
    assert_eq!(
        messages(&validate_all(&record)),
        vec!["300: Dimensions (subfield _c) lack 'cm.', 'mm.', or 'in.'."]
    );
}

#[test]
fn test_physical_description_period_needs_series() {
    let record = clean_book_with(
        "300",
        field("300", ' ', ' ', &[('a', "xii, 240 p. ;"), ('c', "28 cm.")]),
    );
    assert_eq!(
        messages(&validate_all(&record)),
        vec!["300: Should not end with a period when no 4xx is present ('xii, 240 p. ; 28 cm.')."]
    );
}

#[test]
fn test_scenario_d_abbreviation_ending() {
    let mut record = create_clean_book();
    record.add_field(field("246", '3', '0', &[('a', "Cats of Acme Inc.")]));
    record.add_field(field("730", '0', ' ', &[('a', "Annual report of Acme Inc.")]));
    assert!(validate_all(&record).is_empty());

    let mut flagged = create_clean_book();
    flagged.add_field(field("246", '3', '0', &[('a', "Cat history.")]));
    assert_eq!(
        messages(&validate_all(&flagged)),
        vec!["246: Should not end with a period ('Cat history.')."]
    );
}

#[test]
fn test_leader_positions_reported_independently() {
    let mut record = create_clean_book();
    record.leader = make_leader("00000xzz a22000009z 4500");
    let found = messages(&validate_leader(&record));
    assert_eq!(
        found,
        vec![
            "LDR: Byte 05, Record status ('x') is invalid.",
            "LDR: Byte 06, Type of record ('z') is invalid.",
            "LDR: Byte 07, Bibliographic level ('z') is invalid.",
            "LDR: Byte 17, Encoding level ('9') is invalid.",
            "LDR: Byte 18, Descriptive cataloging form ('z') is invalid.",
        ]
    );
}

#[test]
fn test_short_008_stops_field_checks() {
    let mut record = create_clean_book();
    record
        .control_fields
        .insert("008".to_string(), vec![BOOK_008[..39].to_string()]);
    assert_eq!(
        messages(&validate_control_field_008(&record)),
        vec!["008: Length is 39 characters, not 40."]
    );
}

#[test]
fn test_publication_date_mismatch() {
    let record = clean_book_with(
        "050",
        field("050", '0', '0', &[('a', "SF442"), ('b', ".S65 1985")]),
    );
    assert_eq!(
        messages(&validate_all(&record)),
        vec!["008: Publication dates do not match: 008 (1986), 050 (1985), 260 (1986)."]
    );
}

#[test]
fn test_cip_record_skips_description_rules() {
    let mut record = clean_book_with(
        "300",
        field("300", ' ', ' ', &[('a', "1 thing"), ('c', "big")]),
    );
    record.leader.encoding_level = '8';
    assert!(validate_all(&record).is_empty());

    let strict = Linter::new().with_config(mrrc_lint::LintConfig::default().with_exempt_cip(false));
    let found = messages(&strict.check(&record));
    assert_eq!(
        found,
        vec![
            "300: Extent (subfield _a) lacks a pagination or extent term ('1 thing').",
            "300: Dimensions (subfield _c) lack 'cm.', 'mm.', or 'in.'.",
        ]
    );
}

#[test]
fn test_language_note_against_008() {
    let mut record = create_clean_book();
    record.add_field(field("041", '1', ' ', &[('a', "fre"), ('h', "eng")]));
    assert_eq!(
        messages(&validate_all(&record)),
        vec!["041: First code (fre) does not match 008 bytes 35-37 (Language eng)."]
    );
}

#[test]
fn test_geographic_subject_needs_043() {
    let mut record = create_clean_book();
    record.add_field(field("651", ' ', '0', &[('a', "France"), ('x', "History.")]));
    assert_eq!(
        messages(&validate_all(&record)),
        vec!["043: Record has 651 or 6xx subfield _z but no 043."]
    );

    record.add_field(field("043", ' ', ' ', &[('a', "e-fr---")]));
    assert!(validate_all(&record).is_empty());
}
