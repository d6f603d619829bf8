//! Common test helpers and utilities shared across test suite.

use mrrc_lint::{Field, Leader, Record};

/// A clean book 008: single date 1986, New York, English.
pub const BOOK_008: &str = "860506s1986    nyu           000 1 eng d";

/// Creates a default leader for test records.
///
/// New, full-level AACR 2 monograph (`00000nam a2200000 a 4500`).
pub fn create_test_leader() -> Leader {
    Leader {
        record_length: 0,
        record_status: 'n',
        record_type: 'a',
        bibliographic_level: 'm',
        control_record_type: ' ',
        character_coding: 'a',
        indicator_count: 2,
        subfield_code_count: 2,
        data_base_address: 0,
        encoding_level: ' ',
        cataloging_form: 'a',
        multipart_level: ' ',
        reserved: "4500".to_string(),
    }
}

/// Parses a 24-character leader string.
#[allow(dead_code)]
pub fn make_leader(value: &str) -> Leader {
    value.parse().expect("test leader parses")
}

/// Builds a data field from `(code, value)` pairs.
pub fn field(tag: &str, ind1: char, ind2: char, subfields: &[(char, &str)]) -> Field {
    let mut field = Field::new(tag.to_string(), ind1, ind2);
    for (code, value) in subfields {
        field.add_subfield_str(*code, value);
    }
    field
}

/// Creates a book record that passes every default rule.
///
/// Includes 001, 008, 010, 040, 050, 100, 245, 260, 300 and a topical 650.
/// Tests add or replace fields to provoke one rule at a time.
pub fn create_clean_book() -> Record {
    Record::builder(create_test_leader())
        .control_field_str("001", "86012345")
        .control_field_str("008", BOOK_008)
        .field(field("010", ' ', ' ', &[('a', "   86012345 ")]))
        .field(field("040", ' ', ' ', &[('a', "DLC"), ('c', "DLC")]))
        .field(field("050", '0', '0', &[('a', "SF442"), ('b', ".S65 1986")]))
        .field(field("100", '1', ' ', &[('a', "Smith, John.")]))
        .field(field(
            "245",
            '1',
            '2',
            &[('a', "A history of cats /"), ('c', "John Smith.")],
        ))
        .field(field(
            "260",
            ' ',
            ' ',
            &[('a', "New York :"), ('b', "Knopf,"), ('c', "1986.")],
        ))
        .field(field(
            "300",
            ' ',
            ' ',
            &[('a', "xii, 240 p. ;"), ('c', "24 cm")],
        ))
        .field(field("650", ' ', '0', &[('a', "Cats.")]))
        .build()
}

/// Clean book record with the fields of `tag` replaced by `replacement`.
#[allow(dead_code)]
pub fn clean_book_with(tag: &str, replacement: Field) -> Record {
    let mut record = create_clean_book();
    match record.fields.iter().position(|f| f.tag == tag) {
        Some(index) => {
            record.fields.retain(|f| f.tag != tag);
            record.fields.insert(index, replacement);
        },
        None => record.add_field(replacement),
    }
    record
}

/// Clean book record with a series statement added.
///
/// The 300 closes with a period, as it must when a 4xx follows.
#[allow(dead_code)]
pub fn create_clean_book_in_series(series: Field) -> Record {
    let mut record = clean_book_with(
        "300",
        field("300", ' ', ' ', &[('a', "xii, 240 p. ;"), ('c', "24 cm.")]),
    );
    record.add_field(series);
    record
}

/// Renders diagnostics the way reports print them.
#[allow(dead_code)]
pub fn messages(diagnostics: &[mrrc_lint::Diagnostic]) -> Vec<String> {
    diagnostics.iter().map(ToString::to_string).collect()
}
