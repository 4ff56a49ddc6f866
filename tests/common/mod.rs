//! Common test helpers and utilities shared across test suite.

use marc_indexer::{Field, Record};

/// Creates a field from a tag, indicators and `(code, value)` pairs.
pub fn create_test_field(tag: &str, ind1: char, ind2: char, subfields: &[(char, &str)]) -> Field {
    let mut field = Field::new(tag.to_string(), ind1, ind2);
    for &(code, value) in subfields {
        field.add_subfield_str(code, value);
    }
    field
}

/// Creates a realistic exported record for a video recording.
///
/// Includes a record number (907), bibliographic locations and status
/// (998), item locations (945), a publication statement (260), links
/// (856), participant notes (511) and name fields (100/700).
#[allow(dead_code)]
pub fn create_realistic_record() -> Record {
    let mut record = Record::new();
    record.add_control_field_str("001", "ocm12345678");

    record.add_field(create_test_field(
        "100",
        '1',
        ' ',
        &[('a', "Smith, Anna"), ('e', "director")],
    ));
    record.add_field(create_test_field(
        "245",
        '1',
        '0',
        &[('a', "The harbour"), ('h', "[videorecording]")],
    ));
    record.add_field(create_test_field(
        "260",
        ' ',
        ' ',
        &[('a', "London :"), ('b', "Film House,"), ('c', "c1984.")],
    ));
    record.add_field(create_test_field(
        "511",
        '1',
        ' ',
        &[('a', "Meryl Streep, Jeremy Irons")],
    ));
    record.add_field(create_test_field(
        "511",
        '0',
        ' ',
        &[('a', "London Symphony Orchestra")],
    ));
    record.add_field(create_test_field(
        "700",
        '1',
        ' ',
        &[('a', "Smith, Anna"), ('e', "producer")],
    ));
    record.add_field(create_test_field(
        "856",
        '4',
        '0',
        &[('u', "http://example.org/harbour"), ('z', "Stream this film")],
    ));
    record.add_field(create_test_field(
        "856",
        '4',
        '2',
        &[('u', "http://example.org/trailer")],
    ));
    record.add_field(create_test_field(
        "907",
        ' ',
        ' ',
        &[('a', ".b1008228.1"), ('b', "12-03-15")],
    ));
    record.add_field(create_test_field(
        "945",
        ' ',
        ' ',
        &[('a', "39000000001"), ('l', "avlib ")],
    ));
    record.add_field(create_test_field(
        "945",
        ' ',
        ' ',
        &[('a', "39000000002"), ('l', "main")],
    ));
    record.add_field(create_test_field(
        "998",
        ' ',
        ' ',
        &[('a', "main"), ('a', "arts "), ('f', " - ")],
    ));

    record
}
