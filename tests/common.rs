#![cfg(feature = "std")]

use aileron::format::{FieldIndex, FormatDescriptor, descriptor::lengths_for};
use csv::ReaderBuilder;

const PATH: &str = "fixtures/fields.csv";

#[test]
fn decode_fixture_fields() {
    let mut reader = ReaderBuilder::new().from_path(PATH).unwrap();

    let mut checked = 0;

    for row in reader.records() {
        let row = row.unwrap();
        let (name, codes, labels) = (&row[0], &row[1], &row[2]);
        let (record, label, expected) = (&row[3], &row[4], &row[5]);

        let lengths = lengths_for(codes);
        let descriptor = FormatDescriptor::new(name, codes, &lengths, labels);
        let index = FieldIndex::new(&descriptor).unwrap();

        let record = decode_hex(record);
        assert_eq!(record.len(), index.record_len(), "{name}");

        let value = index.value(&record, label).unwrap().unwrap();
        assert_eq!(value.to_string(), expected, "{name}.{label}");

        checked += 1;
    }

    assert_eq!(checked, 34);
}

#[test]
fn fixture_labels_round_trip() {
    let mut reader = ReaderBuilder::new().from_path(PATH).unwrap();

    for row in reader.records() {
        let row = row.unwrap();
        let (name, codes, labels) = (&row[0], &row[1], &row[2]);

        let lengths = lengths_for(codes);
        let index = FieldIndex::new(&FormatDescriptor::new(name, codes, &lengths, labels)).unwrap();

        assert_eq!(index.to_string(), labels);
        assert_eq!(index.labels().collect::<Vec<_>>().join(","), labels);
    }
}

fn decode_hex(s: &str) -> Vec<u8> {
    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16).unwrap())
        .collect()
}
