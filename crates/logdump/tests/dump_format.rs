use std::collections::BTreeMap;

use logdump::{dump, dump_debug, Describe, PropertyScan, Shape};
use logdump_testing::{
    CachedLookup, Opaque, RecordPair, SampleRecord, TaggedId, SAMPLE_RECORD_COMPACT,
};

#[test]
fn test_dump_record() {
    assert_eq!(dump(&SampleRecord::new()), SAMPLE_RECORD_COMPACT);
}

#[test]
fn test_dump_nested_record() {
    let expected = format!(r#"{{"tc1":{0},"tc2":{0}}}"#, SAMPLE_RECORD_COMPACT);
    assert_eq!(dump(&RecordPair::new()), expected);
}

#[test]
fn test_dump_array_of_records() {
    let records = [SampleRecord::new(), SampleRecord::new()];
    let expected = format!("[{0},{0}]", SAMPLE_RECORD_COMPACT);
    assert_eq!(dump(&records), expected);
}

#[test]
fn test_dump_list_of_records() {
    let records = vec![SampleRecord::new(), SampleRecord::new()];
    let expected = format!("[{0},{0}]", SAMPLE_RECORD_COMPACT);
    assert_eq!(dump(&records), expected);
}

#[test]
fn test_dump_map_of_records() {
    let mut map = BTreeMap::new();
    map.insert("a".to_string(), SampleRecord::new());
    map.insert("b".to_string(), SampleRecord::new());
    let expected = format!(
        r#"[{{"key":"a","value":{0}}},{{"key":"b","value":{0}}}]"#,
        SAMPLE_RECORD_COMPACT
    );
    assert_eq!(dump(&map), expected);
}

#[test]
fn test_compact_and_debug_structurally_equal() {
    let value = RecordPair::new();
    let compact: serde_json::Value =
        serde_json::from_str(&dump(&value)).expect("compact output parses");
    let debug: serde_json::Value =
        serde_json::from_str(&dump_debug(&value)).expect("debug output parses");
    assert_eq!(compact, debug);
}

#[test]
fn test_rendered_string_redumps_as_quoted_scalar() {
    let rendered = r#"{"f1":null}"#;
    assert_eq!(dump(&rendered), r#""{\"f1\":null}""#);
}

#[test]
fn test_display_override_abandons_properties() {
    let id = TaggedId {
        label: "session".to_string(),
        numeric: 42,
    };
    assert_eq!(dump(&id), r#""session#42""#);
}

#[test]
fn test_unreadable_member_is_omitted() {
    let lookup = CachedLookup::new("profile");
    assert_eq!(dump(&lookup), r#"{"key":"profile"}"#);

    lookup.prime("cached body");
    assert_eq!(dump(&lookup), r#"{"cache":"cached body","key":"profile"}"#);
}

#[test]
fn test_empty_composite() {
    assert_eq!(dump(&Opaque), "{}");
    assert_eq!(dump_debug(&Opaque), "{}");
}

struct Unordered {
    zebra: i64,
    apple: i64,
    mango: i64,
    upper: i64,
}

impl Describe for Unordered {
    fn describe(&self) -> Shape<'_> {
        let mut scan = PropertyScan::new();
        scan.field("zebra", &self.zebra)
            .field("apple", &self.apple)
            .getter("getMango", &self.mango)
            .field("Zulu", &self.upper);
        Shape::Composite(scan)
    }
}

#[test]
fn test_members_sorted_by_canonical_name() {
    let value = Unordered {
        zebra: 1,
        apple: 2,
        mango: 3,
        upper: 4,
    };
    // Case-sensitive ascending order: uppercase sorts before lowercase.
    assert_eq!(
        dump(&value),
        r#"{"Zulu":4,"apple":2,"mango":3,"zebra":1}"#
    );
}

#[test]
fn test_heterogeneous_json_payload() {
    let payload = serde_json::json!(["text", 7, null, true, {"inner": [1.5]}]);
    assert_eq!(
        dump(&payload),
        r#"["text",7,null,true,[{"key":"inner","value":[1.5]}]]"#
    );
}

#[test]
fn test_determinism_across_calls() {
    let value = RecordPair::new();
    assert_eq!(dump(&value), dump(&value));
    assert_eq!(dump_debug(&value), dump_debug(&value));
}
