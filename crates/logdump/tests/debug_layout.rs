use std::collections::BTreeMap;

use logdump::{dump_debug, dump_indented};
use logdump_testing::{RecordPair, SampleRecord};

#[test]
fn test_debug_record_layout() {
    let expected = [
        "{",
        "\t\"f1\": null,",
        "\t\"f2\": \"hogehoge\",",
        "\t\"f3\": false,",
        "\t\"f4\": true,",
        "\t\"f5\": [",
        "\t\t1,",
        "\t\t3,",
        "\t\t5,",
        "\t\t7",
        "\t],",
        "\t\"f6\": [",
        "\t\t\"a\",",
        "\t\t\"b\",",
        "\t\t\"c\",",
        "\t\t\"d\"",
        "\t],",
        "\t\"f7\": [",
        "\t\t\"x\",",
        "\t\t\"y\",",
        "\t\t\"z\"",
        "\t]",
        "}",
    ]
    .join("\n");
    assert_eq!(dump_debug(&SampleRecord::new()), expected);
}

#[test]
fn test_debug_nested_record_layout() {
    let expected = [
        "{",
        "\t\"tc1\": {",
        "\t\t\"f1\": null,",
        "\t\t\"f2\": \"hogehoge\",",
        "\t\t\"f3\": false,",
        "\t\t\"f4\": true,",
        "\t\t\"f5\": [",
        "\t\t\t1,",
        "\t\t\t3,",
        "\t\t\t5,",
        "\t\t\t7",
        "\t\t],",
        "\t\t\"f6\": [",
        "\t\t\t\"a\",",
        "\t\t\t\"b\",",
        "\t\t\t\"c\",",
        "\t\t\t\"d\"",
        "\t\t],",
        "\t\t\"f7\": [",
        "\t\t\t\"x\",",
        "\t\t\t\"y\",",
        "\t\t\t\"z\"",
        "\t\t]",
        "\t},",
        "\t\"tc2\": {",
        "\t\t\"f1\": null,",
        "\t\t\"f2\": \"hogehoge\",",
        "\t\t\"f3\": false,",
        "\t\t\"f4\": true,",
        "\t\t\"f5\": [",
        "\t\t\t1,",
        "\t\t\t3,",
        "\t\t\t5,",
        "\t\t\t7",
        "\t\t],",
        "\t\t\"f6\": [",
        "\t\t\t\"a\",",
        "\t\t\t\"b\",",
        "\t\t\t\"c\",",
        "\t\t\t\"d\"",
        "\t\t],",
        "\t\t\"f7\": [",
        "\t\t\t\"x\",",
        "\t\t\t\"y\",",
        "\t\t\t\"z\"",
        "\t\t]",
        "\t}",
        "}",
    ]
    .join("\n");
    assert_eq!(dump_debug(&RecordPair::new()), expected);
}

#[test]
fn test_debug_map_layout() {
    let mut map = BTreeMap::new();
    map.insert("a", 1);
    let expected = [
        "[",
        "\t{",
        "\t\t\"key\": \"a\",",
        "\t\t\"value\": 1",
        "\t}",
        "]",
    ]
    .join("\n");
    assert_eq!(dump_debug(&map), expected);
}

#[test]
fn test_custom_indent_unit() {
    let value = vec![vec!["x"]];
    let expected = [
        "[",
        "    [",
        "        \"x\"",
        "    ]",
        "]",
    ]
    .join("\n");
    assert_eq!(dump_indented(&value, "    "), expected);
}
