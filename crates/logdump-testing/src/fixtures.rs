use std::fmt;
use std::sync::OnceLock;

use logdump::{Describe, PropertyScan, PropertyValue, Shape};

/// Compact rendering of [`SampleRecord`], shared by the integration tests.
pub const SAMPLE_RECORD_COMPACT: &str = r#"{"f1":null,"f2":"hogehoge","f3":false,"f4":true,"f5":[1,3,5,7],"f6":["a","b","c","d"],"f7":["x","y","z"]}"#;

/// Composite exercising every discovery source: a null field, private
/// members exposed through accessors, plain fields, and containers. The
/// `f7` accessor hands over an owned invocation result.
pub struct SampleRecord {
    pub f1: Option<String>,
    f2: String,
    pub f3: bool,
    f4: bool,
    pub f5: Vec<i64>,
    pub f6: Vec<String>,
    f7: Vec<String>,
}

impl SampleRecord {
    pub fn new() -> Self {
        SampleRecord {
            f1: None,
            f2: "hogehoge".to_string(),
            f3: false,
            f4: true,
            f5: vec![1, 3, 5, 7],
            f6: ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect(),
            f7: ["x", "y", "z"].iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Default for SampleRecord {
    fn default() -> Self {
        Self::new()
    }
}

impl Describe for SampleRecord {
    fn describe(&self) -> Shape<'_> {
        let mut scan = PropertyScan::new();
        scan.field("f1", &self.f1)
            .getter("getF2", &self.f2)
            .field("f3", &self.f3)
            .getter("isF4", &self.f4)
            .field("f5", &self.f5)
            .field("f6", &self.f6)
            .getter("getF7", PropertyValue::owned(self.f7.clone()));
        Shape::Composite(scan)
    }
}

/// Enclosing composite holding the same record under two properties.
pub struct RecordPair {
    pub tc1: SampleRecord,
    pub tc2: SampleRecord,
}

impl RecordPair {
    pub fn new() -> Self {
        RecordPair {
            tc1: SampleRecord::new(),
            tc2: SampleRecord::new(),
        }
    }
}

impl Default for RecordPair {
    fn default() -> Self {
        Self::new()
    }
}

impl Describe for RecordPair {
    fn describe(&self) -> Shape<'_> {
        let mut scan = PropertyScan::new();
        scan.field("tc1", &self.tc1).field("tc2", &self.tc2);
        Shape::Composite(scan)
    }
}

/// Composite whose string conversion takes precedence over its properties,
/// whether registered before or after it.
pub struct TaggedId {
    pub label: String,
    pub numeric: u64,
}

impl fmt::Display for TaggedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.label, self.numeric)
    }
}

impl Describe for TaggedId {
    fn describe(&self) -> Shape<'_> {
        let mut scan = PropertyScan::new();
        scan.field("label", &self.label);
        scan.display(self);
        scan.field("numeric", &self.numeric);
        Shape::Composite(scan)
    }
}

/// Record whose cache slot may be unset; an unset slot is omitted from the
/// output instead of failing the dump.
pub struct CachedLookup {
    pub key: String,
    cache: OnceLock<String>,
}

impl CachedLookup {
    pub fn new(key: &str) -> Self {
        CachedLookup {
            key: key.to_string(),
            cache: OnceLock::new(),
        }
    }

    pub fn prime(&self, value: &str) {
        let _ = self.cache.set(value.to_string());
    }
}

impl Describe for CachedLookup {
    fn describe(&self) -> Shape<'_> {
        let mut scan = PropertyScan::new();
        scan.field("key", &self.key)
            .try_field("cache", self.cache.get());
        Shape::Composite(scan)
    }
}

/// Composite that registers nothing at all.
pub struct Opaque;

impl Describe for Opaque {
    fn describe(&self) -> Shape<'_> {
        Shape::Composite(PropertyScan::new())
    }
}
