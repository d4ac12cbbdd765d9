//! Deterministic JSON-like rendering of arbitrary values for diagnostics.
//!
//! # Overview
//!
//! `logdump` turns any in-memory value into a JSON-like string suitable for
//! log lines, without requiring the value's type to declare a serialization
//! contract. A type opts in through the [`Describe`] capability, which
//! classifies the value at call time: scalars render directly, containers
//! flatten in iteration order, maps become sequences of
//! `{"key":...,"value":...}` pair objects, and composites register their
//! members on a [`PropertyScan`] that enforces the discovery rules
//! (accessor-over-field priority, ascending name order, string-conversion
//! early exit).
//!
//! The dump operation is total: it never fails, holds no state between
//! calls, and produces byte-identical output for identical input and mode.
//! Members that cannot be read are silently omitted rather than surfaced.
//! Cyclic value graphs are out of scope and will recurse without bound.
//!
//! # Quickstart
//!
//! ```
//! use logdump::{dump, dump_debug, Describe, PropertyScan, Shape};
//!
//! struct Endpoint {
//!     host: String,
//!     port: u16,
//!     note: Option<String>,
//! }
//!
//! impl Describe for Endpoint {
//!     fn describe(&self) -> Shape<'_> {
//!         let mut scan = PropertyScan::new();
//!         scan.field("host", &self.host)
//!             .field("port", &self.port)
//!             .field("note", &self.note);
//!         Shape::Composite(scan)
//!     }
//! }
//!
//! let endpoint = Endpoint {
//!     host: "localhost".into(),
//!     port: 8080,
//!     note: None,
//! };
//! assert_eq!(
//!     dump(&endpoint),
//!     r#"{"host":"localhost","note":null,"port":8080}"#
//! );
//! assert_eq!(
//!     dump_debug(&endpoint),
//!     "{\n\t\"host\": \"localhost\",\n\t\"note\": null,\n\t\"port\": 8080\n}"
//! );
//! ```
//!
//! Containers, maps, smart pointers, `serde_json::Value`, timestamps, UUIDs,
//! and paths work out of the box:
//!
//! ```
//! use std::collections::BTreeMap;
//!
//! let mut routes = BTreeMap::new();
//! routes.insert("health", vec!["GET"]);
//! assert_eq!(
//!     logdump::dump(&routes),
//!     r#"[{"key":"health","value":["GET"]}]"#
//! );
//! ```

pub mod describe;
pub mod render;
pub mod scan;
pub mod shape;

pub use describe::Describe;
pub use render::{dump, dump_debug, dump_indented};
pub use scan::{canonical_getter_name, PropertyScan, PropertyValue};
pub use shape::{Scalar, Shape};
