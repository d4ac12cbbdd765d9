//! Fixture values for exercising the dumper end to end.
//!
//! Provides:
//! - Composite records covering every property discovery source
//! - Nested and display-override fixtures for the formatter edge cases
//! - The expected compact block shared across integration tests

pub mod fixtures;

pub use fixtures::*;
