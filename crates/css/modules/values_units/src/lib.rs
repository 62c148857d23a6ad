//! CSS Values and Units Module Level 3 — typed wrappers over computed-value strings.
//! Spec: <https://www.w3.org/TR/css-values-3/>
//!
//! Browsers report computed styles as plain strings (`"2.5em"`, `"rgb(1, 2, 3)"`).
//! The types in this crate classify those strings once at construction and
//! expose the typed result: [`Value`] for the raw text, [`Unit`] and
//! [`Dimension`] for numbers with units, and [`Function`] for functional notation.

#![forbid(unsafe_code)]

// Per-chapter modules mirroring the spec table of contents.
pub mod chapter_3_keywords;
pub mod chapter_4_numbers;
pub mod chapter_5_units;
pub mod chapter_6_dimensions;
pub mod chapter_8_functional_notations;

// Re-exports for ergonomic access from other crates.
pub use chapter_3_keywords::{CssWideKeyword, Value};
pub use chapter_4_numbers::{parse_mantissa, split_mantissa};
pub use chapter_5_units::{Unit, UnitFamily};
pub use chapter_6_dimensions::Dimension;
pub use chapter_8_functional_notations::Function;

use thiserror::Error;

/// Errors raised while wrapping or parsing a CSS value string.
///
/// Every variant carries the offending text so failures can be traced back to
/// the computed style that produced them.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValueError {
    /// The raw string was empty or only whitespace.
    #[error("CSS value is empty")]
    EmptyValue,
    /// The unit suffix is not part of the recognized unit set.
    #[error("unsupported unit `{unit}` in `{raw}`")]
    UnsupportedUnit { unit: String, raw: String },
    /// The text is not of the form `name(...)`.
    #[error("malformed functional notation `{raw}`: {reason}")]
    MalformedFunction { raw: String, reason: &'static str },
}
