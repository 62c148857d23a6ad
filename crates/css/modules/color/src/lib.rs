//! CSS Color Module Level 3 — Color values as reported by computed styles.
//! Spec: <https://www.w3.org/TR/css-color-3/>
//!
//! [`Color::new`] classifies a raw color string (keyword, `#hex`, `rgb()`,
//! `rgba()`, `hsl()`, `hsla()`, `currentColor`, `transparent`) and converts it
//! to 8-bit RGBA channels.

#![forbid(unsafe_code)]

mod color;
mod hex;
mod hsl;
pub mod named;
mod notation;
mod rgb;

pub use color::{Color, ColorFormat, Rgba8Tuple};
pub use named::named_color;
pub use notation::ColorNotation;

use css_values_units::{Unit, ValueError};
use thiserror::Error;

/// Errors raised while classifying or converting a color string.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The string (or one of its function arguments) is not a valid value.
    #[error(transparent)]
    Value(#[from] ValueError),
    /// Functional notation other than `rgb`, `rgba`, `hsl` or `hsla`.
    #[error("unrecognized color function `{name}` in `{raw}`")]
    UnrecognizedFunction { name: String, raw: String },
    /// Hex notation with a digit count other than 3 or 6.
    #[error("hex color `{raw}` has {length} digits, expected 3 or 6")]
    InvalidHexLength { raw: String, length: usize },
    /// Hex notation containing a non-hex character.
    #[error("hex color `{raw}` contains a non-hex digit")]
    InvalidHexDigit { raw: String },
    /// A bare identifier that is not a named color.
    #[error("unknown color keyword `{raw}`")]
    UnknownColorKeyword { raw: String },
    /// A color component written with a unit the notation does not accept.
    #[error("{component} in `{raw}` must be {expected}, found unit {unit:?}")]
    InvalidColorComponentUnit {
        raw: String,
        component: &'static str,
        expected: &'static str,
        unit: Unit,
    },
    /// A color function with too few or too many arguments.
    #[error("`{raw}` has {found} arguments, expected 3 or 4")]
    InvalidArgumentCount { raw: String, found: usize },
}
