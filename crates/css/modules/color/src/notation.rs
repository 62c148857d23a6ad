//! Color format detection.

use crate::{ColorError, ColorFormat};
use css_values_units::{Function, Value};
use log::debug;

/// A classified color string, carrying what its conversion needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorNotation {
    CurrentColor,
    Transparent,
    /// A named color, as written.
    Keyword(String),
    /// Hex digits without the leading `#`.
    Hexadecimal(String),
    Rgb(Function),
    Rgba(Function),
    Hsl(Function),
    Hsla(Function),
}

impl ColorNotation {
    /// Classify a color value. The first matching rule wins:
    /// functional notation, `#` hex, `currentColor`, `transparent`, then named keyword.
    ///
    /// # Errors
    /// Returns `ColorError::UnrecognizedFunction` for functions other than
    /// `rgb`/`rgba`/`hsl`/`hsla`, and `ColorError::Value` when the functional
    /// notation itself is malformed.
    pub fn classify(value: &Value) -> Result<Self, ColorError> {
        let text = value.trimmed();
        let notation = if text.contains('(') {
            let function = Function::from_value(value.clone())?;
            match function.function_name().to_ascii_lowercase().as_str() {
                "rgb" => Self::Rgb(function),
                "rgba" => Self::Rgba(function),
                "hsl" => Self::Hsl(function),
                "hsla" => Self::Hsla(function),
                _ => {
                    return Err(ColorError::UnrecognizedFunction {
                        name: function.function_name().to_owned(),
                        raw: value.raw().to_owned(),
                    });
                }
            }
        } else if let Some(digits) = text.strip_prefix('#') {
            Self::Hexadecimal(digits.to_owned())
        } else if text == "currentColor" {
            Self::CurrentColor
        } else if text == "transparent" {
            Self::Transparent
        } else {
            Self::Keyword(text.to_owned())
        };
        debug!("[COLOR] `{}` classified as {:?}", value.raw(), notation.format());
        Ok(notation)
    }

    pub const fn format(&self) -> ColorFormat {
        match self {
            Self::CurrentColor => ColorFormat::CurrentColor,
            Self::Transparent => ColorFormat::Transparent,
            Self::Keyword(_) => ColorFormat::BasicKeyword,
            Self::Hexadecimal(_) => ColorFormat::Hexadecimal,
            Self::Rgb(_) => ColorFormat::Rgb,
            Self::Rgba(_) => ColorFormat::Rgba,
            Self::Hsl(_) => ColorFormat::Hsl,
            Self::Hsla(_) => ColorFormat::Hsla,
        }
    }
}
