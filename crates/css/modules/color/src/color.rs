//! The converted color value.

use crate::notation::ColorNotation;
use crate::{ColorError, hex, hsl, named, rgb};
use core::fmt;
use core::str::FromStr;
use css_values_units::Value;
use log::debug;

/// 8-bit `(red, green, blue, alpha)` channels.
pub type Rgba8Tuple = (u8, u8, u8, u8);

/// Channels used for `currentColor`, `transparent` and CSS-wide keywords.
const TRANSPARENT: Rgba8Tuple = (0, 0, 0, 0);

/// How a color was written.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorFormat {
    /// Not a color notation; used for CSS-wide keywords.
    Unknown,
    CurrentColor,
    BasicKeyword,
    Transparent,
    Hexadecimal,
    Rgb,
    Rgba,
    Hsl,
    Hsla,
}

/// A color string converted to RGBA channels at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Color {
    value: Value,
    format: ColorFormat,
    channels: Rgba8Tuple,
}

impl Color {
    /// Classify and convert a raw color string.
    ///
    /// CSS-wide keywords (`inherit`, ...) are not errors: they produce a color
    /// with [`ColorFormat::Unknown`] and fully transparent channels.
    ///
    /// # Errors
    /// Returns a [`ColorError`] describing the first structural problem found:
    /// unknown function or keyword, bad hex length or digit, wrong argument
    /// count, or a component written with the wrong unit.
    pub fn new(raw: impl Into<String>) -> Result<Self, ColorError> {
        Self::from_value(Value::new(raw)?)
    }

    /// Classify and convert an already wrapped value.
    ///
    /// # Errors
    /// See [`Color::new`].
    pub fn from_value(value: Value) -> Result<Self, ColorError> {
        if value.is_css_wide_keyword() {
            debug!("[COLOR] `{}` is a CSS-wide keyword; no color to resolve", value.raw());
            return Ok(Self {
                value,
                format: ColorFormat::Unknown,
                channels: TRANSPARENT,
            });
        }
        let notation = ColorNotation::classify(&value)?;
        let raw = value.raw();
        let channels = match &notation {
            ColorNotation::CurrentColor | ColorNotation::Transparent => TRANSPARENT,
            ColorNotation::Keyword(name) => named::named_color(name)
                .map(|[red, green, blue]| (red, green, blue, u8::MAX))
                .ok_or_else(|| ColorError::UnknownColorKeyword {
                    raw: raw.to_owned(),
                })?,
            ColorNotation::Hexadecimal(digits) => hex::parse_hex_color(digits, raw)?,
            ColorNotation::Rgb(function) | ColorNotation::Rgba(function) => {
                rgb::rgb_to_channels(function)?
            }
            ColorNotation::Hsl(function) | ColorNotation::Hsla(function) => {
                hsl::hsl_to_channels(function)?
            }
        };
        debug!("[COLOR] `{raw}` -> {channels:?}");
        Ok(Self {
            format: notation.format(),
            channels,
            value,
        })
    }

    pub fn format(&self) -> ColorFormat {
        self.format
    }

    pub fn channels(&self) -> Rgba8Tuple {
        self.channels
    }

    pub fn red(&self) -> u8 {
        self.channels.0
    }

    pub fn green(&self) -> u8 {
        self.channels.1
    }

    pub fn blue(&self) -> u8 {
        self.channels.2
    }

    pub fn alpha(&self) -> u8 {
        self.channels.3
    }

    pub fn is_opaque(&self) -> bool {
        self.channels.3 == u8::MAX
    }

    pub fn is_css_wide_keyword(&self) -> bool {
        self.value.is_css_wide_keyword()
    }

    /// The wrapped source value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// `#rrggbb`, ignoring alpha.
    pub fn to_hex_string(&self) -> String {
        let (red, green, blue, _) = self.channels;
        format!("#{red:02x}{green:02x}{blue:02x}")
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::new(raw)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (red, green, blue, alpha) = self.channels;
        write!(formatter, "rgba({red}, {green}, {blue}, {alpha})")
    }
}

/// Round a channel value into `[0, 255]`. `NaN` becomes 0.
pub(crate) fn clamp_to_byte(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, 255.0) as u8
}
