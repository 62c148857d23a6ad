//! CSS Values & Units Level 4 — §5 Distance units and §7 Other quantities
//! Spec: <https://www.w3.org/TR/css-values-4/#lengths>
//! Spec: <https://www.w3.org/TR/css-values-4/#other-units>

use crate::ValueError;
use core::fmt;
use core::str::FromStr;
use log::debug;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// The family a [`Unit`] belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnitFamily {
    AbsoluteLength,
    Angle,
    Duration,
    Frequency,
    RelativeLength,
    Resolution,
}

/// Every recognized CSS unit suffix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Unit {
    // Absolute lengths (§5.2)
    Centimeters,
    Millimeters,
    QuarterMillimeters,
    Inches,
    Picas,
    Points,
    Pixels,
    /// A bare number without a suffix.
    None,

    // Angles (§7.1)
    Degrees,
    Gradians,
    Radians,
    Turns,

    // Durations (§7.2)
    Seconds,
    Milliseconds,

    // Frequencies (§7.3)
    Hertz,
    Kilohertz,

    // Relative lengths (§5.1) and percentages
    Percent,
    Em,
    Ex,
    Cap,
    Ch,
    Ic,
    Rem,
    LineHeight,
    RootLineHeight,
    ViewportWidth,
    ViewportHeight,
    ViewportInline,
    ViewportBlock,
    ViewportMin,
    ViewportMax,

    // Resolutions (§7.4)
    DotsPerInch,
    DotsPerCentimeter,
    DotsPerPixel,
}

/// Suffix lookup built once from `Unit::ALL`, so it stays the exact inverse of `Unit::suffix`.
static UNITS_BY_SUFFIX: Lazy<HashMap<&'static str, Unit>> =
    Lazy::new(|| Unit::ALL.iter().map(|unit| (unit.suffix(), *unit)).collect());

impl Unit {
    /// All units, grouped by family.
    pub const ALL: [Self; 34] = [
        Self::Centimeters,
        Self::Millimeters,
        Self::QuarterMillimeters,
        Self::Inches,
        Self::Picas,
        Self::Points,
        Self::Pixels,
        Self::None,
        Self::Degrees,
        Self::Gradians,
        Self::Radians,
        Self::Turns,
        Self::Seconds,
        Self::Milliseconds,
        Self::Hertz,
        Self::Kilohertz,
        Self::Percent,
        Self::Em,
        Self::Ex,
        Self::Cap,
        Self::Ch,
        Self::Ic,
        Self::Rem,
        Self::LineHeight,
        Self::RootLineHeight,
        Self::ViewportWidth,
        Self::ViewportHeight,
        Self::ViewportInline,
        Self::ViewportBlock,
        Self::ViewportMin,
        Self::ViewportMax,
        Self::DotsPerInch,
        Self::DotsPerCentimeter,
        Self::DotsPerPixel,
    ];

    /// Classify a unit suffix.
    ///
    /// Matching is exact: `"px"` is pixels, `"PX"` is not a unit. The empty
    /// suffix is [`Unit::None`].
    ///
    /// # Errors
    /// Returns `ValueError::UnsupportedUnit` for any suffix outside the known set.
    pub fn classify(suffix: &str) -> Result<Self, ValueError> {
        UNITS_BY_SUFFIX.get(suffix).copied().ok_or_else(|| {
            debug!("[UNIT] unsupported unit suffix `{suffix}`");
            ValueError::UnsupportedUnit {
                unit: suffix.to_owned(),
                raw: suffix.to_owned(),
            }
        })
    }

    /// The suffix this unit is written with.
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Centimeters => "cm",
            Self::Millimeters => "mm",
            Self::QuarterMillimeters => "Q",
            Self::Inches => "in",
            Self::Picas => "pc",
            Self::Points => "pt",
            Self::Pixels => "px",
            Self::None => "",
            Self::Degrees => "deg",
            Self::Gradians => "grad",
            Self::Radians => "rad",
            Self::Turns => "turn",
            Self::Seconds => "s",
            Self::Milliseconds => "ms",
            Self::Hertz => "Hz",
            Self::Kilohertz => "kHz",
            Self::Percent => "%",
            Self::Em => "em",
            Self::Ex => "ex",
            Self::Cap => "cap",
            Self::Ch => "ch",
            Self::Ic => "ic",
            Self::Rem => "rem",
            Self::LineHeight => "lh",
            Self::RootLineHeight => "rlh",
            Self::ViewportWidth => "vw",
            Self::ViewportHeight => "vh",
            Self::ViewportInline => "vi",
            Self::ViewportBlock => "vb",
            Self::ViewportMin => "vmin",
            Self::ViewportMax => "vmax",
            Self::DotsPerInch => "dpi",
            Self::DotsPerCentimeter => "dpcm",
            Self::DotsPerPixel => "dppx",
        }
    }

    pub const fn family(self) -> UnitFamily {
        match self {
            Self::Centimeters
            | Self::Millimeters
            | Self::QuarterMillimeters
            | Self::Inches
            | Self::Picas
            | Self::Points
            | Self::Pixels
            | Self::None => UnitFamily::AbsoluteLength,
            Self::Degrees | Self::Gradians | Self::Radians | Self::Turns => UnitFamily::Angle,
            Self::Seconds | Self::Milliseconds => UnitFamily::Duration,
            Self::Hertz | Self::Kilohertz => UnitFamily::Frequency,
            Self::Percent
            | Self::Em
            | Self::Ex
            | Self::Cap
            | Self::Ch
            | Self::Ic
            | Self::Rem
            | Self::LineHeight
            | Self::RootLineHeight
            | Self::ViewportWidth
            | Self::ViewportHeight
            | Self::ViewportInline
            | Self::ViewportBlock
            | Self::ViewportMin
            | Self::ViewportMax => UnitFamily::RelativeLength,
            Self::DotsPerInch | Self::DotsPerCentimeter | Self::DotsPerPixel => {
                UnitFamily::Resolution
            }
        }
    }
}

impl FromStr for Unit {
    type Err = ValueError;

    fn from_str(suffix: &str) -> Result<Self, Self::Err> {
        Self::classify(suffix)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.suffix())
    }
}
