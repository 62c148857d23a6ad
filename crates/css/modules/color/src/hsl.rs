//! CSS Color Module Level 3 — §4.2.4 `hsl()` and §4.2.5 `hsla()`
//! Spec: <https://www.w3.org/TR/css-color-3/#hsl-color>

use crate::color::clamp_to_byte;
use crate::{ColorError, Rgba8Tuple};
use core::f64::consts::TAU;
use css_values_units::{Dimension, Function, Unit, Value};

/// Degrees per gradian (400grad is a full turn).
const DEGREES_PER_GRADIAN: f64 = 0.9;

/// Map `value` linearly from `[min, max]` onto `[0, 1]`.
fn map_range(value: f64, min: f64, max: f64) -> f64 {
    (value - min) / (max - min)
}

/// Express `value` in thirds of a turn, where `full_turn` is one turn in its unit.
///
/// Multiplying before dividing keeps whole degrees such as 60, 180 and 300 exact.
fn thirds_of_turn(value: f64, full_turn: f64) -> f64 {
    value * 3.0 / full_turn
}

/// Wrap into `[0, 3)`.
fn wrap_hue_times_3(value: f64) -> f64 {
    let wrapped = value.rem_euclid(3.0);
    // rem_euclid can round up to exactly 3.0 for tiny negative inputs.
    if wrapped >= 3.0 { 0.0 } else { wrapped }
}

/// Convert `hsl(h, s, l)` or `hsla(h, s, l, a)` to channels.
pub(crate) fn hsl_to_channels(function: &Function) -> Result<Rgba8Tuple, ColorError> {
    let raw = function.value().raw();
    let (hue, saturation, lightness, alpha) = match function.arguments() {
        [hue, saturation, lightness] => (hue, saturation, lightness, None),
        [hue, saturation, lightness, alpha] => (hue, saturation, lightness, Some(alpha)),
        arguments => {
            return Err(ColorError::InvalidArgumentCount {
                raw: raw.to_owned(),
                found: arguments.len(),
            });
        }
    };
    let hue = normalized_hue(hue, raw)?;
    let saturation = percentage_fraction(saturation, "saturation", raw)?;
    let lightness = percentage_fraction(lightness, "lightness", raw)?;
    let alpha = match alpha {
        Some(alpha) => alpha_byte(alpha)?,
        None => u8::MAX,
    };
    let (red, green, blue) = hsl_to_rgb(hue, saturation, lightness);
    // Scale before rounding; truncating the fractions first would lose every channel.
    Ok((
        clamp_to_byte(red * 255.0),
        clamp_to_byte(green * 255.0),
        clamp_to_byte(blue * 255.0),
        alpha,
    ))
}

/// Normalize a hue argument to thirds of a full turn in `[0, 3)`.
///
/// Unitless and percentage hues are read on a `[0, 100]` scale.
fn normalized_hue(argument: &Value, raw: &str) -> Result<f64, ColorError> {
    let dimension = Dimension::from_value(argument.clone())?;
    let number = dimension.number();
    let hue = match dimension.unit() {
        Unit::None | Unit::Percent => thirds_of_turn(number, 100.0),
        Unit::Degrees => thirds_of_turn(number, 360.0),
        Unit::Radians => thirds_of_turn(number, TAU),
        Unit::Gradians => thirds_of_turn(number * DEGREES_PER_GRADIAN, 360.0),
        Unit::Turns => number * 3.0,
        unit => {
            return Err(ColorError::InvalidColorComponentUnit {
                raw: raw.to_owned(),
                component: "hue",
                expected: "an angle, a percentage or a number",
                unit,
            });
        }
    };
    Ok(wrap_hue_times_3(hue))
}

/// Saturation and lightness: percentages only, mapped to `[0, 1]`.
fn percentage_fraction(
    argument: &Value,
    component: &'static str,
    raw: &str,
) -> Result<f64, ColorError> {
    let dimension = Dimension::from_value(argument.clone())?;
    if dimension.unit() != Unit::Percent {
        return Err(ColorError::InvalidColorComponentUnit {
            raw: raw.to_owned(),
            component,
            expected: "a percentage",
            unit: dimension.unit(),
        });
    }
    Ok(map_range(dimension.number(), 0.0, 100.0).clamp(0.0, 1.0))
}

/// Percentages map `[0, 100]` and numbers map `[0, 1]` onto `[0, 255]`; other units are opaque.
fn alpha_byte(argument: &Value) -> Result<u8, ColorError> {
    let dimension = Dimension::from_value(argument.clone())?;
    let fraction = match dimension.unit() {
        Unit::Percent => map_range(dimension.number(), 0.0, 100.0),
        Unit::None => dimension.number(),
        _ => return Ok(u8::MAX),
    };
    Ok(clamp_to_byte(fraction * 255.0))
}

/// <https://www.w3.org/TR/css-color-3/#hsl-color>
///
/// The hue is in thirds of a turn (`[0, 3)`); saturation, lightness and the
/// outputs are fractions in `[0, 1]`.
fn hsl_to_rgb(hue_times_3: f64, saturation: f64, lightness: f64) -> (f64, f64, f64) {
    let m2 = if lightness <= 0.5 {
        lightness * (saturation + 1.0)
    } else {
        lightness + saturation - lightness * saturation
    };
    let m1 = lightness * 2.0 - m2;
    (
        hue_to_rgb(m1, m2, hue_times_3 + 1.0),
        hue_to_rgb(m1, m2, hue_times_3),
        hue_to_rgb(m1, m2, hue_times_3 - 1.0),
    )
}

fn hue_to_rgb(m1: f64, m2: f64, hue_times_3: f64) -> f64 {
    let hue_times_3 = if hue_times_3 < 0.0 {
        hue_times_3 + 3.0
    } else if hue_times_3 > 3.0 {
        hue_times_3 - 3.0
    } else {
        hue_times_3
    };
    if hue_times_3 * 2.0 < 1.0 {
        m1 + (m2 - m1) * hue_times_3 * 2.0
    } else if hue_times_3 * 2.0 < 3.0 {
        m2
    } else if hue_times_3 < 2.0 {
        m1 + (m2 - m1) * (2.0 - hue_times_3) * 2.0
    } else {
        m1
    }
}
