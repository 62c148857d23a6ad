//! CSS Color Module Level 3 — §4.2.1 `rgb()` and §4.2.2 `rgba()`
//! Spec: <https://www.w3.org/TR/css-color-3/#rgba-color>

use crate::color::clamp_to_byte;
use crate::{ColorError, Rgba8Tuple};
use css_values_units::{Dimension, Function, Unit, Value};

/// Convert `rgb(r, g, b)` or `rgba(r, g, b, a)` to channels.
///
/// Each of R, G, B is taken as a byte directly from the argument's number.
/// A percentage channel is not rescaled, so `rgb(50%, 0, 0)` has red 50.
/// Alpha is used as-is when unitless; a percentage alpha maps `[0, 100]` onto `[0, 255]`.
pub(crate) fn rgb_to_channels(function: &Function) -> Result<Rgba8Tuple, ColorError> {
    let (red, green, blue, alpha) = match function.arguments() {
        [red, green, blue] => (red, green, blue, None),
        [red, green, blue, alpha] => (red, green, blue, Some(alpha)),
        arguments => {
            return Err(ColorError::InvalidArgumentCount {
                raw: function.value().raw().to_owned(),
                found: arguments.len(),
            });
        }
    };
    let alpha = match alpha {
        Some(alpha) => alpha_byte(alpha)?,
        None => u8::MAX,
    };
    Ok((
        channel_byte(red)?,
        channel_byte(green)?,
        channel_byte(blue)?,
        alpha,
    ))
}

fn channel_byte(argument: &Value) -> Result<u8, ColorError> {
    let dimension = Dimension::from_value(argument.clone())?;
    Ok(clamp_to_byte(dimension.number()))
}

fn alpha_byte(argument: &Value) -> Result<u8, ColorError> {
    let dimension = Dimension::from_value(argument.clone())?;
    let alpha = match dimension.unit() {
        Unit::Percent => dimension.number() / 100.0 * 255.0,
        _ => dimension.number(),
    };
    Ok(clamp_to_byte(alpha))
}
