//! CSS Color Module Level 3 — §4.2.1 RGB hexadecimal notation
//! Spec: <https://www.w3.org/TR/css-color-3/#rgb-color>

use crate::{ColorError, Rgba8Tuple};

/// Bit count used to duplicate a single hex nibble into a full byte.
const NIBBLE_SHIFT: u32 = 4;

/// Convert an ASCII hex digit to its numeric value.
const fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

/// Parse the digits of a 3- or 6-digit hex color (without the `#`).
///
/// Three digits expand by duplicating each nibble (`abc` is `aabbcc`).
/// Alpha is always opaque.
pub(crate) fn parse_hex_color(digits: &str, raw: &str) -> Result<Rgba8Tuple, ColorError> {
    let length = digits.chars().count();
    if length != 3 && length != 6 {
        return Err(ColorError::InvalidHexLength {
            raw: raw.to_owned(),
            length,
        });
    }
    let nibbles = digits
        .bytes()
        .map(hex_value)
        .collect::<Option<Vec<u8>>>()
        .ok_or_else(|| ColorError::InvalidHexDigit {
            raw: raw.to_owned(),
        })?;
    let (red, green, blue) = match nibbles.as_slice() {
        [red, green, blue] => (
            red.wrapping_shl(NIBBLE_SHIFT) | red,
            green.wrapping_shl(NIBBLE_SHIFT) | green,
            blue.wrapping_shl(NIBBLE_SHIFT) | blue,
        ),
        [red_high, red_low, green_high, green_low, blue_high, blue_low] => (
            red_high.wrapping_shl(NIBBLE_SHIFT) | red_low,
            green_high.wrapping_shl(NIBBLE_SHIFT) | green_low,
            blue_high.wrapping_shl(NIBBLE_SHIFT) | blue_low,
        ),
        _ => {
            return Err(ColorError::InvalidHexLength {
                raw: raw.to_owned(),
                length,
            });
        }
    };
    Ok((red, green, blue, u8::MAX))
}
