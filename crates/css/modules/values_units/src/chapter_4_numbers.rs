//! CSS Values & Units Level 3 — §4 Numbers
//! Spec: <https://www.w3.org/TR/css-values-3/#numeric-types>

use log::debug;

/// Split `text` into its leading numeric run and the remaining suffix.
///
/// The numeric run is an optional sign, then any digits and decimal points,
/// then an optional exponent. An `e` only starts an exponent when a digit
/// (optionally signed) follows, so `2em` and `3ex` keep their unit intact,
/// and only after a run holding at least one digit, so `+e5` is all suffix.
///
/// The run is not validated here: `1.2.3px` splits into `("1.2.3", "px")`.
pub fn split_mantissa(text: &str) -> (&str, &str) {
    let bytes = text.as_bytes();
    let mut index = 0usize;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        index += 1;
    }
    let mut has_digit = false;
    while let Some(byte) = bytes
        .get(index)
        .filter(|byte| byte.is_ascii_digit() || **byte == b'.')
    {
        has_digit |= byte.is_ascii_digit();
        index += 1;
    }
    if has_digit && matches!(bytes.get(index), Some(b'e' | b'E')) {
        let mut exponent_end = index + 1;
        if matches!(bytes.get(exponent_end), Some(b'+' | b'-')) {
            exponent_end += 1;
        }
        if bytes.get(exponent_end).is_some_and(u8::is_ascii_digit) {
            while bytes.get(exponent_end).is_some_and(u8::is_ascii_digit) {
                exponent_end += 1;
            }
            index = exponent_end;
        }
    }
    text.split_at(index)
}

/// Parse a mantissa produced by [`split_mantissa`].
///
/// Unparsable text (empty, a lone sign, several decimal points) yields `NaN`
/// instead of an error; callers reading the number must check for it.
pub fn parse_mantissa(mantissa: &str) -> f64 {
    mantissa.parse::<f64>().unwrap_or_else(|_| {
        debug!("[NUMBER] mantissa `{mantissa}` is not a number; using NaN");
        f64::NAN
    })
}
