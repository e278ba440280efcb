//! Conversion of fixed-layout decimal strings.
//!
//! Every coordinate in a document is written with an optional sign, one to
//! three integer digits, a decimal point, and exactly six fractional digits
//! (`-?[0-9]{1,3}\.[0-9]{6}`). Since the layout is fixed, the position of the
//! decimal point follows from the length of the string and no general-purpose
//! float parser is needed.

use thiserror::Error;

/// Number of digits after the decimal point.
pub const FRACTION_DIGITS: usize = 6;

/// Shortest unsigned layout, `0.000000`.
const MIN_LEN: usize = FRACTION_DIGITS + 2;
/// Longest unsigned layout, `000.000000`.
const MAX_LEN: usize = FRACTION_DIGITS + 4;

/// An error decoding a fixed-layout decimal.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecimalError {
    /// The unsigned digits do not fit any supported layout.
    #[error("Unsupported decimal length ({0}).")]
    Length(usize),
    /// No decimal point where the layout requires one.
    #[error("Expected a decimal point at offset {0}.")]
    Point(usize),
    /// A non-digit byte where the layout requires a digit.
    #[error("Expected a digit at offset {offset}, found byte {byte:#04x}.")]
    Digit { offset: usize, byte: u8 },
}

/// Decode a fixed-layout decimal string into the nearest `f64`.
///
/// Offsets in errors are relative to the start of `r`, sign included.
pub fn decode(r: &[u8]) -> Result<f64, DecimalError> {
    let (negative, digits, skip) = match r.split_first() {
        Some((b'-', rest)) => (true, rest, 1),
        _ => (false, r, 0),
    };

    let n = digits.len();
    if !(MIN_LEN..=MAX_LEN).contains(&n) {
        Err(DecimalError::Length(n))?;
    }

    let point = n - FRACTION_DIGITS - 1;
    if digits[point] != b'.' {
        Err(DecimalError::Point(skip + point))?;
    }

    // Micro-units fit comfortably below 2^53, so the integer is exact as an
    // `f64` and the single division below rounds correctly.
    let mut unscaled = 0u64;
    for (i, &b) in digits.iter().enumerate() {
        if i == point {
            continue;
        }

        let digit = b.wrapping_sub(b'0');
        if digit > 9 {
            Err(DecimalError::Digit {
                offset: skip + i,
                byte: b,
            })?;
        }

        unscaled = unscaled * 10 + digit as u64;
    }

    let value = unscaled as f64 / 1e6;

    Ok(if negative { -value } else { value })
}
