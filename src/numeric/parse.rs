// ============================================================================
// Float128 Parsing
// Decimal text to double-double, accumulating digits in full precision
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::float128::Float128;
use super::format::DIRECT_SCALE_LIMIT;
use std::str::FromStr;

impl Float128 {
    /// Scan a decimal literal from the start of `input`.
    ///
    /// Grammar: `[ws] [sign] digit* ['.' digit*] [('e'|'E') [sign] digit+]`
    /// with at least one mantissa digit. Scanning stops at the first
    /// character that cannot continue the literal, or right after the
    /// exponent. Returns the value and the number of bytes consumed.
    ///
    /// Each mantissa digit is folded in as `value * 10 + d` in double-double
    /// arithmetic, so long mantissas keep their low-order digits. Results
    /// whose low lane falls below `f64::MIN_POSITIVE` keep only the bits a
    /// subnormal can hold.
    ///
    /// # Errors
    /// - `DuplicateDecimalPoint` on a second '.'
    /// - `SignAfterDigits` on a sign after a digit or after another sign
    /// - `NoMantissaDigits` if no digit was read
    /// - `MalformedExponent` if 'e'/'E' is not followed by a 32-bit integer
    ///
    /// # Example
    /// ```
    /// use float128::Float128;
    ///
    /// let (x, used) = Float128::parse_prefix("  -2.5e3 apples").unwrap();
    /// assert_eq!(x, Float128::from(-2500.0));
    /// assert_eq!(used, 8);
    /// ```
    pub fn parse_prefix(input: &str) -> NumericResult<(Self, usize)> {
        let bytes = input.as_bytes();
        let mut pos = 0;

        while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
            pos += 1;
        }

        let mut value = Float128::ZERO;
        let mut digits: i64 = 0;
        let mut point: i64 = 0;
        let mut point_set = false;
        let mut sign: i32 = 0;
        let mut exponent: i64 = 0;

        while pos < bytes.len() {
            let ch = bytes[pos];
            match ch {
                b'0'..=b'9' => {
                    value *= Float128::TEN;
                    value += Float128::from((ch - b'0') as f64);
                    digits += 1;
                },
                b'.' => {
                    if point_set {
                        return Err(NumericError::DuplicateDecimalPoint);
                    }
                    point = digits;
                    point_set = true;
                },
                b'+' | b'-' => {
                    if sign != 0 || digits > 0 {
                        return Err(NumericError::SignAfterDigits);
                    }
                    sign = if ch == b'-' { -1 } else { 1 };
                },
                b'e' | b'E' => {
                    let (exp, used) = scan_exponent(&bytes[pos + 1..])?;
                    exponent = exp as i64;
                    pos += 1 + used;
                    break;
                },
                _ => break,
            }
            pos += 1;
        }

        if digits == 0 {
            return Err(NumericError::NoMantissaDigits);
        }

        if point_set {
            exponent -= digits - point;
        }

        // a zero mantissa stays zero; scaling would give 0 * Inf
        if exponent != 0 && !value.is_zero() {
            value = scale_by_power_of_ten(value, exponent);
        }

        if sign == -1 {
            value = -value;
        }

        Ok((value, pos))
    }
}

/// `value * 10^exponent`. Negative exponents divide by the positive power,
/// which is exact to double-double precision, and do so in two steps past
/// `10^300` so the divisor never overflows.
fn scale_by_power_of_ten(value: Float128, exponent: i64) -> Float128 {
    if exponent > 0 {
        return value * Float128::TEN.powi(exponent);
    }

    let mut rest = -exponent;
    let mut value = value;
    if rest > DIRECT_SCALE_LIMIT as i64 {
        value /= Float128::TEN.powi(DIRECT_SCALE_LIMIT as i64);
        rest -= DIRECT_SCALE_LIMIT as i64;
    }
    value / Float128::TEN.powi(rest)
}

/// Scan `[sign] digit+` into an `i32`. Returns the exponent and the bytes used.
fn scan_exponent(bytes: &[u8]) -> NumericResult<(i32, usize)> {
    let mut pos = 0;
    let negative = match bytes.first() {
        Some(b'-') => {
            pos = 1;
            true
        },
        Some(b'+') => {
            pos = 1;
            false
        },
        _ => false,
    };

    let start = pos;
    let mut magnitude: i64 = 0;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        magnitude = magnitude * 10 + (bytes[pos] - b'0') as i64;
        if magnitude > i32::MAX as i64 + 1 {
            return Err(NumericError::MalformedExponent);
        }
        pos += 1;
    }

    if pos == start {
        return Err(NumericError::MalformedExponent);
    }

    let signed = if negative { -magnitude } else { magnitude };
    let exponent = i32::try_from(signed).map_err(|_| NumericError::MalformedExponent)?;
    Ok((exponent, pos))
}

// ============================================================================
// String Parsing
// ============================================================================

impl FromStr for Float128 {
    type Err = NumericError;

    /// Parse a whole decimal literal. Surrounding whitespace is ignored;
    /// anything else left over is `TrailingCharacters`.
    ///
    /// # Examples
    /// - "1" -> 1
    /// - "-0.001" -> -0.001 (to ~32 digits, not the nearest double)
    /// - "16777216e-30" -> 1.6777216e-23
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let result = Float128::parse_prefix(trimmed).and_then(|(value, used)| {
            if used == trimmed.len() {
                Ok(value)
            } else {
                Err(NumericError::TrailingCharacters)
            }
        });

        if let Err(err) = &result {
            tracing::debug!(input = s, error = %err, "rejected Float128 literal");
        }

        result
    }
}
