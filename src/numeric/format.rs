// ============================================================================
// Float128 Formatting
// Decimal digit extraction and scientific-notation rendering
// ============================================================================

use super::config::{FormatConfig, DEFAULT_PRECISION};
use super::errors::{NumericError, NumericResult};
use super::float128::Float128;
use smallvec::{smallvec, SmallVec};
use std::fmt::{self, Write};

/// ASCII decimal digits produced by [`Float128::to_digits`]. Inline up to
/// 36 digits, which covers the default precision without allocating.
pub type Digits = SmallVec<[u8; 36]>;

/// Above this decimal exponent (or below its negation) `10^e` is scaled in
/// two steps so neither the power nor the quotient leaves double range.
pub(super) const DIRECT_SCALE_LIMIT: i32 = 300;

/// Binary pre-scale used when dividing out very large exponents.
const LARGE_PRESCALE_BITS: i32 = 53;

impl Float128 {
    /// Compute `precision` significant decimal digits of `|self|` and the
    /// decimal exponent of the leading digit.
    ///
    /// Zero yields all '0' digits and exponent 0.
    ///
    /// # Errors
    /// - `NonFinite` for NaN and infinities
    /// - `ExponentOutOfRange` / `NonPositiveLeadingDigit` if digit
    ///   extraction breaks its own invariants, which only happens for a
    ///   value that was not normalized
    ///
    /// # Example
    /// ```
    /// use float128::Float128;
    ///
    /// let (digits, exp) = Float128::from(-0.015625).to_digits(5).unwrap();
    /// assert_eq!(&digits[..], b"15625");
    /// assert_eq!(exp, -2);
    /// ```
    pub fn to_digits(self, precision: usize) -> NumericResult<(Digits, i32)> {
        let precision = precision.max(1);

        if !self.is_finite() {
            return Err(NumericError::NonFinite);
        }

        if self.hi() == 0.0 {
            return Ok((smallvec![b'0'; precision], 0));
        }

        // one guard digit for rounding
        let n = precision + 1;
        let mut s: SmallVec<[i32; 36]> = smallvec![0; n + 1];

        // estimate, fixed up below
        let mut expn = self.hi().abs().log10().floor() as i32;
        let mut r = self.abs();

        if expn < -DIRECT_SCALE_LIMIT {
            r *= Float128::TEN.powi(DIRECT_SCALE_LIMIT as i64);
            r /= Float128::TEN.powi((expn + DIRECT_SCALE_LIMIT) as i64);
        } else if expn > DIRECT_SCALE_LIMIT {
            r = r.ldexp(-LARGE_PRESCALE_BITS);
            r /= Float128::TEN.powi(expn as i64);
            r = r.ldexp(LARGE_PRESCALE_BITS);
        } else {
            r /= Float128::TEN.powi(expn as i64);
        }

        // log10 estimate can be off by one either way
        if r.is_ge(&Float128::TEN) {
            r /= Float128::TEN;
            expn += 1;
        } else if r.is_lt(&Float128::ONE) {
            r *= Float128::TEN;
            expn -= 1;
        }

        if r.is_ge(&Float128::TEN) || r.is_lt(&Float128::ONE) {
            return Err(NumericError::ExponentOutOfRange);
        }

        for digit in s.iter_mut().take(n) {
            let d = r.hi() as i32;
            r -= Float128::from(d);
            r *= Float128::TEN;
            *digit = d;
        }

        // accumulated rounding can leave digits just outside 0..=9
        for i in (1..n).rev() {
            if s[i] < 0 {
                s[i - 1] -= 1;
                s[i] += 10;
            } else if s[i] > 9 {
                s[i - 1] += 1;
                s[i] -= 10;
            }
        }

        if s[0] <= 0 {
            return Err(NumericError::NonPositiveLeadingDigit);
        }

        // round half up on the guard digit
        if s[n - 1] >= 5 {
            s[n - 2] += 1;
            let mut i = n - 2;
            while i > 0 && s[i] > 9 {
                s[i] -= 10;
                s[i - 1] += 1;
                i -= 1;
            }
        }

        // 9.99… rounded up to 10.0…
        if s[0] > 9 {
            expn += 1;
            for i in (2..=precision).rev() {
                s[i] = s[i - 1];
            }
            s[0] = 1;
            s[1] = 0;
        }

        let digits = s[..precision].iter().map(|&d| b'0' + d as u8).collect();
        Ok((digits, expn))
    }

    /// Render with an explicit configuration.
    pub fn to_string_with(&self, config: &FormatConfig) -> String {
        let mut out = String::with_capacity(config.precision + 8);
        // writing into a String cannot fail
        let _ = self.write_scientific(&mut out, config);
        out
    }

    fn write_scientific<W: fmt::Write>(&self, out: &mut W, config: &FormatConfig) -> fmt::Result {
        let sign = if self.hi() < 0.0 {
            "-"
        } else if config.plus_sign {
            "+"
        } else {
            ""
        };

        if self.is_nan() {
            return out.write_str("NaN");
        }
        if self.is_infinite() {
            return write!(out, "{}Inf", sign);
        }

        let (digits, exponent) = match self.to_digits(config.precision) {
            Ok(parts) => parts,
            Err(err) => {
                tracing::error!(
                    hi = self.hi(),
                    lo = self.lo(),
                    "Float128 digit extraction failed: {}",
                    err
                );
                panic!("Float128 formatting invariant violated: {}", err);
            },
        };

        out.write_str(sign)?;
        out.write_char(digits[0] as char)?;
        out.write_char('.')?;
        for &d in &digits[1..] {
            out.write_char(d as char)?;
        }
        write!(
            out,
            "e{:+0width$}",
            exponent,
            width = config.exponent_width
        )
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

fn config_for(f: &fmt::Formatter<'_>) -> FormatConfig {
    FormatConfig::new().with_precision(f.precision().unwrap_or(DEFAULT_PRECISION))
}

/// Render `value`, honoring the formatter's width, fill and alignment.
/// Numbers are right-aligned unless asked otherwise. `Formatter::pad` is
/// not used because it reads the precision as a maximum length.
fn write_padded(value: &Float128, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let config = config_for(f);
    let width = match f.width() {
        Some(width) => width,
        None => return value.write_scientific(f, &config),
    };

    let rendered = value.to_string_with(&config);
    let len = rendered.chars().count();
    if len >= width {
        return f.write_str(&rendered);
    }

    let padding = width - len;
    let (before, after) = match f.align() {
        Some(fmt::Alignment::Left) => (0, padding),
        Some(fmt::Alignment::Center) => (padding / 2, padding - padding / 2),
        Some(fmt::Alignment::Right) | None => (padding, 0),
    };
    let fill = f.fill();
    for _ in 0..before {
        f.write_char(fill)?;
    }
    f.write_str(&rendered)?;
    for _ in 0..after {
        f.write_char(fill)?;
    }
    Ok(())
}

/// Scientific notation with 32 significant digits, e.g.
/// `+3.1415926535897932384626433832795e+00`. A formatter precision
/// (`{:.10}`) selects the number of significant digits; width, fill and
/// alignment pad the result.
impl fmt::Display for Float128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_padded(self, f)
    }
}

impl fmt::LowerExp for Float128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_padded(self, f)
    }
}

impl fmt::Debug for Float128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Float128({}, hi={:e}, lo={:e})", self, self.hi(), self.lo())
    }
}
