// ============================================================================
// Conversion to/from rust_decimal (for API boundaries)
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::float128::Float128;
use rust_decimal::Decimal;

/// Significant digits rendered when converting to `Decimal`. A 96-bit
/// mantissa holds any 28-digit integer.
const DECIMAL_DIGITS: usize = 28;

/// Largest scale `Decimal` accepts.
const DECIMAL_MAX_SCALE: u32 = 28;

impl Float128 {
    /// Convert from `rust_decimal::Decimal`.
    ///
    /// The 96-bit mantissa is carried exactly across both lanes; the scale
    /// is then divided out, so the result is within double-double rounding
    /// of the decimal value.
    pub fn from_decimal(d: Decimal) -> Self {
        let mantissa = Float128::from_i128(d.mantissa());
        match d.scale() {
            0 => mantissa,
            scale => mantissa / Float128::TEN.powi(scale as i64),
        }
    }

    /// Convert to `rust_decimal::Decimal`, rounded to 28 significant digits.
    ///
    /// Values smaller than the finest `Decimal` scale round to zero.
    ///
    /// # Errors
    /// - `NonFinite` for NaN and infinities
    /// - `DecimalOverflow` if the magnitude exceeds `Decimal::MAX`
    pub fn to_decimal(self) -> NumericResult<Decimal> {
        if !self.is_finite() {
            return Err(NumericError::NonFinite);
        }
        if self.is_zero() {
            return Ok(Decimal::ZERO);
        }

        let (digits, exponent) = self.to_digits(DECIMAL_DIGITS)?;
        let mut mantissa = digits
            .iter()
            .fold(0i128, |acc, &d| acc * 10 + (d - b'0') as i128);

        // value = mantissa * 10^shift
        let shift = exponent - (DECIMAL_DIGITS as i32 - 1);

        let mut result = if shift >= 0 {
            let mut d = Decimal::try_from_i128_with_scale(mantissa, 0)
                .map_err(|_| NumericError::DecimalOverflow)?;
            for _ in 0..shift {
                d = d.checked_mul(Decimal::TEN).ok_or_else(|| {
                    tracing::debug!(exponent, "Float128 too large for Decimal");
                    NumericError::DecimalOverflow
                })?;
            }
            d
        } else {
            let mut scale = shift.unsigned_abs();
            if scale > DECIMAL_MAX_SCALE {
                // drop digits below the finest scale, round half up
                let excess = scale - DECIMAL_MAX_SCALE;
                mantissa = if excess as usize > DECIMAL_DIGITS {
                    0
                } else {
                    let p = 10i128.pow(excess);
                    let q = mantissa / p;
                    if (mantissa % p) * 2 >= p {
                        q + 1
                    } else {
                        q
                    }
                };
                scale = DECIMAL_MAX_SCALE;
            }
            Decimal::try_from_i128_with_scale(mantissa, scale)
                .map_err(|_| NumericError::DecimalOverflow)?
        };

        if self.is_negative() {
            result.set_sign_negative(true);
        }

        Ok(result.normalize())
    }
}

impl From<Decimal> for Float128 {
    #[inline]
    fn from(d: Decimal) -> Self {
        Float128::from_decimal(d)
    }
}

impl TryFrom<Float128> for Decimal {
    type Error = NumericError;

    #[inline]
    fn try_from(value: Float128) -> Result<Self, Self::Error> {
        value.to_decimal()
    }
}
