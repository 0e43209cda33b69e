// ============================================================================
// Float128
// Double-double value type: construction, accessors, characterization
// ============================================================================

use super::eft::quick_two_sum;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Double-double floating point number with about 106 bits of significand
/// (roughly 32 decimal digits).
///
/// The value is the unevaluated sum `hi + lo` of two `f64` lanes. Every
/// arithmetic operation leaves the pair normalized: `hi` is the double
/// nearest to `hi + lo` and `|lo| <= ulp(hi) / 2`. Sign, NaN and infinity
/// live on `hi` exactly as they do for an ordinary `f64`.
///
/// The `Default` value is zero.
///
/// # Example
/// ```
/// use float128::Float128;
///
/// let third = Float128::ONE / Float128::from(3.0);
/// let one = third * Float128::from(3.0);
/// assert!((one - Float128::ONE).abs().to_f64() < 1e-31);
/// ```
#[derive(Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Float128 {
    hi: f64,
    lo: f64,
}

impl Float128 {
    /// Zero value
    pub const ZERO: Self = Self { hi: 0.0, lo: 0.0 };

    /// One (1.0)
    pub const ONE: Self = Self { hi: 1.0, lo: 0.0 };

    /// Ten (10.0), the base for decimal scaling
    pub const TEN: Self = Self { hi: 10.0, lo: 0.0 };

    /// Not-a-number
    pub const NAN: Self = Self {
        hi: f64::NAN,
        lo: 0.0,
    };

    /// Positive infinity
    pub const INFINITY: Self = Self {
        hi: f64::INFINITY,
        lo: 0.0,
    };

    /// Negative infinity
    pub const NEG_INFINITY: Self = Self {
        hi: f64::NEG_INFINITY,
        lo: 0.0,
    };

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from a single double; the low lane is zero.
    #[inline]
    pub const fn from_f64(hi: f64) -> Self {
        Self { hi, lo: 0.0 }
    }

    /// Create from both lanes verbatim.
    ///
    /// No renormalization happens here: the caller vouches that
    /// `|lo| <= ulp(hi) / 2`.
    #[inline]
    pub const fn from_parts(hi: f64, lo: f64) -> Self {
        Self { hi, lo }
    }

    /// Create from an integer. Exact for the whole `i64` range: bits beyond
    /// the 53 that fit in `hi` are carried in `lo`.
    #[inline]
    pub fn from_i64(value: i64) -> Self {
        let hi = value as f64;
        // `hi` rounds to nearest, so the remainder fits in 53 bits. 2^63 does
        // not fit in i64, so go through i128 for the difference.
        let rest = (value as i128 - hi as i128) as f64;
        let (hi, lo) = quick_two_sum(hi, rest);
        Self { hi, lo }
    }

    /// Create from a 128-bit integer, exact up to 106 significant bits.
    pub(crate) fn from_i128(value: i128) -> Self {
        let hi = value as f64;
        let rest = (value - hi as i128) as f64;
        let (hi, lo) = quick_two_sum(hi, rest);
        Self { hi, lo }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The leading lane.
    #[inline]
    pub const fn hi(self) -> f64 {
        self.hi
    }

    /// The trailing lane.
    #[inline]
    pub const fn lo(self) -> f64 {
        self.lo
    }

    /// Nearest `f64`, which for a normalized value is the leading lane.
    #[inline]
    pub const fn to_f64(self) -> f64 {
        self.hi
    }

    /// Both lanes as a `(hi, lo)` pair.
    #[inline]
    pub const fn to_parts(self) -> (f64, f64) {
        (self.hi, self.lo)
    }

    /// Truncate toward zero and convert to `i64`, saturating at the ends of
    /// the range. NaN converts to 0.
    pub fn to_i64(self) -> i64 {
        let t = self.trunc();
        let hi = t.hi as i128;
        let lo = t.lo as i128;
        hi.saturating_add(lo).clamp(i64::MIN as i128, i64::MAX as i128) as i64
    }

    // ========================================================================
    // Characterization
    // ========================================================================

    /// Check if value is zero (both lanes).
    #[inline]
    pub fn is_zero(self) -> bool {
        self.hi == 0.0 && self.lo == 0.0
    }

    /// Check if value is exactly one.
    #[inline]
    pub fn is_one(self) -> bool {
        self.hi == 1.0 && self.lo == 0.0
    }

    /// Check if value is strictly positive. Looks at `hi` only.
    #[inline]
    pub fn is_positive(self) -> bool {
        self.hi > 0.0
    }

    /// Check if value is strictly negative. Looks at `hi` only.
    #[inline]
    pub fn is_negative(self) -> bool {
        self.hi < 0.0
    }

    #[inline]
    pub fn is_nan(self) -> bool {
        self.hi.is_nan()
    }

    /// Check if value is either infinity.
    #[inline]
    pub fn is_infinite(self) -> bool {
        self.hi.is_infinite()
    }

    /// Check for infinity of a given sign: `sign > 0` matches `+inf` only,
    /// `sign < 0` matches `-inf` only, `sign == 0` matches both.
    #[inline]
    pub fn is_inf_signed(self, sign: i32) -> bool {
        (sign >= 0 && self.hi == f64::INFINITY) || (sign <= 0 && self.hi == f64::NEG_INFINITY)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.hi.is_finite()
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<f64> for Float128 {
    #[inline]
    fn from(value: f64) -> Self {
        Self::from_f64(value)
    }
}

impl From<(f64, f64)> for Float128 {
    #[inline]
    fn from((hi, lo): (f64, f64)) -> Self {
        Self::from_parts(hi, lo)
    }
}

impl From<i64> for Float128 {
    #[inline]
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl From<i32> for Float128 {
    #[inline]
    fn from(value: i32) -> Self {
        Self::from_f64(value as f64)
    }
}

impl From<Float128> for f64 {
    #[inline]
    fn from(value: Float128) -> Self {
        value.to_f64()
    }
}
