// ============================================================================
// Float128 Arithmetic
// Operators built from the error-free transformations
// ============================================================================
//
// None of these fail. A non-finite leading result short-circuits to
// `(result, 0)` so infinities and NaN behave as they do on a plain f64;
// without that, the error terms would turn every overflow into NaN.

use super::eft::{ldexp, quick_two_sum, two_diff, two_prod, two_sqr, two_sum};
use super::float128::Float128;
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

impl Float128 {
    // ========================================================================
    // Core Operations
    // ========================================================================

    /// Double-double addition, relative error about 2^-104.
    #[inline]
    fn add_impl(self, rhs: Self) -> Self {
        let (s1, s2) = two_sum(self.hi(), rhs.hi());
        if !s1.is_finite() {
            return Self::from_f64(s1);
        }
        let (t1, t2) = two_sum(self.lo(), rhs.lo());
        let s2 = s2 + t1;
        let (s1, s2) = quick_two_sum(s1, s2);
        let s2 = s2 + t2;
        let (hi, lo) = quick_two_sum(s1, s2);
        Self::from_parts(hi, lo)
    }

    /// Same structure as `add_impl` with `two_diff` on both lanes.
    #[inline]
    fn sub_impl(self, rhs: Self) -> Self {
        let (s1, s2) = two_diff(self.hi(), rhs.hi());
        if !s1.is_finite() {
            return Self::from_f64(s1);
        }
        let (t1, t2) = two_diff(self.lo(), rhs.lo());
        let s2 = s2 + t1;
        let (s1, s2) = quick_two_sum(s1, s2);
        let s2 = s2 + t2;
        let (hi, lo) = quick_two_sum(s1, s2);
        Self::from_parts(hi, lo)
    }

    #[inline]
    fn mul_impl(self, rhs: Self) -> Self {
        let (p1, p2) = two_prod(self.hi(), rhs.hi());
        if !p1.is_finite() {
            return Self::from_f64(p1);
        }
        let p2 = p2 + (self.hi() * rhs.lo() + self.lo() * rhs.hi());
        let (hi, lo) = quick_two_sum(p1, p2);
        Self::from_parts(hi, lo)
    }

    /// Long division with three quotient estimates. Each residual
    /// `a - q*b` is formed in double-double, and the next estimate is its
    /// leading lane over `b.hi`. The order of operations here determines the
    /// achieved precision; keep it.
    #[inline]
    fn div_impl(self, rhs: Self) -> Self {
        let b = rhs;
        let q1 = self.hi() / b.hi();
        if !q1.is_finite() || !b.hi().is_finite() {
            return Self::from_f64(q1);
        }

        // r = a - q1*b
        let mut r = self - Self::from_f64(q1) * b;

        // r -= q2*b
        let q2 = r.hi() / b.hi();
        r -= Self::from_f64(q2) * b;

        let q3 = r.hi() / b.hi();

        let (hi, lo) = quick_two_sum(q1, q2);
        Self::from_parts(hi, lo) + Self::from_f64(q3)
    }

    // ========================================================================
    // Powers
    // ========================================================================

    /// Square, cheaper than `self * self`.
    #[inline]
    pub fn sqr(self) -> Self {
        let (p1, p2) = two_sqr(self.hi());
        if !p1.is_finite() {
            return Self::from_f64(p1);
        }
        let p2 = p2 + 2.0 * self.hi() * self.lo();
        let p2 = p2 + self.lo() * self.lo();
        let (hi, lo) = quick_two_sum(p1, p2);
        Self::from_parts(hi, lo)
    }

    /// Square in place.
    #[inline]
    pub fn sqr_assign(&mut self) {
        *self = self.sqr();
    }

    /// Integer power by binary exponentiation.
    ///
    /// `0^0` is NaN and `x^0` is one for any other `x`. Negative exponents
    /// take the reciprocal of the positive power.
    ///
    /// # Example
    /// ```
    /// use float128::Float128;
    ///
    /// let x = Float128::from(3.0).powi(8);
    /// assert_eq!(x, Float128::from(6561.0));
    /// ```
    pub fn powi(self, n: i64) -> Self {
        if n == 0 {
            return if self.is_zero() { Self::NAN } else { Self::ONE };
        }

        let mut r = self;
        let mut s = Self::ONE;
        let mut bits = n.unsigned_abs();

        if bits > 1 {
            // s holds self^(bits consumed so far), r the next square
            while bits > 0 {
                if bits & 1 == 1 {
                    s *= r;
                }
                bits >>= 1;
                if bits > 0 {
                    r = r.sqr();
                }
            }
        } else {
            s = r;
        }

        if n < 0 {
            Self::ONE / s
        } else {
            s
        }
    }

    /// Raise to an integer power in place.
    #[inline]
    pub fn powi_assign(&mut self, n: i64) {
        *self = self.powi(n);
    }

    // ========================================================================
    // Sign and Scaling
    // ========================================================================

    /// Absolute value. Both lanes flip when `hi` is negative.
    #[inline]
    pub fn abs(self) -> Self {
        if self.hi() < 0.0 {
            -self
        } else {
            self
        }
    }

    #[inline]
    pub fn abs_assign(&mut self) {
        *self = self.abs();
    }

    #[inline]
    pub fn neg_assign(&mut self) {
        *self = -*self;
    }

    /// Multiply by `2^exp`. Exact unless a lane leaves the normal range.
    #[inline]
    pub fn ldexp(self, exp: i32) -> Self {
        let hi = ldexp(self.hi(), exp);
        if !hi.is_finite() {
            return Self::from_f64(hi);
        }
        Self::from_parts(hi, ldexp(self.lo(), exp))
    }

    #[inline]
    pub fn ldexp_assign(&mut self, exp: i32) {
        *self = self.ldexp(exp);
    }

    /// Multiply both lanes by `b`, which must be a power of two.
    #[inline]
    pub fn mul_pwr2(self, b: f64) -> Self {
        debug_assert!(!b.is_normal() || b.to_bits() & 0x000f_ffff_ffff_ffff == 0);
        let hi = self.hi() * b;
        if !hi.is_finite() {
            return Self::from_f64(hi);
        }
        Self::from_parts(hi, self.lo() * b)
    }

    // ========================================================================
    // Rounding
    // ========================================================================

    /// Largest integer not greater than `self`.
    pub fn floor(self) -> Self {
        let hi = self.hi().floor();
        if !hi.is_finite() {
            return Self::from_f64(hi);
        }
        if hi == self.hi() {
            // integral leading lane, the fraction (if any) is in lo
            let (hi, lo) = quick_two_sum(hi, self.lo().floor());
            Self::from_parts(hi, lo)
        } else {
            Self::from_f64(hi)
        }
    }

    /// Round toward zero.
    pub fn trunc(self) -> Self {
        if self.is_negative() {
            -(-self).floor()
        } else {
            self.floor()
        }
    }
}

// ============================================================================
// Operator Traits
// ============================================================================

impl Neg for Float128 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self::from_parts(-self.hi(), -self.lo())
    }
}

impl Neg for &Float128 {
    type Output = Float128;

    #[inline]
    fn neg(self) -> Self::Output {
        -*self
    }
}

/// Implements a binary operator for every owned/borrowed operand combination,
/// plus the matching compound assignment.
macro_rules! impl_binop {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $imp:ident) => {
        impl $Op for Float128 {
            type Output = Float128;

            #[inline]
            fn $op(self, rhs: Float128) -> Float128 {
                self.$imp(rhs)
            }
        }

        impl $Op<&Float128> for Float128 {
            type Output = Float128;

            #[inline]
            fn $op(self, rhs: &Float128) -> Float128 {
                self.$imp(*rhs)
            }
        }

        impl $Op<Float128> for &Float128 {
            type Output = Float128;

            #[inline]
            fn $op(self, rhs: Float128) -> Float128 {
                (*self).$imp(rhs)
            }
        }

        impl $Op<&Float128> for &Float128 {
            type Output = Float128;

            #[inline]
            fn $op(self, rhs: &Float128) -> Float128 {
                (*self).$imp(*rhs)
            }
        }

        impl $OpAssign for Float128 {
            #[inline]
            fn $op_assign(&mut self, rhs: Float128) {
                *self = self.$imp(rhs);
            }
        }

        impl $OpAssign<&Float128> for Float128 {
            #[inline]
            fn $op_assign(&mut self, rhs: &Float128) {
                *self = self.$imp(*rhs);
            }
        }
    };
}

impl_binop!(Add, add, AddAssign, add_assign, add_impl);
impl_binop!(Sub, sub, SubAssign, sub_assign, sub_impl);
impl_binop!(Mul, mul, MulAssign, mul_assign, mul_impl);
impl_binop!(Div, div, DivAssign, div_assign, div_impl);

impl Sum for Float128 {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a Float128> for Float128 {
    fn sum<I: Iterator<Item = &'a Float128>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

impl Product for Float128 {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, x| acc * x)
    }
}

impl<'a> Product<&'a Float128> for Float128 {
    fn product<I: Iterator<Item = &'a Float128>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, x| acc * x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ff(x: f64) -> Float128 {
        Float128::from(x)
    }

    #[test]
    fn test_add_keeps_low_bits() {
        let x = ff(1.0) + ff(1e-20);
        assert_eq!(x.to_parts(), (1.0, 1e-20));
        let y = x - ff(1.0);
        assert_eq!(y.to_parts(), (1e-20, 0.0));
    }

    #[test]
    fn test_add_is_symmetric() {
        let a = ff(1.0) / ff(3.0);
        let b = ff(-2.0) / ff(7.0);
        assert_eq!((a + b).to_parts(), (b + a).to_parts());
    }

    #[test]
    fn test_sub_matches_add_of_negation() {
        let a = ff(1.0) / ff(3.0);
        let b = ff(1.0) / ff(7.0);
        assert_eq!((a - b).to_parts(), (a + -b).to_parts());
    }

    #[test]
    fn test_mul_repeated_is_exact() {
        let mut a = ff(1.0);
        let b = ff(3.0);
        for _ in 0..8 {
            a *= b;
        }
        assert_eq!(a.to_parts(), (6561.0, 0.0));
    }

    #[test]
    fn test_sqr_beyond_double_precision() {
        // (2^27 + 1)^2 = 2^54 + 2^28 + 1 needs 55 bits
        let a = ff(2f64.powi(27) + 1.0);
        let sq = a.sqr();
        assert_eq!(sq.hi(), 2f64.powi(54) + 2f64.powi(28));
        assert_eq!(sq.lo(), 1.0);
        assert_eq!((a * a).to_parts(), sq.to_parts());
    }

    #[test]
    fn test_div_third() {
        let third = ff(1.0) / ff(3.0);
        assert_eq!(third.hi(), 1.0 / 3.0);
        // 1/3 - hi = 1/(3 * 2^54)
        let expected_lo = 1.0 / 3.0 / 2f64.powi(54);
        assert!((third.lo() - expected_lo).abs() <= 2f64.powi(-104));
        let back = third * ff(3.0);
        assert!((back - ff(1.0)).abs().hi() <= 2f64.powi(-104));
    }

    #[test]
    fn test_div_exact_quotient() {
        let q = ff(6561.0) / ff(81.0);
        assert_eq!(q.to_parts(), (81.0, 0.0));
    }

    #[test]
    fn test_div_by_zero_and_infinity() {
        assert!((ff(1.0) / ff(0.0)).is_inf_signed(1));
        assert!((ff(-1.0) / ff(0.0)).is_inf_signed(-1));
        assert!((ff(0.0) / ff(0.0)).is_nan());
        assert!((ff(1.0) / Float128::INFINITY).is_zero());
        assert!((Float128::INFINITY / Float128::INFINITY).is_nan());
    }

    #[test]
    fn test_non_finite_propagation() {
        let inf = Float128::INFINITY;
        assert!((inf + ff(1.0)).is_inf_signed(1));
        assert!((inf - inf).is_nan());
        assert!((inf * ff(-2.0)).is_inf_signed(-1));
        assert!((Float128::NAN + ff(1.0)).is_nan());
        assert!((ff(f64::MAX) + ff(f64::MAX)).is_inf_signed(1));
        assert_eq!((inf * ff(2.0)).lo(), 0.0);
        assert!(inf.sqr().is_inf_signed(1));
    }

    #[test]
    fn test_powi_edge_cases() {
        assert!(Float128::ZERO.powi(0).is_nan());
        assert!(ff(5.0).powi(0).is_one());
        assert!(ff(-0.5).powi(0).is_one());
        assert_eq!(ff(7.0).powi(1).to_parts(), (7.0, 0.0));
        assert_eq!(ff(2.0).powi(-1).to_parts(), (0.5, 0.0));
        assert_eq!(ff(2.0).powi(100).to_parts(), (2f64.powi(100), 0.0));
        assert_eq!(ff(-3.0).powi(3).to_parts(), (-27.0, 0.0));
    }

    #[test]
    fn test_powi_negative_is_reciprocal() {
        let x = ff(1.1);
        for n in [2, 3, 7, 10, 31] {
            let lhs = x.powi(-n);
            let rhs = Float128::ONE / x.powi(n);
            assert_eq!(lhs.to_parts(), rhs.to_parts());
        }
    }

    #[test]
    fn test_powi_ten() {
        // 10^22 is the largest power of ten that is an exact double
        assert_eq!(Float128::TEN.powi(22).to_parts(), (1e22, 0.0));
        // 10^23 = 2^23 * 5^23 needs 54 bits of significand
        let p = Float128::TEN.powi(23);
        assert_eq!(p.hi() as i128 + p.lo() as i128, 10i128.pow(23));
    }

    #[test]
    fn test_powi_min_exponent() {
        assert!(ff(2.0).powi(i64::MIN).is_zero());
        assert!(ff(1.0).powi(i64::MIN).is_one());
    }

    #[test]
    fn test_in_place_variants() {
        let mut x = ff(-3.0);
        x.abs_assign();
        assert_eq!(x.to_parts(), (3.0, 0.0));
        x.sqr_assign();
        assert_eq!(x.to_parts(), (9.0, 0.0));
        x.powi_assign(2);
        assert_eq!(x.to_parts(), (81.0, 0.0));
        x.neg_assign();
        assert_eq!(x.to_parts(), (-81.0, 0.0));
        x.ldexp_assign(-4);
        assert_eq!(x.to_parts(), (-5.0625, 0.0));
        x /= &ff(-5.0625);
        assert!(x.is_one());
    }

    #[test]
    fn test_abs_neg() {
        let x = Float128::from_parts(-1.0, 1e-20);
        assert_eq!(x.abs().to_parts(), (1.0, -1e-20));
        assert_eq!((-x).to_parts(), (1.0, -1e-20));
        assert_eq!((-&x).to_parts(), (1.0, -1e-20));
    }

    #[test]
    fn test_ldexp_and_mul_pwr2() {
        let x = ff(1.0) / ff(3.0);
        let y = x.ldexp(10);
        assert_eq!(y.to_parts(), (x.hi() * 1024.0, x.lo() * 1024.0));
        assert_eq!(x.mul_pwr2(1024.0).to_parts(), y.to_parts());
        assert_eq!(y.ldexp(-10).to_parts(), x.to_parts());
    }

    #[test]
    fn test_scaling_overflow_clears_low_lane() {
        let x = Float128::from_parts(f64::MAX / 1.5, 1e290);
        assert_eq!(x.mul_pwr2(2.0).to_parts(), (f64::INFINITY, 0.0));
        assert_eq!(x.ldexp(1).to_parts(), (f64::INFINITY, 0.0));
        assert_eq!((-x).ldexp(5).to_parts(), (f64::NEG_INFINITY, 0.0));
        assert!(Float128::NAN.ldexp(3).is_nan());
        assert_eq!(Float128::NAN.mul_pwr2(0.5).lo(), 0.0);
    }

    #[test]
    fn test_floor_and_trunc() {
        assert_eq!(ff(2.5).floor().to_parts(), (2.0, 0.0));
        assert_eq!(ff(-2.5).floor().to_parts(), (-3.0, 0.0));
        // 2^60 - 0.5: hi is integral, fraction lives in lo
        let x = Float128::from_parts(2f64.powi(60), -0.5);
        assert_eq!(x.floor().to_parts(), (2f64.powi(60), -1.0));
        assert_eq!(x.trunc().to_parts(), (2f64.powi(60), -1.0));
        assert_eq!((-x).trunc().to_parts(), (-(2f64.powi(60)), 1.0));
        assert_eq!(ff(-2.5).trunc().to_parts(), (-2.0, 0.0));
        assert!(Float128::INFINITY.floor().is_inf_signed(1));
    }

    #[test]
    fn test_reference_operands() {
        let a = ff(2.0);
        let b = ff(0.5);
        assert_eq!((&a * &b).to_parts(), (1.0, 0.0));
        assert_eq!((a - &b).to_parts(), (1.5, 0.0));
        assert_eq!((&a + b).to_parts(), (2.5, 0.0));
        assert_eq!((&a / b).to_parts(), (4.0, 0.0));
    }

    #[test]
    fn test_sum_and_product() {
        let tenths = vec![ff(0.1); 10];
        let total: Float128 = tenths.iter().sum();
        // ten copies of the double 0.1 add up exactly in double-double
        // 0.1 is 3602879701896397 / 2^55, so ten of them make 1 + 2^-54
        assert_eq!(total.hi(), 1.0);
        assert_eq!(total.lo(), 2f64.powi(-54));

        let p: Float128 = (1..=20).map(|i| Float128::from(i as f64)).product();
        assert_eq!(p.hi() as i128 + p.lo() as i128, (1..=20i128).product());
    }
}
