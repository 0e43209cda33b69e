// ============================================================================
// Float128 Comparison
// Lexicographic ordering on (hi, lo)
// ============================================================================
//
// Each predicate spells out the lexicographic rule itself instead of going
// through `compare`, which keeps them to one or two float comparisons.
// All of them agree with `compare` for non-NaN operands.

use super::float128::Float128;
use std::cmp::Ordering;

impl Float128 {
    /// Three-way comparison: `hi` first, then `lo`.
    ///
    /// NaN lanes compare neither less nor greater, so they fall through to
    /// `Equal`. Use `partial_cmp` when NaN must be told apart.
    #[inline]
    pub fn compare(&self, other: &Self) -> Ordering {
        if self.hi() < other.hi() {
            return Ordering::Less;
        }
        if self.hi() > other.hi() {
            return Ordering::Greater;
        }
        if self.lo() < other.lo() {
            return Ordering::Less;
        }
        if self.lo() > other.lo() {
            return Ordering::Greater;
        }
        Ordering::Equal
    }

    /// `self < other`
    #[inline]
    pub fn is_lt(&self, other: &Self) -> bool {
        self.hi() < other.hi() || (self.hi() == other.hi() && self.lo() < other.lo())
    }

    /// `self <= other`
    #[inline]
    pub fn is_le(&self, other: &Self) -> bool {
        self.hi() < other.hi() || (self.hi() == other.hi() && self.lo() <= other.lo())
    }

    /// `self == other`
    #[inline]
    pub fn is_eq(&self, other: &Self) -> bool {
        self.hi() == other.hi() && self.lo() == other.lo()
    }

    /// `self >= other`
    #[inline]
    pub fn is_ge(&self, other: &Self) -> bool {
        self.hi() > other.hi() || (self.hi() == other.hi() && self.lo() >= other.lo())
    }

    /// `self > other`
    #[inline]
    pub fn is_gt(&self, other: &Self) -> bool {
        self.hi() > other.hi() || (self.hi() == other.hi() && self.lo() > other.lo())
    }

    /// `self != other`
    #[inline]
    pub fn is_ne(&self, other: &Self) -> bool {
        self.hi() != other.hi() || self.lo() != other.lo()
    }

    /// Returns the minimum of two values.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        if other.is_lt(&self) {
            other
        } else {
            self
        }
    }

    /// Returns the maximum of two values.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        if other.is_gt(&self) {
            other
        } else {
            self
        }
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl PartialEq for Float128 {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.is_eq(other)
    }
}

impl PartialOrd for Float128 {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.is_nan() || other.is_nan() || self.lo().is_nan() || other.lo().is_nan() {
            None
        } else {
            Some(self.compare(other))
        }
    }

    #[inline]
    fn lt(&self, other: &Self) -> bool {
        self.is_lt(other)
    }

    #[inline]
    fn le(&self, other: &Self) -> bool {
        self.is_le(other)
    }

    #[inline]
    fn gt(&self, other: &Self) -> bool {
        self.is_gt(other)
    }

    #[inline]
    fn ge(&self, other: &Self) -> bool {
        self.is_ge(other)
    }
}
