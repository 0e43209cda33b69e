// ============================================================================
// Float128 Library
// Double-double extended precision floating point built from pairs of f64
// ============================================================================

//! # Float128
//!
//! Extended precision arithmetic on the unevaluated sum of two `f64` values,
//! giving roughly 106 bits of significand (about 32 decimal digits) with the
//! exponent range of an ordinary double.
//!
//! ## Features
//!
//! - **Error-free transforms** (`two_sum`, `two_prod`, ...) without FMA, so
//!   results are bit-for-bit identical across targets
//! - **Operators** for `+ - * /`, integer powers, `abs`, `floor` and exact
//!   power-of-two scaling, with the usual `std::ops` traits
//! - **Decimal text** in both directions: `FromStr` keeps every digit of long
//!   literals, `Display` prints 32 significant digits in scientific notation
//! - **`rust_decimal` interop** at API boundaries, and optional `serde`
//!
//! ## Example
//!
//! ```rust
//! use float128::prelude::*;
//!
//! // 0.1 is not a double, but "0.1" parses to 32 correct digits
//! let tenth: Float128 = "0.1".parse().unwrap();
//! let sum: Float128 = std::iter::repeat(tenth).take(10).sum();
//! assert!((sum - Float128::ONE).abs() < Float128::from(1e-30));
//!
//! // Printing uses 32 significant digits unless a precision is given
//! let third = Float128::ONE / Float128::from(3.0);
//! assert_eq!(third.to_string(), "+3.3333333333333333333333333333333e-01");
//! assert_eq!(format!("{:.5}", third), "+3.3333e-01");
//!
//! // Layout can be configured explicitly
//! let config = FormatConfig::new().with_precision(3).with_plus_sign(false);
//! assert_eq!(Float128::from(6561.0).to_string_with(&config), "6.56e+03");
//! ```

pub mod numeric;

pub use numeric::{Float128, FormatConfig, NumericError, NumericResult};

// Re-exports for convenience
pub mod prelude {
    pub use crate::numeric::{
        Float128, FormatConfig, NumericError, NumericResult, DEFAULT_PRECISION,
    };
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use std::cmp::Ordering;

    fn parse(s: &str) -> Float128 {
        s.parse().unwrap()
    }

    /// Operand pairs that differ in the last of 32 significant digits, and
    /// the ordering of the first against the second.
    const COMPARE_TABLE: &[(&str, &str, Ordering)] = &[
        (
            "-1.0000000000000000000000000000001e+200",
            "-1.0000000000000000000000000000000e+200",
            Ordering::Less,
        ),
        (
            "-1.0000000000000000000000000000000e+200",
            "-1.0000000000000000000000000000001e+200",
            Ordering::Greater,
        ),
        ("-2", "-1", Ordering::Less),
        ("-1", "-2", Ordering::Greater),
        (
            "-1.0000000000000000000000000000001e-200",
            "-1.0000000000000000000000000000000e-200",
            Ordering::Less,
        ),
        (
            "-1.0000000000000000000000000000000e-200",
            "-1.0000000000000000000000000000001e-200",
            Ordering::Greater,
        ),
        ("0", "0", Ordering::Equal),
        (
            "+1.0000000000000000000000000000001e-200",
            "+1.0000000000000000000000000000000e-200",
            Ordering::Greater,
        ),
        (
            "+1.0000000000000000000000000000000e-200",
            "+1.0000000000000000000000000000001e-200",
            Ordering::Less,
        ),
        ("+2", "+1", Ordering::Greater),
        ("+1", "+2", Ordering::Less),
        (
            "+1.0000000000000000000000000000001e+200",
            "+1.0000000000000000000000000000000e+200",
            Ordering::Greater,
        ),
        (
            "+1.0000000000000000000000000000000e+200",
            "+1.0000000000000000000000000000001e+200",
            Ordering::Less,
        ),
        (
            "3.1415926535897932384626433832795",
            "3.1415926535897932384626433832796",
            Ordering::Less,
        ),
    ];

    #[test]
    fn test_compare_table() {
        for (i, (x, y, expected)) in COMPARE_TABLE.iter().enumerate() {
            let (a, b) = (parse(x), parse(y));
            assert_eq!(a.compare(&b), *expected, "#{}: {} vs {}", i, x, y);
        }
    }

    #[test]
    fn test_predicate_tables() {
        for (i, (x, y, ord)) in COMPARE_TABLE.iter().enumerate() {
            let (a, b) = (parse(x), parse(y));
            assert_eq!(a.is_lt(&b), *ord == Ordering::Less, "#{} LT", i);
            assert_eq!(a.is_le(&b), *ord != Ordering::Greater, "#{} LE", i);
            assert_eq!(a.is_eq(&b), *ord == Ordering::Equal, "#{} EQ", i);
            assert_eq!(a.is_ge(&b), *ord != Ordering::Less, "#{} GE", i);
            assert_eq!(a.is_gt(&b), *ord == Ordering::Greater, "#{} GT", i);
            assert_eq!(a.is_ne(&b), *ord != Ordering::Equal, "#{} NE", i);
        }
    }

    #[test]
    fn test_repeated_multiplication_is_exact() {
        let three = Float128::from(3.0);
        let mut x = Float128::ONE;
        for _ in 0..8 {
            x *= three;
        }
        assert_eq!(x.to_parts(), (6561.0, 0.0));
        assert_eq!(x, three.powi(8));
    }

    #[test]
    fn test_set_parts() {
        let x = Float128::from_parts(1.0, 2.0);
        assert_eq!(x.to_parts(), (1.0, 2.0));
        let y: Float128 = (1.0, 2.0).into();
        assert_eq!(x.to_parts(), y.to_parts());
    }

    #[test]
    fn test_parse_small_literal() {
        let x = parse("16777216e-30");
        assert_eq!(x.hi(), 16777216e-30);
    }

    #[test]
    fn test_pi_survives_text_round_trip() {
        let pi = parse("3.1415926535897932384626433832795");
        assert_eq!(pi.to_string(), "+3.1415926535897932384626433832795e+00");
        assert_eq!(parse(&pi.to_string()), pi);
    }

    #[test]
    fn test_decimal_boundary() {
        let price = rust_decimal::Decimal::new(5_000_025, 2); // 50000.25
        let x = Float128::from(price) * Float128::from(4.0);
        assert_eq!(x.to_decimal().unwrap(), rust_decimal::Decimal::from(200_001));
    }
}
