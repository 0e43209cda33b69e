// ============================================================================
// Numeric Module
// Double-double extended precision arithmetic
// ============================================================================
//
// This module provides:
// - Float128: an unevaluated sum of two f64 values (~106-bit significand)
// - eft: error-free transforms (two_sum, two_prod, ...) everything else uses
// - FormatConfig: layout of the scientific notation produced for Float128
// - NumericError: Error types for parsing, formatting and conversion
//
// Design principles:
// - No heap allocation and no FMA: results are reproducible on every target
// - Arithmetic follows IEEE-754 propagation instead of returning Result
// - Text and Decimal conversions return Result

pub mod eft;

mod arithmetic;
mod cmp;
mod config;
mod decimal;
mod errors;
mod float128;
mod format;
mod parse;

pub use config::{FormatConfig, DEFAULT_EXPONENT_WIDTH, DEFAULT_PRECISION};
pub use errors::{NumericError, NumericResult};
pub use float128::Float128;
pub use format::Digits;
