// ============================================================================
// Numeric Errors
// Error types for decimal parsing and formatting of Float128 values
// ============================================================================

use std::fmt;

/// Errors that can occur when converting a `Float128` to or from text.
///
/// Arithmetic never produces one of these: operators follow IEEE-754
/// propagation on the leading lane instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// A second '.' appeared in the mantissa
    DuplicateDecimalPoint,
    /// A '+' or '-' appeared after the first sign or after a digit
    SignAfterDigits,
    /// The mantissa contained no digits
    NoMantissaDigits,
    /// The token after 'e'/'E' is not a signed 32-bit integer
    MalformedExponent,
    /// The scanner stopped before the end of the input
    TrailingCharacters,
    /// NaN or infinity where a finite value is required
    NonFinite,
    /// Digit extraction could not normalize the value into [1, 10)
    ExponentOutOfRange,
    /// Digit extraction produced a leading digit <= 0
    NonPositiveLeadingDigit,
    /// Value does not fit in `rust_decimal::Decimal`
    DecimalOverflow,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::DuplicateDecimalPoint => write!(f, "multiple '.' symbols"),
            NumericError::SignAfterDigits => write!(f, "internal sign character"),
            NumericError::NoMantissaDigits => write!(f, "no mantissa digits"),
            NumericError::MalformedExponent => {
                write!(f, "malformed exponent: expected a signed integer")
            },
            NumericError::TrailingCharacters => {
                write!(f, "invalid input: unexpected characters after number")
            },
            NumericError::NonFinite => write!(f, "value is NaN or infinite"),
            NumericError::ExponentOutOfRange => {
                write!(f, "can't compute decimal exponent")
            },
            NumericError::NonPositiveLeadingDigit => {
                write!(f, "non-positive leading digit")
            },
            NumericError::DecimalOverflow => {
                write!(f, "value out of range for a 96-bit decimal")
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric conversions
pub type NumericResult<T> = Result<T, NumericError>;
