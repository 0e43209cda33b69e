// ============================================================================
// Format Configuration
// Layout of the scientific notation produced for Float128 values
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Significant digits a double-double can carry meaningfully.
pub const DEFAULT_PRECISION: usize = 32;

/// Width of the exponent field, sign included (`e+05`, `e-123`).
pub const DEFAULT_EXPONENT_WIDTH: usize = 3;

/// Configuration for rendering a `Float128` as text.
///
/// Output has the shape `±D.DDD…e±EE`: one leading digit, a point, then
/// `precision - 1` digits, then a signed exponent zero-padded to
/// `exponent_width` characters.
///
/// # Example
/// ```
/// use float128::{Float128, FormatConfig};
///
/// let config = FormatConfig::new().with_precision(5).with_plus_sign(false);
/// assert_eq!(Float128::from(1234.5).to_string_with(&config), "1.2345e+03");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FormatConfig {
    /// Number of significant digits (at least 1)
    pub precision: usize,

    /// Minimum width of the exponent field including its sign
    pub exponent_width: usize,

    /// Whether non-negative values get an explicit '+'
    pub plus_sign: bool,
}

impl FormatConfig {
    /// Create the default configuration: 32 digits, `e±EE`, explicit '+'.
    pub const fn new() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            exponent_width: DEFAULT_EXPONENT_WIDTH,
            plus_sign: true,
        }
    }

    /// Builder method: Set the number of significant digits (clamped to 1)
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision.max(1);
        self
    }

    /// Builder method: Set the exponent field width (sign included)
    pub fn with_exponent_width(mut self, width: usize) -> Self {
        self.exponent_width = width;
        self
    }

    /// Builder method: Show or hide the '+' on non-negative values
    pub fn with_plus_sign(mut self, plus_sign: bool) -> Self {
        self.plus_sign = plus_sign;
        self
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self::new()
    }
}
