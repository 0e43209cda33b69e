// ============================================================================
// Error-Free Transformations
// Exact sum/product decompositions on IEEE-754 doubles
// ============================================================================
//
// Every function here returns a pair `(r, e)` where `r` is the correctly
// rounded result and `e` the exact rounding error, so `r + e` equals the
// infinitely precise result. Correctness relies on round-to-nearest-even and
// on each operation being rounded separately: no fused multiply-add, no
// extended intermediate precision.

/// 2^27 + 1, splits a 53-bit significand into two 26-bit halves.
pub const SPLITTER: f64 = 134_217_729.0;

/// 2^996. Above this, `SPLITTER * a` can overflow.
pub const SPLIT_THRESHOLD: f64 = f64::from_bits(0x7e30_0000_0000_0000);

/// 2^-28
const SPLIT_DOWNSCALE: f64 = 3.725_290_298_461_914_062_5e-9;

/// 2^28
const SPLIT_UPSCALE: f64 = 268_435_456.0;

/// Computes `fl(a + b)` and its error, assuming `|a| >= |b|`.
#[inline]
pub fn quick_two_sum(a: f64, b: f64) -> (f64, f64) {
    let s = a + b;
    let err = b - (s - a);
    (s, err)
}

/// Computes `fl(a + b)` and its error for operands of any magnitude.
#[inline]
pub fn two_sum(a: f64, b: f64) -> (f64, f64) {
    let s = a + b;
    let bb = s - a;
    let err = (a - (s - bb)) + (b - bb);
    (s, err)
}

/// Computes `fl(a - b)` and its error.
#[inline]
pub fn two_diff(a: f64, b: f64) -> (f64, f64) {
    let s = a - b;
    let bb = s - a;
    let err = (a - (s - bb)) - (b + bb);
    (s, err)
}

/// Splits `a` into `(hi, lo)` with `hi + lo == a`, each half holding at most
/// 26 significant bits, so products of halves are exact.
///
/// Values beyond [`SPLIT_THRESHOLD`] are scaled down by 2^-28 first and the
/// halves scaled back up, which keeps `SPLITTER * a` finite.
#[inline]
pub fn split(a: f64) -> (f64, f64) {
    if a > SPLIT_THRESHOLD || a < -SPLIT_THRESHOLD {
        let a = a * SPLIT_DOWNSCALE;
        let temp = SPLITTER * a;
        let hi = temp - (temp - a);
        let lo = a - hi;
        (hi * SPLIT_UPSCALE, lo * SPLIT_UPSCALE)
    } else {
        let temp = SPLITTER * a;
        let hi = temp - (temp - a);
        let lo = a - hi;
        (hi, lo)
    }
}

/// Computes `fl(a * b)` and its error.
#[inline]
pub fn two_prod(a: f64, b: f64) -> (f64, f64) {
    let p = a * b;
    let (a_hi, a_lo) = split(a);
    let (b_hi, b_lo) = split(b);
    let err = ((a_hi * b_hi - p) + a_hi * b_lo + a_lo * b_hi) + a_lo * b_lo;
    (p, err)
}

/// Computes `fl(a * a)` and its error. One split instead of two.
#[inline]
pub fn two_sqr(a: f64) -> (f64, f64) {
    let q = a * a;
    let (hi, lo) = split(a);
    let err = ((hi * hi - q) + 2.0 * hi * lo) + lo * lo;
    (q, err)
}

// ============================================================================
// Exponent Scaling
// ============================================================================

/*
`ldexp` below is the `scalbn` routine from `rust-lang/libm` (itself from musl
src/math/scalbn.c), specialized to `f64`.

`rust-lang/libm` includes the following license:

rust-lang/libm as a whole is available for use under the MIT license:

------------------------------------------------------------------------------
Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
------------------------------------------------------------------------------
*/

const EXP_BIAS: i32 = 1023;
const EXP_MAX: i32 = 1023;
const EXP_MIN: i32 = -1022;

/// 2^1023
const F_EXP_MAX: f64 = f64::from_bits(0x7fe0_0000_0000_0000);

/// 2^-1022
const F_EXP_MIN: f64 = f64::from_bits(0x0010_0000_0000_0000);

/// 2^53, used to keep subnormal results from being rounded twice.
const F_POW_SUBNORM: f64 = f64::from_bits(0x4340_0000_0000_0000);

/// Computes `x * 2^n` exactly whenever the result is representable,
/// rounding once when it lands in the subnormal range.
pub fn ldexp(x: f64, n: i32) -> f64 {
    let mut y = x;
    let mut n = n;

    if n > EXP_MAX {
        y *= F_EXP_MAX;
        n -= EXP_MAX;
        if n > EXP_MAX {
            y *= F_EXP_MAX;
            n -= EXP_MAX;
            if n > EXP_MAX {
                n = EXP_MAX;
            }
        }
    } else if n < EXP_MIN {
        // Leave n below -53 so the final multiply does the only rounding.
        y *= F_EXP_MIN * F_POW_SUBNORM;
        n += -EXP_MIN - 53;
        if n < EXP_MIN {
            y *= F_EXP_MIN * F_POW_SUBNORM;
            n += -EXP_MIN - 53;
            if n < EXP_MIN {
                n = EXP_MIN;
            }
        }
    }

    y * f64::from_bits(((EXP_BIAS + n) as u64) << 52)
}
