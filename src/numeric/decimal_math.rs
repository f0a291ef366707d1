// ============================================================================
// Decimal Math
// Rounding-safe decimal arithmetic over f64
// ============================================================================

use super::errors::{NumericError, NumericResult};

/// Number of fractional digits i64 can scale (10^18 still fits).
const MAX_FRACTION_DIGITS: u32 = 18;

/// Compute 10^n, valid for n <= 18.
const fn pow10(n: u32) -> i64 {
    let mut result: i64 = 1;
    let mut i = 0;
    while i < n {
        result *= 10;
        i += 1;
    }
    result
}

/// A finite decimal split into an integer scaled by a power of ten.
///
/// `scaled / factor` reconstructs the input within display precision.
/// Built per operation and discarded immediately after.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Decomposition {
    /// The input with its decimal point shifted out, sign preserved.
    scaled: i64,
    /// Power-of-ten divisor (1 for whole numbers).
    factor: i64,
}

#[inline]
fn is_whole(x: f64) -> bool {
    x.floor() == x
}

#[inline]
fn ensure_finite(x: f64) -> NumericResult<()> {
    if x.is_finite() {
        Ok(())
    } else {
        Err(NumericError::NonFiniteInput)
    }
}

/// Split a finite value into `scaled / factor`.
///
/// The fractional digit count comes from the shortest round-trip decimal
/// form of the value (`Display` for f64 never uses exponent notation).
/// Values that were entered as short decimal literals decompose exactly;
/// a value produced by earlier lossy binary arithmetic decomposes with
/// however many digits its printed form carries.
fn decompose(x: f64) -> NumericResult<Decomposition> {
    if is_whole(x) {
        if x.abs() >= i64::MAX as f64 {
            return Err(NumericError::Overflow);
        }
        return Ok(Decomposition {
            scaled: x as i64,
            factor: 1,
        });
    }

    let repr = x.to_string();
    let fraction_digits = match repr.split_once('.') {
        Some((_, fraction)) => fraction.len() as u32,
        None => 0,
    };
    if fraction_digits > MAX_FRACTION_DIGITS {
        return Err(NumericError::Overflow);
    }
    let factor = pow10(fraction_digits);

    // The scaling multiply itself rounds (0.16344556 * 10^8 lands on
    // 16344555.999...), so bias by half a unit before truncating. The
    // shortest round-trip form carries at most 17 significant digits, so
    // the magnitude fits i64.
    let magnitude = (x.abs() * factor as f64 + 0.5) as i64;
    let scaled = if x < 0.0 { -magnitude } else { magnitude };

    Ok(Decomposition { scaled, factor })
}

/// Bring both terms to the larger of the two factors.
///
/// Both factors are powers of ten, so the ratios are exact integers.
#[inline]
fn rescale(x: Decomposition, y: Decomposition) -> (i128, i128, i64) {
    let factor = x.factor.max(y.factor);
    let lhs = x.scaled as i128 * (factor / x.factor) as i128;
    let rhs = y.scaled as i128 * (factor / y.factor) as i128;
    (lhs, rhs, factor)
}

/// Add two decimals without binary rounding error.
///
/// # Errors
/// Returns `NonFiniteInput` if either operand is NaN or infinite, and
/// `Overflow` if an operand cannot be scaled within i64 range.
///
/// # Example
/// ```
/// use ruler_scale::numeric::add;
///
/// assert_eq!(add(0.1, 0.2).unwrap(), 0.3);
/// ```
pub fn add(a: f64, b: f64) -> NumericResult<f64> {
    ensure_finite(a)?;
    ensure_finite(b)?;
    if is_whole(a) && is_whole(b) {
        return Ok(a + b);
    }
    let (lhs, rhs, factor) = rescale(decompose(a)?, decompose(b)?);
    Ok((lhs + rhs) as f64 / factor as f64)
}

/// Subtract `b` from `a` without binary rounding error.
///
/// # Errors
/// Same conditions as [`add`].
pub fn subtract(a: f64, b: f64) -> NumericResult<f64> {
    ensure_finite(a)?;
    ensure_finite(b)?;
    if is_whole(a) && is_whole(b) {
        return Ok(a - b);
    }
    let (lhs, rhs, factor) = rescale(decompose(a)?, decompose(b)?);
    Ok((lhs - rhs) as f64 / factor as f64)
}

/// Multiply two decimals without binary rounding error.
///
/// The scaled integers multiply in i128, so no intermediate precision is
/// lost before the single final division.
///
/// # Errors
/// Same conditions as [`add`].
///
/// # Example
/// ```
/// use ruler_scale::numeric::multiply;
///
/// assert_eq!(multiply(19.9, 100.0).unwrap(), 1990.0);
/// ```
pub fn multiply(a: f64, b: f64) -> NumericResult<f64> {
    ensure_finite(a)?;
    ensure_finite(b)?;
    if is_whole(a) && is_whole(b) {
        return Ok(a * b);
    }
    let x = decompose(a)?;
    let y = decompose(b)?;
    let product = x.scaled as i128 * y.scaled as i128;
    let divisor = x.factor as i128 * y.factor as i128;
    Ok(product as f64 / divisor as f64)
}

/// Divide `a` by `b` at decimal precision.
///
/// Quotients rarely terminate, so the final division stays in floats.
/// Division by zero keeps IEEE semantics: the result is ±infinity or NaN,
/// not an error.
///
/// # Errors
/// Same conditions as [`add`].
pub fn divide(a: f64, b: f64) -> NumericResult<f64> {
    ensure_finite(a)?;
    ensure_finite(b)?;
    if is_whole(a) && is_whole(b) {
        return Ok(a / b);
    }
    let x = decompose(a)?;
    let y = decompose(b)?;
    Ok((x.scaled as f64 / y.scaled as f64) * (y.factor as f64 / x.factor as f64))
}

// ============================================================================
// Tests
// ============================================================================


#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    /// Reparse a value's shortest decimal form as an exact decimal.
    fn exact(value: f64) -> Decimal {
        Decimal::from_str(&value.to_string()).unwrap()
    }

    proptest! {
        #[test]
        fn integer_addition_is_plain(
            a in -1_000_000i64..1_000_000,
            b in -1_000_000i64..1_000_000,
        ) {
            prop_assert_eq!(add(a as f64, b as f64).unwrap(), (a + b) as f64);
        }

        #[test]
        fn addition_matches_exact_decimal(
            a in -1_000_000i64..1_000_000,
            b in -1_000_000i64..1_000_000,
        ) {
            let x = a as f64 / 100.0;
            let y = b as f64 / 100.0;
            let sum = add(x, y).unwrap();
            prop_assert_eq!(exact(sum), exact(x) + exact(y));
        }

        #[test]
        fn subtraction_matches_exact_decimal(
            a in -1_000_000i64..1_000_000,
            b in -1_000_000i64..1_000_000,
        ) {
            let x = a as f64 / 100.0;
            let y = b as f64 / 100.0;
            let difference = subtract(x, y).unwrap();
            prop_assert_eq!(exact(difference), exact(x) - exact(y));
        }

        #[test]
        fn multiplication_matches_exact_decimal(
            a in -10_000i64..10_000,
            b in -10_000i64..10_000,
        ) {
            let x = a as f64 / 100.0;
            let y = b as f64 / 100.0;
            let product = multiply(x, y).unwrap();
            prop_assert_eq!(exact(product), exact(x) * exact(y));
        }

        #[test]
        fn addition_commutes(
            a in -1_000_000i64..1_000_000,
            b in -1_000_000i64..1_000_000,
        ) {
            let x = a as f64 / 100.0;
            let y = b as f64 / 100.0;
            prop_assert_eq!(add(x, y).unwrap(), add(y, x).unwrap());
        }
    }
}
