//! Accurate linear combinations.
//!
//! [`linear_combination`] evaluates `sum(a[i] * b[i])` in roughly twice the
//! working precision using error-free transformations: each product is split
//! into its rounded value and exact rounding error with a fused multiply-add,
//! the running sum is kept with Knuth's two-sum, and the collected error
//! terms are added back once at the end (Ogita, Rump and Oishi's `Dot2`).

use crate::error::{QuaternionResult, check_dimension};

/// Computes `sum(a[i] * b[i])` with compensated summation.
///
/// The result is at least as accurate as the naive loop and is exact
/// whenever the true sum is representable and no intermediate overflows.
/// If the compensated result is `NaN` (infinite inputs make the error terms
/// meaningless) or zero (the sign of zero would be lost), the naive sum is
/// returned instead.
///
/// # Errors
///
/// Returns [`QuaternionError::DimensionMismatch`](crate::QuaternionError::DimensionMismatch)
/// if the slices have different lengths.
///
/// # Example
///
/// ```
/// use cf_quaternion::linear_combination;
///
/// let sum = linear_combination(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0])?;
/// assert_eq!(sum, 32.0);
///
/// // Catastrophic cancellation that the naive loop gets wrong
/// let big = 1e16;
/// let sum = linear_combination(&[big, 1.0, -big], &[1.0, 1.0, 1.0])?;
/// assert_eq!(sum, 1.0);
/// # Ok::<(), cf_quaternion::QuaternionError>(())
/// ```
pub fn linear_combination(a: &[f64], b: &[f64]) -> QuaternionResult<f64> {
    check_dimension(a.len(), b.len())?;

    let mut pairs = a.iter().zip(b);
    let Some((&a0, &b0)) = pairs.next() else {
        return Ok(0.0);
    };

    let (mut sum, mut error) = two_product(a0, b0);
    for (&ai, &bi) in pairs {
        let (product, product_error) = two_product(ai, bi);
        let (next, sum_error) = two_sum(sum, product);
        sum = next;
        error += sum_error + product_error;
    }

    let result = sum + error;
    if result.is_nan() || result == 0.0 {
        Ok(naive(a, b))
    } else {
        Ok(result)
    }
}

/// `a * b` as a rounded product plus its exact rounding error.
fn two_product(a: f64, b: f64) -> (f64, f64) {
    let product = a * b;
    (product, a.mul_add(b, -product))
}

/// `a + b` as a rounded sum plus its exact rounding error.
fn two_sum(a: f64, b: f64) -> (f64, f64) {
    let sum = a + b;
    let b_virtual = sum - a;
    let a_virtual = sum - b_virtual;
    (sum, (a - a_virtual) + (b - b_virtual))
}

fn naive(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| x * y)
        .reduce(|acc, product| acc + product)
        .unwrap_or(0.0)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::QuaternionError;

    #[test]
    fn test_empty() {
        assert_eq!(linear_combination(&[], &[]).unwrap(), 0.0);
    }

    #[test]
    fn test_single_term() {
        assert_eq!(linear_combination(&[3.0], &[-2.5]).unwrap(), -7.5);
    }

    #[test]
    fn test_integer_values_are_exact() {
        let a = [7.0, -1.0, 2.0];
        let b = [2.0, 1.0, 3.0];
        assert_eq!(linear_combination(&a, &b).unwrap(), 19.0);
    }

    #[test]
    fn test_length_mismatch() {
        let err = linear_combination(&[1.0, 2.0], &[1.0]).unwrap_err();
        assert_eq!(err, QuaternionError::dimension_mismatch(2, 1));
    }

    #[test]
    fn test_cancellation() {
        let big = 1e16;
        let a = [big, 1.0, -big];
        let b = [1.0, 1.0, 1.0];
        assert_ne!(naive(&a, &b), 1.0);
        assert_eq!(linear_combination(&a, &b).unwrap(), 1.0);
    }

    #[test]
    fn test_product_rounding_error_recovered() {
        // (1 + 2^-30)^2 - 1 - 2^-29 = 2^-60, invisible to the naive loop
        let x = 1.0 + 2f64.powi(-30);
        let a = [x, -1.0, -(2f64.powi(-29))];
        let b = [x, 1.0, 1.0];
        assert_eq!(naive(&a, &b), 0.0);
        assert_eq!(linear_combination(&a, &b).unwrap(), 2f64.powi(-60));
    }

    #[test]
    fn test_negative_zero_preserved() {
        let sum = linear_combination(&[-0.0], &[1.0]).unwrap();
        assert_eq!(sum, 0.0);
        assert!(sum.is_sign_negative());
    }

    #[test]
    fn test_infinite_input_falls_back_to_naive() {
        let sum = linear_combination(&[f64::INFINITY, 1.0], &[1.0, 1.0]).unwrap();
        assert_eq!(sum, f64::INFINITY);
    }

    #[test]
    fn test_nan_propagates() {
        let sum = linear_combination(&[f64::NAN, 1.0], &[1.0, 1.0]).unwrap();
        assert!(sum.is_nan());
    }
}
