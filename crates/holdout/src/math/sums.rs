//! Sum-of-squares arithmetic for R² computation.
//!
//! This module provides the textbook pieces of the coefficient of
//! determination: the mean, the residual sum of squares, and the total
//! sum of squares. All functions are generic over `Float` types.

// External dependencies
use num_traits::Float;

/// Compute the arithmetic mean of a slice.
///
/// Returns zero for an empty slice.
pub fn mean<T: Float>(values: &[T]) -> T {
    if values.is_empty() {
        return T::zero();
    }
    let n = T::from(values.len()).unwrap_or(T::one());
    let sum = values.iter().copied().fold(T::zero(), |acc, v| acc + v);
    sum / n
}

/// Compute the residual sum of squares.
/// SS_res = sum (y_i - y_hat_i)^2.
pub fn residual_sum_of_squares<T: Float>(truth: &[T], predicted: &[T]) -> T {
    truth
        .iter()
        .zip(predicted.iter())
        .fold(T::zero(), |acc, (&yi, &pi)| {
            let r = yi - pi;
            acc + r * r
        })
}

/// Compute the total sum of squares about a given mean.
/// SS_tot = sum (y_i - mean)^2.
pub fn total_sum_of_squares<T: Float>(truth: &[T], mean: T) -> T {
    truth.iter().fold(T::zero(), |acc, &yi| {
        let d = yi - mean;
        acc + d * d
    })
}

/// Compute R² from the two sums.
/// R² = 1 - SS_res / SS_tot.
///
/// Returns `None` when SS_tot is exactly zero: a constant response has no
/// variance to explain and R² is mathematically undefined, not zero.
pub fn r_squared_from_sums<T: Float>(ss_res: T, ss_tot: T) -> Option<T> {
    if ss_tot == T::zero() {
        None
    } else {
        Some(T::one() - ss_res / ss_tot)
    }
}
