//! Row-major predictor matrices.
//!
//! ## Purpose
//!
//! This module provides [`DesignMatrix`], the dense predictor block
//! handed to a model's predict operation: named columns flattened into a
//! single row-major buffer.
//!
//! ## Design notes
//!
//! * **Row-major**: A row is a contiguous slice, which is what a
//!   per-observation dot product wants.
//! * **Validated**: Construction fails if the source columns disagree in
//!   length.
//!
//! ## Invariants
//!
//! * `values.len() == n_rows * names.len()`.
//! * Column order matches the order of `names`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::string::String;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::EvalError;

// ============================================================================
// Design Matrix
// ============================================================================

/// A dense block of predictor values with named columns.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignMatrix<T> {
    names: Vec<String>,
    values: Vec<T>,
    n_rows: usize,
}

impl<T: Float> DesignMatrix<T> {
    /// Build a matrix from named columns, each of length `n_rows`.
    ///
    /// The row count is explicit so that an intercept-only model (no
    /// predictor columns at all) still knows how many observations to
    /// predict for.
    pub fn from_columns(columns: Vec<(String, Vec<T>)>, n_rows: usize) -> Result<Self, EvalError> {
        for (name, column) in &columns {
            if column.len() != n_rows {
                return Err(EvalError::MismatchedColumnLength {
                    name: name.clone(),
                    expected: n_rows,
                    got: column.len(),
                });
            }
        }

        // Flatten column-major input into a row-major buffer.
        let mut values = Vec::with_capacity(n_rows * columns.len());
        for row in 0..n_rows {
            for (_, column) in &columns {
                values.push(column[row]);
            }
        }

        let names = columns.into_iter().map(|(name, _)| name).collect();

        Ok(Self {
            names,
            values,
            n_rows,
        })
    }

    /// Number of observation rows.
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Number of predictor columns.
    pub fn n_predictors(&self) -> usize {
        self.names.len()
    }

    /// Ordered predictor column names.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Position of a named column, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// The predictor values of one observation row.
    pub fn row(&self, row: usize) -> &[T] {
        let width = self.names.len();
        let offset = row * width;
        &self.values[offset..offset + width]
    }
}
