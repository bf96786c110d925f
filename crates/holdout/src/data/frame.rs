//! Named-column data frames with missing-value support.
//!
//! ## Purpose
//!
//! This module provides [`Frame`], the tabular input to out-of-sample
//! evaluation: an ordered collection of named columns with row-aligned
//! values, where individual cells may be missing.
//!
//! ## Design notes
//!
//! * **Validated**: Column lengths are checked at insertion, never later.
//! * **Missing values**: Cells are `Option<T>`; a stored non-finite value
//!   is treated as missing during completeness filtering.
//! * **Read-only**: Once built, a frame is never mutated by evaluation.
//! * **Generics**: Cell values are generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Completeness filtering**: `complete_rows` returns the indices of
//!   rows with a present, finite value in every named column.
//! * **Gathering**: `gather` extracts a named column at a set of row
//!   indices as a dense vector.
//!
//! ## Invariants
//!
//! * All columns in a frame have the same length.
//! * Column names are unique; inserting an existing name replaces it.
//! * Indices returned by `complete_rows` are strictly increasing.
//!
//! ## Non-goals
//!
//! * This module does not load, parse, or persist data.
//! * This module does not perform type coercion between column types.

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
// Column
// ============================================================================

/// A single named column of optionally-missing values.
#[derive(Debug, Clone, PartialEq)]
struct Column<T> {
    name: String,
    values: Vec<Option<T>>,
}

// ============================================================================
// Frame
// ============================================================================

/// A table of named, row-aligned columns.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Frame<T> {
    columns: Vec<Column<T>>,
}

impl<T: Float> Frame<T> {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create an empty frame with no columns and no rows.
    pub fn new() -> Self {
        Self {
            columns: Vec::new(),
        }
    }

    /// Add a column of optionally-missing values.
    ///
    /// The first column establishes the frame's row count; every later
    /// column must match it. Inserting a name that already exists
    /// replaces the previous column.
    pub fn with_column(
        mut self,
        name: impl Into<String>,
        values: Vec<Option<T>>,
    ) -> Result<Self, EvalError> {
        let name = name.into();
        if !self.columns.is_empty() && values.len() != self.n_rows() {
            return Err(EvalError::MismatchedColumnLength {
                name,
                expected: self.n_rows(),
                got: values.len(),
            });
        }
        self.columns.retain(|c| c.name != name);
        self.columns.push(Column { name, values });
        Ok(self)
    }

    /// Add a column with no missing values.
    pub fn with_dense_column(
        self,
        name: impl Into<String>,
        values: Vec<T>,
    ) -> Result<Self, EvalError> {
        self.with_column(name, values.into_iter().map(Some).collect())
    }

    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Number of rows in the frame (zero when there are no columns).
    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, |c| c.values.len())
    }

    /// Number of columns in the frame.
    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// Check whether a column with the given name exists.
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }

    /// Get the cells of a named column, if present.
    pub fn column(&self, name: &str) -> Option<&[Option<T>]> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.values.as_slice())
    }

    /// Get the cells of a named column, or fail with `MissingColumn`.
    pub fn require_column(&self, name: &str) -> Result<&[Option<T>], EvalError> {
        self.column(name).ok_or_else(|| EvalError::MissingColumn {
            name: String::from(name),
        })
    }

    // ========================================================================
    // Filtering and Extraction
    // ========================================================================

    /// Indices of rows with a present, finite value in every named column.
    ///
    /// Fails with `MissingColumn` if any named column is absent. The
    /// returned indices are strictly increasing.
    pub fn complete_rows(&self, names: &[&str]) -> Result<Vec<usize>, EvalError> {
        let columns: Vec<&[Option<T>]> = names
            .iter()
            .map(|name| self.require_column(name))
            .collect::<Result<_, _>>()?;

        let complete = (0..self.n_rows())
            .filter(|&row| {
                columns
                    .iter()
                    .all(|col| matches!(col[row], Some(v) if v.is_finite()))
            })
            .collect();

        Ok(complete)
    }

    /// Extract a named column at the given row indices as a dense vector.
    ///
    /// Missing and out-of-range cells are mapped to NaN so that
    /// downstream finiteness filtering handles them uniformly.
    pub fn gather(&self, name: &str, rows: &[usize]) -> Result<Vec<T>, EvalError> {
        let column = self.require_column(name)?;
        Ok(rows
            .iter()
            .map(|&row| {
                column
                    .get(row)
                    .copied()
                    .flatten()
                    .unwrap_or_else(T::nan)
            })
            .collect())
    }
}
