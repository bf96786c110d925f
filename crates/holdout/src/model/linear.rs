//! Coefficient-based linear models.
//!
//! ## Purpose
//!
//! This module provides [`LinearModel`], a concrete implementation of
//! [`RegressionModel`] backed by named coefficients and an optional
//! intercept. It stands in for whatever external process fitted the
//! model, and is the crate's test vehicle.
//!
//! ## Design notes
//!
//! * **Named terms**: Coefficients are matched to matrix columns by name,
//!   not position, so callers may order columns freely.
//! * **Intercept reporting**: A model with an intercept lists it under
//!   [`DEFAULT_INTERCEPT_MARKER`] in `predictor_names`, mirroring how
//!   fitted-model libraries expose their constant term.
//!
//! ## Invariants
//!
//! * `predict` returns exactly one value per matrix row.
//! * A model without terms predicts its intercept (or zero) everywhere.
//!
//! ## Non-goals
//!
//! * This module does not estimate coefficients from data.

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
use crate::model::matrix::DesignMatrix;
use crate::model::regression::{RegressionModel, DEFAULT_INTERCEPT_MARKER};
use crate::primitives::errors::EvalError;

// ============================================================================
// Linear Model
// ============================================================================

/// A fitted linear model: named coefficients plus an optional intercept.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearModel<T> {
    response: String,
    terms: Vec<(String, T)>,
    intercept: Option<T>,
}

impl<T: Float> LinearModel<T> {
    /// Create a model predicting the named response, with no terms yet.
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            terms: Vec::new(),
            intercept: None,
        }
    }

    /// Add a predictor term with its fitted coefficient.
    pub fn term(mut self, name: impl Into<String>, coefficient: T) -> Self {
        self.terms.push((name.into(), coefficient));
        self
    }

    /// Set the fitted intercept (constant term).
    pub fn intercept(mut self, value: T) -> Self {
        self.intercept = Some(value);
        self
    }
}

impl<T: Float> RegressionModel<T> for LinearModel<T> {
    fn predictor_names(&self) -> Vec<String> {
        let mut names = Vec::with_capacity(self.terms.len() + 1);
        if self.intercept.is_some() {
            names.push(String::from(DEFAULT_INTERCEPT_MARKER));
        }
        names.extend(self.terms.iter().map(|(name, _)| name.clone()));
        names
    }

    fn response_name(&self) -> &str {
        &self.response
    }

    fn predict(&self, matrix: &DesignMatrix<T>) -> Result<Vec<T>, EvalError> {
        // Resolve each term's column once, up front.
        let indices: Vec<usize> = self
            .terms
            .iter()
            .map(|(name, _)| {
                matrix
                    .column_index(name)
                    .ok_or_else(|| EvalError::MissingColumn { name: name.clone() })
            })
            .collect::<Result<_, _>>()?;

        let base = self.intercept.unwrap_or_else(T::zero);
        let predictions = (0..matrix.n_rows())
            .map(|row| {
                let cells = matrix.row(row);
                self.terms
                    .iter()
                    .zip(indices.iter())
                    .fold(base, |acc, ((_, coefficient), &index)| {
                        acc + *coefficient * cells[index]
                    })
            })
            .collect();

        Ok(predictions)
    }
}
