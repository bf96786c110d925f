//! The fitted-model interface.
//!
//! ## Purpose
//!
//! This module defines [`RegressionModel`], the abstraction boundary
//! between out-of-sample evaluation and whatever external process fitted
//! the model. The evaluator never inspects model internals; it asks for
//! variable names and predictions through this trait.
//!
//! ## Design notes
//!
//! * **Explicit interface**: Variable names come from trait methods, not
//!   runtime attribute inspection.
//! * **Intercept marker**: `predictor_names` may include a reserved name
//!   representing the model's constant term (statsmodels-style
//!   `"Intercept"`). The evaluator excludes it from column lookups.
//! * **Fallible prediction**: `predict` returns a `Result` so models can
//!   report their own failures with context.
//!
//! ## Invariants
//!
//! * A successful `predict` returns exactly one value per matrix row.
//!
//! ## Non-goals
//!
//! * This module does not fit models or parse formulas.

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
use crate::primitives::errors::EvalError;

/// Reserved predictor name representing a model's constant term.
///
/// Models that carry an intercept list it under this name by default;
/// the evaluator excludes the configured marker from data lookups.
pub const DEFAULT_INTERCEPT_MARKER: &str = "Intercept";

// ============================================================================
// Regression Model Trait
// ============================================================================

/// A fitted regression model, ready to predict on new data.
pub trait RegressionModel<T: Float> {
    /// Ordered predictor variable names used in fitting.
    ///
    /// May include an intercept marker; the evaluator excludes the
    /// configured marker before column lookups.
    fn predictor_names(&self) -> Vec<String>;

    /// Name of the response variable.
    fn response_name(&self) -> &str;

    /// Predict a response value for each row of the predictor matrix.
    ///
    /// The matrix columns are the non-intercept predictor names, in the
    /// order reported by `predictor_names`. A successful result has
    /// exactly one prediction per row.
    fn predict(&self, matrix: &DesignMatrix<T>) -> Result<Vec<T>, EvalError>;
}
