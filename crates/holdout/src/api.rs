//! High-level API for out-of-sample evaluation.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point for holdout
//! scoring. It implements a fluent builder for configuring the evaluator
//! and the boundary policy that keeps batch drivers alive: internal
//! failures are logged and collapsed into the undefined report.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Configuration is validated when `.build()` is called.
//! * **Best-effort boundary**: `evaluate` never fails; `try_evaluate`
//!   surfaces the internal `Result` for callers who want it.
//!
//! ## Key concepts
//!
//! * **Configuration Flow**: `Holdout::new()` → chained setters → `.build()`.
//! * **Diagnostic channel**: Collapsed failures are reported through the
//!   [`log`] facade at `warn` level; the emission is observational only
//!   and not part of the return contract.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::evaluation::score::score;

// Publicly re-exported types
pub use crate::data::frame::Frame;
pub use crate::evaluation::report::EvaluationReport;
pub use crate::model::linear::LinearModel;
pub use crate::model::matrix::DesignMatrix;
pub use crate::model::regression::{RegressionModel, DEFAULT_INTERCEPT_MARKER};
pub use crate::primitives::errors::EvalError;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring an out-of-sample [`Evaluator`].
#[derive(Debug, Clone, Default)]
pub struct HoldoutBuilder {
    /// Reserved predictor name for the model's constant term.
    pub intercept_marker: Option<String>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl HoldoutBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            intercept_marker: None,
            duplicate_param: None,
        }
    }

    /// Set the intercept marker excluded from column lookups.
    ///
    /// Defaults to [`DEFAULT_INTERCEPT_MARKER`].
    pub fn intercept_marker(mut self, name: impl Into<String>) -> Self {
        if self.intercept_marker.is_some() {
            self.duplicate_param = Some("intercept_marker");
        }
        self.intercept_marker = Some(name.into());
        self
    }

    /// Validate the configuration and build an [`Evaluator`].
    pub fn build(self) -> Result<Evaluator, EvalError> {
        if let Some(parameter) = self.duplicate_param {
            return Err(EvalError::DuplicateParameter { parameter });
        }

        let intercept_marker = self
            .intercept_marker
            .unwrap_or_else(|| String::from(DEFAULT_INTERCEPT_MARKER));
        if intercept_marker.is_empty() {
            return Err(EvalError::InvalidInterceptMarker(intercept_marker));
        }

        Ok(Evaluator { intercept_marker })
    }
}

// ============================================================================
// Evaluator
// ============================================================================

/// A configured out-of-sample evaluator.
///
/// Holds configuration only; evaluation is pure and stateless, so one
/// evaluator may be shared freely across threads and reused for any
/// number of model/frame pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluator {
    intercept_marker: String,
}

impl Evaluator {
    /// The configured intercept marker.
    pub fn intercept_marker(&self) -> &str {
        &self.intercept_marker
    }

    /// Score a fitted model against a held-out frame.
    ///
    /// This never fails: any internal error (missing column, prediction
    /// failure, shape mismatch) is emitted on the [`log`] facade and
    /// collapsed into the undefined report `(None, 0)`. Degenerate data
    /// is not an error — an empty overlap yields `(None, 0)` and a
    /// constant response yields `(None, n)` without any log emission.
    pub fn evaluate<T, M>(&self, model: &M, frame: &Frame<T>) -> EvaluationReport<T>
    where
        T: Float,
        M: RegressionModel<T> + ?Sized,
    {
        match score(model, frame, &self.intercept_marker) {
            Ok(report) => report,
            Err(e) => {
                log::warn!(
                    "out-of-sample evaluation of response '{}' failed: {}",
                    model.response_name(),
                    e
                );
                EvaluationReport::empty()
            }
        }
    }

    /// Score a fitted model, surfacing internal errors to the caller.
    ///
    /// The strict counterpart to [`Evaluator::evaluate`] for callers that
    /// want to own the failure policy themselves.
    pub fn try_evaluate<T, M>(
        &self,
        model: &M,
        frame: &Frame<T>,
    ) -> Result<EvaluationReport<T>, EvalError>
    where
        T: Float,
        M: RegressionModel<T> + ?Sized,
    {
        score(model, frame, &self.intercept_marker)
    }
}
