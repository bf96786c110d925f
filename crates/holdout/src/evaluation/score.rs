//! The out-of-sample scoring pipeline.
//!
//! ## Purpose
//!
//! This module implements the evaluation itself: derive the required
//! columns from the model's own metadata, align and clean the held-out
//! data, predict, and compute R² over the surviving rows.
//!
//! ## Design notes
//!
//! * **Fallible internally**: The pipeline returns
//!   `Result<EvaluationReport, EvalError>`; the API layer decides whether
//!   to surface or collapse the error.
//! * **Degenerate cases are outcomes**: Empty-after-filtering and
//!   constant-response are legitimate reports, not errors.
//! * **Pure**: No hidden state; identical inputs yield identical reports.
//!
//! ## Key concepts
//!
//! * **Completeness filtering**: Only rows with present, finite values in
//!   every predictor and the response are submitted for prediction.
//! * **Finiteness filtering**: Rows whose truth or prediction is
//!   non-finite are dropped before the sums.
//!
//! ## Invariants
//!
//! * `n_used` never exceeds the number of complete rows.
//! * A report with `r_squared == None` and `n_used > 0` means the
//!   response had zero variance over the used rows.
//!
//! ## Non-goals
//!
//! * This module does not fit models or own the error-collapse policy.

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
use crate::data::frame::Frame;
use crate::evaluation::report::EvaluationReport;
use crate::math::sums::{mean, r_squared_from_sums, residual_sum_of_squares, total_sum_of_squares};
use crate::model::matrix::DesignMatrix;
use crate::model::regression::RegressionModel;
use crate::primitives::errors::EvalError;

// ============================================================================
// Scoring Pipeline
// ============================================================================

/// Score a fitted model against a held-out frame.
///
/// `intercept_marker` is the reserved predictor name excluded from
/// column lookups.
pub fn score<T, M>(
    model: &M,
    frame: &Frame<T>,
    intercept_marker: &str,
) -> Result<EvaluationReport<T>, EvalError>
where
    T: Float,
    M: RegressionModel<T> + ?Sized,
{
    if frame.n_columns() == 0 {
        return Err(EvalError::EmptyFrame);
    }

    // Step 1: predictor names from the model, minus the intercept marker.
    let predictors: Vec<String> = model
        .predictor_names()
        .into_iter()
        .filter(|name| name != intercept_marker)
        .collect();
    let response = model.response_name();

    // Step 2: rows with complete data for every predictor and the response.
    let mut required: Vec<&str> = predictors.iter().map(String::as_str).collect();
    required.push(response);
    let rows = frame.complete_rows(&required)?;
    if rows.is_empty() {
        return Ok(EvaluationReport::empty());
    }

    // Step 3: predict on the surviving rows and gather the truth.
    let columns = predictors
        .iter()
        .map(|name| frame.gather(name, &rows).map(|cells| (name.clone(), cells)))
        .collect::<Result<Vec<_>, _>>()?;
    let matrix = DesignMatrix::from_columns(columns, rows.len())?;

    let predicted = model.predict(&matrix)?;
    if predicted.len() != rows.len() {
        return Err(EvalError::PredictionLengthMismatch {
            expected: rows.len(),
            got: predicted.len(),
        });
    }
    let truth = frame.gather(response, &rows)?;

    // Step 4: drop rows whose truth or prediction is non-finite.
    let (y, y_hat): (Vec<T>, Vec<T>) = truth
        .iter()
        .zip(predicted.iter())
        .filter(|(t, p)| t.is_finite() && p.is_finite())
        .map(|(&t, &p)| (t, p))
        .unzip();
    if y.is_empty() {
        return Ok(EvaluationReport::empty());
    }

    // Steps 5-7: sums of squares over the survivors.
    let y_mean = mean(&y);
    let ss_res = residual_sum_of_squares(&y, &y_hat);
    let ss_tot = total_sum_of_squares(&y, y_mean);

    Ok(EvaluationReport {
        r_squared: r_squared_from_sums(ss_res, ss_tot),
        n_used: y.len(),
    })
}
