//! Tests for the out-of-sample scoring pipeline.
//!
//! These tests verify the statistical properties of the evaluation:
//! perfect and mean predictors, degenerate responses, empty overlaps,
//! and the filtering that bounds the sample count.
//!
//! ## Test Organization
//!
//! 1. **Score Properties** - Perfect fit, mean predictor
//! 2. **Degenerate Outcomes** - Constant response, empty overlap
//! 3. **Filtering** - Missing data and non-finite predictions

use approx::assert_relative_eq;
use holdout::prelude::*;

fn evaluator() -> Evaluator {
    Holdout::new().build().unwrap()
}

// ============================================================================
// Score Property Tests
// ============================================================================

/// Test that a perfect predictor scores exactly 1.
#[test]
fn test_perfect_predictor_scores_one() {
    let model = LinearModel::new("y").intercept(1.0).term("x", 3.0);
    let frame = Frame::new()
        .with_dense_column("x", vec![0.0, 1.0, 2.0, 3.0])
        .unwrap()
        .with_dense_column("y", vec![1.0, 4.0, 7.0, 10.0])
        .unwrap();

    let report = evaluator().evaluate(&model, &frame);

    assert_eq!(report.n_used, 4);
    assert_relative_eq!(report.r_squared.unwrap(), 1.0, epsilon = 1e-12);
}

/// Test that predicting the response mean scores exactly 0.
///
/// An intercept-only model predicting mean(y) explains none of the
/// variance: SS_res equals SS_tot.
#[test]
fn test_mean_predictor_scores_zero() {
    // mean of (1, 2, 3, 6) is 3
    let model = LinearModel::new("y").intercept(3.0);
    let frame = Frame::new()
        .with_dense_column("y", vec![1.0, 2.0, 3.0, 6.0])
        .unwrap();

    let report = evaluator().evaluate(&model, &frame);

    assert_eq!(report.n_used, 4);
    assert_relative_eq!(report.r_squared.unwrap(), 0.0, epsilon = 1e-12);
}

/// Test that a poor predictor can score below zero.
///
/// Out-of-sample R² is not bounded below; a model worse than the mean
/// must report a negative score rather than clamping.
#[test]
fn test_bad_predictor_scores_negative() {
    let model = LinearModel::new("y").term("x", -1.0);
    let frame = Frame::new()
        .with_dense_column("x", vec![1.0, 2.0, 3.0])
        .unwrap()
        .with_dense_column("y", vec![1.0, 2.0, 3.0])
        .unwrap();

    let report = evaluator().evaluate(&model, &frame);

    assert!(report.r_squared.unwrap() < 0.0);
}

// ============================================================================
// Degenerate Outcome Tests
// ============================================================================

/// Test that a constant response is undefined with a nonzero count.
///
/// Zero total variance means R² is mathematically undefined; the count
/// distinguishes this from the empty case.
#[test]
fn test_constant_response_undefined() {
    let model = LinearModel::new("y").term("x", 1.0);
    let frame = Frame::new()
        .with_dense_column("x", vec![1.0, 2.0, 3.0])
        .unwrap()
        .with_dense_column("y", vec![5.0, 5.0, 5.0])
        .unwrap();

    let report = evaluator().evaluate(&model, &frame);

    assert_eq!(report.r_squared, None);
    assert_eq!(report.n_used, 3);
    assert!(!report.is_defined());
}

/// Test that a constant response stays undefined even for a perfect fit.
#[test]
fn test_constant_response_perfect_fit_still_undefined() {
    let model = LinearModel::new("y").intercept(5.0);
    let frame = Frame::new()
        .with_dense_column("y", vec![5.0, 5.0, 5.0])
        .unwrap();

    let report = evaluator().evaluate(&model, &frame);

    assert_eq!(report.r_squared, None);
    assert_eq!(report.n_used, 3);
}

/// Test that zero overlapping complete rows yields exactly (None, 0).
#[test]
fn test_no_complete_rows() {
    let model = LinearModel::new("y").term("x", 1.0);
    let frame = Frame::new()
        .with_column("x", vec![Some(1.0), None, Some(3.0)])
        .unwrap()
        .with_column("y", vec![None, Some(2.0), None])
        .unwrap();

    let report = evaluator().evaluate(&model, &frame);

    assert_eq!(report.r_squared, None);
    assert_eq!(report.n_used, 0);
}

/// Test a frame with zero rows.
#[test]
fn test_zero_row_frame() {
    let model = LinearModel::new("y").term("x", 1.0);
    let frame = Frame::new()
        .with_dense_column("x", Vec::new())
        .unwrap()
        .with_dense_column("y", Vec::new())
        .unwrap();

    let report = evaluator().evaluate(&model, &frame);

    assert_eq!(report, EvaluationReport::empty());
}

// ============================================================================
// Filtering Tests
// ============================================================================

/// Test that incomplete rows never enter the sample count.
#[test]
fn test_sample_count_excludes_incomplete_rows() {
    let model = LinearModel::new("y").term("x", 2.0);
    let frame = Frame::new()
        .with_column("x", vec![Some(1.0), Some(2.0), None, Some(4.0), Some(5.0)])
        .unwrap()
        .with_column("y", vec![Some(2.0), None, Some(6.0), Some(8.0), Some(11.0)])
        .unwrap();

    let report = evaluator().evaluate(&model, &frame);

    // Complete rows: 0, 3, 4
    assert_eq!(report.n_used, 3);
    assert!(report.n_used <= frame.n_rows());
}

/// Test that rows with non-finite predictions are dropped.
///
/// A model returning NaN for some rows must not poison the score; those
/// rows are excluded and the count reflects the survivors.
#[test]
fn test_non_finite_predictions_dropped() {
    struct SpottyModel;

    impl RegressionModel<f64> for SpottyModel {
        fn predictor_names(&self) -> Vec<String> {
            vec![String::from("x")]
        }

        fn response_name(&self) -> &str {
            "y"
        }

        fn predict(&self, matrix: &DesignMatrix<f64>) -> Result<Vec<f64>, EvalError> {
            // NaN whenever the predictor is negative
            Ok((0..matrix.n_rows())
                .map(|i| {
                    let x = matrix.row(i)[0];
                    if x < 0.0 {
                        f64::NAN
                    } else {
                        2.0 * x
                    }
                })
                .collect())
        }
    }

    let frame = Frame::new()
        .with_dense_column("x", vec![-1.0, 1.0, 2.0, 3.0])
        .unwrap()
        .with_dense_column("y", vec![-2.0, 2.0, 4.0, 7.0])
        .unwrap();

    let report = evaluator().evaluate(&SpottyModel, &frame);

    // The x = -1 row survives completeness filtering but its prediction
    // is NaN, so only three rows enter the score.
    assert_eq!(report.n_used, 3);
    assert_relative_eq!(report.r_squared.unwrap(), 1.0 - 9.0 / 114.0, epsilon = 1e-12);
}

/// Test that every prediction non-finite yields exactly (None, 0).
#[test]
fn test_all_predictions_non_finite() {
    struct NanModel;

    impl RegressionModel<f64> for NanModel {
        fn predictor_names(&self) -> Vec<String> {
            vec![String::from("x")]
        }

        fn response_name(&self) -> &str {
            "y"
        }

        fn predict(&self, matrix: &DesignMatrix<f64>) -> Result<Vec<f64>, EvalError> {
            Ok(vec![f64::NAN; matrix.n_rows()])
        }
    }

    let frame = Frame::new()
        .with_dense_column("x", vec![1.0, 2.0])
        .unwrap()
        .with_dense_column("y", vec![1.0, 2.0])
        .unwrap();

    let report = evaluator().evaluate(&NanModel, &frame);

    assert_eq!(report.r_squared, None);
    assert_eq!(report.n_used, 0);
}

// ============================================================================
// Report Display Tests
// ============================================================================

/// Test the human-readable rendering of a defined report.
#[test]
fn test_report_display_defined() {
    let report = EvaluationReport {
        r_squared: Some(0.5f64),
        n_used: 3,
    };
    let rendered = format!("{}", report);

    assert!(rendered.contains("R²:        0.500000"));
    assert!(rendered.contains("Rows used: 3"));
}

/// Test the rendering of an undefined report.
#[test]
fn test_report_display_undefined() {
    let report = EvaluationReport::<f64>::empty();
    let rendered = format!("{}", report);

    assert!(rendered.contains("R²:        undefined"));
    assert!(rendered.contains("Rows used: 0"));
}
