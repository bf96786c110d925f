//! Tests for the fitted-model abstraction.
//!
//! These tests verify the linear model's name reporting and prediction,
//! and the design matrix construction it predicts on.
//!
//! ## Test Organization
//!
//! 1. **Name Reporting** - Predictor names with and without intercept
//! 2. **Prediction** - Dot products, column-order independence
//! 3. **Design Matrix** - Construction, validation, row access

use approx::assert_relative_eq;
use holdout::prelude::*;

// ============================================================================
// Name Reporting Tests
// ============================================================================

/// Test predictor names for a model without an intercept.
#[test]
fn test_predictor_names_no_intercept() {
    let model = LinearModel::new("y").term("a", 1.0).term("b", 2.0);

    assert_eq!(
        model.predictor_names(),
        vec![String::from("a"), String::from("b")]
    );
    assert_eq!(model.response_name(), "y");
}

/// Test that an intercept is reported under the default marker.
#[test]
fn test_predictor_names_with_intercept() {
    let model = LinearModel::new("y").intercept(0.5).term("a", 1.0);

    assert_eq!(
        model.predictor_names(),
        vec![String::from(DEFAULT_INTERCEPT_MARKER), String::from("a")]
    );
}

// ============================================================================
// Prediction Tests
// ============================================================================

/// Test prediction as a per-row dot product plus intercept.
#[test]
fn test_predict_dot_product() {
    let model = LinearModel::new("y").intercept(1.0).term("a", 2.0).term("b", -1.0);
    let matrix = DesignMatrix::from_columns(
        vec![
            (String::from("a"), vec![1.0, 2.0]),
            (String::from("b"), vec![3.0, 4.0]),
        ],
        2,
    )
    .unwrap();

    let predictions = model.predict(&matrix).unwrap();

    // Row 0: 1 + 2*1 - 3 = 0; Row 1: 1 + 2*2 - 4 = 1
    assert_eq!(predictions.len(), 2);
    assert_relative_eq!(predictions[0], 0.0, epsilon = 1e-12);
    assert_relative_eq!(predictions[1], 1.0, epsilon = 1e-12);
}

/// Test that terms are matched to columns by name, not position.
#[test]
fn test_predict_column_order_independent() {
    let model = LinearModel::new("y").term("a", 2.0).term("b", 3.0);
    let matrix = DesignMatrix::from_columns(
        vec![
            (String::from("b"), vec![1.0]),
            (String::from("a"), vec![10.0]),
        ],
        1,
    )
    .unwrap();

    let predictions = model.predict(&matrix).unwrap();

    // 2*10 + 3*1 = 23, regardless of column order
    assert_relative_eq!(predictions[0], 23.0, epsilon = 1e-12);
}

/// Test that a missing term column fails prediction.
#[test]
fn test_predict_missing_column() {
    let model = LinearModel::new("y").term("a", 1.0);
    let matrix =
        DesignMatrix::from_columns(vec![(String::from("b"), vec![1.0])], 1).unwrap();

    assert_eq!(
        model.predict(&matrix).err(),
        Some(EvalError::MissingColumn {
            name: String::from("a")
        })
    );
}

/// Test an intercept-only model on a matrix with no predictor columns.
#[test]
fn test_predict_intercept_only() {
    let model = LinearModel::new("y").intercept(4.0);
    let matrix = DesignMatrix::from_columns(Vec::new(), 3).unwrap();

    let predictions = model.predict(&matrix).unwrap();

    assert_eq!(predictions, vec![4.0, 4.0, 4.0]);
}

// ============================================================================
// Design Matrix Tests
// ============================================================================

/// Test matrix shape and row access.
#[test]
fn test_matrix_rows() {
    let matrix = DesignMatrix::from_columns(
        vec![
            (String::from("a"), vec![1.0, 2.0, 3.0]),
            (String::from("b"), vec![4.0, 5.0, 6.0]),
        ],
        3,
    )
    .unwrap();

    assert_eq!(matrix.n_rows(), 3);
    assert_eq!(matrix.n_predictors(), 2);
    assert_eq!(matrix.row(1), &[2.0, 5.0]);
    assert_eq!(matrix.column_index("b"), Some(1));
    assert_eq!(matrix.column_index("c"), None);
}

/// Test that a column shorter than the row count is rejected.
#[test]
fn test_matrix_mismatched_column() {
    let result = DesignMatrix::from_columns(
        vec![
            (String::from("a"), vec![1.0, 2.0]),
            (String::from("b"), vec![1.0]),
        ],
        2,
    );

    assert_eq!(
        result.err(),
        Some(EvalError::MismatchedColumnLength {
            name: String::from("b"),
            expected: 2,
            got: 1
        })
    );
}
