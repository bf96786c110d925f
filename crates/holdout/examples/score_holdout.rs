//! Holdout Evaluation Examples
//!
//! This example demonstrates out-of-sample scoring:
//! - Scoring a fitted linear model against held-out data
//! - Missing data and the completeness filter
//! - Degenerate responses and the undefined score
//! - Batch scoring of candidate models with the best-effort boundary

use holdout::prelude::*;

fn main() -> Result<(), EvalError> {
    println!("{}", "=".repeat(80));
    println!("Holdout Evaluation Examples");
    println!("{}", "=".repeat(80));
    println!();

    example_1_basic_scoring()?;
    example_2_missing_data()?;
    example_3_degenerate_response()?;
    example_4_batch_scoring()?;

    Ok(())
}

/// Example 1: Basic Scoring
/// Score a fitted model against clean held-out data
fn example_1_basic_scoring() -> Result<(), EvalError> {
    println!("Example 1: Basic Scoring");
    println!("{}", "-".repeat(80));

    // A model fitted elsewhere: ŷ = 1 + 2x
    let model = LinearModel::new("y").intercept(1.0).term("x", 2.0);

    // Held-out test data with a little noise
    let x: Vec<f64> = (0..20).map(|i| i as f64 * 0.5).collect();
    let y: Vec<f64> = x
        .iter()
        .enumerate()
        .map(|(i, &xi)| 1.0 + 2.0 * xi + if i % 2 == 0 { 0.1 } else { -0.1 })
        .collect();

    let frame = Frame::new()
        .with_dense_column("x", x)?
        .with_dense_column("y", y)?;

    let report = Holdout::new().build()?.evaluate(&model, &frame);
    println!("{}", report);

    Ok(())
}

/// Example 2: Missing Data
/// Rows with missing predictor or response values are dropped
fn example_2_missing_data() -> Result<(), EvalError> {
    println!("Example 2: Missing Data");
    println!("{}", "-".repeat(80));

    let model = LinearModel::new("y").term("x", 2.0);

    let frame = Frame::new()
        .with_column("x", vec![Some(1.0), None, Some(3.0), Some(4.0), Some(5.0)])?
        .with_column("y", vec![Some(2.1), Some(4.0), None, Some(7.9), Some(10.2)])?;

    let report = Holdout::new().build()?.evaluate(&model, &frame);

    println!("Frame rows: {}", frame.n_rows());
    println!("{}", report);

    Ok(())
}

/// Example 3: Degenerate Response
/// A constant response has no variance to explain; R² is undefined
fn example_3_degenerate_response() -> Result<(), EvalError> {
    println!("Example 3: Degenerate Response");
    println!("{}", "-".repeat(80));

    let model = LinearModel::new("y").term("x", 1.0);

    let frame = Frame::new()
        .with_dense_column("x", vec![1.0, 2.0, 3.0])?
        .with_dense_column("y", vec![5.0, 5.0, 5.0])?;

    let report = Holdout::new().build()?.evaluate(&model, &frame);

    // Undefined score, but the count tells us rows were usable
    println!("{}", report);

    Ok(())
}

/// Example 4: Batch Scoring
/// The best-effort boundary keeps a model sweep alive when one candidate
/// is malformed
fn example_4_batch_scoring() -> Result<(), EvalError> {
    println!("Example 4: Batch Scoring");
    println!("{}", "-".repeat(80));

    let frame = Frame::new()
        .with_dense_column("x1", vec![1.0, 2.0, 3.0, 4.0, 5.0])?
        .with_dense_column("x2", vec![2.0, 1.0, 4.0, 3.0, 5.0])?
        .with_dense_column("y", vec![3.1, 2.9, 7.2, 6.8, 10.1])?;

    let candidates = vec![
        ("x1 only", LinearModel::new("y").term("x1", 2.0)),
        ("x1 + x2", LinearModel::new("y").term("x1", 1.0).term("x2", 1.0)),
        // This one references a column the frame does not have; it scores
        // as undefined instead of aborting the sweep.
        ("broken", LinearModel::new("y").term("x9", 1.0)),
    ];

    let evaluator = Holdout::new().build()?;
    for (label, model) in &candidates {
        let report = evaluator.evaluate(model, &frame);
        match report.r_squared {
            Some(r2) => println!("  {:<8} R² = {:.4} (n = {})", label, r2, report.n_used),
            None => println!("  {:<8} undefined (n = {})", label, report.n_used),
        }
    }

    println!();
    Ok(())
}
