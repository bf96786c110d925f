//! # Holdout — out-of-sample R² evaluation for Rust
//!
//! `holdout` scores a fitted regression model against held-out test data.
//! Given a model that knows its own predictor and response names, and a
//! table of named columns, it aligns the data, predicts, cleans, and
//! computes the out-of-sample coefficient of determination (R²) together
//! with the number of observations that actually entered the computation.
//!
//! ## What is out-of-sample R²?
//!
//! R² measures the fraction of response variance explained by a model:
//! `1 - SS_res / SS_tot`. Computed on data the model was *not* fitted on,
//! it is an honest estimate of predictive quality. When the held-out
//! response is constant (zero variance), R² is mathematically undefined —
//! this crate reports that case explicitly instead of collapsing it to a
//! number.
//!
//! ## Quick Start
//!
//! ```rust
//! use holdout::prelude::*;
//!
//! // A fitted model: ŷ = 2x (obtained from some external fitting process)
//! let model = LinearModel::new("y").term("x", 2.0);
//!
//! // Held-out test data
//! let frame = Frame::new()
//!     .with_dense_column("x", vec![1.0, 2.0, 3.0])?
//!     .with_dense_column("y", vec![2.0, 4.0, 7.0])?;
//!
//! // Build the evaluator and score the model
//! let evaluator = Holdout::new().build()?;
//! let report = evaluator.evaluate(&model, &frame);
//!
//! assert_eq!(report.n_used, 3);
//! assert!(report.r_squared.is_some());
//! println!("{}", report);
//! # Result::<(), EvalError>::Ok(())
//! ```
//!
//! ```text
//! Out-of-sample evaluation:
//!   R²:        0.921053
//!   Rows used: 3
//! ```
//!
//! ## Missing data and degenerate cases
//!
//! Rows with missing or non-finite values in any required column are
//! dropped before prediction, and rows with non-finite predictions are
//! dropped after. The report's `r_squared` is an `Option`:
//!
//! - `Some(r2)` — R² over the surviving rows (`n_used > 0`).
//! - `None` with `n_used > 0` — the response was constant; R² is undefined.
//! - `None` with `n_used == 0` — no usable rows, or evaluation failed.
//!
//! ```rust
//! use holdout::prelude::*;
//!
//! let model = LinearModel::new("y").term("x", 1.0);
//!
//! // The response is constant over the complete rows
//! let frame = Frame::new()
//!     .with_dense_column("x", vec![1.0, 2.0, 3.0])?
//!     .with_dense_column("y", vec![5.0, 5.0, 5.0])?;
//!
//! let report = Holdout::new().build()?.evaluate(&model, &frame);
//!
//! assert_eq!(report.r_squared, None);
//! assert_eq!(report.n_used, 3);
//! # Result::<(), EvalError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! `evaluate` never fails: internal errors (missing columns, prediction
//! failures, shape mismatches) are logged through the [`log`] facade and
//! collapsed into the undefined report `(None, 0)`. This is deliberate —
//! a batch process scoring many candidate models must not crash because
//! one of them is malformed.
//!
//! When the caller wants the failure instead, `try_evaluate` exposes the
//! internal `Result`:
//!
//! ```rust
//! use holdout::prelude::*;
//!
//! let model = LinearModel::new("y").term("missing", 1.0);
//! let frame = Frame::new().with_dense_column("y", vec![1.0, 2.0])?;
//!
//! let evaluator = Holdout::new().build()?;
//! match evaluator.try_evaluate(&model, &frame) {
//!     Ok(report) => println!("{}", report),
//!     Err(e) => eprintln!("evaluation failed: {}", e),
//! }
//! # Result::<(), EvalError>::Ok(())
//! ```
//!
//! ## Intercept handling
//!
//! Fitted models often list their constant term among the predictor names
//! (statsmodels-style `"Intercept"`). The evaluator excludes that marker
//! from column lookups; the marker name is configurable:
//!
//! ```rust
//! use holdout::prelude::*;
//!
//! let evaluator = Holdout::new().intercept_marker("(const)").build()?;
//! assert_eq!(evaluator.intercept_marker(), "(const)");
//! # Result::<(), EvalError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! holdout = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - shared error types.
mod primitives;

// Layer 2: Math - pure sum-of-squares arithmetic.
mod math;

// Layer 3: Data - named-column frames with missing-value support.
mod data;

// Layer 4: Model - the fitted-model abstraction.
mod model;

// Layer 5: Evaluation - the out-of-sample scoring pipeline.
mod evaluation;

// High-level fluent API for out-of-sample evaluation.
mod api;

// Standard holdout prelude.
pub mod prelude {
    pub use crate::api::{
        DesignMatrix, EvalError, EvaluationReport, Evaluator, Frame, HoldoutBuilder as Holdout,
        LinearModel, RegressionModel, DEFAULT_INTERCEPT_MARKER,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod data {
        pub use crate::data::*;
    }
    pub mod model {
        pub use crate::model::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
