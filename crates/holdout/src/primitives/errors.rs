//! Error types for out-of-sample evaluation.
//!
//! ## Purpose
//!
//! This module defines error conditions that can occur while aligning a
//! fitted model with a held-out data frame, including column lookup
//! failures, shape mismatches, and prediction failures.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., actual vs. expected lengths).
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Frame errors**: Missing columns, mismatched column lengths, empty frames.
//! 2. **Model errors**: Prediction failures and wrong-length prediction vectors.
//! 3. **Configuration errors**: Invalid intercept markers, duplicate builder parameters.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not decide the boundary policy (see the API layer).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for out-of-sample evaluation operations.
#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    /// The data frame contains no columns.
    EmptyFrame,

    /// A column required by the model is not present in the frame.
    MissingColumn {
        /// Name of the missing column.
        name: String,
    },

    /// A column being inserted does not match the frame's row count.
    MismatchedColumnLength {
        /// Name of the offending column.
        name: String,
        /// Row count already established by the frame.
        expected: usize,
        /// Length of the column being inserted.
        got: usize,
    },

    /// The model returned a prediction vector of the wrong length.
    PredictionLengthMismatch {
        /// Number of rows submitted for prediction.
        expected: usize,
        /// Number of predictions returned.
        got: usize,
    },

    /// The model's predict operation failed with a descriptive message.
    PredictionFailed(String),

    /// The configured intercept marker is not usable (e.g., empty).
    InvalidInterceptMarker(String),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for EvalError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyFrame => write!(f, "Data frame contains no columns"),
            Self::MissingColumn { name } => {
                write!(f, "Column '{name}' is not present in the data frame")
            }
            Self::MismatchedColumnLength {
                name,
                expected,
                got,
            } => {
                write!(
                    f,
                    "Column '{name}' has {got} rows, frame expects {expected}"
                )
            }
            Self::PredictionLengthMismatch { expected, got } => {
                write!(
                    f,
                    "Prediction length mismatch: submitted {expected} rows, got {got} predictions"
                )
            }
            Self::PredictionFailed(msg) => write!(f, "Prediction failed: {msg}"),
            Self::InvalidInterceptMarker(marker) => {
                write!(f, "Invalid intercept marker: '{marker}' (must be non-empty)")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for EvalError {}
