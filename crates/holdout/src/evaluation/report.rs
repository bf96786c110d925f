//! Result types for out-of-sample evaluation.
//!
//! ## Purpose
//!
//! This module defines the [`EvaluationReport`] struct returned by every
//! evaluation: the out-of-sample R² (or an explicit undefined sentinel)
//! and the number of rows that entered the computation.
//!
//! ## Design notes
//!
//! * **Explicit undefined**: `r_squared` is an `Option`; `None` means
//!   "not computable", which callers must not coerce to zero.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//! * **Generics**: Reports are generic over `Float` types.
//!
//! ## Key concepts
//!
//! * `(None, 0)` — no usable rows, or evaluation failed.
//! * `(None, n > 0)` — the response was constant over the used rows;
//!   R² is mathematically undefined.
//! * `(Some(r2), n > 0)` — a well-defined score.
//!
//! ## Invariants
//!
//! * `r_squared` is `Some` only when `n_used > 0`.
//! * `n_used` counts exactly the rows surviving completeness and
//!   finite-prediction filtering.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// ============================================================================
// Evaluation Report
// ============================================================================

/// Out-of-sample evaluation output: the score and the rows behind it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaluationReport<T> {
    /// Out-of-sample R², or `None` when undefined.
    pub r_squared: Option<T>,

    /// Number of rows that survived filtering and entered the score.
    pub n_used: usize,
}

impl<T: Float> EvaluationReport<T> {
    /// The report for "nothing to evaluate": undefined score, zero rows.
    pub fn empty() -> Self {
        Self {
            r_squared: None,
            n_used: 0,
        }
    }

    /// Check whether the score is defined.
    pub fn is_defined(&self) -> bool {
        self.r_squared.is_some()
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for EvaluationReport<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Out-of-sample evaluation:")?;
        match self.r_squared {
            Some(r2) => writeln!(f, "  R²:        {:.6}", r2)?,
            None => writeln!(f, "  R²:        undefined")?,
        }
        writeln!(f, "  Rows used: {}", self.n_used)?;
        Ok(())
    }
}
