//! Layer 5: Evaluation
//!
//! # Purpose
//!
//! This layer computes the out-of-sample metric itself: the report type
//! returned to callers and the scoring pipeline that aligns, predicts,
//! cleans, and scores.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Evaluation ← You are here
//!   ↓
//! Layer 4: Model
//!   ↓
//! Layer 3: Data
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Evaluation result types.
pub mod report;

/// The out-of-sample scoring pipeline.
pub mod score;
