//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure sum-of-squares arithmetic behind the R²
//! computation. It depends only on the primitives layer.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Evaluation
//!   ↓
//! Layer 4: Model
//!   ↓
//! Layer 3: Data
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Sum-of-squares arithmetic.
pub mod sums;
