//! Layer 3: Data
//!
//! # Purpose
//!
//! This layer provides the held-out data abstraction: a read-only table
//! of named, row-aligned columns with explicit missing-value support.
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
//! Layer 3: Data ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Named-column data frames.
pub mod frame;
