//! Layer 4: Model
//!
//! # Purpose
//!
//! This layer provides the fitted-model abstraction: an explicit
//! interface exposing predictor names, the response name, and a predict
//! operation, plus the predictor matrix handed to it and a concrete
//! coefficient-based linear model.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Evaluation
//!   ↓
//! Layer 4: Model ← You are here
//!   ↓
//! Layer 3: Data
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// The fitted-model interface.
pub mod regression;

/// Row-major predictor matrices.
pub mod matrix;

/// Coefficient-based linear models.
pub mod linear;
