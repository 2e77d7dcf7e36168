//! spanmat: small row-major matrix container with NumPy-style span slicing.
//!
//! This crate provides a dense two-dimensional container with flexible
//! construction, span-based element/row/column/submatrix selection,
//! in-place transposition, and element-wise conversion. It is a data-shape
//! and indexing utility for small scripting workloads, not a numerics
//! engine.

pub mod core;
pub mod error;
pub mod matrix;
pub mod utils;

// Re-exports for convenience
pub use self::core::*;
pub use self::error::*;
pub use self::matrix::*;
pub use self::utils::*;
