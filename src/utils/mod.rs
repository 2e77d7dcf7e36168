//! Free-standing helpers around the matrix types.

pub mod inspect;
pub use inspect::{is_nested, verify_matrix};
