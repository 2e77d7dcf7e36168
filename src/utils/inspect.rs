//! Shape and type inspection for type-erased inputs.
//!
//! Callers that accept `&dyn Any` values (scripting bridges, loosely typed
//! configuration) need to distinguish flat from nested input before picking
//! a construction entry point, and to check that an operand really is a
//! matrix before operating on it. Both checks live here; nothing inside the
//! crate depends on them.

use std::any::Any;

use crate::error::MatError;
use crate::matrix::Matrix;

/// True when `value` is a nested row collection: a `Vec<Vec<T>>` holding at
/// least one row. A flat `Vec<T>`, an empty nested vector, or any
/// non-sequence value answers false.
pub fn is_nested<T: 'static>(value: &dyn Any) -> bool {
    value
        .downcast_ref::<Vec<Vec<T>>>()
        .is_some_and(|rows| !rows.is_empty())
}

/// Borrow `value` as a matrix of `T`.
///
/// # Errors
///
/// `TypeMismatch` when `value` is anything other than a `Matrix<T>`.
pub fn verify_matrix<T: 'static>(value: &dyn Any) -> Result<&Matrix<T>, MatError> {
    value.downcast_ref::<Matrix<T>>().ok_or(MatError::TypeMismatch)
}
