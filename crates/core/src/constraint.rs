//! Construction-time numeric constraints.
//!
//! A [`Constrained<T, C>`] value has been checked against the marker `C` once,
//! when it was built, so code holding one can rely on the invariant without
//! re-checking it.
//!
//! Only [`StrictlyPositive`] is provided; it guards the rod lengths, bob
//! masses and step sizes that must never be zero, negative, or NaN. Custom
//! invariants can be added by implementing [`Constraint<T>`] for a zero-sized
//! marker type.

use std::marker::PhantomData;

use num_traits::Float;
use thiserror::Error;

/// A trait for enforcing numeric invariants at construction time.
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value must be finite")]
    Infinite,
}

/// A wrapper enforcing a numeric constraint at construction time.
///
/// # Example
///
/// ```
/// use pendula_core::constraint::{Constrained, StrictlyPositive};
///
/// let length = Constrained::<f64, StrictlyPositive>::new(0.65).unwrap();
/// assert_eq!(length.into_inner(), 0.65);
///
/// assert!(Constrained::<f64, StrictlyPositive>::new(0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Constructs a new constrained value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: Copy, C: Constraint<T>> Constrained<T, C> {
    /// Returns a copy of the inner value.
    pub fn get(&self) -> T {
        self.value
    }
}

impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

/// Marker for finite values greater than zero.
///
/// Rejects NaN and infinities as well as zero and negatives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Convenience constructor for a strictly positive value.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is NaN, infinite, zero, or negative.
    pub fn new<T: Float>(value: T) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: Float> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        if value.is_nan() {
            Err(ConstraintError::NotANumber)
        } else if value.is_infinite() {
            Err(ConstraintError::Infinite)
        } else if value.is_zero() {
            Err(ConstraintError::Zero)
        } else if value.is_sign_negative() {
            Err(ConstraintError::Negative)
        } else {
            Ok(())
        }
    }
}
