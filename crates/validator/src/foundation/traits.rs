//! Core traits for the validation system
//!
//! Two entry points exist for every validator:
//!
//! - [`Validate`] is statically typed over the validator's `Input`.
//! - [`ValidateAny`] is object-safe and accepts any value as `&dyn AnyValue`,
//!   checking its runtime type first. It is blanket-implemented for every
//!   `Validate` whose input is `'static`, so containers and records can hold
//!   heterogeneous nested validators behind `Box<dyn ValidateAny>`.

use std::any::Any;

use crate::foundation::ValidationError;
use crate::foundation::check::CheckList;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators implement.
///
/// # Examples
///
/// ```rust,ignore
/// use valid::foundation::{Validate, ValidationError};
///
/// struct Even;
///
/// impl Validate for Even {
///     type Input = i64;
///
///     fn validate(&self, input: &i64) -> Result<(), ValidationError> {
///         if input % 2 == 0 {
///             Ok(())
///         } else {
///             Err(ValidationError::new("even", format!("expected {input} to be even")))
///         }
///     }
/// }
/// ```
pub trait Validate {
    /// The type of value being validated.
    type Input;

    /// Validates the input value, returning the first violated constraint.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

// ============================================================================
// TYPE ERASURE
// ============================================================================

/// An untyped value that still knows the name of its runtime type.
///
/// Implemented for every `'static` type, so `&value as &dyn AnyValue` works
/// for any owned value.
///
/// A `Box<dyn AnyValue>` is itself an `AnyValue` whose type is the box.
/// Pass `&*boxed` to validate the boxed value; `&boxed` reports a type
/// mismatch against `Box<dyn AnyValue>`.
pub trait AnyValue: Any {
    /// Name of the concrete type, as reported by [`std::any::type_name`].
    fn type_name(&self) -> &'static str;

    /// Upcasts to `&dyn Any` for downcasting.
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AnyValue for T {
    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Narrows an untyped value to `T`.
///
/// Fails with [`ValidationError::TypeMismatch`] carrying both type names.
pub fn downcast<T: Any>(value: &dyn AnyValue) -> Result<&T, ValidationError> {
    value.as_any().downcast_ref::<T>().ok_or_else(|| {
        let expected = std::any::type_name::<T>();
        let actual = value.type_name();
        tracing::debug!(expected, actual, "erased validation received wrong type");
        ValidationError::type_mismatch(expected, actual)
    })
}

/// Object-safe validation entry point over untyped values.
///
/// # Examples
///
/// ```rust,ignore
/// use valid::prelude::*;
///
/// let validators: Vec<Box<dyn ValidateAny>> = vec![
///     Box::new(string().not_empty()),
///     Box::new(int().positive()),
/// ];
///
/// assert!(validators[0].validate_any(&"hello".to_string()).is_ok());
/// assert!(validators[1].validate_any(&"hello".to_string()).is_err()); // type mismatch
/// ```
pub trait ValidateAny: Send + Sync {
    /// Checks that `value` has the expected runtime type, then validates it.
    ///
    /// For a boxed value pass `&*boxed`, see [`AnyValue`].
    fn validate_any(&self, value: &dyn AnyValue) -> Result<(), ValidationError>;

    /// Name of the type this validator accepts.
    fn expected_type(&self) -> &'static str;
}

impl<V> ValidateAny for V
where
    V: Validate + Send + Sync,
    V::Input: Any,
{
    fn validate_any(&self, value: &dyn AnyValue) -> Result<(), ValidationError> {
        self.validate(downcast::<V::Input>(value)?)
    }

    fn expected_type(&self) -> &'static str {
        std::any::type_name::<V::Input>()
    }
}

// ============================================================================
// CHECK LIST OWNERS
// ============================================================================

/// Validators that store their constraints in a [`CheckList`].
///
/// Provides the `satisfies` escape hatch to every validator family.
pub trait Constrained: Validate + Sized {
    /// The validator's own checks, in evaluation order.
    fn checks(&self) -> &CheckList<Self::Input>;

    /// Mutable access for appending checks.
    fn checks_mut(&mut self) -> &mut CheckList<Self::Input>;

    /// Appends an arbitrary check.
    ///
    /// Use this when no named constraint covers a need.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use valid::prelude::*;
    ///
    /// let v = int().satisfies(|n: &i32| {
    ///     if n % 2 == 0 { Ok(()) } else { Err(ValidationError::custom("must be even")) }
    /// });
    /// assert!(v.validate(&4).is_ok());
    /// ```
    fn satisfies<F>(mut self, check: F) -> Self
    where
        F: Fn(&Self::Input) -> Result<(), ValidationError> + Send + Sync + 'static,
    {
        self.checks_mut().push(check);
        self
    }
}

// ============================================================================
// TESTS
// ============================================================================
