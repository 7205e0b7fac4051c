//! Number-kind validator
//!
//! [`NumberValidator`] is generic over every primitive integer and float via
//! the [`Number`] trait. Comparisons use the type's native ordering; there is
//! no overflow handling or cross-type conversion.

use std::fmt;

use crate::foundation::{CheckList, Constrained, Validate, ValidationError};

// ============================================================================
// NUMBER TRAIT
// ============================================================================

/// Primitive numeric types accepted by [`NumberValidator`].
pub trait Number:
    Copy + PartialOrd + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// The additive identity.
    const ZERO: Self;
}

macro_rules! impl_number {
    ($zero:literal => $($ty:ty),+ $(,)?) => {
        $(
            impl Number for $ty {
                const ZERO: Self = $zero;
            }
        )+
    };
}

impl_number!(0 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_number!(0.0 => f32, f64);

// ============================================================================
// NUMBER VALIDATOR
// ============================================================================

/// Validates numeric values.
///
/// # Examples
///
/// ```rust,ignore
/// use valid::prelude::*;
///
/// let age = NumberValidator::<u8>::new().gte(18).lte(100);
/// assert!(age.validate(&42).is_ok());
/// assert!(age.validate(&12).is_err());
/// ```
pub struct NumberValidator<T> {
    checks: CheckList<T>,
}

impl<T: Number> NumberValidator<T> {
    /// Creates a validator with no constraints.
    #[must_use]
    pub fn new() -> Self {
        Self {
            checks: CheckList::new(),
        }
    }

    fn check<F>(mut self, check: F) -> Self
    where
        F: Fn(T) -> Result<(), ValidationError> + Send + Sync + 'static,
    {
        self.checks.push(move |value: &T| check(*value));
        self
    }

    fn compare<F>(self, code: &'static str, relation: &'static str, bound: T, holds: F) -> Self
    where
        F: Fn(T, T) -> bool + Send + Sync + 'static,
    {
        self.check(move |n| {
            if holds(n, bound) {
                Ok(())
            } else {
                Err(ValidationError::new(
                    code,
                    format!("expected {n} to be {relation} {bound}"),
                )
                .with_param("bound", bound)
                .with_param("actual", n))
            }
        })
    }

    /// Fails if the value is below zero. Zero passes.
    pub fn positive(self) -> Self {
        self.check(|n| {
            if n < T::ZERO {
                Err(ValidationError::new(
                    "positive",
                    format!("expected {n} to be positive"),
                ))
            } else {
                Ok(())
            }
        })
    }

    /// Fails if the value is above zero. Zero passes.
    pub fn negative(self) -> Self {
        self.check(|n| {
            if n > T::ZERO {
                Err(ValidationError::new(
                    "negative",
                    format!("expected {n} to be negative"),
                ))
            } else {
                Ok(())
            }
        })
    }

    /// Fails unless the value is zero.
    pub fn zero(self) -> Self {
        self.check(|n| {
            if n == T::ZERO {
                Ok(())
            } else {
                Err(ValidationError::new("zero", format!("expected {n} to be zero")))
            }
        })
    }

    /// Fails if the value is zero.
    pub fn non_zero(self) -> Self {
        self.check(|n| {
            if n == T::ZERO {
                Err(ValidationError::new(
                    "non_zero",
                    format!("expected {n} to be nonzero"),
                ))
            } else {
                Ok(())
            }
        })
    }

    /// Fails unless the value is strictly less than `upper`.
    pub fn lt(self, upper: T) -> Self {
        self.compare("lt", "less than", upper, |n, b| n < b)
    }

    /// Fails unless the value is less than or equal to `upper`.
    pub fn lte(self, upper: T) -> Self {
        self.compare("lte", "less than or equal to", upper, |n, b| n <= b)
    }

    /// Fails unless the value is strictly greater than `lower`.
    pub fn gt(self, lower: T) -> Self {
        self.compare("gt", "greater than", lower, |n, b| n > b)
    }

    /// Fails unless the value is greater than or equal to `lower`.
    pub fn gte(self, lower: T) -> Self {
        self.compare("gte", "greater than or equal to", lower, |n, b| n >= b)
    }

    /// Fails unless the value equals `other`.
    pub fn equal_to(self, other: T) -> Self {
        self.compare("equal_to", "equal to", other, |n, b| n == b)
    }

    /// Fails if the value equals `other`.
    pub fn not_equal_to(self, other: T) -> Self {
        self.compare("not_equal_to", "not equal to", other, |n, b| n != b)
    }

    /// Fails unless the value equals one of `haystack`.
    ///
    /// An empty haystack never passes.
    pub fn is_in(self, haystack: impl IntoIterator<Item = T>) -> Self {
        let haystack: Vec<T> = haystack.into_iter().collect();
        self.check(move |n| {
            if haystack.contains(&n) {
                Ok(())
            } else {
                Err(ValidationError::new(
                    "in",
                    format!("expected {n} to be in {haystack:?}"),
                ))
            }
        })
    }

    /// Fails if the value equals any of `haystack`.
    ///
    /// An empty haystack always passes.
    pub fn not_in(self, haystack: impl IntoIterator<Item = T>) -> Self {
        let haystack: Vec<T> = haystack.into_iter().collect();
        self.check(move |n| {
            if haystack.contains(&n) {
                Err(ValidationError::new(
                    "not_in",
                    format!("expected {n} not to be in {haystack:?}"),
                ))
            } else {
                Ok(())
            }
        })
    }
}

impl<T: Number> Default for NumberValidator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for NumberValidator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumberValidator")
            .field("checks", &self.checks)
            .finish()
    }
}

impl<T> Validate for NumberValidator<T> {
    type Input = T;

    fn validate(&self, input: &T) -> Result<(), ValidationError> {
        self.checks.evaluate(input)
    }
}

impl<T> Constrained for NumberValidator<T> {
    fn checks(&self) -> &CheckList<T> {
        &self.checks
    }

    fn checks_mut(&mut self) -> &mut CheckList<T> {
        &mut self.checks
    }
}

// ============================================================================
// TESTS
// ============================================================================
