//! Struct-kind validator
//!
//! A [`Shape`] maps field names to type-erased validators. Each entry is
//! paired with an accessor that reads the field off the record, so no
//! reflection is needed and the field name only serves reporting.
//!
//! [`StructValidator`] first validates every shape field through the erased
//! entry point, then runs its whole-value checks (`zero`, `not_zero`,
//! `satisfies`) in insertion order.
//!
//! # Examples
//!
//! ```rust,ignore
//! use valid::prelude::*;
//!
//! #[derive(Default, PartialEq)]
//! struct User {
//!     name: String,
//!     age: u8,
//! }
//!
//! let user = structure(
//!     Shape::new()
//!         .field("name", |u: &User| &u.name, string().not_empty())
//!         .field("age", |u: &User| &u.age, numeric::<u8>().gte(18)),
//! )
//! .not_zero();
//! ```

use std::any::Any;
use std::borrow::Cow;
use std::fmt;

use indexmap::IndexMap;

use crate::foundation::{AnyValue, CheckList, Constrained, Validate, ValidateAny, ValidationError};

// ============================================================================
// SHAPE
// ============================================================================

type Probe<T> = Box<dyn Fn(&T, &dyn ValidateAny) -> Result<(), ValidationError> + Send + Sync>;

/// One shape entry: an erased validator and the accessor feeding it.
pub struct ShapeField<T> {
    validator: Box<dyn ValidateAny>,
    probe: Probe<T>,
}

impl<T> ShapeField<T> {
    /// The field's validator.
    pub fn validator(&self) -> &dyn ValidateAny {
        self.validator.as_ref()
    }

    /// Extracts the field from `record` and validates it.
    pub fn validate(&self, record: &T) -> Result<(), ValidationError> {
        (self.probe)(record, self.validator.as_ref())
    }
}

/// Field name to validator mapping owned by a [`StructValidator`].
///
/// Adding a field under an existing name replaces the earlier entry.
pub struct Shape<T> {
    fields: IndexMap<Cow<'static, str>, ShapeField<T>>,
}

impl<T: 'static> Shape<T> {
    /// Creates an empty shape.
    #[must_use]
    pub fn new() -> Self {
        Self {
            fields: IndexMap::new(),
        }
    }

    /// Adds a field with a typed accessor.
    ///
    /// The validator's input type must match what the accessor returns, so
    /// a mismatch is a compile error.
    pub fn field<F, A, V>(self, name: impl Into<Cow<'static, str>>, accessor: A, validator: V) -> Self
    where
        F: Any,
        A: Fn(&T) -> &F,
        A: Send + Sync + 'static,
        V: Validate<Input = F> + Send + Sync + 'static,
    {
        self.insert(
            name.into(),
            Box::new(validator),
            Box::new(move |record: &T, validator: &dyn ValidateAny| {
                validator.validate_any(accessor(record))
            }),
        )
    }

    /// Adds a field with an untyped accessor and an erased validator.
    ///
    /// If the accessor yields a value of another type than the validator
    /// expects, validation fails with [`ValidationError::TypeMismatch`].
    pub fn field_any<A>(
        self,
        name: impl Into<Cow<'static, str>>,
        accessor: A,
        validator: Box<dyn ValidateAny>,
    ) -> Self
    where
        A: Send + Sync + 'static,
        A: Fn(&T) -> &dyn AnyValue,
    {
        self.insert(
            name.into(),
            validator,
            Box::new(move |record: &T, validator: &dyn ValidateAny| {
                validator.validate_any(accessor(record))
            }),
        )
    }

    fn insert(
        mut self,
        name: Cow<'static, str>,
        validator: Box<dyn ValidateAny>,
        probe: Probe<T>,
    ) -> Self {
        self.fields.insert(name, ShapeField { validator, probe });
        self
    }
}

impl<T> Shape<T> {
    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the shape has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(AsRef::as_ref)
    }

    /// Looks up a field by name.
    pub fn get(&self, name: &str) -> Option<&ShapeField<T>> {
        self.fields.get(name)
    }

    /// Iterates over `(name, field)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ShapeField<T>)> {
        self.fields.iter().map(|(name, field)| (name.as_ref(), field))
    }
}

impl<T: 'static> Default for Shape<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Shape<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.fields
                    .iter()
                    .map(|(name, field)| (name, field.validator.expected_type())),
            )
            .finish()
    }
}

// ============================================================================
// STRUCT VALIDATOR
// ============================================================================

/// Validates records field by field, then as a whole.
pub struct StructValidator<T> {
    shape: Shape<T>,
    checks: CheckList<T>,
}

impl<T: 'static> StructValidator<T> {
    /// Creates a validator for the given shape.
    pub fn new(shape: Shape<T>) -> Self {
        Self {
            shape,
            checks: CheckList::new(),
        }
    }
}

impl<T> StructValidator<T> {
    /// Returns the shape.
    pub fn shape(&self) -> &Shape<T> {
        &self.shape
    }
}

impl<T> StructValidator<T>
where
    T: Default + PartialEq + 'static,
{
    /// Fails unless the value equals `T::default()`.
    pub fn zero(mut self) -> Self {
        self.checks.push(|value: &T| {
            if *value == T::default() {
                Ok(())
            } else {
                Err(ValidationError::new(
                    "zero",
                    format!(
                        "expected value to be the zero value of {}",
                        std::any::type_name::<T>()
                    ),
                ))
            }
        });
        self
    }

    /// Fails if the value equals `T::default()`.
    pub fn not_zero(mut self) -> Self {
        self.checks.push(|value: &T| {
            if *value == T::default() {
                Err(ValidationError::new(
                    "not_zero",
                    format!(
                        "expected value not to be the zero value of {}",
                        std::any::type_name::<T>()
                    ),
                ))
            } else {
                Ok(())
            }
        });
        self
    }
}

impl<T> Validate for StructValidator<T> {
    type Input = T;

    fn validate(&self, input: &T) -> Result<(), ValidationError> {
        for (name, field) in &self.shape.fields {
            field
                .validate(input)
                .map_err(|e| ValidationError::at_field(name.clone(), "field", e))?;
        }
        self.checks.evaluate(input)
    }
}

impl<T> Constrained for StructValidator<T> {
    fn checks(&self) -> &CheckList<T> {
        &self.checks
    }

    fn checks_mut(&mut self) -> &mut CheckList<T> {
        &mut self.checks
    }
}

impl<T> fmt::Debug for StructValidator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StructValidator")
            .field("shape", &self.shape)
            .field("checks", &self.checks)
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================
