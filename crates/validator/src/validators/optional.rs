//! Optional-kind validator
//!
//! Validates `Option<E>` with its own presence checks and an element
//! validator for `E`. Own checks run first; a present value is then always
//! handed to the element validator, whether or not [`OptionValidator::required`]
//! or [`OptionValidator::none`] was configured. `None` is never forwarded.

use std::fmt;

use crate::foundation::{CheckList, Constrained, Validate, ValidationError};

/// Validates optional values.
///
/// # Examples
///
/// ```rust,ignore
/// use valid::prelude::*;
///
/// let v = optional(int().is_in([1, 2, 3])).required();
/// assert!(v.validate(&Some(2)).is_ok());
/// assert!(v.validate(&Some(5)).is_err());
/// assert!(v.validate(&None).is_err());
/// ```
pub struct OptionValidator<V: Validate> {
    elem: V,
    checks: CheckList<Option<V::Input>>,
}

impl<V: Validate> OptionValidator<V>
where
    V::Input: 'static,
{
    /// Wraps an element validator.
    pub fn new(elem: V) -> Self {
        Self {
            elem,
            checks: CheckList::new(),
        }
    }

    /// Fails if the value is present.
    pub fn none(mut self) -> Self {
        self.checks.push(|value: &Option<V::Input>| {
            if value.is_some() {
                Err(ValidationError::new("none", "expected value to be absent"))
            } else {
                Ok(())
            }
        });
        self
    }

    /// Fails if the value is absent.
    pub fn required(mut self) -> Self {
        self.checks.push(|value: &Option<V::Input>| {
            if value.is_none() {
                Err(ValidationError::new("required", "expected value to be present"))
            } else {
                Ok(())
            }
        });
        self
    }
}

impl<V: Validate> OptionValidator<V> {
    /// Returns the element validator.
    pub fn elem_validator(&self) -> &V {
        &self.elem
    }

    /// Extracts the element validator.
    pub fn into_inner(self) -> V {
        self.elem
    }
}

impl<V: Validate> Validate for OptionValidator<V> {
    type Input = Option<V::Input>;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.checks.evaluate(input)?;
        match input {
            Some(value) => self.elem.validate(value),
            None => Ok(()),
        }
    }
}

impl<V: Validate> Constrained for OptionValidator<V> {
    fn checks(&self) -> &CheckList<Self::Input> {
        &self.checks
    }

    fn checks_mut(&mut self) -> &mut CheckList<Self::Input> {
        &mut self.checks
    }
}

impl<V: Validate + fmt::Debug> fmt::Debug for OptionValidator<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionValidator")
            .field("elem", &self.elem)
            .field("checks", &self.checks)
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::{NumberValidator, StringValidator};

    #[test]
    fn test_required() {
        let v = OptionValidator::new(NumberValidator::<i32>::new().is_in([1, 2, 3]).positive())
            .required();
        assert!(v.validate(&Some(2)).is_ok());
        assert_eq!(v.validate(&Some(5)).unwrap_err().code(), "in");
        assert_eq!(v.validate(&None).unwrap_err().code(), "required");
    }

    #[test]
    fn test_present_value_always_reaches_element_validator() {
        let v = OptionValidator::new(StringValidator::<String>::new().contains("foo"));
        assert!(v.validate(&Some("foobar".to_string())).is_ok());
        assert_eq!(
            v.validate(&Some(String::new())).unwrap_err().code(),
            "contains"
        );
        assert!(v.validate(&None).is_ok());
    }

    #[test]
    fn test_none() {
        let v = OptionValidator::new(NumberValidator::<f64>::new().equal_to(2.5)).none();
        assert!(v.validate(&None).is_ok());
        assert_eq!(v.validate(&Some(8.675_309)).unwrap_err().code(), "none");
    }

    #[test]
    fn test_own_checks_run_before_element() {
        let v = OptionValidator::new(NumberValidator::<i32>::new().negative()).none();
        // Both the own check and the element check would fail; own runs first.
        assert_eq!(v.validate(&Some(1)).unwrap_err().code(), "none");
    }

    #[test]
    fn test_satisfies_sees_the_option() {
        let v = OptionValidator::new(NumberValidator::<u8>::new()).satisfies(|value| {
            match value {
                Some(0) => Err(ValidationError::custom("zero is reserved")),
                _ => Ok(()),
            }
        });
        assert!(v.validate(&None).is_ok());
        assert!(v.validate(&Some(1)).is_ok());
        assert!(v.validate(&Some(0)).is_err());
    }

    #[test]
    fn test_elem_validator_accessor() {
        let v = OptionValidator::new(NumberValidator::<i32>::new().positive());
        assert!(v.elem_validator().validate(&1).is_ok());
        assert!(v.into_inner().validate(&-1).is_err());
    }
}
