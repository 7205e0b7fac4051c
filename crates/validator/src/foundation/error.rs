//! Error types for validation failures
//!
//! Every validator returns a single [`ValidationError`] describing the first
//! violated constraint. Containers wrap the error of a failing element or
//! field in [`ValidationError::Element`], so the full path to the offending
//! value can be rebuilt with [`ValidationError::path`].
//!
//! Codes use `Cow<'static, str>` so the built-in constraints never allocate
//! for them.

use std::borrow::Cow;
use std::fmt;

use smallvec::SmallVec;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// The failure returned by every validator.
///
/// # Examples
///
/// ```rust,ignore
/// use valid::prelude::*;
///
/// let err = int().positive().validate(&-1).unwrap_err();
/// assert_eq!(err.code(), "positive");
/// ```
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
#[non_exhaustive]
pub enum ValidationError {
    /// An erased entry point received a value of the wrong runtime type.
    #[error("expected value of type `{expected}`, but found `{actual}`")]
    TypeMismatch {
        /// Type the validator was built for.
        expected: &'static str,
        /// Type of the value that was supplied.
        actual: &'static str,
    },

    /// A single named constraint was violated.
    #[error(transparent)]
    Constraint(#[from] Violation),

    /// An element of a collection or a field of a record failed its
    /// nested validator.
    #[error("{key} did not satisfy {constraint}: {source}")]
    Element {
        /// Index or field name of the failing sub-value.
        key: ElementKey,
        /// Which check delegated to the nested validator.
        constraint: &'static str,
        /// Error produced by the nested validator.
        source: Box<ValidationError>,
    },
}

impl ValidationError {
    /// Creates a constraint violation with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<String>) -> Self {
        Self::Constraint(Violation::new(code, message))
    }

    /// Creates a `custom` violation, typically from a `satisfies` check.
    pub fn custom(message: impl Into<String>) -> Self {
        Self::new("custom", message)
    }

    /// Creates a type mismatch error.
    #[must_use]
    pub fn type_mismatch(expected: &'static str, actual: &'static str) -> Self {
        Self::TypeMismatch { expected, actual }
    }

    /// Wraps `source` as the failure of the element at `index`.
    #[must_use]
    pub fn at_index(index: usize, constraint: &'static str, source: ValidationError) -> Self {
        Self::Element {
            key: ElementKey::Index(index),
            constraint,
            source: Box::new(source),
        }
    }

    /// Wraps `source` as the failure of the field `name`.
    pub fn at_field(
        name: impl Into<Cow<'static, str>>,
        constraint: &'static str,
        source: ValidationError,
    ) -> Self {
        Self::Element {
            key: ElementKey::Field(name.into()),
            constraint,
            source: Box::new(source),
        }
    }

    /// Adds a parameter when this is a constraint violation.
    ///
    /// Other variants are returned unchanged.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(self, key: impl Into<Cow<'static, str>>, value: impl ToString) -> Self {
        match self {
            Self::Constraint(v) => Self::Constraint(v.with_param(key, value)),
            other => other,
        }
    }

    /// Stable code of this error.
    ///
    /// For element errors this is the code of the innermost cause.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::TypeMismatch { .. } => "type_mismatch",
            Self::Constraint(v) => &v.code,
            Self::Element { source, .. } => source.code(),
        }
    }

    /// Follows nested element errors down to the error that started it.
    #[must_use]
    pub fn root_cause(&self) -> &ValidationError {
        let mut current = self;
        while let Self::Element { source, .. } = current {
            current = source;
        }
        current
    }

    /// The innermost violation, if the root cause is a constraint.
    #[must_use]
    pub fn violation(&self) -> Option<&Violation> {
        match self.root_cause() {
            Self::Constraint(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the keys from the outermost container down to the failing
    /// value.
    #[must_use]
    pub fn keys(&self) -> Vec<&ElementKey> {
        let mut keys = Vec::new();
        let mut current = self;
        while let Self::Element { key, source, .. } = current {
            keys.push(key);
            current = source;
        }
        keys
    }

    /// Renders the element path, e.g. `owner.tags[2]`.
    ///
    /// Empty when the error did not come from a nested value.
    #[must_use]
    pub fn path(&self) -> String {
        let mut path = String::new();
        for key in self.keys() {
            match key {
                ElementKey::Index(i) => {
                    path.push('[');
                    path.push_str(&i.to_string());
                    path.push(']');
                }
                ElementKey::Field(name) => {
                    if !path.is_empty() {
                        path.push('.');
                    }
                    path.push_str(name);
                }
            }
        }
        path
    }

    /// Returns true for [`ValidationError::TypeMismatch`], at any depth.
    #[must_use]
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self.root_cause(), Self::TypeMismatch { .. })
    }

    /// Converts the error to a JSON value.
    #[cfg(feature = "serde")]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

// ============================================================================
// ELEMENT KEY
// ============================================================================

/// Locates a sub-value inside its container.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ElementKey {
    /// Position in an ordered collection.
    Index(usize),
    /// Named field of a record.
    Field(Cow<'static, str>),
}

impl fmt::Display for ElementKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(i) => write!(f, "element at index {i}"),
            Self::Field(name) => write!(f, "field `{name}`"),
        }
    }
}

// ============================================================================
// VIOLATION
// ============================================================================

/// A failed constraint: stable code, message, and the parameters involved.
///
/// Parameters are stored as ordered key-value pairs, typically one to three.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[error("{message}")]
pub struct Violation {
    /// Machine-readable code, e.g. `min_len`.
    pub code: Cow<'static, str>,
    /// Human-readable message naming the offending value.
    pub message: String,
    /// Constraint parameters, e.g. `[("min", "3"), ("actual", "1")]`.
    pub params: SmallVec<[(Cow<'static, str>, String); 2]>,
}

impl Violation {
    /// Creates a violation without parameters.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            params: SmallVec::new(),
        }
    }

    /// Adds a parameter.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(mut self, key: impl Into<Cow<'static, str>>, value: impl ToString) -> Self {
        self.params.push((key.into(), value.to_string()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_str())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constraint_error() {
        let error = ValidationError::new("min_len", "expected `ab` to have min len 3, but got 2")
            .with_param("min", 3)
            .with_param("actual", 2);

        assert_eq!(error.code(), "min_len");
        let violation = error.violation().unwrap();
        assert_eq!(violation.param("min"), Some("3"));
        assert_eq!(violation.param("actual"), Some("2"));
        assert_eq!(violation.param("max"), None);
        assert_eq!(
            error.to_string(),
            "expected `ab` to have min len 3, but got 2"
        );
    }

    #[test]
    fn test_type_mismatch_display() {
        let error = ValidationError::type_mismatch("i32", "alloc::string::String");
        assert!(error.is_type_mismatch());
        assert_eq!(error.code(), "type_mismatch");
        assert!(error.to_string().contains("`i32`"));
    }

    #[test]
    fn test_nested_path() {
        let inner = ValidationError::new("not_empty", "expected `` not to be empty");
        let error = ValidationError::at_field(
            "owner",
            "field",
            ValidationError::at_field(
                "tags",
                "field",
                ValidationError::at_index(2, "elements", inner.clone()),
            ),
        );

        assert_eq!(error.path(), "owner.tags[2]");
        assert_eq!(error.root_cause(), &inner);
        assert_eq!(error.code(), "not_empty");
        assert_eq!(error.keys().len(), 3);
    }

    #[test]
    fn test_element_display_wraps_source() {
        let error = ValidationError::at_index(0, "elements", ValidationError::custom("boom"));
        assert_eq!(
            error.to_string(),
            "element at index 0 did not satisfy elements: boom"
        );
    }

    #[test]
    fn test_with_param_ignores_non_constraints() {
        let error = ValidationError::type_mismatch("u8", "i8").with_param("ignored", 1);
        assert_eq!(error, ValidationError::type_mismatch("u8", "i8"));
    }

    #[test]
    fn test_static_code_is_borrowed() {
        let error = Violation::new("required", "value is required");
        assert!(matches!(error.code, Cow::Borrowed(_)));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_shape_of_nested_error() {
        use serde_json::json;

        let error = ValidationError::at_field(
            "owner",
            "field",
            ValidationError::at_index(
                1,
                "elements",
                ValidationError::new("positive", "expected -1 to be positive")
                    .with_param("actual", -1),
            ),
        );

        assert_eq!(
            error.to_json_value(),
            json!({
                "kind": "element",
                "key": { "field": "owner" },
                "constraint": "field",
                "source": {
                    "kind": "element",
                    "key": { "index": 1 },
                    "constraint": "elements",
                    "source": {
                        "kind": "constraint",
                        "code": "positive",
                        "message": "expected -1 to be positive",
                        "params": [["actual", "-1"]],
                    },
                },
            })
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_shape_of_type_mismatch() {
        let error = ValidationError::type_mismatch("i32", "u8");
        assert_eq!(
            error.to_json_value(),
            serde_json::json!({ "kind": "type_mismatch", "expected": "i32", "actual": "u8" })
        );
    }
}
