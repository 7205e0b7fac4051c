//! String-kind validator
//!
//! [`StringValidator`] works over any type whose contents are a string:
//! `String`, `&'static str`, `Cow<'static, str>`, or a caller newtype that
//! implements `AsRef<str>`. All constraint logic is shared between them.
//!
//! Length is measured in bytes by default. Call
//! [`StringValidator::length_mode`] with [`LengthMode::Chars`] to count
//! Unicode scalar values for the length checks added after it.

use std::fmt;

use crate::foundation::{CheckList, Constrained, Validate, ValidationError};

// ============================================================================
// LENGTH MODE
// ============================================================================

/// How to count string length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LengthMode {
    /// Count bytes.
    #[default]
    Bytes,
    /// Count Unicode scalar values.
    Chars,
}

impl LengthMode {
    /// Measures the length of a string according to this mode.
    #[inline]
    #[must_use]
    pub fn measure(self, input: &str) -> usize {
        match self {
            LengthMode::Bytes => input.len(),
            LengthMode::Chars => input.chars().count(),
        }
    }
}

// ============================================================================
// STRING VALIDATOR
// ============================================================================

/// Validates string-like values.
///
/// # Examples
///
/// ```rust,ignore
/// use valid::prelude::*;
///
/// let username = string().min_len(3).max_len(20).not_contains(" ");
/// assert!(username.validate(&"alice".to_string()).is_ok());
/// assert!(username.validate(&"al".to_string()).is_err());
/// ```
pub struct StringValidator<T> {
    checks: CheckList<T>,
    mode: LengthMode,
}

impl<T> StringValidator<T>
where
    T: AsRef<str> + 'static,
{
    /// Creates a validator with no constraints.
    #[must_use]
    pub fn new() -> Self {
        Self {
            checks: CheckList::new(),
            mode: LengthMode::default(),
        }
    }

    /// Sets how length checks added after this call measure the value.
    pub fn length_mode(mut self, mode: LengthMode) -> Self {
        self.mode = mode;
        self
    }

    /// Current length mode.
    #[must_use]
    pub fn mode(&self) -> LengthMode {
        self.mode
    }

    fn check<F>(mut self, check: F) -> Self
    where
        F: Fn(&str) -> Result<(), ValidationError> + Send + Sync + 'static,
    {
        self.checks.push(move |value: &T| check(value.as_ref()));
        self
    }

    // ── length ──────────────────────────────────────────────────────────

    /// Fails unless the value is empty.
    pub fn empty(self) -> Self {
        self.check(|s| {
            if s.is_empty() {
                Ok(())
            } else {
                Err(ValidationError::new(
                    "empty",
                    format!("expected `{s}` to be empty"),
                ))
            }
        })
    }

    /// Fails if the value is empty.
    pub fn not_empty(self) -> Self {
        self.check(|s| {
            if s.is_empty() {
                Err(ValidationError::new(
                    "not_empty",
                    format!("expected `{s}` not to be empty"),
                ))
            } else {
                Ok(())
            }
        })
    }

    /// Fails unless the length equals `len`.
    pub fn len(self, len: usize) -> Self {
        let mode = self.mode;
        self.check(move |s| {
            let actual = mode.measure(s);
            if actual == len {
                Ok(())
            } else {
                Err(ValidationError::new(
                    "len",
                    format!("expected `{s}` to have len {len}, but got {actual}"),
                )
                .with_param("len", len)
                .with_param("actual", actual))
            }
        })
    }

    /// Fails if the length is below `min`.
    pub fn min_len(self, min: usize) -> Self {
        let mode = self.mode;
        self.check(move |s| {
            let actual = mode.measure(s);
            if actual < min {
                Err(ValidationError::new(
                    "min_len",
                    format!("expected `{s}` to have min len {min}, but got {actual}"),
                )
                .with_param("min", min)
                .with_param("actual", actual))
            } else {
                Ok(())
            }
        })
    }

    /// Fails if the length is above `max`.
    pub fn max_len(self, max: usize) -> Self {
        let mode = self.mode;
        self.check(move |s| {
            let actual = mode.measure(s);
            if actual > max {
                Err(ValidationError::new(
                    "max_len",
                    format!("expected `{s}` to have max len {max}, but got {actual}"),
                )
                .with_param("max", max)
                .with_param("actual", actual))
            } else {
                Ok(())
            }
        })
    }

    // ── equality ────────────────────────────────────────────────────────

    /// Fails unless the value equals `other`.
    pub fn equal_to(self, other: impl Into<String>) -> Self {
        let other = other.into();
        self.check(move |s| {
            if s == other {
                Ok(())
            } else {
                Err(ValidationError::new(
                    "equal_to",
                    format!("expected `{s}` to equal `{other}`"),
                )
                .with_param("other", &other))
            }
        })
    }

    /// Fails if the value equals `other`.
    pub fn not_equal_to(self, other: impl Into<String>) -> Self {
        let other = other.into();
        self.check(move |s| {
            if s == other {
                Err(ValidationError::new(
                    "not_equal_to",
                    format!("expected `{s}` not to equal `{other}`"),
                )
                .with_param("other", &other))
            } else {
                Ok(())
            }
        })
    }

    // ── affixes ─────────────────────────────────────────────────────────

    /// Fails unless the value starts with `prefix`.
    pub fn has_prefix(self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        self.check(move |s| {
            if s.starts_with(prefix.as_str()) {
                Ok(())
            } else {
                Err(ValidationError::new(
                    "has_prefix",
                    format!("expected `{s}` to have prefix `{prefix}`"),
                )
                .with_param("prefix", &prefix))
            }
        })
    }

    /// Fails if the value starts with `prefix`.
    pub fn not_has_prefix(self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        self.check(move |s| {
            if s.starts_with(prefix.as_str()) {
                Err(ValidationError::new(
                    "not_has_prefix",
                    format!("expected `{s}` not to have prefix `{prefix}`"),
                )
                .with_param("prefix", &prefix))
            } else {
                Ok(())
            }
        })
    }

    /// Fails unless the value ends with `suffix`.
    pub fn has_suffix(self, suffix: impl Into<String>) -> Self {
        let suffix = suffix.into();
        self.check(move |s| {
            if s.ends_with(suffix.as_str()) {
                Ok(())
            } else {
                Err(ValidationError::new(
                    "has_suffix",
                    format!("expected `{s}` to have suffix `{suffix}`"),
                )
                .with_param("suffix", &suffix))
            }
        })
    }

    /// Fails if the value ends with `suffix`.
    pub fn not_has_suffix(self, suffix: impl Into<String>) -> Self {
        let suffix = suffix.into();
        self.check(move |s| {
            if s.ends_with(suffix.as_str()) {
                Err(ValidationError::new(
                    "not_has_suffix",
                    format!("expected `{s}` not to have suffix `{suffix}`"),
                )
                .with_param("suffix", &suffix))
            } else {
                Ok(())
            }
        })
    }

    // ── substrings ──────────────────────────────────────────────────────

    /// Fails unless `needle` occurs in the value.
    pub fn contains(self, needle: impl Into<String>) -> Self {
        let needle = needle.into();
        self.check(move |s| {
            if s.contains(needle.as_str()) {
                Ok(())
            } else {
                Err(ValidationError::new(
                    "contains",
                    format!("expected `{s}` to contain `{needle}`"),
                )
                .with_param("needle", &needle))
            }
        })
    }

    /// Fails if `needle` occurs in the value.
    pub fn not_contains(self, needle: impl Into<String>) -> Self {
        let needle = needle.into();
        self.check(move |s| {
            if s.contains(needle.as_str()) {
                Err(ValidationError::new(
                    "not_contains",
                    format!("expected `{s}` not to contain `{needle}`"),
                )
                .with_param("needle", &needle))
            } else {
                Ok(())
            }
        })
    }

    /// Fails if `needle` occurs fewer than `count` times.
    pub fn contains_at_least(self, needle: impl Into<String>, count: usize) -> Self {
        self.count_check(needle.into(), count, Occurrences::AtLeast)
    }

    /// Fails if `needle` occurs more than `count` times.
    pub fn contains_at_most(self, needle: impl Into<String>, count: usize) -> Self {
        self.count_check(needle.into(), count, Occurrences::AtMost)
    }

    /// Fails unless `needle` occurs exactly `count` times.
    pub fn contains_exact(self, needle: impl Into<String>, count: usize) -> Self {
        self.count_check(needle.into(), count, Occurrences::Exactly)
    }

    fn count_check(self, needle: String, count: usize, bound: Occurrences) -> Self {
        self.check(move |s| {
            let actual = count_occurrences(s, &needle);
            if bound.accepts(actual, count) {
                Ok(())
            } else {
                Err(ValidationError::new(
                    bound.code(),
                    format!("expected `{s}` to contain {bound} {count} instances of `{needle}`"),
                )
                .with_param("needle", &needle)
                .with_param("count", count)
                .with_param("actual", actual))
            }
        })
    }

    // ── membership ──────────────────────────────────────────────────────

    /// Fails unless the value equals one of `haystack`.
    ///
    /// An empty haystack never passes.
    pub fn is_in<I, S>(self, haystack: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let haystack: Vec<String> = haystack.into_iter().map(Into::into).collect();
        self.check(move |s| {
            if haystack.iter().any(|candidate| candidate == s) {
                Ok(())
            } else {
                Err(ValidationError::new(
                    "in",
                    format!("expected `{s}` to be in {haystack:?}"),
                ))
            }
        })
    }

    /// Fails if the value equals any of `haystack`.
    ///
    /// An empty haystack always passes.
    pub fn not_in<I, S>(self, haystack: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let haystack: Vec<String> = haystack.into_iter().map(Into::into).collect();
        self.check(move |s| {
            if haystack.iter().any(|candidate| candidate == s) {
                Err(ValidationError::new(
                    "not_in",
                    format!("expected `{s}` not to be in {haystack:?}"),
                ))
            } else {
                Ok(())
            }
        })
    }

    // ── patterns ────────────────────────────────────────────────────────

    /// Fails unless the value matches `regex`.
    #[cfg(feature = "regex")]
    pub fn matches(self, regex: regex::Regex) -> Self {
        self.check(move |s| {
            if regex.is_match(s) {
                Ok(())
            } else {
                Err(ValidationError::new(
                    "matches",
                    format!("expected `{s}` to match regex `{}`", regex.as_str()),
                )
                .with_param("pattern", regex.as_str()))
            }
        })
    }

    /// Fails if the value matches `regex`.
    #[cfg(feature = "regex")]
    pub fn not_matches(self, regex: regex::Regex) -> Self {
        self.check(move |s| {
            if regex.is_match(s) {
                Err(ValidationError::new(
                    "not_matches",
                    format!("expected `{s}` not to match regex `{}`", regex.as_str()),
                )
                .with_param("pattern", regex.as_str()))
            } else {
                Ok(())
            }
        })
    }

    /// Fails unless the value parses as a UUID.
    ///
    /// Hyphenated, simple, braced and URN forms are accepted, as is the nil
    /// UUID.
    #[cfg(feature = "uuid")]
    pub fn valid_uuid(self) -> Self {
        self.check(|s| match uuid::Uuid::parse_str(s) {
            Ok(_) => Ok(()),
            Err(e) => Err(ValidationError::new(
                "valid_uuid",
                format!("expected `{s}` to be a valid uuid: {e}"),
            )),
        })
    }
}

impl<T> Default for StringValidator<T>
where
    T: AsRef<str> + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for StringValidator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringValidator")
            .field("checks", &self.checks)
            .field("mode", &self.mode)
            .finish()
    }
}

impl<T> Validate for StringValidator<T> {
    type Input = T;

    fn validate(&self, input: &T) -> Result<(), ValidationError> {
        self.checks.evaluate(input)
    }
}

impl<T> Constrained for StringValidator<T> {
    fn checks(&self) -> &CheckList<T> {
        &self.checks
    }

    fn checks_mut(&mut self) -> &mut CheckList<T> {
        &mut self.checks
    }
}

// ============================================================================
// OCCURRENCE COUNTING
// ============================================================================

#[derive(Debug, Clone, Copy)]
enum Occurrences {
    AtLeast,
    AtMost,
    Exactly,
}

impl Occurrences {
    fn accepts(self, actual: usize, count: usize) -> bool {
        match self {
            Occurrences::AtLeast => actual >= count,
            Occurrences::AtMost => actual <= count,
            Occurrences::Exactly => actual == count,
        }
    }

    fn code(self) -> &'static str {
        match self {
            Occurrences::AtLeast => "contains_at_least",
            Occurrences::AtMost => "contains_at_most",
            Occurrences::Exactly => "contains_exact",
        }
    }
}

impl fmt::Display for Occurrences {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Occurrences::AtLeast => "at least",
            Occurrences::AtMost => "at most",
            Occurrences::Exactly => "exactly",
        })
    }
}

/// Counts non-overlapping occurrences of `needle`.
///
/// An empty needle occurs once per char boundary.
fn count_occurrences(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

// ============================================================================
// TESTS
// ============================================================================
