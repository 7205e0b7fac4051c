//! Slice-kind validator
//!
//! [`SliceValidator`] validates a `Vec<E>` with an element validator for `E`.
//! The element pass always runs before any other constraint: every element is
//! validated in order and the lowest failing index is reported as a
//! [`ValidationError::Element`] wrapping the element's own error.

use std::cmp::Ordering;
use std::fmt;

use crate::foundation::{CheckList, Constrained, Validate, ValidationError};

/// Validates ordered homogeneous collections.
///
/// # Examples
///
/// ```rust,ignore
/// use valid::prelude::*;
///
/// let tags = slice(string().not_empty().max_len(16)).max_len(5);
/// assert!(tags.validate(&vec!["rust".to_string()]).is_ok());
///
/// let err = tags.validate(&vec!["ok".to_string(), String::new()]).unwrap_err();
/// assert_eq!(err.path(), "[1]");
/// ```
pub struct SliceValidator<V: Validate> {
    elem: V,
    checks: CheckList<Vec<V::Input>>,
}

impl<V: Validate> SliceValidator<V>
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

    fn check<F>(mut self, check: F) -> Self
    where
        F: Fn(&[V::Input]) -> Result<(), ValidationError> + Send + Sync + 'static,
    {
        self.checks.push(move |items: &Vec<V::Input>| check(items.as_slice()));
        self
    }

    // ── length ──────────────────────────────────────────────────────────

    /// Fails unless the collection is empty.
    pub fn empty(self) -> Self {
        self.check(|items| {
            if items.is_empty() {
                Ok(())
            } else {
                Err(ValidationError::new(
                    "empty",
                    format!("expected collection of {} elements to be empty", items.len()),
                )
                .with_param("actual", items.len()))
            }
        })
    }

    /// Fails if the collection is empty.
    pub fn not_empty(self) -> Self {
        self.check(|items| {
            if items.is_empty() {
                Err(ValidationError::new(
                    "not_empty",
                    "expected collection not to be empty",
                ))
            } else {
                Ok(())
            }
        })
    }

    /// Fails unless the collection has exactly `len` elements.
    pub fn len(self, len: usize) -> Self {
        self.check(move |items| {
            if items.len() == len {
                Ok(())
            } else {
                Err(ValidationError::new(
                    "len",
                    format!("expected collection to have len {len}, but got {}", items.len()),
                )
                .with_param("len", len)
                .with_param("actual", items.len()))
            }
        })
    }

    /// Fails if the collection has fewer than `min` elements.
    pub fn min_len(self, min: usize) -> Self {
        self.check(move |items| {
            if items.len() < min {
                Err(ValidationError::new(
                    "min_len",
                    format!(
                        "expected collection to have min len {min}, but got {}",
                        items.len()
                    ),
                )
                .with_param("min", min)
                .with_param("actual", items.len()))
            } else {
                Ok(())
            }
        })
    }

    /// Fails if the collection has more than `max` elements.
    pub fn max_len(self, max: usize) -> Self {
        self.check(move |items| {
            if items.len() > max {
                Err(ValidationError::new(
                    "max_len",
                    format!(
                        "expected collection to have max len {max}, but got {}",
                        items.len()
                    ),
                )
                .with_param("max", max)
                .with_param("actual", items.len()))
            } else {
                Ok(())
            }
        })
    }

    // ── element predicates ──────────────────────────────────────────────

    /// Fails unless every element passes `validator`.
    ///
    /// Reports the first failing index.
    pub fn all_satisfy<W>(self, validator: W) -> Self
    where
        W: Validate<Input = V::Input> + Send + Sync + 'static,
    {
        self.check(move |items| {
            for (index, item) in items.iter().enumerate() {
                validator
                    .validate(item)
                    .map_err(|e| ValidationError::at_index(index, "all_satisfy", e))?;
            }
            Ok(())
        })
    }

    /// Fails unless at least one element passes `validator`.
    ///
    /// An empty collection always fails.
    pub fn any_satisfy<W>(self, validator: W) -> Self
    where
        W: Validate<Input = V::Input> + Send + Sync + 'static,
    {
        self.check(move |items| {
            if items.iter().any(|item| validator.validate(item).is_ok()) {
                Ok(())
            } else {
                Err(ValidationError::new(
                    "any_satisfy",
                    format!(
                        "expected at least one of {} elements to pass validator",
                        items.len()
                    ),
                ))
            }
        })
    }

    /// Fails if any element passes `validator`.
    ///
    /// Reports the first index that passed. An empty collection always
    /// passes.
    pub fn none_satisfy<W>(self, validator: W) -> Self
    where
        W: Validate<Input = V::Input> + Send + Sync + 'static,
    {
        self.check(move |items| {
            match items
                .iter()
                .position(|item| validator.validate(item).is_ok())
            {
                Some(index) => Err(ValidationError::new(
                    "none_satisfy",
                    format!("element at index {index} passed validator"),
                )
                .with_param("index", index)),
                None => Ok(()),
            }
        })
    }

    /// Fails unless every adjacent pair is ordered by `compare`.
    pub fn sorted_by<F>(self, compare: F) -> Self
    where
        F: Fn(&V::Input, &V::Input) -> Ordering + Send + Sync + 'static,
    {
        self.check(move |items| match first_descent(items, &compare) {
            Some(index) => Err(ValidationError::new(
                "sorted",
                format!("expected collection to be sorted, but element at index {index} is out of order"),
            )
            .with_param("index", index)),
            None => Ok(()),
        })
    }
}

impl<V: Validate> SliceValidator<V>
where
    V::Input: PartialEq + fmt::Debug + Send + Sync + 'static,
{
    /// Fails unless `needle` is an element.
    pub fn contains(self, needle: V::Input) -> Self {
        self.check(move |items| {
            if items.contains(&needle) {
                Ok(())
            } else {
                Err(ValidationError::new(
                    "contains",
                    format!("expected collection to contain {needle:?}"),
                ))
            }
        })
    }

    /// Fails if `needle` is an element.
    pub fn not_contains(self, needle: V::Input) -> Self {
        self.check(move |items| match items.iter().position(|item| *item == needle) {
            Some(index) => Err(ValidationError::new(
                "not_contains",
                format!("expected collection not to contain {needle:?}, found at index {index}"),
            )
            .with_param("index", index)),
            None => Ok(()),
        })
    }

    /// Fails if `needle` occurs fewer than `count` times.
    pub fn contains_at_least(self, needle: V::Input, count: usize) -> Self {
        self.count_check("contains_at_least", "at least", needle, count, |a, c| a >= c)
    }

    /// Fails if `needle` occurs more than `count` times.
    pub fn contains_at_most(self, needle: V::Input, count: usize) -> Self {
        self.count_check("contains_at_most", "at most", needle, count, |a, c| a <= c)
    }

    /// Fails unless `needle` occurs exactly `count` times.
    pub fn contains_exact(self, needle: V::Input, count: usize) -> Self {
        self.count_check("contains_exact", "exactly", needle, count, |a, c| a == c)
    }

    fn count_check(
        self,
        code: &'static str,
        bound: &'static str,
        needle: V::Input,
        count: usize,
        accepts: fn(usize, usize) -> bool,
    ) -> Self {
        self.check(move |items| {
            let actual = items.iter().filter(|item| **item == needle).count();
            if accepts(actual, count) {
                Ok(())
            } else {
                Err(ValidationError::new(
                    code,
                    format!(
                        "expected collection to contain {bound} {count} instances of {needle:?}, but found {actual}"
                    ),
                )
                .with_param("count", count)
                .with_param("actual", actual))
            }
        })
    }
}

impl<V: Validate> SliceValidator<V>
where
    V::Input: PartialOrd + 'static,
{
    /// Fails unless the elements are in non-decreasing order.
    ///
    /// An incomparable pair (e.g. a float NaN) counts as out of order. Use
    /// `sorted_by(f64::total_cmp)` for a total order over floats.
    pub fn sorted(self) -> Self {
        self.sorted_by(partial_order)
    }

    /// Fails if the elements are in non-decreasing order.
    ///
    /// Empty and single-element collections count as sorted. An
    /// incomparable pair counts as out of order.
    pub fn unsorted(self) -> Self {
        self.check(|items| {
            if first_descent(items, &partial_order).is_some() {
                Ok(())
            } else {
                Err(ValidationError::new(
                    "unsorted",
                    "expected collection not to be sorted",
                ))
            }
        })
    }
}

impl<V: Validate> SliceValidator<V> {
    /// Returns the element validator.
    pub fn elem_validator(&self) -> &V {
        &self.elem
    }
}

/// Orders by `PartialOrd`, treating incomparable pairs as descending.
fn partial_order<E: PartialOrd>(a: &E, b: &E) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Greater)
}

/// Index of the first element that sorts before its predecessor.
fn first_descent<E, F>(items: &[E], compare: &F) -> Option<usize>
where
    F: Fn(&E, &E) -> Ordering,
{
    items
        .windows(2)
        .position(|pair| compare(&pair[0], &pair[1]) == Ordering::Greater)
        .map(|i| i + 1)
}

impl<V: Validate> Validate for SliceValidator<V> {
    type Input = Vec<V::Input>;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        for (index, item) in input.iter().enumerate() {
            self.elem
                .validate(item)
                .map_err(|e| ValidationError::at_index(index, "elements", e))?;
        }
        self.checks.evaluate(input)
    }
}

impl<V: Validate> Constrained for SliceValidator<V> {
    fn checks(&self) -> &CheckList<Self::Input> {
        &self.checks
    }

    fn checks_mut(&mut self) -> &mut CheckList<Self::Input> {
        &mut self.checks
    }
}

impl<V: Validate + fmt::Debug> fmt::Debug for SliceValidator<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceValidator")
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
    use crate::foundation::ElementKey;
    use crate::validators::{NumberValidator, StringValidator};

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    fn ints() -> NumberValidator<i32> {
        NumberValidator::new()
    }

    #[test]
    fn test_element_failure_reports_lowest_index() {
        let v = SliceValidator::new(ints().positive());
        let err = v.validate(&vec![1, -2, -3]).unwrap_err();

        assert_eq!(err.keys(), vec![&ElementKey::Index(1)]);
        assert_eq!(err.code(), "positive");
        assert_eq!(err.path(), "[1]");
    }

    #[test]
    fn test_element_check_runs_first() {
        let v = SliceValidator::new(ints().positive()).max_len(1);
        // Too long and containing a bad element: the element error wins.
        let err = v.validate(&vec![1, -1]).unwrap_err();
        assert!(matches!(err, ValidationError::Element { constraint: "elements", .. }));
    }

    #[test]
    fn test_length_constraints() {
        let v = SliceValidator::new(ints()).not_empty().min_len(2).max_len(3);
        assert!(v.validate(&vec![1, 2]).is_ok());
        assert!(v.validate(&vec![1, 2, 3]).is_ok());
        assert_eq!(v.validate(&vec![]).unwrap_err().code(), "not_empty");
        assert_eq!(v.validate(&vec![1]).unwrap_err().code(), "min_len");
        assert_eq!(v.validate(&vec![1, 2, 3, 4]).unwrap_err().code(), "max_len");

        let empty = SliceValidator::new(ints()).empty();
        assert!(empty.validate(&vec![]).is_ok());
        assert!(empty.validate(&vec![1]).is_err());
    }

    #[test]
    fn test_len_fails_when_length_differs() {
        let v = SliceValidator::new(ints()).len(2);
        // Equal length passes, matching the string `len` polarity.
        assert!(v.validate(&vec![1, 2]).is_ok());
        // Any other length fails.
        assert_eq!(v.validate(&vec![1]).unwrap_err().code(), "len");
        assert_eq!(v.validate(&vec![1, 2, 3]).unwrap_err().code(), "len");
    }

    #[test]
    fn test_all_satisfy() {
        let v = SliceValidator::new(ints()).all_satisfy(ints().lt(10));
        assert!(v.validate(&vec![1, 2, 9]).is_ok());
        assert!(v.validate(&vec![]).is_ok());

        let err = v.validate(&vec![1, 10, 11]).unwrap_err();
        assert_eq!(err.path(), "[1]");
        assert!(matches!(err, ValidationError::Element { constraint: "all_satisfy", .. }));
    }

    #[test]
    fn test_any_satisfy() {
        let v = SliceValidator::new(ints()).any_satisfy(ints().zero());
        assert!(v.validate(&vec![3, 0]).is_ok());
        assert_eq!(v.validate(&vec![1, 2]).unwrap_err().code(), "any_satisfy");
        assert!(v.validate(&vec![]).is_err());
    }

    #[test]
    fn test_none_satisfy() {
        let v = SliceValidator::new(StringValidator::<String>::new())
            .none_satisfy(StringValidator::<String>::new().equal_to("nope"));
        assert!(v.validate(&strings(&["yes", "maybe"])).is_ok());
        assert!(v.validate(&vec![]).is_ok());

        let err = v.validate(&strings(&["yes", "nope", "nope"])).unwrap_err();
        assert_eq!(err.code(), "none_satisfy");
        assert_eq!(err.violation().unwrap().param("index"), Some("1"));
    }

    #[test]
    fn test_contains_family() {
        let v = SliceValidator::new(ints()).contains(2).not_contains(7);
        assert!(v.validate(&vec![1, 2]).is_ok());
        assert_eq!(v.validate(&vec![1]).unwrap_err().code(), "contains");
        assert_eq!(v.validate(&vec![2, 7]).unwrap_err().code(), "not_contains");

        let v = SliceValidator::new(ints())
            .contains_at_least(1, 2)
            .contains_at_most(1, 3);
        assert!(v.validate(&vec![1, 1]).is_ok());
        assert!(v.validate(&vec![1, 1, 1]).is_ok());
        assert_eq!(v.validate(&vec![1]).unwrap_err().code(), "contains_at_least");
        assert_eq!(
            v.validate(&vec![1, 1, 1, 1]).unwrap_err().code(),
            "contains_at_most"
        );

        let exact = SliceValidator::new(ints()).contains_exact(0, 1);
        assert!(exact.validate(&vec![0, 1]).is_ok());
        assert!(exact.validate(&vec![0, 0]).is_err());
    }

    #[test]
    fn test_sorted_and_unsorted() {
        let sorted = SliceValidator::new(ints()).sorted();
        assert!(sorted.validate(&vec![]).is_ok());
        assert!(sorted.validate(&vec![1, 1, 2]).is_ok());
        let err = sorted.validate(&vec![1, 3, 2]).unwrap_err();
        assert_eq!(err.violation().unwrap().param("index"), Some("2"));

        let unsorted = SliceValidator::new(ints()).unsorted();
        assert!(unsorted.validate(&vec![2, 1]).is_ok());
        assert!(unsorted.validate(&vec![1, 2]).is_err());
        assert!(unsorted.validate(&vec![]).is_err());
    }

    #[test]
    fn test_nan_is_out_of_order() {
        let sorted = SliceValidator::new(NumberValidator::<f64>::new()).sorted();
        let err = sorted.validate(&vec![3.0, f64::NAN, 1.0]).unwrap_err();
        assert_eq!(err.code(), "sorted");
        assert_eq!(err.violation().unwrap().param("index"), Some("1"));
        assert!(sorted.validate(&vec![1.0, 2.0]).is_ok());

        let unsorted = SliceValidator::new(NumberValidator::<f64>::new()).unsorted();
        assert!(unsorted.validate(&vec![1.0, f64::NAN]).is_ok());

        let total = SliceValidator::new(NumberValidator::<f64>::new()).sorted_by(f64::total_cmp);
        assert!(total.validate(&vec![-1.0, 2.0, f64::NAN]).is_ok());
    }

    #[test]
    fn test_sorted_by() {
        let descending = SliceValidator::new(ints()).sorted_by(|a, b| b.cmp(a));
        assert!(descending.validate(&vec![3, 2, 1]).is_ok());
        assert!(descending.validate(&vec![1, 2]).is_err());
    }

    #[test]
    fn test_nested_slices_build_paths() {
        let v = SliceValidator::new(SliceValidator::new(ints().non_zero()));
        let err = v.validate(&vec![vec![1], vec![2, 0]]).unwrap_err();
        assert_eq!(err.path(), "[1][1]");
        assert_eq!(err.code(), "non_zero");
    }

    #[test]
    fn test_elem_validator_accessor() {
        let v = SliceValidator::new(ints().positive());
        assert!(v.elem_validator().validate(&-1).is_err());
    }
}
