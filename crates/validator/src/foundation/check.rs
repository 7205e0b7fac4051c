//! Ordered check storage shared by every validator family

use std::any::Any;
use std::fmt;

use crate::foundation::traits::{AnyValue, downcast};
use crate::foundation::ValidationError;

/// A single predicate over a value.
pub type Check<T> = Box<dyn Fn(&T) -> Result<(), ValidationError> + Send + Sync>;

/// An append-only, ordered list of checks.
///
/// Insertion order is evaluation order. Evaluation stops at the first
/// failing check.
pub struct CheckList<T> {
    checks: Vec<Check<T>>,
}

impl<T> CheckList<T> {
    /// Creates an empty check list.
    #[must_use]
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Appends a check to the end of the list.
    pub fn push<F>(&mut self, check: F)
    where
        F: Fn(&T) -> Result<(), ValidationError> + Send + Sync + 'static,
    {
        self.checks.push(Box::new(check));
    }

    /// Runs every check in order and returns the first failure.
    pub fn evaluate(&self, value: &T) -> Result<(), ValidationError> {
        for (index, check) in self.checks.iter().enumerate() {
            if let Err(error) = check(value) {
                tracing::trace!(index, code = error.code(), "check failed");
                return Err(error);
            }
        }
        Ok(())
    }

    /// Number of stored checks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Returns true if no checks were added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

impl<T: Any> CheckList<T> {
    /// Narrows `value` to `T`, then evaluates it.
    pub fn evaluate_any(&self, value: &dyn AnyValue) -> Result<(), ValidationError> {
        self.evaluate(downcast::<T>(value)?)
    }
}

impl<T> Default for CheckList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for CheckList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckList")
            .field("len", &self.checks.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn fail(code: &'static str) -> impl Fn(&i32) -> Result<(), ValidationError> {
        move |_| Err(ValidationError::new(code, code))
    }

    #[test]
    fn test_empty_list_passes() {
        let list = CheckList::<i32>::new();
        assert!(list.is_empty());
        assert!(list.evaluate(&1).is_ok());
    }

    #[test]
    fn test_first_failure_wins() {
        let mut list = CheckList::new();
        list.push(|_: &i32| Ok(()));
        list.push(fail("second"));
        list.push(fail("third"));

        assert_eq!(list.len(), 3);
        assert_eq!(list.evaluate(&0).unwrap_err().code(), "second");
    }

    #[test]
    fn test_short_circuit_skips_later_checks() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);

        let mut list = CheckList::new();
        list.push(fail("first"));
        list.push(move |_: &i32| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(())
        });

        assert!(list.evaluate(&0).is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_evaluate_any() {
        let mut list = CheckList::new();
        list.push(|n: &i32| {
            if *n > 0 {
                Ok(())
            } else {
                Err(ValidationError::new("positive", "not positive"))
            }
        });

        assert!(list.evaluate_any(&5_i32).is_ok());
        assert_eq!(list.evaluate_any(&-5_i32).unwrap_err().code(), "positive");
        assert!(list.evaluate_any(&5_i64).unwrap_err().is_type_mismatch());
    }
}
