//! Map-kind validator
//!
//! [`MapValidator`] checks entry count and key presence on any [`Keyed`]
//! collection. Values are not validated automatically; express value-level
//! constraints with [`Constrained::satisfies`](crate::foundation::Constrained::satisfies).

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::{BuildHasher, Hash};

use crate::foundation::{CheckList, Constrained, Validate, ValidationError};

// ============================================================================
// KEYED COLLECTIONS
// ============================================================================

/// Keyed collections that [`MapValidator`] can inspect.
pub trait Keyed {
    /// Key type.
    type Key;

    /// Number of entries.
    fn entry_count(&self) -> usize;

    /// Returns true if `key` is present.
    fn has_key(&self, key: &Self::Key) -> bool;
}

impl<K, V, S> Keyed for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    type Key = K;

    fn entry_count(&self) -> usize {
        self.len()
    }

    fn has_key(&self, key: &K) -> bool {
        self.contains_key(key)
    }
}

impl<K: Ord, V> Keyed for BTreeMap<K, V> {
    type Key = K;

    fn entry_count(&self) -> usize {
        self.len()
    }

    fn has_key(&self, key: &K) -> bool {
        self.contains_key(key)
    }
}

// ============================================================================
// MAP VALIDATOR
// ============================================================================

/// Validates keyed collections.
///
/// # Examples
///
/// ```rust,ignore
/// use std::collections::HashMap;
/// use valid::prelude::*;
///
/// let headers = map::<String, String>()
///     .not_empty()
///     .has_key("host".to_string());
///
/// let mut value = HashMap::new();
/// value.insert("host".to_string(), "example.com".to_string());
/// assert!(headers.validate(&value).is_ok());
/// ```
pub struct MapValidator<M> {
    checks: CheckList<M>,
}

impl<M> MapValidator<M>
where
    M: Keyed + 'static,
    M::Key: fmt::Debug + Send + Sync + 'static,
{
    /// Creates a validator with no constraints.
    #[must_use]
    pub fn new() -> Self {
        Self {
            checks: CheckList::new(),
        }
    }

    /// Fails unless the map has no entries.
    pub fn empty(mut self) -> Self {
        self.checks.push(|map: &M| {
            let len = map.entry_count();
            if len == 0 {
                Ok(())
            } else {
                Err(ValidationError::new(
                    "empty",
                    format!("expected map with {len} entries to be empty"),
                )
                .with_param("actual", len))
            }
        });
        self
    }

    /// Fails if the map has no entries.
    pub fn not_empty(mut self) -> Self {
        self.checks.push(|map: &M| {
            if map.entry_count() == 0 {
                Err(ValidationError::new(
                    "not_empty",
                    "expected map not to be empty",
                ))
            } else {
                Ok(())
            }
        });
        self
    }

    /// Fails unless `key` is present.
    pub fn has_key(mut self, key: M::Key) -> Self {
        self.checks.push(move |map: &M| {
            if map.has_key(&key) {
                Ok(())
            } else {
                Err(ValidationError::new(
                    "has_key",
                    format!("expected map to have key {key:?}"),
                ))
            }
        });
        self
    }

    /// Fails if `key` is present.
    pub fn not_has_key(mut self, key: M::Key) -> Self {
        self.checks.push(move |map: &M| {
            if map.has_key(&key) {
                Err(ValidationError::new(
                    "not_has_key",
                    format!("expected map not to have key {key:?}"),
                ))
            } else {
                Ok(())
            }
        });
        self
    }

    /// Fails unless at least one of `keys` is present.
    ///
    /// An empty key list never passes.
    pub fn has_key_in(mut self, keys: impl IntoIterator<Item = M::Key>) -> Self {
        let keys: Vec<M::Key> = keys.into_iter().collect();
        self.checks.push(move |map: &M| {
            if keys.iter().any(|key| map.has_key(key)) {
                Ok(())
            } else {
                Err(ValidationError::new(
                    "has_key_in",
                    format!("expected map to have at least 1 key in {keys:?}"),
                ))
            }
        });
        self
    }

    /// Fails if any of `keys` is present.
    ///
    /// An empty key list always passes.
    pub fn not_has_key_in(mut self, keys: impl IntoIterator<Item = M::Key>) -> Self {
        let keys: Vec<M::Key> = keys.into_iter().collect();
        self.checks.push(move |map: &M| {
            match keys.iter().find(|key| map.has_key(key)) {
                Some(found) => Err(ValidationError::new(
                    "not_has_key_in",
                    format!("expected map not to have any keys in {keys:?}, found {found:?}"),
                )),
                None => Ok(()),
            }
        });
        self
    }
}

impl<M> Default for MapValidator<M>
where
    M: Keyed + 'static,
    M::Key: fmt::Debug + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<M> fmt::Debug for MapValidator<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapValidator")
            .field("checks", &self.checks)
            .finish()
    }
}

impl<M> Validate for MapValidator<M> {
    type Input = M;

    fn validate(&self, input: &M) -> Result<(), ValidationError> {
        self.checks.evaluate(input)
    }
}

impl<M> Constrained for MapValidator<M> {
    fn checks(&self) -> &CheckList<M> {
        &self.checks
    }

    fn checks_mut(&mut self) -> &mut CheckList<M> {
        &mut self.checks
    }
}

// ============================================================================
// TESTS
// ============================================================================
