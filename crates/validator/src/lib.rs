//! # valid
//!
//! A composable, type-safe value validation library.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use valid::prelude::*;
//!
//! let age = int().positive().lt(130);
//! assert!(age.validate(&42).is_ok());
//!
//! let tags = slice(string().not_empty()).max_len(3);
//! assert!(tags.validate(&vec!["a".to_string()]).is_ok());
//! ```
//!
//! ## Validator Families
//!
//! - **String**: [`StringValidator`](validators::StringValidator) over any
//!   `AsRef<str>` type
//! - **Numeric**: [`NumberValidator`](validators::NumberValidator) over every
//!   primitive integer and float
//! - **Optional**: [`OptionValidator`](validators::OptionValidator) for `Option<E>`
//! - **Slice**: [`SliceValidator`](validators::SliceValidator) for `Vec<E>`
//! - **Map**: [`MapValidator`](validators::MapValidator) for `HashMap` / `BTreeMap`
//! - **Struct**: [`StructValidator`](validators::StructValidator) driven by a
//!   [`Shape`](validators::Shape)
//!
//! ## Evaluation
//!
//! Constraint methods append checks; checks run in the order they were added
//! and the first failure is returned. Containers validate their elements
//! before their own checks; optionals run their own checks first and then
//! the element validator for a present value; structs validate their fields
//! before their whole-value checks.
//!
//! ## Thread Safety
//!
//! Built validators are `Send + Sync` and can be shared (for example behind
//! an `Arc`) for concurrent `validate` calls. Builder methods consume the
//! validator, so a validator must be fully configured by a single owner
//! before it is shared.
//!
//! ## Features
//!
//! - `regex` (default): `matches` / `not_matches` on strings
//! - `uuid` (default): `valid_uuid` on strings
//! - `serde`: `Serialize` for errors and `ValidationError::to_json_value`

// ValidationError is the single error type for every check; boxing it would
// add indirection to each validation call.
#![allow(clippy::result_large_err)]
// Checks are boxed closures over generic inputs.
#![allow(clippy::type_complexity)]

pub mod factory;
pub mod foundation;
pub mod prelude;
pub mod validators;

pub use factory::*;
