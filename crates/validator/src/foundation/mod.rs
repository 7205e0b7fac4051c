//! Core validation types and traits
//!
//! - **Traits**: [`Validate`], [`ValidateAny`], [`Constrained`], [`AnyValue`]
//! - **Checks**: [`CheckList`], the ordered store every family embeds
//! - **Errors**: [`ValidationError`], [`Violation`], [`ElementKey`]
//!
//! # Architecture
//!
//! ## 1. Typed and erased entry points
//!
//! Each validator is generic over its input and implements [`Validate`].
//! The blanket [`ValidateAny`] implementation adds an untyped entry point
//! that checks the runtime type before delegating:
//!
//! ```rust,ignore
//! use valid::prelude::*;
//!
//! let v = int().positive();
//! assert!(v.validate(&1).is_ok());
//! assert!(v.validate_any(&1_i32).is_ok());
//! assert!(v.validate_any(&"1").unwrap_err().is_type_mismatch());
//! ```
//!
//! ## 2. Ordered, short-circuiting checks
//!
//! Constraint methods append to a [`CheckList`]. Checks run in the order the
//! methods were called and evaluation stops at the first failure.
//!
//! ## 3. Escape hatch
//!
//! [`Constrained::satisfies`] appends an arbitrary check to any family.

pub mod check;
pub mod error;
pub mod traits;

pub use check::{Check, CheckList};
pub use error::{ElementKey, ValidationError, Violation};
pub use traits::{AnyValue, Constrained, Validate, ValidateAny, downcast};

/// A validation result using [`ValidationError`].
pub type ValidationResult<T = ()> = Result<T, ValidationError>;
