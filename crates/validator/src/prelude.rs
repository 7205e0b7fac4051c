//! Prelude module for convenient imports.
//!
//! Provides a single `use valid::prelude::*;` import that brings in the
//! traits, error types, validator families and constructor shorthands.
//!
//! # Examples
//!
//! ```rust,ignore
//! use valid::prelude::*;
//!
//! let username = string().min_len(3).max_len(20);
//! let tags = slice(string().not_empty()).max_len(10);
//! ```

// ============================================================================
// FOUNDATION: Core traits and errors
// ============================================================================

pub use crate::foundation::{
    AnyValue, CheckList, Constrained, ElementKey, Validate, ValidateAny, ValidationError,
    ValidationResult, Violation,
};

// ============================================================================
// VALIDATORS: Families and their helper types
// ============================================================================

pub use crate::validators::{
    Keyed, LengthMode, MapValidator, Number, NumberValidator, OptionValidator, Shape,
    SliceValidator, StringValidator, StructValidator,
};

// ============================================================================
// FACTORIES
// ============================================================================

pub use crate::factory::{
    cow_str, float32, float64, int, int8, int16, int32, int64, isize, map, numeric, optional,
    slice, string, string_like, structure, uint, uint8, uint16, uint32, uint64, usize,
};
