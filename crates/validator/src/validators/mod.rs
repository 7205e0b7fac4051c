//! Built-in validator families
//!
//! - **Primitive**: [`StringValidator`], [`NumberValidator`]
//! - **Containers**: [`SliceValidator`], [`MapValidator`], [`OptionValidator`]
//! - **Records**: [`StructValidator`] with its [`Shape`]
//!
//! Every family stores its constraints in a
//! [`CheckList`](crate::foundation::CheckList), implements
//! [`Validate`](crate::foundation::Validate) and, through it,
//! [`ValidateAny`](crate::foundation::ValidateAny).

pub mod map;
pub mod number;
pub mod optional;
pub mod slice;
pub mod string;
pub mod structure;

pub use map::{Keyed, MapValidator};
pub use number::{Number, NumberValidator};
pub use optional::OptionValidator;
pub use slice::SliceValidator;
pub use string::{LengthMode, StringValidator};
pub use structure::{Shape, ShapeField, StructValidator};
