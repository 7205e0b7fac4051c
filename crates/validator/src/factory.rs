//! Constructor shorthands, one per supported kind.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::foundation::Validate;
use crate::validators::{
    MapValidator, Number, NumberValidator, OptionValidator, Shape, SliceValidator,
    StringValidator, StructValidator,
};

/// Validator for `String`.
#[must_use]
pub fn string() -> StringValidator<String> {
    StringValidator::new()
}

/// Validator for any string-like type.
#[must_use]
pub fn string_like<T: AsRef<str> + 'static>() -> StringValidator<T> {
    StringValidator::new()
}

/// Validator for `Cow<'static, str>`.
#[must_use]
pub fn cow_str() -> StringValidator<Cow<'static, str>> {
    StringValidator::new()
}

/// Validator for any primitive number.
#[must_use]
pub fn numeric<T: Number>() -> NumberValidator<T> {
    NumberValidator::new()
}

macro_rules! number_factories {
    ($($name:ident => $ty:ty),+ $(,)?) => {
        $(
            #[doc = concat!("Validator for `", stringify!($ty), "`.")]
            #[must_use]
            pub fn $name() -> NumberValidator<$ty> {
                NumberValidator::new()
            }
        )+
    };
}

number_factories! {
    int => i32,
    int8 => i8,
    int16 => i16,
    int32 => i32,
    int64 => i64,
    isize => isize,
    uint => u32,
    uint8 => u8,
    uint16 => u16,
    uint32 => u32,
    uint64 => u64,
    usize => usize,
    float32 => f32,
    float64 => f64,
}

/// Validator for `Option<E>` wrapping an element validator.
pub fn optional<V>(elem: V) -> OptionValidator<V>
where
    V: Validate,
    V::Input: 'static,
{
    OptionValidator::new(elem)
}

/// Validator for `Vec<E>` wrapping an element validator.
pub fn slice<V>(elem: V) -> SliceValidator<V>
where
    V: Validate,
    V::Input: 'static,
{
    SliceValidator::new(elem)
}

/// Validator for `HashMap<K, V>`.
#[must_use]
pub fn map<K, V>() -> MapValidator<HashMap<K, V>>
where
    K: Eq + Hash + fmt::Debug + Send + Sync + 'static,
    V: 'static,
{
    MapValidator::new()
}

/// Validator for a record with the given shape.
pub fn structure<T: 'static>(shape: Shape<T>) -> StructValidator<T> {
    StructValidator::new(shape)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>(_: &T) {}

    #[test]
    fn test_built_validators_are_send_and_sync() {
        assert_send_sync(&string());
        assert_send_sync(&string_like::<std::rc::Rc<str>>());
        assert_send_sync(&int());
        assert_send_sync(&map::<String, std::cell::Cell<u8>>());
    }

    #[test]
    fn test_factories_build_working_validators() {
        assert!(string().not_empty().validate(&"x".to_string()).is_ok());
        assert!(string_like::<&'static str>().empty().validate(&"").is_ok());
        assert!(cow_str().min_len(2).validate(&Cow::Borrowed("ab")).is_ok());
        assert!(int().positive().validate(&-1).is_err());
        assert!(uint8().lt(10).validate(&9).is_ok());
        assert!(float64().gt(0.5).validate(&0.25).is_err());
        assert!(numeric::<i128>().zero().validate(&0).is_ok());
        assert!(optional(int()).required().validate(&None).is_err());
        assert!(slice(int()).max_len(1).validate(&vec![1, 2]).is_err());
        assert!(map::<u8, ()>().empty().validate(&HashMap::new()).is_ok());
        assert!(structure(Shape::<()>::new()).validate(&()).is_ok());
    }
}
