use super::{Type, Value};
use crate::Result;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use uuid::Uuid;

/// A plain (non-association) record field type.
///
/// Newtypes get an implementation through `#[derive(Primitive)]`.
pub trait Primitive: Sized {
    /// The declared type of the field.
    fn ty() -> Type;

    /// Reads the current value.
    fn to_value(&self) -> Value;

    /// Builds the field from a value, failing when the value does not fit.
    fn load(value: Value) -> Result<Self>;

    /// Returns `true` if the field holds the zero value of its type.
    fn is_zero(&self) -> bool {
        self.to_value().is_zero()
    }
}

macro_rules! impl_primitive {
    ( $( $ty:ty => $variant:ident, )* ) => {
        $(
            impl Primitive for $ty {
                fn ty() -> Type {
                    Type::$variant
                }

                fn to_value(&self) -> Value {
                    Value::from(self.clone())
                }

                fn load(value: Value) -> Result<Self> {
                    value.try_into()
                }
            }
        )*
    };
}

impl_primitive! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    String => String,
    Vec<u8> => Bytes,
    Uuid => Uuid,
    DateTime<Utc> => DateTime,
    NaiveDateTime => NaiveDateTime,
    NaiveDate => Date,
}

/// A fixed-size array is zero when every byte is.
impl<const N: usize> Primitive for [u8; N] {
    fn ty() -> Type {
        Type::Bytes
    }

    fn to_value(&self) -> Value {
        Value::Bytes(self.to_vec())
    }

    fn load(value: Value) -> Result<Self> {
        value.try_into()
    }

    fn is_zero(&self) -> bool {
        self.iter().all(|b| *b == 0)
    }
}

/// `None` is the zero value; `Some` is always set, even when it wraps a zero.
impl<T: Primitive> Primitive for Option<T> {
    fn ty() -> Type {
        Type::option(T::ty())
    }

    fn to_value(&self) -> Value {
        match self {
            Some(value) => value.to_value(),
            None => Value::Null,
        }
    }

    fn load(value: Value) -> Result<Self> {
        if value.is_null() {
            Ok(None)
        } else {
            Ok(Some(T::load(value)?))
        }
    }

    fn is_zero(&self) -> bool {
        self.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_some_zero_is_set() {
        assert!(Option::<i64>::None.is_zero());
        assert!(!Some(0_i64).is_zero());
        assert_eq!(Some(0_i64).to_value(), Value::I64(0));
    }

    #[test]
    fn option_type() {
        assert_eq!(
            <Option<DateTime<Utc>> as Primitive>::ty(),
            Type::option(Type::DateTime)
        );
    }

    #[test]
    fn byte_array() {
        let uuid = [1_u8; 16];
        assert_eq!(uuid.to_value(), Value::Bytes(vec![1; 16]));
        assert!([0_u8; 16].is_zero());
        assert!(![0_u8, 1].is_zero());
        assert_eq!(<[u8; 16]>::load(Value::Bytes(vec![1; 16])).unwrap(), uuid);
        assert!(<[u8; 16]>::load(Value::Bytes(vec![1; 4])).is_err());
    }

    #[test]
    fn byte_vec_is_zero_only_when_empty() {
        assert!(Vec::<u8>::new().is_zero());
        assert!(!vec![0_u8].is_zero());
        assert!(!vec![0_u8; 16].is_zero());
    }

    #[test]
    fn load_null_into_required_field() {
        let err = i64::load(Value::Null).unwrap_err();
        assert!(err.is_type_conversion());
    }
}
