use super::{Type, Value};

macro_rules! impl_num {
    (
        $(
            $variant:ident($ty:ty) {
                $is:ident
            } )*
    ) => {
        impl Type {
            $(
                pub fn $is(&self) -> bool {
                    matches!(self, Self::$variant)
                }
            )*
        }

        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }

            impl From<&$ty> for Value {
                fn from(value: &$ty) -> Self {
                    Self::$variant(*value)
                }
            }

            // Any integer variant converts as long as it fits the target range.
            impl TryFrom<Value> for $ty {
                type Error = crate::Error;

                fn try_from(value: Value) -> Result<Self, Self::Error> {
                    let converted: Option<$ty> = match &value {
                        Value::I8(v) => (*v).try_into().ok(),
                        Value::I16(v) => (*v).try_into().ok(),
                        Value::I32(v) => (*v).try_into().ok(),
                        Value::I64(v) => (*v).try_into().ok(),
                        Value::U8(v) => (*v).try_into().ok(),
                        Value::U16(v) => (*v).try_into().ok(),
                        Value::U32(v) => (*v).try_into().ok(),
                        Value::U64(v) => (*v).try_into().ok(),
                        _ => None,
                    };

                    converted.ok_or_else(|| crate::Error::type_conversion(value, stringify!($ty)))
                }
            }
        )*
    };
}

impl_num! {
    I8(i8) {
        is_i8
    }
    I16(i16) {
        is_i16
    }
    I32(i32) {
        is_i32
    }
    I64(i64) {
        is_i64
    }
    U8(u8) {
        is_u8
    }
    U16(u16) {
        is_u16
    }
    U32(u32) {
        is_u32
    }
    U64(u64) {
        is_u64
    }
}

impl Value {
    /// Returns the value as an `i64` if it is an integer that fits.
    pub fn to_i64(&self) -> Option<i64> {
        i64::try_from(self.clone()).ok()
    }

    /// Returns `true` if the value loads into a field of type `ty`. Unlike
    /// `is_a`, integers must also fit the range of the declared type.
    pub fn fits(&self, ty: &Type) -> bool {
        if self.is_null() || !self.is_a(ty) {
            return self.is_a(ty);
        }

        match ty.non_null() {
            Type::I8 => i8::try_from(self.clone()).is_ok(),
            Type::I16 => i16::try_from(self.clone()).is_ok(),
            Type::I32 => i32::try_from(self.clone()).is_ok(),
            Type::I64 => i64::try_from(self.clone()).is_ok(),
            Type::U8 => u8::try_from(self.clone()).is_ok(),
            Type::U16 => u16::try_from(self.clone()).is_ok(),
            Type::U32 => u32::try_from(self.clone()).is_ok(),
            Type::U64 => u64::try_from(self.clone()).is_ok(),
            Type::F32 => matches!(self, Self::F32(_)),
            _ => true,
        }
    }
}
