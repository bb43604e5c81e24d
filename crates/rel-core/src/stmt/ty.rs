use std::fmt;

/// The declared type of a record field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    /// Boolean value
    Bool,

    /// Raw bytes, either a `Vec<u8>` or a fixed size array
    Bytes,

    /// Calendar date without time zone
    Date,

    /// Instant in UTC
    DateTime,

    /// 32-bit float
    F32,

    /// 64-bit float
    F64,

    /// Signed 8-bit integer
    I8,

    /// Signed 16-bit integer
    I16,

    /// Signed 32-bit integer
    I32,

    /// Signed 64-bit integer
    I64,

    /// Date and time without time zone
    NaiveDateTime,

    /// The type of the null value.
    Null,

    /// A nullable value of the inner type (`Option<T>` in Rust)
    Option(Box<Type>),

    /// String type
    String,

    /// Unsigned 8-bit integer
    U8,

    /// Unsigned 16-bit integer
    U16,

    /// Unsigned 32-bit integer
    U32,

    /// Unsigned 64-bit integer
    U64,

    /// 128-bit universally unique identifier
    Uuid,
}

impl Type {
    pub fn option(ty: impl Into<Self>) -> Self {
        Self::Option(Box::new(ty.into()))
    }

    pub fn is_option(&self) -> bool {
        matches!(self, Self::Option(_))
    }

    /// Returns the type without any `Option` wrapper.
    pub fn non_null(&self) -> &Type {
        match self {
            Self::Option(inner) => inner.non_null(),
            ty => ty,
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(
            self.non_null(),
            Self::I8 | Self::I16 | Self::I32 | Self::I64 | Self::U8 | Self::U16 | Self::U32 | Self::U64
        )
    }

    pub fn is_float(&self) -> bool {
        matches!(self.non_null(), Self::F32 | Self::F64)
    }

    /// Returns `true` for types that can hold an automatically populated timestamp.
    pub fn is_time(&self) -> bool {
        matches!(self.non_null(), Self::DateTime | Self::NaiveDateTime)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => f.write_str("bool"),
            Self::Bytes => f.write_str("bytes"),
            Self::Date => f.write_str("NaiveDate"),
            Self::DateTime => f.write_str("DateTime<Utc>"),
            Self::F32 => f.write_str("f32"),
            Self::F64 => f.write_str("f64"),
            Self::I8 => f.write_str("i8"),
            Self::I16 => f.write_str("i16"),
            Self::I32 => f.write_str("i32"),
            Self::I64 => f.write_str("i64"),
            Self::NaiveDateTime => f.write_str("NaiveDateTime"),
            Self::Null => f.write_str("null"),
            Self::Option(inner) => write!(f, "Option<{inner}>"),
            Self::String => f.write_str("String"),
            Self::U8 => f.write_str("u8"),
            Self::U16 => f.write_str("u16"),
            Self::U32 => f.write_str("u32"),
            Self::U64 => f.write_str("u64"),
            Self::Uuid => f.write_str("Uuid"),
        }
    }
}
