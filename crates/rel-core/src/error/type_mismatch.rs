use super::Error;
use crate::stmt::Type;

/// Error when a value is assigned to a record field of an incompatible type.
#[derive(Debug)]
pub(super) struct TypeMismatchError {
    record: &'static str,
    field: Box<str>,
    value_ty: Type,
    field_ty: Type,
}

impl std::error::Error for TypeMismatchError {}

impl core::fmt::Display for TypeMismatchError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "cannot assign {} to {}.{} of type {}",
            self.value_ty, self.record, self.field, self.field_ty
        )
    }
}

impl Error {
    /// Creates a type mismatch error.
    pub fn type_mismatch(record: &'static str, field: &str, value_ty: Type, field_ty: Type) -> Error {
        Error::from(super::ErrorKind::TypeMismatch(TypeMismatchError {
            record,
            field: field.into(),
            value_ty,
            field_ty,
        }))
    }

    /// Returns `true` if this error is a type mismatch error.
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::TypeMismatch(_))
    }
}
