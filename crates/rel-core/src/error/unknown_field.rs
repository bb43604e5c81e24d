use super::Error;

/// Error when a field name does not resolve to a declared record field.
#[derive(Debug)]
pub(super) struct UnknownFieldError {
    record: &'static str,
    field: Box<str>,
}

impl std::error::Error for UnknownFieldError {}

impl core::fmt::Display for UnknownFieldError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unknown field {} on {}", self.field, self.record)
    }
}

impl Error {
    /// Creates an unknown field error.
    pub fn unknown_field(record: &'static str, field: &str) -> Error {
        Error::from(super::ErrorKind::UnknownField(UnknownFieldError {
            record,
            field: field.into(),
        }))
    }

    /// Returns `true` if this error is an unknown field error.
    pub fn is_unknown_field(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnknownField(_))
    }
}
