use super::Error;

/// Error when a record's declaration table cannot satisfy the mapping contract.
///
/// This occurs when:
/// - A record declares no fields
/// - Two fields share a column name
/// - More than one field is marked as primary key
/// - A primary key is declared on an association
/// - An association is declared but not exposed by the record accessor
/// - Association nesting exceeds the supported depth
#[derive(Debug)]
pub(super) struct InvalidRecordError {
    message: Box<str>,
}

impl std::error::Error for InvalidRecordError {}

impl core::fmt::Display for InvalidRecordError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid record: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid record error.
    pub fn invalid_record(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidRecord(InvalidRecordError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid record error.
    pub fn is_invalid_record(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidRecord(_))
    }
}
