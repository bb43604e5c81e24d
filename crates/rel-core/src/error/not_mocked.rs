use super::Error;

/// Error raised by a mock adapter when a call matches no registered expectation.
#[derive(Debug)]
pub(super) struct NotMockedError {
    message: Box<str>,
}

impl std::error::Error for NotMockedError {}

impl core::fmt::Display for NotMockedError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error {
    /// Creates a not mocked error carrying the full diagnostic message.
    pub fn not_mocked(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::NotMocked(NotMockedError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a not mocked error.
    pub fn is_not_mocked(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::NotMocked(_))
    }
}
