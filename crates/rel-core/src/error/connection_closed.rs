use super::Error;

/// Error returned when the adapter's connection is no longer usable.
#[derive(Debug)]
pub(super) struct ConnectionClosedError;

impl std::error::Error for ConnectionClosedError {}

impl core::fmt::Display for ConnectionClosedError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("connection is already closed")
    }
}

impl Error {
    /// Creates a connection closed error.
    pub fn connection_closed() -> Error {
        Error::from(super::ErrorKind::ConnectionClosed(ConnectionClosedError))
    }

    /// Returns `true` if this error is a connection closed error.
    pub fn is_connection_closed(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ConnectionClosed(_))
    }
}
