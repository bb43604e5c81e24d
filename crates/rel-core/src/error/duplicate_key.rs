use super::Error;

/// MySQL server error number for `ER_DUP_ENTRY`.
const MYSQL_DUPLICATE_ENTRY: u16 = 1062;

/// Error when a write violates a unique constraint.
///
/// Adapters translate their engine specific error codes into this kind so
/// callers can react to duplicates without knowing which database is used.
#[derive(Debug)]
pub(super) struct DuplicateKeyError {
    message: Box<str>,
    key: Option<Box<str>>,
}

impl std::error::Error for DuplicateKeyError {}

impl core::fmt::Display for DuplicateKeyError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "duplicate key: {}", self.message)?;
        if let Some(key) = &self.key {
            write!(f, " (key: {key})")?;
        }
        Ok(())
    }
}

impl Error {
    /// Creates a duplicate key error.
    pub fn duplicate_key(message: impl Into<String>, key: Option<&str>) -> Error {
        Error::from(super::ErrorKind::DuplicateKey(DuplicateKeyError {
            message: message.into().into(),
            key: key.map(Into::into),
        }))
    }

    /// Translates a MySQL server error into a rel error.
    ///
    /// `ER_DUP_ENTRY` becomes a duplicate key error, every other code is kept
    /// as an opaque error carrying the code and message.
    pub fn from_mysql(code: u16, message: &str) -> Error {
        if code == MYSQL_DUPLICATE_ENTRY {
            Error::duplicate_key(message, mysql_key(message))
        } else {
            Error::from_args(format_args!("mysql error {code}: {message}"))
        }
    }

    /// Returns `true` if this error is a duplicate key error.
    pub fn is_duplicate_key(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::DuplicateKey(_))
    }

    /// Returns the constraint key of a duplicate key error, if known.
    pub fn duplicate_key_name(&self) -> Option<&str> {
        match self.kind() {
            super::ErrorKind::DuplicateKey(err) => err.key.as_deref(),
            _ => None,
        }
    }
}

/// Constraint name from `Duplicate entry '...' for key '<name>'`.
fn mysql_key(message: &str) -> Option<&str> {
    let (_, rest) = message.rsplit_once("key '")?;
    let (key, _) = rest.split_once('\'')?;
    Some(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mysql_duplicate_entry() {
        let err = Error::from_mysql(1062, "Duplicate entry 'luffy' for key 'name'");
        assert!(err.is_duplicate_key());
        assert_eq!(err.duplicate_key_name(), Some("name"));
        assert_eq!(
            err.to_string(),
            "duplicate key: Duplicate entry 'luffy' for key 'name' (key: name)"
        );
    }

    #[test]
    fn mysql_other_code() {
        let err = Error::from_mysql(1146, "Table 'users' doesn't exist");
        assert!(!err.is_duplicate_key());
        assert_eq!(err.to_string(), "mysql error 1146: Table 'users' doesn't exist");
    }

    #[test]
    fn duplicate_key_with_name() {
        let err = Error::duplicate_key("email already taken", Some("users_email_key"));
        assert_eq!(err.duplicate_key_name(), Some("users_email_key"));
        assert_eq!(
            err.to_string(),
            "duplicate key: email already taken (key: users_email_key)"
        );
    }
}
