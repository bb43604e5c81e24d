use super::Error;

/// Error when copying between records of different shapes and the target
/// does not declare a field the source provides.
#[derive(Debug)]
pub(super) struct ShapeMismatchError {
    source: &'static str,
    target: &'static str,
    field: Box<str>,
}

impl std::error::Error for ShapeMismatchError {}

impl core::fmt::Display for ShapeMismatchError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "cannot copy {}.{} into {}: field not declared",
            self.source, self.field, self.target
        )
    }
}

impl Error {
    /// Creates a shape mismatch error.
    pub fn shape_mismatch(source: &'static str, target: &'static str, field: &str) -> Error {
        Error::from(super::ErrorKind::ShapeMismatch(ShapeMismatchError {
            source,
            target,
            field: field.into(),
        }))
    }

    /// Returns `true` if this error is a shape mismatch error.
    pub fn is_shape_mismatch(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ShapeMismatch(_))
    }
}
