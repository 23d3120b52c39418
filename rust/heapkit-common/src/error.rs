use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn out_of_range(index: usize, len: usize) -> Error {
        Error(ErrorKind::OutOfRange { index, len }.into())
    }

    pub fn underflow(operation: impl Into<String>) -> Error {
        Error(
            ErrorKind::Underflow {
                operation: operation.into(),
            }
            .into(),
        )
    }

    /// Returns `true` if this error was raised by a pop or peek on an empty container.
    pub fn is_underflow(&self) -> bool {
        matches!(self.kind(), ErrorKind::Underflow { .. })
    }

    /// Returns `true` if this error reports an index or range outside the valid length.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self.kind(), ErrorKind::OutOfRange { .. })
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    /// `index` is the offending position (or range end), `len` the valid length.
    #[error("index {index} out of range for length {len}")]
    OutOfRange { index: usize, len: usize },

    #[error("{operation} on an empty container")]
    Underflow { operation: String },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            Error::out_of_range(7, 3).to_string(),
            "index 7 out of range for length 3"
        );
        assert_eq!(
            Error::underflow("pop").to_string(),
            "pop on an empty container"
        );
        assert_eq!(
            Error::invalid_arg("len", "len >= 0").to_string(),
            "invalid argument len: len >= 0"
        );
    }

    #[test]
    fn test_error_predicates() {
        assert!(Error::underflow("peek").is_underflow());
        assert!(!Error::underflow("peek").is_out_of_range());
        assert!(Error::out_of_range(1, 0).is_out_of_range());
        assert_eq!(
            Error::out_of_range(4, 2).into_kind(),
            ErrorKind::OutOfRange { index: 4, len: 2 }
        );
    }

    #[test]
    fn test_constructors_map_to_kinds() {
        for err in [
            Error::invalid_arg("cap", "cap > 0"),
            Error::out_of_range(2, 1),
            Error::underflow("pop"),
        ] {
            match err.kind() {
                ErrorKind::InvalidArgument { name, .. } => assert_eq!(name, "cap"),
                ErrorKind::OutOfRange { index, len } => assert_eq!((*index, *len), (2, 1)),
                ErrorKind::Underflow { operation } => assert_eq!(operation, "pop"),
            }
        }
    }
}
