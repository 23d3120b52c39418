pub type Result<T> = std::result::Result<T, crate::error::Error>;

#[macro_export]
macro_rules! verify_arg {
    ($name:expr, $expr:expr) => {{
        let result = $expr;
        $crate::result::verify_arg(result, stringify!($name), stringify!($expr))?;
    }};
}

#[inline]
pub fn verify_arg(predicate: bool, name: &str, condition: &str) -> Result<()> {
    if predicate {
        Ok(())
    } else {
        invalid_arg(name, condition)
    }
}

/// Verifies that `index` addresses an element of a sequence of length `len`.
#[inline]
pub fn verify_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        out_of_range(index, len)
    }
}

/// Verifies that the half-open range `[from, to)` lies within a sequence of length `len`.
///
/// A reversed range (`from > to`) is reported against `to`, i.e. the start is out
/// of range for a window ending at `to`.
#[inline]
pub fn verify_range(from: usize, to: usize, len: usize) -> Result<()> {
    if to > len {
        out_of_range(to, len)
    } else if from > to {
        out_of_range(from, to)
    } else {
        Ok(())
    }
}

#[cold]
pub fn invalid_arg(name: &str, condition: &str) -> Result<()> {
    Err(crate::error::ErrorKind::InvalidArgument {
        name: name.to_string(),
        message: condition.to_string(),
    }
    .into())
}

#[cold]
pub fn out_of_range(index: usize, len: usize) -> Result<()> {
    Err(crate::error::ErrorKind::OutOfRange { index, len }.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn checked(len: isize) -> Result<usize> {
        verify_arg!(len, len >= 0);
        Ok(len as usize)
    }

    #[test]
    fn test_verify_arg_macro() {
        assert_eq!(checked(3).unwrap(), 3);
        let err = checked(-1).unwrap_err();
        assert_eq!(
            err.into_kind(),
            ErrorKind::InvalidArgument {
                name: "len".to_string(),
                message: "len >= 0".to_string(),
            }
        );
    }

    #[test]
    fn test_verify_index() {
        assert!(verify_index(0, 1).is_ok());
        assert!(verify_index(1, 1).unwrap_err().is_out_of_range());
        assert!(verify_index(0, 0).is_err());
    }

    #[test]
    fn test_verify_range() {
        assert!(verify_range(0, 0, 0).is_ok());
        assert!(verify_range(2, 5, 5).is_ok());
        assert_eq!(
            verify_range(2, 6, 5).unwrap_err().into_kind(),
            ErrorKind::OutOfRange { index: 6, len: 5 }
        );
        assert_eq!(
            verify_range(4, 3, 5).unwrap_err().into_kind(),
            ErrorKind::OutOfRange { index: 4, len: 3 }
        );
    }
}
