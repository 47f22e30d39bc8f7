use std::fmt::{Debug, Display};

#[macro_export]
macro_rules! unwrap_or_return_some_err {
    ($expression:expr) => {
        match $expression {
            Ok(v) => v,
            Err(e) => return Some(Err(e)),
        }
    };
}

/// Trait for specifying getting exit codes from errors.
pub trait GetCode {
    fn get_code(&self) -> i32 {
        1
    }
}

impl GetCode for std::io::Error {
    #[must_use]
    #[inline]
    fn get_code(&self) -> i32 {
        self.raw_os_error().unwrap_or(1)
    }
}

/// Errors arising when building a [`Sequence`] from raw bytes.
///
/// [`Sequence`]: super::sequence::Sequence
#[derive(Clone, Eq, PartialEq, Hash)]
pub enum SequenceError {
    /// A byte outside of the alphabet was found at the given position
    InvalidSymbol {
        symbol:   u8,
        position: usize,
        alphabet: &'static str,
    },
    /// The gap symbol was found at the given position
    GapInInput(usize),
}

impl Display for SequenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            SequenceError::InvalidSymbol {
                symbol,
                position,
                alphabet,
            } => write!(
                f,
                "The byte '{}' at position {position} is not part of the {alphabet} alphabet",
                symbol.escape_ascii()
            ),
            SequenceError::GapInInput(position) => {
                write!(f, "Unaligned sequences cannot contain gaps, but one was found at position {position}")
            }
        }
    }
}

impl Debug for SequenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self}")
    }
}

impl std::error::Error for SequenceError {}

impl GetCode for SequenceError {}

impl From<SequenceError> for std::io::Error {
    fn from(e: SequenceError) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidData, e)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::data::{alphabet::DNA, sequence::Sequence};
    use std::io::{Error as IOError, ErrorKind};

    #[test]
    fn exit_codes() {
        let err = Sequence::new(&DNA, b"A-").unwrap_err();
        assert_eq!(err.get_code(), 1);

        let io: IOError = err.into();
        assert_eq!(io.kind(), ErrorKind::InvalidData);
        assert_eq!(io.get_code(), 1);
        assert_eq!(IOError::from_raw_os_error(2).get_code(), 2);
    }
}
