//! Generation failures and their result-code taxonomy.

use std::fmt;

use stargen_generator::GeneratorError;
use thiserror::Error;

/// Why a generation request was refused or failed.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GenerationError {
    #[error("{field} was invalid: {value}")]
    InvalidArgument { field: &'static str, value: f64 },
    #[error("either mass or luminosity (or both) must be assigned to the star before generation")]
    MasslessStar,
    #[error("{0} was not set")]
    NullReference(&'static str),
    #[error("invalid state: {0}")]
    InvalidState(&'static str),
    /// Reserved; nothing raises it yet.
    #[error("{0} was not initialised")]
    UninitializedInput(&'static str),
    /// Reserved; requests are single-owner so nothing raises it yet.
    #[error("request is locked by another caller")]
    Lock,
    #[error("generator failed: {0}")]
    Generator(#[from] GeneratorError),
}

impl GenerationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument { .. } | Self::MasslessStar => ErrorKind::InvalidArgument,
            Self::NullReference(_) => ErrorKind::NullReference,
            Self::InvalidState(_) => ErrorKind::InvalidState,
            Self::UninitializedInput(_) => ErrorKind::UninitializedInput,
            Self::Lock => ErrorKind::LockError,
            Self::Generator(_) => ErrorKind::GeneratorFailure,
        }
    }
}

/// Result categories with stable numeric codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Success,
    InvalidArgument,
    UninitializedInput,
    NullReference,
    InvalidState,
    LockError,
    GeneratorFailure,
}

impl ErrorKind {
    const ALL: [Self; 7] = [
        Self::Success,
        Self::InvalidArgument,
        Self::UninitializedInput,
        Self::NullReference,
        Self::InvalidState,
        Self::LockError,
        Self::GeneratorFailure,
    ];

    pub fn code(self) -> i32 {
        match self {
            Self::Success => 0,
            Self::InvalidArgument => 1,
            Self::UninitializedInput => 2,
            Self::NullReference => 3,
            Self::InvalidState => 4,
            Self::LockError => 5,
            Self::GeneratorFailure => 6,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }

    /// Category of an operation's outcome.
    pub fn of<T>(result: &Result<T, GenerationError>) -> Self {
        match result {
            Ok(_) => Self::Success,
            Err(err) => err.kind(),
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Success => "success",
            Self::InvalidArgument => "invalid argument",
            Self::UninitializedInput => "uninitialized input",
            Self::NullReference => "null reference",
            Self::InvalidState => "invalid state",
            Self::LockError => "lock error",
            Self::GeneratorFailure => "generator failure",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip_and_stay_stable() {
        for kind in ErrorKind::ALL {
            assert_eq!(ErrorKind::from_code(kind.code()), Some(kind));
        }
        assert_eq!(ErrorKind::NullReference.code(), 3);
        assert_eq!(ErrorKind::LockError.code(), 5);
        assert_eq!(ErrorKind::from_code(-1), None);
    }

    #[test]
    fn massless_star_is_an_invalid_argument() {
        assert_eq!(GenerationError::MasslessStar.kind(), ErrorKind::InvalidArgument);
        assert_eq!(ErrorKind::of::<()>(&Ok(())), ErrorKind::Success);
    }
}
