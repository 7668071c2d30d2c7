use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The part before the first `:` is not a base-10 integer, or does not
    /// fit into one
    InvalidEpoch {
        epoch: String
    },
    /// The epoch parsed fine but is below zero
    NegativeEpoch {
        epoch: i64
    },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidEpoch { epoch } =>
                write!(f, "epoch '{}' is not a valid integer", epoch),
            Error::NegativeEpoch { epoch } =>
                write!(f, "epoch {} is negative", epoch),
        }
    }
}

impl std::error::Error for Error {}
