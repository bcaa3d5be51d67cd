//! Error types for the digit-factorial solver.

use std::fmt;

use math::{BigInt, ParseBigIntError};

/// Errors that can occur while inverting f-values or summing sg.
///
/// Computation is pure and deterministic; every error is fatal for the
/// query that produced it and carries enough context to diagnose it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A digit string contained a character outside '0'..='9'.
    InvalidDigit { value: char },

    /// A digit string was empty where a number was required.
    EmptyDigits,

    /// Sequence indices are 1-based; 0 was passed.
    ZeroIndex,

    /// The modulus of a modular sum must be at least 1.
    ZeroModulus,

    /// A residue mod 9! has no entry in the prefix table.
    /// The table is a fixed oracle; a miss means it does not cover the
    /// requested f-value and the query cannot be answered.
    PrefixNotFound { residue: u64 },

    /// The incremental suffix-length update disagrees with the value
    /// obtained by direct division. Continuing would corrupt every
    /// subsequent partial sum, so the computation aborts.
    SuffixStepMismatch {
        i: u64,
        predicted: BigInt,
        actual: BigInt,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidDigit { value } => {
                write!(f, "invalid digit {:?} in digit string", value)
            }
            Error::EmptyDigits => write!(f, "empty digit string"),
            Error::ZeroIndex => write!(f, "sequence index must be at least 1"),
            Error::ZeroModulus => write!(f, "modulus must be at least 1"),
            Error::PrefixNotFound { residue } => {
                write!(f, "no prefix table entry for residue {} mod 9!", residue)
            }
            Error::SuffixStepMismatch {
                i,
                predicted,
                actual,
            } => {
                write!(
                    f,
                    "incremental suffix length {} disagrees with direct division {} at i={}",
                    predicted, actual, i
                )
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<ParseBigIntError> for Error {
    fn from(e: ParseBigIntError) -> Self {
        match e {
            ParseBigIntError::Empty => Error::EmptyDigits,
            ParseBigIntError::InvalidDigit(c) => Error::InvalidDigit { value: c },
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
