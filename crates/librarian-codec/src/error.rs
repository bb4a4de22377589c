//! Error types for the header codecs.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("name character {character:?} at position {position} is not in the sampler alphabet")]
    InvalidNameCharacter { character: char, position: usize },

    #[error("name is {length} characters long, the sampler allows at most 12")]
    NameTooLong { length: usize },

    #[error("fractional part of {value} has no entry in the fraction table")]
    UntabulatedFraction { value: f64 },

    #[error("value {value} is outside the encodable range {min}..={max}")]
    OutOfRange { value: f64, min: f64, max: f64 },

    #[error("value {value} is not an integer")]
    NotAnInteger { value: f64 },

    #[error("expected {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
