//! Error types for remote sampler control.

use thiserror::Error;

use crate::transport::HeaderAddress;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("header error: {0}")]
    Header(#[from] librarian_header::Error),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("no {0} resident on the sampler")]
    NotFound(HeaderAddress),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("zone output {output} exceeds the sampler maximum of {max}")]
    ZoneOutputOutOfRange { output: u8, max: u8 },
}

impl From<librarian_codec::Error> for Error {
    fn from(e: librarian_codec::Error) -> Self {
        Error::Header(e.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
