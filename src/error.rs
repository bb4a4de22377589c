//! Centralized error type for the librarian umbrella crate.
//!
//! Wraps all subsystem errors so `?` propagates naturally across crate boundaries.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Codec(#[from] librarian_codec::Error),

    #[error(transparent)]
    Header(#[from] librarian_header::Error),

    #[cfg(feature = "remote")]
    #[error(transparent)]
    Remote(#[from] librarian_remote::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
