//! Error types for the header mappers.

use thiserror::Error;

use crate::effect::EffectType;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("codec error: {0}")]
    Codec(#[from] librarian_codec::Error),

    #[error("header block is {actual} bytes, expected {expected}")]
    BlockLength { expected: usize, actual: usize },

    #[error("no numeric field starts at offset {index}")]
    UnsupportedField { index: usize },

    #[error("offset {index} is not a name field")]
    UnsupportedNameField { index: usize },

    #[error("unknown effect type discriminant {0}")]
    UnknownEffectType(u8),

    #[error("{expected:?} mapper cannot encode a {actual:?} effect")]
    EffectVariantMismatch {
        expected: EffectType,
        actual: EffectType,
    },

    #[error("patch of {len} bytes at offset {index} runs past the {block_len}-byte block")]
    PatchOutOfBounds {
        index: usize,
        len: usize,
        block_len: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
