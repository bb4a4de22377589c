//! Byte codecs for S-series sampler header parameters.
//!
//! # Primary API
//!
//! - [`SignedRange`], [`encode_plus_minus_999`] / [`decode_plus_minus_999`]: sign wraparound
//! - [`encode_tune`] / [`decode_tune`]: fine tune with tabulated fractions
//! - [`encode_loop_length`] / [`decode_loop_length`]: loop length in thousandths
//! - [`encode_name`] / [`decode_name`]: 12-character names
//! - [`ByteEnum`] and the header enumerations
//! - [`FieldCodec`] / [`Logical`]: per-field descriptors used by layout tables
//!
//! # Example
//!
//! ```
//! use librarian_codec::{encode_tune, decode_tune, SignedRange};
//!
//! assert_eq!(encode_tune(-1.54)?, [118, 254]);
//! assert_eq!(decode_tune(254, 118), -1.54);
//! assert_eq!(SignedRange::TwentyFour.encode(-24)?, 232);
//! # Ok::<(), librarian_codec::Error>(())
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod packing;
pub use packing::{pack_u16, pack_u32, pack_u48, unpack_u16, unpack_u32, unpack_u48};

pub mod signed;
pub use signed::{decode_plus_minus_999, encode_plus_minus_999, SignedRange};

pub mod fraction;
pub use fraction::{decode_tune, encode_tune, TUNE_MAX, TUNE_MIN};

pub mod loop_length;
pub use loop_length::{
    decode_loop_length, encode_loop_length, encode_loop_length_bytes, LOOP_LENGTH_MAX,
};

pub mod name;
pub use name::{decode_name, encode_name, ALPHABET, NAME_LENGTH};

pub mod enums;
pub use enums::{
    BendMode, ByteEnum, FilterType, ModulationSource, Pitch, PlaybackType, PortamentoType,
    Reassignment, Waveform, ZonePlayback,
};

pub mod field;
pub use field::{FieldBytes, FieldCodec, Logical, PRE_DELAY_MAX};
