//! Sign-wraparound codecs for the sampler's "±N" byte parameters.
//!
//! Negative values are stored as `256 + x` in a single byte. Each range has
//! its own decode threshold: any byte at or above it reads back as negative.
//!
//! | Range | Threshold | Encodable domain |
//! |-------|-----------|------------------|
//! | ±50   | 206       | -50..=205        |
//! | ±24   | 232       | -24..=231        |
//! | ±12   | 244       | -12..=243        |
//! | ±999  | 55537     | -9999..=55536 (16-bit, little-endian) |

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::packing::{pack_u16, unpack_u16};

/// Single-byte signed range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignedRange {
    Fifty,
    TwentyFour,
    Twelve,
}

impl SignedRange {
    /// First byte value that decodes as negative.
    pub const fn threshold(self) -> u8 {
        match self {
            SignedRange::Fifty => 206,
            SignedRange::TwentyFour => 232,
            SignedRange::Twelve => 244,
        }
    }

    /// Most negative encodable value.
    pub const fn min(self) -> i16 {
        self.threshold() as i16 - 256
    }

    /// Largest encodable value; anything above would collide with the negative half.
    pub const fn max(self) -> i16 {
        self.threshold() as i16 - 1
    }

    #[inline]
    pub const fn decode(self, byte: u8) -> i16 {
        if byte >= self.threshold() {
            byte as i16 - 256
        } else {
            byte as i16
        }
    }

    pub fn encode(self, value: i16) -> Result<u8> {
        if value < self.min() || value > self.max() {
            return Err(Error::OutOfRange {
                value: value as f64,
                min: self.min() as f64,
                max: self.max() as f64,
            });
        }
        Ok(if value < 0 {
            (256 + value) as u8
        } else {
            value as u8
        })
    }
}

const NINE_NINE_NINE_THRESHOLD: u32 = 55537;

pub const NINE_NINE_NINE_MIN: i32 = NINE_NINE_NINE_THRESHOLD as i32 - 65536;
pub const NINE_NINE_NINE_MAX: i32 = NINE_NINE_NINE_THRESHOLD as i32 - 1;

/// Decodes a ±999 quantity from its little-endian byte pair.
pub fn decode_plus_minus_999(bytes: [u8; 2]) -> i32 {
    let raw = unpack_u16(bytes) as i32;
    if raw >= NINE_NINE_NINE_THRESHOLD as i32 {
        raw - 65536
    } else {
        raw
    }
}

/// Encodes a ±999 quantity as `[low, high]`.
pub fn encode_plus_minus_999(value: i32) -> Result<[u8; 2]> {
    if !(NINE_NINE_NINE_MIN..=NINE_NINE_NINE_MAX).contains(&value) {
        return Err(Error::OutOfRange {
            value: value as f64,
            min: NINE_NINE_NINE_MIN as f64,
            max: NINE_NINE_NINE_MAX as f64,
        });
    }
    let raw = if value < 0 { 65536 + value } else { value };
    Ok(pack_u16(raw as u16))
}
