//! Per-field codecs.
//!
//! A [`FieldCodec`] names how a run of header bytes turns into one logical
//! number and back. Logical values travel as `f64` so integer, enumeration
//! and fractional fields share one partial-update entry point.

use smallvec::SmallVec;

use crate::enums::ByteEnum;
use crate::error::{Error, Result};
use crate::fraction::{decode_tune, encode_tune};
use crate::loop_length::{decode_loop_length, encode_loop_length_bytes};
use crate::packing::{pack_u16, pack_u32, unpack_u16, unpack_u32};
use crate::signed::{
    decode_plus_minus_999, encode_plus_minus_999, SignedRange, NINE_NINE_NINE_MAX,
    NINE_NINE_NINE_MIN,
};

/// Encoded bytes for a single field (at most six).
pub type FieldBytes = SmallVec<[u8; 6]>;

/// Largest pre-delay the low 7 bits plus a full high byte can hold.
pub const PRE_DELAY_MAX: u16 = 0x7FFF;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldCodec {
    /// Raw byte, 0..=255.
    Byte,
    /// Boolean; any nonzero byte reads as set, set writes `on`.
    Flag { on: u8 },
    /// Enumeration with raw values `0..count`.
    Choice { count: u8 },
    Signed(SignedRange),
    Signed999,
    /// `(fraction, whole)` fine-tune pair.
    Tune,
    U16,
    U32,
    LoopLength,
    /// Two 7-bit bytes, low first.
    PreDelay,
}

impl FieldCodec {
    pub const FLAG: FieldCodec = FieldCodec::Flag { on: 1 };

    /// Choice codec sized to an enumeration.
    pub const fn choice<E: ByteEnum>() -> FieldCodec {
        FieldCodec::Choice { count: E::COUNT }
    }

    /// Byte width of the field in a header block.
    pub const fn width(self) -> usize {
        match self {
            FieldCodec::Byte
            | FieldCodec::Flag { .. }
            | FieldCodec::Choice { .. }
            | FieldCodec::Signed(_) => 1,
            FieldCodec::Signed999 | FieldCodec::Tune | FieldCodec::U16 | FieldCodec::PreDelay => 2,
            FieldCodec::U32 => 4,
            FieldCodec::LoopLength => 6,
        }
    }

    /// Decodes the logical value from the field's bytes.
    pub fn decode(self, bytes: &[u8]) -> Result<f64> {
        let width = self.width();
        if bytes.len() < width {
            return Err(Error::Truncated {
                expected: width,
                actual: bytes.len(),
            });
        }

        let value = match self {
            FieldCodec::Byte | FieldCodec::Choice { .. } => bytes[0] as f64,
            FieldCodec::Flag { .. } => {
                if bytes[0] != 0 {
                    1.0
                } else {
                    0.0
                }
            }
            FieldCodec::Signed(range) => range.decode(bytes[0]) as f64,
            FieldCodec::Signed999 => decode_plus_minus_999([bytes[0], bytes[1]]) as f64,
            FieldCodec::Tune => decode_tune(bytes[1], bytes[0]),
            FieldCodec::U16 => unpack_u16([bytes[0], bytes[1]]) as f64,
            FieldCodec::U32 => unpack_u32([bytes[0], bytes[1], bytes[2], bytes[3]]) as f64,
            FieldCodec::LoopLength => decode_loop_length(
                [bytes[0], bytes[1]],
                [bytes[2], bytes[3], bytes[4], bytes[5]],
            ),
            FieldCodec::PreDelay => ((bytes[0] & 0x7F) as u16 | (bytes[1] as u16) << 7) as f64,
        };
        Ok(value)
    }

    /// Encodes a logical value into exactly [`width`](Self::width) bytes.
    pub fn encode(self, value: f64) -> Result<FieldBytes> {
        let mut out = FieldBytes::new();
        match self {
            FieldCodec::Byte => out.push(integral(value, 0.0, 255.0)? as u8),
            FieldCodec::Flag { on } => {
                if value.is_nan() {
                    return Err(Error::NotAnInteger { value });
                }
                out.push(if value != 0.0 { on } else { 0 });
            }
            FieldCodec::Choice { count } => {
                out.push(integral(value, 0.0, count.saturating_sub(1) as f64)? as u8)
            }
            FieldCodec::Signed(range) => {
                let x = integral(value, range.min() as f64, range.max() as f64)?;
                out.push(range.encode(x as i16)?);
            }
            FieldCodec::Signed999 => {
                let x = integral(value, NINE_NINE_NINE_MIN as f64, NINE_NINE_NINE_MAX as f64)?;
                out.extend_from_slice(&encode_plus_minus_999(x as i32)?);
            }
            FieldCodec::Tune => out.extend_from_slice(&encode_tune(value)?),
            FieldCodec::U16 => {
                out.extend_from_slice(&pack_u16(integral(value, 0.0, u16::MAX as f64)? as u16))
            }
            FieldCodec::U32 => {
                out.extend_from_slice(&pack_u32(integral(value, 0.0, u32::MAX as f64)? as u32))
            }
            FieldCodec::LoopLength => out.extend_from_slice(&encode_loop_length_bytes(value)?),
            FieldCodec::PreDelay => {
                let v = integral(value, 0.0, PRE_DELAY_MAX as f64)? as u16;
                out.extend_from_slice(&[(v & 0x7F) as u8, (v >> 7) as u8]);
            }
        }
        Ok(out)
    }
}

fn integral(value: f64, min: f64, max: f64) -> Result<i64> {
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(Error::NotAnInteger { value });
    }
    if value < min || value > max {
        return Err(Error::OutOfRange { value, min, max });
    }
    Ok(value as i64)
}

/// Conversion between a record field and its logical `f64` value.
///
/// `from_logical` is only fed values a [`FieldCodec`] produced or accepted,
/// so narrowing casts stay in range.
pub trait Logical: Copy {
    fn to_logical(self) -> f64;

    fn from_logical(value: f64) -> Self;
}

macro_rules! numeric_logical {
    ($($ty:ty),+) => {
        $(
            impl Logical for $ty {
                #[inline]
                fn to_logical(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_logical(value: f64) -> Self {
                    value as $ty
                }
            }
        )+
    };
}

numeric_logical!(u8, u16, u32, i16, i32, f64);

impl Logical for bool {
    fn to_logical(self) -> f64 {
        if self {
            1.0
        } else {
            0.0
        }
    }

    fn from_logical(value: f64) -> Self {
        value != 0.0
    }
}
