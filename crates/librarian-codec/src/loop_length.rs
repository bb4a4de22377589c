//! Loop length with a thousandths fraction.
//!
//! Stored as six bytes: a 16-bit fraction field (0..=65535 spanning .000 to .999)
//! followed by the 32-bit whole part, both little-endian.

use crate::error::{Error, Result};
use crate::packing::{pack_u16, pack_u32, unpack_u16, unpack_u32};

/// Fraction-field units per thousandth when reading.
const DECODE_STEP: f64 = 65535.0 / 999.0;
/// Fraction-field units per thousandth when writing.
const ENCODE_STEP: f64 = 65.6;
/// Thousandths at or above this saturate the fraction field instead of
/// rounding up into the whole part.
const SATURATION_POINT: f64 = 998.9;

pub const LOOP_LENGTH_MAX: f64 = u32::MAX as f64 + 0.999;

pub fn decode_loop_length(fraction: [u8; 2], whole: [u8; 4]) -> f64 {
    let thousandths = (unpack_u16(fraction) as f64 / DECODE_STEP).round() as u64;
    let whole = unpack_u32(whole) as u64;
    (whole * 1000 + thousandths) as f64 / 1000.0
}

/// Encodes a loop length as `(fraction, whole)` byte groups.
pub fn encode_loop_length(length: f64) -> Result<([u8; 2], [u8; 4])> {
    if !length.is_finite() || length < 0.0 || length > LOOP_LENGTH_MAX {
        return Err(Error::OutOfRange {
            value: length,
            min: 0.0,
            max: LOOP_LENGTH_MAX,
        });
    }

    let whole = length.trunc() as u32;
    let thousandths = length.fract() * 1000.0;
    let fraction = if thousandths >= SATURATION_POINT {
        u16::MAX
    } else {
        (thousandths * ENCODE_STEP).round() as u16
    };
    Ok((pack_u16(fraction), pack_u32(whole)))
}

/// Six-byte form as laid out in a sample header.
pub fn encode_loop_length_bytes(length: f64) -> Result<[u8; 6]> {
    let (fraction, whole) = encode_loop_length(length)?;
    Ok([fraction[0], fraction[1], whole[0], whole[1], whole[2], whole[3]])
}
