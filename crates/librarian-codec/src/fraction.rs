//! Fine tuning with a fractional part ("±50 including fraction").
//!
//! A tune value occupies a `(fraction, whole)` byte pair. The whole byte uses
//! the ±50 wraparound, except that a value carrying a negative fraction is
//! stored as `255 + whole`. The fraction byte is one of 99 hardware codes per
//! sign, spaced unevenly in byte space, so the mapping is kept as exact tables
//! rather than a formula.

use crate::error::{Error, Result};
use crate::signed::SignedRange;

/// Byte code for +0.01 ..= +0.99; index `n - 1` holds the code for `n` hundredths.
pub const POSITIVE_FRACTION_CODES: [u8; 99] = [
    2, 5, 7, 10, 12, 15, 18, 20, 23, 25, 28, 30, 33, 35, 38, 41, 43, 46, 48, 51, 53, 56, 59, 61,
    64, 66, 69, 71, 74, 76, 79, 82, 84, 87, 89, 92, 94, 97, 99, 102, 105, 107, 110, 112, 115, 117,
    120, 123, 125, 128, 130, 133, 135, 138, 140, 143, 146, 148, 151, 153, 156, 158, 161, 163, 166,
    169, 171, 174, 176, 179, 181, 184, 187, 189, 192, 194, 197, 199, 202, 204, 207, 210, 212, 215,
    217, 220, 222, 225, 227, 230, 233, 235, 238, 240, 243, 245, 248, 251, 253,
];

/// Byte code for -0.01 ..= -0.99; index `n - 1` holds the code for `-n` hundredths.
pub const NEGATIVE_FRACTION_CODES: [u8; 99] = [
    254, 251, 249, 246, 244, 241, 238, 236, 233, 231, 228, 226, 223, 221, 218, 215, 213, 210, 208,
    205, 203, 200, 197, 195, 192, 190, 187, 185, 182, 180, 177, 174, 172, 169, 167, 164, 162, 159,
    157, 154, 151, 149, 146, 144, 141, 139, 136, 133, 131, 128, 126, 123, 121, 118, 116, 113, 110,
    108, 105, 103, 100, 98, 95, 93, 90, 87, 85, 82, 80, 77, 75, 72, 69, 67, 64, 62, 59, 57, 54, 52,
    49, 46, 44, 41, 39, 36, 34, 31, 29, 26, 23, 21, 18, 16, 13, 11, 8, 5, 3,
];

/// Smallest encodable tune value.
pub const TUNE_MIN: f64 = -50.0;
/// Largest encodable tune value (whole byte 205 plus the largest fraction).
pub const TUNE_MAX: f64 = 205.99;

fn table_position(table: &[u8; 99], code: u8) -> Option<i64> {
    table
        .iter()
        .position(|&c| c == code)
        .map(|index| index as i64 + 1)
}

/// Hundredths (1..=99) for a positive fraction code. Codes the hardware never
/// emits resolve to the nearest hundredth.
fn positive_hundredths(code: u8) -> i64 {
    table_position(&POSITIVE_FRACTION_CODES, code)
        .unwrap_or_else(|| ((code as f64 * 100.0 / 256.0).round() as i64).clamp(1, 99))
}

/// Hundredths (-99..=-1) for a negative fraction code.
fn negative_hundredths(code: u8) -> i64 {
    table_position(&NEGATIVE_FRACTION_CODES, code)
        .map(|magnitude| -magnitude)
        .unwrap_or_else(|| ((code as f64 * 100.0 / 256.0 - 100.0).round() as i64).clamp(-99, -1))
}

/// Decodes a tune value from its whole and fraction bytes.
pub fn decode_tune(whole: u8, fraction: u8) -> f64 {
    let threshold = SignedRange::Fifty.threshold();
    let hundredths = if whole >= threshold && fraction == 0 {
        (whole as i64 - 256) * 100
    } else if whole >= threshold {
        (whole as i64 - 255) * 100 + negative_hundredths(fraction)
    } else if fraction == 0 {
        whole as i64 * 100
    } else {
        whole as i64 * 100 + positive_hundredths(fraction)
    };
    hundredths as f64 / 100.0
}

/// Encodes a tune value as the `[fraction, whole]` pair written to the block.
///
/// Bounds apply to the value rounded to hundredths.
pub fn encode_tune(tune: f64) -> Result<[u8; 2]> {
    let rounded = (tune * 100.0).round();
    if !tune.is_finite() || rounded < TUNE_MIN * 100.0 || rounded > TUNE_MAX * 100.0 {
        return Err(Error::OutOfRange {
            value: tune,
            min: TUNE_MIN,
            max: TUNE_MAX,
        });
    }

    let whole = tune.trunc() as i64;
    let hundredths = (tune.fract() * 100.0).round() as i64;
    if hundredths.abs() >= 100 {
        return Err(Error::UntabulatedFraction { value: tune });
    }

    let pair = if whole < 0 && hundredths == 0 {
        [0, (256 + whole) as u8]
    } else if whole < 0 || hundredths < 0 {
        let code = NEGATIVE_FRACTION_CODES[(hundredths.unsigned_abs() - 1) as usize];
        [code, (255 + whole) as u8]
    } else if hundredths == 0 {
        [0, whole as u8]
    } else {
        [POSITIVE_FRACTION_CODES[(hundredths - 1) as usize], whole as u8]
    };
    Ok(pair)
}
