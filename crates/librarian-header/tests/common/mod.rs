//! Shared fixtures for header integration tests.

#![allow(dead_code)]

use librarian_header::codec::{FieldCodec, SignedRange};
use librarian_header::Layout;

/// Mid-range, boundary and negative logical values every codec accepts.
pub fn representative_values(codec: FieldCodec) -> Vec<f64> {
    match codec {
        FieldCodec::Byte => vec![0.0, 1.0, 64.0, 99.0, 255.0],
        FieldCodec::Flag { .. } => vec![0.0, 1.0],
        FieldCodec::Choice { count } => (0..count).map(f64::from).collect(),
        FieldCodec::Signed(range) => signed_values(range),
        FieldCodec::Signed999 => vec![-999.0, -1.0, 0.0, 1.0, 999.0],
        FieldCodec::Tune => vec![-50.0, -49.99, -1.54, -0.01, 0.0, 0.01, 11.01, 49.99, 50.0],
        FieldCodec::U16 => vec![0.0, 1.0, 500.0, 44100.0, 65535.0],
        FieldCodec::U32 => vec![0.0, 3523.0, 1_000_000.0, u32::MAX as f64],
        FieldCodec::LoopLength => vec![0.0, 1.5, 3523.0, 3523.004, 3523.999],
        FieldCodec::PreDelay => vec![0.0, 127.0, 128.0, 300.0, 16383.0],
    }
}

fn signed_values(range: SignedRange) -> Vec<f64> {
    let half = match range {
        SignedRange::Fifty => 50.0,
        SignedRange::TwentyFour => 24.0,
        SignedRange::Twelve => 12.0,
    };
    vec![-half, -half + 1.0, -1.0, 0.0, 1.0, half - 1.0, half]
}

/// Names that survive a decode unchanged: upper case, padded to 12.
pub const NAMES: [&str; 4] = ["STRINGS  1  ", "KICK-01.    ", "A+B*C       ", "            "];

/// Record with every field set, cycling through each codec's values.
pub fn populated<R: Default + 'static>(layout: &Layout<R>, seed: usize) -> R {
    let mut record = R::default();
    for (i, field) in layout.fields().enumerate() {
        if field.is_name() {
            layout
                .set_name(&mut record, field.offset(), NAMES[(i + seed) % NAMES.len()])
                .unwrap();
        } else {
            let values = representative_values(field.codec().unwrap());
            let value = values[(i + seed) % values.len()];
            layout.set(&mut record, field.offset(), value).unwrap();
        }
    }
    record
}

/// Deterministic pseudo-random block (xorshift).
pub fn noise_block(size: usize, mut state: u32) -> Vec<u8> {
    (0..size)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state >> 24) as u8
        })
        .collect()
}
