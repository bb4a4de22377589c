//! Sample header (192 bytes).

use librarian_codec::{FieldCodec, PlaybackType};
use serde::{Deserialize, Serialize};

use crate::layout::{Field, Layout, BYTE, PM50, TUNE, U16, U32};

pub const SAMPLE_SIZE: usize = 192;

pub const SAMPLE_NAME_OFFSET: usize = 3;

pub const LOOP_COUNT: usize = 4;

/// Distance between consecutive loop records.
pub const LOOP_STRIDE: usize = 12;

const VALID: FieldCodec = FieldCodec::Flag { on: 128 };
const LOOP_LENGTH: FieldCodec = FieldCodec::LoopLength;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Loop {
    pub loop_start: u32,
    /// Length in sample frames, with thousandths.
    pub loop_length: f64,
    pub dwell_time: u16,
    pub relative_loop_factor: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sample {
    pub bandwidth: u8,
    pub original_pitch: u8,
    pub name: String,
    pub valid: bool,
    pub number_of_loops: u8,
    pub playback_type: PlaybackType,
    pub tune: f64,
    pub sample_length: u32,
    pub start_offset: u32,
    pub play_length: u32,
    pub loops: [Loop; LOOP_COUNT],
    pub sample_rate: u16,
    pub tuning_offset: i16,
}

macro_rules! loop_fields {
    ($l:literal) => {
        &[
            field!(Sample; 38 + LOOP_STRIDE * $l => U32; loops[$l].loop_start),
            field!(Sample; 42 + LOOP_STRIDE * $l => LOOP_LENGTH; loops[$l].loop_length),
            field!(Sample; 48 + LOOP_STRIDE * $l => U16; loops[$l].dwell_time),
            field!(Sample; 86 + LOOP_STRIDE * $l => U32; loops[$l].relative_loop_factor),
        ]
    };
}

const SAMPLE_FIELDS: &[Field<Sample>] = &[
    field!(Sample; 1 => BYTE; bandwidth),
    field!(Sample; 2 => BYTE; original_pitch),
    name!(Sample; SAMPLE_NAME_OFFSET; name),
    field!(Sample; 15 => VALID; valid),
    field!(Sample; 16 => BYTE; number_of_loops),
    field!(Sample; 19 => FieldCodec::choice::<PlaybackType>(); playback_type),
    field!(Sample; 20 => TUNE; tune),
    field!(Sample; 26 => U32; sample_length),
    field!(Sample; 30 => U32; start_offset),
    field!(Sample; 34 => U32; play_length),
    field!(Sample; 138 => U16; sample_rate),
    field!(Sample; 140 => PM50; tuning_offset),
];

const LOOP_1: &[Field<Sample>] = loop_fields!(0);
const LOOP_2: &[Field<Sample>] = loop_fields!(1);
const LOOP_3: &[Field<Sample>] = loop_fields!(2);
const LOOP_4: &[Field<Sample>] = loop_fields!(3);

pub static SAMPLE_LAYOUT: Layout<Sample> = Layout {
    record: "sample",
    size: SAMPLE_SIZE,
    sections: &[SAMPLE_FIELDS, LOOP_1, LOOP_2, LOOP_3, LOOP_4],
};

#[derive(Debug, Clone, Copy, Default)]
pub struct SampleMapper;

layout_mapper!(SampleMapper, Sample, SAMPLE_LAYOUT);
