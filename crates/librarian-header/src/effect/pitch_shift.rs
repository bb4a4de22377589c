//! Stereo pitch shifter.
//!
//! Tune offsets are stored like every other fine-tune pair: fraction byte
//! first, whole byte second.

use serde::{Deserialize, Serialize};

use super::{EffectBase, EFFECT_SIZE};
use crate::layout::{Field, Layout, BYTE, TUNE, U16};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PitchShift {
    pub base: EffectBase,
    pub left_tune_offset: f64,
    pub right_tune_offset: f64,
    pub left_feedback_level: u8,
    pub right_feedback_level: u8,
    pub left_delay_time: u16,
    pub right_delay_time: u16,
}

const PITCH_SHIFT_BASE: &[Field<PitchShift>] = effect_base_fields!(PitchShift);

const PITCH_SHIFT_FIELDS: &[Field<PitchShift>] = &[
    field!(PitchShift; 39 => TUNE; left_tune_offset),
    field!(PitchShift; 41 => TUNE; right_tune_offset),
    field!(PitchShift; 43 => BYTE; left_feedback_level),
    field!(PitchShift; 44 => BYTE; right_feedback_level),
    field!(PitchShift; 45 => U16; left_delay_time),
    field!(PitchShift; 47 => U16; right_delay_time),
];

pub static PITCH_SHIFT_LAYOUT: Layout<PitchShift> = Layout {
    record: "pitch shift",
    size: EFFECT_SIZE,
    sections: &[PITCH_SHIFT_BASE, PITCH_SHIFT_FIELDS],
};
