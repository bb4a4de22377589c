use serde::{Deserialize, Serialize};

use super::{EffectBase, EFFECT_SIZE};
use crate::layout::{Field, Layout, BYTE, U16};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Delay {
    pub base: EffectBase,
    pub feedback: u8,
    pub delay_time: u16,
    pub lfo_depth: u16,
    pub lfo_rate: u8,
}

const DELAY_BASE: &[Field<Delay>] = effect_base_fields!(Delay);

const DELAY_FIELDS: &[Field<Delay>] = &[
    field!(Delay; 26 => BYTE; feedback),
    field!(Delay; 27 => U16; delay_time),
    field!(Delay; 29 => U16; lfo_depth),
    field!(Delay; 31 => BYTE; lfo_rate),
];

pub static DELAY_LAYOUT: Layout<Delay> = Layout {
    record: "delay",
    size: EFFECT_SIZE,
    sections: &[DELAY_BASE, DELAY_FIELDS],
};
