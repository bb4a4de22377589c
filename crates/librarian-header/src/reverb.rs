//! Reverb header (64 bytes).
//!
//! Shares the effect base layout. The type byte at 13 is a plain field here,
//! and pre-delay is split into two 7-bit bytes.

use librarian_codec::FieldCodec;
use serde::{Deserialize, Serialize};

use crate::effect::{EffectBase, EFFECT_SIZE, EFFECT_TYPE_OFFSET};
use crate::layout::{Field, Layout, BYTE};

pub const REVERB_SIZE: usize = EFFECT_SIZE;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reverb {
    pub base: EffectBase,
    #[serde(rename = "type")]
    pub reverb_type: u8,
    pub pre_delay: u16,
    pub high_frequency_damping: u8,
    pub decay_time: u8,
    pub diffusion: u8,
}

const REVERB_BASE: &[Field<Reverb>] = effect_base_fields!(Reverb);

const REVERB_FIELDS: &[Field<Reverb>] = &[
    field!(Reverb; EFFECT_TYPE_OFFSET => BYTE; reverb_type),
    field!(Reverb; 21 => FieldCodec::PreDelay; pre_delay),
    field!(Reverb; 32 => BYTE; high_frequency_damping),
    field!(Reverb; 33 => BYTE; decay_time),
    field!(Reverb; 35 => BYTE; diffusion),
];

pub static REVERB_LAYOUT: Layout<Reverb> = Layout {
    record: "reverb",
    size: REVERB_SIZE,
    sections: &[REVERB_BASE, REVERB_FIELDS],
};

#[derive(Debug, Clone, Copy, Default)]
pub struct ReverbMapper;

layout_mapper!(ReverbMapper, Reverb, REVERB_LAYOUT);
