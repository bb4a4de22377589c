use serde::{Deserialize, Serialize};

use super::{EffectBase, EFFECT_SIZE};
use crate::layout::{Field, Layout, BYTE};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chorus {
    pub base: EffectBase,
    pub modulation_speed: u8,
    pub modulation_depth: u8,
    pub feedback_level: u8,
}

const CHORUS_BASE: &[Field<Chorus>] = effect_base_fields!(Chorus);

const CHORUS_FIELDS: &[Field<Chorus>] = &[
    field!(Chorus; 36 => BYTE; modulation_speed),
    field!(Chorus; 37 => BYTE; modulation_depth),
    field!(Chorus; 38 => BYTE; feedback_level),
];

pub static CHORUS_LAYOUT: Layout<Chorus> = Layout {
    record: "chorus",
    size: EFFECT_SIZE,
    sections: &[CHORUS_BASE, CHORUS_FIELDS],
};
