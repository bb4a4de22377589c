//! Three-tap echo.

use serde::{Deserialize, Serialize};

use super::{EffectBase, EFFECT_SIZE};
use crate::layout::{Field, Layout, BYTE, PM50, U16};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Echo {
    pub base: EffectBase,
    pub delays: [u16; 3],
    pub feedback_levels: [u8; 3],
    pub pans: [i16; 3],
    pub left_extra_delay: u16,
    pub feedback_damping: u8,
}

const ECHO_BASE: &[Field<Echo>] = effect_base_fields!(Echo);

const ECHO_FIELDS: &[Field<Echo>] = &[
    field!(Echo; 49 => U16; delays[0]),
    field!(Echo; 51 => U16; delays[1]),
    field!(Echo; 53 => U16; delays[2]),
    field!(Echo; 55 => BYTE; feedback_levels[0]),
    field!(Echo; 56 => BYTE; feedback_levels[1]),
    field!(Echo; 57 => BYTE; feedback_levels[2]),
    field!(Echo; 58 => PM50; pans[0]),
    field!(Echo; 59 => PM50; pans[1]),
    field!(Echo; 60 => PM50; pans[2]),
    field!(Echo; 61 => U16; left_extra_delay),
    field!(Echo; 63 => BYTE; feedback_damping),
];

pub static ECHO_LAYOUT: Layout<Echo> = Layout {
    record: "echo",
    size: EFFECT_SIZE,
    sections: &[ECHO_BASE, ECHO_FIELDS],
};
