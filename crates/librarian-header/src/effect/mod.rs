//! Effect headers (64 bytes): a shared base plus one of four variants.
//!
//! The variant is selected by the type discriminant at byte 13. It is never
//! patched on its own; encoders write it from the record's variant.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Error, Result};

pub const EFFECT_SIZE: usize = 64;

pub const EFFECT_NAME_OFFSET: usize = 0;

/// Offset of the type discriminant.
pub const EFFECT_TYPE_OFFSET: usize = 13;

/// Base fields shared by every effect variant and by reverbs.
macro_rules! effect_base_fields {
    ($record:ty) => {
        &[
            name!($record; $crate::effect::EFFECT_NAME_OFFSET; base.name),
            field!($record; 15 => $crate::layout::BYTE; base.output_level),
            field!($record; 16 => $crate::layout::PM50; base.output_balance),
            field!($record; 17 => $crate::layout::BYTE; base.stereo_width),
            field!($record; 24 => $crate::layout::BYTE; base.high_frequency_cut),
        ]
    };
}

mod chorus;
pub use chorus::{Chorus, CHORUS_LAYOUT};

mod delay;
pub use delay::{Delay, DELAY_LAYOUT};

mod echo;
pub use echo::{Echo, ECHO_LAYOUT};

mod pitch_shift;
pub use pitch_shift::{PitchShift, PITCH_SHIFT_LAYOUT};

mod factory;
pub use factory::EffectMapper;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectBase {
    pub name: String,
    pub output_level: u8,
    pub output_balance: i16,
    pub stereo_width: u8,
    pub high_frequency_cut: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum EffectType {
    Chorus = 6,
    PitchShift = 7,
    Echo = 8,
    Delay = 9,
}

impl EffectType {
    pub const ALL: [EffectType; 4] = [
        EffectType::Chorus,
        EffectType::PitchShift,
        EffectType::Echo,
        EffectType::Delay,
    ];

    #[inline]
    pub fn to_byte(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for EffectType {
    type Error = Error;

    fn try_from(byte: u8) -> Result<Self> {
        match byte {
            6 => Ok(EffectType::Chorus),
            7 => Ok(EffectType::PitchShift),
            8 => Ok(EffectType::Echo),
            9 => Ok(EffectType::Delay),
            other => {
                warn!("Rejected effect type discriminant {}", other);
                Err(Error::UnknownEffectType(other))
            }
        }
    }
}

/// A decoded effect header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Effect {
    Chorus(Chorus),
    PitchShift(PitchShift),
    Echo(Echo),
    Delay(Delay),
}

impl Effect {
    pub fn effect_type(&self) -> EffectType {
        match self {
            Effect::Chorus(_) => EffectType::Chorus,
            Effect::PitchShift(_) => EffectType::PitchShift,
            Effect::Echo(_) => EffectType::Echo,
            Effect::Delay(_) => EffectType::Delay,
        }
    }

    pub fn base(&self) -> &EffectBase {
        match self {
            Effect::Chorus(effect) => &effect.base,
            Effect::PitchShift(effect) => &effect.base,
            Effect::Echo(effect) => &effect.base,
            Effect::Delay(effect) => &effect.base,
        }
    }

    pub fn base_mut(&mut self) -> &mut EffectBase {
        match self {
            Effect::Chorus(effect) => &mut effect.base,
            Effect::PitchShift(effect) => &mut effect.base,
            Effect::Echo(effect) => &mut effect.base,
            Effect::Delay(effect) => &mut effect.base,
        }
    }
}

impl From<Chorus> for Effect {
    fn from(effect: Chorus) -> Self {
        Effect::Chorus(effect)
    }
}

impl From<PitchShift> for Effect {
    fn from(effect: PitchShift) -> Self {
        Effect::PitchShift(effect)
    }
}

impl From<Echo> for Effect {
    fn from(effect: Echo) -> Self {
        Effect::Echo(effect)
    }
}

impl From<Delay> for Effect {
    fn from(effect: Delay) -> Self {
        Effect::Delay(effect)
    }
}
