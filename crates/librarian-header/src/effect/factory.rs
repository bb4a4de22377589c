//! Mapper selection for effect headers.

use tracing::debug;

use super::{
    Effect, EffectType, CHORUS_LAYOUT, DELAY_LAYOUT, ECHO_LAYOUT, EFFECT_SIZE,
    EFFECT_TYPE_OFFSET, PITCH_SHIFT_LAYOUT,
};
use crate::error::{Error, Result};
use crate::layout::{HeaderMapper, Patch};

/// Mapper for one effect variant.
///
/// Obtain one from a discriminant byte, a resident block, or a decoded
/// [`Effect`]. There is no fallback variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectMapper {
    effect_type: EffectType,
}

impl EffectMapper {
    pub const fn new(effect_type: EffectType) -> Self {
        Self { effect_type }
    }

    pub fn from_type_byte(byte: u8) -> Result<Self> {
        EffectType::try_from(byte).map(Self::new)
    }

    /// Selects the mapper from the discriminant stored in `block`.
    pub fn from_block(block: &[u8]) -> Result<Self> {
        if block.len() != EFFECT_SIZE {
            return Err(Error::BlockLength {
                expected: EFFECT_SIZE,
                actual: block.len(),
            });
        }
        Self::from_type_byte(block[EFFECT_TYPE_OFFSET])
    }

    pub fn for_effect(effect: &Effect) -> Self {
        Self::new(effect.effect_type())
    }

    #[inline]
    pub fn effect_type(&self) -> EffectType {
        self.effect_type
    }
}

impl HeaderMapper for EffectMapper {
    type Record = Effect;

    fn size(&self) -> usize {
        EFFECT_SIZE
    }

    /// Fails unless the block's discriminant names this mapper's variant.
    fn decode(&self, block: &[u8]) -> Result<Effect> {
        let actual = Self::from_block(block)?.effect_type;
        if actual != self.effect_type {
            return Err(Error::EffectVariantMismatch {
                expected: self.effect_type,
                actual,
            });
        }
        let effect = match self.effect_type {
            EffectType::Chorus => Effect::Chorus(CHORUS_LAYOUT.decode(block)?),
            EffectType::PitchShift => Effect::PitchShift(PITCH_SHIFT_LAYOUT.decode(block)?),
            EffectType::Echo => Effect::Echo(ECHO_LAYOUT.decode(block)?),
            EffectType::Delay => Effect::Delay(DELAY_LAYOUT.decode(block)?),
        };
        debug!("Decoded {:?} effect: {}", self.effect_type, effect.base().name);
        Ok(effect)
    }

    fn encode(&self, effect: &Effect) -> Result<Vec<u8>> {
        if effect.effect_type() != self.effect_type {
            return Err(Error::EffectVariantMismatch {
                expected: self.effect_type,
                actual: effect.effect_type(),
            });
        }
        let mut block = match effect {
            Effect::Chorus(chorus) => CHORUS_LAYOUT.encode(chorus)?,
            Effect::PitchShift(pitch_shift) => PITCH_SHIFT_LAYOUT.encode(pitch_shift)?,
            Effect::Echo(echo) => ECHO_LAYOUT.encode(echo)?,
            Effect::Delay(delay) => DELAY_LAYOUT.encode(delay)?,
        };
        block[EFFECT_TYPE_OFFSET] = self.effect_type.to_byte();
        Ok(block)
    }

    fn encode_partial(&self, index: usize, value: f64) -> Result<Patch> {
        match self.effect_type {
            EffectType::Chorus => CHORUS_LAYOUT.encode_partial(index, value),
            EffectType::PitchShift => PITCH_SHIFT_LAYOUT.encode_partial(index, value),
            EffectType::Echo => ECHO_LAYOUT.encode_partial(index, value),
            EffectType::Delay => DELAY_LAYOUT.encode_partial(index, value),
        }
    }

    fn encode_name(&self, index: usize, name: &str) -> Result<Patch> {
        match self.effect_type {
            EffectType::Chorus => CHORUS_LAYOUT.encode_name(index, name),
            EffectType::PitchShift => PITCH_SHIFT_LAYOUT.encode_name(index, name),
            EffectType::Echo => ECHO_LAYOUT.encode_name(index, name),
            EffectType::Delay => DELAY_LAYOUT.encode_name(index, name),
        }
    }
}
