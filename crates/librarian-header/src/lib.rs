//! Header mappers for S-series sampler records.
//!
//! # Primary API
//!
//! - [`ProgramMapper`], [`KeyGroupMapper`], [`SampleMapper`], [`ReverbMapper`]
//! - [`EffectMapper`]: picks the effect variant from its discriminant
//! - [`HeaderMapper`]: full decode/encode plus single-field patches
//! - [`apply_patch`]: splice a patch into a resident block
//!
//! # Example
//!
//! ```
//! use librarian_header::{apply_patch, HeaderMapper, ProgramMapper};
//!
//! let mut block = ProgramMapper.encode(&Default::default())?;
//! let patch = ProgramMapper.encode_partial(75, -3.0)?;
//! apply_patch(&mut block, 75, &patch)?;
//! assert_eq!(ProgramMapper.decode(&block)?.midi.transpose, -3);
//! # Ok::<(), librarian_header::Error>(())
//! ```

pub use librarian_codec as codec;

#[macro_use]
mod macros;

pub mod error;
pub use error::{Error, Result};

#[macro_use]
pub mod layout;
pub use layout::{apply_patch, Field, HeaderMapper, Layout, Patch};

pub mod program;
pub use program::{Program, ProgramMapper, PROGRAM_LAYOUT, PROGRAM_SIZE};

pub mod key_group;
pub use key_group::{KeyGroup, KeyGroupMapper, Zone, KEY_GROUP_LAYOUT, KEY_GROUP_SIZE};

pub mod sample;
pub use sample::{Loop, Sample, SampleMapper, SAMPLE_LAYOUT, SAMPLE_SIZE};

#[macro_use]
pub mod effect;
pub use effect::{
    Chorus, Delay, Echo, Effect, EffectBase, EffectMapper, EffectType, PitchShift, EFFECT_SIZE,
};

pub mod reverb;
pub use reverb::{Reverb, ReverbMapper, REVERB_LAYOUT, REVERB_SIZE};
