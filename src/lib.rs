//! # Librarian - S-series sampler editor core
//!
//! Converts sampler header blocks to structured records and back.
//!
//! ## Architecture
//!
//! Librarian is an umbrella crate that coordinates:
//! - **librarian-codec** - Numeric field codecs (sign wraparound, fine tune, loop length, names, enums)
//! - **librarian-header** - Record layouts and mappers (Program, KeyGroup, Sample, Effect, Reverb)
//! - **librarian-remote** - Remote control over a SysEx transport driver
//!
//! ## Quick Start
//!
//! ```
//! use librarian::prelude::*;
//!
//! let remote = RemoteSampler::builder(MemoryTransport::new())
//!     .model(SamplerModel::S3000)
//!     .build()?;
//!
//! let mut program = Program::default();
//! program.name = "GRAND PIANO".to_string();
//! remote.update_program(0, &program)?;
//!
//! // Single-field edit: only the bytes of that field go over the wire
//! remote.update_program_field(0, 75, -12.0)?;
//! assert_eq!(remote.program(0)?.midi.transpose, -12);
//! # Ok::<(), librarian::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `default` - Codecs, headers and remote control
//! - `remote` - Remote control service and in-memory transport

mod error;
pub use error::{Error, Result};

/// Re-export of librarian-codec for direct access
pub use librarian_codec as codec;

pub use librarian_codec::{
    BendMode, FilterType, ModulationSource, Pitch, PlaybackType, PortamentoType, Reassignment,
    Waveform, ZonePlayback,
};

/// Re-export of librarian-header for direct access
pub use librarian_header as header;

pub use librarian_header::{
    apply_patch, Chorus, Delay, Echo, Effect, EffectBase, EffectMapper, EffectType, HeaderMapper,
    KeyGroup, KeyGroupMapper, Loop, Patch, PitchShift, Program, ProgramMapper, Reverb,
    ReverbMapper, Sample, SampleMapper, Zone,
};

// Remote control
#[cfg(feature = "remote")]
pub use librarian_remote as remote;

#[cfg(feature = "remote")]
pub use librarian_remote::{
    HeaderAddress, HeaderKind, MemoryTransport, RemoteSampler, RemoteSamplerBuilder,
    SamplerModel, SysexTransport,
};

/// Convenience prelude for common imports
pub mod prelude {
    // Records
    pub use crate::{Effect, KeyGroup, Program, Reverb, Sample};

    // Mappers
    pub use crate::{apply_patch, EffectMapper, HeaderMapper, KeyGroupMapper, ProgramMapper};
    pub use crate::{ReverbMapper, SampleMapper};

    // Remote
    #[cfg(feature = "remote")]
    pub use crate::{HeaderAddress, MemoryTransport, RemoteSampler, SamplerModel, SysexTransport};
}
