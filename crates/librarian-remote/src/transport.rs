//! Boundary toward the native SysEx driver.
//!
//! The driver owns MIDI ports and SysEx framing. This side only sees whole
//! header blocks and byte ranges within them, addressed by entity kind and
//! number.

use std::fmt;

use librarian_header::{EFFECT_SIZE, KEY_GROUP_SIZE, PROGRAM_SIZE, REVERB_SIZE, SAMPLE_SIZE};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Header record families the sampler exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HeaderKind {
    Program,
    KeyGroup,
    Sample,
    Effect,
    Reverb,
}

impl HeaderKind {
    /// Size of one header block of this kind.
    pub const fn block_size(self) -> usize {
        match self {
            HeaderKind::Program => PROGRAM_SIZE,
            HeaderKind::KeyGroup => KEY_GROUP_SIZE,
            HeaderKind::Sample => SAMPLE_SIZE,
            HeaderKind::Effect => EFFECT_SIZE,
            HeaderKind::Reverb => REVERB_SIZE,
        }
    }

    fn label(self) -> &'static str {
        match self {
            HeaderKind::Program => "program",
            HeaderKind::KeyGroup => "key group",
            HeaderKind::Sample => "sample",
            HeaderKind::Effect => "effect",
            HeaderKind::Reverb => "reverb",
        }
    }
}

/// Location of one header block.
///
/// `key_group` is only meaningful for [`HeaderKind::KeyGroup`], where
/// `number` is the owning program. The constructors leave it at 0 otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderAddress {
    pub kind: HeaderKind,
    pub number: u16,
    pub key_group: u8,
}

impl HeaderAddress {
    pub const fn program(number: u16) -> Self {
        Self::new(HeaderKind::Program, number)
    }

    pub const fn key_group(program: u16, key_group: u8) -> Self {
        Self {
            kind: HeaderKind::KeyGroup,
            number: program,
            key_group,
        }
    }

    pub const fn sample(number: u16) -> Self {
        Self::new(HeaderKind::Sample, number)
    }

    pub const fn effect(number: u16) -> Self {
        Self::new(HeaderKind::Effect, number)
    }

    pub const fn reverb(number: u16) -> Self {
        Self::new(HeaderKind::Reverb, number)
    }

    const fn new(kind: HeaderKind, number: u16) -> Self {
        Self {
            kind,
            number,
            key_group: 0,
        }
    }

    #[inline]
    pub const fn block_size(&self) -> usize {
        self.kind.block_size()
    }
}

impl fmt::Display for HeaderAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            HeaderKind::KeyGroup => write!(
                f,
                "key group {} of program {}",
                self.key_group, self.number
            ),
            kind => write!(f, "{} {}", kind.label(), self.number),
        }
    }
}

/// Header-level request/response primitives of a SysEx driver.
///
/// Implementations block until the sampler has answered. Errors from the
/// driver surface as [`Error::Transport`](crate::Error::Transport), a missing
/// entity as [`Error::NotFound`](crate::Error::NotFound).
pub trait SysexTransport: Send + Sync {
    /// Fetches the full header block at `address`.
    fn read_header(&self, address: HeaderAddress) -> Result<Vec<u8>>;

    /// Replaces the full header block at `address`.
    fn write_header(&self, address: HeaderAddress, block: &[u8]) -> Result<()>;

    /// Overwrites `bytes.len()` bytes of the resident block starting at `offset`.
    fn write_header_bytes(&self, address: HeaderAddress, offset: usize, bytes: &[u8])
        -> Result<()>;
}

impl<T: SysexTransport + ?Sized> SysexTransport for std::sync::Arc<T> {
    fn read_header(&self, address: HeaderAddress) -> Result<Vec<u8>> {
        (**self).read_header(address)
    }

    fn write_header(&self, address: HeaderAddress, block: &[u8]) -> Result<()> {
        (**self).write_header(address, block)
    }

    fn write_header_bytes(
        &self,
        address: HeaderAddress,
        offset: usize,
        bytes: &[u8],
    ) -> Result<()> {
        (**self).write_header_bytes(address, offset, bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_sizes() {
        assert_eq!(HeaderAddress::program(0).block_size(), 192);
        assert_eq!(HeaderAddress::key_group(0, 3).block_size(), 192);
        assert_eq!(HeaderAddress::sample(0).block_size(), 192);
        assert_eq!(HeaderAddress::effect(0).block_size(), 64);
        assert_eq!(HeaderAddress::reverb(0).block_size(), 64);
    }

    #[test]
    fn test_address_display() {
        assert_eq!(HeaderAddress::program(4).to_string(), "program 4");
        assert_eq!(
            HeaderAddress::key_group(4, 2).to_string(),
            "key group 2 of program 4"
        );
        assert_eq!(HeaderAddress::reverb(1).to_string(), "reverb 1");
    }
}
