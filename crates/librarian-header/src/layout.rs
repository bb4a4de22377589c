//! Offset-addressed layout tables and the engine that drives them.
//!
//! Every record type has one static [`Layout`]: a list of sections, each a
//! slice of [`Field`] entries binding a byte offset to a codec and to the
//! record place it fills. Full decode, full encode and partial update all
//! walk the same table, so they cannot disagree about an offset.

use librarian_codec::{decode_name, encode_name, FieldCodec, SignedRange, NAME_LENGTH};
use smallvec::SmallVec;
use tracing::debug;

use crate::error::{Error, Result};

/// Bytes to splice into a resident block at a field offset.
pub type Patch = SmallVec<[u8; NAME_LENGTH]>;

pub(crate) const BYTE: FieldCodec = FieldCodec::Byte;
pub(crate) const FLAG: FieldCodec = FieldCodec::FLAG;
pub(crate) const PM50: FieldCodec = FieldCodec::Signed(SignedRange::Fifty);
pub(crate) const PM24: FieldCodec = FieldCodec::Signed(SignedRange::TwentyFour);
pub(crate) const PM12: FieldCodec = FieldCodec::Signed(SignedRange::Twelve);
pub(crate) const PM999: FieldCodec = FieldCodec::Signed999;
pub(crate) const TUNE: FieldCodec = FieldCodec::Tune;
pub(crate) const U16: FieldCodec = FieldCodec::U16;
pub(crate) const U32: FieldCodec = FieldCodec::U32;

enum Access<R> {
    Numeric {
        codec: FieldCodec,
        get: fn(&R) -> f64,
        set: fn(&mut R, f64),
    },
    Name {
        get: fn(&R) -> &str,
        set: fn(&mut R, String),
    },
}

impl<R> Clone for Access<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Access<R> {}

/// One layout entry.
pub struct Field<R> {
    offset: usize,
    label: &'static str,
    access: Access<R>,
}

impl<R> Field<R> {
    pub const fn numeric(
        offset: usize,
        label: &'static str,
        codec: FieldCodec,
        get: fn(&R) -> f64,
        set: fn(&mut R, f64),
    ) -> Self {
        Self {
            offset,
            label,
            access: Access::Numeric { codec, get, set },
        }
    }

    pub const fn name(
        offset: usize,
        label: &'static str,
        get: fn(&R) -> &str,
        set: fn(&mut R, String),
    ) -> Self {
        Self {
            offset,
            label,
            access: Access::Name { get, set },
        }
    }

    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Record place this field is bound to, e.g. `zones[0].tune`.
    #[inline]
    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn width(&self) -> usize {
        match self.access {
            Access::Numeric { codec, .. } => codec.width(),
            Access::Name { .. } => NAME_LENGTH,
        }
    }

    /// Codec for numeric fields, `None` for names.
    pub fn codec(&self) -> Option<FieldCodec> {
        match self.access {
            Access::Numeric { codec, .. } => Some(codec),
            Access::Name { .. } => None,
        }
    }

    pub fn is_name(&self) -> bool {
        matches!(self.access, Access::Name { .. })
    }

    fn window<'b>(&self, block: &'b [u8]) -> &'b [u8] {
        &block[self.offset..self.offset + self.width()]
    }

    fn decode_into(&self, block: &[u8], record: &mut R) -> Result<()> {
        match self.access {
            Access::Numeric { codec, set, .. } => set(record, codec.decode(self.window(block))?),
            Access::Name { set, .. } => set(record, decode_name(self.window(block))),
        }
        Ok(())
    }

    fn encode_into(&self, record: &R, block: &mut [u8]) -> Result<()> {
        let range = self.offset..self.offset + self.width();
        match self.access {
            Access::Numeric { codec, get, .. } => {
                block[range].copy_from_slice(&codec.encode(get(record))?);
            }
            Access::Name { get, .. } => block[range].copy_from_slice(&encode_name(get(record))?),
        }
        Ok(())
    }
}

/// Layout table for one record type.
pub struct Layout<R: 'static> {
    pub record: &'static str,
    pub size: usize,
    pub sections: &'static [&'static [Field<R>]],
}

impl<R: Default + 'static> Layout<R> {
    pub fn fields(&self) -> impl Iterator<Item = &'static Field<R>> {
        let sections = self.sections;
        sections.iter().flat_map(|section| section.iter())
    }

    /// Field whose layout entry starts at `offset`.
    pub fn field_at(&self, offset: usize) -> Option<&'static Field<R>> {
        self.fields().find(|field| field.offset == offset)
    }

    fn check_block(&self, block: &[u8]) -> Result<()> {
        if block.len() != self.size {
            return Err(Error::BlockLength {
                expected: self.size,
                actual: block.len(),
            });
        }
        Ok(())
    }

    pub fn decode(&self, block: &[u8]) -> Result<R> {
        self.check_block(block)?;
        let mut record = R::default();
        for field in self.fields() {
            field.decode_into(block, &mut record)?;
        }
        Ok(record)
    }

    /// Zero-filled block with every defined field written.
    pub fn encode(&self, record: &R) -> Result<Vec<u8>> {
        let mut block = vec![0u8; self.size];
        for field in self.fields() {
            field.encode_into(record, &mut block)?;
        }
        Ok(block)
    }

    pub fn encode_partial(&self, index: usize, value: f64) -> Result<Patch> {
        debug!("{} encode_partial received: {} at {}", self.record, value, index);
        let codec = self
            .field_at(index)
            .and_then(Field::codec)
            .ok_or(Error::UnsupportedField { index })?;
        let patch = Patch::from_slice(&codec.encode(value)?);
        debug!("{} encode_partial converted to: {:?}", self.record, patch.as_slice());
        Ok(patch)
    }

    pub fn encode_name(&self, index: usize, name: &str) -> Result<Patch> {
        match self.field_at(index) {
            Some(field) if field.is_name() => Ok(Patch::from_slice(&encode_name(name)?)),
            _ => Err(Error::UnsupportedNameField { index }),
        }
    }

    /// Logical value of the numeric field at `index`.
    pub fn get(&self, record: &R, index: usize) -> Result<f64> {
        match self.field_at(index).map(|field| field.access) {
            Some(Access::Numeric { get, .. }) => Ok(get(record)),
            _ => Err(Error::UnsupportedField { index }),
        }
    }

    /// Stores a logical value in the numeric field at `index`, after checking
    /// that it encodes.
    pub fn set(&self, record: &mut R, index: usize, value: f64) -> Result<()> {
        match self.field_at(index).map(|field| field.access) {
            Some(Access::Numeric { codec, set, .. }) => {
                codec.encode(value)?;
                set(record, value);
                Ok(())
            }
            _ => Err(Error::UnsupportedField { index }),
        }
    }

    pub fn set_name(&self, record: &mut R, index: usize, name: &str) -> Result<()> {
        match self.field_at(index).map(|field| field.access) {
            Some(Access::Name { set, .. }) => {
                encode_name(name)?;
                set(record, name.to_string());
                Ok(())
            }
            _ => Err(Error::UnsupportedNameField { index }),
        }
    }
}

/// Splices `patch` into `block` at `index`.
pub fn apply_patch(block: &mut [u8], index: usize, patch: &[u8]) -> Result<()> {
    let end = index
        .checked_add(patch.len())
        .filter(|&end| end <= block.len())
        .ok_or(Error::PatchOutOfBounds {
            index,
            len: patch.len(),
            block_len: block.len(),
        })?;
    block[index..end].copy_from_slice(patch);
    Ok(())
}

/// Full and partial conversion for one record type.
pub trait HeaderMapper {
    type Record;

    /// Block size in bytes.
    fn size(&self) -> usize;

    fn decode(&self, block: &[u8]) -> Result<Self::Record>;

    fn encode(&self, record: &Self::Record) -> Result<Vec<u8>>;

    /// Bytes a full encode would write at `index` for a field set to `value`.
    fn encode_partial(&self, index: usize, value: f64) -> Result<Patch>;

    fn encode_name(&self, index: usize, name: &str) -> Result<Patch>;
}

/// Implements [`HeaderMapper`] for a unit mapper over a static layout.
macro_rules! layout_mapper {
    ($mapper:ident, $record:ty, $layout:expr) => {
        impl $crate::layout::HeaderMapper for $mapper {
            type Record = $record;

            fn size(&self) -> usize {
                $layout.size
            }

            fn decode(&self, block: &[u8]) -> $crate::error::Result<$record> {
                $layout.decode(block)
            }

            fn encode(&self, record: &$record) -> $crate::error::Result<Vec<u8>> {
                $layout.encode(record)
            }

            fn encode_partial(
                &self,
                index: usize,
                value: f64,
            ) -> $crate::error::Result<$crate::layout::Patch> {
                $layout.encode_partial(index, value)
            }

            fn encode_name(
                &self,
                index: usize,
                name: &str,
            ) -> $crate::error::Result<$crate::layout::Patch> {
                $layout.encode_name(index, name)
            }
        }
    };
}
