//! In-memory transport: a block store standing in for the sampler.

use std::collections::HashMap;

use librarian_header::{apply_patch, Error as HeaderError};
use parking_lot::{Mutex, RwLock};
use tracing::trace;

use crate::error::{Error, Result};
use crate::transport::{HeaderAddress, SysexTransport};

/// One write received by a [`MemoryTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteRecord {
    Full(HeaderAddress),
    Partial {
        address: HeaderAddress,
        offset: usize,
        len: usize,
    },
}

/// Thread-safe map from address to resident block.
///
/// Full writes create the entry if needed. Partial writes require the block
/// to be resident and splice in place.
#[derive(Debug, Default)]
pub struct MemoryTransport {
    blocks: RwLock<HashMap<HeaderAddress, Vec<u8>>>,
    writes: Mutex<Vec<WriteRecord>>,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `block` resident at `address` without logging a write.
    pub fn insert(&self, address: HeaderAddress, block: Vec<u8>) -> Result<()> {
        check_size(address, block.len())?;
        self.blocks.write().insert(address, block);
        Ok(())
    }

    pub fn get(&self, address: HeaderAddress) -> Option<Vec<u8>> {
        self.blocks.read().get(&address).cloned()
    }

    pub fn remove(&self, address: HeaderAddress) -> Option<Vec<u8>> {
        self.blocks.write().remove(&address)
    }

    pub fn len(&self) -> usize {
        self.blocks.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.read().is_empty()
    }

    /// Writes received so far, oldest first.
    pub fn writes(&self) -> Vec<WriteRecord> {
        self.writes.lock().clone()
    }

    pub fn clear_writes(&self) {
        self.writes.lock().clear();
    }
}

fn check_size(address: HeaderAddress, actual: usize) -> Result<()> {
    let expected = address.block_size();
    if actual != expected {
        return Err(HeaderError::BlockLength { expected, actual }.into());
    }
    Ok(())
}

impl SysexTransport for MemoryTransport {
    fn read_header(&self, address: HeaderAddress) -> Result<Vec<u8>> {
        trace!("MemoryTransport read {}", address);
        self.get(address).ok_or(Error::NotFound(address))
    }

    fn write_header(&self, address: HeaderAddress, block: &[u8]) -> Result<()> {
        trace!("MemoryTransport write {} ({} bytes)", address, block.len());
        check_size(address, block.len())?;
        self.blocks.write().insert(address, block.to_vec());
        self.writes.lock().push(WriteRecord::Full(address));
        Ok(())
    }

    fn write_header_bytes(
        &self,
        address: HeaderAddress,
        offset: usize,
        bytes: &[u8],
    ) -> Result<()> {
        trace!(
            "MemoryTransport write {} bytes at {} of {}",
            bytes.len(),
            offset,
            address
        );
        let mut blocks = self.blocks.write();
        let block = blocks.get_mut(&address).ok_or(Error::NotFound(address))?;
        apply_patch(block, offset, bytes)?;
        self.writes.lock().push(WriteRecord::Partial {
            address,
            offset,
            len: bytes.len(),
        });
        Ok(())
    }
}
