//! Remote control of a connected S-series sampler.
//!
//! The native driver sits behind [`SysexTransport`] and only moves header
//! blocks. [`RemoteSampler`] decodes what it reads, encodes what it writes,
//! and turns single-field edits into byte patches.
//!
//! # Primary API
//!
//! - [`RemoteSampler`]: read, update, patch and rename headers
//! - [`SysexTransport`]: driver boundary
//! - [`MemoryTransport`]: resident block store for running without hardware
//!
//! # Example
//!
//! ```
//! use librarian_remote::{MemoryTransport, RemoteSampler};
//!
//! let remote = RemoteSampler::builder(MemoryTransport::new()).build()?;
//! remote.update_program(0, &Default::default())?;
//! remote.rename_program(0, "strings")?;
//! assert_eq!(remote.program(0)?.name, "STRINGS     ");
//! # Ok::<(), librarian_remote::Error>(())
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod transport;
pub use transport::{HeaderAddress, HeaderKind, SysexTransport};

pub mod memory;
pub use memory::{MemoryTransport, WriteRecord};

pub mod sampler;
pub use sampler::{RemoteSampler, RemoteSamplerBuilder, SamplerModel};
