mod fs;
mod memory;

pub use fs::FileBackend;
pub use memory::MemoryBackend;

use crate::Result;

/// Key to string-blob store, the local-storage-shaped persistence
/// collaborator.
///
/// Writes are synchronous and last-write-wins; there is no retry layer on
/// top. A failed write surfaces to the caller of the attempted action.
pub trait StorageBackend {
    /// Read the blob under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, overwriting any previous blob.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Delete the blob under `key`. Unknown keys are ignored.
    fn remove(&mut self, key: &str) -> Result<()>;
}
