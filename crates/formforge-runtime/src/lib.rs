// Runtime layer - persistence backends plus the store/preview wiring
// Owns the write-through FormStore and the submission writes

pub mod error;
pub mod keys;
pub mod preview;
pub mod storage;
pub mod store;

pub use error::{Error, Result};
pub use preview::{PreviewLaunch, SubmitOutcome, launch_preview, submit_preview};
pub use storage::{FileBackend, MemoryBackend, StorageBackend};
pub use store::FormStore;
