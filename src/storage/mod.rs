// Storage backends - durable bytes in, durable bytes out
pub mod file;
pub mod memory;
pub mod slot;

pub use file::JsonFileBackend;
pub use memory::MemoryBackend;
pub use slot::{SlotBackend, SlotFile};
