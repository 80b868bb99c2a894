mod auto;
mod local;
mod memory;

pub use auto::auto_detect_store;
pub use local::LocalStorageStore;
pub use memory::MemoryStore;
