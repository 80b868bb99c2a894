//! Pick the best available store backend.
//!
//! Priority: localStorage → memory (fallback). Conversations survive a
//! reload only with the former; the latter keeps the app usable anyway.

use std::rc::Rc;

use chat_core::ports::KvStore;

use super::{LocalStorageStore, MemoryStore};

/// Open the best available store. Returns a trait object so callers are
/// backend-agnostic.
pub fn auto_detect_store() -> Rc<dyn KvStore> {
    match LocalStorageStore::open() {
        Ok(local) => {
            log::info!("Store backend: localStorage");
            Rc::new(local)
        }
        Err(e) => {
            log::warn!("localStorage unavailable ({}), falling back to memory", e);
            Rc::new(MemoryStore::new())
        }
    }
}
