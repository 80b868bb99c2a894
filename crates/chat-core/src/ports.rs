//! Port traits — the boundary between core logic and the browser.
//!
//! These traits are defined here in `chat-core` (pure Rust).
//! Implementations live in `chat-platform` (browser adapters).
//! The core never imports platform code; it only depends on these traits.

use std::pin::Pin;

use async_trait::async_trait;
use futures::Stream;

use chat_types::Result;

/// Raw response body: byte chunks in arrival order.
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Vec<u8>>>>>;

// ─── Store Port ──────────────────────────────────────────────

/// Flat string-keyed storage (localStorage in the browser).
/// Synchronous because every backend we target is.
pub trait KvStore {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    fn remove(&self, key: &str) -> Result<()>;

    /// Name of this backend (for logging/debug)
    fn backend_name(&self) -> &str;
}

// ─── Transport Port ──────────────────────────────────────────

/// Opens one streamed exchange with the chat endpoint.
#[async_trait(?Send)]
pub trait ChatTransport {
    /// POST the outgoing message and return the response body stream.
    /// A non-success status or an absent body is an `Err` before any
    /// chunk is yielded.
    async fn open(&self, message: &str) -> Result<ByteStream>;
}
