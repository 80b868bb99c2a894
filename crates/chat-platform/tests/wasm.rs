//! WASM-target tests for chat-platform (Node.js runtime).
//!
//! Tests MemoryStore and the repository running over it under
//! wasm32-unknown-unknown via `wasm-pack test --node`.
//!
//! LocalStorageStore and HttpChatTransport need a browser context.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen_test::*;

use chat_core::ports::KvStore;
use chat_core::repository::{ConversationRepository, CONVERSATIONS_KEY};
use chat_core::toast_queue::ToastQueue;
use chat_platform::store::MemoryStore;
use chat_platform::time::{schedule_toast_expiry, sleep};
use chat_types::toast::ToastKind;

// ─── MemoryStore Tests ───────────────────────────────────

#[wasm_bindgen_test]
fn memory_store_backend_name() {
    let store = MemoryStore::new();
    assert_eq!(store.backend_name(), "memory");
}

#[wasm_bindgen_test]
fn memory_store_get_missing() {
    let store = MemoryStore::new();
    assert!(store.get("nonexistent").unwrap().is_none());
}

#[wasm_bindgen_test]
fn memory_store_set_and_get() {
    let store = MemoryStore::new();
    store.set("key1", "value1").unwrap();
    assert_eq!(store.get("key1").unwrap(), Some("value1".to_string()));
}

#[wasm_bindgen_test]
fn memory_store_overwrite() {
    let store = MemoryStore::new();
    store.set("key", "v1").unwrap();
    store.set("key", "v2").unwrap();
    assert_eq!(store.get("key").unwrap(), Some("v2".to_string()));
}

#[wasm_bindgen_test]
fn memory_store_remove() {
    let store = MemoryStore::new();
    store.set("key", "val").unwrap();
    store.remove("key").unwrap();
    assert!(store.get("key").unwrap().is_none());
}

#[wasm_bindgen_test]
fn memory_store_remove_nonexistent() {
    let store = MemoryStore::new();
    store.remove("nonexistent").unwrap();
}

#[wasm_bindgen_test]
fn memory_store_empty_value() {
    let store = MemoryStore::new();
    store.set("empty", "").unwrap();
    assert_eq!(store.get("empty").unwrap(), Some(String::new()));
}

#[wasm_bindgen_test]
fn memory_store_unicode_value() {
    let store = MemoryStore::new();
    let text = "你好世界 🌍 こんにちは";
    store.set("unicode", text).unwrap();
    assert_eq!(store.get("unicode").unwrap().as_deref(), Some(text));
}

// ─── Repository over MemoryStore ─────────────────────────

#[wasm_bindgen_test]
fn repository_persists_through_memory_store() {
    let store = Rc::new(MemoryStore::new());

    {
        let mut repo = ConversationRepository::new(store.clone());
        let id = repo.append_user_message(None, "Hello from wasm");
        repo.append_assistant_placeholder(&id);
        repo.update_last_assistant_message(&id, "Hi!");
    }

    let raw = store.get(CONVERSATIONS_KEY).unwrap().expect("saved");
    assert!(raw.contains("Hello from wasm"));

    let repo = ConversationRepository::new(store);
    assert_eq!(repo.conversations().len(), 1);
    assert_eq!(repo.conversations()[0].messages.len(), 2);
}

#[wasm_bindgen_test]
fn repository_recovers_from_corrupt_store() {
    let store = Rc::new(MemoryStore::new());
    store.set(CONVERSATIONS_KEY, "[{broken").unwrap();

    let repo = ConversationRepository::new(store);
    assert!(repo.conversations().is_empty());
}

// ─── Toast expiry timers ─────────────────────────────────

#[wasm_bindgen_test]
async fn same_tick_toasts_expire_independently() {
    let queue = Rc::new(RefCell::new(ToastQueue::new()));
    let a = queue.borrow_mut().push("saved", ToastKind::Success);
    let b = queue.borrow_mut().push("saved again", ToastKind::Success);
    assert_ne!(a, b);

    let expired = Rc::new(RefCell::new(0u32));
    for (id, ms) in [(a, 10), (b, 30)] {
        let expired = expired.clone();
        schedule_toast_expiry(queue.clone(), id, ms, move || {
            *expired.borrow_mut() += 1;
        });
    }

    sleep(60).await;
    assert!(queue.borrow().is_empty());
    assert_eq!(*expired.borrow(), 2);
}

#[wasm_bindgen_test]
async fn late_expiry_after_manual_dismissal_is_noop() {
    let queue = Rc::new(RefCell::new(ToastQueue::new()));
    let doomed = queue.borrow_mut().push("dismiss me", ToastKind::Info);
    let kept = queue.borrow_mut().push("leave me", ToastKind::Info);

    schedule_toast_expiry(queue.clone(), doomed, 10, || {});
    // User dismisses before the timer fires
    queue.borrow_mut().remove(doomed);

    sleep(30).await;
    let toasts = queue.borrow();
    assert_eq!(toasts.toasts().len(), 1);
    assert_eq!(toasts.toasts()[0].id, kept);
}
