//! Timer helpers over gloo-timers.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;

use chat_core::toast_queue::ToastQueue;

/// Resolve after `ms` milliseconds on the browser event loop.
pub async fn sleep(ms: u32) {
    TimeoutFuture::new(ms).await;
}

/// Remove a toast after its display duration, then invoke `on_expired`
/// (typically an egui repaint request). Each toast gets its own timer;
/// because ids are never reused, a timer firing after a manual dismissal
/// removes nothing.
pub fn schedule_toast_expiry(
    queue: Rc<RefCell<ToastQueue>>,
    id: u64,
    duration_ms: u32,
    on_expired: impl FnOnce() + 'static,
) {
    wasm_bindgen_futures::spawn_local(async move {
        sleep(duration_ms).await;
        queue.borrow_mut().remove(id);
        on_expired();
    });
}
