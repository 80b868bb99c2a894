//! Short-lived status notifications.
//!
//! The queue only manages membership and id allocation; expiry timers are
//! scheduled by the app layer. Ids are never reused, so a timer firing
//! after a manual dismissal finds nothing to remove.

use chat_types::toast::{Toast, ToastKind};

#[derive(Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a toast and return its id. The monotonic counter keeps ids
    /// distinct even for toasts created within the same tick.
    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            message: message.into(),
            kind,
        });
        id
    }

    /// Remove by id; no-op if the toast already expired or was dismissed.
    pub fn remove(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
