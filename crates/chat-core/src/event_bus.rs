//! Simple event bus for decoupled communication between streaming turns
//! and the UI.
//!
//! The bus is single-threaded (WASM constraint) and uses interior mutability
//! via RefCell. Events are buffered and drained by the UI on each frame.

use std::cell::RefCell;
use std::collections::{HashSet, VecDeque};
use std::rc::Rc;

use chat_types::event::ChatEvent;

/// Shared event bus — clone-cheap via Rc.
#[derive(Clone)]
pub struct EventBus {
    inner: Rc<RefCell<VecDeque<ChatEvent>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(VecDeque::new())),
        }
    }

    /// Publish an event. Called by a streaming turn.
    pub fn emit(&self, event: ChatEvent) {
        self.inner.borrow_mut().push_back(event);
    }

    /// Drain all pending events. Called by the UI layer each frame.
    pub fn drain(&self) -> Vec<ChatEvent> {
        self.inner.borrow_mut().drain(..).collect()
    }

    /// Drain, keeping only the newest delta per conversation. Every
    /// `AssistantDelta` carries the full accumulated reply, so when a
    /// fast stream outpaces the frame rate the earlier deltas queued
    /// since the last drain are redundant full-replaces. Start,
    /// completion, and failure events are always kept, in order.
    pub fn drain_coalesced(&self) -> Vec<ChatEvent> {
        let events: Vec<ChatEvent> = self.inner.borrow_mut().drain(..).collect();

        let mut keeps_delta: HashSet<String> = HashSet::new();
        let mut kept: Vec<ChatEvent> = Vec::with_capacity(events.len());
        for event in events.into_iter().rev() {
            if let ChatEvent::AssistantDelta {
                conversation_id, ..
            } = &event
            {
                if !keeps_delta.insert(conversation_id.clone()) {
                    continue;
                }
            }
            kept.push(event);
        }
        kept.reverse();
        kept
    }

    /// Check if there are pending events (useful for egui repaint triggers).
    pub fn has_pending(&self) -> bool {
        !self.inner.borrow().is_empty()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
