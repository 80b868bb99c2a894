//! Conversation repository — in-memory conversation set plus active-id
//! tracking, persisted through a [`KvStore`] on every mutation.
//!
//! The set is ordered newest-first; new conversations are prepended.
//! Persistence is defensive: a corrupt stored value is dropped with a
//! warning, never propagated to the UI.

use std::rc::Rc;

use chat_types::conversation::{derive_title, Conversation, ConversationSummary};
use chat_types::message::{Message, Role};

use crate::ports::KvStore;

pub const CONVERSATIONS_KEY: &str = "conversations";
pub const ACTIVE_ID_KEY: &str = "active_conversation_id";

pub struct ConversationRepository {
    conversations: Vec<Conversation>,
    active_id: Option<String>,
    store: Rc<dyn KvStore>,
}

impl ConversationRepository {
    /// Build a repository over a store, restoring any persisted state.
    pub fn new(store: Rc<dyn KvStore>) -> Self {
        let conversations = Self::load_conversations(store.as_ref());
        let active_id = Self::load_active_id(store.as_ref());
        log::info!(
            "Restored {} conversation(s) from {}",
            conversations.len(),
            store.backend_name()
        );
        Self {
            conversations,
            active_id,
            store,
        }
    }

    fn load_conversations(store: &dyn KvStore) -> Vec<Conversation> {
        let raw = match store.get(CONVERSATIONS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                log::warn!("Failed to read persisted conversations: {}", e);
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(conversations) => conversations,
            Err(e) => {
                log::warn!("Dropping corrupt persisted conversations: {}", e);
                Vec::new()
            }
        }
    }

    fn load_active_id(store: &dyn KvStore) -> Option<String> {
        match store.get(ACTIVE_ID_KEY) {
            Ok(id) => id,
            Err(e) => {
                log::warn!("Failed to read persisted active id: {}", e);
                None
            }
        }
    }

    // ─── Queries ─────────────────────────────────────────────

    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    pub fn summaries(&self) -> Vec<ConversationSummary> {
        self.conversations.iter().map(|c| c.summary()).collect()
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    /// The active conversation, if the active id refers to one.
    /// An unknown active id yields `None` ("no active conversation").
    pub fn active(&self) -> Option<&Conversation> {
        let id = self.active_id.as_deref()?;
        self.conversations.iter().find(|c| c.id == id)
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut Conversation> {
        self.conversations.iter_mut().find(|c| c.id == id)
    }

    // ─── Mutations ───────────────────────────────────────────

    /// Create a fresh conversation, prepend it, and make it active.
    pub fn create_conversation(&mut self) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.conversations.insert(0, Conversation::new(&id));
        self.active_id = Some(id.clone());
        self.persist();
        self.persist_active_id();
        id
    }

    /// Set the active conversation. Unknown ids are accepted; they simply
    /// render as "no active conversation" downstream.
    pub fn select_conversation(&mut self, id: &str) {
        self.active_id = Some(id.to_string());
        self.persist_active_id();
    }

    /// Remove a conversation. No-op when the id is absent. Deleting the
    /// active conversation clears the active id rather than selecting a
    /// neighbour.
    pub fn delete_conversation(&mut self, id: &str) {
        let before = self.conversations.len();
        self.conversations.retain(|c| c.id != id);
        if self.conversations.len() == before {
            return;
        }
        if self.active_id.as_deref() == Some(id) {
            self.active_id = None;
        }
        self.persist();
        self.persist_active_id();
    }

    /// Overwrite a conversation's title. Blank (or whitespace-only) titles
    /// and absent ids are no-ops.
    pub fn rename_conversation(&mut self, id: &str, new_title: &str) {
        let title = new_title.trim();
        if title.is_empty() {
            return;
        }
        let title = title.to_string();
        if let Some(convo) = self.find_mut(id) {
            convo.title = title;
            convo.updated_at = chrono::Utc::now().to_rfc3339();
            self.persist();
        }
    }

    /// Append a user message, creating a conversation first when none is
    /// targeted (or the target no longer exists). The title is derived
    /// from the text the first time a conversation gains a message.
    /// Returns the resolved conversation id.
    pub fn append_user_message(&mut self, id: Option<&str>, text: &str) -> String {
        let id = match id {
            Some(id) if self.find_mut(id).is_some() => id.to_string(),
            _ => self.create_conversation(),
        };
        if let Some(convo) = self.find_mut(&id) {
            if convo.messages.is_empty() {
                convo.title = derive_title(text);
            }
            convo.messages.push(Message::user(text));
            convo.updated_at = chrono::Utc::now().to_rfc3339();
        }
        self.persist();
        id
    }

    /// Append the empty assistant message a streaming turn will fill in.
    /// Guarded so two consecutive empty placeholders can never occur.
    pub fn append_assistant_placeholder(&mut self, id: &str) {
        if let Some(convo) = self.find_mut(id) {
            if convo.messages.last().is_some_and(|m| m.is_empty_assistant()) {
                log::warn!("Placeholder already pending for conversation {}", id);
                return;
            }
            convo.messages.push(Message::assistant_placeholder());
            self.persist();
        }
    }

    /// Replace the content of the trailing assistant message with the full
    /// accumulated reply. If the trailing message is not an assistant
    /// message the content is appended as a new one instead of clobbering
    /// user text.
    pub fn update_last_assistant_message(&mut self, id: &str, content: &str) {
        if let Some(convo) = self.find_mut(id) {
            match convo.messages.last_mut() {
                Some(last) if last.role == Role::Assistant => {
                    last.content = content.to_string();
                }
                _ => {
                    log::warn!(
                        "Trailing message of conversation {} is not an assistant message; appending",
                        id
                    );
                    convo.messages.push(Message::assistant(content));
                }
            }
            convo.updated_at = chrono::Utc::now().to_rfc3339();
            self.persist();
        }
    }

    // ─── Persistence ─────────────────────────────────────────

    /// Write the conversation set. An empty set is skipped: deleting every
    /// conversation leaves the last non-empty snapshot in storage.
    fn persist(&self) {
        if self.conversations.is_empty() {
            return;
        }
        let json = match serde_json::to_string(&self.conversations) {
            Ok(json) => json,
            Err(e) => {
                log::error!("Failed to serialize conversations: {}", e);
                return;
            }
        };
        if let Err(e) = self.store.set(CONVERSATIONS_KEY, &json) {
            log::error!("Failed to persist conversations: {}", e);
        }
    }

    /// Write the active id. `None` is skipped (same caveat as `persist`).
    fn persist_active_id(&self) {
        let Some(id) = self.active_id.as_deref() else {
            return;
        };
        if let Err(e) = self.store.set(ACTIVE_ID_KEY, id) {
            log::error!("Failed to persist active id: {}", e);
        }
    }
}
