use serde::{Deserialize, Serialize};

/// Events emitted by a streaming turn.
/// The app drains these each frame and applies them to the repository.
///
/// Every event carries the conversation id captured when the turn was
/// dispatched, so a stream keeps updating its own conversation even if
/// the user switches to another one mid-stream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ChatEvent {
    /// A request was issued for this conversation
    TurnStarted { conversation_id: String },

    /// New decoded text arrived. `content` is the full accumulated
    /// assistant reply so far, not just the latest chunk.
    AssistantDelta {
        conversation_id: String,
        content: String,
    },

    /// The response stream ended normally
    TurnCompleted { conversation_id: String },

    /// The exchange failed; `message` is a user-visible description
    TurnFailed {
        conversation_id: String,
        message: String,
    },
}

impl ChatEvent {
    pub fn conversation_id(&self) -> &str {
        match self {
            ChatEvent::TurnStarted { conversation_id }
            | ChatEvent::AssistantDelta {
                conversation_id, ..
            }
            | ChatEvent::TurnCompleted { conversation_id }
            | ChatEvent::TurnFailed {
                conversation_id, ..
            } => conversation_id,
        }
    }
}
