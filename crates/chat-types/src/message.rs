use serde::{Deserialize, Serialize};

/// Role in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single message in a conversation.
///
/// Messages are append-only except for the trailing assistant message,
/// which is replaced wholesale while a response streams in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: text.into(),
        }
    }

    /// Empty assistant message inserted before streaming starts.
    pub fn assistant_placeholder() -> Self {
        Self::assistant("")
    }

    pub fn is_empty_assistant(&self) -> bool {
        self.role == Role::Assistant && self.content.is_empty()
    }
}
