#[cfg(test)]
mod tests {
    use crate::conversation::*;
    use crate::error::*;
    use crate::event::*;
    use crate::message::*;
    use crate::toast::*;

    // ─── Message Tests ───────────────────────────────────────

    #[test]
    fn test_message_user() {
        let msg = Message::user("Hello");
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.content, "Hello");
    }

    #[test]
    fn test_message_assistant() {
        let msg = Message::assistant("I can help");
        assert_eq!(msg.role, Role::Assistant);
        assert_eq!(msg.content, "I can help");
    }

    #[test]
    fn test_assistant_placeholder_is_empty() {
        let msg = Message::assistant_placeholder();
        assert_eq!(msg.role, Role::Assistant);
        assert!(msg.content.is_empty());
        assert!(msg.is_empty_assistant());
    }

    #[test]
    fn test_user_message_is_not_empty_assistant() {
        let msg = Message::user("");
        assert!(!msg.is_empty_assistant());
    }

    #[test]
    fn test_message_serialization_roundtrip() {
        let msg = Message::user("test input");
        let json = serde_json::to_string(&msg).unwrap();
        let deserialized: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.role, Role::User);
        assert_eq!(deserialized.content, "test input");
    }

    #[test]
    fn test_role_serialization() {
        let json = serde_json::to_string(&Role::User).unwrap();
        assert_eq!(json, r#""user""#);

        let json = serde_json::to_string(&Role::Assistant).unwrap();
        assert_eq!(json, r#""assistant""#);
    }

    #[test]
    fn test_role_deserialization() {
        let role: Role = serde_json::from_str(r#""assistant""#).unwrap();
        assert_eq!(role, Role::Assistant);
    }

    // ─── Conversation Tests ──────────────────────────────────

    #[test]
    fn test_conversation_new() {
        let convo = Conversation::new("c1");
        assert_eq!(convo.id, "c1");
        assert_eq!(convo.title, DEFAULT_TITLE);
        assert!(convo.messages.is_empty());
        assert!(!convo.created_at.is_empty());
        assert!(!convo.updated_at.is_empty());
    }

    #[test]
    fn test_conversation_summary() {
        let mut convo = Conversation::new("c1");
        convo.title = "Rust questions".to_string();
        let summary = convo.summary();
        assert_eq!(summary.id, "c1");
        assert_eq!(summary.title, "Rust questions");
    }

    #[test]
    fn test_conversation_serialization_roundtrip() {
        let mut convo = Conversation::new("c1");
        convo.messages.push(Message::user("hi"));
        convo.messages.push(Message::assistant("hello"));

        let json = serde_json::to_string(&convo).unwrap();
        let deserialized: Conversation = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.id, "c1");
        assert_eq!(deserialized.messages.len(), 2);
        assert_eq!(deserialized.messages[0].role, Role::User);
    }

    #[test]
    fn test_derive_title_short() {
        assert_eq!(derive_title("Hello"), "Hello");
    }

    #[test]
    fn test_derive_title_exactly_forty() {
        let text = "a".repeat(40);
        assert_eq!(derive_title(&text), text);
    }

    #[test]
    fn test_derive_title_truncates_long() {
        let text = "a".repeat(41);
        let title = derive_title(&text);
        assert_eq!(title, format!("{}...", "a".repeat(40)));
        assert_eq!(title.chars().count(), 43);
    }

    #[test]
    fn test_derive_title_counts_chars_not_bytes() {
        // 41 multi-byte characters must still truncate at 40 chars
        let text = "日".repeat(41);
        let title = derive_title(&text);
        assert_eq!(title, format!("{}...", "日".repeat(40)));
    }

    // ─── Toast Tests ─────────────────────────────────────────

    #[test]
    fn test_toast_kind_serialization() {
        let json = serde_json::to_string(&ToastKind::Error).unwrap();
        assert_eq!(json, r#""error""#);
        let json = serde_json::to_string(&ToastKind::Success).unwrap();
        assert_eq!(json, r#""success""#);
    }

    #[test]
    fn test_toast_duration_default() {
        assert_eq!(TOAST_DURATION_MS, 3000);
    }

    // ─── Event Tests ─────────────────────────────────────────

    #[test]
    fn test_chat_event_conversation_id() {
        let events = [
            ChatEvent::TurnStarted {
                conversation_id: "c1".to_string(),
            },
            ChatEvent::AssistantDelta {
                conversation_id: "c1".to_string(),
                content: "Hi".to_string(),
            },
            ChatEvent::TurnCompleted {
                conversation_id: "c1".to_string(),
            },
            ChatEvent::TurnFailed {
                conversation_id: "c1".to_string(),
                message: "boom".to_string(),
            },
        ];
        for event in &events {
            assert_eq!(event.conversation_id(), "c1");
        }
    }

    #[test]
    fn test_chat_event_serialization() {
        let event = ChatEvent::AssistantDelta {
            conversation_id: "c1".to_string(),
            content: "Hello world".to_string(),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("AssistantDelta"));
        assert!(json.contains("Hello world"));
    }

    // ─── Error Tests ─────────────────────────────────────────

    #[test]
    fn test_error_display() {
        let err = ChatError::Network("unreachable".to_string());
        assert_eq!(err.to_string(), "Network error: unreachable");

        let err = ChatError::Http { status: 500 };
        assert_eq!(err.to_string(), "HTTP 500");

        let err = ChatError::MissingBody;
        assert_eq!(err.to_string(), "Response has no readable body");
    }

    #[test]
    fn test_error_from_serde() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{{bad}}").unwrap_err();
        let err: ChatError = serde_err.into();
        assert!(matches!(err, ChatError::Serialization(_)));
    }

    #[test]
    fn test_error_clone() {
        let err = ChatError::Storage("quota".to_string());
        let cloned = err.clone();
        assert_eq!(err.to_string(), cloned.to_string());
    }
}
