//! Stream ingest — drives one request/response exchange and turns a
//! progressively-arriving byte stream into progressively-emitted events.
//!
//! Every event carries the full accumulated reply rather than a delta,
//! so consumers never see partial-byte boundaries or do their own
//! concatenation. The conversation id is captured at dispatch time and
//! stamped on every event; switching conversations mid-stream cannot
//! redirect updates.

use futures::StreamExt;

use chat_types::event::ChatEvent;

use crate::decoder::Utf8StreamDecoder;
use crate::event_bus::EventBus;
use crate::ports::ChatTransport;

/// Substituted into the assistant message when the exchange fails.
pub const ERROR_REPLY: &str = "Sorry, I encountered an error. Please try again.";

/// Run one streamed turn against the chat endpoint.
///
/// Emits `TurnStarted`, then an `AssistantDelta` per decoded chunk (with
/// the full accumulator), then `TurnCompleted` — or `TurnFailed` on any
/// transport or mid-stream error. Never returns an error itself; failures
/// degrade to events per the error design.
pub async fn run_turn(
    transport: &dyn ChatTransport,
    bus: &EventBus,
    conversation_id: &str,
    text: &str,
) {
    bus.emit(ChatEvent::TurnStarted {
        conversation_id: conversation_id.to_string(),
    });

    let mut stream = match transport.open(text).await {
        Ok(stream) => stream,
        Err(e) => {
            log::error!("Chat request failed: {}", e);
            bus.emit(ChatEvent::TurnFailed {
                conversation_id: conversation_id.to_string(),
                message: ERROR_REPLY.to_string(),
            });
            return;
        }
    };

    let mut decoder = Utf8StreamDecoder::new();
    let mut accumulated = String::new();

    while let Some(chunk) = stream.next().await {
        match chunk {
            Ok(bytes) => {
                let decoded = decoder.decode(&bytes);
                if decoded.is_empty() {
                    continue;
                }
                accumulated.push_str(&decoded);
                bus.emit(ChatEvent::AssistantDelta {
                    conversation_id: conversation_id.to_string(),
                    content: accumulated.clone(),
                });
            }
            Err(e) => {
                log::error!("Stream read failed: {}", e);
                bus.emit(ChatEvent::TurnFailed {
                    conversation_id: conversation_id.to_string(),
                    message: ERROR_REPLY.to_string(),
                });
                return;
            }
        }
    }

    let tail = decoder.finish();
    if !tail.is_empty() {
        accumulated.push_str(&tail);
        bus.emit(ChatEvent::AssistantDelta {
            conversation_id: conversation_id.to_string(),
            content: accumulated.clone(),
        });
    }

    bus.emit(ChatEvent::TurnCompleted {
        conversation_id: conversation_id.to_string(),
    });
}
