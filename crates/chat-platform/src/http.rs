//! HTTP transport for the chat endpoint.
//!
//! Sends `{"message": ...}` as JSON via browser `fetch()` (gloo-net) and
//! exposes the raw response body as a stream of byte chunks. Decoding is
//! left to the core so chunk boundaries stay a transport detail.

use async_trait::async_trait;
use futures::stream;
use js_sys::Uint8Array;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::ReadableStreamDefaultReader;

use chat_core::ports::{ByteStream, ChatTransport};
use chat_types::{ChatError, Result};

pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/api/chat";

/// Wire format of the outgoing request body.
#[derive(Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

pub struct HttpChatTransport {
    endpoint: String,
}

impl HttpChatTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for HttpChatTransport {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

#[async_trait(?Send)]
impl ChatTransport for HttpChatTransport {
    async fn open(&self, message: &str) -> Result<ByteStream> {
        let response = gloo_net::http::Request::post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(&ChatRequest { message })
            .map_err(|e| ChatError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ChatError::Http {
                status: response.status(),
            });
        }

        let raw = response.body().ok_or(ChatError::MissingBody)?;
        let reader: ReadableStreamDefaultReader = raw
            .get_reader()
            .dyn_into()
            .map_err(|_| ChatError::JsInterop("Body reader unavailable".to_string()))?;

        // Pump the reader into a byte stream. State drops to None after a
        // read error so the stream ends instead of erroring forever.
        let stream = stream::unfold(Some(reader), |state| async move {
            let reader = state?;
            match JsFuture::from(reader.read()).await {
                Ok(result) => {
                    let done = js_sys::Reflect::get(&result, &JsValue::from_str("done"))
                        .ok()
                        .and_then(|v| v.as_bool())
                        .unwrap_or(true);
                    if done {
                        return None;
                    }
                    let value = js_sys::Reflect::get(&result, &JsValue::from_str("value"))
                        .unwrap_or(JsValue::UNDEFINED);
                    let bytes = Uint8Array::new(&value).to_vec();
                    Some((Ok(bytes), Some(reader)))
                }
                Err(e) => Some((Err(ChatError::Network(format!("{:?}", e))), None)),
            }
        });

        Ok(Box::pin(stream))
    }
}
