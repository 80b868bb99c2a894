//! Incremental UTF-8 decoding for streamed response bodies.
//!
//! The network layer hands us arbitrary byte chunks; a multi-byte
//! character can be split across two of them. The decoder holds the
//! incomplete tail bytes between calls so output text is never corrupted
//! at chunk boundaries.

/// Streaming UTF-8 decoder with carry-over state.
#[derive(Default)]
pub struct Utf8StreamDecoder {
    /// Trailing bytes of an incomplete sequence from the previous chunk
    pending: Vec<u8>,
}

impl Utf8StreamDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode the next chunk, returning all text that is complete so far.
    /// Invalid sequences become U+FFFD; an incomplete trailing sequence is
    /// buffered until the next call.
    pub fn decode(&mut self, bytes: &[u8]) -> String {
        self.pending.extend_from_slice(bytes);
        let mut buf = std::mem::take(&mut self.pending);
        let mut out = String::new();

        loop {
            match std::str::from_utf8(&buf) {
                Ok(text) => {
                    out.push_str(text);
                    break;
                }
                Err(e) => {
                    let valid = e.valid_up_to();
                    out.push_str(&String::from_utf8_lossy(&buf[..valid]));
                    match e.error_len() {
                        Some(len) => {
                            // Invalid bytes mid-stream: substitute and move on
                            out.push('\u{FFFD}');
                            buf.drain(..valid + len);
                        }
                        None => {
                            // Sequence may complete in the next chunk
                            self.pending = buf[valid..].to_vec();
                            break;
                        }
                    }
                }
            }
        }

        out
    }

    /// Flush any dangling partial sequence at end of stream.
    pub fn finish(&mut self) -> String {
        if self.pending.is_empty() {
            return String::new();
        }
        let tail = String::from_utf8_lossy(&self.pending).into_owned();
        self.pending.clear();
        tail
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }
}
