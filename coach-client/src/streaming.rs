//! SSE streaming support for the coach gateway chat endpoints.
//!
//! The gateway replies with a `text/event-stream` body whose frames carry
//! incremental assistant content in the upstream provider's shape:
//!
//! ```text
//! data: {"choices":[{"delta":{"content":"Hel"}}]}
//!
//! data: {"choices":[{"delta":{"content":"lo"}}]}
//!
//! data: [DONE]
//! ```
//!
//! [`decode_sse_stream`] consumes the raw byte stream, reassembles lines
//! across chunk boundaries (including UTF-8 code points split mid-chunk),
//! and hands each content fragment to a [`ChatStreamSink`]. Exactly one of
//! `on_done` / `on_error` fires per run, after all deltas.

use coach_types::ChatStreamSink;
use futures::{Stream, StreamExt};
use reqwest::Response;

/// Decode an HTTP response body as a chat event stream.
///
/// The caller has already verified the response status; from here every
/// outcome is reported through the sink.
pub(crate) async fn stream_chat_response<S>(response: Response, sink: &mut S)
where
    S: ChatStreamSink + ?Sized,
{
    decode_sse_stream(response.bytes_stream(), sink).await;
}

/// Decode a raw SSE byte stream into sink callbacks.
///
/// Works over any chunking of the input: chunk boundaries may fall inside a
/// UTF-8 code point, inside a line, or inside a frame's JSON payload without
/// changing the delivered fragment sequence. A transport read error
/// terminates the run with a single `on_error`; every other input — including
/// malformed frames — ends with a single `on_done`.
pub async fn decode_sse_stream<B, E, S>(byte_stream: B, sink: &mut S)
where
    B: Stream<Item = Result<bytes::Bytes, E>>,
    E: std::fmt::Display,
    S: ChatStreamSink + ?Sized,
{
    let mut byte_stream = std::pin::pin!(byte_stream);
    let mut decoder = SseChatDecoder::new();

    // `[DONE]` ends the run without draining the rest of the body.
    while !decoder.done {
        match byte_stream.next().await {
            Some(Ok(chunk)) => {
                if let Err(message) = decoder.push_chunk(&chunk, sink) {
                    sink.on_error(&message);
                    return;
                }
            }
            Some(Err(e)) => {
                sink.on_error(&format!("stream read error: {e}"));
                return;
            }
            None => break,
        }
    }

    decoder.finish(sink);
    sink.on_done();
}

/// What one SSE line contributes to the stream.
enum LineOutcome {
    /// Keepalive, comment, non-data line, or a frame without content.
    Skip,
    /// New assistant text.
    Delta(String),
    /// The `[DONE]` sentinel.
    Done,
    /// The payload failed to parse and may be completed by more input.
    NeedMoreInput,
}

/// Incremental decoder state for one chat stream.
struct SseChatDecoder {
    /// Decoded text not yet resolved into complete lines.
    line_buf: String,
    /// Trailing bytes of a UTF-8 sequence split across chunk boundaries.
    partial_utf8: Vec<u8>,
    /// A data line was pushed back to await the rest of its payload.
    reparse_pending: bool,
    /// `[DONE]` seen; remaining input is discarded.
    done: bool,
}

impl SseChatDecoder {
    fn new() -> Self {
        Self {
            line_buf: String::new(),
            partial_utf8: Vec::new(),
            reparse_pending: false,
            done: false,
        }
    }

    /// Decode one transport chunk and emit any fragments it completes.
    ///
    /// Returns an error message only for byte sequences that can never
    /// become valid UTF-8, which is terminal for the stream.
    fn push_chunk<S>(&mut self, chunk: &[u8], sink: &mut S) -> Result<(), String>
    where
        S: ChatStreamSink + ?Sized,
    {
        self.decode_utf8(chunk)?;
        self.drain_lines(sink);
        Ok(())
    }

    /// Append a chunk to the line buffer, carrying a split code point over
    /// to the next chunk.
    fn decode_utf8(&mut self, chunk: &[u8]) -> Result<(), String> {
        let carried;
        let data: &[u8] = if self.partial_utf8.is_empty() {
            chunk
        } else {
            self.partial_utf8.extend_from_slice(chunk);
            carried = std::mem::take(&mut self.partial_utf8);
            &carried
        };

        match std::str::from_utf8(data) {
            Ok(text) => self.line_buf.push_str(text),
            Err(e) => {
                if e.error_len().is_some() {
                    return Err(format!("UTF-8 decode error: {e}"));
                }
                // Incomplete final sequence: keep the tail for the next chunk.
                let valid = e.valid_up_to();
                self.line_buf
                    .push_str(std::str::from_utf8(&data[..valid]).unwrap_or_default());
                self.partial_utf8 = data[valid..].to_vec();
            }
        }
        Ok(())
    }

    /// Process complete lines out of the buffer, keeping any trailing
    /// partial line for the next chunk.
    fn drain_lines<S>(&mut self, sink: &mut S)
    where
        S: ChatStreamSink + ?Sized,
    {
        while !self.done {
            let Some(newline_pos) = self.line_buf.find('\n') else {
                break;
            };
            let line = self.line_buf[..newline_pos]
                .trim_end_matches('\r')
                .to_string();
            self.line_buf.drain(..=newline_pos);

            let already_retried = std::mem::take(&mut self.reparse_pending);
            match classify_line(&line, already_retried) {
                LineOutcome::Skip => {}
                LineOutcome::Delta(text) => sink.on_delta(&text),
                LineOutcome::Done => self.done = true,
                LineOutcome::NeedMoreInput => {
                    // Reconstitute the line and wait for the rest of the
                    // payload before retrying it once.
                    let mut rebuilt = line;
                    rebuilt.push('\n');
                    rebuilt.push_str(&self.line_buf);
                    self.line_buf = rebuilt;
                    self.reparse_pending = true;
                    return;
                }
            }
        }
    }

    /// Final pass over whatever the buffer still holds: a stream may end
    /// without a trailing newline after the last frame.
    fn finish<S>(&mut self, sink: &mut S)
    where
        S: ChatStreamSink + ?Sized,
    {
        if self.done {
            return;
        }
        let rest = std::mem::take(&mut self.line_buf);
        for line in rest.split('\n') {
            let line = line.trim_end_matches('\r');
            match classify_line(line, true) {
                LineOutcome::Skip | LineOutcome::NeedMoreInput => {}
                LineOutcome::Delta(text) => sink.on_delta(&text),
                LineOutcome::Done => {
                    self.done = true;
                    break;
                }
            }
        }
    }
}

/// Classify one SSE line.
///
/// With `already_retried` set, a payload that fails to parse is dropped
/// instead of being pushed back again — no amount of further input can fix
/// a frame that stayed malformed after reassembly.
fn classify_line(line: &str, already_retried: bool) -> LineOutcome {
    if line.is_empty() || line.starts_with(':') {
        return LineOutcome::Skip;
    }
    let Some(payload) = line.strip_prefix("data: ") else {
        // Tolerate `event:`, `id:`, and future line kinds.
        return LineOutcome::Skip;
    };
    let payload = payload.trim();

    if payload == "[DONE]" {
        return LineOutcome::Done;
    }

    match serde_json::from_str::<serde_json::Value>(payload) {
        Ok(json) => match json["choices"][0]["delta"]["content"].as_str() {
            Some(content) if !content.is_empty() => LineOutcome::Delta(content.to_string()),
            _ => LineOutcome::Skip,
        },
        Err(_) if !already_retried => LineOutcome::NeedMoreInput,
        Err(e) => {
            tracing::warn!(error = %e, "dropping malformed chat frame");
            LineOutcome::Skip
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
