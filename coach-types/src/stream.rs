//! Streaming delivery contract for incremental assistant replies.
//!
//! A decoder run delivers zero or more content fragments through
//! [`ChatStreamSink::on_delta`], then terminates with exactly one of
//! [`ChatStreamSink::on_done`] or [`ChatStreamSink::on_error`]. Fragments
//! arrive in stream order; the caller concatenates them into the growing
//! reply.

/// Receiver for one streamed chat reply.
///
/// A sink instance belongs to a single request; it is never reused across
/// streams.
pub trait ChatStreamSink {
    /// A new fragment of assistant-generated text.
    fn on_delta(&mut self, text: &str);

    /// The stream ended normally. Called exactly once, after all deltas.
    fn on_done(&mut self);

    /// The stream failed mid-flight. Called exactly once, instead of
    /// `on_done`; no further callbacks follow.
    fn on_error(&mut self, message: &str);
}

/// Adapter implementing [`ChatStreamSink`] from a triple of closures.
///
/// # Example
///
/// ```
/// use coach_types::{ChatCallbacks, ChatStreamSink};
///
/// let mut reply = String::new();
/// let mut sink = ChatCallbacks {
///     on_delta: |text: &str| reply.push_str(text),
///     on_done: || {},
///     on_error: |message: &str| eprintln!("stream failed: {message}"),
/// };
/// sink.on_delta("Hello");
/// drop(sink);
/// assert_eq!(reply, "Hello");
/// ```
pub struct ChatCallbacks<D, F, E> {
    /// Invoked per content fragment, in stream order.
    pub on_delta: D,
    /// Invoked once on normal completion.
    pub on_done: F,
    /// Invoked once on stream failure.
    pub on_error: E,
}

impl<D, F, E> ChatStreamSink for ChatCallbacks<D, F, E>
where
    D: FnMut(&str),
    F: FnMut(),
    E: FnMut(&str),
{
    fn on_delta(&mut self, text: &str) {
        (self.on_delta)(text);
    }

    fn on_done(&mut self) {
        (self.on_done)();
    }

    fn on_error(&mut self, message: &str) {
        (self.on_error)(message);
    }
}
