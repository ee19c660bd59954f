//! Streaming chat client for the sales-coaching AI gateway.
//!
//! The gateway authenticates a caller, forwards chat requests to an LLM
//! provider, and streams the reply back as `text/event-stream`. This crate
//! sends those requests and decodes the stream incrementally, delivering
//! each content fragment through the [`ChatStreamSink`] callback contract.
//!
//! # Usage
//!
//! ```no_run
//! use coach_client::CoachClient;
//!
//! let client = CoachClient::new("session-token")
//!     .base_url("https://gateway.stride.internal");
//! ```
//!
//! # Features
//!
//! - Coach chat and transcript chat, streaming and non-streaming
//! - One shared SSE decoder for both endpoints, safe under arbitrary
//!   transport chunking (including splits inside UTF-8 code points and
//!   inside frame payloads)
//! - Exactly-once stream termination: `on_done` or `on_error`, never both
//! - Error mapping from HTTP status codes to [`GatewayError`] variants
//!   before any decoding starts

pub mod client;
pub mod error;
pub mod mapping;
pub mod streaming;

pub use client::CoachClient;
pub use streaming::decode_sse_stream;

// Re-export coach-types for convenience
pub use coach_types::{ChatCallbacks, ChatStreamSink, GatewayError};
