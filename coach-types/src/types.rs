//! Chat message and request/reply types for the coach gateway.

use serde::{Deserialize, Serialize};

/// The role of a message participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// A human user (the rep, or an admin).
    User,
    /// The assistant (the in-app coach).
    Assistant,
    /// A system message.
    System,
}

/// One turn of a chat conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// The role of the message author.
    pub role: Role,
    /// The message text.
    pub content: String,
}

impl ChatMessage {
    /// A user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// An assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }

    /// A system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }
}

/// A coach chat request: a rep asks the coach about one of their calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoachChatRequest {
    /// Conversation history, oldest first.
    pub messages: Vec<ChatMessage>,
    /// Optional call context (transcript excerpt, call summary) grounding
    /// the coach's answer.
    pub call_context: Option<String>,
}

impl CoachChatRequest {
    /// Build a request from a conversation history, with no call context.
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            call_context: None,
        }
    }

    /// Attach call context to ground the coach's answer.
    #[must_use]
    pub fn call_context(mut self, context: impl Into<String>) -> Self {
        self.call_context = Some(context.into());
        self
    }
}

/// A transcript chat request: an admin asks questions across a set of call
/// transcripts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptChatRequest {
    /// Conversation history, oldest first.
    pub messages: Vec<ChatMessage>,
    /// The transcripts in scope for this conversation.
    pub transcript_ids: Vec<String>,
}

impl TranscriptChatRequest {
    /// Build a request scoped to the given transcripts.
    pub fn new(messages: Vec<ChatMessage>, transcript_ids: Vec<String>) -> Self {
        Self {
            messages,
            transcript_ids,
        }
    }
}

/// A complete (non-streamed) assistant reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    /// The full reply text.
    pub content: String,
}
