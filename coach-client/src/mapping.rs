//! Request/response mapping between coach-types and the gateway's JSON wire
//! format.
//!
//! The gateway accepts the conversation as `{role, content}` pairs and
//! relays the upstream provider's reply shape: streamed frames carry
//! `choices[0].delta.content`, complete replies carry
//! `choices[0].message.content`.

use coach_types::{
    ChatMessage, ChatReply, CoachChatRequest, GatewayError, Role, TranscriptChatRequest,
};

// ─── Request mapping ─────────────────────────────────────────────────────────

/// Convert a [`CoachChatRequest`] into the gateway JSON body.
#[must_use]
pub(crate) fn to_coach_request(req: &CoachChatRequest, stream: bool) -> serde_json::Value {
    let mut body = serde_json::json!({
        "messages": map_messages(&req.messages),
        "stream": stream,
    });
    if let Some(context) = &req.call_context {
        body["call_context"] = serde_json::Value::String(context.clone());
    }
    body
}

/// Convert a [`TranscriptChatRequest`] into the gateway JSON body.
#[must_use]
pub(crate) fn to_transcript_request(req: &TranscriptChatRequest, stream: bool) -> serde_json::Value {
    serde_json::json!({
        "messages": map_messages(&req.messages),
        "transcript_ids": req.transcript_ids,
        "stream": stream,
    })
}

fn map_messages(messages: &[ChatMessage]) -> Vec<serde_json::Value> {
    messages
        .iter()
        .map(|m| {
            let role = match m.role {
                Role::User => "user",
                Role::Assistant => "assistant",
                Role::System => "system",
            };
            serde_json::json!({ "role": role, "content": m.content })
        })
        .collect()
}

// ─── Response mapping ────────────────────────────────────────────────────────

/// Extract the assistant reply from a non-streaming gateway response.
pub(crate) fn from_reply_response(json: &serde_json::Value) -> Result<ChatReply, GatewayError> {
    let content = json["choices"][0]["message"]["content"]
        .as_str()
        .ok_or_else(|| {
            GatewayError::InvalidResponse("missing choices[0].message.content".into())
        })?;
    Ok(ChatReply {
        content: content.to_string(),
    })
}
