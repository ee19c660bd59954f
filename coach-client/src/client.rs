//! Coach gateway client struct and builder.

use coach_types::{
    ChatReply, ChatStreamSink, CoachChatRequest, GatewayError, TranscriptChatRequest,
};

use crate::error::{map_http_status, map_reqwest_error};
use crate::mapping::{from_reply_response, to_coach_request, to_transcript_request};
use crate::streaming::stream_chat_response;

/// Default gateway base URL (local development instance).
const DEFAULT_BASE_URL: &str = "http://localhost:8787";

/// Client for the coach gateway chat endpoints.
///
/// One client serves both chat features; the access token identifies the
/// caller, and the gateway enforces role and quota per request.
///
/// # Example
///
/// ```no_run
/// use coach_client::CoachClient;
///
/// let client = CoachClient::new("session-token")
///     .base_url("https://gateway.stride.internal");
/// ```
pub struct CoachClient {
    /// Bearer token for the caller's session.
    pub(crate) access_token: String,
    /// Gateway base URL (override for testing or other deployments).
    pub(crate) base_url: String,
    /// Shared HTTP client.
    pub(crate) client: reqwest::Client,
}

impl CoachClient {
    /// Create a new client with the given access token and sensible defaults.
    ///
    /// Default base URL: `http://localhost:8787`.
    #[must_use]
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            base_url: DEFAULT_BASE_URL.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Override the gateway base URL.
    ///
    /// Useful for testing with a local mock server or pointing at a
    /// deployed gateway.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Build the coach chat endpoint URL.
    pub(crate) fn coach_chat_url(&self) -> String {
        format!("{}/v1/coach/chat", self.base_url)
    }

    /// Build the transcript chat endpoint URL.
    pub(crate) fn transcript_chat_url(&self) -> String {
        format!("{}/v1/transcripts/chat", self.base_url)
    }

    /// Ask the coach and wait for the complete reply.
    pub async fn send_coach_chat(
        &self,
        request: &CoachChatRequest,
    ) -> Result<ChatReply, GatewayError> {
        let body = to_coach_request(request, false);
        self.send_request(self.coach_chat_url(), body).await
    }

    /// Ask the coach and stream the reply through `sink`.
    ///
    /// Precondition failures (bad session, quota, rate limit) return as
    /// `Err` before any callback fires; once the stream is open, exactly
    /// one of `on_done` / `on_error` follows the deltas.
    pub async fn stream_coach_chat<S>(
        &self,
        request: &CoachChatRequest,
        sink: &mut S,
    ) -> Result<(), GatewayError>
    where
        S: ChatStreamSink + ?Sized,
    {
        let body = to_coach_request(request, true);
        self.stream_request(self.coach_chat_url(), body, sink).await
    }

    /// Ask a question across transcripts and wait for the complete reply.
    ///
    /// Requires the admin role; the gateway answers 403 otherwise.
    pub async fn send_transcript_chat(
        &self,
        request: &TranscriptChatRequest,
    ) -> Result<ChatReply, GatewayError> {
        let body = to_transcript_request(request, false);
        self.send_request(self.transcript_chat_url(), body).await
    }

    /// Ask a question across transcripts and stream the reply through `sink`.
    pub async fn stream_transcript_chat<S>(
        &self,
        request: &TranscriptChatRequest,
        sink: &mut S,
    ) -> Result<(), GatewayError>
    where
        S: ChatStreamSink + ?Sized,
    {
        let body = to_transcript_request(request, true);
        self.stream_request(self.transcript_chat_url(), body, sink)
            .await
    }

    /// POST a chat request and parse the complete reply.
    async fn send_request(
        &self,
        url: String,
        body: serde_json::Value,
    ) -> Result<ChatReply, GatewayError> {
        tracing::debug!(url = %url, "sending chat request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.access_token)
            .json(&body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let response_text = response.text().await.map_err(map_reqwest_error)?;

        if !status.is_success() {
            return Err(map_http_status(status, &response_text));
        }

        let json: serde_json::Value = serde_json::from_str(&response_text)
            .map_err(|e| GatewayError::InvalidResponse(format!("invalid JSON response: {e}")))?;

        from_reply_response(&json)
    }

    /// POST a chat request and decode the SSE reply into `sink`.
    async fn stream_request<S>(
        &self,
        url: String,
        body: serde_json::Value,
        sink: &mut S,
    ) -> Result<(), GatewayError>
    where
        S: ChatStreamSink + ?Sized,
    {
        tracing::debug!(url = %url, "sending streaming chat request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.access_token)
            .json(&body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.map_err(map_reqwest_error)?;
            return Err(map_http_status(status, &body_text));
        }

        stream_chat_response(response, sink).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_base_url_is_set() {
        let client = CoachClient::new("test-token");
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn builder_overrides_base_url() {
        let client = CoachClient::new("test-token").base_url("http://localhost:9999");
        assert_eq!(client.base_url, "http://localhost:9999");
    }

    #[test]
    fn access_token_is_stored() {
        let client = CoachClient::new("session-abc");
        assert_eq!(client.access_token, "session-abc");
    }

    #[test]
    fn coach_chat_url_includes_path() {
        let client = CoachClient::new("t").base_url("http://localhost:9999");
        assert_eq!(client.coach_chat_url(), "http://localhost:9999/v1/coach/chat");
    }

    #[test]
    fn transcript_chat_url_includes_path() {
        let client = CoachClient::new("t").base_url("http://localhost:9999");
        assert_eq!(
            client.transcript_chat_url(),
            "http://localhost:9999/v1/transcripts/chat"
        );
    }
}
