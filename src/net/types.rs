//! Wire DTOs for the chat/theme backend.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's camelCase JSON exactly so payloads stay
//! lossless without per-call rename maps.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Payload for `POST {api_base}/conversations/create-conversation`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateConversationRequest {
    pub client_key: String,
    pub user_name: String,
    pub user_email: String,
    pub user_mobile: String,
    pub session_id: String,
    /// First message of the conversation (the topic the visitor chose).
    pub message: String,
    pub is_bot: bool,
}

/// Payload for `POST {api_base}/chat/chatResponse`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub client_key: String,
    pub message: String,
    pub user_email: String,
    pub session_id: String,
}

/// Bot reply body returned by the chat endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}
