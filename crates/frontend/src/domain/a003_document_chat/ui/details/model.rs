//! Document chat - Model (API functions)

use contracts::domain::a003_document_chat::aggregate::{ChatReply, ChatRequest};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, read_json, ApiError};

pub const CHAT_FALLBACK: &str = "Chat API failed.";

/// Ask a question about the analysed document
pub async fn send_chat(request: &ChatRequest) -> Result<String, ApiError> {
    let response = Request::post(&api_url("/api/chat"))
        .json(request)?
        .send()
        .await?;

    let reply: ChatReply = read_json(response, CHAT_FALLBACK).await?;
    Ok(reply.reply)
}
