use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Content of the placeholder shown while a reply is in flight
pub const LOADING_PLACEHOLDER: &str = "...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
    Loading,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ChatRole::User, content)
    }

    pub fn model(content: impl Into<String>) -> Self {
        Self::new(ChatRole::Model, content)
    }

    pub fn is_loading(&self) -> bool {
        self.role == ChatRole::Loading
    }
}

/// Body of `POST /api/chat`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub document_context: String,
    pub message: String,
}

/// Successful response of `POST /api/chat`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
}

/// Handle for a reply that has not arrived yet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PendingReply(Uuid);

impl PendingReply {
    pub fn id(&self) -> Uuid {
        self.0
    }
}

/// Ordered chat history of one analysed document.
///
/// Entries are only appended. The single in-place mutation is turning a
/// loading placeholder into the model's reply, and that placeholder is
/// located by its id, so overlapping sends cannot overwrite each other.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Appends the user's message and a loading placeholder
    pub fn begin_exchange(&mut self, text: impl Into<String>) -> PendingReply {
        let placeholder = ChatMessage::new(ChatRole::Loading, LOADING_PLACEHOLDER);
        let pending = PendingReply(placeholder.id);
        self.messages.push(ChatMessage::user(text));
        self.messages.push(placeholder);
        pending
    }

    /// Replaces the placeholder of `pending` with the reply or an inline error.
    ///
    /// Returns `false` when the placeholder is gone (already resolved or cleared).
    pub fn resolve(&mut self, pending: PendingReply, outcome: Result<String, String>) -> bool {
        let Some(slot) = self
            .messages
            .iter_mut()
            .find(|m| m.id == pending.0 && m.is_loading())
        else {
            return false;
        };
        slot.role = ChatRole::Model;
        slot.content = match outcome {
            Ok(reply) => reply,
            Err(message) => format!("Sorry, I encountered an error: {}", message),
        };
        true
    }

    pub fn is_awaiting_reply(&self) -> bool {
        self.messages.iter().any(ChatMessage::is_loading)
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_appends_exactly_two() {
        let mut t = Transcript::new();
        let pending = t.begin_exchange("What if I pay late?");
        assert_eq!(t.len(), 2);
        assert_eq!(t.messages()[0].role, ChatRole::User);
        assert_eq!(t.messages()[1].role, ChatRole::Loading);
        assert_eq!(t.messages()[1].content, LOADING_PLACEHOLDER);
        assert_eq!(t.messages()[1].id, pending.id());
        assert!(t.is_awaiting_reply());
    }

    #[test]
    fn test_resolve_replaces_placeholder_in_place() {
        let mut t = Transcript::new();
        let pending = t.begin_exchange("Is there a penalty?");
        assert!(t.resolve(pending, Ok("Yes, 5% per month.".into())));
        assert_eq!(t.len(), 2);
        assert_eq!(t.messages()[1].role, ChatRole::Model);
        assert_eq!(t.messages()[1].content, "Yes, 5% per month.");
        assert!(!t.is_awaiting_reply());
    }

    #[test]
    fn test_resolve_error_becomes_inline_message() {
        let mut t = Transcript::new();
        let pending = t.begin_exchange("Hello");
        t.resolve(pending, Err("Chat API failed.".into()));
        assert_eq!(
            t.messages()[1].content,
            "Sorry, I encountered an error: Chat API failed."
        );
        assert_eq!(t.messages()[1].role, ChatRole::Model);
    }

    #[test]
    fn test_overlapping_sends_resolve_into_their_own_slots() {
        let mut t = Transcript::new();
        let first = t.begin_exchange("first");
        let second = t.begin_exchange("second");
        assert_eq!(t.len(), 4);

        // Second reply lands before the first one.
        t.resolve(second, Ok("answer two".into()));
        t.resolve(first, Ok("answer one".into()));

        let contents: Vec<_> = t.messages().iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["first", "answer one", "second", "answer two"]);
    }

    #[test]
    fn test_resolve_twice_is_noop() {
        let mut t = Transcript::new();
        let pending = t.begin_exchange("q");
        assert!(t.resolve(pending, Ok("a".into())));
        assert!(!t.resolve(pending, Ok("b".into())));
        assert_eq!(t.messages()[1].content, "a");
    }

    #[test]
    fn test_resolve_after_clear_is_noop() {
        let mut t = Transcript::new();
        let pending = t.begin_exchange("q");
        t.clear();
        assert!(!t.resolve(pending, Ok("late".into())));
        assert!(t.is_empty());
    }

    #[test]
    fn test_role_wire_format() {
        let msg = ChatMessage::model("hi");
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["role"], "model");

        let parsed: ChatMessage =
            serde_json::from_str(r#"{"role":"user","content":"hey"}"#).unwrap();
        assert_eq!(parsed.role, ChatRole::User);
    }
}
