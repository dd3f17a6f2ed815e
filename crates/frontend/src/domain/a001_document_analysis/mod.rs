pub mod document_chat;
pub mod narration;
pub mod ui;
pub mod workflow;
