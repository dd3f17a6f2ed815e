pub mod a001_document_analysis;
pub mod a002_analysis_history;
pub mod a003_document_chat;
