//! Chat state for the analysed document

use contracts::domain::a001_document_analysis::aggregate::AnalysisResult;
use contracts::domain::a003_document_chat::aggregate::{ChatRequest, PendingReply, Transcript};

use crate::shared::api_utils::ApiError;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatWorkflow {
    pub transcript: Transcript,
    /// Full text of the analysed document, fixed when the analysis arrives
    document_context: Option<String>,
}

impl ChatWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a fresh conversation about the analysed document
    pub fn attach_document(&mut self, analysis: &AnalysisResult) {
        self.transcript.clear();
        self.document_context = analysis
            .has_chat_context()
            .then(|| analysis.full_text.clone());
    }

    pub fn reset(&mut self) {
        self.transcript.clear();
        self.document_context = None;
    }

    pub fn has_context(&self) -> bool {
        self.document_context.is_some()
    }

    /// Records the user's message as typed and returns the request to send.
    ///
    /// Blank input, or no document to talk about, leaves the transcript untouched.
    pub fn begin_send(&mut self, text: &str) -> Option<(PendingReply, ChatRequest)> {
        if text.trim().is_empty() {
            return None;
        }
        let context = self.document_context.clone()?;

        let pending = self.transcript.begin_exchange(text);
        Some((
            pending,
            ChatRequest {
                document_context: context,
                message: text.to_string(),
            },
        ))
    }

    pub fn finish(&mut self, pending: PendingReply, outcome: Result<String, ApiError>) -> bool {
        self.transcript
            .resolve(pending, outcome.map_err(|e| e.to_string()))
    }
}
