//! Analysis steps that also decide what the document chat talks about.
//!
//! The chat always follows the document on screen: a new or removed file
//! empties it, an accepted analysis or an opened history item seeds it.

use contracts::domain::a001_document_analysis::aggregate::AnalysisResult;
use contracts::domain::a002_analysis_history::aggregate::AnalysisHistoryItem;

use super::workflow::{AnalysisTicket, AnalysisWorkflow, SelectedDocument};
use crate::domain::a003_document_chat::workflow::ChatWorkflow;
use crate::shared::api_utils::ApiError;

pub fn select_file(
    analysis: &mut AnalysisWorkflow,
    chat: &mut ChatWorkflow,
    document: Option<SelectedDocument>,
) {
    analysis.select_file(document);
    chat.reset();
}

pub fn start_new_analysis(analysis: &mut AnalysisWorkflow, chat: &mut ChatWorkflow) {
    analysis.start_new_analysis();
    chat.reset();
}

pub fn open_history_item(
    analysis: &mut AnalysisWorkflow,
    chat: &mut ChatWorkflow,
    item: &AnalysisHistoryItem,
) {
    analysis.open_history_item(item);
    chat.attach_document(&item.analysis_data);
}

/// Applies a finished request; an accepted result becomes the chat's document.
pub fn complete(
    analysis: &mut AnalysisWorkflow,
    chat: &mut ChatWorkflow,
    ticket: AnalysisTicket,
    outcome: Result<AnalysisResult, ApiError>,
) -> Option<AnalysisResult> {
    let accepted = analysis.complete(ticket, outcome).cloned()?;
    chat.attach_document(&accepted);
    Some(accepted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lease() -> SelectedDocument {
        SelectedDocument {
            name: "lease.pdf".into(),
            size: 48_213,
        }
    }

    fn result() -> AnalysisResult {
        AnalysisResult {
            summary: "Twelve month lease.".into(),
            clauses: Vec::new(),
            full_text: "The tenant pays a late fee of $50.".into(),
            file_name: "lease.pdf".into(),
        }
    }

    /// An analysed lease with one answered question in the chat
    fn chatted() -> (AnalysisWorkflow, ChatWorkflow) {
        let mut analysis = AnalysisWorkflow::new();
        let mut chat = ChatWorkflow::new();
        select_file(&mut analysis, &mut chat, Some(lease()));
        let ticket = analysis.begin_analysis().unwrap();
        assert!(complete(&mut analysis, &mut chat, ticket, Ok(result())).is_some());

        let (pending, _) = chat.begin_send("What if I pay late?").unwrap();
        assert!(chat.finish(pending, Ok("You pay $50.".into())));
        assert_eq!(chat.transcript.messages().len(), 2);
        (analysis, chat)
    }

    #[test]
    fn test_accepted_analysis_opens_chat() {
        let (_, chat) = chatted();
        assert!(chat.has_context());
    }

    #[test]
    fn test_selecting_new_file_clears_chat() {
        let (mut analysis, mut chat) = chatted();
        select_file(
            &mut analysis,
            &mut chat,
            Some(SelectedDocument {
                name: "nda.docx".into(),
                size: 1,
            }),
        );
        assert!(analysis.analysis.is_none());
        assert!(chat.transcript.is_empty());
        assert!(!chat.has_context());
    }

    #[test]
    fn test_removing_file_clears_chat() {
        let (mut analysis, mut chat) = chatted();
        select_file(&mut analysis, &mut chat, None);
        assert!(analysis.selected.is_none());
        assert!(chat.transcript.is_empty());
        assert!(!chat.has_context());
    }

    #[test]
    fn test_failed_analysis_leaves_chat_closed() {
        let mut analysis = AnalysisWorkflow::new();
        let mut chat = ChatWorkflow::new();
        select_file(&mut analysis, &mut chat, Some(lease()));
        let ticket = analysis.begin_analysis().unwrap();
        let outcome = Err(ApiError::Network("offline".into()));
        assert!(complete(&mut analysis, &mut chat, ticket, outcome).is_none());
        assert!(!chat.has_context());
    }

    #[test]
    fn test_start_new_analysis_clears_chat() {
        let (mut analysis, mut chat) = chatted();
        start_new_analysis(&mut analysis, &mut chat);
        assert!(chat.transcript.is_empty());
        assert!(!chat.has_context());
    }

    #[test]
    fn test_history_item_starts_fresh_chat() {
        let (mut analysis, mut chat) = chatted();
        let item = AnalysisHistoryItem {
            file_name: "old-lease.pdf".into(),
            timestamp: "2024-01-01T00:00:00Z".into(),
            analysis_data: result(),
        };
        open_history_item(&mut analysis, &mut chat, &item);
        assert!(chat.transcript.is_empty());
        assert!(chat.has_context());
    }
}
