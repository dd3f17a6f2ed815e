//! Analysis workflow state, independent of signals and the DOM.
//!
//! The dashboard keeps one [`AnalysisWorkflow`] in a signal and drives it
//! from UI events and request completions.

use contracts::domain::a001_document_analysis::aggregate::AnalysisResult;
use contracts::domain::a002_analysis_history::aggregate::AnalysisHistoryItem;
use contracts::enums::{AnalysisLanguage, Persona};

use crate::shared::api_utils::ApiError;

pub const NO_FILE_MESSAGE: &str = "Please select a file first.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorkflowView {
    #[default]
    Upload,
    Analysis,
}

/// What the workflow needs to know about the picked file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedDocument {
    pub name: String,
    pub size: u64,
}

/// Identifies one analysis request; completions with an outdated ticket are dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisTicket(u64);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisWorkflow {
    pub view: WorkflowView,
    pub selected: Option<SelectedDocument>,
    pub analysis: Option<AnalysisResult>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub persona: Persona,
    pub language: AnalysisLanguage,
    generation: u64,
}

impl AnalysisWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Picking or removing a file discards the previous result.
    /// See [`super::document_chat::select_file`] for the chat side.
    pub fn select_file(&mut self, document: Option<SelectedDocument>) {
        self.selected = document;
        self.analysis = None;
        self.error = None;
    }

    pub fn begin_analysis(&mut self) -> Result<AnalysisTicket, ApiError> {
        if self.selected.is_none() {
            self.error = Some(NO_FILE_MESSAGE.to_string());
            return Err(ApiError::Validation(NO_FILE_MESSAGE.to_string()));
        }

        self.generation += 1;
        self.is_loading = true;
        self.error = None;
        self.analysis = None;
        self.view = WorkflowView::Analysis;
        Ok(AnalysisTicket(self.generation))
    }

    pub fn is_current(&self, ticket: AnalysisTicket) -> bool {
        ticket.0 == self.generation
    }

    /// Applies the outcome of `ticket`'s request.
    ///
    /// Returns the stored result when a fresh analysis was accepted.
    pub fn complete(
        &mut self,
        ticket: AnalysisTicket,
        outcome: Result<AnalysisResult, ApiError>,
    ) -> Option<&AnalysisResult> {
        if !self.is_current(ticket) {
            log::debug!("Dropping stale analysis response {:?}", ticket);
            return None;
        }

        self.is_loading = false;
        match outcome {
            Ok(mut result) => {
                if let Some(doc) = &self.selected {
                    result.file_name = doc.name.clone();
                }
                self.error = None;
                self.analysis = Some(result);
                self.analysis.as_ref()
            }
            Err(err) => {
                self.analysis = None;
                self.error = Some(err.to_string());
                None
            }
        }
    }

    pub fn start_new_analysis(&mut self) {
        self.generation += 1;
        self.view = WorkflowView::Upload;
        self.is_loading = false;
        self.analysis = None;
        self.selected = None;
        self.error = None;
    }

    /// Shows a previously saved analysis without re-uploading it
    pub fn open_history_item(&mut self, item: &AnalysisHistoryItem) {
        let mut analysis = item.analysis_data.clone();
        if analysis.file_name.is_empty() {
            analysis.file_name = item.file_name.clone();
        }

        self.generation += 1;
        self.view = WorkflowView::Analysis;
        self.is_loading = false;
        self.selected = None;
        self.error = None;
        self.analysis = Some(analysis);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_document_analysis::aggregate::{Clause, RiskLevel};

    fn lease() -> SelectedDocument {
        SelectedDocument {
            name: "lease.pdf".into(),
            size: 48_213,
        }
    }

    fn result() -> AnalysisResult {
        AnalysisResult {
            summary: "Twelve month lease.".into(),
            clauses: vec![Clause {
                clause_text: "Deposit is non-refundable.".into(),
                risk_level: RiskLevel::Critical,
                explanation: "You will not get the deposit back.".into(),
                rag_warning: None,
            }],
            full_text: "Deposit is non-refundable.".into(),
            file_name: "server-side-name.pdf".into(),
        }
    }

    #[test]
    fn test_analyze_without_file_is_validation_error() {
        let mut wf = AnalysisWorkflow::new();
        let err = wf.begin_analysis().unwrap_err();
        assert_eq!(err, ApiError::Validation(NO_FILE_MESSAGE.into()));
        assert_eq!(wf.error.as_deref(), Some(NO_FILE_MESSAGE));
        assert!(!wf.is_loading);
        assert_eq!(wf.view, WorkflowView::Upload);
    }

    #[test]
    fn test_successful_analysis_sets_file_name() {
        let mut wf = AnalysisWorkflow::new();
        wf.select_file(Some(lease()));
        let ticket = wf.begin_analysis().unwrap();
        assert!(wf.is_loading);
        assert_eq!(wf.view, WorkflowView::Analysis);

        let stored = wf.complete(ticket, Ok(result())).cloned();
        assert_eq!(stored.unwrap().file_name, "lease.pdf");
        assert!(!wf.is_loading);
        assert!(wf.error.is_none());
    }

    #[test]
    fn test_error_leaves_analysis_empty() {
        let mut wf = AnalysisWorkflow::new();
        wf.select_file(Some(lease()));
        let ticket = wf.begin_analysis().unwrap();
        let stored = wf.complete(
            ticket,
            Err(ApiError::Http {
                status: 422,
                detail: "Could not read document".into(),
            }),
        );
        assert!(stored.is_none());
        assert!(wf.analysis.is_none());
        assert_eq!(wf.error.as_deref(), Some("Could not read document"));
        assert!(!wf.is_loading);
    }

    #[test]
    fn test_selecting_file_clears_previous_state() {
        let mut wf = AnalysisWorkflow::new();
        wf.select_file(Some(lease()));
        let ticket = wf.begin_analysis().unwrap();
        wf.complete(ticket, Ok(result()));
        wf.error = Some("old error".into());

        wf.select_file(Some(SelectedDocument {
            name: "nda.docx".into(),
            size: 1,
        }));
        assert!(wf.analysis.is_none());
        assert!(wf.error.is_none());

        wf.select_file(None);
        assert!(wf.selected.is_none());
    }

    #[test]
    fn test_second_submit_supersedes_first() {
        let mut wf = AnalysisWorkflow::new();
        wf.select_file(Some(lease()));
        let first = wf.begin_analysis().unwrap();
        let second = wf.begin_analysis().unwrap();

        assert!(wf.complete(first, Ok(result())).is_none());
        assert!(wf.is_loading, "stale completion must not end loading");

        assert!(wf.complete(second, Ok(result())).is_some());
        assert!(!wf.is_loading);
    }

    #[test]
    fn test_start_new_drops_in_flight_response() {
        let mut wf = AnalysisWorkflow::new();
        wf.select_file(Some(lease()));
        let ticket = wf.begin_analysis().unwrap();
        wf.start_new_analysis();

        assert_eq!(wf.view, WorkflowView::Upload);
        assert!(wf.selected.is_none());
        assert!(wf.complete(ticket, Ok(result())).is_none());
        assert!(wf.analysis.is_none());
    }

    #[test]
    fn test_open_history_item() {
        let mut wf = AnalysisWorkflow::new();
        let mut data = result();
        data.file_name.clear();
        let item = AnalysisHistoryItem {
            file_name: "old-lease.pdf".into(),
            timestamp: "2024-01-01T00:00:00Z".into(),
            analysis_data: data,
        };
        wf.open_history_item(&item);
        assert_eq!(wf.view, WorkflowView::Analysis);
        assert_eq!(wf.analysis.as_ref().unwrap().file_name, "old-lease.pdf");
    }

    #[test]
    fn test_defaults() {
        let wf = AnalysisWorkflow::new();
        assert_eq!(wf.persona, Persona::GeneralUser);
        assert_eq!(wf.language, AnalysisLanguage::English);
        assert_eq!(wf.view, WorkflowView::Upload);
    }
}
