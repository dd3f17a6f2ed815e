//! Document analysis - View Model

use contracts::domain::a001_document_analysis::aggregate::AnalysisResult;
use contracts::domain::a002_analysis_history::aggregate::AnalysisHistoryItem;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::model::analyze_document;
use crate::domain::a001_document_analysis::document_chat;
use crate::domain::a001_document_analysis::workflow::{AnalysisWorkflow, SelectedDocument};
use crate::domain::a003_document_chat::workflow::ChatWorkflow;

#[derive(Clone, Copy)]
pub struct AnalysisVm {
    pub workflow: RwSignal<AnalysisWorkflow>,
    /// Conversation about the current document, owned by the chat panel
    chat: RwSignal<ChatWorkflow>,
    /// Browser file handle; not `Send`, so it lives in local storage
    file: StoredValue<Option<web_sys::File>, LocalStorage>,
}

impl AnalysisVm {
    pub fn new(chat: RwSignal<ChatWorkflow>) -> Self {
        Self {
            workflow: RwSignal::new(AnalysisWorkflow::new()),
            chat,
            file: StoredValue::new_local(None),
        }
    }

    fn update_with_chat<R>(
        &self,
        f: impl FnOnce(&mut AnalysisWorkflow, &mut ChatWorkflow) -> R,
    ) -> Option<R> {
        let chat = self.chat;
        self.workflow
            .try_update(|wf| chat.try_update(|c| f(wf, c)))
            .flatten()
    }

    pub fn select_file(&self, file: Option<web_sys::File>) {
        let document = file.as_ref().map(|f| SelectedDocument {
            name: f.name(),
            size: f.size() as u64,
        });
        self.file.set_value(file);
        self.update_with_chat(|wf, chat| document_chat::select_file(wf, chat, document));
    }

    pub fn start_new_analysis(&self) {
        self.file.set_value(None);
        self.update_with_chat(document_chat::start_new_analysis);
    }

    pub fn open_history_item(&self, item: &AnalysisHistoryItem) {
        self.file.set_value(None);
        self.update_with_chat(|wf, chat| document_chat::open_history_item(wf, chat, item));
    }

    /// Picked file, changing only when the selection does
    pub fn selected_document(&self) -> Memo<Option<SelectedDocument>> {
        let workflow = self.workflow;
        Memo::new(move |_| workflow.with(|wf| wf.selected.clone()))
    }

    /// Submits the selected file. `on_success` receives each accepted result.
    pub fn analyze(&self, on_success: Callback<AnalysisResult>) {
        let Some(file) = self.file.get_value() else {
            // No handle means nothing to upload, whatever the workflow shows
            self.update_with_chat(|wf, chat| {
                document_chat::select_file(wf, chat, None);
                if let Err(e) = wf.begin_analysis() {
                    log::warn!("Analyze rejected: {}", e);
                }
            });
            return;
        };
        let ticket = match self.workflow.try_update(|wf| wf.begin_analysis()) {
            Some(Ok(ticket)) => ticket,
            Some(Err(e)) => {
                log::warn!("Analyze rejected: {}", e);
                return;
            }
            None => return,
        };

        let (persona, language) = self
            .workflow
            .with_untracked(|wf| (wf.persona, wf.language));

        let vm = *self;
        spawn_local(async move {
            let outcome = analyze_document(&file, persona, language).await;
            match &outcome {
                Ok(result) => log::info!("Analysis returned {} clauses", result.clauses.len()),
                Err(e) => log::error!("Analysis failed: {}", e),
            }

            let accepted = vm
                .update_with_chat(|wf, chat| document_chat::complete(wf, chat, ticket, outcome))
                .flatten();
            if let Some(result) = accepted {
                on_success.run(result);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_document_analysis::workflow::NO_FILE_MESSAGE;
    use contracts::enums::Persona;
    use leptos::reactive::owner::Owner;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_analyze_without_file_handle_does_not_spin() {
        let owner = Owner::new();
        owner.set();

        let vm = AnalysisVm::new(RwSignal::new(ChatWorkflow::new()));
        vm.workflow.update(|wf| {
            wf.select_file(Some(SelectedDocument {
                name: "lease.pdf".into(),
                size: 48_213,
            }))
        });

        vm.analyze(Callback::new(|_: AnalysisResult| {}));

        vm.workflow.with_untracked(|wf| {
            assert!(!wf.is_loading);
            assert!(wf.selected.is_none());
            assert_eq!(wf.error.as_deref(), Some(NO_FILE_MESSAGE));
        });
    }

    #[test]
    fn test_selection_ignores_option_changes() {
        let owner = Owner::new();
        owner.set();

        let vm = AnalysisVm::new(RwSignal::new(ChatWorkflow::new()));
        let selected = vm.selected_document();
        let renders = Arc::new(AtomicUsize::new(0));
        let counter = renders.clone();
        let picker = Memo::new(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            selected.get().map(|doc| doc.name)
        });

        assert_eq!(picker.get_untracked(), None);
        vm.workflow.update(|wf| wf.persona = Persona::Student);
        vm.workflow.update(|wf| wf.is_loading = true);
        assert_eq!(picker.get_untracked(), None);
        assert_eq!(renders.load(Ordering::SeqCst), 1);

        vm.workflow.update(|wf| {
            wf.select_file(Some(SelectedDocument {
                name: "lease.pdf".into(),
                size: 48_213,
            }))
        });
        assert_eq!(picker.get_untracked().as_deref(), Some("lease.pdf"));
        assert_eq!(renders.load(Ordering::SeqCst), 2);
    }
}
