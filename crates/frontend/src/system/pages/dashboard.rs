use chrono::Utc;
use contracts::domain::a001_document_analysis::aggregate::AnalysisResult;
use contracts::domain::a002_analysis_history::aggregate::{AnalysisHistoryItem, SaveAnalysisRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_document_analysis::ui::details::{AnalysisPanel, AnalysisVm};
use crate::domain::a001_document_analysis::ui::upload::UploadZone;
use crate::domain::a001_document_analysis::workflow::WorkflowView;
use crate::domain::a002_analysis_history::ui::list::model::{fetch_history, save_analysis};
use crate::domain::a002_analysis_history::ui::list::HistoryPanel;
use crate::domain::a003_document_chat::ui::details::{ChatPanel, ChatVm};
use crate::layout::Shell;
use crate::system::auth::context::{id_token, use_auth};

/// Main workspace: upload, analysis, chat and the saved-analyses sidebar
#[component]
pub fn DashboardPage() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let chat_vm = ChatVm::new();
    let analysis_vm = AnalysisVm::new(chat_vm.workflow);

    let history = RwSignal::new(Vec::<AnalysisHistoryItem>::new());
    let history_loading = RwSignal::new(true);
    let history_error = RwSignal::new(Option::<String>::None);

    let refresh_history = move || {
        spawn_local(async move {
            let result = match id_token().await {
                Ok(token) => fetch_history(&token).await,
                Err(e) => Err(e),
            };
            match result {
                Ok(items) => {
                    log::info!("Loaded {} saved analyses", items.len());
                    history.set(items);
                    history_error.set(None);
                }
                Err(e) => {
                    log::error!("Failed to load history: {}", e);
                    history_error.set(Some(e.to_string()));
                }
            }
            history_loading.set(false);
        });
    };

    Effect::new(move |_| refresh_history());

    let on_analysis_success = Callback::new(move |result: AnalysisResult| {
        if auth_state.get_untracked().user.is_none() {
            return;
        }
        let request = SaveAnalysisRequest::new(result, Utc::now());
        spawn_local(async move {
            let saved = match id_token().await {
                Ok(token) => save_analysis(&token, &request).await,
                Err(e) => Err(e),
            };
            match saved {
                Ok(()) => {
                    log::info!("Saved analysis of {}", request.file_name);
                    refresh_history();
                }
                Err(e) => log::warn!("Could not save analysis: {}", e),
            }
        });
    });

    let on_analyze = Callback::new(move |_: ()| analysis_vm.analyze(on_analysis_success));

    let on_new_analysis = Callback::new(move |_: ()| analysis_vm.start_new_analysis());

    let on_open_history =
        Callback::new(move |item: AnalysisHistoryItem| analysis_vm.open_history_item(&item));

    let view_mode = Memo::new(move |_| analysis_vm.workflow.with(|wf| wf.view));

    view! {
        <Shell>
            <div class="dashboard">
                <HistoryPanel
                    items=history
                    loading=history_loading
                    error=history_error
                    on_open=on_open_history
                />

                <section class="dashboard__main">
                    {move || match view_mode.get() {
                        WorkflowView::Upload => view! {
                            <UploadZone vm=analysis_vm on_analyze=on_analyze />
                        }
                        .into_any(),
                        WorkflowView::Analysis => view! {
                            <AnalysisPanel vm=analysis_vm on_new_analysis=on_new_analysis />
                        }
                        .into_any(),
                    }}
                </section>

                <Show when=move || chat_vm.workflow.with(|wf| wf.has_context())>
                    <ChatPanel vm=chat_vm />
                </Show>
            </div>
        </Shell>
    }
}
