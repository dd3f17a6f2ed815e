use contracts::domain::a001_document_analysis::aggregate::ScoreBand;
use contracts::domain::a002_analysis_history::aggregate::AnalysisHistoryItem;
use leptos::prelude::*;

use crate::shared::date_utils::format_timestamp;
use crate::shared::icons::icon;

#[component]
fn HistoryEntry(item: AnalysisHistoryItem, on_open: Callback<AnalysisHistoryItem>) -> impl IntoView {
    let analysis = &item.analysis_data;
    let score = analysis.wellness_score();
    let critical = analysis.critical_count();
    let attention = analysis.attention_count();
    let band = ScoreBand::from_score(score);
    let file_name = item.file_name.clone();
    let when = format_timestamp(&item.timestamp);

    view! {
        <button type="button" class="history-entry" on:click=move |_| on_open.run(item.clone())>
            <div class="history-entry__top">
                <span class="history-entry__name" title=file_name.clone()>{file_name.clone()}</span>
                <span class=format!("history-entry__score {}", band.css_modifier())>{score}</span>
            </div>
            <div class="history-entry__bottom">
                <div class="history-entry__counts">
                    {(critical > 0)
                        .then(|| {
                            view! {
                                <span
                                    class="history-entry__count history-entry__count--critical"
                                    title=format!("{} Critical Clauses", critical)
                                >
                                    {icon("shield-alert")}
                                    {critical}
                                </span>
                            }
                        })}
                    {(attention > 0)
                        .then(|| {
                            view! {
                                <span
                                    class="history-entry__count history-entry__count--attention"
                                    title=format!("{} Clauses Need Attention", attention)
                                >
                                    {icon("alert-triangle")}
                                    {attention}
                                </span>
                            }
                        })}
                </div>
                <span class="history-entry__date">{when}</span>
            </div>
        </button>
    }
}

/// Sidebar listing the user's saved analyses
#[component]
pub fn HistoryPanel(
    #[prop(into)] items: Signal<Vec<AnalysisHistoryItem>>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] error: Signal<Option<String>>,
    on_open: Callback<AnalysisHistoryItem>,
) -> impl IntoView {
    view! {
        <aside class="history-panel">
            <h3 class="history-panel__title">"My Analyses"</h3>
            {move || {
                if loading.get() {
                    return view! { <p class="history-panel__loading">"Loading..."</p> }.into_any();
                }
                if let Some(e) = error.get() {
                    return view! { <p class="history-panel__error">{e}</p> }.into_any();
                }

                let items = items.get();
                if items.is_empty() {
                    view! {
                        <div class="history-panel__empty">
                            {icon("document")}
                            <p class="history-panel__empty-title">"No saved analyses."</p>
                            <p class="history-panel__empty-hint">
                                "Your analyzed documents will appear here for future reference."
                            </p>
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="history-panel__list">
                            {items
                                .into_iter()
                                .map(|item| view! { <HistoryEntry item=item on_open=on_open /> })
                                .collect_view()}
                        </div>
                    }
                    .into_any()
                }
            }}
        </aside>
    }
}
