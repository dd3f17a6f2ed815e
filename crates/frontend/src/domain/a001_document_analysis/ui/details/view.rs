//! Document analysis - View Component

use contracts::domain::a001_document_analysis::aggregate::{AnalysisResult, ScoreBand};
use leptos::prelude::*;
use thaw::*;

use super::audio_player::AudioPlayer;
use super::clause_item::ClauseItem;
use super::progress::AnalysisProgress;
use super::view_model::AnalysisVm;
use crate::domain::a001_document_analysis::narration::narration_script;
use crate::shared::icons::icon;

#[component]
fn InitialState() -> impl IntoView {
    view! {
        <div class="analysis-initial">
            <div class="analysis-initial__badge">{icon("shield-check")}</div>
            <h2>"Your Analysis Appears Here"</h2>
            <p>
                "Once you upload a document, this panel shows the summary, "
                "the risk of every clause and a chat about the document."
            </p>
        </div>
    }
}

#[component]
fn AnalysisResultView(analysis: AnalysisResult) -> impl IntoView {
    let score = analysis.wellness_score();
    let band = ScoreBand::from_score(score);
    let critical = analysis.critical_count();
    let attention = analysis.attention_count();
    let narration = narration_script(&analysis);
    let AnalysisResult {
        summary,
        clauses,
        file_name,
        ..
    } = analysis;
    let clause_count = clauses.len();

    view! {
        <div class="analysis-result">
            <div class="analysis-result__summary">
                <div class="analysis-result__summary-header">
                    <h3>{icon("summary")}" AI Summary"</h3>
                    <AudioPlayer text=narration />
                </div>
                {(!file_name.is_empty())
                    .then(|| view! { <p class="analysis-result__file">{file_name.clone()}</p> })}
                <p>{summary}</p>
            </div>

            <div class="analysis-result__metrics">
                <div class=format!("score {}", band.css_modifier())>
                    <span class="score__value">{score}</span>
                    <span class="score__label">"Legal wellness"</span>
                </div>
                <div class="analysis-result__counts">
                    <span class="count count--critical">{format!("{} critical", critical)}</span>
                    <span class="count count--attention">{format!("{} need attention", attention)}</span>
                    <span class="count">{format!("{} clauses", clause_count)}</span>
                </div>
            </div>

            <div class="analysis-result__clauses">
                {clauses
                    .into_iter()
                    .map(|clause| view! { <ClauseItem clause=clause /> })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Right-hand panel of the dashboard: progress, error, placeholder or result
#[component]
pub fn AnalysisPanel(vm: AnalysisVm, on_new_analysis: Callback<()>) -> impl IntoView {
    let workflow = vm.workflow;
    // Re-render only when what is shown changes, not on every workflow update
    let shown = Memo::new(move |_| {
        workflow.with(|wf| (wf.is_loading, wf.error.clone(), wf.analysis.clone()))
    });

    view! {
        <div class="analysis-panel">
            {move || {
                let (is_loading, error, analysis) = shown.get();

                if is_loading {
                    view! { <AnalysisProgress /> }.into_any()
                } else if let Some(e) = error {
                    view! {
                        <div class="analysis-panel__error">
                            {icon("alert-triangle")}
                            <strong>"Error: "</strong>
                            {e}
                        </div>
                    }
                    .into_any()
                } else if let Some(analysis) = analysis {
                    view! { <AnalysisResultView analysis=analysis /> }.into_any()
                } else {
                    view! { <InitialState /> }.into_any()
                }
            }}

            <Show when=move || workflow.with(|wf| wf.analysis.is_some() || wf.error.is_some())>
                <div class="analysis-panel__footer">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_new_analysis.run(())
                    >
                        {icon("upload")}
                        " New analysis"
                    </Button>
                </div>
            </Show>
        </div>
    }
}
