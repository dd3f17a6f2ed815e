use contracts::domain::a001_document_analysis::aggregate::{Clause, RiskLevel};
use leptos::prelude::*;

use crate::shared::icons::icon;
use crate::shared::markup::parse_bold_segments;

fn risk_icon(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Neutral => "check-circle",
        RiskLevel::Attention => "alert-triangle",
        RiskLevel::Critical => "shield-alert",
    }
}

fn risk_modifier(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Neutral => "clause--neutral",
        RiskLevel::Attention => "clause--attention",
        RiskLevel::Critical => "clause--critical",
    }
}

#[component]
fn RagWarning(text: String) -> impl IntoView {
    view! {
        <div class="clause__warning">
            {icon("info")}
            <p>
                {parse_bold_segments(&text)
                    .into_iter()
                    .map(|segment| {
                        if segment.bold {
                            view! { <strong>{segment.text}</strong> }.into_any()
                        } else {
                            view! { <span>{segment.text}</span> }.into_any()
                        }
                    })
                    .collect_view()}
            </p>
        </div>
    }
}

/// Collapsible clause card, colour-coded by risk level
#[component]
pub fn ClauseItem(clause: Clause) -> impl IntoView {
    let (open, set_open) = signal(false);
    let level = clause.risk_level;

    view! {
        <div class=format!("clause {}", risk_modifier(level))>
            <button
                type="button"
                class="clause__header"
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                <span class="clause__level">
                    {icon(risk_icon(level))}
                    <span>{level.as_str()}</span>
                </span>
                <span class="clause__chevron" class:clause__chevron--open=move || open.get()>
                    {icon("chevron-down")}
                </span>
            </button>
            <Show when=move || open.get()>
                <div class="clause__body">
                    {clause.rag_warning.clone().map(|text| view! { <RagWarning text=text /> })}
                    <p class="clause__caption">"Plain Language Explanation:"</p>
                    <p class="clause__explanation">{clause.explanation.clone()}</p>
                    <p class="clause__caption clause__caption--muted">"Original Clause Text:"</p>
                    <blockquote class="clause__original">{clause.clause_text.clone()}</blockquote>
                </div>
            </Show>
        </div>
    }
}
