use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use thaw::Spinner;

const STEP_INTERVAL_MS: u32 = 5_500;

const STEPS: [&str; 5] = [
    "Parsing document structure...",
    "Identifying key clauses and provisions...",
    "Assessing risks clause by clause...",
    "Generating plain-language explanations...",
    "Finalizing your personalized report...",
];

/// Advances to the next message, staying on the last one
fn next_step(current: usize, len: usize) -> usize {
    if current + 1 < len {
        current + 1
    } else {
        current
    }
}

/// Spinner with rotating status messages while the service works
#[component]
pub fn AnalysisProgress() -> impl IntoView {
    let (step, set_step) = signal(0usize);
    let alive = Arc::new(AtomicBool::new(true));

    {
        let alive = alive.clone();
        spawn_local(async move {
            loop {
                TimeoutFuture::new(STEP_INTERVAL_MS).await;
                if !alive.load(Ordering::Relaxed) {
                    break;
                }
                let current = step.get_untracked();
                let next = next_step(current, STEPS.len());
                if next == current {
                    break;
                }
                set_step.set(next);
            }
        });
    }

    on_cleanup(move || alive.store(false, Ordering::Relaxed));

    view! {
        <div class="analysis-progress">
            <div class="analysis-progress__spinner">
                <Spinner />
            </div>
            <h2 class="analysis-progress__title">"Reviewing your document"</h2>
            <p class="analysis-progress__step">{move || STEPS[step.get()]}</p>
        </div>
    }
}
