use leptos::prelude::*;

use crate::shared::icons::icon;
use crate::shared::speech;

/// Read-aloud toggle for the analysis narration
#[component]
pub fn AudioPlayer(#[prop(into)] text: Signal<String>) -> impl IntoView {
    let (can_speak, set_can_speak) = signal(speech::voices_available());
    let (is_speaking, set_is_speaking) = signal(false);

    if !can_speak.get_untracked() {
        speech::on_voices_changed(move || {
            if speech::voices_available() {
                set_can_speak.set(true);
            }
        });
    }

    on_cleanup(move || {
        speech::clear_voices_listener();
        speech::cancel();
    });

    let toggle = move |_| {
        if is_speaking.get_untracked() {
            speech::cancel();
            set_is_speaking.set(false);
            return;
        }
        if !can_speak.get_untracked() {
            return;
        }

        let on_finished = move || set_is_speaking.set(false);
        match speech::speak(&text.get_untracked(), on_finished) {
            Ok(()) => set_is_speaking.set(true),
            Err(e) => log::error!("Could not start speech: {:?}", e),
        }
    };

    view! {
        <button
            type="button"
            class="audio-player"
            disabled=move || !can_speak.get()
            title=move || {
                if can_speak.get() { "Read analysis aloud" } else { "Text-to-speech not available" }
            }
            on:click=toggle
        >
            {move || {
                if is_speaking.get() {
                    view! {
                        {icon("stop")}
                        <span>"Stop Reading"</span>
                    }
                    .into_any()
                } else {
                    view! {
                        {icon("speaker")}
                        <span>"Read Aloud"</span>
                    }
                    .into_any()
                }
            }}
        </button>
    }
}
