use contracts::enums::Persona;
use leptos::prelude::*;

use crate::shared::icons::icon;

/// Buttons for the reader profile the analysis is tailored to
#[component]
pub fn PersonaSelector(selected: Signal<Persona>, on_change: Callback<Persona>) -> impl IntoView {
    view! {
        <div class="persona-selector">
            <label class="persona-selector__label">"Analyze as a..."</label>
            <div class="persona-selector__grid">
                {Persona::all()
                    .into_iter()
                    .map(|persona| {
                        view! {
                            <button
                                type="button"
                                class="persona-selector__option"
                                class:persona-selector__option--active=move || selected.get() == persona
                                on:click=move |_| on_change.run(persona)
                            >
                                {icon(persona.icon_name())}
                                <span>{persona.display_name()}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
