use contracts::enums::AnalysisLanguage;
use leptos::prelude::*;
use thaw::*;

/// Dropdown for the language the report is written in
#[component]
pub fn LanguageSelector(
    selected: Signal<AnalysisLanguage>,
    on_change: Callback<AnalysisLanguage>,
) -> impl IntoView {
    // Select works on strings; bridge it to the typed value
    let select_value = RwSignal::new(selected.get_untracked().display_name().to_string());

    Effect::new(move |_| {
        let current = selected.get().display_name().to_string();
        if select_value.get_untracked() != current {
            select_value.set(current);
        }
    });

    Effect::new(move |_| {
        let language = AnalysisLanguage::from_display_name(&select_value.get());
        if language != selected.get_untracked() {
            on_change.run(language);
        }
    });

    view! {
        <div class="language-selector">
            <label class="language-selector__label">"Analysis Language"</label>
            <Select value=select_value>
                {AnalysisLanguage::all()
                    .into_iter()
                    .map(|lang| {
                        view! { <option value=lang.display_name()>{lang.display_name()}</option> }
                    })
                    .collect_view()}
            </Select>
        </div>
    }
}
