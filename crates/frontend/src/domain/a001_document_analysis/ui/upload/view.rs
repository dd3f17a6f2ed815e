use contracts::enums::{AnalysisLanguage, Persona};
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

use super::{LanguageSelector, PersonaSelector};
use crate::domain::a001_document_analysis::ui::details::AnalysisVm;
use crate::shared::icons::icon;

fn format_size(bytes: u64) -> String {
    if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

/// File picker plus analysis options; `on_analyze` fires when the user asks
/// for an analysis.
#[component]
pub fn UploadZone(vm: AnalysisVm, on_analyze: Callback<()>) -> impl IntoView {
    let workflow = vm.workflow;

    let handle_file_select = move |ev: web_sys::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());

        if let Some(input) = input {
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                vm.select_file(Some(file));
            }
            // Allow picking the same file again after removing it
            input.set_value("");
        }
    };

    let remove_file = move |_| vm.select_file(None);

    let persona = Signal::derive(move || workflow.with(|wf| wf.persona));
    let language = Signal::derive(move || workflow.with(|wf| wf.language));
    let is_loading = Signal::derive(move || workflow.with(|wf| wf.is_loading));
    let selected = vm.selected_document();
    let error = Memo::new(move |_| workflow.with(|wf| wf.error.clone()));

    view! {
        <div class="upload-zone">
            {move || match selected.get() {
                None => view! {
                    <div class="upload-zone__empty">
                        <h3 class="upload-zone__title">"Upload Your Document"</h3>
                        <p class="upload-zone__hint">"Click to select a file."</p>
                        <label class="upload-zone__drop" for="document-file-input">
                            {icon("upload")}
                            <span class="upload-zone__cta">"Click to upload"</span>
                            <span class="upload-zone__formats">"PDF, DOCX, PNG, or JPG"</span>
                        </label>
                        <input
                            id="document-file-input"
                            type="file"
                            accept=".pdf,.docx,.png,.jpg,.jpeg"
                            class="hidden"
                            on:change=handle_file_select
                        />
                    </div>
                }
                .into_any(),
                Some(document) => view! {
                    <div class="upload-zone__selected">
                        <div class="upload-zone__file">
                            {icon("document")}
                            <span class="upload-zone__file-name">{document.name.clone()}</span>
                            <span class="upload-zone__file-size">{format_size(document.size)}</span>
                            <button
                                type="button"
                                class="upload-zone__remove"
                                title="Remove file"
                                on:click=remove_file
                            >
                                {icon("x-circle")}
                            </button>
                        </div>

                        <PersonaSelector
                            selected=persona
                            on_change=Callback::new(move |p: Persona| {
                                workflow.update(|wf| wf.persona = p)
                            })
                        />
                        <LanguageSelector
                            selected=language
                            on_change=Callback::new(move |l: AnalysisLanguage| {
                                workflow.update(|wf| wf.language = l)
                            })
                        />

                        <Button
                            appearance=ButtonAppearance::Primary
                            class="upload-zone__analyze"
                            disabled=is_loading
                            on_click=move |_| on_analyze.run(())
                        >
                            {move || {
                                if is_loading.get() {
                                    view! {
                                        <Spinner size=SpinnerSize::Tiny />
                                        " Analyzing..."
                                    }
                                    .into_any()
                                } else {
                                    view! {
                                        {icon("sparkles")}
                                        " Analyze Now"
                                    }
                                    .into_any()
                                }
                            }}
                        </Button>
                    </div>
                }
                .into_any(),
            }}

            {move || error.get().map(|e| view! { <p class="upload-zone__error">{e}</p> })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "0.5 KB");
        assert_eq!(format_size(48_213), "47.1 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.0 MB");
    }
}
