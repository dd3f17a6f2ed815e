//! Document analysis - Model (API functions)

use contracts::domain::a001_document_analysis::aggregate::AnalysisResult;
use contracts::enums::{AnalysisLanguage, Persona};
use gloo_net::http::Request;
use wasm_bindgen::JsValue;
use web_sys::FormData;

use crate::shared::api_utils::{api_url, read_json, ApiError};

pub const ANALYZE_FALLBACK: &str = "Analysis failed. Please try again.";

fn form_error(err: JsValue) -> ApiError {
    ApiError::Network(format!("Could not build upload form: {:?}", err))
}

/// Upload a document for clause analysis
pub async fn analyze_document(
    file: &web_sys::File,
    persona: Persona,
    language: AnalysisLanguage,
) -> Result<AnalysisResult, ApiError> {
    let form = FormData::new().map_err(form_error)?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(form_error)?;
    form.append_with_str("persona", persona.display_name())
        .map_err(form_error)?;
    form.append_with_str("language", language.display_name())
        .map_err(form_error)?;

    log::info!(
        "Analyzing {} ({} bytes) as {} in {}",
        file.name(),
        file.size() as u64,
        persona,
        language
    );

    // The browser sets the multipart boundary header itself
    let response = Request::post(&api_url("/api/analyze"))
        .body(form)?
        .send()
        .await?;

    read_json(response, ANALYZE_FALLBACK).await
}
