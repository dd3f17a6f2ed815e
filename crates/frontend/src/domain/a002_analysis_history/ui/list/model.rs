//! Analysis history - Model (API functions)

use contracts::domain::a002_analysis_history::aggregate::{
    sort_newest_first, AnalysisHistoryItem, SaveAnalysisRequest,
};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, bearer, ensure_success, read_json, ApiError};

pub const HISTORY_FALLBACK: &str = "Could not load your analyses.";
const SAVE_FALLBACK: &str = "Could not save the analysis.";

/// Saved analyses of the signed-in user, newest first
pub async fn fetch_history(token: &str) -> Result<Vec<AnalysisHistoryItem>, ApiError> {
    let response = Request::get(&api_url("/api/analyses"))
        .header("Authorization", &bearer(token))
        .header("Accept", "application/json")
        .send()
        .await?;

    let mut items: Vec<AnalysisHistoryItem> = read_json(response, HISTORY_FALLBACK).await?;
    sort_newest_first(&mut items);
    Ok(items)
}

pub async fn save_analysis(token: &str, request: &SaveAnalysisRequest) -> Result<(), ApiError> {
    let response = Request::post(&api_url("/api/analyses"))
        .header("Authorization", &bearer(token))
        .json(request)?
        .send()
        .await?;

    ensure_success(response, SAVE_FALLBACK).await
}
