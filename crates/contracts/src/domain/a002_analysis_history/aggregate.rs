use crate::domain::a001_document_analysis::aggregate::AnalysisResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/analyses`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveAnalysisRequest {
    pub file_name: String,
    pub analysis_data: AnalysisResult,
    pub timestamp: DateTime<Utc>,
}

impl SaveAnalysisRequest {
    pub fn new(analysis: AnalysisResult, timestamp: DateTime<Utc>) -> Self {
        Self {
            file_name: analysis.file_name.clone(),
            analysis_data: analysis,
            timestamp,
        }
    }
}

/// Element of `GET /api/analyses`
///
/// The timestamp is kept as the raw string the service stored, since older
/// records were written by clients with their own formatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisHistoryItem {
    pub file_name: String,
    pub timestamp: String,
    pub analysis_data: AnalysisResult,
}

impl AnalysisHistoryItem {
    pub fn parsed_timestamp(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.timestamp)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// Most recent first; unparseable timestamps sink to the bottom
pub fn sort_newest_first(items: &mut [AnalysisHistoryItem]) {
    items.sort_by(|a, b| b.parsed_timestamp().cmp(&a.parsed_timestamp()));
}
