use serde::{Deserialize, Serialize};

/// Error envelope returned by the analysis service (`{"detail": "..."}`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}

impl ApiErrorBody {
    /// Parses a raw error body; anything that is not the envelope yields an empty one
    pub fn from_text(text: &str) -> Self {
        serde_json::from_str(text).unwrap_or_default()
    }

    pub fn message_or(&self, fallback: &str) -> String {
        match self.detail.as_deref().map(str::trim) {
            Some(detail) if !detail.is_empty() => detail.to_string(),
            _ => fallback.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_wins_over_fallback() {
        let body = ApiErrorBody::from_text(r#"{"detail": "Unsupported file type"}"#);
        assert_eq!(body.message_or("Analysis failed."), "Unsupported file type");
    }

    #[test]
    fn test_blank_or_missing_detail_uses_fallback() {
        assert_eq!(
            ApiErrorBody::from_text(r#"{"detail": "  "}"#).message_or("fallback"),
            "fallback"
        );
        assert_eq!(ApiErrorBody::from_text("{}").message_or("fallback"), "fallback");
        assert_eq!(
            ApiErrorBody::from_text("<html>502 Bad Gateway</html>").message_or("fallback"),
            "fallback"
        );
    }
}
