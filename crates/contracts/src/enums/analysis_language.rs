use serde::{Deserialize, Serialize};

/// Languages the analysis report can be written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AnalysisLanguage {
    #[default]
    English,
    Hindi,
    Spanish,
    French,
    German,
    Tamil,
    Telugu,
    Mandarin,
}

impl AnalysisLanguage {
    pub fn display_name(&self) -> &'static str {
        match self {
            AnalysisLanguage::English => "English",
            AnalysisLanguage::Hindi => "Hindi",
            AnalysisLanguage::Spanish => "Spanish",
            AnalysisLanguage::French => "French",
            AnalysisLanguage::German => "German",
            AnalysisLanguage::Tamil => "Tamil",
            AnalysisLanguage::Telugu => "Telugu",
            AnalysisLanguage::Mandarin => "Mandarin",
        }
    }

    pub fn all() -> [AnalysisLanguage; 8] {
        [
            AnalysisLanguage::English,
            AnalysisLanguage::Hindi,
            AnalysisLanguage::Spanish,
            AnalysisLanguage::French,
            AnalysisLanguage::German,
            AnalysisLanguage::Tamil,
            AnalysisLanguage::Telugu,
            AnalysisLanguage::Mandarin,
        ]
    }

    /// Unknown names fall back to English
    pub fn from_display_name(name: &str) -> Self {
        Self::all()
            .into_iter()
            .find(|l| l.display_name() == name)
            .unwrap_or_default()
    }
}

impl std::fmt::Display for AnalysisLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_order_starts_with_english() {
        let all = AnalysisLanguage::all();
        assert_eq!(all[0], AnalysisLanguage::English);
        assert_eq!(all.len(), 8);
    }

    #[test]
    fn test_from_display_name_falls_back() {
        assert_eq!(
            AnalysisLanguage::from_display_name("Tamil"),
            AnalysisLanguage::Tamil
        );
        assert_eq!(
            AnalysisLanguage::from_display_name("Klingon"),
            AnalysisLanguage::English
        );
    }
}
