use serde::{Deserialize, Serialize};

/// Risk level the analysis service assigns to a clause
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Neutral,
    Attention,
    Critical,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Neutral => "Neutral",
            RiskLevel::Attention => "Attention",
            RiskLevel::Critical => "Critical",
        }
    }

    /// Points deducted from the wellness score per clause
    pub fn penalty(&self) -> u32 {
        match self {
            RiskLevel::Neutral => 0,
            RiskLevel::Attention => 3,
            RiskLevel::Critical => 10,
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One segmented clause of the analysed document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clause {
    pub clause_text: String,
    pub risk_level: RiskLevel,
    pub explanation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rag_warning: Option<String>,
}

/// Result of `POST /api/analyze`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub summary: String,
    #[serde(default)]
    pub clauses: Vec<Clause>,
    #[serde(default)]
    pub full_text: String,
    #[serde(default)]
    pub file_name: String,
}

impl AnalysisResult {
    pub fn count_by_risk(&self, level: RiskLevel) -> usize {
        self.clauses
            .iter()
            .filter(|c| c.risk_level == level)
            .count()
    }

    pub fn critical_count(&self) -> usize {
        self.count_by_risk(RiskLevel::Critical)
    }

    pub fn attention_count(&self) -> usize {
        self.count_by_risk(RiskLevel::Attention)
    }

    /// "Legal wellness" score in `0..=100`
    pub fn wellness_score(&self) -> u32 {
        let penalty: u32 = self.clauses.iter().map(|c| c.risk_level.penalty()).sum();
        100u32.saturating_sub(penalty)
    }

    pub fn has_chat_context(&self) -> bool {
        !self.full_text.trim().is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Healthy,
    Caution,
    Risky,
}

impl ScoreBand {
    pub fn from_score(score: u32) -> Self {
        if score < 50 {
            ScoreBand::Risky
        } else if score < 80 {
            ScoreBand::Caution
        } else {
            ScoreBand::Healthy
        }
    }

    pub fn css_modifier(&self) -> &'static str {
        match self {
            ScoreBand::Healthy => "score--healthy",
            ScoreBand::Caution => "score--caution",
            ScoreBand::Risky => "score--risky",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clause(level: RiskLevel) -> Clause {
        Clause {
            clause_text: "The tenant shall pay rent monthly.".into(),
            risk_level: level,
            explanation: "You pay every month.".into(),
            rag_warning: None,
        }
    }

    fn analysis(levels: &[RiskLevel]) -> AnalysisResult {
        AnalysisResult {
            summary: "Rental agreement".into(),
            clauses: levels.iter().copied().map(clause).collect(),
            full_text: "full text".into(),
            file_name: "lease.pdf".into(),
        }
    }

    #[test]
    fn test_wellness_score_penalties() {
        let a = analysis(&[
            RiskLevel::Critical,
            RiskLevel::Attention,
            RiskLevel::Attention,
            RiskLevel::Neutral,
        ]);
        assert_eq!(a.critical_count(), 1);
        assert_eq!(a.attention_count(), 2);
        assert_eq!(a.wellness_score(), 84);
    }

    #[test]
    fn test_wellness_score_floors_at_zero() {
        let a = analysis(&[RiskLevel::Critical; 12]);
        assert_eq!(a.wellness_score(), 0);
    }

    #[test]
    fn test_score_bands() {
        assert_eq!(ScoreBand::from_score(100), ScoreBand::Healthy);
        assert_eq!(ScoreBand::from_score(80), ScoreBand::Healthy);
        assert_eq!(ScoreBand::from_score(79), ScoreBand::Caution);
        assert_eq!(ScoreBand::from_score(50), ScoreBand::Caution);
        assert_eq!(ScoreBand::from_score(49), ScoreBand::Risky);
    }

    #[test]
    fn test_deserialize_service_payload() {
        let json = r#"{
            "summary": "A lease.",
            "clauses": [
                {"clause_text": "Late fee of 10%.", "risk_level": "Critical",
                 "explanation": "Steep fee.", "rag_warning": "**Warning:** above the legal cap"},
                {"clause_text": "Quiet enjoyment.", "risk_level": "Neutral", "explanation": "Standard."}
            ],
            "full_text": "Late fee of 10%. Quiet enjoyment."
        }"#;
        let a: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(a.clauses.len(), 2);
        assert_eq!(a.clauses[0].risk_level, RiskLevel::Critical);
        assert!(a.clauses[0].rag_warning.is_some());
        assert_eq!(a.clauses[1].rag_warning, None);
        assert_eq!(a.file_name, "");
        assert!(a.has_chat_context());
    }

    #[test]
    fn test_absent_rag_warning_is_not_serialized() {
        let json = serde_json::to_string(&clause(RiskLevel::Neutral)).unwrap();
        assert!(!json.contains("rag_warning"));
    }
}
