//! Text read aloud by the audio player

use contracts::domain::a001_document_analysis::aggregate::AnalysisResult;

pub fn narration_script(analysis: &AnalysisResult) -> String {
    let mut script = format!("Summary: {}", analysis.summary.trim());

    if analysis.clauses.is_empty() {
        return script;
    }

    script.push_str(" Now, for the clause analysis.");
    for (index, clause) in analysis.clauses.iter().enumerate() {
        script.push_str(&format!(
            " Clause {}. Risk level: {}. Explanation: {}.",
            index + 1,
            clause.risk_level,
            clause.explanation.trim().trim_end_matches('.')
        ));
    }

    script
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_document_analysis::aggregate::{Clause, RiskLevel};

    #[test]
    fn test_script_lists_clauses_in_order() {
        let analysis = AnalysisResult {
            summary: "A standard lease.".into(),
            clauses: vec![
                Clause {
                    clause_text: "Rent is due monthly.".into(),
                    risk_level: RiskLevel::Neutral,
                    explanation: "Normal payment terms.".into(),
                    rag_warning: None,
                },
                Clause {
                    clause_text: "Landlord may enter at any time.".into(),
                    risk_level: RiskLevel::Critical,
                    explanation: "No notice is required".into(),
                    rag_warning: Some("Most states require **24 hours** notice.".into()),
                },
            ],
            full_text: String::new(),
            file_name: String::new(),
        };

        assert_eq!(
            narration_script(&analysis),
            "Summary: A standard lease. Now, for the clause analysis. \
             Clause 1. Risk level: Neutral. Explanation: Normal payment terms. \
             Clause 2. Risk level: Critical. Explanation: No notice is required."
        );
    }

    #[test]
    fn test_summary_only() {
        let analysis = AnalysisResult {
            summary: "Nothing to flag.".into(),
            clauses: Vec::new(),
            full_text: String::new(),
            file_name: String::new(),
        };
        assert_eq!(narration_script(&analysis), "Summary: Nothing to flag.");
    }
}
