pub mod analysis_language;
pub mod persona;

pub use analysis_language::AnalysisLanguage;
pub use persona::Persona;
