mod language_selector;
mod persona_selector;
mod view;

pub use language_selector::LanguageSelector;
pub use persona_selector::PersonaSelector;
pub use view::UploadZone;
