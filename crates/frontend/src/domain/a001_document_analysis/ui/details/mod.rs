//! Document analysis details (MVVM)
//!
//! - model.rs: multipart upload to the analysis service
//! - view_model.rs: AnalysisVm wrapping the workflow signal and the picked file
//! - view.rs: AnalysisPanel (loading, error, placeholder, result)
//! - clause_item.rs, progress.rs, audio_player.rs: pieces of the result view

mod audio_player;
mod clause_item;
pub mod model;
mod progress;
mod view;
mod view_model;

pub use view::AnalysisPanel;
pub use view_model::AnalysisVm;
