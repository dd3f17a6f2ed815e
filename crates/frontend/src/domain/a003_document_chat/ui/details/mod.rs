//! Document chat (MVVM)
//!
//! - model.rs: chat endpoint call
//! - view_model.rs: ChatVm with the workflow signal
//! - view.rs: ChatPanel floating widget

pub mod model;
mod view;
mod view_model;

pub use view::ChatPanel;
pub use view_model::ChatVm;
