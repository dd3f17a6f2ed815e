//! Saved analyses sidebar
//!
//! - model.rs: fetch and save calls against the history endpoint
//! - view.rs: HistoryPanel

pub mod model;
mod view;

pub use view::HistoryPanel;
