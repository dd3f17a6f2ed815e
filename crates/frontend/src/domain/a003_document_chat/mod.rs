pub mod ui;
pub mod workflow;
