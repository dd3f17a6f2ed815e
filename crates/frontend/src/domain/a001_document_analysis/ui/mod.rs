pub mod details;
pub mod upload;
