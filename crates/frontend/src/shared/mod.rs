pub mod api_utils;
pub mod config;
pub mod date_utils;
pub mod icons;
pub mod markup;
pub mod speech;
