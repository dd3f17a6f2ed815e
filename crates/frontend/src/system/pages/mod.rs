pub mod auth_page;
pub mod dashboard;
pub mod landing;
