pub mod auth;
pub mod landing_pages;
pub mod password;
pub mod utils;
