pub mod landing_pages;
pub mod landing_view;
pub mod login;
pub mod reset_password;
