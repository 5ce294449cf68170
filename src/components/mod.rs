pub mod auth_guard;
pub mod layout;
pub mod live_preview;
pub mod page_editor;
pub mod social_icons;
pub mod spinner;
pub mod status_banner;
