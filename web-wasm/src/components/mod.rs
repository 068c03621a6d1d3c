//! UIコンポーネント

pub mod controls;
pub mod debug_panel;
pub mod embed_panel;
pub mod failure_card;
pub mod header;
pub mod image_gallery;
pub mod status_card;
pub mod system_panel;
