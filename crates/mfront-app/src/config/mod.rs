//! Configuration file parsing for Mastering Frontend
//!
//! Supports:
//! - `.mfront/config.toml` - Site settings (banner, theme, assets, images, navigation)

pub mod settings;
pub mod types;

pub use settings::{config_path, init_config_dir, load_settings};
pub use types::*;
