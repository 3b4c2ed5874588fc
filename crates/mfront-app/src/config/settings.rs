//! Settings parser for .mfront/config.toml

use super::types::Settings;
use mfront_core::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const MFRONT_DIR: &str = ".mfront";

/// Path of the settings file for a site directory
pub fn config_path(site_dir: &Path) -> PathBuf {
    site_dir.join(MFRONT_DIR).join(CONFIG_FILENAME)
}

// ─────────────────────────────────────────────────────────────────────────────
// Settings Loading
// ─────────────────────────────────────────────────────────────────────────────

/// Load settings from .mfront/config.toml
///
/// Returns default settings if file doesn't exist or can't be parsed.
/// Semantic validation is left to [`Settings::validate`].
pub fn load_settings(site_dir: &Path) -> Settings {
    let config_path = config_path(site_dir);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Create .mfront/ with a commented default config.toml
///
/// An existing config file is left untouched.
pub fn init_config_dir(site_dir: &Path) -> Result<()> {
    let mfront_dir = site_dir.join(MFRONT_DIR);

    if !mfront_dir.exists() {
        std::fs::create_dir_all(&mfront_dir)
            .map_err(|e| Error::config(format!("Failed to create .mfront dir: {}", e)))?;
    }

    let config_path = mfront_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        std::fs::write(&config_path, generate_default_config())
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
        info!("Created default config at {:?}", config_path);
    }

    Ok(())
}

fn generate_config_header() -> String {
    r#"# Mastering Frontend configuration
# Generated by `mfront --init`; edit freely."#
        .to_string()
}

fn generate_default_config() -> String {
    format!(
        r#"{}

[banner]
title = "Mastering Modern Frontend"
# Rotating "Currently Exploring" labels, shown in this order
labels = ["PWAs", "WebAssembly", "Micro Frontends", "Animations", "VUI's"]
# Milliseconds between label changes (must be > 0)
interval_ms = 2000
image = "{}"

[theme]
# light | dark | system
preference = "system"

[assets]
light_logo = "/dept-logo.svg"
dark_logo = "/dept-logo-white.svg"

[[images.remote_patterns]]
protocol = "https"
hostname = "images.unsplash.com"
port = ""
pathname = "/**"

[navigation]
start_path = "/"
"#,
        generate_config_header(),
        super::types::DEFAULT_BANNER_IMAGE
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use mfront_core::ThemePreference;
    use tempfile::tempdir;

    #[test]
    fn test_load_settings_defaults() {
        let temp = tempdir().unwrap();
        let settings = load_settings(temp.path());
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_settings_custom() {
        let temp = tempdir().unwrap();
        let mfront_dir = temp.path().join(".mfront");
        std::fs::create_dir_all(&mfront_dir).unwrap();

        let config = r#"
[banner]
labels = ["Rust", "WASI"]
interval_ms = 750

[theme]
preference = "dark"
"#;
        std::fs::write(mfront_dir.join("config.toml"), config).unwrap();

        let settings = load_settings(temp.path());

        assert_eq!(settings.banner.labels, vec!["Rust", "WASI"]);
        assert_eq!(settings.banner.interval_ms, 750);
        assert_eq!(settings.theme.preference, ThemePreference::Dark);
    }

    #[test]
    fn test_load_settings_invalid_toml() {
        let temp = tempdir().unwrap();
        let mfront_dir = temp.path().join(".mfront");
        std::fs::create_dir_all(&mfront_dir).unwrap();

        std::fs::write(mfront_dir.join("config.toml"), "not valid toml {{{{").unwrap();

        let settings = load_settings(temp.path());
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_empty_labels_load_but_fail_validation() {
        let temp = tempdir().unwrap();
        let mfront_dir = temp.path().join(".mfront");
        std::fs::create_dir_all(&mfront_dir).unwrap();
        std::fs::write(mfront_dir.join("config.toml"), "[banner]\nlabels = []\n").unwrap();

        let settings = load_settings(temp.path());
        assert!(settings.banner.labels.is_empty());
        assert!(matches!(settings.validate(), Err(Error::EmptyLabelSet)));
    }

    #[test]
    fn test_init_config_dir() {
        let temp = tempdir().unwrap();

        init_config_dir(temp.path()).unwrap();

        assert!(temp.path().join(".mfront").exists());
        assert!(config_path(temp.path()).exists());
    }

    #[test]
    fn test_generated_config_matches_defaults() {
        let temp = tempdir().unwrap();
        init_config_dir(temp.path()).unwrap();

        let settings = load_settings(temp.path());
        assert_eq!(settings, Settings::default());
        settings.validate().unwrap();
    }

    #[test]
    fn test_init_does_not_overwrite() {
        let temp = tempdir().unwrap();
        let mfront_dir = temp.path().join(".mfront");
        std::fs::create_dir_all(&mfront_dir).unwrap();
        std::fs::write(mfront_dir.join("config.toml"), "[banner]\ninterval_ms = 10\n").unwrap();

        init_config_dir(temp.path()).unwrap();

        assert_eq!(load_settings(temp.path()).banner.interval_ms, 10);
    }
}
