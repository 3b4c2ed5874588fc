//! Configuration types for Mastering Frontend
//!
//! Defines:
//! - `Settings` - Site settings loaded from `.mfront/config.toml`
//! - One sub-struct per `[section]` of the file

use mfront_core::asset::{DARK_LOGO_PATH, LIGHT_LOGO_PATH};
use mfront_core::prelude::*;
use mfront_core::{ImageHostPolicy, LabelSet, RemotePattern, Route, ThemePreference};
use serde::{Deserialize, Serialize};

/// Default "Currently Exploring" rotation
pub const DEFAULT_LABELS: [&str; 5] = [
    "PWAs",
    "WebAssembly",
    "Micro Frontends",
    "Animations",
    "VUI's",
];

/// Default label rotation period
pub const DEFAULT_INTERVAL_MS: u64 = 2000;

pub const DEFAULT_BANNER_IMAGE: &str = "https://images.unsplash.com/photo-1498050108023-c5249f4df085?auto=format&fit=crop&w=800&q=80";

/// Site settings (.mfront/config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub banner: BannerSettings,

    #[serde(default)]
    pub theme: ThemeSettings,

    #[serde(default)]
    pub assets: AssetSettings,

    #[serde(default)]
    pub images: ImageSettings,

    #[serde(default)]
    pub navigation: NavigationSettings,
}

impl Settings {
    /// Semantic checks that TOML parsing cannot express.
    ///
    /// Returns the first problem found; every error here is fatal at startup.
    pub fn validate(&self) -> Result<()> {
        self.banner.label_set()?;
        if self.banner.interval_ms == 0 {
            return Err(Error::config_invalid(
                "banner.interval_ms must be greater than zero",
            ));
        }
        ImageHostPolicy::new(&self.images.remote_patterns)
            .map_err(|e| Error::config_invalid(format!("images.remote_patterns: {}", e)))?;
        Route::parse(&self.navigation.start_path).map_err(|_| {
            Error::config_invalid(format!(
                "navigation.start_path '{}' is not a valid route",
                self.navigation.start_path
            ))
        })?;
        Ok(())
    }
}

/// Landing page banner
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BannerSettings {
    #[serde(default = "default_title")]
    pub title: String,

    /// Rotating "Currently Exploring" labels, in display order
    #[serde(default = "default_labels")]
    pub labels: Vec<String>,

    /// Milliseconds between label changes
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,

    #[serde(default = "default_description")]
    pub description: String,

    /// Hero image URL (must match `images.remote_patterns` when remote)
    #[serde(default = "default_image")]
    pub image: String,
}

impl BannerSettings {
    /// Validated label set
    pub fn label_set(&self) -> Result<LabelSet> {
        LabelSet::new(self.labels.iter().cloned())
    }
}

impl Default for BannerSettings {
    fn default() -> Self {
        Self {
            title: default_title(),
            labels: default_labels(),
            interval_ms: default_interval_ms(),
            description: default_description(),
            image: default_image(),
        }
    }
}

fn default_title() -> String {
    "Mastering Modern Frontend".to_string()
}

fn default_labels() -> Vec<String> {
    DEFAULT_LABELS.iter().map(|s| s.to_string()).collect()
}

fn default_interval_ms() -> u64 {
    DEFAULT_INTERVAL_MS
}

fn default_description() -> String {
    "Take your frontend skills to the next level with in-depth tutorials, hands-on \
     examples, and interactive playgrounds. Explore cutting-edge web technologies!"
        .to_string()
}

fn default_image() -> String {
    DEFAULT_BANNER_IMAGE.to_string()
}

/// Theme settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeSettings {
    #[serde(default)]
    pub preference: ThemePreference,
}

/// Logo asset paths
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AssetSettings {
    #[serde(default = "default_light_logo")]
    pub light_logo: String,

    #[serde(default = "default_dark_logo")]
    pub dark_logo: String,
}

impl Default for AssetSettings {
    fn default() -> Self {
        Self {
            light_logo: default_light_logo(),
            dark_logo: default_dark_logo(),
        }
    }
}

fn default_light_logo() -> String {
    LIGHT_LOGO_PATH.to_string()
}

fn default_dark_logo() -> String {
    DARK_LOGO_PATH.to_string()
}

/// Remote image hosting
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ImageSettings {
    #[serde(default = "default_remote_patterns")]
    pub remote_patterns: Vec<RemotePattern>,
}

impl Default for ImageSettings {
    fn default() -> Self {
        Self {
            remote_patterns: default_remote_patterns(),
        }
    }
}

fn default_remote_patterns() -> Vec<RemotePattern> {
    vec![RemotePattern::unsplash()]
}

/// Navigation settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NavigationSettings {
    /// Route shown at startup
    #[serde(default = "default_start_path")]
    pub start_path: String,
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self {
            start_path: default_start_path(),
        }
    }
}

fn default_start_path() -> String {
    "/".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        Settings::default().validate().unwrap();
    }

    #[test]
    fn test_default_banner() {
        let banner = BannerSettings::default();
        assert_eq!(banner.labels, DEFAULT_LABELS);
        assert_eq!(banner.interval_ms, 2000);
        assert_eq!(banner.title, "Mastering Modern Frontend");
    }

    #[test]
    fn test_empty_labels_invalid() {
        let mut settings = Settings::default();
        settings.banner.labels.clear();
        assert!(matches!(settings.validate(), Err(Error::EmptyLabelSet)));
    }

    #[test]
    fn test_zero_interval_invalid() {
        let mut settings = Settings::default();
        settings.banner.interval_ms = 0;
        let err = settings.validate().unwrap_err();
        assert!(err.is_fatal());
        assert!(err.to_string().contains("interval_ms"));
    }

    #[test]
    fn test_unknown_start_path_invalid() {
        let mut settings = Settings::default();
        settings.navigation.start_path = "/blog".to_string();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_bad_image_pattern_invalid() {
        let mut settings = Settings::default();
        settings.images.remote_patterns[0].port = "abc".to_string();
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("remote_patterns"));
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let settings: Settings = toml::from_str(
            r#"
[banner]
interval_ms = 500

[theme]
preference = "light"
"#,
        )
        .unwrap();

        assert_eq!(settings.banner.interval_ms, 500);
        assert_eq!(settings.banner.labels.len(), 5);
        assert_eq!(settings.theme.preference, ThemePreference::Light);
        assert_eq!(settings.assets, AssetSettings::default());
        assert_eq!(settings.images.remote_patterns.len(), 1);
    }
}
