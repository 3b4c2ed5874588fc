//! Theme-aware asset selection
//!
//! [`ThemedAssetSelector::select`] maps a [`ResolvedTheme`] to one of two
//! fixed asset references. [`DerivedAsset`] memoizes that choice keyed on the
//! resolved theme, so a preference flip that resolves to the same theme does
//! no work and a system-driven change is never missed.

use serde::{Deserialize, Serialize};

use crate::theme::ResolvedTheme;

/// Logo drawn on light backgrounds
pub const LIGHT_LOGO_PATH: &str = "/dept-logo.svg";
/// Logo drawn on dark backgrounds
pub const DARK_LOGO_PATH: &str = "/dept-logo-white.svg";
/// Intrinsic logo size handed to the image primitive
pub const LOGO_WIDTH: u16 = 111;
pub const LOGO_HEIGHT: u16 = 28;

/// Reference to a static asset plus the size it should be rendered at
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetRef {
    pub path: String,
    pub width: u16,
    pub height: u16,
}

impl AssetRef {
    pub fn new(path: impl Into<String>, width: u16, height: u16) -> Self {
        Self {
            path: path.into(),
            width,
            height,
        }
    }

    /// Final path component, e.g. `dept-logo.svg`
    pub fn file_name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }
}

/// Pure mapping from resolved theme to one of two assets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemedAssetSelector {
    light: AssetRef,
    dark: AssetRef,
}

impl ThemedAssetSelector {
    pub fn new(light: AssetRef, dark: AssetRef) -> Self {
        Self { light, dark }
    }

    /// The site logo pair
    pub fn logo() -> Self {
        Self::logo_with_paths(LIGHT_LOGO_PATH, DARK_LOGO_PATH)
    }

    /// Logo pair at the standard logo size with custom paths
    pub fn logo_with_paths(light: impl Into<String>, dark: impl Into<String>) -> Self {
        Self::new(
            AssetRef::new(light, LOGO_WIDTH, LOGO_HEIGHT),
            AssetRef::new(dark, LOGO_WIDTH, LOGO_HEIGHT),
        )
    }

    pub fn select(&self, theme: ResolvedTheme) -> &AssetRef {
        match theme {
            ResolvedTheme::Light => &self.light,
            ResolvedTheme::Dark => &self.dark,
        }
    }
}

impl Default for ThemedAssetSelector {
    fn default() -> Self {
        Self::logo()
    }
}

/// Asset derived from the resolved theme, recomputed only when it changes
#[derive(Debug, Clone)]
pub struct DerivedAsset {
    selector: ThemedAssetSelector,
    key: Option<ResolvedTheme>,
    current: Option<AssetRef>,
    recomputations: u64,
}

impl DerivedAsset {
    pub fn new(selector: ThemedAssetSelector) -> Self {
        Self {
            selector,
            key: None,
            current: None,
            recomputations: 0,
        }
    }

    /// Asset for `theme`, recomputing if the resolved theme moved
    pub fn get(&mut self, theme: ResolvedTheme) -> &AssetRef {
        if self.key != Some(theme) {
            tracing::debug!("Reselecting themed asset for {} theme", theme);
            self.key = Some(theme);
            self.current = Some(self.selector.select(theme).clone());
            self.recomputations += 1;
        }
        match &self.current {
            Some(asset) => asset,
            None => self.selector.select(theme),
        }
    }

    /// Last computed asset without touching the memo
    pub fn current(&self) -> Option<&AssetRef> {
        self.current.as_ref()
    }

    /// Resolved theme the current value was derived from
    pub fn key(&self) -> Option<ResolvedTheme> {
        self.key
    }

    /// Number of times the derivation has run
    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_returns_fixed_assets() {
        let selector = ThemedAssetSelector::logo();
        assert_eq!(selector.select(ResolvedTheme::Light).path, LIGHT_LOGO_PATH);
        assert_eq!(selector.select(ResolvedTheme::Dark).path, DARK_LOGO_PATH);
        assert_ne!(
            selector.select(ResolvedTheme::Light),
            selector.select(ResolvedTheme::Dark)
        );
    }

    #[test]
    fn test_select_is_pure_across_calls_and_instances() {
        let a = ThemedAssetSelector::logo();
        let b = ThemedAssetSelector::logo();
        for _ in 0..3 {
            assert_eq!(a.select(ResolvedTheme::Dark), b.select(ResolvedTheme::Dark));
            assert_eq!(
                a.select(ResolvedTheme::Light),
                b.select(ResolvedTheme::Light)
            );
        }
    }

    #[test]
    fn test_logo_size() {
        let selector = ThemedAssetSelector::logo();
        let asset = selector.select(ResolvedTheme::Light);
        assert_eq!((asset.width, asset.height), (LOGO_WIDTH, LOGO_HEIGHT));
        assert_eq!(asset.file_name(), "dept-logo.svg");
    }

    #[test]
    fn test_derived_asset_round_trips_theme_switches() {
        let mut derived = DerivedAsset::new(ThemedAssetSelector::logo());

        assert_eq!(derived.get(ResolvedTheme::Light).path, LIGHT_LOGO_PATH);
        assert_eq!(derived.get(ResolvedTheme::Dark).path, DARK_LOGO_PATH);
        assert_eq!(derived.get(ResolvedTheme::Light).path, LIGHT_LOGO_PATH);
        assert_eq!(derived.key(), Some(ResolvedTheme::Light));
    }

    #[test]
    fn test_derived_asset_memoizes_on_resolved_theme() {
        let mut derived = DerivedAsset::new(ThemedAssetSelector::logo());

        derived.get(ResolvedTheme::Dark);
        derived.get(ResolvedTheme::Dark);
        derived.get(ResolvedTheme::Dark);
        assert_eq!(derived.recomputations(), 1);

        derived.get(ResolvedTheme::Light);
        assert_eq!(derived.recomputations(), 2);
    }

    #[test]
    fn test_derived_asset_starts_empty() {
        let derived = DerivedAsset::new(ThemedAssetSelector::logo());
        assert!(derived.current().is_none());
        assert!(derived.key().is_none());
    }

    #[test]
    fn test_custom_paths() {
        let selector = ThemedAssetSelector::logo_with_paths("/a.svg", "/b.svg");
        assert_eq!(selector.select(ResolvedTheme::Light).path, "/a.svg");
        assert_eq!(selector.select(ResolvedTheme::Dark).path, "/b.svg");
    }
}
