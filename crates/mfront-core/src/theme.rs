//! Display theme preference and resolution
//!
//! A [`ThemePreference`] is what the user asked for; a [`ResolvedTheme`] is
//! what actually gets drawn. Everything downstream of resolution (palettes,
//! the logo asset) takes a `ResolvedTheme`, so the `System` sentinel can
//! never leak into a render.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Theme requested by the user or configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    /// Follow the terminal/system preference
    #[default]
    System,
}

impl ThemePreference {
    /// Next preference in the light → dark → system rotation
    pub fn next(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::System,
            ThemePreference::System => ThemePreference::Light,
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemePreference::Light => write!(f, "light"),
            ThemePreference::Dark => write!(f, "dark"),
            ThemePreference::System => write!(f, "system"),
        }
    }
}

impl FromStr for ThemePreference {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            "system" => Ok(ThemePreference::System),
            other => Err(Error::config_invalid(format!(
                "unknown theme '{}', expected light, dark or system",
                other
            ))),
        }
    }
}

/// Concrete light/dark choice after collapsing `System`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolvedTheme {
    Light,
    Dark,
}

impl ResolvedTheme {
    pub fn is_dark(self) -> bool {
        matches!(self, ResolvedTheme::Dark)
    }
}

impl fmt::Display for ResolvedTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolvedTheme::Light => write!(f, "light"),
            ResolvedTheme::Dark => write!(f, "dark"),
        }
    }
}

/// Theme used when the system preference cannot be determined
pub const FALLBACK_THEME: ResolvedTheme = ResolvedTheme::Dark;

/// Source of the system/terminal theme preference.
pub trait ThemeResolver {
    /// The system's current preference, if it can be detected
    fn system_theme(&self) -> Option<ResolvedTheme>;
}

/// Resolver that always reports the same system theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedThemeResolver(pub Option<ResolvedTheme>);

impl ThemeResolver for FixedThemeResolver {
    fn system_theme(&self) -> Option<ResolvedTheme> {
        self.0
    }
}

/// Resolver reading the terminal's `COLORFGBG` variable.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvThemeResolver;

impl ThemeResolver for EnvThemeResolver {
    fn system_theme(&self) -> Option<ResolvedTheme> {
        std::env::var("COLORFGBG")
            .ok()
            .and_then(|value| theme_from_colorfgbg(&value))
    }
}

/// Interpret a `COLORFGBG` value (`"fg;bg"` or `"fg;default;bg"`).
///
/// The last field is the background colour index. Indices 0-6 and 8 are
/// dark backgrounds; 7 and 9-15 are light.
pub fn theme_from_colorfgbg(value: &str) -> Option<ResolvedTheme> {
    let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    match bg {
        0..=6 | 8 => Some(ResolvedTheme::Dark),
        7 | 9..=15 => Some(ResolvedTheme::Light),
        _ => None,
    }
}

/// Collapse a preference into the theme that should be drawn
pub fn resolve(preference: ThemePreference, system: Option<ResolvedTheme>) -> ResolvedTheme {
    match preference {
        ThemePreference::Light => ResolvedTheme::Light,
        ThemePreference::Dark => ResolvedTheme::Dark,
        ThemePreference::System => system.unwrap_or(FALLBACK_THEME),
    }
}

/// Current theme preference together with the detected system theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeState {
    preference: ThemePreference,
    system: Option<ResolvedTheme>,
}

impl ThemeState {
    pub fn new(preference: ThemePreference, system: Option<ResolvedTheme>) -> Self {
        Self { preference, system }
    }

    /// Build from a preference, asking `resolver` for the system theme
    pub fn detect(preference: ThemePreference, resolver: &dyn ThemeResolver) -> Self {
        Self::new(preference, resolver.system_theme())
    }

    pub fn preference(&self) -> ThemePreference {
        self.preference
    }

    pub fn system(&self) -> Option<ResolvedTheme> {
        self.system
    }

    pub fn resolved(&self) -> ResolvedTheme {
        resolve(self.preference, self.system)
    }

    pub fn set_preference(&mut self, preference: ThemePreference) {
        self.preference = preference;
    }

    pub fn set_system(&mut self, system: Option<ResolvedTheme>) {
        self.system = system;
    }

    /// Advance to the next preference and return the new resolved theme
    pub fn cycle_preference(&mut self) -> ResolvedTheme {
        self.preference = self.preference.next();
        self.resolved()
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new(ThemePreference::default(), None)
    }
}
