//! Application state (Model in TEA pattern)

use std::path::PathBuf;
use std::time::Duration;

use mfront_core::prelude::*;
use mfront_core::{
    AssetRef, ContentMetadataTree, DerivedAsset, ImageHostPolicy, LabelSet, MetaEntry,
    NavigationAction, ResolvedTheme, Route, ThemeState, ThemedAssetSelector,
};

use crate::banner::BannerState;
use crate::config::Settings;
use crate::docs::{load_doc_page, DocPage};
use crate::router::Router;

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,

    /// Site root (holds `.mfront/` and `content/`)
    pub site_dir: PathBuf,

    pub settings: Settings,

    pub content: ContentMetadataTree,

    pub theme: ThemeState,

    router: Router,

    logo: DerivedAsset,

    /// Present only while the home page is shown
    banner: Option<BannerState>,

    labels: LabelSet,
    interval: Duration,
    image_policy: ImageHostPolicy,

    /// Generation handed to the next banner mount
    next_generation: u64,

    /// Highlighted row in the docs sidebar
    pub doc_selected: usize,

    /// Loaded page while a docs route is shown
    pub doc_page: Option<DocPage>,
}

impl AppState {
    /// Build the state and enter `settings.navigation.start_path`.
    ///
    /// Fails if the settings don't validate or the start path names no page
    /// in `content`.
    pub fn new(
        site_dir: PathBuf,
        settings: Settings,
        content: ContentMetadataTree,
        system_theme: Option<ResolvedTheme>,
    ) -> Result<Self> {
        settings.validate()?;

        let labels = settings.banner.label_set()?;
        let interval = Duration::from_millis(settings.banner.interval_ms);
        let image_policy = ImageHostPolicy::new(&settings.images.remote_patterns)?;
        let theme = ThemeState::new(settings.theme.preference, system_theme);
        let logo = DerivedAsset::new(ThemedAssetSelector::logo_with_paths(
            settings.assets.light_logo.clone(),
            settings.assets.dark_logo.clone(),
        ));
        let start_path = settings.navigation.start_path.clone();

        let mut state = Self {
            phase: AppPhase::Running,
            site_dir,
            settings,
            content,
            theme,
            router: Router::default(),
            logo,
            banner: None,
            labels,
            interval,
            image_policy,
            next_generation: 1,
            doc_selected: 0,
            doc_page: None,
        };

        let start = state.resolve_route(&start_path).map_err(|e| {
            Error::config_invalid(format!("navigation.start_path '{}': {}", start_path, e))
        })?;
        state.enter_current_route();
        if state.router.push(start) {
            info!("Starting at {}", state.router.current());
            state.enter_current_route();
        }
        Ok(state)
    }

    /// Default settings and the built-in content tree
    pub fn with_defaults(site_dir: PathBuf, system_theme: Option<ResolvedTheme>) -> Result<Self> {
        Self::new(
            site_dir,
            Settings::default(),
            ContentMetadataTree::builtin(),
            system_theme,
        )
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Enter the quitting phase and tear down the banner
    pub fn quit(&mut self) {
        self.phase = AppPhase::Quitting;
        self.unmount_banner();
    }

    // ─────────────────────────────────────────────────────────
    // Routing
    // ─────────────────────────────────────────────────────────

    pub fn route(&self) -> &Route {
        self.router.current()
    }

    pub fn can_go_back(&self) -> bool {
        self.router.can_go_back()
    }

    /// Return to the previous page, if any
    pub fn go_back(&mut self) -> bool {
        if !self.router.back() {
            debug!("No page to go back to");
            return false;
        }
        info!("Back to {}", self.router.current());
        self.enter_current_route();
        true
    }

    /// Parse `path` and check doc keys against the content tree
    fn resolve_route(&self, path: &str) -> Result<Route> {
        let route = Route::parse(path)?;
        if let Route::Docs { doc: Some(key) } = &route {
            let known = self
                .content
                .section("docs")
                .is_some_and(|section| section.get(key).is_some());
            if !known {
                return Err(Error::unknown_route(path));
            }
        }
        Ok(route)
    }

    /// Bring page-scoped state in line with the current route
    fn enter_current_route(&mut self) {
        let route = self.router.current().clone();

        if route.is_home() {
            if self.banner.is_none() {
                self.mount_banner();
            }
        } else {
            self.unmount_banner();
        }

        self.doc_page = load_doc_page(&self.site_dir, &self.content, &route);
        if let Route::Docs { doc } = &route {
            let key = doc.as_deref().unwrap_or(mfront_core::content::INDEX_KEY);
            let position = self.doc_entries().iter().position(|e| e.key == key);
            if let Some(position) = position {
                self.doc_selected = position;
            }
        }
    }

    // ─────────────────────────────────────────────────────────
    // Banner
    // ─────────────────────────────────────────────────────────

    pub fn banner(&self) -> Option<&BannerState> {
        self.banner.as_ref()
    }

    pub fn banner_mut(&mut self) -> Option<&mut BannerState> {
        self.banner.as_mut()
    }

    pub fn banner_generation(&self) -> Option<u64> {
        self.banner.as_ref().map(BannerState::generation)
    }

    fn mount_banner(&mut self) {
        let generation = self.next_generation;
        self.next_generation += 1;

        match BannerState::mount(
            generation,
            self.labels.clone(),
            self.interval,
            &self.settings.banner.image,
            &self.image_policy,
        ) {
            Ok(banner) => self.banner = Some(banner),
            Err(e) => error!("Failed to mount banner: {}", e),
        }
    }

    fn unmount_banner(&mut self) {
        if let Some(banner) = self.banner.take() {
            banner.unmount();
        }
    }

    /// Advance the banner label; ticks for other generations are ignored
    pub fn on_banner_tick(&mut self, generation: u64) -> bool {
        match self.banner.as_mut() {
            Some(banner) => banner.on_timer(generation),
            None => {
                trace!("Banner tick {} with no banner mounted", generation);
                false
            }
        }
    }

    // ─────────────────────────────────────────────────────────
    // Theme & Assets
    // ─────────────────────────────────────────────────────────

    pub fn resolved_theme(&self) -> ResolvedTheme {
        self.theme.resolved()
    }

    /// Logo for the current resolved theme (memoized)
    pub fn logo(&mut self) -> &AssetRef {
        let theme = self.theme.resolved();
        self.logo.get(theme)
    }

    pub fn logo_asset(&self) -> &DerivedAsset {
        &self.logo
    }

    // ─────────────────────────────────────────────────────────
    // Docs sidebar
    // ─────────────────────────────────────────────────────────

    /// Visible entries of the docs section, in sidebar order
    pub fn doc_entries(&self) -> Vec<&MetaEntry> {
        self.content.visible_entries("docs")
    }

    pub fn select_previous_doc(&mut self) {
        let len = self.doc_entries().len();
        if len > 0 {
            self.doc_selected = (self.doc_selected + len - 1) % len;
        }
    }

    pub fn select_next_doc(&mut self) {
        let len = self.doc_entries().len();
        if len > 0 {
            self.doc_selected = (self.doc_selected + 1) % len;
        }
    }

    /// Path of the highlighted sidebar entry
    pub fn selected_doc_path(&self) -> Option<String> {
        let entries = self.doc_entries();
        let entry = entries.get(self.doc_selected)?;
        let route = if entry.key == mfront_core::content::INDEX_KEY {
            Route::Docs { doc: None }
        } else {
            Route::docs(entry.key.clone())
        };
        Some(route.path())
    }
}

impl NavigationAction for AppState {
    fn navigate_to(&mut self, path: &str) {
        let route = match self.resolve_route(path) {
            Ok(route) => route,
            Err(e) => {
                warn!("Ignoring navigation: {}", e);
                return;
            }
        };

        if !self.router.push(route) {
            trace!("Already at {}", path);
            return;
        }

        info!("Navigated to {}", self.router.current());
        self.enter_current_route();
    }
}
