//! Landing page banner state
//!
//! A [`BannerState`] exists only while the home page is shown. Each mount
//! gets a fresh generation number and a fresh [`CyclicLabelState`], so no
//! label position survives a remount and timer ticks addressed to an older
//! mount are ignored.

use std::time::Duration;

use mfront_core::prelude::*;
use mfront_core::{navigation, CyclicLabelState, ImageHostPolicy, LabelSet, NavigationAction};

/// The two call-to-action buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BannerButton {
    #[default]
    StartLearning,
    ExploreDemos,
}

impl BannerButton {
    pub fn next(self) -> Self {
        match self {
            BannerButton::StartLearning => BannerButton::ExploreDemos,
            BannerButton::ExploreDemos => BannerButton::StartLearning,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BannerButton::StartLearning => "Start Learning",
            BannerButton::ExploreDemos => "Explore Demos",
        }
    }

    /// Route the button navigates to
    pub fn path(self) -> &'static str {
        match self {
            BannerButton::StartLearning => navigation::DOCS_PATH,
            BannerButton::ExploreDemos => navigation::DEMOS_PATH,
        }
    }

    /// Send the navigator to this button's destination
    pub fn activate(self, navigator: &mut dyn NavigationAction) {
        debug!("Activated '{}'", self.label());
        navigator.navigate_to(self.path());
    }
}

/// Hero image reference after the host policy check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroImage {
    pub src: String,
    pub alt: &'static str,
    pub width: u16,
    pub height: u16,
    /// False when `src` is remote and not on the allow-list
    pub allowed: bool,
}

impl HeroImage {
    pub fn new(src: &str, policy: &ImageHostPolicy) -> Self {
        let allowed = policy.allows(src);
        if !allowed {
            warn!("Banner image host is not in images.remote_patterns: {}", src);
        }
        Self {
            src: src.to_string(),
            alt: "Developer working",
            width: 500,
            height: 500,
            allowed,
        }
    }

    /// Host part of a remote `src`, for display
    pub fn host(&self) -> Option<&str> {
        let rest = self.src.split_once("://")?.1;
        rest.split(['/', '?', '#']).next()
    }
}

/// Mounted banner: label cycle, button focus and hero image
#[derive(Debug)]
pub struct BannerState {
    generation: u64,
    cycle: CyclicLabelState,
    focus: BannerButton,
    hero: HeroImage,
}

impl BannerState {
    /// Build and start the banner for mount number `generation`
    pub fn mount(
        generation: u64,
        labels: LabelSet,
        interval: Duration,
        image: &str,
        policy: &ImageHostPolicy,
    ) -> Result<Self> {
        let mut cycle = CyclicLabelState::new(labels, interval)?;
        cycle.subscribe(move |index, label| {
            trace!("Banner {} now exploring {} (#{})", generation, label, index);
        });
        cycle.start();
        debug!("Mounted banner generation {}", generation);

        Ok(Self {
            generation,
            cycle,
            focus: BannerButton::default(),
            hero: HeroImage::new(image, policy),
        })
    }

    /// Stop the label cycle and drop the banner
    pub fn unmount(mut self) {
        self.cycle.stop();
        debug!("Unmounted banner generation {}", self.generation);
    }

    /// Advance the label if the tick belongs to this mount
    pub fn on_timer(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            trace!(
                "Dropping stale banner tick (generation {}, mounted {})",
                generation,
                self.generation
            );
            return false;
        }
        self.cycle.tick()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn interval(&self) -> Duration {
        self.cycle.interval()
    }

    pub fn current_label(&self) -> &str {
        self.cycle.current_label()
    }

    pub fn cycle(&self) -> &CyclicLabelState {
        &self.cycle
    }

    pub fn focus(&self) -> BannerButton {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn hero(&self) -> &HeroImage {
        &self.hero
    }
}
