//! # mfront-core - Core Domain Types
//!
//! Foundation crate for Mastering Frontend. Provides the label cycle state
//! machine, theme resolution, themed asset selection, the content metadata
//! tree, routes, and error handling.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing, toml, url, regex).
//!
//! ## Public API
//!
//! ### Label Cycle (`cycle`)
//! - [`CyclicLabelState`] - Rotating label with `start`/`tick`/`stop` and subscriptions
//! - [`LabelSet`] - Non-empty ordered label list
//!
//! ### Theme (`theme`, `asset`)
//! - [`ThemePreference`], [`ResolvedTheme`], [`ThemeState`] - Preference vs. drawn theme
//! - [`ThemeResolver`] - Source of the system preference
//! - [`ThemedAssetSelector`], [`DerivedAsset`] - Theme to asset mapping
//!
//! ### Content (`content`, `navigation`, `image_policy`)
//! - [`ContentMetadataTree`] - Declarative navigation entries
//! - [`Route`], [`NavigationAction`] - Page addressing and transitions
//! - [`ImageHostPolicy`] - Remote image allow-list
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use mfront_core::prelude::*;
//! ```

pub mod asset;
pub mod content;
pub mod cycle;
pub mod error;
pub mod image_policy;
pub mod logging;
pub mod navigation;
pub mod prelude;
pub mod theme;

// Re-export commonly used types at crate root for convenience
pub use asset::{AssetRef, DerivedAsset, ThemedAssetSelector};
pub use content::{
    ContentMetadataTree, Display, DisplayOptions, EntryType, MetaEntry, MetaSection, PageLayout,
};
pub use cycle::{CycleStatus, CyclicLabelState, LabelSet, SubscriptionId};
pub use error::{Error, Result, ResultExt};
pub use image_policy::{ImageHostPolicy, RemotePattern};
pub use navigation::{NavigationAction, Route};
pub use theme::{
    EnvThemeResolver, FixedThemeResolver, ResolvedTheme, ThemePreference, ThemeResolver,
    ThemeState,
};
