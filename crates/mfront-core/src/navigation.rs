//! Navigation boundary
//!
//! [`NavigationAction`] is the only thing UI code needs to trigger a page
//! transition. [`Route`] is the parsed form of the paths the site serves.

use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};

/// Destination of the "Start Learning" button
pub const DOCS_PATH: &str = "/docs";
/// Destination of the "Explore Demos" button
pub const DEMOS_PATH: &str = "/demos";
pub const HOME_PATH: &str = "/";

/// Fire-and-forget page transition.
///
/// Implementations own route validation; callers never learn whether the
/// transition happened.
pub trait NavigationAction {
    fn navigate_to(&mut self, path: &str);
}

/// A page the site can show
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(tag = "page", rename_all = "lowercase")]
pub enum Route {
    #[default]
    Home,
    /// Documentation; `None` is the section index
    Docs { doc: Option<String> },
    Demos,
}

impl Route {
    /// Parse a site path such as `/`, `/docs`, `/docs/wasm` or `/demos`
    pub fn parse(path: &str) -> Result<Self> {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] | ["index"] => Ok(Route::Home),
            ["docs"] | ["docs", "index"] => Ok(Route::Docs { doc: None }),
            ["docs", doc] => Ok(Route::Docs {
                doc: Some((*doc).to_string()),
            }),
            ["demos"] => Ok(Route::Demos),
            _ => Err(Error::unknown_route(path)),
        }
    }

    pub fn docs(doc: impl Into<String>) -> Self {
        Route::Docs {
            doc: Some(doc.into()),
        }
    }

    /// Canonical path for this route
    pub fn path(&self) -> String {
        match self {
            Route::Home => HOME_PATH.to_string(),
            Route::Docs { doc: None } => DOCS_PATH.to_string(),
            Route::Docs { doc: Some(doc) } => format!("{}/{}", DOCS_PATH, doc),
            Route::Demos => DEMOS_PATH.to_string(),
        }
    }

    pub fn is_home(&self) -> bool {
        matches!(self, Route::Home)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}
