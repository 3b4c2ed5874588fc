//! Declarative content metadata tree
//!
//! Describes the site's navigable pages: a root section (Home, Documentation,
//! Demos) and one child section per top-level page that has sub-pages. Entry
//! order is display order. The tree is pure configuration; nothing here is
//! computed from page content.
//!
//! A site can override the built-in tree with `content/_meta.toml`:
//!
//! ```toml
//! [[root]]
//! key = "index"
//! title = "Home"
//! type = "page"
//! display = "hidden"
//! theme = { breadcrumb = false, layout = "full", sidebar = false, toc = false }
//!
//! [[sections.docs]]
//! key = "wasm"
//! title = "Web Assembly"
//! type = "doc"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result, ResultExt};

/// Location of the override file relative to the site directory
pub const META_FILE: &str = "content/_meta.toml";

/// Key of the entry a section renders for its own path
pub const INDEX_KEY: &str = "index";

/// Kind of navigation entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    /// Top-level page shown in the navbar
    Page,
    /// Documentation page shown in the sidebar
    Doc,
}

/// Whether an entry appears in navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Display {
    #[default]
    Normal,
    Hidden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageLayout {
    #[default]
    Default,
    /// Full-width page with no chrome around the content
    Full,
}

/// Per-page chrome switches
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayOptions {
    #[serde(default = "default_true")]
    pub breadcrumb: bool,
    #[serde(default = "default_true")]
    pub sidebar: bool,
    #[serde(default = "default_true")]
    pub toc: bool,
    #[serde(default)]
    pub layout: PageLayout,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typesetting: Option<String>,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            breadcrumb: true,
            sidebar: true,
            toc: true,
            layout: PageLayout::Default,
            typesetting: None,
        }
    }
}

fn default_true() -> bool {
    true
}

/// A single navigation entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaEntry {
    pub key: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: EntryType,
    #[serde(default)]
    pub display: Display,
    #[serde(default, rename = "theme", skip_serializing_if = "Option::is_none")]
    pub options: Option<DisplayOptions>,
}

impl MetaEntry {
    pub fn new(key: impl Into<String>, title: impl Into<String>, kind: EntryType) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            kind,
            display: Display::Normal,
            options: None,
        }
    }

    pub fn page(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self::new(key, title, EntryType::Page)
    }

    pub fn doc(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self::new(key, title, EntryType::Doc)
    }

    pub fn hidden(mut self) -> Self {
        self.display = Display::Hidden;
        self
    }

    pub fn with_options(mut self, options: DisplayOptions) -> Self {
        self.options = Some(options);
        self
    }

    pub fn is_visible(&self) -> bool {
        self.display == Display::Normal
    }

    /// Effective display options (explicit or defaults)
    pub fn display_options(&self) -> DisplayOptions {
        self.options.clone().unwrap_or_default()
    }
}

/// Ordered list of sibling entries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetaSection {
    entries: Vec<MetaEntry>,
}

impl MetaSection {
    pub fn new(entries: Vec<MetaEntry>) -> Self {
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&MetaEntry> {
        self.entries.iter().find(|e| e.key == key)
    }

    pub fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.key == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MetaEntry> {
        self.entries.iter()
    }

    /// Entries that are not hidden, in display order
    pub fn visible(&self) -> Vec<&MetaEntry> {
        self.entries.iter().filter(|e| e.is_visible()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Root section plus one child section per top-level key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentMetadataTree {
    root: MetaSection,
    #[serde(default)]
    sections: BTreeMap<String, MetaSection>,
}

impl ContentMetadataTree {
    pub fn new(root: MetaSection, sections: BTreeMap<String, MetaSection>) -> Self {
        Self { root, sections }
    }

    /// The site's own navigation structure
    pub fn builtin() -> Self {
        let root = MetaSection::new(vec![
            MetaEntry::page(INDEX_KEY, "Home")
                .hidden()
                .with_options(DisplayOptions {
                    breadcrumb: false,
                    sidebar: false,
                    toc: false,
                    layout: PageLayout::Full,
                    typesetting: Some("article".to_string()),
                }),
            MetaEntry::page("docs", "Documentation"),
            MetaEntry::page("demos", "Demos"),
        ]);

        let docs = MetaSection::new(vec![
            MetaEntry::doc(INDEX_KEY, "Introduction"),
            MetaEntry::doc("pwa", "Progressive Web Apps"),
            MetaEntry::doc("vui", "Voice User Interfaces"),
            MetaEntry::doc("wasm", "Web Assembly"),
            MetaEntry::doc("animations", "Animation Libraries"),
            MetaEntry::doc("best-practices", "Best Practices"),
            MetaEntry::doc("micro-frontends", "Micro Frontends"),
        ]);

        let mut sections = BTreeMap::new();
        sections.insert("docs".to_string(), docs);
        Self::new(root, sections)
    }

    /// Load `content/_meta.toml` from `site_dir`, or the built-in tree if absent
    pub fn load(site_dir: &Path) -> Result<Self> {
        let path = meta_file_path(site_dir);
        if !path.exists() {
            tracing::debug!("No content metadata at {:?}, using built-in tree", path);
            return Ok(Self::builtin());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse(&content, &path)
    }

    /// Parse override TOML; `origin` is only used in error messages
    pub fn parse(content: &str, origin: &Path) -> Result<Self> {
        let tree: Self =
            toml::from_str(content).map_err(|e| Error::content_parse(origin, e.to_string()))?;
        tree.validate(origin)?;
        tracing::debug!(
            "Loaded content metadata from {:?} ({} root entries, {} sections)",
            origin,
            tree.root.len(),
            tree.sections.len()
        );
        Ok(tree)
    }

    fn validate(&self, origin: &Path) -> Result<()> {
        if self.root.is_empty() {
            return Err(Error::content_parse(origin, "root section has no entries"));
        }
        let entries = self
            .root
            .iter()
            .chain(self.sections.values().flat_map(|section| section.iter()));
        for entry in entries {
            if !is_safe_key(&entry.key) {
                return Err(Error::content_parse(
                    origin,
                    format!("entry key '{}' must be a single path segment", entry.key),
                ));
            }
        }
        for key in self.sections.keys() {
            if self.root.get(key).is_none() {
                return Err(Error::content_parse(
                    origin,
                    format!("section '{}' has no matching root entry", key),
                ));
            }
        }
        Ok(())
    }

    pub fn root(&self) -> &MetaSection {
        &self.root
    }

    pub fn section(&self, key: &str) -> Option<&MetaSection> {
        self.sections.get(key)
    }

    /// Visible top-level pages for the navbar
    pub fn top_nav(&self) -> Vec<&MetaEntry> {
        self.root.visible()
    }

    /// Visible entries of a section in declared order; empty for unknown keys
    pub fn visible_entries(&self, section: &str) -> Vec<&MetaEntry> {
        self.section(section)
            .map(MetaSection::visible)
            .unwrap_or_default()
    }

    /// Entry rendered at `path` (`/`, `/docs`, `/docs/wasm`, ...)
    ///
    /// A top-level path resolves to the root entry; a nested path resolves
    /// inside the section named by its first segment.
    pub fn entry(&self, path: &str) -> Option<&MetaEntry> {
        match segments(path).as_slice() {
            [] => self.root.get(INDEX_KEY),
            [top] => self.root.get(top),
            [top, leaf] => self.section(top)?.get(leaf),
            _ => None,
        }
    }

    /// Entry whose content is shown at `path`.
    ///
    /// Same as [`entry`](Self::entry) except a top-level page with a section
    /// renders that section's `index` entry.
    pub fn content_entry(&self, path: &str) -> Option<&MetaEntry> {
        match segments(path).as_slice() {
            [top] => self
                .section(top)
                .and_then(|s| s.get(INDEX_KEY))
                .or_else(|| self.root.get(top)),
            _ => self.entry(path),
        }
    }

    /// Titles from the top-level page down to `path`
    pub fn breadcrumb(&self, path: &str) -> Vec<&str> {
        let segs = segments(path);
        let mut crumbs = Vec::new();
        if let Some(top) = segs.first() {
            if let Some(entry) = self.root.get(top) {
                crumbs.push(entry.title.as_str());
            }
            if let (Some(leaf), Some(section)) = (segs.get(1), self.section(top)) {
                if let Some(entry) = section.get(leaf) {
                    crumbs.push(entry.title.as_str());
                }
            }
        }
        crumbs
    }

    /// Display options for `path`; unknown paths get defaults
    pub fn display_options(&self, path: &str) -> DisplayOptions {
        self.entry(path)
            .map(MetaEntry::display_options)
            .unwrap_or_default()
    }

    /// Serialize back to the override file format
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }
}

impl Default for ContentMetadataTree {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Path of the override file under `site_dir`
pub fn meta_file_path(site_dir: &Path) -> PathBuf {
    site_dir.join(META_FILE)
}

/// Keys become URL segments and file names under `content/docs/`
fn is_safe_key(key: &str) -> bool {
    !key.is_empty() && !key.contains(['/', '\\']) && !key.contains("..")
}

fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}
