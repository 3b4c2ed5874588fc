//! Documentation page model
//!
//! Titles, breadcrumbs and display options come from the content tree.
//! Body text is read from `<site>/content/docs/<key>.md` when present.

use std::path::{Path, PathBuf};

use mfront_core::content::INDEX_KEY;
use mfront_core::prelude::*;
use mfront_core::{ContentMetadataTree, DisplayOptions, Route};

/// Heading shown in a page's table of contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    /// 1 for `#`, 2 for `##`, ...
    pub level: u8,
    pub title: String,
}

/// Everything needed to render one docs page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocPage {
    pub path: String,
    pub key: String,
    pub title: String,
    pub breadcrumb: Vec<String>,
    pub options: DisplayOptions,
    pub body: Vec<String>,
    pub toc: Vec<TocEntry>,
}

/// Markdown source for a doc key
pub fn doc_source_path(site_dir: &Path, key: &str) -> PathBuf {
    site_dir.join("content").join("docs").join(format!("{}.md", key))
}

/// Build the page for a docs route; `None` for non-docs routes or unknown keys
pub fn load_doc_page(
    site_dir: &Path,
    content: &ContentMetadataTree,
    route: &Route,
) -> Option<DocPage> {
    let Route::Docs { doc } = route else {
        return None;
    };
    let key = doc.as_deref().unwrap_or(INDEX_KEY);
    let path = route.path();
    let entry = content.content_entry(&path)?;

    let body = read_body(&doc_source_path(site_dir, key));
    let options = content.display_options(&path);
    let toc = if options.toc {
        extract_toc(&body)
    } else {
        Vec::new()
    };

    Some(DocPage {
        key: key.to_string(),
        title: entry.title.clone(),
        breadcrumb: content
            .breadcrumb(&path)
            .into_iter()
            .map(str::to_string)
            .collect(),
        options,
        body,
        toc,
        path,
    })
}

fn read_body(path: &Path) -> Vec<String> {
    match std::fs::read_to_string(path) {
        Ok(text) => text.lines().map(str::to_string).collect(),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("No page source at {:?}", path);
            Vec::new()
        }
        Err(e) => {
            warn!("Failed to read {:?}: {}", path, e);
            Vec::new()
        }
    }
}

/// ATX headings outside fenced code blocks
pub fn extract_toc(lines: &[String]) -> Vec<TocEntry> {
    let mut in_fence = false;
    let mut toc = Vec::new();

    for line in lines {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```") || trimmed.starts_with("~~~") {
            in_fence = !in_fence;
            continue;
        }
        if in_fence {
            continue;
        }

        let level = trimmed.chars().take_while(|c| *c == '#').count();
        if (1..=6).contains(&level) {
            let rest = &trimmed[level..];
            if rest.starts_with(' ') {
                let title = rest.trim().trim_end_matches('#').trim_end();
                if !title.is_empty() {
                    toc.push(TocEntry {
                        level: level as u8,
                        title: title.to_string(),
                    });
                }
            }
        }
    }
    toc
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn lines(text: &str) -> Vec<String> {
        text.lines().map(str::to_string).collect()
    }

    #[test]
    fn test_extract_toc_levels() {
        let toc = extract_toc(&lines(
            "# Web Assembly\ntext\n## Why WASM ##\n#hashtag\n### Tooling",
        ));
        assert_eq!(
            toc,
            vec![
                TocEntry {
                    level: 1,
                    title: "Web Assembly".to_string()
                },
                TocEntry {
                    level: 2,
                    title: "Why WASM".to_string()
                },
                TocEntry {
                    level: 3,
                    title: "Tooling".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_extract_toc_skips_code_fences() {
        let toc = extract_toc(&lines("# Real\n```sh\n# not a heading\n```\n## Also real"));
        let titles: Vec<&str> = toc.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Real", "Also real"]);
    }

    #[test]
    fn test_load_doc_page_without_source() {
        let temp = tempdir().unwrap();
        let tree = ContentMetadataTree::builtin();

        let page = load_doc_page(temp.path(), &tree, &Route::docs("wasm")).unwrap();
        assert_eq!(page.title, "Web Assembly");
        assert_eq!(page.breadcrumb, vec!["Documentation", "Web Assembly"]);
        assert!(page.body.is_empty());
        assert!(page.toc.is_empty());
    }

    #[test]
    fn test_load_doc_page_reads_markdown() {
        let temp = tempdir().unwrap();
        let path = doc_source_path(temp.path(), "pwa");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "# PWAs\nInstallable web apps.\n## Service Workers\n").unwrap();

        let tree = ContentMetadataTree::builtin();
        let page = load_doc_page(temp.path(), &tree, &Route::docs("pwa")).unwrap();

        assert_eq!(page.body.len(), 3);
        assert_eq!(page.toc.len(), 2);
        assert_eq!(page.toc[1].title, "Service Workers");
    }

    #[test]
    fn test_docs_index_page() {
        let temp = tempdir().unwrap();
        let tree = ContentMetadataTree::builtin();

        let page = load_doc_page(temp.path(), &tree, &Route::Docs { doc: None }).unwrap();
        assert_eq!(page.key, "index");
        assert_eq!(page.title, "Introduction");
        assert_eq!(page.path, "/docs");
    }

    #[test]
    fn test_non_docs_routes_have_no_page() {
        let temp = tempdir().unwrap();
        let tree = ContentMetadataTree::builtin();
        assert!(load_doc_page(temp.path(), &tree, &Route::Home).is_none());
        assert!(load_doc_page(temp.path(), &tree, &Route::docs("missing")).is_none());
    }
}
