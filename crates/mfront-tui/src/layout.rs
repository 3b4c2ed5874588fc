//! Screen layout definitions for the TUI
//!
//! Every page shares a header (logo + navigation), a body and a one-line
//! status bar. The body is then split per page.

use ratatui::layout::{Constraint, Layout, Rect};

/// Minimum width before the banner hero image gets its own column
pub const BANNER_SPLIT_MIN_WIDTH: u16 = 70;

/// Minimum width before the docs table of contents is shown
pub const TOC_MIN_WIDTH: u16 = 90;

pub const SIDEBAR_WIDTH: u16 = 26;
pub const TOC_WIDTH: u16 = 24;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Logo and top navigation (bordered)
    pub header: Rect,

    /// Page content
    pub body: Rect,

    /// Route, theme and key hints
    pub status: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Top border + logo/nav row + bottom border
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        body: chunks[1],
        status: chunks[2],
    }
}

/// Banner areas: copy on the left, hero image on the right when it fits
#[derive(Debug, Clone, Copy)]
pub struct BannerAreas {
    pub copy: Rect,
    pub image: Option<Rect>,
}

pub fn banner(body: Rect) -> BannerAreas {
    if body.width < BANNER_SPLIT_MIN_WIDTH {
        return BannerAreas {
            copy: body,
            image: None,
        };
    }

    let [copy, image] =
        Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)]).areas(body);
    BannerAreas {
        copy,
        image: Some(image),
    }
}

/// Docs page columns; optional panes depend on display options and width
#[derive(Debug, Clone, Copy)]
pub struct DocsAreas {
    pub sidebar: Option<Rect>,
    pub content: Rect,
    pub toc: Option<Rect>,
}

pub fn docs(body: Rect, show_sidebar: bool, show_toc: bool) -> DocsAreas {
    let show_toc = show_toc && body.width >= TOC_MIN_WIDTH;

    let mut constraints = Vec::with_capacity(3);
    if show_sidebar {
        constraints.push(Constraint::Length(SIDEBAR_WIDTH));
    }
    constraints.push(Constraint::Min(20));
    if show_toc {
        constraints.push(Constraint::Length(TOC_WIDTH));
    }

    let chunks = Layout::horizontal(constraints).split(body);
    let mut chunks = chunks.iter().copied();

    let sidebar = if show_sidebar { chunks.next() } else { None };
    let content = chunks.next().unwrap_or(body);
    let toc = if show_toc { chunks.next() } else { None };

    DocsAreas {
        sidebar,
        content,
        toc,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area);

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.status.height, 1);
        assert_eq!(layout.body.height, 20); // 24 - 3 - 1
        assert_eq!(layout.status.y, 23);
    }

    #[test]
    fn test_banner_drops_image_on_narrow_screens() {
        let narrow = banner(Rect::new(0, 0, 60, 20));
        assert!(narrow.image.is_none());
        assert_eq!(narrow.copy.width, 60);

        let wide = banner(Rect::new(0, 0, 100, 20));
        assert_eq!(wide.copy.width, 60);
        assert_eq!(wide.image.unwrap().width, 40);
    }

    #[test]
    fn test_docs_columns() {
        let body = Rect::new(0, 0, 120, 20);
        let areas = docs(body, true, true);
        assert_eq!(areas.sidebar.unwrap().width, SIDEBAR_WIDTH);
        assert_eq!(areas.toc.unwrap().width, TOC_WIDTH);
        assert_eq!(areas.content.width, 120 - SIDEBAR_WIDTH - TOC_WIDTH);
    }

    #[test]
    fn test_docs_hides_toc_when_narrow() {
        let areas = docs(Rect::new(0, 0, 80, 20), true, true);
        assert!(areas.toc.is_none());
        assert_eq!(areas.content.width, 80 - SIDEBAR_WIDTH);
    }

    #[test]
    fn test_docs_without_sidebar() {
        let areas = docs(Rect::new(0, 0, 80, 20), false, false);
        assert!(areas.sidebar.is_none());
        assert_eq!(areas.content.width, 80);
    }
}
