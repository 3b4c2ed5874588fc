//! Header bar: logo on the left, top-level navigation on the right

use mfront_core::{AssetRef, MetaEntry, Route};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{styles, Palette};

use super::Logo;

pub struct Header<'a> {
    logo: &'a AssetRef,
    nav: Vec<&'a MetaEntry>,
    route: &'a Route,
    palette: &'a Palette,
}

impl<'a> Header<'a> {
    pub fn new(
        logo: &'a AssetRef,
        nav: Vec<&'a MetaEntry>,
        route: &'a Route,
        palette: &'a Palette,
    ) -> Self {
        Self {
            logo,
            nav,
            route,
            palette,
        }
    }

    fn is_current(&self, entry: &MetaEntry) -> bool {
        match self.route {
            Route::Home => false,
            Route::Docs { .. } => entry.key == "docs",
            Route::Demos => entry.key == "demos",
        }
    }

    fn nav_line(&self) -> Line<'a> {
        let mut spans = Vec::new();
        for entry in self.nav.iter().copied() {
            let style = if self.is_current(entry) {
                styles::accent_bold(self.palette)
            } else {
                styles::text(self.palette)
            };
            spans.push(Span::styled(entry.title.as_str(), style));
            spans.push(Span::raw("  "));
        }
        Line::from(spans)
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel(self.palette, false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width < 2 {
            return;
        }

        let row = Rect::new(inner.x + 1, inner.y, inner.width - 1, 1);
        let logo = Logo::new(self.logo, self.palette);
        let logo_width = logo.line().width() as u16;
        logo.render(row, buf);

        let nav = self.nav_line();
        let nav_width = nav.width() as u16;
        if logo_width + nav_width + 2 <= row.width {
            let x = row.x + row.width - nav_width;
            buf.set_line(x, row.y, &nav, nav_width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use mfront_core::ContentMetadataTree;

    #[test]
    fn test_header_shows_logo_and_nav() {
        let tree = ContentMetadataTree::builtin();
        let logo = AssetRef::new("/dept-logo.svg", 111, 28);
        let route = Route::Demos;
        let palette = crate::theme::palette::LIGHT;

        let mut term = TestTerminal::new();
        let area = Rect::new(0, 0, 80, 3);
        term.render_widget(Header::new(&logo, tree.top_nav(), &route, &palette), area);

        assert!(term.line_contains(1, "DEPT dept-logo.svg"));
        assert!(term.line_contains(1, "Documentation  Demos"));
        assert!(!term.buffer_contains("Home"));
    }

    #[test]
    fn test_header_drops_nav_when_narrow() {
        let tree = ContentMetadataTree::builtin();
        let logo = AssetRef::new("/dept-logo-white.svg", 111, 28);
        let route = Route::Home;
        let palette = crate::theme::palette::DARK;

        let mut term = TestTerminal::with_size(30, 3);
        let area = term.area();
        term.render_widget(Header::new(&logo, tree.top_nav(), &route, &palette), area);

        assert!(term.buffer_contains("DEPT"));
        assert!(!term.buffer_contains("Documentation"));
    }
}
