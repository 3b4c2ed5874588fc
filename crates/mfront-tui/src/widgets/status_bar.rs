//! Status bar widget
//!
//! Shows the current route, the theme preference and what it resolved to,
//! and the key hints for the current page.

use mfront_core::{Route, ThemeState};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{styles, Palette};

pub struct StatusBar<'a> {
    route: &'a Route,
    theme: ThemeState,
    palette: &'a Palette,
}

impl<'a> StatusBar<'a> {
    pub fn new(route: &'a Route, theme: ThemeState, palette: &'a Palette) -> Self {
        Self {
            route,
            theme,
            palette,
        }
    }

    /// (key, action) pairs for the current page
    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        match self.route {
            Route::Home => &[
                ("Tab", "focus"),
                ("Enter", "open"),
                ("d", "docs"),
                ("t", "theme"),
                ("q", "quit"),
            ],
            Route::Docs { .. } => &[
                ("↑↓", "select"),
                ("Enter", "open"),
                ("Esc", "back"),
                ("t", "theme"),
                ("q", "quit"),
            ],
            Route::Demos => &[("Esc", "back"), ("h", "home"), ("t", "theme"), ("q", "quit")],
        }
    }

    fn line(&self) -> Line<'static> {
        let p = self.palette;
        let separator = Span::styled(" │ ", styles::text_muted(p));

        let mut spans = vec![
            Span::raw(" "),
            Span::styled(self.route.path(), styles::accent(p)),
            separator.clone(),
            Span::styled(
                format!(
                    "theme: {} ({})",
                    self.theme.preference(),
                    self.theme.resolved()
                ),
                styles::text(p),
            ),
            separator,
        ];
        for (i, (key, action)) in self.hints().iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(*key, styles::warning(p)));
            spans.push(Span::styled(format!(" {}", action), styles::text_muted(p)));
        }
        Line::from(spans)
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        buf.set_style(area, Style::default().bg(self.palette.surface));
        buf.set_line(area.x, area.y, &self.line(), area.width);
    }
}
