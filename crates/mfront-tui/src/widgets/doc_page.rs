//! Docs page body and its table of contents

use mfront_app::{DocPage, TocEntry};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::{styles, Palette};

pub const EMPTY_PAGE_TEXT: &str = "This page has no content yet.";
const BREADCRUMB_SEPARATOR: &str = " › ";

pub struct DocPageView<'a> {
    page: &'a DocPage,
    palette: &'a Palette,
}

impl<'a> DocPageView<'a> {
    pub fn new(page: &'a DocPage, palette: &'a Palette) -> Self {
        Self { page, palette }
    }

    fn breadcrumb(&self) -> Line<'a> {
        let p = self.palette;
        let mut spans = Vec::new();
        for (i, crumb) in self.page.breadcrumb.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(BREADCRUMB_SEPARATOR, styles::text_muted(p)));
            }
            spans.push(Span::styled(crumb.as_str(), styles::text_muted(p)));
        }
        Line::from(spans)
    }

    fn body_line(&self, line: &'a str) -> Line<'a> {
        let p = self.palette;
        let trimmed = line.trim_start();
        let hashes = trimmed.chars().take_while(|c| *c == '#').count();
        if hashes > 0 && trimmed[hashes..].starts_with(' ') {
            Line::from(Span::styled(trimmed[hashes..].trim(), styles::heading(p)))
        } else {
            Line::from(Span::styled(line, styles::text(p)))
        }
    }
}

impl Widget for DocPageView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let mut lines = Vec::new();

        if self.page.options.breadcrumb && !self.page.breadcrumb.is_empty() {
            lines.push(self.breadcrumb());
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(
            self.page.title.as_str(),
            styles::accent_bold(p),
        )));
        lines.push(Line::default());

        if self.page.body.is_empty() {
            lines.push(Line::from(Span::styled(EMPTY_PAGE_TEXT, styles::text_muted(p))));
        } else {
            lines.extend(self.page.body.iter().map(|l| self.body_line(l)));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(styles::panel(p, false))
            .render(area, buf);
    }
}

/// "On this page" list built from the page headings
pub struct TableOfContents<'a> {
    toc: &'a [TocEntry],
    palette: &'a Palette,
}

impl<'a> TableOfContents<'a> {
    pub fn new(toc: &'a [TocEntry], palette: &'a Palette) -> Self {
        Self { toc, palette }
    }
}

impl Widget for TableOfContents<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let lines: Vec<Line> = self
            .toc
            .iter()
            .map(|entry| {
                let indent = "  ".repeat(usize::from(entry.level.saturating_sub(1)));
                Line::from(vec![
                    Span::raw(indent),
                    Span::styled(entry.title.as_str(), styles::text(p)),
                ])
            })
            .collect();

        Paragraph::new(lines)
            .block(styles::panel(p, false).title(" On this page "))
            .render(area, buf);
    }
}
