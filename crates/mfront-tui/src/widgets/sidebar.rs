//! Docs sidebar listing the visible entries of the docs section

use mfront_core::MetaEntry;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{styles, Palette};

pub struct Sidebar<'a> {
    title: &'a str,
    entries: Vec<&'a MetaEntry>,
    /// Highlighted row (keyboard cursor)
    selected: usize,
    /// Key of the page being shown
    current: Option<&'a str>,
    palette: &'a Palette,
}

impl<'a> Sidebar<'a> {
    pub fn new(title: &'a str, entries: Vec<&'a MetaEntry>, palette: &'a Palette) -> Self {
        Self {
            title,
            entries,
            selected: 0,
            current: None,
            palette,
        }
    }

    pub fn selected(mut self, selected: usize) -> Self {
        self.selected = selected;
        self
    }

    pub fn current(mut self, key: &'a str) -> Self {
        self.current = Some(key);
        self
    }
}

impl Widget for Sidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let lines: Vec<Line> = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let is_current = self.current == Some(entry.key.as_str());
                let marker = if i == self.selected { "▸ " } else { "  " };
                let style = if i == self.selected {
                    styles::selected(p)
                } else if is_current {
                    styles::accent(p)
                } else {
                    styles::text(p)
                };
                Line::from(vec![
                    Span::styled(marker, styles::accent(p)),
                    Span::styled(entry.title.clone(), style),
                ])
            })
            .collect();

        let block = styles::panel(p, true).title(format!(" {} ", self.title));
        Paragraph::new(lines).block(block).render(area, buf);
    }
}
