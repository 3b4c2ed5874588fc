//! Theme-aware logo
//!
//! Terminals can't show the SVG itself, so the logo renders as the wordmark
//! followed by the selected asset's file name.

use mfront_core::AssetRef;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{styles, Palette};

pub const WORDMARK: &str = "DEPT";

pub struct Logo<'a> {
    asset: &'a AssetRef,
    palette: &'a Palette,
}

impl<'a> Logo<'a> {
    pub fn new(asset: &'a AssetRef, palette: &'a Palette) -> Self {
        Self { asset, palette }
    }

    pub fn line(&self) -> Line<'a> {
        Line::from(vec![
            Span::styled(WORDMARK, styles::accent_bold(self.palette)),
            Span::raw(" "),
            Span::styled(self.asset.file_name(), styles::text_muted(self.palette)),
        ])
    }
}

impl Widget for Logo<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        buf.set_line(area.x, area.y, &self.line(), area.width);
    }
}
