//! Demos page placeholder

use mfront_core::MetaEntry;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::{styles, Palette};

pub const DEMOS_INTRO: &str = "Interactive playgrounds for each topic are on the way.";

pub struct DemosPage<'a> {
    title: &'a str,
    /// Topics that will get a playground
    topics: Vec<&'a MetaEntry>,
    palette: &'a Palette,
}

impl<'a> DemosPage<'a> {
    pub fn new(title: &'a str, topics: Vec<&'a MetaEntry>, palette: &'a Palette) -> Self {
        Self {
            title,
            topics,
            palette,
        }
    }
}

impl Widget for DemosPage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let mut lines = vec![
            Line::from(Span::styled(self.title, styles::accent_bold(p))),
            Line::default(),
            Line::from(Span::styled(DEMOS_INTRO, styles::text(p))),
            Line::default(),
        ];
        lines.extend(self.topics.iter().map(|topic| {
            Line::from(vec![
                Span::styled("• ", styles::accent(p)),
                Span::styled(topic.title.clone(), styles::text(p)),
                Span::styled(" (coming soon)", styles::text_muted(p)),
            ])
        }));

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(styles::panel(p, false))
            .render(area, buf);
    }
}
