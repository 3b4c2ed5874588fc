//! Landing page banner: rotating label, call-to-action buttons, hero image

use mfront_app::{BannerButton, BannerState, HeroImage};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Padding, Paragraph, Widget, Wrap},
};

use crate::theme::{styles, Palette};

pub const EXPLORING_PREFIX: &str = "Currently Exploring: ";

pub struct Banner<'a> {
    banner: &'a BannerState,
    title: &'a str,
    description: &'a str,
    palette: &'a Palette,
}

impl<'a> Banner<'a> {
    pub fn new(
        banner: &'a BannerState,
        title: &'a str,
        description: &'a str,
        palette: &'a Palette,
    ) -> Self {
        Self {
            banner,
            title,
            description,
            palette,
        }
    }

    fn button(&self, button: BannerButton) -> Span<'static> {
        let focused = self.banner.focus() == button;
        let text = if focused {
            format!("[ {} ]", button.label())
        } else {
            format!("  {}  ", button.label())
        };
        let style = match button {
            BannerButton::StartLearning => styles::button_primary(self.palette, focused),
            BannerButton::ExploreDemos => styles::button_secondary(self.palette, focused),
        };
        Span::styled(text, style)
    }
}

impl Widget for Banner<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let lines = vec![
            Line::from(Span::styled(self.title, styles::heading(p))),
            Line::default(),
            Line::from(vec![
                Span::styled(EXPLORING_PREFIX, styles::text_muted(p)),
                Span::styled(self.banner.current_label(), styles::accent_bold(p)),
            ]),
            Line::default(),
            Line::from(Span::styled(self.description, styles::text(p))),
            Line::default(),
            Line::from(vec![
                self.button(BannerButton::StartLearning),
                Span::raw("  "),
                self.button(BannerButton::ExploreDemos),
            ]),
        ];

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().padding(Padding::new(2, 2, 1, 0)))
            .render(area, buf);
    }
}

/// Hero image stand-in: alt text and source, or a placeholder when the host
/// is not allowed
pub struct HeroImagePanel<'a> {
    hero: &'a HeroImage,
    palette: &'a Palette,
}

impl<'a> HeroImagePanel<'a> {
    pub fn new(hero: &'a HeroImage, palette: &'a Palette) -> Self {
        Self { hero, palette }
    }
}

impl Widget for HeroImagePanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let host = self.hero.host().unwrap_or("local asset");

        let lines = if self.hero.allowed {
            vec![
                Line::default(),
                Line::from(Span::styled(
                    self.hero.alt,
                    styles::text(p).add_modifier(Modifier::ITALIC),
                )),
                Line::from(Span::styled(
                    format!("{}x{}", self.hero.width, self.hero.height),
                    styles::text_muted(p),
                )),
                Line::from(Span::styled(host, styles::text_muted(p))),
            ]
        } else {
            vec![
                Line::default(),
                Line::from(Span::styled("Image unavailable", styles::warning(p))),
                Line::from(Span::styled(
                    format!("{} is not an allowed image host", host),
                    styles::text_muted(p),
                )),
            ]
        };

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(styles::panel(p, false))
            .render(area, buf);
    }
}
