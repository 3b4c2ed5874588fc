//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use mfront_app::AppState;
use mfront_core::content::INDEX_KEY;
use mfront_core::navigation::DEMOS_PATH;
use mfront_core::Route;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::Palette;

const DOCS_SECTION: &str = "docs";

/// Render the complete UI (View function in TEA)
///
/// Takes `&mut` only for the memoized logo lookup.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();
    let palette = Palette::for_theme(state.resolved_theme());

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        area,
    );

    let areas = layout::create(area);
    let logo = state.logo().clone();
    let route = state.route().clone();

    frame.render_widget(
        widgets::Header::new(&logo, state.content.top_nav(), &route, palette),
        areas.header,
    );

    match route {
        Route::Home => render_home(frame, areas.body, state, palette),
        Route::Docs { .. } => render_docs(frame, areas.body, state, palette),
        Route::Demos => render_demos(frame, areas.body, state, palette),
    }

    frame.render_widget(
        widgets::StatusBar::new(&route, state.theme, palette),
        areas.status,
    );
}

fn render_home(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let Some(banner) = state.banner() else {
        return;
    };
    let areas = layout::banner(area);

    frame.render_widget(
        widgets::Banner::new(
            banner,
            &state.settings.banner.title,
            &state.settings.banner.description,
            palette,
        ),
        areas.copy,
    );
    if let Some(image_area) = areas.image {
        frame.render_widget(
            widgets::HeroImagePanel::new(banner.hero(), palette),
            image_area,
        );
    }
}

fn render_docs(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let Some(page) = state.doc_page.as_ref() else {
        return;
    };
    let areas = layout::docs(
        area,
        page.options.sidebar,
        page.options.toc && !page.toc.is_empty(),
    );

    if let Some(sidebar_area) = areas.sidebar {
        let title = state
            .content
            .root()
            .get(DOCS_SECTION)
            .map(|e| e.title.as_str())
            .unwrap_or("Docs");
        frame.render_widget(
            widgets::Sidebar::new(title, state.doc_entries(), palette)
                .selected(state.doc_selected)
                .current(&page.key),
            sidebar_area,
        );
    }

    frame.render_widget(widgets::DocPageView::new(page, palette), areas.content);

    if let Some(toc_area) = areas.toc {
        frame.render_widget(widgets::TableOfContents::new(&page.toc, palette), toc_area);
    }
}

fn render_demos(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let title = state
        .content
        .entry(DEMOS_PATH)
        .map(|e| e.title.as_str())
        .unwrap_or("Demos");
    let topics = state
        .doc_entries()
        .into_iter()
        .filter(|e| e.key != INDEX_KEY)
        .collect();

    frame.render_widget(widgets::DemosPage::new(title, topics, palette), area);
}
