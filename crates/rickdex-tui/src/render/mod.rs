//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use rickdex_app::{AppState, DetailViewState, ListFocus, ListViewState, Screen};

use super::{layout, widgets};
use crate::theme::palette;

/// Render the complete UI (View function in TEA)
///
/// Pure: reads state, never modifies it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let mut header = widgets::MainHeader::new(state.route());
    if state.is_loading() {
        header = header.loading(state.animation_frame);
    }

    match &state.screen {
        Screen::List(list) => {
            let areas = layout::list_layout(area);
            frame.render_widget(header, areas.header);
            render_list(frame, &areas, list, state);
        }
        Screen::Profile(detail) => {
            let areas = layout::profile_layout(area);
            frame.render_widget(header, areas.header);
            render_profile(frame, &areas, detail, state);
        }
    }
}

fn render_list(
    frame: &mut Frame,
    areas: &layout::ListAreas,
    list: &ListViewState,
    state: &AppState,
) {
    let rows = list.visible();
    let searching = list.focus == ListFocus::Search;

    frame.render_widget(
        widgets::SearchInput::new(&list.search_query, searching)
            .matches(rows.len(), list.characters.len()),
        areas.search,
    );

    frame.render_widget(
        widgets::CharacterTable::new(&rows, list.selected)
            .focused(!searching)
            .loading(list.is_loading() && list.characters.is_empty())
            .show_image_url(state.settings.ui.show_image_url),
        areas.table,
    );

    frame.render_widget(widgets::PaginationBar::new(&list.pagination), areas.pagination);
}

fn render_profile(
    frame: &mut Frame,
    areas: &layout::ProfileAreas,
    detail: &DetailViewState,
    state: &AppState,
) {
    frame.render_widget(
        widgets::ProfileCard::new(detail.character.as_ref())
            .show_image_url(state.settings.ui.show_image_url)
            .frame(state.animation_frame),
        areas.card,
    );
}
