//! List View handlers: search, row cursor and pagination controls

use rickdex_core::Pagination;
use tracing::debug;

use crate::list_view_state::{ListFocus, ListViewState};
use crate::message::Message;
use crate::route::Route;
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

pub fn handle_search_input(state: &mut AppState, text: String) -> UpdateResult {
    if let Some(list) = state.list_mut() {
        list.set_query(text);
    }
    UpdateResult::none()
}

pub fn handle_focus_search(state: &mut AppState) -> UpdateResult {
    if let Some(list) = state.list_mut() {
        list.focus = ListFocus::Search;
    }
    UpdateResult::none()
}

pub fn handle_focus_table(state: &mut AppState) -> UpdateResult {
    if let Some(list) = state.list_mut() {
        list.focus = ListFocus::Table;
    }
    UpdateResult::none()
}

/// Apply a cursor movement to the mounted list
pub fn handle_select(
    state: &mut AppState,
    movement: impl FnOnce(&mut ListViewState),
) -> UpdateResult {
    if let Some(list) = state.list_mut() {
        movement(list);
    }
    UpdateResult::none()
}

/// Navigate to the highlighted character's profile
pub fn handle_open_selected(state: &mut AppState) -> UpdateResult {
    match state
        .list()
        .and_then(|list| list.selected_character())
        .map(|character| character.id)
    {
        Some(id) => UpdateResult::message(Message::Navigate(Route::Profile { id })),
        None => UpdateResult::none(),
    }
}

/// Run a pagination control. `target` yields the page the control leads to,
/// or `None` when the control is hidden or disabled, in which case nothing is
/// requested.
pub fn handle_page_control(
    state: &mut AppState,
    target: impl FnOnce(&Pagination) -> Option<u32>,
) -> UpdateResult {
    let Some(page) = state.list().and_then(|list| target(&list.pagination)) else {
        debug!("Pagination control unavailable, ignoring");
        return UpdateResult::none();
    };

    let request = state.next_request_id();
    if let Some(list) = state.list_mut() {
        list.begin_request(page, request);
    }
    debug!("Requesting page {} ({})", page, request);
    UpdateResult::action(UpdateAction::FetchPage { request, page })
}
