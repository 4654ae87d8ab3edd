//! Route changes and fetch result handlers

use rickdex_core::{Character, CharacterPage};
use tracing::{debug, info};

use crate::request::RequestId;
use crate::route::Route;
use crate::state::AppState;

use super::UpdateResult;

/// Push `route` and mount it. Navigating to the active route does nothing.
pub fn handle_navigate(state: &mut AppState, route: Route) -> UpdateResult {
    if state.route() == route {
        debug!("Already at {}, ignoring navigation", route);
        return UpdateResult::none();
    }

    info!("Navigating to {}", route);
    state.navigator.push(route);
    UpdateResult::action(state.mount())
}

/// Pop the history and remount whatever is now on top
pub fn handle_back(state: &mut AppState) -> UpdateResult {
    match state.navigator.back() {
        Some(route) => {
            info!("Back to {}", route);
            UpdateResult::action(state.mount())
        }
        None => {
            debug!("No history to go back to");
            UpdateResult::none()
        }
    }
}

pub fn handle_page_loaded(
    state: &mut AppState,
    request: RequestId,
    page: CharacterPage,
) -> UpdateResult {
    let Some(list) = state.list_mut() else {
        debug!("Dropping page reply {}, list not mounted", request);
        return UpdateResult::none();
    };

    let count = page.results.len();
    if list.apply_page(request, page) {
        debug!("Applied {} characters from {}", count, request);
    } else {
        debug!("Dropping stale page reply {}", request);
    }
    UpdateResult::none()
}

/// The list keeps whatever it showed before
pub fn handle_page_load_failed(
    state: &mut AppState,
    request: RequestId,
    page: u32,
    error: &str,
) -> UpdateResult {
    if let Some(list) = state.list_mut() {
        if list.fail_request(request) {
            debug!("Page {} unavailable ({}), keeping previous rows", page, error);
        }
    }
    UpdateResult::none()
}

pub fn handle_character_loaded(
    state: &mut AppState,
    request: RequestId,
    character: Character,
) -> UpdateResult {
    let Some(detail) = state.detail_mut() else {
        debug!("Dropping character reply {}, profile not mounted", request);
        return UpdateResult::none();
    };

    let id = character.id;
    if detail.apply_character(request, character) {
        debug!("Applied character {} from {}", id, request);
    } else {
        debug!("Dropping stale character reply {}", request);
    }
    UpdateResult::none()
}

/// The profile stays on its loading placeholder
pub fn handle_character_load_failed(
    state: &mut AppState,
    request: RequestId,
    id: u32,
    error: &str,
) -> UpdateResult {
    if let Some(detail) = state.detail_mut() {
        if detail.fail_request(request) {
            debug!("Character {} unavailable ({}), staying on placeholder", id, error);
        }
    }
    UpdateResult::none()
}
