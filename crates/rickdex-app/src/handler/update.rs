//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppPhase, AppState};

use super::{keys::handle_key, list, navigation, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Init => UpdateResult::action(state.mount()),

        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            if state.is_loading() {
                state.tick();
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // List View
        // ─────────────────────────────────────────────────────────
        Message::SearchInput { text } => list::handle_search_input(state, text),
        Message::FocusSearch => list::handle_focus_search(state),
        Message::FocusTable => list::handle_focus_table(state),
        Message::ClearSearch => list::handle_search_input(state, String::new()),

        Message::SelectNext => list::handle_select(state, |l| l.select_next()),
        Message::SelectPrevious => list::handle_select(state, |l| l.select_previous()),
        Message::SelectFirst => list::handle_select(state, |l| l.select_first()),
        Message::SelectLast => list::handle_select(state, |l| l.select_last()),
        Message::OpenSelected => list::handle_open_selected(state),

        Message::FirstPage => list::handle_page_control(state, |p| p.first_target()),
        Message::PreviousPage => list::handle_page_control(state, |p| p.previous_target()),
        Message::NextPage => list::handle_page_control(state, |p| p.next_target()),
        Message::LastPage => list::handle_page_control(state, |p| p.last_target()),

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::Navigate(route) => navigation::handle_navigate(state, route),
        Message::Back => navigation::handle_back(state),

        // ─────────────────────────────────────────────────────────
        // Fetch results
        // ─────────────────────────────────────────────────────────
        Message::PageLoaded { request, page } => {
            navigation::handle_page_loaded(state, request, page)
        }
        Message::PageLoadFailed {
            request,
            page,
            error,
        } => navigation::handle_page_load_failed(state, request, page, &error),
        Message::CharacterLoaded { request, character } => {
            navigation::handle_character_loaded(state, request, *character)
        }
        Message::CharacterLoadFailed { request, id, error } => {
            navigation::handle_character_load_failed(state, request, id, &error)
        }
    }
}
