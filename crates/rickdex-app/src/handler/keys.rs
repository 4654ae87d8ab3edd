//! Key event handlers for each screen

use crate::input_key::InputKey;
use crate::list_view_state::{ListFocus, ListViewState};
use crate::message::Message;
use crate::state::{AppState, Screen};

/// Convert key events to messages based on the mounted screen
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Force quit from anywhere
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    match &state.screen {
        Screen::List(list) => match list.focus {
            ListFocus::Table => handle_key_list_table(key),
            ListFocus::Search => handle_key_search_input(list, key),
        },
        Screen::Profile(_) => handle_key_profile(key),
    }
}

/// Handle key events while the character table has focus
fn handle_key_list_table(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),

        // Search
        InputKey::Char('/') | InputKey::Tab | InputKey::BackTab => Some(Message::FocusSearch),

        // Row cursor
        InputKey::Char('j') | InputKey::Down => Some(Message::SelectNext),
        InputKey::Char('k') | InputKey::Up => Some(Message::SelectPrevious),
        InputKey::Char('g') | InputKey::Home => Some(Message::SelectFirst),
        InputKey::Char('G') | InputKey::End => Some(Message::SelectLast),
        InputKey::Enter => Some(Message::OpenSelected),

        // Pagination controls
        InputKey::Char('n') | InputKey::Right | InputKey::PageDown => Some(Message::NextPage),
        InputKey::Char('p') | InputKey::Left | InputKey::PageUp => Some(Message::PreviousPage),
        InputKey::Char('f') => Some(Message::FirstPage),
        InputKey::Char('l') => Some(Message::LastPage),

        _ => None,
    }
}

/// Handle key events while typing in the search field
fn handle_key_search_input(list: &ListViewState, key: InputKey) -> Option<Message> {
    match key {
        // Keep query, return to table
        InputKey::Esc | InputKey::Enter | InputKey::Tab | InputKey::BackTab => {
            Some(Message::FocusTable)
        }

        // Delete character
        InputKey::Backspace => {
            let mut query = list.search_query.clone();
            query.pop();
            Some(Message::SearchInput { text: query })
        }

        // Clear search
        InputKey::CharCtrl('u') => Some(Message::ClearSearch),

        // The cursor still moves while typing
        InputKey::Down => Some(Message::SelectNext),
        InputKey::Up => Some(Message::SelectPrevious),

        // Type character
        InputKey::Char(c) => {
            let mut query = list.search_query.clone();
            query.push(c);
            Some(Message::SearchInput { text: query })
        }

        _ => None,
    }
}

/// Handle key events on a character profile
fn handle_key_profile(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') => Some(Message::Quit),
        InputKey::Esc | InputKey::Backspace | InputKey::Left | InputKey::Char('b') => {
            Some(Message::Back)
        }
        _ => None,
    }
}
