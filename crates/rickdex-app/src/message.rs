//! Message types for the application (TEA pattern)

use rickdex_core::{Character, CharacterPage};

use crate::input_key::InputKey;
use crate::request::RequestId;
use crate::route::Route;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Mount the start route; sent once by the runner
    Init,

    /// Tick event for periodic updates
    Tick,

    /// Quit immediately (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // List View: search
    // ─────────────────────────────────────────────────────────
    /// Replace the search text
    SearchInput { text: String },
    /// Move keyboard focus into the search field
    FocusSearch,
    /// Move keyboard focus back to the table
    FocusTable,
    /// Empty the search text
    ClearSearch,

    // ─────────────────────────────────────────────────────────
    // List View: row cursor
    // ─────────────────────────────────────────────────────────
    SelectNext,
    SelectPrevious,
    SelectFirst,
    SelectLast,
    /// Open the profile of the highlighted row
    OpenSelected,

    // ─────────────────────────────────────────────────────────
    // List View: pagination controls
    // ─────────────────────────────────────────────────────────
    FirstPage,
    PreviousPage,
    NextPage,
    LastPage,

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    /// Push a route onto the history and mount it
    Navigate(Route),
    /// Return to the previous route in history
    Back,

    // ─────────────────────────────────────────────────────────
    // Fetch results
    // ─────────────────────────────────────────────────────────
    PageLoaded {
        request: RequestId,
        page: CharacterPage,
    },
    PageLoadFailed {
        request: RequestId,
        page: u32,
        error: String,
    },
    CharacterLoaded {
        request: RequestId,
        character: Box<Character>,
    },
    CharacterLoadFailed {
        request: RequestId,
        id: u32,
        error: String,
    },
}
