//! Custom widget components

mod character_table;
mod header;
mod pagination_bar;
mod profile_card;
mod search_input;

pub use character_table::CharacterTable;
pub use header::MainHeader;
pub use pagination_bar::PaginationBar;
pub use profile_card::ProfileCard;
pub use search_input::SearchInput;

/// Braille spinner frames for the loading indicator
const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner glyph for an animation frame counter
pub fn spinner(frame: u64) -> &'static str {
    SPINNER_FRAMES[(frame % SPINNER_FRAMES.len() as u64) as usize]
}
