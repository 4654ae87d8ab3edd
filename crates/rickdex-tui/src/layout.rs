//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Header height: top border + title row + bottom border
const HEADER_HEIGHT: u16 = 3;
/// Search field height: bordered single line
const SEARCH_HEIGHT: u16 = 3;
/// Pagination bar height: bordered single line
const PAGINATION_HEIGHT: u16 = 3;

/// Areas of the List View
#[derive(Debug, Clone, Copy)]
pub struct ListAreas {
    pub header: Rect,
    pub search: Rect,
    pub table: Rect,
    pub pagination: Rect,
}

/// Areas of the profile screen
#[derive(Debug, Clone, Copy)]
pub struct ProfileAreas {
    pub header: Rect,
    pub card: Rect,
}

/// Header, search field, table (remaining space), pagination bar
pub fn list_layout(area: Rect) -> ListAreas {
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(SEARCH_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(PAGINATION_HEIGHT),
    ])
    .split(area);

    ListAreas {
        header: chunks[0],
        search: chunks[1],
        table: chunks[2],
        pagination: chunks[3],
    }
}

/// Header and profile card (remaining space)
pub fn profile_layout(area: Rect) -> ProfileAreas {
    let chunks =
        Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Min(3)]).split(area);

    ProfileAreas {
        header: chunks[0],
        card: chunks[1],
    }
}
