//! List View state: the loaded page, search text, pagination and selection

use rickdex_core::{filter_by_name, Character, CharacterPage, Pagination};

use crate::request::RequestId;

/// Which part of the List View receives typed characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListFocus {
    /// Arrow keys move the row cursor, letters are shortcuts
    #[default]
    Table,
    /// Typed characters edit the search text
    Search,
}

/// Everything the List View owns. Created fresh each time `/` is mounted.
#[derive(Debug, Clone, Default)]
pub struct ListViewState {
    pub pagination: Pagination,
    /// Search text; filters the loaded page only
    pub search_query: String,
    /// Characters of the last page that arrived
    pub characters: Vec<Character>,
    /// Cursor index into the *filtered* rows
    pub selected: usize,
    pub focus: ListFocus,
    /// Most recently issued page request, until its reply arrives
    pub pending: Option<RequestId>,
}

impl ListViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows currently displayed (loaded page filtered by the search text)
    pub fn visible(&self) -> Vec<&Character> {
        filter_by_name(&self.characters, &self.search_query)
    }

    pub fn visible_count(&self) -> usize {
        self.visible().len()
    }

    pub fn selected_character(&self) -> Option<&Character> {
        self.visible().get(self.selected).copied()
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    // ─────────────────────────────────────────────────────────
    // Search
    // ─────────────────────────────────────────────────────────

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        self.clamp_selection();
    }

    // ─────────────────────────────────────────────────────────
    // Row cursor
    // ─────────────────────────────────────────────────────────

    pub fn select_next(&mut self) {
        let count = self.visible_count();
        if count > 0 && self.selected + 1 < count {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.visible_count().saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        let count = self.visible_count();
        if self.selected >= count {
            self.selected = count.saturating_sub(1);
        }
    }

    // ─────────────────────────────────────────────────────────
    // Requests
    // ─────────────────────────────────────────────────────────

    /// Move to `page` and remember the request that will fill it.
    ///
    /// The page number changes immediately; the rows change when the reply
    /// arrives.
    pub fn begin_request(&mut self, page: u32, request: RequestId) {
        self.pagination.go_to(page);
        self.pending = Some(request);
    }

    /// Apply a page reply. Returns `false` (state untouched) if the reply is
    /// not for the most recent request.
    pub fn apply_page(&mut self, request: RequestId, page: CharacterPage) -> bool {
        if self.pending != Some(request) {
            return false;
        }
        self.pending = None;
        self.pagination.learn_total(page.info.pages);
        self.characters = page.results;
        self.selected = 0;
        true
    }

    /// Record a failed reply. The previously loaded rows stay on screen.
    /// Returns `false` if the failure is for a superseded request.
    pub fn fail_request(&mut self, request: RequestId) -> bool {
        if self.pending != Some(request) {
            return false;
        }
        self.pending = None;
        true
    }
}
