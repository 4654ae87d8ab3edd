//! Page-index arithmetic for the List View controls
//!
//! The total page count is learned from the first response and kept for the
//! lifetime of the view. Each control exposes an `*_enabled()` flag for
//! rendering and a `*_target()` that is `Some(page)` only when activating the
//! control should issue a request.

/// Current page and cached total for the character collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    current: u32,
    total: Option<u32>,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new()
    }
}

impl Pagination {
    /// Page 1, total unknown
    pub fn new() -> Self {
        Self {
            current: 1,
            total: None,
        }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn total(&self) -> Option<u32> {
        self.total
    }

    /// Record the total page count. Only the first non-zero value is kept;
    /// a zero count leaves the total unknown.
    pub fn learn_total(&mut self, pages: u32) {
        if self.total.is_none() && pages > 0 {
            self.total = Some(pages);
        }
    }

    pub fn go_to(&mut self, page: u32) {
        self.current = page;
    }

    fn is_last(&self) -> bool {
        self.total == Some(self.current)
    }

    // ─────────────────────────────────────────────────────────
    // Visibility / enabled state (rendering)
    // ─────────────────────────────────────────────────────────

    /// First is only offered once the total is known
    pub fn first_visible(&self) -> bool {
        self.total.is_some()
    }

    /// Last is only offered once the total is known
    pub fn last_visible(&self) -> bool {
        self.total.is_some()
    }

    pub fn first_enabled(&self) -> bool {
        self.current != 1
    }

    pub fn previous_enabled(&self) -> bool {
        self.current != 1
    }

    pub fn next_enabled(&self) -> bool {
        !self.is_last()
    }

    pub fn last_enabled(&self) -> bool {
        !self.is_last()
    }

    // ─────────────────────────────────────────────────────────
    // Targets (navigation)
    // ─────────────────────────────────────────────────────────

    pub fn first_target(&self) -> Option<u32> {
        (self.first_visible() && self.first_enabled()).then_some(1)
    }

    pub fn previous_target(&self) -> Option<u32> {
        if !self.previous_enabled() {
            return None;
        }
        let page = self.current.checked_sub(1)?;
        (page >= 1).then_some(page)
    }

    /// `None` while the total is unknown: clicking Next before the first
    /// response arrives does nothing.
    pub fn next_target(&self) -> Option<u32> {
        let total = self.total?;
        if !self.next_enabled() {
            return None;
        }
        let page = self.current.checked_add(1)?;
        (page <= total).then_some(page)
    }

    pub fn last_target(&self) -> Option<u32> {
        let total = self.total?;
        (self.last_enabled() && total >= 1).then_some(total)
    }
}
