//! Search field widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

/// Bordered search field above the character table
pub struct SearchInput<'a> {
    query: &'a str,
    /// Keyboard focus is in the field
    focused: bool,
    /// (rows shown, rows loaded)
    matches: Option<(usize, usize)>,
}

impl<'a> SearchInput<'a> {
    pub fn new(query: &'a str, focused: bool) -> Self {
        Self {
            query,
            focused,
            matches: None,
        }
    }

    /// Show "shown/loaded" after a non-empty query
    pub fn matches(mut self, shown: usize, loaded: usize) -> Self {
        self.matches = Some((shown, loaded));
        self
    }
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused).title(" Search ");

        let mut spans = vec![Span::styled("/", styles::keybinding())];

        if self.query.is_empty() && !self.focused {
            spans.push(Span::styled(
                "press / to filter this page by name",
                styles::text_muted(),
            ));
        } else {
            spans.push(Span::styled(self.query, styles::text_primary()));
        }

        // Cursor
        if self.focused {
            spans.push(Span::styled("_", styles::keybinding()));
        }

        if let Some((shown, loaded)) = self.matches {
            if !self.query.is_empty() {
                spans.push(Span::raw("  "));
                spans.push(Span::styled(
                    format!("[{}/{} on this page]", shown, loaded),
                    styles::text_secondary(),
                ));
            }
        }

        Paragraph::new(Line::from(spans)).block(block).render(area, buf);
    }
}
