//! Pagination controls: First, Previous, current page, Next, Last

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use rickdex_core::Pagination;

use crate::theme::styles;

/// Bottom bar with the four page controls around the current page.
///
/// First and Last are only drawn once the total page count is known.
/// First/Previous are dimmed on page 1, Next/Last on the last page.
pub struct PaginationBar<'a> {
    pagination: &'a Pagination,
}

impl<'a> PaginationBar<'a> {
    pub fn new(pagination: &'a Pagination) -> Self {
        Self { pagination }
    }

    fn control(key: &'static str, label: String, enabled: bool) -> Vec<Span<'static>> {
        let (key_style, label_style): (Style, Style) = if enabled {
            (styles::keybinding(), styles::text_primary())
        } else {
            (styles::control_disabled(), styles::control_disabled())
        };
        vec![
            Span::styled("[", styles::text_muted()),
            Span::styled(key, key_style),
            Span::styled("] ", styles::text_muted()),
            Span::styled(label, label_style),
            Span::raw("   "),
        ]
    }

    fn spans(&self) -> Vec<Span<'static>> {
        let p = self.pagination;
        let mut spans = Vec::new();

        if p.first_visible() {
            spans.extend(Self::control("f", "First".to_string(), p.first_enabled()));
        }
        spans.extend(Self::control("p", "Previous".to_string(), p.previous_enabled()));

        spans.push(Span::styled(
            format!("[ {} ]", p.current()),
            styles::accent_bold(),
        ));
        spans.push(Span::raw("   "));

        spans.extend(Self::control("n", "Next".to_string(), p.next_enabled()));
        if let Some(total) = p.total().filter(|_| p.last_visible()) {
            spans.extend(Self::control(
                "l",
                format!("Last ({})", total),
                p.last_enabled(),
            ));
        }

        // Drop the trailing gap
        spans.pop();
        spans
    }
}

impl Widget for PaginationBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Line::from(self.spans()))
            .alignment(Alignment::Center)
            .block(styles::glass_block(false))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use ratatui::style::Modifier;

    fn at(current: u32, total: Option<u32>) -> Pagination {
        let mut p = Pagination::new();
        if let Some(t) = total {
            p.learn_total(t);
        }
        p.go_to(current);
        p
    }

    fn render(p: &Pagination) -> TestTerminal {
        let mut term = TestTerminal::with_size(80, 3);
        term.render_widget(PaginationBar::new(p), term.area());
        term
    }

    /// Is the first cell of `text` drawn dimmed
    fn is_dimmed(term: &TestTerminal, text: &str) -> bool {
        let buffer = term.buffer();
        for y in 0..buffer.area.height {
            let row: String = (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect();
            if let Some(index) = row.find(text) {
                let x = row[..index].chars().count() as u16;
                return buffer[(x, y)].modifier.contains(Modifier::DIM);
            }
        }
        panic!("{:?} not rendered", text);
    }

    #[test]
    fn test_last_reads_total() {
        let term = render(&at(1, Some(42)));
        assert!(term.buffer_contains("Last (42)"));
        assert!(term.buffer_contains("[ 1 ]"));
    }

    #[test]
    fn test_first_and_last_hidden_until_total_known() {
        let term = render(&at(1, None));
        assert!(!term.buffer_contains("First"));
        assert!(!term.buffer_contains("Last"));
        assert!(term.buffer_contains("Previous"));
        assert!(term.buffer_contains("Next"));
    }

    #[test]
    fn test_first_page_dims_first_and_previous() {
        let term = render(&at(1, Some(42)));
        assert!(is_dimmed(&term, "First"));
        assert!(is_dimmed(&term, "Previous"));
        assert!(!is_dimmed(&term, "Next"));
        assert!(!is_dimmed(&term, "Last (42)"));
    }

    #[test]
    fn test_last_page_dims_next_and_last() {
        let term = render(&at(42, Some(42)));
        assert!(!is_dimmed(&term, "First"));
        assert!(!is_dimmed(&term, "Previous"));
        assert!(is_dimmed(&term, "Next"));
        assert!(is_dimmed(&term, "Last (42)"));
    }

    #[test]
    fn test_next_not_dimmed_while_total_unknown() {
        let term = render(&at(1, None));
        assert!(is_dimmed(&term, "Previous"));
        assert!(!is_dimmed(&term, "Next"));
    }
}
