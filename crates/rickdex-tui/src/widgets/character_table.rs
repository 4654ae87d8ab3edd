//! Character table widget

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Rect},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, StatefulWidget, Table, TableState, Widget},
};

use rickdex_core::Character;

use crate::theme::styles;

/// Table of the filtered characters on the loaded page
pub struct CharacterTable<'a> {
    rows: &'a [&'a Character],
    selected: usize,
    /// Table has keyboard focus (highlight the cursor row)
    focused: bool,
    /// No page has arrived yet
    loading: bool,
    /// Add the avatar URL column
    show_image_url: bool,
}

impl<'a> CharacterTable<'a> {
    pub fn new(rows: &'a [&'a Character], selected: usize) -> Self {
        Self {
            rows,
            selected,
            focused: true,
            loading: false,
            show_image_url: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn show_image_url(mut self, show: bool) -> Self {
        self.show_image_url = show;
        self
    }

    fn widths(&self) -> Vec<Constraint> {
        if self.show_image_url {
            vec![
                Constraint::Percentage(30),
                Constraint::Percentage(15),
                Constraint::Percentage(15),
                Constraint::Percentage(40),
            ]
        } else {
            vec![
                Constraint::Percentage(50),
                Constraint::Percentage(30),
                Constraint::Percentage(20),
            ]
        }
    }

    fn render_empty(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused).title(" Characters ");
        let message = if self.loading {
            "Loading..."
        } else {
            "No characters"
        };
        Paragraph::new(Line::from(Span::styled(message, styles::text_muted())))
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}

impl Widget for CharacterTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.rows.is_empty() {
            self.render_empty(area, buf);
            return;
        }

        let mut titles = vec!["Name", "Species", "Status"];
        if self.show_image_url {
            titles.push("Image");
        }
        let header = Row::new(titles).style(styles::accent_bold());

        let rows = self.rows.iter().map(|character| {
            let (icon, status_style) = styles::status_indicator(character.status);
            let mut cells = vec![
                Cell::from(character.name.as_str()).style(styles::text_primary()),
                Cell::from(character.species.as_str()).style(styles::text_secondary()),
                Cell::from(Line::from(vec![
                    Span::styled(icon, status_style),
                    Span::raw(" "),
                    Span::styled(character.status.label(), status_style),
                ])),
            ];
            if self.show_image_url {
                cells.push(Cell::from(character.image.as_str()).style(styles::text_muted()));
            }
            Row::new(cells)
        });

        let highlight = if self.focused {
            styles::focused_selected()
        } else {
            styles::text_primary()
        };

        let table = Table::new(rows, self.widths())
            .header(header)
            .block(styles::glass_block(self.focused).title(" Characters "))
            .row_highlight_style(highlight)
            .highlight_symbol("▶ ");

        let mut state = TableState::default().with_selected(Some(self.selected));
        StatefulWidget::render(table, area, buf, &mut state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use rickdex_api::test_utils::{test_character, test_character_full};
    use rickdex_core::CharacterStatus;

    #[test]
    fn test_row_shows_name_species_status() {
        let rick = test_character_full(1, "Rick Sanchez", "Human", CharacterStatus::Alive);
        let rows = vec![&rick];
        let mut term = TestTerminal::new();
        term.render_widget(CharacterTable::new(&rows, 0), term.area());

        let lines = term.lines_containing("Rick Sanchez");
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("Human"));
        assert!(lines[0].contains("Alive"));
    }

    #[test]
    fn test_all_rows_rendered_in_order() {
        let rick = test_character(1, "Rick Sanchez");
        let morty = test_character(2, "Morty Smith");
        let rows = vec![&rick, &morty];
        let mut term = TestTerminal::new();
        term.render_widget(CharacterTable::new(&rows, 1), term.area());

        let content = term.content();
        let rick_at = content.find("Rick Sanchez").unwrap();
        let morty_at = content.find("Morty Smith").unwrap();
        assert!(rick_at < morty_at);
        assert!(term.lines_containing("Morty Smith")[0].contains("▶"));
    }

    #[test]
    fn test_empty_while_loading() {
        let rows: Vec<&Character> = Vec::new();
        let mut term = TestTerminal::new();
        term.render_widget(CharacterTable::new(&rows, 0).loading(true), term.area());
        assert!(term.buffer_contains("Loading..."));
    }

    #[test]
    fn test_empty_after_filtering() {
        let rows: Vec<&Character> = Vec::new();
        let mut term = TestTerminal::new();
        term.render_widget(CharacterTable::new(&rows, 0), term.area());
        assert!(term.buffer_contains("No characters"));
    }

    #[test]
    fn test_image_column_follows_setting() {
        let rick = test_character(1, "Rick Sanchez");
        let rows = vec![&rick];

        let mut term = TestTerminal::with_size(160, 8);
        term.render_widget(CharacterTable::new(&rows, 0).show_image_url(true), term.area());
        assert!(term.buffer_contains("Image"));
        assert!(term.lines_containing("Rick Sanchez")[0].contains("avatar/1.jpeg"));

        let mut term = TestTerminal::with_size(160, 8);
        term.render_widget(CharacterTable::new(&rows, 0), term.area());
        assert!(!term.buffer_contains("Image"));
        assert!(!term.buffer_contains("avatar/1.jpeg"));
    }
}
