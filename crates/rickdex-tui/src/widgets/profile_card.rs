//! Profile card: every field of one character, or a loading placeholder

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use rickdex_core::Character;

use crate::theme::styles;

use super::spinner;

/// Width of the field label column
const LABEL_WIDTH: usize = 10;

pub struct ProfileCard<'a> {
    character: Option<&'a Character>,
    show_image_url: bool,
    frame: u64,
}

impl<'a> ProfileCard<'a> {
    pub fn new(character: Option<&'a Character>) -> Self {
        Self {
            character,
            show_image_url: true,
            frame: 0,
        }
    }

    pub fn show_image_url(mut self, show: bool) -> Self {
        self.show_image_url = show;
        self
    }

    /// Animation frame for the loading spinner
    pub fn frame(mut self, frame: u64) -> Self {
        self.frame = frame;
        self
    }
}

fn label(text: &str) -> Span<'static> {
    Span::styled(
        format!("{:<width$}", text, width = LABEL_WIDTH),
        styles::text_muted(),
    )
}

fn field<'a>(name: &str, value: &'a str) -> Line<'a> {
    Line::from(vec![label(name), Span::styled(value, styles::text_primary())])
}

fn profile_lines<'a>(character: &'a Character, show_image_url: bool) -> Vec<Line<'a>> {
    let (icon, status_style) = styles::status_indicator(character.status);

    let mut lines = vec![
        Line::from(Span::styled(character.name.as_str(), styles::accent_bold())),
        Line::default(),
        Line::from(vec![
            label("Status"),
            Span::styled(icon, status_style),
            Span::raw(" "),
            Span::styled(character.status.label(), status_style),
        ]),
        field("Species", &character.species),
        field("Type", character.type_label()),
        field("Gender", &character.gender),
        field("Origin", &character.origin.name),
        field("Location", &character.location.name),
        Line::from(vec![
            label("Episodes"),
            Span::styled(character.episode_count().to_string(), styles::text_primary()),
        ]),
    ];

    if let Some(created) = character.created {
        lines.push(Line::from(vec![
            label("Created"),
            Span::styled(created.format("%Y-%m-%d").to_string(), styles::text_secondary()),
        ]));
    }

    if show_image_url {
        lines.push(Line::from(vec![
            label("Image"),
            Span::styled(character.image.as_str(), styles::accent()),
        ]));
    }

    lines
}

impl Widget for ProfileCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true).title(" Profile ");

        match self.character {
            Some(character) => {
                Paragraph::new(profile_lines(character, self.show_image_url))
                    .block(block)
                    .wrap(Wrap { trim: false })
                    .render(area, buf);
            }
            None => {
                let line = Line::from(vec![
                    Span::styled(spinner(self.frame), styles::keybinding()),
                    Span::raw(" "),
                    Span::styled("Loading...", styles::text_secondary()),
                ]);
                Paragraph::new(line)
                    .alignment(Alignment::Center)
                    .block(block)
                    .render(area, buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use rickdex_api::test_utils::test_character_full;
    use rickdex_core::CharacterStatus;

    #[test]
    fn test_placeholder_until_loaded() {
        let mut term = TestTerminal::new();
        term.render_widget(ProfileCard::new(None), term.area());
        assert!(term.buffer_contains("Loading..."));
    }

    #[test]
    fn test_all_fields_rendered() {
        let morty = test_character_full(2, "Morty Smith", "Human", CharacterStatus::Alive);
        let mut term = TestTerminal::new();
        term.render_widget(ProfileCard::new(Some(&morty)), term.area());

        for text in [
            "Morty Smith",
            "Alive",
            "Human",
            "Male",
            "Earth (C-137)",
            "Citadel of Ricks",
            "avatar/2.jpeg",
        ] {
            assert!(term.buffer_contains(text), "missing {:?}", text);
        }
        assert!(!term.buffer_contains("Loading..."));
        // Blank type shows a dash
        assert!(term.lines_containing("Type")[0].contains('-'));
    }

    #[test]
    fn test_image_url_can_be_hidden() {
        let morty = test_character_full(2, "Morty Smith", "Human", CharacterStatus::Alive);
        let mut term = TestTerminal::new();
        term.render_widget(
            ProfileCard::new(Some(&morty)).show_image_url(false),
            term.area(),
        );
        assert!(!term.buffer_contains("avatar/2.jpeg"));
    }
}
