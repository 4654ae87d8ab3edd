//! Semantic style builders for the glass theme.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};
use rickdex_core::CharacterStatus;

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Keybinding hint style ---
pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

/// "Black on Cyan" - used for focused+selected items across widgets
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// Pagination control that would do nothing if pressed
pub fn control_disabled() -> Style {
    text_muted().add_modifier(Modifier::DIM)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

// --- Character status mapping ---

/// Status indicator: `(icon, Style)` for the given CharacterStatus.
pub fn status_indicator(status: CharacterStatus) -> (&'static str, Style) {
    match status {
        CharacterStatus::Alive => ("●", Style::default().fg(palette::STATUS_GREEN)),
        CharacterStatus::Dead => ("✗", Style::default().fg(palette::STATUS_RED)),
        CharacterStatus::Unknown => ("?", text_muted()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_styles_have_correct_colors() {
        assert_eq!(text_primary().fg, Some(palette::TEXT_PRIMARY));
        assert_eq!(text_secondary().fg, Some(palette::TEXT_SECONDARY));
        assert_eq!(text_muted().fg, Some(palette::TEXT_MUTED));
    }

    #[test]
    fn test_border_styles_have_correct_colors() {
        assert_eq!(border_inactive().fg, Some(palette::BORDER_DIM));
        assert_eq!(border_active().fg, Some(palette::BORDER_ACTIVE));
    }

    #[test]
    fn test_accent_bold_has_modifier() {
        assert!(accent_bold().add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_status_indicator_colors() {
        assert_eq!(
            status_indicator(CharacterStatus::Alive).1.fg,
            Some(palette::STATUS_GREEN)
        );
        assert_eq!(
            status_indicator(CharacterStatus::Dead).1.fg,
            Some(palette::STATUS_RED)
        );
        assert_eq!(status_indicator(CharacterStatus::Unknown).0, "?");
    }
}
