//! Header bar widget
//!
//! Title, current route and the keybindings that apply to it.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use rickdex_app::Route;

use crate::theme::{palette, styles};

use super::spinner;

/// Main header showing app title, route breadcrumb and keybindings
pub struct MainHeader {
    route: Route,
    /// Spinner frame while the screen waits for data
    loading: Option<u64>,
}

impl MainHeader {
    pub fn new(route: Route) -> Self {
        Self {
            route,
            loading: None,
        }
    }

    /// Show the loading spinner at `frame`
    pub fn loading(mut self, frame: u64) -> Self {
        self.loading = Some(frame);
        self
    }

    fn breadcrumb(&self) -> String {
        match self.route {
            Route::List => "characters".to_string(),
            Route::Profile { id } => format!("characters / #{}", id),
        }
    }

    fn shortcuts(&self) -> Vec<(&'static str, &'static str)> {
        match self.route {
            Route::List => vec![("/", "Search"), ("Enter", "Open"), ("q", "Quit")],
            Route::Profile { .. } => vec![("Esc", "Back"), ("q", "Quit")],
        }
    }
}

impl Widget for MainHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let (dot, dot_style) = match self.loading {
            Some(frame) => (spinner(frame), styles::keybinding()),
            None => ("●", styles::accent()),
        };

        let left_line = Line::from(vec![
            Span::raw(" "),
            Span::styled(dot, dot_style),
            Span::raw(" "),
            Span::styled("rickdex", styles::accent_bold()),
            Span::raw(" "),
            Span::styled("/", styles::text_muted()),
            Span::raw(" "),
            Span::styled(self.breadcrumb(), styles::text_secondary()),
        ]);
        let left_width = left_line.width() as u16;

        let mut shortcut_spans = Vec::new();
        for (key, label) in self.shortcuts() {
            shortcut_spans.push(Span::styled("[", styles::text_muted()));
            shortcut_spans.push(Span::styled(key, styles::keybinding()));
            shortcut_spans.push(Span::styled(format!("] {}  ", label), styles::text_muted()));
        }
        let shortcuts_line = Line::from(shortcut_spans);
        let shortcuts_width = shortcuts_line.width() as u16;

        buf.set_line(inner.x, inner.y, &left_line, inner.width);

        // Right-align the shortcuts when they fit beside the title
        if left_width + shortcuts_width + 2 <= inner.width {
            let x = inner.x + inner.width - shortcuts_width;
            buf.set_line(x, inner.y, &shortcuts_line, shortcuts_width);
        }
    }
}
