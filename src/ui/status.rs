use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use super::style::Palette;
use crate::app::{Model, ToastLevel};

pub fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect, palette: &Palette) {
    let active = model.active_section();
    let watch_indicator = if model.watch_enabled {
        " [watching]"
    } else {
        ""
    };
    let shade = if model.theme.presentation().is_dark() {
        "dark"
    } else {
        "light"
    };
    let status = format!(
        " {}  [{}%]  theme: {}{}  ?:help",
        active.label(),
        model.viewport.scroll_percent(),
        shade,
        watch_indicator,
    );
    let bar = Paragraph::new(status).style(Style::new().bg(palette.surface).fg(palette.muted));
    frame.render_widget(bar, area);
}

/// Replaces the status line while a toast is live. Returns `false` if there is none.
pub fn render_toast_bar(model: &Model, frame: &mut Frame, area: Rect) -> bool {
    let Some((message, level)) = model.active_toast() else {
        return false;
    };
    let (prefix, style) = match level {
        ToastLevel::Info => ("[info]", Style::new().bg(Color::DarkGray).fg(Color::White)),
        ToastLevel::Warning => ("[warn]", Style::new().bg(Color::Yellow).fg(Color::Black)),
        ToastLevel::Error => ("[error]", Style::new().bg(Color::Red).fg(Color::White)),
    };
    let toast = Paragraph::new(format!(" {prefix} {message}")).style(style);
    frame.render_widget(toast, area);
    true
}
