use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use super::style::Palette;
use crate::app::Model;

pub fn render_help_overlay(model: &Model, frame: &mut Frame, area: Rect, palette: &Palette) {
    let popup = centered_popup_rect(
        area.width.saturating_sub(12).max(48),
        area.height.saturating_sub(6).max(12),
        area,
    );

    let global_cfg = model
        .config_global_path
        .as_ref()
        .map_or_else(|| "<unknown>".to_string(), |p| p.display().to_string());
    let local_cfg = model
        .config_local_path
        .as_ref()
        .map_or_else(|| "<none>".to_string(), |p| p.display().to_string());
    let content = model
        .content_path
        .as_ref()
        .map_or_else(|| "<bundled>".to_string(), |p| p.display().to_string());

    let section_style = Style::new().fg(palette.primary).add_modifier(Modifier::BOLD);
    let dim_style = Style::new().fg(palette.muted);

    let mut lines: Vec<Line> = vec![
        Line::styled("Scrolling", section_style),
        Line::raw("  j/k or Up/Down      Scroll"),
        Line::raw("  Space/PageDown      Page down"),
        Line::raw("  b/PageUp            Page up"),
        Line::raw("  d / u               Half page"),
        Line::raw("  g / G               Top / bottom"),
        Line::raw(""),
        Line::styled("Sections", section_style),
        Line::raw("  1-5                 Jump to section"),
        Line::raw("  Tab / Shift-Tab     Next / previous section"),
        Line::raw("  Click nav bar       Jump to section"),
        Line::raw(""),
        Line::styled("Other", section_style),
        Line::raw("  t                   Toggle light/dark theme"),
        Line::raw("  w                   Toggle watch"),
        Line::raw("  r                   Reload content"),
        Line::raw("  Ctrl-l              Redraw screen"),
        Line::raw("  q / Esc / Ctrl-c    Quit"),
        Line::raw("  ?                   Toggle help"),
        Line::raw(""),
        Line::styled("Files", section_style),
        Line::raw(format!("  Content: {content}")),
        Line::raw(format!("  Global config: {global_cfg}")),
        Line::raw(format!("  Local override: {local_cfg}")),
    ];
    lines.push(Line::raw(""));
    lines.push(Line::styled("Any key closes", dim_style));

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::new().fg(palette.border))
        .padding(Padding::uniform(1))
        .style(Style::new().bg(palette.surface).fg(palette.foreground));

    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

fn centered_popup_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w) / 2);
    let y = area.y + (area.height.saturating_sub(h) / 2);
    Rect::new(x, y, w, h)
}
