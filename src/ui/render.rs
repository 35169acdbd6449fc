use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph};

use super::style::{Palette, style_for_line_type};
use super::{CHROME_ROWS, MAX_CONTENT_WIDTH, NAVBAR_HEIGHT, PAGE_PADDING, navbar, overlays, status};
use crate::app::Model;
use crate::theme::Theme;

/// Screen regions, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub page: Rect,
    pub navbar: Rect,
    pub status: Rect,
}

pub fn split_screen(area: Rect) -> ScreenLayout {
    let page_height = area.height.saturating_sub(CHROME_ROWS);
    let navbar_height = NAVBAR_HEIGHT.min(area.height.saturating_sub(page_height));
    let page = Rect {
        height: page_height,
        ..area
    };
    let navbar = Rect {
        y: area.y + page_height,
        height: navbar_height,
        ..area
    };
    let status = Rect {
        y: area.y + page_height + navbar_height,
        height: area.height.saturating_sub(page_height + navbar_height),
        ..area
    };
    ScreenLayout {
        page,
        navbar,
        status,
    }
}

/// Rows available to the page for a terminal of `total_height` rows.
pub const fn page_height(total_height: u16) -> u16 {
    total_height.saturating_sub(CHROME_ROWS)
}

/// Width the page is laid out at for a terminal of `total_width` columns.
pub fn page_content_width(total_width: u16) -> u16 {
    total_width
        .saturating_sub(PAGE_PADDING * 2)
        .clamp(1, MAX_CONTENT_WIDTH)
}

/// Render the complete UI.
pub fn render(model: &Model, frame: &mut Frame) {
    let area = frame.area();
    let palette = Palette::for_presentation(model.theme.presentation());
    let screen = split_screen(area);

    frame.render_widget(Block::default().style(palette.base()), area);
    render_page(model, frame, screen.page, &palette);
    render_theme_badge(model.theme.theme(), frame, screen.page, &palette);
    navbar::render_navbar(model.active_section(), &palette, frame, screen.navbar);
    if !status::render_toast_bar(model, frame, screen.status) {
        status::render_status_bar(model, frame, screen.status, &palette);
    }

    if model.help_visible {
        overlays::render_help_overlay(model, frame, area, &palette);
    }
}

fn render_page(model: &Model, frame: &mut Frame, area: Rect, palette: &Palette) {
    let range = model.viewport.visible_range();
    let content_width = page_content_width(area.width);
    let margin = " ".repeat(usize::from(area.width.saturating_sub(content_width) / 2));

    let lines: Vec<Line> = model
        .page
        .visible_lines(range.start, range.end)
        .iter()
        .map(|line| {
            Line::from(vec![
                Span::styled(margin.clone(), palette.base()),
                Span::styled(
                    line.content().to_string(),
                    style_for_line_type(line.line_type(), palette),
                ),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).style(palette.base()), area);
}

/// Fixed top-right indicator for the current theme.
fn render_theme_badge(theme: Theme, frame: &mut Frame, area: Rect, palette: &Palette) {
    let label = match theme {
        Theme::Light => " ☀ light [t] ",
        Theme::Dark => " ☾ dark [t] ",
    };
    let width = u16::try_from(unicode_width::UnicodeWidthStr::width(label)).unwrap_or(u16::MAX);
    if area.height == 0 || area.width < width {
        return;
    }
    let badge_area = Rect::new(area.x + area.width - width, area.y, width, 1);
    let badge = Paragraph::new(label).style(
        Style::new()
            .fg(palette.primary)
            .bg(palette.surface)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(badge, badge_area);
}
