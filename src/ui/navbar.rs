//! Bottom navigation bar: one target per section.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use super::style::{Palette, nav_entry_style};
use crate::scrollspy::SectionId;

/// Screen rectangles of every navigation entry, in section order.
pub fn entry_rects(area: Rect) -> Vec<(SectionId, Rect)> {
    let inner = bar_block().inner(area);
    let constraints = SectionId::ALL.map(|_| Constraint::Ratio(1, 5));
    let cells = Layout::horizontal(constraints).split(inner);
    SectionId::ALL.into_iter().zip(cells.iter().copied()).collect()
}

/// The navigation entry under a screen cell, if any.
pub fn entry_at(area: Rect, column: u16, row: u16) -> Option<SectionId> {
    let position = Position::new(column, row);
    entry_rects(area)
        .into_iter()
        .find(|(_, rect)| rect.contains(position))
        .map(|(id, _)| id)
}

pub fn render_navbar(active: SectionId, palette: &Palette, frame: &mut Frame, area: Rect) {
    let block = bar_block().style(Style::new().bg(palette.surface).fg(palette.border));
    frame.render_widget(block, area);

    for (id, rect) in entry_rects(area) {
        let is_active = id == active;
        let number = id.index() + 1;
        let label = if is_active {
            format!("● {number} {}", id.label())
        } else {
            format!("{number} {}", id.label())
        };
        let entry = Paragraph::new(label)
            .alignment(Alignment::Center)
            .style(nav_entry_style(is_active, palette));
        frame.render_widget(entry, rect);
    }
}

fn bar_block() -> Block<'static> {
    Block::default().borders(Borders::TOP | Borders::BOTTOM)
}
