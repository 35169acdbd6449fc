use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::app::{App, Message, Model};
use crate::scrollspy::SectionId;

use super::event_loop::ResizeDebouncer;

/// Rows moved per mouse wheel notch.
const WHEEL_STEP: usize = 3;

impl App {
    pub(super) fn handle_event(
        event: &Event,
        model: &Model,
        now_ms: u64,
        resize_debouncer: &mut ResizeDebouncer,
    ) -> Option<Message> {
        match event {
            Event::Key(key) => Self::handle_key(*key, model),
            Event::Mouse(mouse) => Self::handle_mouse(*mouse, model),
            Event::Resize(w, h) => {
                tracing::trace!(width = w, height = h, "resize queued");
                resize_debouncer.queue(*w, *h, now_ms);
                None
            }
            _ => None,
        }
    }

    pub(super) fn handle_mouse(mouse: MouseEvent, model: &Model) -> Option<Message> {
        if model.help_visible {
            return match mouse.kind {
                MouseEventKind::Down(_) => Some(Message::HideHelp),
                _ => None,
            };
        }

        match mouse.kind {
            MouseEventKind::ScrollDown => Some(Message::ScrollDown(WHEEL_STEP)),
            MouseEventKind::ScrollUp => Some(Message::ScrollUp(WHEEL_STEP)),
            MouseEventKind::Down(MouseButton::Left) => {
                let navbar = crate::ui::split_screen(screen_area(model)).navbar;
                crate::ui::navbar::entry_at(navbar, mouse.column, mouse.row)
                    .map(Message::NavigateTo)
            }
            _ => None,
        }
    }

    pub(super) fn handle_key(key: KeyEvent, model: &Model) -> Option<Message> {
        if model.help_visible {
            return Some(Message::HideHelp);
        }

        match key.code {
            // Scrolling
            KeyCode::Char('j') | KeyCode::Down => Some(Message::ScrollDown(1)),
            KeyCode::Char('k') | KeyCode::Up => Some(Message::ScrollUp(1)),
            KeyCode::Char(' ') | KeyCode::PageDown => Some(Message::PageDown),
            KeyCode::Char('b') | KeyCode::PageUp => Some(Message::PageUp),
            KeyCode::Char('d') => Some(Message::HalfPageDown),
            KeyCode::Char('u') => Some(Message::HalfPageUp),
            KeyCode::Char('g') | KeyCode::Home => Some(Message::GoToTop),
            KeyCode::Char('G') | KeyCode::End => Some(Message::GoToBottom),

            // Sections
            KeyCode::Char(c @ '1'..='5') => {
                let index = c.to_digit(10).and_then(|d| usize::try_from(d).ok())?;
                SectionId::from_index(index - 1).map(Message::NavigateTo)
            }
            KeyCode::Tab => Some(Message::NextSection),
            KeyCode::BackTab => Some(Message::PrevSection),

            // Theme
            KeyCode::Char('t') => Some(Message::ToggleTheme),

            // Content
            KeyCode::Char('w') => Some(Message::ToggleWatch),
            KeyCode::Char('r' | 'R') => Some(Message::ForceReload),
            KeyCode::Char('?') | KeyCode::F(1) => Some(Message::ToggleHelp),

            KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Message::Redraw)
            }

            // Quit
            KeyCode::Char('q') | KeyCode::Esc => Some(Message::Quit),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Message::Quit)
            }

            _ => None,
        }
    }
}

/// The full terminal area the model was last laid out for.
fn screen_area(model: &Model) -> Rect {
    Rect::new(
        0,
        0,
        model.viewport.width(),
        model
            .viewport
            .height()
            .saturating_add(crate::ui::CHROME_ROWS),
    )
}
