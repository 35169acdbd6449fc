use crate::app::Model;
use crate::app::model::ToastLevel;
use crate::scrollspy::SectionId;

/// All possible events and actions in the application.
///
/// These represent user input, system events, and internal actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Scrolling
    /// Scroll up by n lines
    ScrollUp(usize),
    /// Scroll down by n lines
    ScrollDown(usize),
    /// Scroll up one page
    PageUp,
    /// Scroll down one page
    PageDown,
    /// Scroll up half page
    HalfPageUp,
    /// Scroll down half page
    HalfPageDown,
    /// Go to beginning of page
    GoToTop,
    /// Go to end of page
    GoToBottom,

    // Sections
    /// Smooth-scroll so the section's top aligns with the viewport top
    NavigateTo(SectionId),
    /// Navigate to the section after the current one
    NextSection,
    /// Navigate to the section before the current one
    PrevSection,
    /// Advance an in-flight smooth scroll by one frame
    SmoothScrollTick,

    // Theme
    /// Flip between light and dark, persisting the choice
    ToggleTheme,

    // Content
    /// Toggle content file watching
    ToggleWatch,
    /// Content file changed externally, reload
    ContentChanged,
    /// Content file disappeared, keep what is loaded
    ContentRemoved,
    /// Force reload content
    ForceReload,

    /// Toggle help overlay
    ToggleHelp,
    /// Hide help overlay
    HideHelp,

    // Window
    /// Terminal resized
    Resize(u16, u16),
    /// Redraw screen
    Redraw,

    // Application
    /// Quit the application
    Quit,
}

impl Message {
    /// Messages that move the viewport directly (not via animation).
    const fn is_manual_scroll(&self) -> bool {
        matches!(
            self,
            Self::ScrollUp(_)
                | Self::ScrollDown(_)
                | Self::PageUp
                | Self::PageDown
                | Self::HalfPageUp
                | Self::HalfPageDown
                | Self::GoToTop
                | Self::GoToBottom
        )
    }
}

/// Update the model based on a message.
///
/// All state transitions happen here. File and watcher I/O is left to the
/// side-effect handler; the theme toggle writes its one preference inline.
pub fn update(mut model: Model, msg: Message) -> Model {
    if msg.is_manual_scroll() {
        model.cancel_navigation();
    }

    match msg {
        Message::ScrollUp(n) => model.viewport.scroll_up(n),
        Message::ScrollDown(n) => model.viewport.scroll_down(n),
        Message::PageUp => model.viewport.page_up(),
        Message::PageDown => model.viewport.page_down(),
        Message::HalfPageUp => model.viewport.half_page_up(),
        Message::HalfPageDown => model.viewport.half_page_down(),
        Message::GoToTop => model.viewport.go_to_top(),
        Message::GoToBottom => model.viewport.go_to_bottom(),

        Message::NavigateTo(id) => model.navigate_to(id),
        Message::NextSection => {
            if let Some(next) = model.heading_for().next() {
                model.navigate_to(next);
            }
        }
        Message::PrevSection => {
            if let Some(prev) = model.heading_for().prev() {
                model.navigate_to(prev);
            }
        }
        Message::SmoothScrollTick => model.tick_smooth_scroll(),

        Message::ToggleTheme => {
            let theme = model.theme.toggle();
            model.show_toast(ToastLevel::Info, format!("Theme: {theme}"));
        }

        Message::ToggleWatch => {
            model.watch_enabled = !model.watch_enabled;
        }
        // Handled in side effects
        Message::ContentChanged
        | Message::ContentRemoved
        | Message::ForceReload
        | Message::Redraw => {}

        Message::ToggleHelp => {
            model.help_visible = !model.help_visible;
        }
        Message::HideHelp => {
            model.help_visible = false;
        }

        Message::Resize(width, height) => {
            model
                .viewport
                .resize(width, crate::ui::page_height(height));
            model.relayout();
        }

        Message::Quit => {
            model.should_quit = true;
        }
    }

    if msg.is_manual_scroll() {
        model.observe_scroll();
    }

    model
}
