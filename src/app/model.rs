use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::page::{ContentError, Page, Portfolio};
use crate::scrollspy::{Geometry, ScrollSpy, SectionId};
use crate::theme::ThemeToggle;
use crate::ui::viewport::Viewport;

/// How long a toast stays on the status line.
const TOAST_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
struct Toast {
    level: ToastLevel,
    message: String,
    expires_at: Instant,
}

/// The complete application state.
///
/// All state lives here - no global or scattered state beyond the
/// presentation flag owned by [`ThemeToggle`].
#[derive(Default)]
pub struct Model {
    /// Portfolio content the page is laid out from
    pub portfolio: Portfolio,
    /// Laid-out page rows and section spans
    pub page: Page,
    /// Viewport managing scroll position
    pub viewport: Viewport,
    /// Active-section tracker
    spy: ScrollSpy,
    /// Section a smooth scroll is heading for, while it is in flight
    nav_target: Option<SectionId>,
    /// Current theme and its persistence
    pub theme: ThemeToggle,
    /// Content file, when not using the bundled portfolio
    pub content_path: Option<PathBuf>,
    /// Whether content file watching is enabled
    pub watch_enabled: bool,
    /// Global config path shown in help
    pub config_global_path: Option<PathBuf>,
    /// Local override path shown in help
    pub config_local_path: Option<PathBuf>,
    /// Whether help overlay is visible
    pub help_visible: bool,
    toast: Option<Toast>,
    /// Whether the app should quit
    pub should_quit: bool,
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("active", &self.spy.active())
            .field("offset", &self.viewport.offset())
            .field("theme", &self.theme)
            .field("watch_enabled", &self.watch_enabled)
            .finish_non_exhaustive()
    }
}

impl Model {
    /// Create a model for a terminal of `terminal_size` (columns, rows).
    ///
    /// Lays the page out and runs the mount-time section check.
    pub fn new(portfolio: Portfolio, terminal_size: (u16, u16), theme: ThemeToggle) -> Self {
        let (width, height) = terminal_size;
        let page_rows = crate::ui::page_height(height);
        let page = crate::page::layout(
            &portfolio,
            crate::ui::page_content_width(width),
            usize::from(page_rows),
        );
        let mut model = Self {
            viewport: Viewport::new(width, page_rows, page.line_count()),
            portfolio,
            page,
            theme,
            ..Self::default()
        };
        model.observe_scroll();
        model
    }

    pub const fn active_section(&self) -> SectionId {
        self.spy.active()
    }

    /// Section a pending smooth scroll will land on, else the active one.
    pub fn heading_for(&self) -> SectionId {
        self.nav_target.unwrap_or_else(|| self.spy.active())
    }

    /// The scroll handler: re-evaluate the active section.
    pub(super) fn observe_scroll(&mut self) -> bool {
        self.spy
            .observe(self.viewport.offset(), self.viewport.height(), &self.page)
    }

    /// Start a smooth scroll to `id`. Missing sections are ignored.
    pub(super) fn navigate_to(&mut self, id: SectionId) {
        let Some(target) = self.spy.navigate_to(id, &self.page) else {
            tracing::debug!(section = %id, "navigation target not rendered");
            return;
        };
        self.viewport.scroll_to_smooth(target);
        self.nav_target = self.viewport.is_animating().then_some(id);
    }

    /// Advance an in-flight smooth scroll by one frame.
    pub(super) fn tick_smooth_scroll(&mut self) {
        if self.viewport.step_smooth_scroll() {
            self.observe_scroll();
        }
        if !self.viewport.is_animating() {
            self.nav_target = None;
        }
    }

    pub(super) fn cancel_navigation(&mut self) {
        self.nav_target = None;
    }

    /// Lay the page out again for the current viewport.
    ///
    /// The row at the top of the viewport keeps its position relative to the
    /// section it belongs to.
    pub(super) fn relayout(&mut self) {
        let anchor = self.page.section_at(self.viewport.offset()).and_then(|id| {
            self.page
                .section(id)
                .map(|span| (id, self.viewport.offset() - span.top()))
        });
        let target = self.nav_target;

        self.page = crate::page::layout(
            &self.portfolio,
            crate::ui::page_content_width(self.viewport.width()),
            usize::from(self.viewport.height()),
        );
        self.viewport.set_total_lines(self.page.line_count());

        if let Some((id, delta)) = anchor
            && let Some(span) = self.page.section(id)
        {
            let delta = delta.min(span.height().saturating_sub(1));
            self.viewport.go_to_line(span.top() + delta);
        }
        self.nav_target = None;
        self.observe_scroll();
        if let Some(id) = target {
            self.navigate_to(id);
        }
    }

    /// Reload portfolio content from `content_path`.
    pub(super) fn reload_content(&mut self) -> Result<(), ContentError> {
        let Some(path) = self.content_path.as_ref() else {
            return Ok(());
        };
        self.portfolio = Portfolio::from_path(path)?;
        self.relayout();
        Ok(())
    }

    pub(super) fn show_toast(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.toast = Some(Toast {
            level,
            message: message.into(),
            expires_at: Instant::now() + TOAST_DURATION,
        });
    }

    pub(super) fn expire_toast(&mut self, now: Instant) -> bool {
        if self
            .toast
            .as_ref()
            .is_some_and(|toast| toast.expires_at <= now)
        {
            self.toast = None;
            return true;
        }
        false
    }

    pub fn active_toast(&self) -> Option<(&str, ToastLevel)> {
        self.toast
            .as_ref()
            .map(|toast| (toast.message.as_str(), toast.level))
    }
}
