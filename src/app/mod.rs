//! Application state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete application state
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering

mod effects;
mod event_loop;
mod input;
mod model;
mod update;

pub use model::{Model, ToastLevel};
pub use update::{Message, update};

use std::path::PathBuf;

use crate::page::Portfolio;
use crate::theme::ThemeToggle;

/// Main application struct that owns the terminal and runs the event loop.
pub struct App {
    portfolio: Portfolio,
    theme: ThemeToggle,
    content_path: Option<PathBuf>,
    watch_enabled: bool,
    mouse_enabled: bool,
    config_global_path: Option<PathBuf>,
    config_local_path: Option<PathBuf>,
}

impl App {
    /// Create a new application showing `portfolio` in the resolved `theme`.
    pub fn new(portfolio: Portfolio, theme: ThemeToggle) -> Self {
        Self {
            portfolio,
            theme,
            content_path: None,
            watch_enabled: false,
            mouse_enabled: true,
            config_global_path: None,
            config_local_path: None,
        }
    }

    /// File the portfolio was loaded from, used for reload and watching.
    pub fn with_content_path(mut self, path: Option<PathBuf>) -> Self {
        self.content_path = path;
        self
    }

    /// Enable or disable content file watching.
    pub const fn with_watch(mut self, enabled: bool) -> Self {
        self.watch_enabled = enabled;
        self
    }

    /// Enable or disable mouse capture.
    pub const fn with_mouse(mut self, enabled: bool) -> Self {
        self.mouse_enabled = enabled;
        self
    }

    /// Set config paths to show in help.
    pub fn with_config_paths(
        mut self,
        global_path: Option<PathBuf>,
        local_path: Option<PathBuf>,
    ) -> Self {
        self.config_global_path = global_path;
        self.config_local_path = local_path;
        self
    }
}

#[cfg(test)]
mod tests;
