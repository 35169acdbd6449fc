// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. theme::ThemeToggle)
    clippy::module_name_repetitions
)]

//! # Folio
//!
//! A single-page developer portfolio for the terminal.
//!
//! Folio renders a portfolio as one long scrolling page with:
//! - Hero, about, skills, projects and contact sections
//! - A navigation bar that tracks the section in view (scroll-spy)
//! - Smooth-scrolling section navigation
//! - A persisted light/dark theme toggle
//! - File watching for live preview of custom content
//!
//! ## Architecture
//!
//! Folio uses The Elm Architecture (TEA) pattern:
//! - **Model**: Application state
//! - **Message**: Events and actions
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`app`]: Main application loop and state
//! - [`logging`]: Log output routing
//! - [`page`]: Portfolio content and page layout
//! - [`scrollspy`]: Active-section tracking
//! - [`theme`]: Theme resolution, toggling and detection
//! - [`storage`]: Preference persistence
//! - [`ui`]: Terminal UI components
//! - [`watcher`]: Content file watching

pub mod app;
pub mod config;
pub mod logging;
pub mod page;
pub mod scrollspy;
pub mod storage;
pub mod theme;
pub mod ui;
pub mod watcher;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model};
    pub use crate::page::{Page, Portfolio};
    pub use crate::scrollspy::{ScrollSpy, SectionId};
    pub use crate::theme::{Theme, ThemeToggle};
    pub use crate::ui::viewport::Viewport;
}
