//! Terminal UI components.
//!
//! This module contains all UI-related code including:
//! - [`viewport`]: Scroll position, visible range and smooth scrolling
//! - [`navbar`]: Bottom navigation bar layout and hit testing
//! - [`style`]: Theme palettes

pub mod navbar;
pub mod style;
pub mod viewport;

mod overlays;
mod render;
mod status;

pub use render::{ScreenLayout, page_content_width, page_height, render, split_screen};

/// Rows taken by the bottom navigation bar (borders included).
pub const NAVBAR_HEIGHT: u16 = 3;
/// Rows below the page: navigation bar plus status line.
pub const CHROME_ROWS: u16 = NAVBAR_HEIGHT + 1;
/// Widest the page content gets, regardless of terminal width.
pub const MAX_CONTENT_WIDTH: u16 = 88;
pub const PAGE_PADDING: u16 = 2;
