//! Viewport management for scrolling.
//!
//! The [`Viewport`] tracks the visible rows of the page. Besides immediate
//! scrolling it supports an animated scroll toward a target row, advanced
//! one step per tick by the event loop.

use std::ops::Range;

/// Manages the visible portion of the page.
///
/// # Example
///
/// ```
/// use folio::ui::viewport::Viewport;
///
/// let mut vp = Viewport::new(80, 24, 100);
/// vp.scroll_to_smooth(40);
/// while vp.step_smooth_scroll() {}
/// assert_eq!(vp.visible_range(), 40..64);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    width: u16,
    height: u16,
    offset: usize,
    total_lines: usize,
    /// Destination of an in-flight smooth scroll
    target: Option<usize>,
}

impl Viewport {
    /// Create a new viewport.
    ///
    /// # Arguments
    ///
    /// * `width` - Terminal width in columns
    /// * `height` - Rows available to the page
    /// * `total_lines` - Total rows in the page
    pub const fn new(width: u16, height: u16, total_lines: usize) -> Self {
        Self {
            width,
            height,
            offset: 0,
            total_lines,
            target: None,
        }
    }

    pub const fn offset(&self) -> usize {
        self.offset
    }

    pub const fn width(&self) -> u16 {
        self.width
    }

    pub const fn height(&self) -> u16 {
        self.height
    }

    pub const fn total_lines(&self) -> usize {
        self.total_lines
    }

    /// Rows currently on screen, clamped to the page.
    pub fn visible_range(&self) -> Range<usize> {
        let start = self.offset.min(self.total_lines);
        let end = (self.offset + self.height as usize).min(self.total_lines);
        start..end
    }

    /// Get the scroll percentage (0-100).
    pub fn scroll_percent(&self) -> u8 {
        let max_offset = self.max_offset();
        if max_offset == 0 {
            return 100;
        }

        // Percentage value always 0-100
        #[allow(
            clippy::cast_precision_loss,
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss
        )]
        {
            ((self.offset as f64 / max_offset as f64) * 100.0).round() as u8
        }
    }

    pub const fn scroll_up(&mut self, n: usize) {
        self.target = None;
        self.offset = self.offset.saturating_sub(n);
    }

    pub fn scroll_down(&mut self, n: usize) {
        self.target = None;
        self.offset = (self.offset + n).min(self.max_offset());
    }

    pub const fn page_up(&mut self) {
        self.scroll_up(self.height as usize);
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.height as usize);
    }

    pub const fn half_page_up(&mut self) {
        self.scroll_up(self.height as usize / 2);
    }

    pub fn half_page_down(&mut self) {
        self.scroll_down(self.height as usize / 2);
    }

    pub const fn go_to_top(&mut self) {
        self.target = None;
        self.offset = 0;
    }

    pub const fn go_to_bottom(&mut self) {
        self.target = None;
        self.offset = self.max_offset();
    }

    /// Jump so `line` is the top row.
    pub fn go_to_line(&mut self, line: usize) {
        self.target = None;
        self.offset = line.min(self.max_offset());
    }

    /// Start an animated scroll that ends with `line` at the top.
    pub fn scroll_to_smooth(&mut self, line: usize) {
        let target = line.min(self.max_offset());
        self.target = (target != self.offset).then_some(target);
    }

    /// Whether a smooth scroll is still in flight.
    pub const fn is_animating(&self) -> bool {
        self.target.is_some()
    }

    /// Advance the smooth scroll by one frame.
    ///
    /// Each step covers a third of the remaining distance, at least one row.
    /// Returns `true` if the offset moved.
    pub fn step_smooth_scroll(&mut self) -> bool {
        let Some(target) = self.target else {
            return false;
        };
        let distance = target.abs_diff(self.offset);
        let step = distance.div_ceil(3).max(1);
        if target > self.offset {
            self.offset += step.min(distance);
        } else {
            self.offset -= step.min(distance);
        }
        if self.offset == target {
            self.target = None;
        }
        distance > 0
    }

    /// Resize the viewport, keeping the offset valid.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.clamp();
    }

    /// Update the total number of rows (after a relayout or reload).
    pub fn set_total_lines(&mut self, total: usize) {
        self.total_lines = total;
        self.clamp();
    }

    fn clamp(&mut self) {
        let max = self.max_offset();
        self.offset = self.offset.min(max);
        self.target = self.target.map(|t| t.min(max)).filter(|t| *t != self.offset);
    }

    const fn max_offset(&self) -> usize {
        self.total_lines.saturating_sub(self.height as usize)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(80, 24, 0)
    }
}
