//! Theming and color definitions.
//!
//! The palette follows the presentation flag set by the theme toggle; no
//! other state decides which colors are used.

use ratatui::style::{Color, Modifier, Style};

use crate::page::LineType;
use crate::theme::Presentation;

/// Colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub primary: Color,
    pub secondary: Color,
    pub surface: Color,
    pub border: Color,
}

impl Palette {
    pub const LIGHT: Self = Self {
        background: Color::Rgb(250, 250, 252),
        foreground: Color::Rgb(15, 23, 42),
        muted: Color::Rgb(100, 116, 139),
        primary: Color::Rgb(124, 58, 237),
        secondary: Color::Rgb(14, 116, 144),
        surface: Color::Rgb(241, 245, 249),
        border: Color::Rgb(203, 213, 225),
    };

    pub const DARK: Self = Self {
        background: Color::Rgb(3, 7, 17),
        foreground: Color::Rgb(248, 250, 252),
        muted: Color::Rgb(148, 163, 184),
        primary: Color::Rgb(167, 139, 250),
        secondary: Color::Rgb(34, 211, 238),
        surface: Color::Rgb(30, 41, 59),
        border: Color::Rgb(51, 65, 85),
    };

    pub const fn for_dark(dark: bool) -> Self {
        if dark { Self::DARK } else { Self::LIGHT }
    }

    /// The palette for whatever theme is applied to `presentation`.
    pub fn for_presentation(presentation: &Presentation) -> Self {
        Self::for_dark(presentation.is_dark())
    }

    pub fn base(&self) -> Style {
        Style::new().fg(self.foreground).bg(self.background)
    }
}

/// Get the style for a given line type.
pub fn style_for_line_type(line_type: LineType, palette: &Palette) -> Style {
    let base = palette.base();
    match line_type {
        LineType::Greeting => base.fg(palette.primary),
        LineType::Title => base.add_modifier(Modifier::BOLD),
        LineType::Tagline => base.fg(palette.primary).add_modifier(Modifier::BOLD),
        LineType::Heading => base.fg(palette.primary).add_modifier(Modifier::BOLD),
        LineType::Subheading => base.add_modifier(Modifier::BOLD),
        LineType::Paragraph | LineType::Empty => base,
        LineType::Muted => base.fg(palette.muted),
        LineType::Tags => base.fg(palette.secondary),
        LineType::Link => base
            .fg(palette.secondary)
            .add_modifier(Modifier::UNDERLINED),
    }
}

/// Navigation entry style, highlighted when it is the active section.
pub fn nav_entry_style(active: bool, palette: &Palette) -> Style {
    if active {
        Style::new()
            .fg(palette.background)
            .bg(palette.primary)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::new().fg(palette.muted).bg(palette.surface)
    }
}
