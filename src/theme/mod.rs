//! Light/dark theme selection and persistence.
//!
//! The chosen [`Theme`] is mirrored onto a [`Presentation`] flag, which is
//! the only thing the styling layer reads. A stored preference always wins
//! over the system default.

pub mod detect;

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::storage::{MemoryStore, PreferenceStore};

/// Preference key holding the persisted theme.
pub const THEME_KEY: &str = "theme";

static DOCUMENT: Presentation = Presentation::new();

/// The two display themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Only the exact literals are accepted.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Global presentation state: whether the dark palette is in effect.
#[derive(Debug)]
pub struct Presentation {
    dark: AtomicBool,
}

impl Presentation {
    pub const fn new() -> Self {
        Self {
            dark: AtomicBool::new(false),
        }
    }

    pub fn is_dark(&self) -> bool {
        self.dark.load(Ordering::Relaxed)
    }
}

impl Default for Presentation {
    fn default() -> Self {
        Self::new()
    }
}

/// The process-wide presentation state used for rendering.
pub fn document() -> &'static Presentation {
    &DOCUMENT
}

/// Mirror `theme` onto the presentation flag.
fn apply_theme(presentation: &Presentation, theme: Theme) {
    presentation
        .dark
        .store(theme == Theme::Dark, Ordering::Relaxed);
}

/// Owns the current theme, its storage, and the surface it is applied to.
pub struct ThemeToggle {
    theme: Theme,
    store: Box<dyn PreferenceStore>,
    presentation: &'static Presentation,
}

impl ThemeToggle {
    /// Resolve the initial theme and apply it.
    ///
    /// A valid stored value wins; anything else falls back to
    /// `system_preference`.
    pub fn init(
        store: Box<dyn PreferenceStore>,
        system_preference: Theme,
        presentation: &'static Presentation,
    ) -> Self {
        let stored = store.get(THEME_KEY).as_deref().and_then(Theme::parse);
        let theme = stored.unwrap_or(system_preference);
        tracing::debug!(%theme, stored = stored.is_some(), "theme initialized");
        apply_theme(presentation, theme);
        Self {
            theme,
            store,
            presentation,
        }
    }

    pub const fn theme(&self) -> Theme {
        self.theme
    }

    /// The surface this toggle applies its theme to.
    pub const fn presentation(&self) -> &'static Presentation {
        self.presentation
    }

    /// Flip the theme, persist it, and re-apply it.
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        if let Err(err) = self.store.set(THEME_KEY, self.theme.as_str()) {
            tracing::warn!(theme = %self.theme, "failed to persist theme: {err}");
        }
        apply_theme(self.presentation, self.theme);
        self.theme
    }
}

impl Default for ThemeToggle {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            store: Box::new(MemoryStore::new()),
            presentation: document(),
        }
    }
}

impl fmt::Debug for ThemeToggle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeToggle")
            .field("theme", &self.theme)
            .finish_non_exhaustive()
    }
}
