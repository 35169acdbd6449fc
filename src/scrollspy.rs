//! Scroll-spy section tracking.
//!
//! The page is divided into a fixed, ordered set of sections. On every scroll
//! the [`ScrollSpy`] probes the row at the vertical center of the viewport and
//! marks the first section (in declaration order) whose span contains it as
//! active. Geometry comes from a [`SectionLookup`], so the matching logic runs
//! the same against a laid-out [`crate::page::Page`] or a fake in tests.

use std::collections::HashMap;
use std::fmt;

/// Identifier of one page section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum SectionId {
    #[default]
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl SectionId {
    /// All sections in declaration (document) order.
    pub const ALL: [Self; 5] = [
        Self::Home,
        Self::About,
        Self::Skills,
        Self::Projects,
        Self::Contact,
    ];

    /// Stable identifier used in anchors and messages.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    /// Human-readable label shown in the navigation bar.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.as_str() == s)
    }

    /// Position in [`SectionId::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The following section, or `None` after the last one.
    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// The preceding section, or `None` before the first one.
    pub fn prev(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Vertical extent of a section, in document rows.
pub trait Geometry {
    fn top(&self) -> usize;
    fn height(&self) -> usize;

    /// Half-open membership test: `top <= y < top + height`.
    fn contains(&self, y: usize) -> bool {
        y >= self.top() && y < self.top().saturating_add(self.height())
    }
}

/// Resolves a section id to its geometry, if the section exists.
pub trait SectionLookup {
    fn find(&self, id: SectionId) -> Option<&dyn Geometry>;
}

impl<G: Geometry> SectionLookup for HashMap<SectionId, G> {
    fn find(&self, id: SectionId) -> Option<&dyn Geometry> {
        self.get(&id).map(|g| g as &dyn Geometry)
    }
}

/// The row tested for section membership: the viewport center.
pub const fn probe_point(offset: usize, viewport_height: u16) -> usize {
    offset + viewport_height as usize / 2
}

/// Tracks which section is currently in view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollSpy {
    active: SectionId,
}

impl ScrollSpy {
    pub const fn new(initial: SectionId) -> Self {
        Self { active: initial }
    }

    /// The currently active section.
    pub const fn active(&self) -> SectionId {
        self.active
    }

    /// Recompute the active section for a scroll position.
    ///
    /// Missing sections are skipped. When the probe falls outside every
    /// section the previous value is kept. Returns `true` if the active
    /// section changed.
    pub fn observe(
        &mut self,
        offset: usize,
        viewport_height: u16,
        lookup: &impl SectionLookup,
    ) -> bool {
        let probe = probe_point(offset, viewport_height);
        let hit = SectionId::ALL.into_iter().find(|id| {
            lookup
                .find(*id)
                .is_some_and(|geometry| geometry.contains(probe))
        });
        match hit {
            Some(id) if id != self.active => {
                tracing::debug!(from = %self.active, to = %id, probe, "active section changed");
                self.active = id;
                true
            }
            _ => false,
        }
    }

    /// Scroll target for activating a section: its top row.
    ///
    /// Does not change the active section; that follows once the viewport
    /// reports the new position. Returns `None` when the section is absent.
    pub fn navigate_to(&self, id: SectionId, lookup: &impl SectionLookup) -> Option<usize> {
        lookup.find(id).map(|geometry| geometry.top())
    }
}
