//! Portfolio content and page layout.
//!
//! This module handles:
//! - Loading portfolio content (bundled sample or a JSON file)
//! - Laying content out into typed rows at a given width
//! - Recording which rows belong to which section

mod content;
mod layout;
mod types;

pub use content::{
    About, Contact, ContentError, Hero, Portfolio, Project, Projects, SkillCategory, Skills,
    SocialLink,
};
pub use layout::{layout, wrap};
pub use types::{LineType, Page, RenderedLine, SectionSpan};
