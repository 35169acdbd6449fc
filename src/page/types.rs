use crate::scrollspy::{Geometry, SectionId, SectionLookup};

/// Semantic type of a laid-out line, used for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineType {
    /// Small lead-in above the hero title
    Greeting,
    /// The hero title (name)
    Title,
    /// Hero tagline
    Tagline,
    /// Section heading
    Heading,
    /// Secondary heading (skill category, project title)
    Subheading,
    /// Normal prose
    Paragraph,
    /// Dimmed supporting text
    Muted,
    /// Technology chips
    Tags,
    /// A labelled URL
    Link,
    /// Empty line
    Empty,
}

/// A single laid-out line of the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine {
    content: String,
    line_type: LineType,
}

impl RenderedLine {
    pub const fn new(content: String, line_type: LineType) -> Self {
        Self { content, line_type }
    }

    pub const fn empty() -> Self {
        Self::new(String::new(), LineType::Empty)
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub const fn line_type(&self) -> LineType {
        self.line_type
    }
}

/// The rows occupied by one section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpan {
    pub id: SectionId,
    pub top: usize,
    pub height: usize,
}

impl Geometry for SectionSpan {
    fn top(&self) -> usize {
        self.top
    }

    fn height(&self) -> usize {
        self.height
    }
}

/// A fully laid-out portfolio page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    lines: Vec<RenderedLine>,
    sections: Vec<SectionSpan>,
}

impl Page {
    /// A page with nothing rendered yet. Every section lookup misses.
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) const fn from_parts(lines: Vec<RenderedLine>, sections: Vec<SectionSpan>) -> Self {
        Self { lines, sections }
    }

    pub fn lines(&self) -> &[RenderedLine] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Lines in `start..end`, clamped to the page.
    pub fn visible_lines(&self, start: usize, end: usize) -> &[RenderedLine] {
        let end = end.min(self.lines.len());
        let start = start.min(end);
        &self.lines[start..end]
    }

    pub fn sections(&self) -> &[SectionSpan] {
        &self.sections
    }

    pub fn section(&self, id: SectionId) -> Option<&SectionSpan> {
        self.sections.iter().find(|span| span.id == id)
    }

    /// The section that owns `row`, if any.
    pub fn section_at(&self, row: usize) -> Option<SectionId> {
        self.sections
            .iter()
            .find(|span| span.contains(row))
            .map(|span| span.id)
    }
}

impl SectionLookup for Page {
    fn find(&self, id: SectionId) -> Option<&dyn Geometry> {
        self.section(id).map(|span| span as &dyn Geometry)
    }
}
