//! Lays out portfolio content into fixed-width rows.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::content::Portfolio;
use super::types::{LineType, Page, RenderedLine, SectionSpan};
use crate::scrollspy::SectionId;

const TAG_SEPARATOR: &str = " · ";

/// Lay out `portfolio` at `width` columns.
///
/// Each section is padded to at least `min_section_height` rows with its
/// content vertically centered, so a section always fills the viewport.
pub fn layout(portfolio: &Portfolio, width: u16, min_section_height: usize) -> Page {
    let width = usize::from(width.max(1));
    let mut lines = Vec::new();
    let mut sections = Vec::with_capacity(SectionId::ALL.len());

    for id in SectionId::ALL {
        let body = section_lines(portfolio, id, width);
        let top = lines.len();
        let padding = min_section_height.saturating_sub(body.len());
        let above = padding / 2;
        lines.extend(std::iter::repeat_with(RenderedLine::empty).take(above));
        lines.extend(body);
        lines.extend(std::iter::repeat_with(RenderedLine::empty).take(padding - above));
        sections.push(SectionSpan {
            id,
            top,
            height: lines.len() - top,
        });
    }

    tracing::debug!(
        width,
        min_section_height,
        total = lines.len(),
        "page laid out"
    );
    Page::from_parts(lines, sections)
}

fn section_lines(portfolio: &Portfolio, id: SectionId, width: usize) -> Vec<RenderedLine> {
    let mut out = Lines::new(width);
    out.blank();
    match id {
        SectionId::Home => {
            let hero = &portfolio.hero;
            if !hero.greeting.is_empty() {
                out.text(&hero.greeting, LineType::Greeting);
            }
            out.text(&hero.name, LineType::Title);
            out.text(&hero.tagline, LineType::Tagline);
            if !hero.summary.is_empty() {
                out.blank();
                out.text(&hero.summary, LineType::Paragraph);
            }
            out.blank();
            out.text(
                "[4] View my work   [5] Get in touch",
                LineType::Muted,
            );
        }
        SectionId::About => {
            let about = &portfolio.about;
            out.heading(&about.title);
            for paragraph in &about.paragraphs {
                out.text(paragraph, LineType::Paragraph);
                out.blank();
            }
            if !about.highlights.is_empty() {
                out.text("Core Technologies", LineType::Subheading);
                out.tags(&about.highlights);
            }
        }
        SectionId::Skills => {
            let skills = &portfolio.skills;
            out.heading(&skills.title);
            if let Some(subtitle) = &skills.subtitle {
                out.text(subtitle, LineType::Muted);
                out.blank();
            }
            for category in &skills.categories {
                out.text(&category.title, LineType::Subheading);
                out.tags(&category.skills);
                out.blank();
            }
            if let Some(learning) = &skills.learning {
                out.text(learning, LineType::Muted);
            }
        }
        SectionId::Projects => {
            let projects = &portfolio.projects;
            out.heading(&projects.title);
            if let Some(subtitle) = &projects.subtitle {
                out.text(subtitle, LineType::Muted);
                out.blank();
            }
            for project in &projects.items {
                out.text(&project.title, LineType::Subheading);
                out.text(&project.description, LineType::Paragraph);
                out.tags(&project.tech);
                if let Some(url) = &project.live_url {
                    out.text(&format!("Live: {url}"), LineType::Link);
                }
                if let Some(url) = &project.repo_url {
                    out.text(&format!("Code: {url}"), LineType::Link);
                }
                out.blank();
            }
        }
        SectionId::Contact => {
            let contact = &portfolio.contact;
            out.heading(&contact.title);
            if !contact.intro.is_empty() {
                out.text(&contact.intro, LineType::Paragraph);
                out.blank();
            }
            for (label, value) in [
                ("Email", &contact.email),
                ("Phone", &contact.phone),
                ("Location", &contact.location),
            ] {
                if let Some(value) = value {
                    out.text(&format!("{label}: {value}"), LineType::Muted);
                }
            }
            if !contact.links.is_empty() {
                out.blank();
                for link in &contact.links {
                    out.text(&format!("{}: {}", link.name, link.url), LineType::Link);
                }
            }
        }
    }
    out.blank();
    out.finish()
}

struct Lines {
    width: usize,
    lines: Vec<RenderedLine>,
}

impl Lines {
    const fn new(width: usize) -> Self {
        Self {
            width,
            lines: Vec::new(),
        }
    }

    fn blank(&mut self) {
        if self
            .lines
            .last()
            .is_none_or(|line| line.line_type() != LineType::Empty)
        {
            self.lines.push(RenderedLine::empty());
        }
    }

    fn heading(&mut self, title: &str) {
        self.text(title, LineType::Heading);
        let rule_width = UnicodeWidthStr::width(title).clamp(1, self.width);
        self.lines
            .push(RenderedLine::new("─".repeat(rule_width), LineType::Heading));
        self.blank();
    }

    fn text(&mut self, text: &str, line_type: LineType) {
        for row in wrap(text, self.width) {
            self.lines.push(RenderedLine::new(row, line_type));
        }
    }

    fn tags(&mut self, tags: &[String]) {
        if tags.is_empty() {
            return;
        }
        self.text(&tags.join(TAG_SEPARATOR), LineType::Tags);
    }

    fn finish(self) -> Vec<RenderedLine> {
        self.lines
    }
}

/// Greedy word wrap by display width. Words wider than `width` are split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = UnicodeWidthStr::width(word);
        let needed = if current.is_empty() {
            word_width
        } else {
            current_width + 1 + word_width
        };
        if needed <= width {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            current_width = needed;
            continue;
        }
        if !current.is_empty() {
            rows.push(std::mem::take(&mut current));
            current_width = 0;
        }
        if word_width <= width {
            current.push_str(word);
            current_width = word_width;
            continue;
        }
        for ch in word.chars() {
            let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
            if current_width + ch_width > width && !current.is_empty() {
                rows.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push(ch);
            current_width += ch_width;
        }
    }
    if !current.is_empty() || rows.is_empty() {
        rows.push(current);
    }
    rows
}
