//! Portfolio content model.
//!
//! Content is plain data deserialized from JSON. A sample portfolio ships
//! with the binary; `--content` points at a user file with the same shape.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

const BUNDLED: &str = include_str!("../../assets/portfolio.json");

/// Errors raised while loading portfolio content.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid portfolio content in {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    pub hero: Hero,
    pub about: About,
    pub skills: Skills,
    pub projects: Projects,
    pub contact: Contact,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    #[serde(default)]
    pub greeting: String,
    pub name: String,
    pub tagline: String,
    #[serde(default)]
    pub summary: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct About {
    pub title: String,
    #[serde(default)]
    pub paragraphs: Vec<String>,
    /// Short list of core technologies shown under the prose
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skills {
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub categories: Vec<SkillCategory>,
    #[serde(default)]
    pub learning: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Projects {
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub items: Vec<Project>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub repo_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub title: String,
    #[serde(default)]
    pub intro: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub links: Vec<SocialLink>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
}

impl Portfolio {
    /// The sample portfolio compiled into the binary.
    ///
    /// # Errors
    /// Returns an error if the bundled JSON does not match the content model.
    pub fn bundled() -> Result<Self, ContentError> {
        Self::from_json(BUNDLED, "bundled portfolio")
    }

    /// Parse portfolio JSON. `origin` names the source in error messages.
    ///
    /// # Errors
    /// Returns an error if `json` is not a valid portfolio.
    pub fn from_json(json: &str, origin: &str) -> Result<Self, ContentError> {
        serde_json::from_str(json).map_err(|source| ContentError::Parse {
            origin: origin.to_string(),
            source,
        })
    }

    /// Load portfolio content from a JSON file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_path(path: &Path) -> Result<Self, ContentError> {
        let json = std::fs::read_to_string(path).map_err(|source| ContentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json, &path.display().to_string())
    }
}
