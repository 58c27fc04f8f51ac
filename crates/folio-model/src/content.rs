//! Static content records.
//!
//! These are literal, externally supplied values. Nothing here is computed at
//! runtime; the view-state core only selects from them.

use serde::{Deserialize, Serialize};

use crate::ModelError;
use crate::ids::ProjectId;

/// Headline identity shown in the hero and about sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    /// Post-nominal credentials (e.g. "PMP, PMI-ACP").
    #[serde(default)]
    pub credentials: String,
    /// Fallback text for the avatar when the image is unavailable.
    pub initials: String,
    pub tagline: String,
    /// Opaque avatar image reference. Never fetched by the core.
    #[serde(default)]
    pub avatar: Option<String>,
    /// Biography paragraphs.
    #[serde(default)]
    pub bio: Vec<String>,
    #[serde(default)]
    pub traits: Vec<String>,
}

/// A "How I Work" card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principle {
    pub title: String,
    pub summary: String,
}

/// A career project shown as a carousel card and in the detail modal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub company: String,
    pub outcome: String,
    #[serde(default)]
    pub featured: bool,
    pub challenge: String,
    pub approach: String,
    #[serde(default)]
    pub results: Vec<String>,
    pub learnings: String,
    pub period: String,
    pub role: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    /// Opaque thumbnail reference.
    #[serde(default)]
    pub image: Option<String>,
}

impl Project {
    /// Technology tags shown on the card: the first `limit` tags and the
    /// number of tags left over (rendered as a `+N` badge).
    pub fn tech_preview(&self, limit: usize) -> (&[String], usize) {
        let shown = self.technologies.len().min(limit);
        (
            &self.technologies[..shown],
            self.technologies.len() - shown,
        )
    }
}

/// One entry of the work-history timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: String,
}

/// A named group of skills.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    pub items: Vec<String>,
}

/// An external profile link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactLink {
    pub label: String,
    pub url: String,
}

/// Contact endpoints rendered as static links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    #[serde(default)]
    pub links: Vec<ContactLink>,
}

impl ContactInfo {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

/// The full static content table consumed by the view-state core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentTable {
    pub profile: Profile,
    #[serde(default)]
    pub principles: Vec<Principle>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    pub contact: ContactInfo,
}

impl ContentTable {
    /// Look up a project by id.
    pub fn project(&self, id: ProjectId) -> Option<&Project> {
        self.projects.get(id.index())
    }

    /// Validate a project id against this table.
    pub fn project_id(&self, index: usize) -> Result<ProjectId, ModelError> {
        if index < self.projects.len() {
            Ok(ProjectId::new(index))
        } else {
            Err(ModelError::InvalidProjectId(index))
        }
    }

    /// Projects flagged as featured, with their ids, in table order.
    pub fn featured_projects(&self) -> impl Iterator<Item = (ProjectId, &Project)> {
        self.projects
            .iter()
            .enumerate()
            .filter(|(_, project)| project.featured)
            .map(|(index, project)| (ProjectId::new(index), project))
    }
}
