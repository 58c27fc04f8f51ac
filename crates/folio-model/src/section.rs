//! Page sections and the navigation entries that point at them.
//!
//! The landing page is a single scrollable document split into a fixed,
//! ordered set of sections. Navigation highlighting, smart search and the
//! scroll-into-view commands all speak in terms of [`SectionId`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ModelError;

/// A named section anchor on the landing page.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    /// Hero banner at the top of the page (initial active section).
    #[default]
    Hero,
    /// Biography and highlights.
    About,
    /// Project catalog (carousel).
    Projects,
    /// Work-history timeline.
    Experience,
    /// Skills directory.
    Skills,
    /// Contact links.
    Contact,
}

impl SectionId {
    /// All sections in page order.
    pub const ALL: [SectionId; 6] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Projects,
        SectionId::Experience,
        SectionId::Skills,
        SectionId::Contact,
    ];

    /// Returns the anchor identifier used by the presentation layer.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Projects => "projects",
            SectionId::Experience => "experience",
            SectionId::Skills => "skills",
            SectionId::Contact => "contact",
        }
    }

    /// Returns the human-readable label shown in navigation.
    pub fn label(&self) -> &'static str {
        match self {
            SectionId::Hero => "Home",
            SectionId::About => "About",
            SectionId::Projects => "Projects",
            SectionId::Experience => "Experience",
            SectionId::Skills => "Skills",
            SectionId::Contact => "Contact",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = ModelError;

    /// Parse a section anchor name (case-insensitive, surrounding whitespace ignored).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        SectionId::ALL
            .into_iter()
            .find(|section| section.as_str() == normalized)
            .ok_or_else(|| ModelError::UnknownSection(s.to_string()))
    }
}

/// One entry of the top navigation bar / mobile menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub section: SectionId,
    pub label: &'static str,
}

/// Navigation entries in display order. The hero banner has no entry.
pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem {
        section: SectionId::About,
        label: "About",
    },
    NavItem {
        section: SectionId::Projects,
        label: "Projects",
    },
    NavItem {
        section: SectionId::Experience,
        label: "Experience",
    },
    NavItem {
        section: SectionId::Skills,
        label: "Skills",
    },
    NavItem {
        section: SectionId::Contact,
        label: "Contact",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Projects".parse::<SectionId>().unwrap(), SectionId::Projects);
        assert_eq!(" contact ".parse::<SectionId>().unwrap(), SectionId::Contact);
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "blog".parse::<SectionId>().unwrap_err();
        assert!(matches!(err, ModelError::UnknownSection(name) if name == "blog"));
    }

    #[test]
    fn nav_items_skip_hero() {
        assert!(NAV_ITEMS.iter().all(|item| item.section != SectionId::Hero));
        assert_eq!(NAV_ITEMS.len(), SectionId::ALL.len() - 1);
    }
}
