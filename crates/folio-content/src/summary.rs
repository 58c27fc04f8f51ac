use serde::Serialize;

use folio_model::ContentTable;

/// Counts and highlights of a content table, for listings and logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentSummary {
    pub name: String,
    pub projects: usize,
    pub featured: Vec<String>,
    pub experience: usize,
    pub skill_categories: usize,
    pub skills: usize,
    pub contact_links: usize,
}

impl ContentSummary {
    pub fn from_table(table: &ContentTable) -> Self {
        Self {
            name: table.profile.name.clone(),
            projects: table.projects.len(),
            featured: table
                .featured_projects()
                .map(|(_, project)| project.title.clone())
                .collect(),
            experience: table.experience.len(),
            skill_categories: table.skills.len(),
            skills: table.skills.iter().map(|c| c.items.len()).sum(),
            contact_links: table.contact.links.len(),
        }
    }
}
