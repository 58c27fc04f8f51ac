use std::collections::BTreeSet;

use folio_model::ContentTable;

use crate::error::ContentError;

/// Reject content tables the view layer cannot present unambiguously.
///
/// The first failure wins; a table is either accepted whole or not at all.
pub fn validate(table: &ContentTable) -> Result<(), ContentError> {
    let mut titles = BTreeSet::new();
    for (index, project) in table.projects.iter().enumerate() {
        let title = project.title.trim();
        if title.is_empty() {
            return Err(ContentError::EmptyProjectTitle { index });
        }
        if !titles.insert(title) {
            return Err(ContentError::DuplicateProjectTitle {
                title: title.to_string(),
            });
        }
    }
    for (index, category) in table.skills.iter().enumerate() {
        if category.category.trim().is_empty() {
            return Err(ContentError::EmptySkillCategory { index });
        }
    }
    if table.contact.email.trim().is_empty() {
        return Err(ContentError::MissingContactEmail);
    }
    Ok(())
}
