use std::path::{Path, PathBuf};

use folio_model::ContentTable;
use tracing::{debug, info};

use crate::error::ContentError;
use crate::validate::validate;

const BUNDLED_CONTENT: &str = include_str!("../data/portfolio.json");
const BUNDLED_CONTENT_PATH: &str = "data/portfolio.json";

/// Path reported in errors for the content table compiled into the crate.
pub fn bundled_content_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(BUNDLED_CONTENT_PATH)
}

/// Load the content table shipped with the crate.
pub fn load_default_content() -> Result<ContentTable, ContentError> {
    parse_content(BUNDLED_CONTENT, &bundled_content_path())
}

/// Load a content table from a JSON file on disk.
pub fn load_content_from(path: &Path) -> Result<ContentTable, ContentError> {
    let source = std::fs::read_to_string(path).map_err(|e| ContentError::io(path, e))?;
    parse_content(&source, path)
}

/// Parse and validate a JSON content table. `origin` is only used for
/// error reporting.
pub fn parse_content(source: &str, origin: &Path) -> Result<ContentTable, ContentError> {
    let table: ContentTable =
        serde_json::from_str(source).map_err(|e| ContentError::json(origin, e))?;
    validate(&table)?;
    info!(
        path = %origin.display(),
        projects = table.projects.len(),
        experience = table.experience.len(),
        skills = table.skills.len(),
        "content loaded"
    );
    debug!(featured = table.featured_projects().count(), "featured projects");
    Ok(table)
}
