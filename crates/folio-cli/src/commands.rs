use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use folio_cli::replay::{ReplayReport, ReplayScript, run_script};
use folio_content::{load_content_from, load_default_content};
use folio_core::{Portfolio, ViewConfig, resolve_search};
use folio_model::{ContentTable, SectionId};

use crate::cli::{ContentArgs, ReplayArgs, SearchArgs};

pub fn run_content(args: &ContentArgs) -> Result<ContentTable> {
    load_content(args.content.as_deref())
}

/// Returns the joined query and the section it resolves to.
pub fn run_search(args: &SearchArgs) -> (String, Option<SectionId>) {
    let query = args.query.join(" ");
    let section = resolve_search(&query);
    (query, section)
}

pub fn run_replay(args: &ReplayArgs) -> Result<ReplayReport> {
    let span = info_span!("replay", script = %args.script.display());
    let _guard = span.enter();

    let content = load_content(args.content.as_deref())?;
    let config = match &args.config {
        Some(path) => ViewConfig::load_from(path)
            .with_context(|| format!("load view config {}", path.display()))?,
        None => ViewConfig::default(),
    };
    let script = ReplayScript::load(&args.script)?;
    info!(events = script.events.len(), "replay script loaded");
    Ok(run_script(&script, Portfolio::new(content, config)))
}

fn load_content(path: Option<&Path>) -> Result<ContentTable> {
    match path {
        Some(path) => {
            load_content_from(path).with_context(|| format!("load content {}", path.display()))
        }
        None => load_default_content().context("load bundled content"),
    }
}
