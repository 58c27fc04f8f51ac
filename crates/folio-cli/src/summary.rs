use anyhow::Result;
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use folio_cli::replay::{ReplayReport, describe_change};
use folio_content::ContentSummary;
use folio_model::{ContentTable, ProjectId, SectionId};

/// Tags shown on a project card before the `+N` badge.
const TECH_PREVIEW: usize = 4;

pub fn print_content(table: &ContentTable) {
    let summary = ContentSummary::from_table(table);
    println!("Profile: {}", summary.name);
    if !table.profile.tagline.is_empty() {
        println!("Tagline: {}", table.profile.tagline);
    }
    println!("Contact: {}", table.contact.mailto());
    for link in &table.contact.links {
        println!("  {}: {}", link.label, link.url);
    }
    println!(
        "Projects: {} ({} featured), experience entries: {}, skills: {} in {} categories",
        summary.projects,
        summary.featured.len(),
        summary.experience,
        summary.skills,
        summary.skill_categories
    );

    let mut projects = Table::new();
    projects.set_header(vec![
        header_cell("#"),
        header_cell("Project"),
        header_cell("Company"),
        header_cell("Period"),
        header_cell("Featured"),
        header_cell("Technologies"),
    ]);
    apply_summary_table_style(&mut projects);
    align_column(&mut projects, 0, CellAlignment::Right);
    align_column(&mut projects, 4, CellAlignment::Center);
    for (index, project) in table.projects.iter().enumerate() {
        let (shown, more) = project.tech_preview(TECH_PREVIEW);
        let mut tech = shown.join(", ");
        if more > 0 {
            tech.push_str(&format!(" +{more}"));
        }
        projects.add_row(vec![
            dim_cell(ProjectId::new(index)),
            Cell::new(&project.title).add_attribute(Attribute::Bold),
            Cell::new(&project.company),
            Cell::new(&project.period),
            featured_cell(project.featured),
            Cell::new(tech),
        ]);
    }
    println!();
    println!("Projects:");
    println!("{projects}");

    let mut experience = Table::new();
    experience.set_header(vec![
        header_cell("Role"),
        header_cell("Company"),
        header_cell("Period"),
    ]);
    apply_table_style(&mut experience);
    for entry in &table.experience {
        experience.add_row(vec![
            Cell::new(&entry.title),
            Cell::new(&entry.company),
            dim_cell(&entry.period),
        ]);
    }
    println!();
    println!("Experience:");
    println!("{experience}");

    let mut skills = Table::new();
    skills.set_header(vec![
        header_cell("Category"),
        header_cell("Count"),
        header_cell("Skills"),
    ]);
    apply_table_style(&mut skills);
    align_column(&mut skills, 1, CellAlignment::Right);
    for category in &table.skills {
        skills.add_row(vec![
            Cell::new(&category.category).fg(Color::Blue),
            Cell::new(category.items.len()),
            Cell::new(category.items.join(", ")),
        ]);
    }
    println!();
    println!("Skills:");
    println!("{skills}");
}

pub fn print_search(query: &str, section: Option<SectionId>) {
    match section {
        Some(section) => println!("{query:?} -> {} (#{section})", section.label()),
        None => println!("{query:?} -> no matching section"),
    }
}

pub fn print_replay(report: &ReplayReport) {
    let mut log = Table::new();
    log.set_header(vec![
        header_cell("At"),
        header_cell("Input"),
        header_cell("Change"),
    ]);
    apply_table_style(&mut log);
    align_column(&mut log, 0, CellAlignment::Right);
    for step in &report.steps {
        let at = format!("{}ms", step.at_ms);
        if step.changes.is_empty() {
            log.add_row(vec![dim_cell(&at), Cell::new(&step.input), dim_cell("-")]);
        }
        for change in &step.changes {
            log.add_row(vec![
                dim_cell(&at),
                Cell::new(&step.input),
                Cell::new(describe_change(change)),
            ]);
        }
    }
    println!("Changes:");
    println!("{log}");

    let snapshot = &report.snapshot;
    let mut state = Table::new();
    state.set_header(vec![header_cell("State"), header_cell("Value")]);
    apply_table_style(&mut state);
    let carousel = &snapshot.carousel;
    let rows = [
        ("Active section", snapshot.active_section.label().to_string()),
        ("Revealed", snapshot.revealed.join(", ")),
        (
            "Carousel",
            format!(
                "page {}/{} at {:.0}px",
                carousel.current_page + 1,
                carousel.total_pages,
                carousel.scroll_offset
            ),
        ),
        ("Theme", if snapshot.theme.is_dark() { "dark" } else { "light" }.to_string()),
        ("Mobile menu", open_closed(snapshot.view.mobile_menu_open).to_string()),
        (
            "Selected project",
            snapshot.selected_title.clone().unwrap_or_else(|| "-".to_string()),
        ),
        ("Search query", snapshot.view.search_query.clone()),
    ];
    for (label, value) in rows {
        state.add_row(vec![Cell::new(label).add_attribute(Attribute::Bold), Cell::new(value)]);
    }
    println!();
    println!("Final state:");
    println!("{state}");
}

pub fn print_replay_json(report: &ReplayReport) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn featured_cell(featured: bool) -> Cell {
    if featured {
        Cell::new("★").fg(Color::Yellow).add_attribute(Attribute::Bold)
    } else {
        dim_cell("-")
    }
}

fn open_closed(value: bool) -> &'static str {
    if value { "open" } else { "closed" }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
