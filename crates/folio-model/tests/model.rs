//! Tests for folio-model types.

use folio_model::{ContentTable, ModelError, ProjectId, SectionId};

fn minimal_table() -> ContentTable {
    serde_json::from_value(serde_json::json!({
        "profile": {
            "name": "Ada Example",
            "initials": "AE",
            "tagline": "Builds things"
        },
        "projects": [
            {
                "title": "Alpha",
                "description": "First",
                "company": "Acme",
                "outcome": "Shipped",
                "featured": true,
                "challenge": "Hard",
                "approach": "Careful",
                "results": ["Done"],
                "learnings": "Plenty",
                "period": "2020",
                "role": "Lead",
                "technologies": ["Rust", "SQL", "Kafka", "AWS", "Terraform", "Docker"]
            },
            {
                "title": "Beta",
                "description": "Second",
                "company": "Acme",
                "outcome": "Shipped",
                "challenge": "Harder",
                "approach": "Quick",
                "learnings": "Some",
                "period": "2021",
                "role": "Engineer"
            }
        ],
        "contact": { "email": "ada@example.com" }
    }))
    .expect("deserialize content table")
}

#[test]
fn section_ids_serialize_as_anchor_names() {
    let json = serde_json::to_string(&SectionId::Experience).expect("serialize section");
    assert_eq!(json, "\"experience\"");
    let round: SectionId = serde_json::from_str("\"skills\"").expect("deserialize section");
    assert_eq!(round, SectionId::Skills);
}

#[test]
fn optional_content_fields_default() {
    let table = minimal_table();
    assert!(table.principles.is_empty());
    assert!(table.experience.is_empty());
    assert!(table.contact.links.is_empty());
    assert_eq!(table.contact.mailto(), "mailto:ada@example.com");

    let beta = &table.projects[1];
    assert!(!beta.featured);
    assert!(beta.results.is_empty());
    assert!(beta.image.is_none());
}

#[test]
fn featured_projects_keep_table_ids() {
    let table = minimal_table();
    let featured: Vec<_> = table
        .featured_projects()
        .map(|(id, project)| (id, project.title.as_str()))
        .collect();
    assert_eq!(featured, vec![(ProjectId::new(0), "Alpha")]);
}

#[test]
fn tech_preview_reports_overflow() {
    let table = minimal_table();
    let (shown, rest) = table.projects[0].tech_preview(4);
    assert_eq!(shown, ["Rust", "SQL", "Kafka", "AWS"]);
    assert_eq!(rest, 2);

    let (shown, rest) = table.projects[1].tech_preview(4);
    assert!(shown.is_empty());
    assert_eq!(rest, 0);
}

#[test]
fn project_lookup_is_bounds_checked() {
    let table = minimal_table();
    let id = table.project_id(1).expect("valid id");
    assert_eq!(table.project(id).map(|p| p.title.as_str()), Some("Beta"));
    assert!(matches!(
        table.project_id(2),
        Err(ModelError::InvalidProjectId(2))
    ));
    assert!(table.project(ProjectId::new(9)).is_none());
}
