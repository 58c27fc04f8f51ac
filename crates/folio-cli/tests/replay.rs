//! Integration tests for scripted replays.

use std::fs;
use std::path::PathBuf;

use insta::assert_snapshot;

use folio_cli::replay::{ReplayScript, run_script};
use folio_content::load_default_content;
use folio_core::{Portfolio, ViewConfig};
use folio_model::SectionId;

fn unique_temp_dir(name: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!(
        "folio-cli-{}-{}-{}",
        name,
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    fs::create_dir_all(&dir).unwrap();
    dir
}

const SCRIPT: &str = r#"{
  "layout": {
    "viewport": { "width": 1200, "height": 1000 },
    "sections": {
      "hero": { "x": 0, "y": 0, "width": 1200, "height": 1000 },
      "about": { "x": 0, "y": 1000, "width": 1200, "height": 1000 },
      "projects": { "x": 0, "y": 2000, "width": 1200, "height": 1000 },
      "experience": { "x": 0, "y": 3000, "width": 1200, "height": 1000 },
      "skills": { "x": 0, "y": 4000, "width": 1200, "height": 1000 },
      "contact": { "x": 0, "y": 5000, "width": 1200, "height": 1000 }
    },
    "reveal": [
      { "key": "hero-title", "rect": { "x": 100, "y": 100, "width": 600, "height": 80 } }
    ],
    "carousel": { "content_width": 3208, "viewport_width": 1200 }
  },
  "events": [
    { "at_ms": 100, "event": { "scroll": { "scroll_y": 1850, "width": 1200, "height": 1000 } } },
    { "at_ms": 200, "event": { "carousel_arrow": "right" } },
    { "at_ms": 300, "event": "tick" },
    { "at_ms": 500, "event": "tick" },
    { "at_ms": 600, "event": { "set_mobile_menu": true } },
    { "at_ms": 700, "event": { "search": "can I hire you" } },
    { "at_ms": 800, "event": "toggle_dark_mode" },
    { "at_ms": 900, "event": { "select_project": 1 } },
    { "at_ms": 1000, "event": "close_project" }
  ]
}"#;

fn page() -> Portfolio {
    Portfolio::new(
        load_default_content().expect("bundled content"),
        ViewConfig::default(),
    )
}

#[test]
fn replay_produces_change_log() {
    let script = ReplayScript::parse(SCRIPT).expect("parse script");
    let report = run_script(&script, page());

    assert_snapshot!(report.change_log().join("\n"), @r#"
    0ms mount: carousel page 1/4 left=false right=true
    0ms mount: revealed hero-title
    100ms scroll y=1850: active section = projects
    200ms carousel arrow right: scroll carousel to 404 (smooth)
    300ms tick: no change
    500ms tick: carousel page 2/4 left=true right=true
    600ms set mobile menu true: mobile menu open
    700ms search "can I hire you": mobile menu closed
    700ms search "can I hire you": search query "can I hire you"
    700ms search "can I hire you": scroll window to 5000 (smooth)
    800ms toggle dark mode: theme = dark
    900ms select project #1: selected project #1
    1000ms close project: project modal closed
    "#);
    assert_eq!(report.change_count(), 12);
}

#[test]
fn final_snapshot_serializes() {
    let script = ReplayScript::parse(SCRIPT).expect("parse script");
    let report = run_script(&script, page());
    assert_eq!(report.snapshot.active_section, SectionId::Projects);

    let json = serde_json::to_value(&report).expect("serialize report");
    assert_eq!(json["snapshot"]["theme"], "dark");
    assert_eq!(json["snapshot"]["carousel"]["current_page"], 1);
    assert_eq!(json["snapshot"]["view"]["search_query"], "can I hire you");
    assert_eq!(json["steps"][0]["input"], "mount");
    assert_eq!(json["steps"][1]["changes"][0]["change"], "active_section");
}

#[test]
fn script_loads_from_disk() {
    let dir = unique_temp_dir("load");
    let path = dir.join("script.json");
    fs::write(&path, SCRIPT).unwrap();
    let script = ReplayScript::load(&path).expect("load script");
    assert_eq!(script.events.len(), 9);
    assert_eq!(script.layout.sections.len(), 6);
}

#[test]
fn out_of_order_events_are_rejected() {
    let error = ReplayScript::parse(
        r#"{ "events": [ { "at_ms": 50, "event": "tick" }, { "at_ms": 10, "event": "tick" } ] }"#,
    )
    .unwrap_err();
    assert!(error.to_string().contains("earlier than the event before it"));
}

#[test]
fn missing_script_reports_path() {
    let dir = unique_temp_dir("missing");
    let path = dir.join("nope.json");
    let error = ReplayScript::load(&path).unwrap_err();
    assert!(format!("{error:#}").contains("nope.json"));
}

#[test]
fn empty_layout_leaves_page_inert() {
    let script = ReplayScript::parse(
        r#"{ "events": [ { "at_ms": 0, "event": { "navigate": "contact" } } ] }"#,
    )
    .expect("parse script");
    let report = run_script(&script, page());
    assert_snapshot!(report.change_log().join("\n"), @r"
    0ms mount: no change
    0ms navigate contact: no change
    ");
}
