//! Scripted replay of page events.
//!
//! A script is the measured layout plus a list of events stamped with a
//! millisecond offset from mount:
//!
//! ```json
//! {
//!   "layout": { "viewport": { "width": 1200, "height": 1000 }, "sections": { ... } },
//!   "events": [
//!     { "at_ms": 100, "event": { "scroll": { "scroll_y": 1850, "width": 1200, "height": 1000 } } },
//!     { "at_ms": 400, "event": "tick" }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use folio_core::{
    Direction, PageEvent, PageLayout, PageSnapshot, Portfolio, ScrollBehavior, ScrollTarget,
    ViewChange,
};

/// One timed event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptedEvent {
    pub at_ms: u64,
    pub event: PageEvent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayScript {
    #[serde(default)]
    pub layout: PageLayout,
    #[serde(default)]
    pub events: Vec<ScriptedEvent>,
}

impl ReplayScript {
    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("read replay script {}", path.display()))?;
        Self::parse(&source).with_context(|| format!("parse replay script {}", path.display()))
    }

    pub fn parse(source: &str) -> Result<Self> {
        let script: Self = serde_json::from_str(source)?;
        script.check_order()?;
        Ok(script)
    }

    fn check_order(&self) -> Result<()> {
        for (index, pair) in self.events.windows(2).enumerate() {
            if pair[1].at_ms < pair[0].at_ms {
                bail!(
                    "event {} at {}ms is earlier than the event before it ({}ms)",
                    index + 1,
                    pair[1].at_ms,
                    pair[0].at_ms
                );
            }
        }
        Ok(())
    }
}

/// Changes produced by one input (the mount or a scripted event).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayStep {
    pub at_ms: u64,
    pub input: String,
    pub changes: Vec<ViewChange>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayReport {
    pub steps: Vec<ReplayStep>,
    pub snapshot: PageSnapshot,
}

impl ReplayReport {
    /// One line per change, prefixed with the time and the input.
    pub fn change_log(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for step in &self.steps {
            if step.changes.is_empty() {
                lines.push(format!("{}ms {}: no change", step.at_ms, step.input));
            }
            for change in &step.changes {
                lines.push(format!(
                    "{}ms {}: {}",
                    step.at_ms,
                    step.input,
                    describe_change(change)
                ));
            }
        }
        lines
    }

    pub fn change_count(&self) -> usize {
        self.steps.iter().map(|step| step.changes.len()).sum()
    }
}

/// Mount `page` with the script layout and feed it every event.
pub fn run_script(script: &ReplayScript, mut page: Portfolio) -> ReplayReport {
    let start = Instant::now();
    let mut steps = Vec::with_capacity(script.events.len() + 1);

    page.mount(&script.layout);
    steps.push(ReplayStep {
        at_ms: 0,
        input: "mount".to_string(),
        changes: page.drain_changes(),
    });

    for scripted in &script.events {
        let input = describe_event(&scripted.event);
        debug!(at_ms = scripted.at_ms, %input, "replaying event");
        let now = start + Duration::from_millis(scripted.at_ms);
        page.handle(scripted.event.clone(), now);
        steps.push(ReplayStep {
            at_ms: scripted.at_ms,
            input,
            changes: page.drain_changes(),
        });
    }

    let report = ReplayReport {
        steps,
        snapshot: page.snapshot(),
    };
    info!(
        events = script.events.len(),
        changes = report.change_count(),
        "replay finished"
    );
    report
}

pub fn describe_event(event: &PageEvent) -> String {
    match event {
        PageEvent::Scroll(viewport) => format!("scroll y={:.0}", viewport.scroll_y),
        PageEvent::Resize { viewport, .. } => {
            format!("resize {:.0}x{:.0}", viewport.width, viewport.height)
        }
        PageEvent::CarouselScroll(offset) => format!("carousel scroll {offset:.0}"),
        PageEvent::CarouselResize {
            content_width,
            viewport_width,
        } => format!("carousel resize {content_width:.0}/{viewport_width:.0}"),
        PageEvent::CarouselArrow(direction) => {
            format!("carousel arrow {}", direction_name(*direction))
        }
        PageEvent::CarouselDot(page) => format!("carousel dot {page}"),
        PageEvent::CarouselSettled => "carousel settled".to_string(),
        PageEvent::Tick => "tick".to_string(),
        PageEvent::Navigate(section) => format!("navigate {section}"),
        PageEvent::Search(query) => format!("search {query:?}"),
        PageEvent::ToggleDarkMode => "toggle dark mode".to_string(),
        PageEvent::SetMobileMenu(open) => format!("set mobile menu {open}"),
        PageEvent::SelectProject(project) => format!("select project {project}"),
        PageEvent::CloseProject => "close project".to_string(),
        PageEvent::RegisterReveal { key, .. } => format!("register reveal {key}"),
    }
}

pub fn describe_change(change: &ViewChange) -> String {
    match change {
        ViewChange::ActiveSection { section } => format!("active section = {section}"),
        ViewChange::Revealed { keys } => format!("revealed {}", keys.join(", ")),
        ViewChange::Carousel { state } => format!(
            "carousel page {}/{} left={} right={}",
            state.current_page + 1,
            state.total_pages,
            state.can_scroll_left,
            state.can_scroll_right
        ),
        ViewChange::Scroll { request } => {
            let target = match request.target {
                ScrollTarget::Window => "window",
                ScrollTarget::Carousel => "carousel",
            };
            let behavior = match request.behavior {
                ScrollBehavior::Smooth => "smooth",
                ScrollBehavior::Instant => "instant",
            };
            format!("scroll {target} to {:.0} ({behavior})", request.offset)
        }
        ViewChange::Theme { theme } => {
            format!("theme = {}", if theme.is_dark() { "dark" } else { "light" })
        }
        ViewChange::MobileMenu { open } => {
            format!("mobile menu {}", if *open { "open" } else { "closed" })
        }
        ViewChange::SelectedProject {
            project: Some(project),
        } => format!("selected project {project}"),
        ViewChange::SelectedProject { project: None } => "project modal closed".to_string(),
        ViewChange::SearchQuery { query } => format!("search query {query:?}"),
    }
}

fn direction_name(direction: Direction) -> &'static str {
    match direction {
        Direction::Left => "left",
        Direction::Right => "right",
    }
}
