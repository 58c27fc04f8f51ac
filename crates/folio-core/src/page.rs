//! Page coordinator: one owned state container for the whole landing page.
//!
//! [`Portfolio`] wires the trackers, the carousel, navigation and the view
//! state together behind a single event entry point. The presentation layer
//! feeds it [`PageEvent`]s and drains the resulting [`ViewChange`]s to
//! re-render. Nothing here touches a rendering toolkit.

use std::collections::BTreeMap;
use std::time::Instant;

use folio_model::{ContentTable, Project, ProjectId, Rect, SectionId, Viewport};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace, warn};

use crate::carousel::{CarouselController, CarouselState, Direction, PageDot};
use crate::config::ViewConfig;
use crate::navigation::Navigation;
use crate::reveal::RevealTracker;
use crate::scroll::ScrollRequest;
use crate::sections::SectionTracker;
use crate::store::{Theme, ViewState};

// ============================================================================
// Layout and events
// ============================================================================

/// A reveal-tagged element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevealTarget {
    pub key: String,
    pub rect: Rect,
}

/// Measured size of the carousel strip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarouselGeometry {
    pub content_width: f64,
    pub viewport_width: f64,
}

/// Element geometry measured by the presentation layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageLayout {
    pub viewport: Viewport,
    /// Section anchors in document coordinates. Missing sections stay
    /// unregistered.
    pub sections: BTreeMap<SectionId, Rect>,
    pub reveal: Vec<RevealTarget>,
    pub carousel: Option<CarouselGeometry>,
}

/// Input from the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageEvent {
    /// Window scrolled.
    Scroll(Viewport),
    /// Window resized; `layout` carries re-measured geometry when known.
    Resize {
        viewport: Viewport,
        #[serde(default)]
        layout: Option<PageLayout>,
    },
    /// Raw carousel scroll position.
    CarouselScroll(f64),
    CarouselResize {
        content_width: f64,
        viewport_width: f64,
    },
    CarouselArrow(Direction),
    CarouselDot(usize),
    /// Scroll-end signal for the carousel.
    CarouselSettled,
    /// Timer tick; drives the carousel settle window.
    Tick,
    Navigate(SectionId),
    Search(String),
    ToggleDarkMode,
    SetMobileMenu(bool),
    SelectProject(ProjectId),
    CloseProject,
    /// Lazily mounted element tagged for reveal.
    RegisterReveal { key: String, rect: Rect },
}

impl PageEvent {
    /// Geometry events are dropped once the page is unmounted.
    pub fn is_geometry(&self) -> bool {
        matches!(
            self,
            PageEvent::Scroll(_)
                | PageEvent::Resize { .. }
                | PageEvent::CarouselScroll(_)
                | PageEvent::CarouselResize { .. }
                | PageEvent::RegisterReveal { .. }
        )
    }
}

/// Output for the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "change", rename_all = "snake_case")]
pub enum ViewChange {
    ActiveSection { section: SectionId },
    Revealed { keys: Vec<String> },
    /// Edge flags or paging changed.
    Carousel { state: CarouselState },
    /// The UI layer should scroll a surface.
    Scroll { request: ScrollRequest },
    Theme { theme: Theme },
    MobileMenu { open: bool },
    SelectedProject { project: Option<ProjectId> },
    SearchQuery { query: String },
}

/// Serializable view of the whole page state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageSnapshot {
    pub lifecycle: Lifecycle,
    pub active_section: SectionId,
    pub revealed: Vec<String>,
    pub carousel: CarouselState,
    pub page_dots: Vec<PageDot>,
    pub theme: Theme,
    pub view: ViewState,
    /// Title of the project shown in the modal.
    pub selected_title: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Lifecycle {
    Created,
    Mounted,
    Unmounted,
}

// ============================================================================
// Coordinator
// ============================================================================

#[derive(Debug)]
pub struct Portfolio {
    content: ContentTable,
    config: ViewConfig,
    sections: SectionTracker,
    reveal: RevealTracker,
    carousel: CarouselController,
    navigation: Navigation,
    state: ViewState,
    viewport: Viewport,
    lifecycle: Lifecycle,
    changes: Vec<ViewChange>,
}

impl Portfolio {
    pub fn new(content: ContentTable, config: ViewConfig) -> Self {
        let carousel = CarouselController::new(config.carousel.clone(), content.projects.len())
            .with_behavior(config.scroll_behavior);
        Self {
            sections: SectionTracker::new(config.sections.options()),
            reveal: RevealTracker::new(config.reveal.options()),
            navigation: Navigation::new(config.scroll_behavior),
            carousel,
            content,
            config,
            state: ViewState::default(),
            viewport: Viewport::default(),
            lifecycle: Lifecycle::Created,
            changes: Vec::new(),
        }
    }

    /// Register the measured layout and run the initial evaluation.
    pub fn mount(&mut self, layout: &PageLayout) {
        if self.lifecycle != Lifecycle::Created {
            warn!(lifecycle = ?self.lifecycle, "mount ignored");
            return;
        }
        for section in SectionId::ALL {
            if !layout.sections.contains_key(&section) {
                warn!(%section, "section anchor missing; section stays unregistered");
            }
        }
        self.lifecycle = Lifecycle::Mounted;
        self.apply_layout(layout);
        info!(
            sections = layout.sections.len(),
            reveal = layout.reveal.len(),
            projects = self.content.projects.len(),
            "page mounted"
        );
        self.viewport = layout.viewport;
        self.evaluate();
    }

    /// Tear down both observers. Later geometry events are ignored.
    pub fn unmount(&mut self) {
        if self.lifecycle == Lifecycle::Unmounted {
            return;
        }
        self.sections.disconnect();
        self.reveal.disconnect();
        self.lifecycle = Lifecycle::Unmounted;
        info!("page unmounted");
    }

    pub fn handle(&mut self, event: PageEvent, now: Instant) {
        if event.is_geometry() && self.lifecycle != Lifecycle::Mounted {
            debug!(?event, lifecycle = ?self.lifecycle, "geometry event ignored");
            return;
        }
        match event {
            PageEvent::Scroll(viewport) => {
                trace!(scroll_y = viewport.scroll_y, "window scrolled");
                self.viewport = viewport;
                self.evaluate();
            }
            PageEvent::Resize { viewport, layout } => {
                trace!(width = viewport.width, height = viewport.height, "window resized");
                if let Some(layout) = layout {
                    self.apply_layout(&layout);
                }
                self.viewport = viewport;
                self.evaluate();
            }
            PageEvent::CarouselScroll(offset) => {
                self.track_carousel(|carousel| carousel.on_scroll(offset));
            }
            PageEvent::CarouselResize {
                content_width,
                viewport_width,
            } => {
                self.track_carousel(|carousel| carousel.on_resize(content_width, viewport_width));
            }
            PageEvent::CarouselArrow(direction) => {
                let request = self.track_carousel(|carousel| carousel.scroll_by(direction, now));
                self.publish(ViewChange::Scroll { request });
            }
            PageEvent::CarouselDot(page) => {
                let request = self.track_carousel(|carousel| carousel.jump_to_page(page, now));
                self.publish(ViewChange::Scroll { request });
            }
            PageEvent::CarouselSettled => {
                self.track_carousel(CarouselController::scroll_settled);
            }
            PageEvent::Tick => {
                self.track_carousel(|carousel| carousel.poll_settle(now));
            }
            PageEvent::Navigate(section) => {
                let request = self.with_menu(|nav, state| nav.scroll_to_section(section, state));
                if let Some(request) = request {
                    self.publish(ViewChange::Scroll { request });
                }
            }
            PageEvent::Search(query) => {
                let request = self.with_menu(|nav, state| nav.search(&query, state));
                self.publish(ViewChange::SearchQuery { query });
                if let Some(request) = request {
                    self.publish(ViewChange::Scroll { request });
                }
            }
            PageEvent::ToggleDarkMode => {
                let theme = self.state.toggle_dark_mode();
                self.publish(ViewChange::Theme { theme });
            }
            PageEvent::SetMobileMenu(open) => {
                if self.state.set_mobile_menu_open(open) {
                    self.publish(ViewChange::MobileMenu { open });
                }
            }
            PageEvent::SelectProject(project) => {
                if self.content.project(project).is_none() {
                    debug!(%project, "selection of unknown project ignored");
                    return;
                }
                self.set_selection(Some(project));
            }
            PageEvent::CloseProject => self.set_selection(None),
            PageEvent::RegisterReveal { key, rect } => {
                if self.reveal.register(key, rect) {
                    self.evaluate_reveal();
                }
            }
        }
    }

    /// Take every change published since the last drain.
    pub fn drain_changes(&mut self) -> Vec<ViewChange> {
        std::mem::take(&mut self.changes)
    }

    pub fn snapshot(&self) -> PageSnapshot {
        PageSnapshot {
            lifecycle: self.lifecycle,
            active_section: self.sections.active(),
            revealed: self.reveal.revealed().to_vec(),
            carousel: self.carousel.state().clone(),
            page_dots: self.carousel.page_dots(),
            theme: self.state.theme(),
            view: self.state.clone(),
            selected_title: self.selected_project().map(|project| project.title.clone()),
        }
    }

    /// Project shown in the detail modal.
    pub fn selected_project(&self) -> Option<&Project> {
        self.state
            .selected_project
            .and_then(|project| self.content.project(project))
    }

    pub fn active_section(&self) -> SectionId {
        self.sections.active()
    }

    pub fn is_revealed(&self, key: &str) -> bool {
        self.reveal.is_revealed(key)
    }

    pub fn carousel(&self) -> &CarouselState {
        self.carousel.state()
    }

    pub fn view_state(&self) -> &ViewState {
        &self.state
    }

    pub fn content(&self) -> &ContentTable {
        &self.content
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    fn apply_layout(&mut self, layout: &PageLayout) {
        for (&section, &rect) in &layout.sections {
            self.sections.register(section, rect);
            self.navigation.register_anchor(section, rect);
        }
        for target in &layout.reveal {
            self.reveal.register(target.key.clone(), target.rect);
        }
        if let Some(geometry) = layout.carousel {
            self.track_carousel(|carousel| {
                carousel.set_geometry(geometry.content_width, geometry.viewport_width)
            });
        }
    }

    fn evaluate(&mut self) {
        if let Some(section) = self.sections.on_viewport(&self.viewport) {
            self.publish(ViewChange::ActiveSection { section });
        }
        self.evaluate_reveal();
    }

    fn evaluate_reveal(&mut self) {
        let keys = self.reveal.on_viewport(&self.viewport);
        if !keys.is_empty() {
            self.publish(ViewChange::Revealed { keys });
        }
    }

    /// Run a carousel operation and publish its state if paging changed.
    fn track_carousel<R>(&mut self, update: impl FnOnce(&mut CarouselController) -> R) -> R {
        let before = paging(self.carousel.state());
        let result = update(&mut self.carousel);
        if paging(self.carousel.state()) != before {
            self.publish(ViewChange::Carousel {
                state: self.carousel.state().clone(),
            });
        }
        result
    }

    /// Run a navigation operation and publish a menu change if it closed the
    /// mobile menu.
    fn with_menu<R>(&mut self, action: impl FnOnce(&Navigation, &mut ViewState) -> R) -> R {
        let was_open = self.state.mobile_menu_open;
        let result = action(&self.navigation, &mut self.state);
        if self.state.mobile_menu_open != was_open {
            self.publish(ViewChange::MobileMenu {
                open: self.state.mobile_menu_open,
            });
        }
        result
    }

    fn set_selection(&mut self, project: Option<ProjectId>) {
        if self.state.selected_project == project {
            return;
        }
        self.state.select_project(project);
        self.publish(ViewChange::SelectedProject { project });
    }

    fn publish(&mut self, change: ViewChange) {
        self.changes.push(change);
    }
}

fn paging(state: &CarouselState) -> (bool, bool, usize, usize) {
    (
        state.can_scroll_left,
        state.can_scroll_right,
        state.current_page,
        state.total_pages,
    )
}
