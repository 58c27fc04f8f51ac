//! Horizontal paging over the project cards.
//!
//! The controller owns the scroll offset of one strip and derives everything
//! else (edge flags, page count, current page) from three numbers: the
//! offset, the total scrollable width and the visible width. Derivation is
//! O(1) so it can run on every raw scroll event.
//!
//! Programmatic moves (`scroll_by`, `jump_to_page`) record a pending target
//! and hand a [`ScrollRequest`] to the UI layer. The published state keeps the
//! last known offset, so its flags and page always agree with its own
//! `scroll_offset`. The target is adopted when the transition settles: either
//! on an explicit [`CarouselController::scroll_settled`] signal or, failing
//! that, once the fixed settle window has elapsed
//! ([`CarouselController::poll_settle`]). A raw scroll report replaces the
//! pending target.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::CarouselConfig;
use crate::scroll::{ScrollBehavior, ScrollRequest};

/// Paging direction for the arrow buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
}

/// Observable carousel state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselState {
    pub scroll_offset: f64,
    pub content_width: f64,
    pub viewport_width: f64,
    pub can_scroll_left: bool,
    pub can_scroll_right: bool,
    pub current_page: usize,
    pub total_pages: usize,
}

impl Default for CarouselState {
    fn default() -> Self {
        Self {
            scroll_offset: 0.0,
            content_width: 0.0,
            viewport_width: 0.0,
            can_scroll_left: false,
            can_scroll_right: false,
            current_page: 0,
            total_pages: 1,
        }
    }
}

/// One entry of the page indicator strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageDot {
    pub index: usize,
    pub active: bool,
}

#[derive(Debug)]
pub struct CarouselController {
    config: CarouselConfig,
    behavior: ScrollBehavior,
    item_count: usize,
    state: CarouselState,
    /// Offset commanded by the last smooth move, not yet reached.
    pending_offset: Option<f64>,
    settle_deadline: Option<Instant>,
}

impl CarouselController {
    pub fn new(config: CarouselConfig, item_count: usize) -> Self {
        Self {
            config,
            behavior: ScrollBehavior::default(),
            item_count,
            state: CarouselState::default(),
            pending_offset: None,
            settle_deadline: None,
        }
    }

    pub fn with_behavior(mut self, behavior: ScrollBehavior) -> Self {
        self.behavior = behavior;
        self
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Largest reachable offset; zero when the content fits.
    pub fn max_offset(&self) -> f64 {
        (self.state.content_width - self.state.viewport_width).max(0.0)
    }

    /// Whole cards that fit in the viewport, at least one.
    pub fn visible_items_per_page(&self) -> usize {
        let stride = self.config.stride();
        if stride <= 0.0 {
            return 1;
        }
        let fits = (self.state.viewport_width / stride).floor();
        if fits >= 1.0 { fits as usize } else { 1 }
    }

    /// Where the strip is headed: the pending target if a smooth move is in
    /// flight, otherwise the current offset.
    pub fn target_offset(&self) -> f64 {
        self.pending_offset.unwrap_or(self.state.scroll_offset)
    }

    /// New container/content geometry (mount, content reflow).
    /// Returns whether any derived value changed.
    pub fn set_geometry(&mut self, content_width: f64, viewport_width: f64) -> bool {
        self.state.content_width = sanitize(content_width);
        self.state.viewport_width = sanitize(viewport_width);
        let max_offset = self.max_offset();
        self.state.scroll_offset = self.state.scroll_offset.clamp(0.0, max_offset);
        self.pending_offset = self
            .pending_offset
            .map(|target| target.clamp(0.0, max_offset));
        trace!(
            content_width = self.state.content_width,
            viewport_width = self.state.viewport_width,
            "carousel resized"
        );
        self.recompute()
    }

    pub fn on_resize(&mut self, content_width: f64, viewport_width: f64) -> bool {
        self.set_geometry(content_width, viewport_width)
    }

    /// Raw scroll position reported by the UI layer.
    pub fn on_scroll(&mut self, offset: f64) -> bool {
        self.state.scroll_offset = sanitize(offset).min(self.max_offset());
        self.pending_offset = None;
        trace!(offset = self.state.scroll_offset, "carousel scrolled");
        self.recompute()
    }

    /// Re-derive edge flags and paging from the current geometry.
    /// Returns whether any derived value changed.
    pub fn recompute(&mut self) -> bool {
        let previous = (
            self.state.can_scroll_left,
            self.state.can_scroll_right,
            self.state.current_page,
            self.state.total_pages,
        );

        let offset = self.state.scroll_offset;
        let max_offset = self.max_offset();
        if self.item_count == 0 || self.state.viewport_width >= self.state.content_width {
            self.state.can_scroll_left = false;
            self.state.can_scroll_right = false;
            self.state.total_pages = 1;
            self.state.current_page = 0;
        } else {
            let total_pages = self.item_count.div_ceil(self.visible_items_per_page()).max(1);
            let last_page = (total_pages - 1) as f64;
            let progress = offset / max_offset.max(1.0);
            self.state.can_scroll_left = offset > 0.0;
            self.state.can_scroll_right = offset < max_offset - self.config.epsilon;
            self.state.total_pages = total_pages;
            self.state.current_page = (progress * last_page).round().clamp(0.0, last_page) as usize;
        }

        let current = (
            self.state.can_scroll_left,
            self.state.can_scroll_right,
            self.state.current_page,
            self.state.total_pages,
        );
        if current != previous {
            debug!(
                page = self.state.current_page,
                pages = self.state.total_pages,
                left = self.state.can_scroll_left,
                right = self.state.can_scroll_right,
                "carousel state changed"
            );
        }
        current != previous
    }

    /// Move one card in `direction`, clamped to the scrollable range.
    pub fn scroll_by(&mut self, direction: Direction, now: Instant) -> ScrollRequest {
        let step = match direction {
            Direction::Left => -self.config.stride(),
            Direction::Right => self.config.stride(),
        };
        let target = (self.target_offset() + step).clamp(0.0, self.max_offset());
        debug!(?direction, target, "carousel scroll requested");
        self.commit(target, now)
    }

    /// Move to page `page` (clamped to the last page).
    pub fn jump_to_page(&mut self, page: usize, now: Instant) -> ScrollRequest {
        let total_pages = self.state.total_pages.max(1);
        let page = page.min(total_pages - 1);
        let target = if total_pages == 1 {
            0.0
        } else {
            page as f64 / (total_pages - 1) as f64 * self.max_offset()
        };
        debug!(page, target, "carousel page jump requested");
        self.commit(target, now)
    }

    fn commit(&mut self, target: f64, now: Instant) -> ScrollRequest {
        match self.behavior {
            // A newer command replaces any pending target and deadline.
            ScrollBehavior::Smooth => {
                self.pending_offset = Some(target);
                self.settle_deadline = Some(now + self.config.settle_delay());
            }
            ScrollBehavior::Instant => {
                self.state.scroll_offset = target;
                self.pending_offset = None;
                self.settle_deadline = None;
                self.recompute();
            }
        }
        ScrollRequest::carousel(target, self.behavior)
    }

    pub fn is_settling(&self) -> bool {
        self.settle_deadline.is_some()
    }

    /// Fire the fixed settle window if it has elapsed. Returns whether the
    /// state was re-derived.
    pub fn poll_settle(&mut self, now: Instant) -> bool {
        match self.settle_deadline {
            Some(deadline) if now >= deadline => {
                self.settle();
                true
            }
            _ => false,
        }
    }

    /// Scroll-end signal from the platform; settles immediately.
    pub fn scroll_settled(&mut self) -> bool {
        self.settle()
    }

    fn settle(&mut self) -> bool {
        self.settle_deadline = None;
        if let Some(target) = self.pending_offset.take() {
            self.state.scroll_offset = target;
        }
        self.recompute()
    }

    pub fn page_dots(&self) -> Vec<PageDot> {
        (0..self.state.total_pages)
            .map(|index| PageDot {
                index,
                active: index == self.state.current_page,
            })
            .collect()
    }
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}
