//! Active-section tracking for navigation highlighting.

use folio_model::{Rect, SectionId, Viewport};
use tracing::debug;

use crate::observer::{GeometryObserver, IntersectionEntry, ObserverOptions};

/// Keeps the navigation highlight in sync with the scroll position.
///
/// The active section only changes when a section newly enters the trigger
/// band. When nothing is inside the band the previous value is kept, so the
/// highlight is never empty.
#[derive(Debug)]
pub struct SectionTracker {
    observer: GeometryObserver<SectionId>,
    active: SectionId,
}

impl SectionTracker {
    pub fn new(options: ObserverOptions) -> Self {
        Self {
            observer: GeometryObserver::new(options),
            active: SectionId::default(),
        }
    }

    /// Register (or move) the anchor for `section`.
    pub fn register(&mut self, section: SectionId, rect: Rect) -> bool {
        self.observer.observe(section, rect)
    }

    pub fn is_registered(&self, section: SectionId) -> bool {
        self.observer.contains(&section)
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    /// Re-evaluate against the viewport. Returns the new active section if
    /// it changed.
    pub fn on_viewport(&mut self, viewport: &Viewport) -> Option<SectionId> {
        let mut latest = None;
        self.observer
            .dispatch(viewport, &mut |entries: &[IntersectionEntry<SectionId>]| {
                latest = last_intersecting(entries);
            });
        self.activate(latest)
    }

    /// Apply a batch of entries in delivery order; the last intersecting
    /// entry wins.
    pub fn apply(&mut self, entries: &[IntersectionEntry<SectionId>]) -> Option<SectionId> {
        self.activate(last_intersecting(entries))
    }

    fn activate(&mut self, section: Option<SectionId>) -> Option<SectionId> {
        let previous = self.active;
        let section = section.filter(|&section| section != previous)?;
        self.active = section;
        debug!(from = %previous, to = %section, "active section changed");
        Some(section)
    }

    pub fn disconnect(&mut self) {
        self.observer.disconnect();
    }

    pub fn is_connected(&self) -> bool {
        self.observer.is_connected()
    }
}

fn last_intersecting(entries: &[IntersectionEntry<SectionId>]) -> Option<SectionId> {
    entries
        .iter()
        .rev()
        .find(|entry| entry.is_intersecting)
        .map(|entry| entry.key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SectionsConfig;

    const HEIGHT: f64 = 1000.0;

    /// Six stacked sections, each one viewport tall.
    fn tracker() -> SectionTracker {
        let mut tracker = SectionTracker::new(SectionsConfig::default().options());
        for (index, section) in SectionId::ALL.into_iter().enumerate() {
            tracker.register(
                section,
                Rect::new(0.0, index as f64 * HEIGHT, 1200.0, HEIGHT),
            );
        }
        tracker
    }

    fn at(scroll_y: f64) -> Viewport {
        Viewport::new(1200.0, HEIGHT).scrolled_to(scroll_y)
    }

    #[test]
    fn starts_on_hero() {
        let mut tracker = tracker();
        assert_eq!(tracker.active(), SectionId::Hero);
        assert_eq!(tracker.on_viewport(&at(0.0)), None);
        assert_eq!(tracker.active(), SectionId::Hero);
    }

    #[test]
    fn follows_scroll_in_both_directions() {
        let mut tracker = tracker();
        tracker.on_viewport(&at(0.0));
        // Band spans 20%..30% of the viewport: document y 2050..2150 at 1850.
        assert_eq!(tracker.on_viewport(&at(1850.0)), Some(SectionId::Projects));
        assert_eq!(tracker.on_viewport(&at(3650.0)), Some(SectionId::Experience));
        assert_eq!(tracker.on_viewport(&at(1000.0)), Some(SectionId::About));
    }

    #[test]
    fn last_intersecting_entry_in_batch_wins() {
        let mut tracker = tracker();
        let entry = |key, is_intersecting| IntersectionEntry {
            key,
            is_intersecting,
            ratio: 0.0,
            bounds: Rect::default(),
        };
        let changed = tracker.apply(&[
            entry(SectionId::Skills, true),
            entry(SectionId::Contact, true),
            entry(SectionId::About, false),
        ]);
        assert_eq!(changed, Some(SectionId::Contact));
    }

    #[test]
    fn keeps_last_value_when_band_is_empty() {
        let mut tracker = SectionTracker::new(SectionsConfig::default().options());
        tracker.register(SectionId::About, Rect::new(0.0, 0.0, 1200.0, 500.0));
        tracker.on_viewport(&at(0.0));
        assert_eq!(tracker.active(), SectionId::About);

        // Far below every anchor: About leaves the band, nothing replaces it.
        assert_eq!(tracker.on_viewport(&at(5000.0)), None);
        assert_eq!(tracker.active(), SectionId::About);
    }
}
