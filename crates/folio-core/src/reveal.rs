//! One-shot entrance animation tracking.

use std::collections::BTreeSet;

use folio_model::{Rect, Viewport};
use tracing::debug;

use crate::observer::{GeometryObserver, IntersectionEntry, ObserverOptions};

/// Collects the keys of reveal-tagged elements that have been seen.
///
/// The revealed set only grows. Once a key is revealed it is no longer
/// observed, and registering it again is a no-op.
#[derive(Debug)]
pub struct RevealTracker {
    observer: GeometryObserver<String>,
    revealed: BTreeSet<String>,
    /// Reveal order, for presentation layers that stagger animations.
    order: Vec<String>,
}

impl RevealTracker {
    pub fn new(options: ObserverOptions) -> Self {
        Self {
            observer: GeometryObserver::new(options),
            revealed: BTreeSet::new(),
            order: Vec::new(),
        }
    }

    /// Register an element; works before and after the first evaluation.
    /// Returns `false` when the key is already revealed or the tracker is
    /// disconnected.
    pub fn register(&mut self, key: impl Into<String>, rect: Rect) -> bool {
        let key = key.into();
        if self.revealed.contains(&key) {
            return false;
        }
        self.observer.observe(key, rect)
    }

    /// Re-evaluate against the viewport and return the newly revealed keys.
    pub fn on_viewport(&mut self, viewport: &Viewport) -> Vec<String> {
        let mut crossed = Vec::new();
        self.observer
            .dispatch(viewport, &mut |entries: &[IntersectionEntry<String>]| {
                crossed.extend(
                    entries
                        .iter()
                        .filter(|entry| entry.is_intersecting)
                        .map(|entry| (entry.key.clone(), entry.ratio)),
                );
            });

        let mut newly = Vec::new();
        for (key, ratio) in crossed {
            self.observer.unobserve(&key);
            if self.revealed.insert(key.clone()) {
                debug!(key = %key, ratio, "element revealed");
                self.order.push(key.clone());
                newly.push(key);
            }
        }
        newly
    }

    pub fn is_revealed(&self, key: &str) -> bool {
        self.revealed.contains(key)
    }

    /// Revealed keys in the order they were revealed.
    pub fn revealed(&self) -> &[String] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }

    /// Number of elements still waiting to be revealed.
    pub fn pending(&self) -> usize {
        self.observer.len()
    }

    pub fn disconnect(&mut self) {
        self.observer.disconnect();
    }

    pub fn is_connected(&self) -> bool {
        self.observer.is_connected()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RevealConfig;

    fn tracker() -> RevealTracker {
        RevealTracker::new(RevealConfig::default().options())
    }

    fn at(scroll_y: f64) -> Viewport {
        Viewport::new(1200.0, 800.0).scrolled_to(scroll_y)
    }

    #[test]
    fn reveals_visible_elements_once() {
        let mut reveal = tracker();
        reveal.register("hero-title", Rect::new(0.0, 100.0, 600.0, 80.0));
        reveal.register("skills-grid", Rect::new(0.0, 3000.0, 600.0, 400.0));

        assert_eq!(reveal.on_viewport(&at(0.0)), vec!["hero-title".to_string()]);
        assert_eq!(reveal.pending(), 1);

        assert_eq!(reveal.on_viewport(&at(2500.0)), vec!["skills-grid".to_string()]);
        // Scrolling back does not un-reveal anything.
        assert!(reveal.on_viewport(&at(0.0)).is_empty());
        assert_eq!(reveal.len(), 2);
        assert_eq!(reveal.revealed(), ["hero-title", "skills-grid"]);
    }

    #[test]
    fn needs_ten_percent_inside_inset_region() {
        let mut reveal = tracker();
        // Region bottom is 750 (800 - 50px inset). 30 of 400 pixels inside = 7.5%.
        reveal.register("card", Rect::new(100.0, 720.0, 600.0, 400.0));
        assert!(reveal.on_viewport(&at(0.0)).is_empty());
        // 50 of 400 pixels inside = 12.5%.
        assert_eq!(reveal.on_viewport(&at(20.0)), vec!["card".to_string()]);
    }

    #[test]
    fn late_registration_is_observed() {
        let mut reveal = tracker();
        reveal.on_viewport(&at(0.0));
        assert!(reveal.register("lazy", Rect::new(100.0, 200.0, 100.0, 100.0)));
        assert_eq!(reveal.on_viewport(&at(0.0)), vec!["lazy".to_string()]);
        assert!(!reveal.register("lazy", Rect::new(100.0, 200.0, 100.0, 100.0)));
        assert_eq!(reveal.len(), 1);
    }
}
