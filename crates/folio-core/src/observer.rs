//! Reusable geometry observer.
//!
//! Both the navigation highlight and the entrance animations follow the same
//! pattern: a set of targets, a trigger region derived from the viewport, and
//! a callback that receives the targets whose trigger state flipped. This
//! module implements that pattern once, parameterized by [`ObserverOptions`]
//! and an [`IntersectionHandler`].
//!
//! Semantics follow the browser's intersection observer closely:
//!
//! - the root is the viewport grown or shrunk by the root margin;
//! - a target "crosses" when it intersects the root (edge contact counts) and
//!   its visible fraction is at least the threshold;
//! - the first evaluation after `observe` always reports the target, after
//!   that only flips are reported;
//! - entries are delivered in observation order.

use folio_model::{Rect, RootMargin, Viewport};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Trigger parameters for one observer.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ObserverOptions {
    pub root_margin: RootMargin,
    /// Minimum intersection ratio in `[0, 1]`. Zero means "any contact".
    pub threshold: f64,
}

impl ObserverOptions {
    pub fn new(root_margin: RootMargin, threshold: f64) -> Self {
        Self {
            root_margin,
            threshold,
        }
    }
}

/// One reported state change.
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionEntry<K> {
    pub key: K,
    /// Whether the target currently crosses the trigger.
    pub is_intersecting: bool,
    /// Visible fraction of the target inside the root.
    pub ratio: f64,
    /// Target rectangle in viewport space at evaluation time.
    pub bounds: Rect,
}

/// Callback receiving each non-empty batch of entries.
pub trait IntersectionHandler<K> {
    fn on_intersections(&mut self, entries: &[IntersectionEntry<K>]);
}

impl<K, F> IntersectionHandler<K> for F
where
    F: FnMut(&[IntersectionEntry<K>]),
{
    fn on_intersections(&mut self, entries: &[IntersectionEntry<K>]) {
        (*self)(entries)
    }
}

#[derive(Debug)]
struct Target<K> {
    key: K,
    rect: Rect,
    /// Crossing state at the last evaluation; `None` until first evaluated.
    last: Option<bool>,
}

/// Tracks a set of keyed targets against a trigger region.
#[derive(Debug)]
pub struct GeometryObserver<K> {
    options: ObserverOptions,
    targets: Vec<Target<K>>,
    connected: bool,
}

impl<K: Clone + PartialEq> GeometryObserver<K> {
    pub fn new(options: ObserverOptions) -> Self {
        Self {
            options,
            targets: Vec::new(),
            connected: true,
        }
    }

    pub fn options(&self) -> &ObserverOptions {
        &self.options
    }

    /// Start observing `key` at `rect` (document coordinates).
    ///
    /// Observing a key again only updates its geometry. Returns `false`
    /// once the observer has been disconnected.
    pub fn observe(&mut self, key: K, rect: Rect) -> bool {
        if !self.connected {
            return false;
        }
        match self.targets.iter_mut().find(|t| t.key == key) {
            Some(target) => target.rect = rect,
            None => self.targets.push(Target {
                key,
                rect,
                last: None,
            }),
        }
        true
    }

    /// Stop observing `key`. Returns whether it was observed.
    pub fn unobserve(&mut self, key: &K) -> bool {
        let before = self.targets.len();
        self.targets.retain(|t| &t.key != key);
        self.targets.len() != before
    }

    /// Drop every target and refuse further registrations.
    pub fn disconnect(&mut self) {
        self.targets.clear();
        self.connected = false;
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn contains(&self, key: &K) -> bool {
        self.targets.iter().any(|t| &t.key == key)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Re-evaluate every target against `viewport` and return the entries
    /// whose crossing state is new or changed.
    pub fn evaluate(&mut self, viewport: &Viewport) -> Vec<IntersectionEntry<K>> {
        let root = self.options.root_margin.apply(viewport);
        let threshold = self.options.threshold;
        let mut entries = Vec::new();
        for target in &mut self.targets {
            let bounds = viewport.to_viewport(&target.rect);
            let (crossing, ratio) = crossing_state(&root, &bounds, threshold);
            if target.last == Some(crossing) {
                continue;
            }
            target.last = Some(crossing);
            entries.push(IntersectionEntry {
                key: target.key.clone(),
                is_intersecting: crossing,
                ratio,
                bounds,
            });
        }
        trace!(
            scroll_y = viewport.scroll_y,
            targets = self.targets.len(),
            changed = entries.len(),
            "observer evaluated"
        );
        entries
    }

    /// Evaluate and hand a non-empty batch to `handler`. Returns the number
    /// of entries delivered.
    pub fn dispatch<H>(&mut self, viewport: &Viewport, handler: &mut H) -> usize
    where
        H: IntersectionHandler<K> + ?Sized,
    {
        let entries = self.evaluate(viewport);
        if !entries.is_empty() {
            handler.on_intersections(&entries);
        }
        entries.len()
    }
}

fn crossing_state(root: &Rect, bounds: &Rect, threshold: f64) -> (bool, f64) {
    if root.width < 0.0 || root.height < 0.0 {
        return (false, 0.0);
    }
    let Some(overlap) = bounds.intersection(root) else {
        return (false, 0.0);
    };
    let area = bounds.area();
    let ratio = if area > 0.0 {
        (overlap.area() / area).min(1.0)
    } else {
        1.0
    };
    (ratio >= threshold, ratio)
}
