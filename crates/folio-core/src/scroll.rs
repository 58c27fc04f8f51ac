//! Scroll commands handed to the presentation layer.
//!
//! The core never animates anything itself. It decides where a scrollable
//! surface should end up and emits a [`ScrollRequest`]; the UI layer performs
//! the (possibly smooth) transition and reports raw scroll positions back.

use serde::{Deserialize, Serialize};

/// How the presentation layer should move to the requested offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    #[default]
    Smooth,
    Instant,
}

/// The scrollable surface a request applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollTarget {
    /// The document itself (vertical).
    Window,
    /// The project card strip (horizontal).
    Carousel,
}

/// A programmatic scroll to an absolute offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollRequest {
    pub target: ScrollTarget,
    pub offset: f64,
    pub behavior: ScrollBehavior,
}

impl ScrollRequest {
    pub fn window(offset: f64, behavior: ScrollBehavior) -> Self {
        Self {
            target: ScrollTarget::Window,
            offset,
            behavior,
        }
    }

    pub fn carousel(offset: f64, behavior: ScrollBehavior) -> Self {
        Self {
            target: ScrollTarget::Carousel,
            offset,
            behavior,
        }
    }
}
