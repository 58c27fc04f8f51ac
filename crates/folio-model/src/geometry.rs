//! Layout geometry shared by the observers and the carousel.
//!
//! Element rectangles are expressed in document coordinates; the viewport
//! carries the current scroll position so the observers can project targets
//! into viewport space without the presentation layer recomputing client
//! rectangles on every scroll event.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ModelError;

/// Axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn area(&self) -> f64 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    /// Move the rectangle by the given deltas.
    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Overlap of two rectangles. Edge-adjacent rectangles produce a
    /// zero-area intersection; disjoint ones produce `None`.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right < left || bottom < top {
            return None;
        }
        Some(Rect::new(left, top, right - left, bottom - top))
    }
}

/// The visible window onto the document.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Viewport {
    #[serde(default)]
    pub scroll_x: f64,
    #[serde(default)]
    pub scroll_y: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            scroll_x: 0.0,
            scroll_y: 0.0,
            width,
            height,
        }
    }

    pub fn scrolled_to(mut self, scroll_y: f64) -> Self {
        self.scroll_y = scroll_y;
        self
    }

    /// Project a document-space rectangle into viewport space.
    pub fn to_viewport(&self, rect: &Rect) -> Rect {
        rect.translate(-self.scroll_x, -self.scroll_y)
    }
}

/// One side of a root margin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MarginValue {
    Px(f64),
    /// Percentage of the root's height (top/bottom) or width (left/right).
    Percent(f64),
}

impl MarginValue {
    /// Resolve against the root dimension on the same axis.
    pub fn resolve(&self, extent: f64) -> f64 {
        match self {
            MarginValue::Px(px) => *px,
            MarginValue::Percent(pct) => extent * pct / 100.0,
        }
    }
}

impl Default for MarginValue {
    fn default() -> Self {
        MarginValue::Px(0.0)
    }
}

impl fmt::Display for MarginValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarginValue::Px(px) => write!(f, "{px}px"),
            MarginValue::Percent(pct) => write!(f, "{pct}%"),
        }
    }
}

/// Grows (positive) or shrinks (negative) the observation root on each side.
///
/// Parsed from CSS margin shorthand: one to four space-separated lengths in
/// `px` or `%` (a bare `0` is accepted).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RootMargin {
    pub top: MarginValue,
    pub right: MarginValue,
    pub bottom: MarginValue,
    pub left: MarginValue,
}

impl RootMargin {
    /// Same margin on all four sides.
    pub fn uniform(value: MarginValue) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// The root rectangle in viewport space after applying the margins.
    pub fn apply(&self, viewport: &Viewport) -> Rect {
        let top = self.top.resolve(viewport.height);
        let bottom = self.bottom.resolve(viewport.height);
        let left = self.left.resolve(viewport.width);
        let right = self.right.resolve(viewport.width);
        Rect::new(
            -left,
            -top,
            viewport.width + left + right,
            viewport.height + top + bottom,
        )
    }
}

impl FromStr for RootMargin {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |message: &str| ModelError::InvalidMargin {
            value: s.to_string(),
            message: message.to_string(),
        };
        let values = s
            .split_whitespace()
            .map(|token| parse_margin_value(token).ok_or_else(|| invalid(token)))
            .collect::<Result<Vec<_>, _>>()?;
        let (top, right, bottom, left) = match values.as_slice() {
            [all] => (*all, *all, *all, *all),
            [vertical, horizontal] => (*vertical, *horizontal, *vertical, *horizontal),
            [top, horizontal, bottom] => (*top, *horizontal, *bottom, *horizontal),
            [top, right, bottom, left] => (*top, *right, *bottom, *left),
            _ => return Err(invalid("expected one to four values")),
        };
        Ok(Self {
            top,
            right,
            bottom,
            left,
        })
    }
}

impl TryFrom<String> for RootMargin {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RootMargin> for String {
    fn from(margin: RootMargin) -> Self {
        margin.to_string()
    }
}

impl fmt::Display for RootMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.top, self.right, self.bottom, self.left)
    }
}

fn parse_margin_value(token: &str) -> Option<MarginValue> {
    if let Some(number) = token.strip_suffix('%') {
        return number.parse().ok().map(MarginValue::Percent);
    }
    if let Some(number) = token.strip_suffix("px") {
        return number.parse().ok().map(MarginValue::Px);
    }
    // Unitless lengths are only valid for zero.
    match token.parse::<f64>() {
        Ok(value) if value == 0.0 => Some(MarginValue::Px(0.0)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intersection_of_edge_adjacent_rects_is_empty_but_present() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(0.0, 10.0, 10.0, 10.0);
        let overlap = a.intersection(&b).unwrap();
        assert_eq!(overlap.area(), 0.0);
        assert!(a.intersection(&Rect::new(0.0, 11.0, 10.0, 1.0)).is_none());
    }

    #[test]
    fn margin_shorthand_expands_like_css() {
        let margin: RootMargin = "-20% 0px -70% 0px".parse().unwrap();
        assert_eq!(margin.top, MarginValue::Percent(-20.0));
        assert_eq!(margin.right, MarginValue::Px(0.0));
        assert_eq!(margin.bottom, MarginValue::Percent(-70.0));

        let uniform: RootMargin = "-50px".parse().unwrap();
        assert_eq!(uniform, RootMargin::uniform(MarginValue::Px(-50.0)));
    }

    #[test]
    fn negative_margins_shrink_the_root() {
        let margin: RootMargin = "-20% 0px -70% 0px".parse().unwrap();
        let root = margin.apply(&Viewport::new(1000.0, 800.0));
        assert_eq!(root, Rect::new(0.0, 160.0, 1000.0, 80.0));
    }

    #[test]
    fn rejects_bad_margins() {
        assert!("10em".parse::<RootMargin>().is_err());
        assert!("1px 2px 3px 4px 5px".parse::<RootMargin>().is_err());
        assert!("".parse::<RootMargin>().is_err());
    }
}
