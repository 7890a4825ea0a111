//! Geometric value types for the navigation core
//!
//! This module defines the immutable geometry the navigator operates on:
//! - [`Point`]: a position in page coordinates
//! - [`Rect`]: an axis-aligned rectangle in page coordinates
//! - Distance helpers: [`cartesian_distance`] and [`coverage_distance`]
//!
//! Coordinates are `f64` page units (post-scroll-offset). Rectangles are
//! measured once when an overlay session opens and never re-measured while
//! it stays open.

use serde::{Deserialize, Serialize};

/// A position in page coordinates.
///
/// Used for rectangle central points and reference positions such as the
/// viewport center or the remembered position of the last selection.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal position (grows to the right)
    pub x: f64,
    /// Vertical position (grows downward)
    pub y: f64,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in page coordinates.
///
/// Width and height are non-negative. A rectangle is a snapshot of an
/// element's on-page bounding box taken at overlay-build time.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    /// Horizontal extent (>= 0)
    pub width: f64,
    /// Vertical extent (>= 0)
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The central point of the rectangle.
    pub fn central_point(&self) -> Point {
        Point::new(self.x + 0.5 * self.width, self.y + 0.5 * self.height)
    }

    /// Right edge of the rectangle.
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge of the rectangle.
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Straight-line distance between two points.
pub fn cartesian_distance(point1: Point, point2: Point) -> f64 {
    let dx = point1.x - point2.x;
    let dy = point1.y - point2.y;
    (dx * dx + dy * dy).sqrt()
}

/// Per-axis misalignment between two rectangles.
///
/// Each axis is measured independently as the fraction of the *shorter*
/// rectangle's extent on that axis that lies outside the longer rectangle's
/// projection. A value of 0 means the shorter rectangle is fully contained
/// in the longer one's projection; values grow without bound as the pair
/// drifts apart.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxesCoverage {
    /// Misalignment along the x axis (horizontal overlap quality)
    pub x_axis: f64,
    /// Misalignment along the y axis (vertical overlap quality)
    pub y_axis: f64,
}

/// Cartesian distance weighted by misalignment on the orthogonal axis.
///
/// Raw Euclidean distance alone makes a slightly offset element directly
/// below the selection lose to a diagonal element that happens to be
/// closer. Squaring the orthogonal-axis coverage and folding it into the
/// distance keeps well-aligned neighbors preferred while still allowing a
/// diagonal fallback when nothing is aligned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoverageDistance {
    /// Weighted distance for left/right queries: `cartesian * (1 + y_coverage^2)`
    pub horizontal: f64,
    /// Weighted distance for up/down queries: `cartesian * (1 + x_coverage^2)`
    pub vertical: f64,
}

/// Compute both misalignment fractions for a pair of rectangles.
pub fn axes_coverage(rect1: &Rect, rect2: &Rect) -> AxesCoverage {
    AxesCoverage {
        x_axis: x_axis_coverage(rect1, rect2),
        y_axis: y_axis_coverage(rect1, rect2),
    }
}

/// Compute the direction-specific weighted distances between two rectangles.
///
/// # Arguments
/// * `rect1` - Usually the currently selected rectangle
/// * `rect2` - A candidate rectangle
pub fn coverage_distance(rect1: &Rect, rect2: &Rect) -> CoverageDistance {
    let distance = cartesian_distance(rect1.central_point(), rect2.central_point());
    let coverage = axes_coverage(rect1, rect2);

    CoverageDistance {
        horizontal: distance * (1.0 + coverage.y_axis * coverage.y_axis),
        vertical: distance * (1.0 + coverage.x_axis * coverage.x_axis),
    }
}

/// Fraction of the narrower rectangle's width outside the wider one.
///
/// Ties on width treat the first argument as the narrower one. A
/// zero-width narrower side yields 0 rather than a non-finite value;
/// degenerate rectangles are expected to be filtered out upstream.
fn x_axis_coverage(rect1: &Rect, rect2: &Rect) -> f64 {
    let (shorter, longer) = if rect1.width <= rect2.width {
        (rect1, rect2)
    } else {
        (rect2, rect1)
    };
    if shorter.width == 0.0 {
        return 0.0;
    }

    let lacking_left = (longer.x - shorter.x).max(0.0);
    let lacking_right = (shorter.right() - longer.right()).max(0.0);
    (lacking_left + lacking_right) / shorter.width
}

/// Fraction of the shorter rectangle's height outside the taller one.
///
/// Same shape as [`x_axis_coverage`], applied to the y axis.
fn y_axis_coverage(rect1: &Rect, rect2: &Rect) -> f64 {
    let (shorter, taller) = if rect1.height <= rect2.height {
        (rect1, rect2)
    } else {
        (rect2, rect1)
    };
    if shorter.height == 0.0 {
        return 0.0;
    }

    let lacking_up = (taller.y - shorter.y).max(0.0);
    let lacking_down = (shorter.bottom() - taller.bottom()).max(0.0);
    (lacking_up + lacking_down) / shorter.height
}
