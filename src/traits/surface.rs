//! Surface trait: where clickables and their rectangles come from.

use crate::geometry::Point;
use crate::highlight::{Clickable, ClickableId, Highlight};

/// A surface that can enumerate its interactive elements.
///
/// Implementations measure each candidate element's bounding box and apply
/// the size/visibility filter before returning, so the navigator can trust
/// every highlight it receives. The returned set is a snapshot: it is
/// captured once per overlay session and not re-measured while the session
/// stays open.
pub trait ClickableSurface {
    /// Measure and filter all interactive elements, one highlight each.
    fn highlights(&self) -> Vec<Highlight>;

    /// Look up a clickable by id. `None` when the element is gone.
    fn clickable(&self, id: ClickableId) -> Option<&Clickable>;

    /// The center of the currently visible viewport, the default reference
    /// for the initial selection.
    fn viewport_center(&self) -> Point;
}
