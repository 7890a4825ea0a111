//! Clickable elements and their highlight projection
//!
//! A [`Clickable`] describes one interactive element on the page surface;
//! a [`Highlight`] associates a clickable (by id) with the rectangle
//! measured for it when the overlay was built. The navigator only ever
//! looks at the rect/identity projection, never at the clickable itself.

use serde::{Deserialize, Serialize};

use crate::geometry::Rect;

/// Identity of a clickable element on its surface.
pub type ClickableId = usize;

/// The subtype of an `input`-like element.
///
/// Mirrors the HTML input type attribute values the activation contract
/// cares about. Button-like subtypes are activated with a click; the rest
/// accept text or selection input and are activated with focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Button,
    Checkbox,
    File,
    Image,
    Radio,
    Reset,
    Submit,
    Text,
    Password,
    Search,
}

impl InputKind {
    /// Whether this input subtype behaves like a button.
    ///
    /// Button-like inputs receive a click on activation even though their
    /// tag would otherwise call for focus.
    pub fn is_button_like(self) -> bool {
        matches!(
            self,
            InputKind::Button
                | InputKind::Checkbox
                | InputKind::File
                | InputKind::Image
                | InputKind::Radio
                | InputKind::Reset
                | InputKind::Submit
        )
    }
}

/// The kind of interactive element behind a highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClickableKind {
    /// An anchor with an href
    Link,
    /// A plain button element
    Button,
    /// An input element with the given subtype
    Input(InputKind),
    /// A select element
    Select,
    /// A textarea element
    TextArea,
}

/// One interactive element on a page surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clickable {
    /// Stable identity within the surface
    pub id: ClickableId,
    /// What kind of element this is
    pub kind: ClickableKind,
    /// Visible label, used for overlay captions and status messages
    pub label: String,
    /// Link target, present for [`ClickableKind::Link`]
    pub href: Option<String>,
}

impl Clickable {
    /// Create a non-link clickable.
    pub fn new(id: ClickableId, kind: ClickableKind, label: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            label: label.into(),
            href: None,
        }
    }

    /// Create a link clickable with its href.
    pub fn link(id: ClickableId, label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            id,
            kind: ClickableKind::Link,
            label: label.into(),
            href: Some(href.into()),
        }
    }
}

/// A clickable's measured rectangle, snapshotted at overlay-build time.
///
/// The set of highlights is fixed for the lifetime of one overlay session;
/// if the underlying layout shifts while the overlay is open the rects go
/// stale until the overlay is reopened.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Highlight {
    /// Which clickable this highlight outlines
    pub clickable: ClickableId,
    /// The clickable's bounding box in page coordinates
    pub rect: Rect,
}

impl Highlight {
    /// Create a highlight for a clickable.
    pub const fn new(clickable: ClickableId, rect: Rect) -> Self {
        Self { clickable, rect }
    }
}

/// Size filter applied by a surface before handing highlights to the
/// navigator.
///
/// Elements at or below the minimum extent on either axis are skipped, as
/// are elements scrolled off the top or left of the page. The navigator
/// assumes this filtering already happened and does not re-check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HighlightFilter {
    /// Minimum width a clickable must exceed to be highlighted
    pub min_width: f64,
    /// Minimum height a clickable must exceed to be highlighted
    pub min_height: f64,
}

impl Default for HighlightFilter {
    fn default() -> Self {
        Self {
            min_width: 2.0,
            min_height: 0.0,
        }
    }
}

impl HighlightFilter {
    /// Whether a measured rectangle is big enough to highlight.
    pub fn is_big_enough(&self, rect: &Rect) -> bool {
        rect.width > self.min_width && rect.height > self.min_height
    }

    /// Whether a measured rectangle is still on the visible page.
    ///
    /// Elements scrolled past the top or left edge are skipped.
    pub fn is_on_page(&self, rect: &Rect) -> bool {
        rect.x >= 0.0 && rect.y >= 0.0
    }

    /// Combined acceptance test.
    pub fn accepts(&self, rect: &Rect) -> bool {
        self.is_big_enough(rect) && self.is_on_page(rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_rejects_degenerate_rects() {
        let filter = HighlightFilter::default();
        assert!(!filter.accepts(&Rect::new(5.0, 5.0, 0.0, 0.0)));
        assert!(!filter.accepts(&Rect::new(5.0, 5.0, 2.0, 1.0)));
        assert!(filter.accepts(&Rect::new(5.0, 5.0, 8.0, 1.0)));
    }

    #[test]
    fn filter_rejects_offscreen_rects() {
        let filter = HighlightFilter::default();
        assert!(!filter.accepts(&Rect::new(-1.0, 5.0, 10.0, 3.0)));
        assert!(!filter.accepts(&Rect::new(5.0, -0.5, 10.0, 3.0)));
        assert!(filter.accepts(&Rect::new(0.0, 0.0, 10.0, 3.0)));
    }

    #[test]
    fn button_like_inputs_are_classified() {
        assert!(InputKind::Submit.is_button_like());
        assert!(InputKind::Checkbox.is_button_like());
        assert!(!InputKind::Text.is_button_like());
        assert!(!InputKind::Search.is_button_like());
    }
}
