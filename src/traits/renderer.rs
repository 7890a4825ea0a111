//! Renderer trait: visual overlay lifecycle.

use crate::highlight::Highlight;

/// Draws the overlay boxes and restyles them as the selection moves.
///
/// The controller only ever reports which highlight is selected; how a
/// selected box differs visually from an unselected one is entirely the
/// renderer's business.
pub trait OverlayRenderer {
    /// Show one box per highlight. Called when an overlay session opens.
    fn show_overlay(&mut self, highlights: &[Highlight]);

    /// Remove all boxes. Called when the session closes for any reason.
    fn hide_overlay(&mut self);

    /// Style the box at `index` as selected.
    fn select(&mut self, index: usize);

    /// Style the box at `index` back to unselected.
    fn unselect(&mut self, index: usize);
}
