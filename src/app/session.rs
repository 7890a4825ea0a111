//! Overlay session state machine.
//!
//! One session spans a single show→hide cycle. The highlight set is
//! snapshotted when the session opens and never re-measured while it is
//! open; if the page reflows underneath, the boxes go stale until the
//! next session.

use crate::geometry::Point;
use crate::highlight::Highlight;
use crate::navigator::{self, Direction};

/// Where the session currently is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayPhase {
    /// No overlay shown, no selection defined
    #[default]
    Hidden,
    /// Overlay shown with a live selection
    Visible,
}

/// A selection move produced by [`OverlaySession::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionMove {
    /// Index that lost the selection
    pub from: usize,
    /// Index that gained it
    pub to: usize,
}

/// State for one overlay session plus the position memory that survives
/// across sessions.
#[derive(Debug, Clone, Default)]
pub struct OverlaySession {
    phase: OverlayPhase,
    highlights: Vec<Highlight>,
    selected: Option<usize>,
    /// Central point of the last selection, remembered across sessions so
    /// reopening the overlay puts the user back where they were
    last_selected_position: Option<Point>,
}

impl OverlaySession {
    /// Create a closed session with no position memory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the overlay is currently visible.
    pub fn is_visible(&self) -> bool {
        self.phase == OverlayPhase::Visible
    }

    /// The snapshotted highlights of the open session.
    pub fn highlights(&self) -> &[Highlight] {
        &self.highlights
    }

    /// Index of the selected highlight, if the session is open.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// The selected highlight itself.
    pub fn selected_highlight(&self) -> Option<&Highlight> {
        self.selected.and_then(|index| self.highlights.get(index))
    }

    /// Remembered position of the last selection, if any.
    pub fn last_selected_position(&self) -> Option<Point> {
        self.last_selected_position
    }

    /// Open a session with a highlight snapshot.
    ///
    /// The initial selection is the highlight nearest to the remembered
    /// last-selected position, falling back to the viewport center on the
    /// first open. An empty snapshot refuses to open: the session stays
    /// hidden and `None` is returned, since a visible overlay without a
    /// selection would violate the session invariant.
    pub fn open(&mut self, highlights: Vec<Highlight>, viewport_center: Point) -> Option<usize> {
        let reference = self.last_selected_position.unwrap_or(viewport_center);
        let selected = navigator::nearest_highlight(&highlights, reference)?;

        self.highlights = highlights;
        self.selected = Some(selected);
        self.phase = OverlayPhase::Visible;
        Some(selected)
    }

    /// Close the session, dropping the snapshot and the selection.
    ///
    /// The last-selected position memory survives so the next open can
    /// restore the user's place.
    pub fn close(&mut self) {
        self.phase = OverlayPhase::Hidden;
        self.highlights.clear();
        self.selected = None;
    }

    /// Move the selection one step in a direction.
    ///
    /// No-op while hidden, and no-op when the direction has no qualifying
    /// neighbor; in both cases `None` is returned and the selection stays
    /// put.
    pub fn step(&mut self, direction: Direction) -> Option<SelectionMove> {
        if !self.is_visible() {
            return None;
        }
        let from = self.selected?;
        let selected = *self.highlights.get(from)?;

        let neighbors = navigator::nearest_directional_highlights(&self.highlights, &selected);
        let to = neighbors.in_direction(direction)?;

        self.selected = Some(to);
        self.last_selected_position = Some(self.highlights[to].rect.central_point());
        Some(SelectionMove { from, to })
    }
}
