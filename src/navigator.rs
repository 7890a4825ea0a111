//! Directional navigation over a fixed set of highlights
//!
//! The navigator is a pair of pure functions over an immutable highlight
//! snapshot:
//!
//! - [`nearest_highlight`]: the single globally-nearest highlight to an
//!   arbitrary reference point, used to pick the initial selection
//! - [`nearest_directional_highlights`]: the nearest highlight in each of
//!   the four cardinal directions relative to the current selection
//!
//! Both are deterministic, perform no I/O, and never mutate their inputs.
//! Ties are broken stably by input order: the first highlight among the
//! minimal candidates wins.

use serde::{Deserialize, Serialize};

use crate::geometry::{cartesian_distance, coverage_distance, Point};
use crate::highlight::Highlight;

/// A cardinal navigation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// The nearest highlight per direction, indices into the queried slice.
///
/// A direction with no qualifying candidate is `None`; the caller must
/// leave the selection in place for that direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DirectionalNeighbors {
    pub up: Option<usize>,
    pub down: Option<usize>,
    pub left: Option<usize>,
    pub right: Option<usize>,
}

impl DirectionalNeighbors {
    /// The neighbor for one direction.
    pub fn in_direction(&self, direction: Direction) -> Option<usize> {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }
}

/// Find the highlight whose central point is nearest to a reference point.
///
/// Used for the initial pick when the overlay opens: the reference is the
/// viewport center, or the remembered position of the last selection when
/// the overlay is reopened.
///
/// Returns the index of the winner, or `None` for an empty slice. Ties go
/// to the first highlight in input order.
pub fn nearest_highlight(highlights: &[Highlight], from_position: Point) -> Option<usize> {
    let mut nearest: Option<(usize, f64)> = None;

    for (index, highlight) in highlights.iter().enumerate() {
        let distance = cartesian_distance(from_position, highlight.rect.central_point());
        let closer = match nearest {
            Some((_, best)) => distance < best,
            None => true,
        };
        if closer {
            nearest = Some((index, distance));
        }
    }

    nearest.map(|(index, _)| index)
}

/// Find the nearest highlight in each cardinal direction.
///
/// A candidate qualifies for a direction based on its position relative to
/// the selected rectangle `s`:
///
/// - down: its top edge is below `s`'s vertical center
/// - up: its vertical center is above `s`'s top edge
/// - left: its horizontal center is left of `s`'s left edge
/// - right: its left edge is right of `s`'s horizontal center
///
/// Within a qualifying set, candidates rank by coverage-weighted distance
/// (vertical weighting for up/down, horizontal for left/right) ascending,
/// ties broken by input order. The selected highlight never qualifies for
/// any direction against itself, so it need not be removed from the slice.
pub fn nearest_directional_highlights(
    highlights: &[Highlight],
    selected: &Highlight,
) -> DirectionalNeighbors {
    let s = selected.rect;
    let mut neighbors = DirectionalNeighbors::default();
    let mut best_down = f64::INFINITY;
    let mut best_up = f64::INFINITY;
    let mut best_left = f64::INFINITY;
    let mut best_right = f64::INFINITY;

    for (index, highlight) in highlights.iter().enumerate() {
        let r = highlight.rect;
        let weighted = coverage_distance(&s, &r);

        if r.y > s.y + s.height / 2.0 && weighted.vertical < best_down {
            best_down = weighted.vertical;
            neighbors.down = Some(index);
        }
        if r.y + r.height / 2.0 < s.y && weighted.vertical < best_up {
            best_up = weighted.vertical;
            neighbors.up = Some(index);
        }
        if r.x + r.width / 2.0 < s.x && weighted.horizontal < best_left {
            best_left = weighted.horizontal;
            neighbors.left = Some(index);
        }
        if r.x > s.x + s.width / 2.0 && weighted.horizontal < best_right {
            best_right = weighted.horizontal;
            neighbors.right = Some(index);
        }
    }

    neighbors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;

    fn highlight(id: usize, x: f64, y: f64, width: f64, height: f64) -> Highlight {
        Highlight::new(id, Rect::new(x, y, width, height))
    }

    #[test]
    fn empty_set_has_no_nearest() {
        assert_eq!(nearest_highlight(&[], Point::new(500.0, 500.0)), None);
    }

    #[test]
    fn nearest_ties_go_to_first_in_input_order() {
        // Two highlights mirrored around the reference point
        let highlights = vec![
            highlight(0, 100.0, 0.0, 20.0, 20.0),
            highlight(1, -120.0, 0.0, 20.0, 20.0),
        ];
        assert_eq!(nearest_highlight(&highlights, Point::new(0.0, 10.0)), Some(0));
    }

    #[test]
    fn selected_never_qualifies_against_itself() {
        let selected = highlight(0, 0.0, 0.0, 50.0, 50.0);
        let neighbors = nearest_directional_highlights(&[selected], &selected);
        assert_eq!(neighbors, DirectionalNeighbors::default());
    }

    #[test]
    fn candidate_may_qualify_for_two_orthogonal_directions() {
        // Down-right of the selection: below its vertical center and right
        // of its horizontal center at the same time.
        let selected = highlight(0, 0.0, 0.0, 50.0, 50.0);
        let corner = highlight(1, 200.0, 40.0, 50.0, 50.0);
        let highlights = vec![selected, corner];
        let neighbors = nearest_directional_highlights(&highlights, &highlights[0]);
        assert_eq!(neighbors.down, Some(1));
        assert_eq!(neighbors.right, Some(1));
        assert_eq!(neighbors.up, None);
        assert_eq!(neighbors.left, None);
    }
}
