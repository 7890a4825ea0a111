//! Overlay box rendering and the renderer-trait implementation.
//!
//! [`OverlayView`] is the retained visual state behind the
//! [`OverlayRenderer`] contract: one box per highlight plus a selected
//! flag. Each frame it is drawn over the page widgets, so the boxes
//! outline whatever sits underneath them.

use ratatui::layout::Rect as ScreenRect;
use ratatui::style::Style;
use ratatui::widgets::{Block, BorderType, Borders};
use ratatui::Frame;

use super::theme::{COLOR_OVERLAY_BORDER, COLOR_SELECTED_BG, COLOR_SELECTED_FG};
use crate::geometry::Rect;
use crate::highlight::Highlight;
use crate::traits::OverlayRenderer;

/// One drawn overlay box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayBox {
    /// Page rectangle the box outlines
    pub rect: Rect,
    /// Whether this box holds the selection
    pub selected: bool,
}

/// Retained overlay state consumed by the frame renderer.
#[derive(Debug, Clone, Default)]
pub struct OverlayView {
    visible: bool,
    boxes: Vec<OverlayBox>,
}

impl OverlayView {
    /// Create a hidden overlay view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any boxes are currently shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The current boxes, empty while hidden.
    pub fn boxes(&self) -> &[OverlayBox] {
        &self.boxes
    }

    /// Draw the overlay onto the current frame.
    pub fn draw(&self, frame: &mut Frame) {
        if !self.visible {
            return;
        }
        let bounds = frame.area();
        for overlay_box in &self.boxes {
            let Some(area) = to_screen_rect(&overlay_box.rect, bounds) else {
                continue;
            };
            let block = if overlay_box.selected {
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Thick)
                    .border_style(Style::default().fg(COLOR_SELECTED_FG).bg(COLOR_SELECTED_BG))
                    .style(Style::default().bg(COLOR_SELECTED_BG).fg(COLOR_SELECTED_FG))
            } else {
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(COLOR_OVERLAY_BORDER))
            };
            frame.render_widget(block, area);
        }
    }
}

impl OverlayRenderer for OverlayView {
    fn show_overlay(&mut self, highlights: &[Highlight]) {
        self.boxes = highlights
            .iter()
            .map(|highlight| OverlayBox {
                rect: highlight.rect,
                selected: false,
            })
            .collect();
        self.visible = true;
    }

    fn hide_overlay(&mut self) {
        self.boxes.clear();
        self.visible = false;
    }

    fn select(&mut self, index: usize) {
        if let Some(overlay_box) = self.boxes.get_mut(index) {
            overlay_box.selected = true;
        }
    }

    fn unselect(&mut self, index: usize) {
        if let Some(overlay_box) = self.boxes.get_mut(index) {
            overlay_box.selected = false;
        }
    }
}

/// Convert a page rectangle to an on-screen area, clipped to the frame.
///
/// Returns `None` when the rectangle lies fully outside the frame or
/// collapses to nothing after clipping.
pub fn to_screen_rect(rect: &Rect, bounds: ScreenRect) -> Option<ScreenRect> {
    if rect.x < 0.0 || rect.y < 0.0 || rect.width <= 0.0 || rect.height <= 0.0 {
        return None;
    }
    let area = ScreenRect {
        x: rect.x.round() as u16,
        y: rect.y.round() as u16,
        width: rect.width.round() as u16,
        height: rect.height.round() as u16,
    };
    let clipped = area.intersection(bounds);
    if clipped.width == 0 || clipped.height == 0 {
        None
    } else {
        Some(clipped)
    }
}
