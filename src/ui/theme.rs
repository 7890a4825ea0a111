//! Color theme constants for the overlay demo
//!
//! Kept to a small palette: the page itself stays muted so the overlay
//! boxes and the selection stand out.

use ratatui::style::Color;

/// Border color for page widgets
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Link labels
pub const COLOR_LINK: Color = Color::Cyan;

/// Button labels
pub const COLOR_BUTTON: Color = Color::White;

/// Form field labels
pub const COLOR_FIELD: Color = Color::Gray;

/// Border of a page widget holding simulated focus
pub const COLOR_FOCUSED: Color = Color::LightGreen;

/// Overlay box outlines
pub const COLOR_OVERLAY_BORDER: Color = Color::White;

/// Background of the selected overlay box
pub const COLOR_SELECTED_BG: Color = Color::Yellow;

/// Foreground inside the selected overlay box
pub const COLOR_SELECTED_FG: Color = Color::Black;

/// Dim text for hints and the status line
pub const COLOR_DIM: Color = Color::DarkGray;
