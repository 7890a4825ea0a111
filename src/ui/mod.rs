//! UI rendering for the keyhop demo
//!
//! Draws three layers each frame:
//! - the demo page widgets (links, buttons, form fields)
//! - the overlay boxes, when an overlay session is open
//! - a one-line status bar with hints and activation feedback
//!
//! Rendering is a pure function of [`App`] state plus the retained
//! [`OverlayView`]; nothing here mutates either.

mod overlay;
mod theme;

pub use overlay::{to_screen_rect, OverlayBox, OverlayView};
pub use theme::{
    COLOR_BORDER, COLOR_BUTTON, COLOR_DIM, COLOR_FIELD, COLOR_FOCUSED, COLOR_LINK,
    COLOR_OVERLAY_BORDER, COLOR_SELECTED_BG, COLOR_SELECTED_FG,
};

use ratatui::layout::Rect as ScreenRect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::highlight::ClickableKind;
use crate::page::PageEntry;

/// Render one full frame.
pub fn render(frame: &mut Frame, app: &App, overlay: &OverlayView) {
    render_page(frame, app);
    overlay.draw(frame);
    render_status(frame, app);
}

fn render_page(frame: &mut Frame, app: &App) {
    let bounds = frame.area();
    for entry in app.page.entries() {
        let Some(area) = to_screen_rect(&entry.rect, bounds) else {
            continue;
        };
        let focused = app.focused == Some(entry.clickable.id);
        frame.render_widget(page_widget(entry, focused), area);
    }
}

/// Build the widget for one page entry.
fn page_widget(entry: &PageEntry, focused: bool) -> Paragraph<'_> {
    let label_style = match entry.clickable.kind {
        ClickableKind::Link => Style::default()
            .fg(COLOR_LINK)
            .add_modifier(Modifier::UNDERLINED),
        ClickableKind::Button => Style::default()
            .fg(COLOR_BUTTON)
            .add_modifier(Modifier::BOLD),
        ClickableKind::Input(input) if input.is_button_like() => Style::default()
            .fg(COLOR_BUTTON)
            .add_modifier(Modifier::BOLD),
        _ => Style::default().fg(COLOR_FIELD),
    };

    let border_style = if focused {
        Style::default().fg(COLOR_FOCUSED)
    } else {
        Style::default().fg(COLOR_BORDER)
    };

    Paragraph::new(Line::styled(entry.clickable.label.as_str(), label_style)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style),
    )
}

fn render_status(frame: &mut Frame, app: &App) {
    let bounds = frame.area();
    if bounds.height == 0 {
        return;
    }
    let status_area = ScreenRect {
        x: 0,
        y: bounds.height - 1,
        width: bounds.width,
        height: 1,
    };

    let text = match &app.status {
        Some(status) => status.clone(),
        None if app.session.is_visible() => {
            "arrows: move   enter: activate   esc: close".to_string()
        }
        None => "press f twice to open the overlay   ctrl+c: quit".to_string(),
    };

    frame.render_widget(
        Paragraph::new(Line::styled(text, Style::default().fg(COLOR_DIM))),
        status_area,
    );
}
