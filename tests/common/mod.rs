//! Shared test helpers: recording mocks for the renderer and activator
//! plus page/app constructors.

#![allow(dead_code)]

use keyhop::app::App;
use keyhop::app::AppMessage;
use keyhop::config::Config;
use keyhop::error::{KeyhopError, KeyhopResult};
use keyhop::geometry::Rect;
use keyhop::highlight::{Clickable, ClickableId, HighlightFilter};
use keyhop::messages::Request;
use keyhop::page::{Page, PageEntry};
use keyhop::traits::{ActivationMethod, Activator, OverlayRenderer};
use tokio::sync::mpsc;

/// Everything a renderer was asked to do, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RendererCall {
    Show(usize),
    Hide,
    Select(usize),
    Unselect(usize),
}

/// Renderer that records calls instead of drawing.
#[derive(Debug, Default)]
pub struct MockRenderer {
    pub calls: Vec<RendererCall>,
}

impl MockRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent select call, if any.
    pub fn last_selected(&self) -> Option<usize> {
        self.calls.iter().rev().find_map(|call| match call {
            RendererCall::Select(index) => Some(*index),
            _ => None,
        })
    }
}

impl OverlayRenderer for MockRenderer {
    fn show_overlay(&mut self, highlights: &[keyhop::highlight::Highlight]) {
        self.calls.push(RendererCall::Show(highlights.len()));
    }

    fn hide_overlay(&mut self) {
        self.calls.push(RendererCall::Hide);
    }

    fn select(&mut self, index: usize) {
        self.calls.push(RendererCall::Select(index));
    }

    fn unselect(&mut self, index: usize) {
        self.calls.push(RendererCall::Unselect(index));
    }
}

/// Activator that records calls; can be told to fail the next activation.
#[derive(Debug, Default)]
pub struct MockActivator {
    pub activated: Vec<(ClickableId, ActivationMethod)>,
    pub blurred: Vec<ClickableId>,
    pub fail_next: bool,
}

impl MockActivator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Activator for MockActivator {
    fn activate(&mut self, clickable: &Clickable, method: ActivationMethod) -> KeyhopResult<()> {
        if self.fail_next {
            self.fail_next = false;
            return Err(KeyhopError::ActivationFailed {
                label: clickable.label.clone(),
                message: "element went away".to_string(),
            });
        }
        self.activated.push((clickable.id, method));
        Ok(())
    }

    fn blur(&mut self, clickable: &Clickable) {
        self.blurred.push(clickable.id);
    }
}

/// A page with entries at explicit rects, id = position in the list.
pub fn page_with_rects(rects: &[Rect]) -> Page {
    let entries = rects
        .iter()
        .enumerate()
        .map(|(id, rect)| PageEntry {
            clickable: Clickable::link(id, format!("link-{id}"), format!("/{id}")),
            rect: *rect,
        })
        .collect();
    Page::with_entries(
        "https://test.local",
        Rect::new(0.0, 0.0, 80.0, 24.0),
        entries,
        HighlightFilter::default(),
    )
}

/// An app over the given page, with both channel ends kept alive.
pub fn test_app(
    page: Page,
) -> (
    App,
    mpsc::UnboundedReceiver<Request>,
    mpsc::UnboundedSender<AppMessage>,
) {
    App::new(&Config::default(), page)
}
