//! Demo page surface: a fixed layout of clickables in terminal cells.
//!
//! This is the crate's stand-in for a real document: a small page of
//! links, buttons and form fields with hand-placed rectangles. It
//! implements [`ClickableSurface`] (measuring is just reading the stored
//! rects) and provides the [`PageActivator`] that simulates clicks and
//! focus against it.

use tokio::sync::mpsc;

use crate::error::{KeyhopError, KeyhopResult};
use crate::geometry::{Point, Rect};
use crate::highlight::{
    Clickable, ClickableId, ClickableKind, Highlight, HighlightFilter, InputKind,
};
use crate::messages::Request;
use crate::traits::{ActivationMethod, Activator, ClickableSurface};

/// One clickable placed on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageEntry {
    /// The interactive element
    pub clickable: Clickable,
    /// Its bounding box in page cells
    pub rect: Rect,
}

/// A page of clickables with a fixed viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    origin: String,
    viewport: Rect,
    entries: Vec<PageEntry>,
    filter: HighlightFilter,
}

impl Page {
    /// Build a page from explicit entries.
    pub fn with_entries(
        origin: impl Into<String>,
        viewport: Rect,
        entries: Vec<PageEntry>,
        filter: HighlightFilter,
    ) -> Self {
        Self {
            origin: origin.into(),
            viewport,
            entries,
            filter,
        }
    }

    /// The built-in demo page, sized for an 80x24 terminal.
    ///
    /// Includes one zero-sized and one off-page element so the size and
    /// visibility filters have something to reject.
    pub fn sample(filter: HighlightFilter) -> Self {
        let mut entries = Vec::new();
        let mut place = |clickable: Clickable, rect: Rect| {
            entries.push(PageEntry { clickable, rect });
        };

        // Header navigation
        place(Clickable::link(0, "Home", "/"), Rect::new(2.0, 1.0, 10.0, 3.0));
        place(Clickable::link(1, "Docs", "/docs"), Rect::new(14.0, 1.0, 10.0, 3.0));
        place(Clickable::link(2, "About", "/about"), Rect::new(26.0, 1.0, 11.0, 3.0));
        place(
            Clickable::link(3, "GitHub", "https://github.com/keyhop/keyhop"),
            Rect::new(64.0, 1.0, 12.0, 3.0),
        );

        // Search row
        place(
            Clickable::new(4, ClickableKind::Input(InputKind::Search), "Search"),
            Rect::new(2.0, 5.0, 30.0, 3.0),
        );
        place(
            Clickable::new(5, ClickableKind::Input(InputKind::Submit), "Go"),
            Rect::new(34.0, 5.0, 8.0, 3.0),
        );

        // Form column
        place(
            Clickable::new(6, ClickableKind::Input(InputKind::Text), "Name"),
            Rect::new(2.0, 10.0, 26.0, 3.0),
        );
        place(
            Clickable::new(7, ClickableKind::Select, "Country"),
            Rect::new(2.0, 14.0, 26.0, 3.0),
        );
        place(
            Clickable::new(8, ClickableKind::TextArea, "Message"),
            Rect::new(2.0, 18.0, 26.0, 4.0),
        );

        // Action column
        place(
            Clickable::new(9, ClickableKind::Button, "Save"),
            Rect::new(40.0, 10.0, 12.0, 3.0),
        );
        place(
            Clickable::new(10, ClickableKind::Button, "Delete"),
            Rect::new(54.0, 10.0, 12.0, 3.0),
        );
        place(
            Clickable::new(11, ClickableKind::Input(InputKind::Checkbox), "Subscribe"),
            Rect::new(40.0, 14.0, 15.0, 3.0),
        );
        place(
            Clickable::new(12, ClickableKind::Input(InputKind::Radio), "Weekly"),
            Rect::new(57.0, 14.0, 12.0, 3.0),
        );
        place(
            Clickable::link(13, "Privacy", "/privacy"),
            Rect::new(40.0, 18.0, 14.0, 3.0),
        );

        // Rejected by the filters: collapsed and scrolled off the page
        place(
            Clickable::link(14, "hidden", "/hidden"),
            Rect::new(5.0, 9.0, 0.0, 0.0),
        );
        place(
            Clickable::link(15, "offscreen", "/offscreen"),
            Rect::new(-10.0, 3.0, 8.0, 3.0),
        );

        Self::with_entries(
            "https://demo.keyhop.dev",
            Rect::new(0.0, 0.0, 80.0, 24.0),
            entries,
            filter,
        )
    }

    /// The page origin used to resolve relative hrefs.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// All entries, including ones the filter would reject.
    pub fn entries(&self) -> &[PageEntry] {
        &self.entries
    }

    /// The filter this page measures with.
    pub fn filter(&self) -> HighlightFilter {
        self.filter
    }
}

impl ClickableSurface for Page {
    fn highlights(&self) -> Vec<Highlight> {
        self.entries
            .iter()
            .filter(|entry| self.filter.accepts(&entry.rect))
            .map(|entry| Highlight::new(entry.clickable.id, entry.rect))
            .collect()
    }

    fn clickable(&self, id: ClickableId) -> Option<&Clickable> {
        self.entries
            .iter()
            .map(|entry| &entry.clickable)
            .find(|clickable| clickable.id == id)
    }

    fn viewport_center(&self) -> Point {
        self.viewport.central_point()
    }
}

/// Resolve an href against the page origin.
///
/// Absolute URLs pass through; anything starting with `/` is joined onto
/// the origin.
pub fn resolve_url(origin: &str, href: &str) -> String {
    if href.starts_with('/') {
        format!("{origin}{href}")
    } else {
        href.to_string()
    }
}

/// Activator for the demo page.
///
/// Clicking a link sends an open-tab request to the background handler;
/// other activations only log, since the demo page has no real elements
/// to poke.
pub struct PageActivator {
    origin: String,
    request_tx: mpsc::UnboundedSender<Request>,
}

impl PageActivator {
    /// Create an activator for a page origin.
    pub fn new(origin: impl Into<String>, request_tx: mpsc::UnboundedSender<Request>) -> Self {
        Self {
            origin: origin.into(),
            request_tx,
        }
    }
}

impl Activator for PageActivator {
    fn activate(&mut self, clickable: &Clickable, method: ActivationMethod) -> KeyhopResult<()> {
        match method {
            ActivationMethod::Click => {
                if let (ClickableKind::Link, Some(href)) = (clickable.kind, clickable.href.as_ref())
                {
                    let url = resolve_url(&self.origin, href);
                    self.request_tx
                        .send(Request::OpenTabRequest(url))
                        .map_err(|_| KeyhopError::ChannelClosed)?;
                } else {
                    tracing::info!("click on \"{}\"", clickable.label);
                }
            }
            ActivationMethod::Focus => {
                tracing::info!("focus on \"{}\"", clickable.label);
            }
        }
        Ok(())
    }

    fn blur(&mut self, clickable: &Clickable) {
        tracing::debug!("blur \"{}\"", clickable.label);
    }
}
