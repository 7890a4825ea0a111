//! Application state and logic for the overlay controller.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`OverlaySession`] - the show→hide session state machine
//! - [`AppMessage`] - messages for async communication
//!
//! The app is a thin orchestrator: it resolves key events to commands,
//! asks the navigator for the next selection, and delegates everything
//! visual to the renderer and everything element-touching to the
//! activator. The navigator itself stays a pure function of explicit
//! arguments; no global state is read anywhere in this module.

mod handlers;
mod messages;
mod session;

pub use messages::AppMessage;
pub use session::{OverlayPhase, OverlaySession, SelectionMove};

use std::time::Instant;

use crossterm::event::KeyEvent;
use tokio::sync::mpsc;

use crate::config::Config;
use crate::highlight::ClickableId;
use crate::input::{Command, InputProcessor};
use crate::messages::Request;
use crate::page::Page;
use crate::traits::OverlayRenderer;

/// Top-level application state for the overlay demo.
pub struct App {
    /// The demo page surface the overlay navigates
    pub page: Page,
    /// Current overlay session plus cross-session position memory
    pub session: OverlaySession,
    /// Key event translator (bindings + toggle gate)
    pub input: InputProcessor,
    /// Clickable that received simulated focus from the last activation
    pub focused: Option<ClickableId>,
    /// Status line text shown at the bottom of the demo
    pub status: Option<String>,
    /// Set when the user asked to quit
    pub should_quit: bool,
    /// Set when the next frame should be drawn
    pub needs_redraw: bool,
    /// Requests to the background handler
    request_tx: mpsc::UnboundedSender<Request>,
    /// Receiver for background responses; the run loop takes ownership
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
}

impl App {
    /// Create the app with its channel endpoints.
    ///
    /// Returns the app itself plus the background handler's ends of the
    /// two channels: the request receiver and the response sender.
    pub fn new(
        config: &Config,
        page: Page,
    ) -> (
        Self,
        mpsc::UnboundedReceiver<Request>,
        mpsc::UnboundedSender<AppMessage>,
    ) {
        let (request_tx, request_rx) = mpsc::unbounded_channel();
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        let app = Self {
            page,
            session: OverlaySession::new(),
            input: InputProcessor::new(config.toggle_window()),
            focused: None,
            status: None,
            should_quit: false,
            needs_redraw: true,
            request_tx,
            message_rx: Some(message_rx),
        };
        (app, request_rx, message_tx)
    }

    /// Translate a key press into a command against the current state.
    pub fn process_key(&mut self, key: KeyEvent, now: Instant) -> Option<Command> {
        let overlay_visible = self.session.is_visible();
        self.input.process(key, now, overlay_visible)
    }

    /// Handle a message from the background handler.
    pub fn handle_message(&mut self, message: AppMessage, renderer: &mut dyn OverlayRenderer) {
        match message {
            AppMessage::BackgroundResponse { request, text } => {
                tracing::info!("background answered {:?}: {}", request, text);
                if request == Request::ReloadRequest {
                    // A reloaded page invalidates every measured rect, so
                    // any open session closes with it
                    self.hide_overlay(renderer);
                    self.page = Page::sample(self.page.filter());
                }
                self.status = Some(text);
                self.mark_dirty();
            }
        }
    }

    /// Request a redraw on the next frame.
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// A clone of the request channel for collaborators that send their
    /// own requests (e.g. the activator opening a link).
    pub fn request_sender(&self) -> mpsc::UnboundedSender<Request> {
        self.request_tx.clone()
    }

    pub(crate) fn send_request(&self, request: Request) -> Result<(), crate::error::KeyhopError> {
        self.request_tx
            .send(request)
            .map_err(|_| crate::error::KeyhopError::ChannelClosed)
    }
}
