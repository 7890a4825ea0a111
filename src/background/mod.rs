//! Background request handler.
//!
//! Plays the part of the extension's background process: it receives
//! [`Request`] envelopes from the app over a channel, performs the side
//! effect, and answers with a short text echoed back as an
//! [`AppMessage`]. It runs as a plain spawned task and exits when the
//! request channel closes.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::app::AppMessage;
use crate::messages::Request;

/// Handler state for background requests.
#[derive(Debug, Clone)]
pub struct Background {
    /// Whether open-tab requests actually launch a browser. Tests and
    /// headless runs keep this off.
    open_links: bool,
}

impl Background {
    /// Create a handler.
    pub fn new(open_links: bool) -> Self {
        Self { open_links }
    }

    /// Handle one request and produce its response text.
    pub fn handle_request(&self, request: &Request) -> String {
        match request {
            Request::ReloadRequest => {
                tracing::info!("reload requested");
                "reloaded".to_string()
            }
            Request::OpenTabRequest(url) => {
                if self.open_links {
                    if let Err(err) = webbrowser::open(url) {
                        tracing::warn!("could not open {url}: {err}");
                        return format!("failed to open {url}: {err}");
                    }
                }
                format!("new tab opened with {url}")
            }
        }
    }
}

/// Spawn the background loop.
///
/// Responses are sent back on `message_tx`; the loop ends when either
/// channel closes.
pub fn start(
    background: Background,
    mut request_rx: mpsc::UnboundedReceiver<Request>,
    message_tx: mpsc::UnboundedSender<AppMessage>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(request) = request_rx.recv().await {
            let text = background.handle_request(&request);
            let delivered = message_tx.send(AppMessage::BackgroundResponse { request, text });
            if delivered.is_err() {
                break;
            }
        }
    })
}
