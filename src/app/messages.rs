//! AppMessage enum for async communication within the application.

use crate::messages::Request;

/// Messages received from async collaborators (the background handler).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// The background handler answered a request.
    BackgroundResponse {
        /// The request being answered
        request: Request,
        /// Human-readable response text, shown in the status line
        text: String,
    },
}
