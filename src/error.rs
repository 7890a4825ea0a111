//! Unified error type for the controller and glue layers.
//!
//! The navigator itself raises no errors; its edge cases are absent-result
//! values. Everything that can actually fail (terminal I/O, activation,
//! the background channel) reports through [`KeyhopError`].

use thiserror::Error;

use crate::highlight::ClickableId;

/// Errors surfaced by the controller and its collaborators.
#[derive(Debug, Error)]
pub enum KeyhopError {
    /// Terminal or other I/O failure.
    #[error("terminal failure: {0}")]
    Terminal(#[from] std::io::Error),

    /// The selected highlight points at a clickable the surface no longer
    /// knows about.
    #[error("clickable {id} is gone from the page")]
    ClickableGone { id: ClickableId },

    /// The activator could not deliver the click or focus.
    #[error("activation of \"{label}\" failed: {message}")]
    ActivationFailed { label: String, message: String },

    /// The background request channel is closed.
    #[error("background channel closed")]
    ChannelClosed,
}

/// Result alias used throughout the crate.
pub type KeyhopResult<T> = Result<T, KeyhopError>;
