//! Command definitions for keyboard input handling.
//!
//! The [`Command`] enum decouples key bindings from their effects: keys are
//! translated to commands by the input processor, and commands are executed
//! against the app by the handlers module.

use crate::navigator::Direction;

/// All actions the keyboard surface can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Toggle the highlight overlay on or off
    ToggleOverlay,
    /// Move the selection one step in a direction
    Move(Direction),
    /// Activate the selected clickable (click or focus)
    Activate,
    /// Close the overlay and drop any simulated focus
    Cancel,
    /// Ask the background handler to reload the page (Ctrl+Shift+R)
    Reload,
    /// Quit the demo application (Ctrl+C)
    Quit,
}
