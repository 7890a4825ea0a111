//! Input handling: translating key events into overlay commands.
//!
//! All keyboard input flows through one [`InputProcessor`]:
//!
//! ```text
//! KeyEvent -> InputProcessor::process() -> Option<Command> -> App::execute_command()
//! ```
//!
//! Processing order:
//!
//! 1. Explicit modifier chords (reload, quit) are matched first.
//! 2. Remaining events with any modifier held are dropped.
//! 3. The toggle key runs through the [`DoublePressGate`].
//! 4. Other bound plain keys map straight to their command, and any
//!    unbound plain key becomes [`Command::Cancel`] so stray typing
//!    closes the overlay rather than leaving it stale.
//!
//! # Modules
//!
//! - [`command`] - the [`Command`] enum
//! - [`keybindings`] - [`KeyCombo`] and the default binding table
//! - [`gate`] - the toggle key's double-press window

pub mod command;
pub mod gate;
pub mod keybindings;

pub use command::Command;
pub use gate::{DoublePressGate, DEFAULT_TOGGLE_WINDOW};
pub use keybindings::{KeyCombo, KeybindingConfig};

use std::time::{Duration, Instant};

use crossterm::event::{KeyEvent, KeyModifiers};

/// Stateful translator from key events to commands.
///
/// Owns the binding table and the toggle gate; the gate is the only
/// mutable state, so the processor is cheap to construct per session.
#[derive(Debug, Clone)]
pub struct InputProcessor {
    bindings: KeybindingConfig,
    gate: DoublePressGate,
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new(DEFAULT_TOGGLE_WINDOW)
    }
}

impl InputProcessor {
    /// Create a processor with default bindings and the given toggle
    /// window.
    pub fn new(toggle_window: Duration) -> Self {
        Self {
            bindings: KeybindingConfig::new(),
            gate: DoublePressGate::new(toggle_window),
        }
    }

    /// Translate one key press into a command, if any.
    ///
    /// # Arguments
    /// * `key` - The key event (callers should pre-filter to press events)
    /// * `now` - Timestamp of the event, fed to the toggle gate
    /// * `overlay_visible` - Whether an overlay session is currently open
    pub fn process(
        &mut self,
        key: KeyEvent,
        now: Instant,
        overlay_visible: bool,
    ) -> Option<Command> {
        // Chords stay active regardless of the overlay state
        if let Some(command) = self.bindings.chord(KeyCombo::new(key.code, key.modifiers)) {
            self.gate.cancel();
            tracing::debug!("chord {:?} -> {:?}", key.code, command);
            return Some(command);
        }

        // Everything else is modifier-free by contract
        if key.modifiers != KeyModifiers::NONE {
            return None;
        }

        match self.bindings.plain_key(key.code) {
            Some(Command::ToggleOverlay) => {
                if self.gate.register_toggle(now, overlay_visible) {
                    Some(Command::ToggleOverlay)
                } else {
                    None
                }
            }
            Some(command) => {
                self.gate.cancel();
                Some(command)
            }
            None => {
                // Unbound plain key: close the overlay and drop focus
                self.gate.cancel();
                Some(Command::Cancel)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn toggle_needs_a_double_press_while_hidden() {
        let mut input = InputProcessor::default();
        let now = Instant::now();
        assert_eq!(input.process(press(KeyCode::Char('f')), now, false), None);
        assert_eq!(
            input.process(
                press(KeyCode::Char('f')),
                now + Duration::from_millis(100),
                false
            ),
            Some(Command::ToggleOverlay)
        );
    }

    #[test]
    fn arrow_cancels_a_pending_toggle_window() {
        let mut input = InputProcessor::default();
        let now = Instant::now();
        assert_eq!(input.process(press(KeyCode::Char('f')), now, false), None);
        input.process(press(KeyCode::Down), now + Duration::from_millis(50), false);
        // The window was cancelled, so this press arms again instead of firing
        assert_eq!(
            input.process(
                press(KeyCode::Char('f')),
                now + Duration::from_millis(100),
                false
            ),
            None
        );
    }

    #[test]
    fn modified_keys_are_ignored() {
        let mut input = InputProcessor::default();
        let shifted = KeyEvent::new(KeyCode::Char('F'), KeyModifiers::SHIFT);
        assert_eq!(input.process(shifted, Instant::now(), false), None);
    }

    #[test]
    fn reload_chord_passes_the_modifier_filter() {
        let mut input = InputProcessor::default();
        let chord = KeyEvent::new(
            KeyCode::Char('R'),
            KeyModifiers::CONTROL | KeyModifiers::SHIFT,
        );
        assert_eq!(
            input.process(chord, Instant::now(), false),
            Some(Command::Reload)
        );
    }

    #[test]
    fn unbound_plain_key_cancels() {
        let mut input = InputProcessor::default();
        assert_eq!(
            input.process(press(KeyCode::Char('x')), Instant::now(), true),
            Some(Command::Cancel)
        );
    }
}
