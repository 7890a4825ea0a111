//! Default keybindings for the overlay.
//!
//! Two binding classes exist:
//!
//! - *Plain* keys, only honored when no modifier is held. The overlay key
//!   set is deliberately tiny: toggle, four arrows, activate.
//! - *Chords*, explicit modifier combinations that stay active regardless
//!   (reload and quit).
//!
//! Any plain key outside the bound set cancels the overlay, so stray
//! typing never leaves stale boxes on screen.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyModifiers};

use super::command::Command;
use crate::navigator::Direction;

/// A key combination (key code + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    /// Creates a new key combo with the given code and modifiers.
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Creates a key combo with no modifiers.
    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    /// Creates a key combo with Control held.
    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    /// Creates a key combo with Control and Shift held.
    pub const fn ctrl_shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL.union(KeyModifiers::SHIFT))
    }
}

/// Keybinding configuration for the overlay.
#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    /// Modifier chords, always active
    chords: HashMap<KeyCombo, Command>,
    /// Plain keys, active only without modifiers
    plain: HashMap<KeyCode, Command>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingConfig {
    /// Creates the default binding set.
    pub fn new() -> Self {
        let mut config = Self {
            chords: HashMap::new(),
            plain: HashMap::new(),
        };
        config.setup_chord_bindings();
        config.setup_plain_bindings();
        config
    }

    fn setup_chord_bindings(&mut self) {
        // Ctrl+Shift+R: ask the background to reload the page
        self.chords
            .insert(KeyCombo::ctrl_shift(KeyCode::Char('R')), Command::Reload);
        // Ctrl+C: quit the demo
        self.chords
            .insert(KeyCombo::ctrl(KeyCode::Char('c')), Command::Quit);
    }

    fn setup_plain_bindings(&mut self) {
        self.plain.insert(KeyCode::Char('f'), Command::ToggleOverlay);
        self.plain
            .insert(KeyCode::Up, Command::Move(Direction::Up));
        self.plain
            .insert(KeyCode::Down, Command::Move(Direction::Down));
        self.plain
            .insert(KeyCode::Left, Command::Move(Direction::Left));
        self.plain
            .insert(KeyCode::Right, Command::Move(Direction::Right));
        self.plain.insert(KeyCode::Enter, Command::Activate);
        self.plain.insert(KeyCode::Esc, Command::Cancel);
    }

    /// Look up a chord binding for an exact key+modifier combination.
    pub fn chord(&self, combo: KeyCombo) -> Option<Command> {
        self.chords.get(&combo).copied()
    }

    /// Look up a plain binding for an unmodified key.
    pub fn plain_key(&self, code: KeyCode) -> Option<Command> {
        self.plain.get(&code).copied()
    }
}
