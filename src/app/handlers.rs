//! Command execution handlers for the App.

use super::App;
use crate::error::{KeyhopError, KeyhopResult};
use crate::input::Command;
use crate::messages::Request;
use crate::navigator::Direction;
use crate::traits::{activation_method, ActivationMethod, Activator, ClickableSurface, OverlayRenderer};

impl App {
    /// Execute a command against the current state.
    ///
    /// Collaborator failures bubble up; the run loop logs them and puts a
    /// short notice in the status line.
    pub fn execute_command(
        &mut self,
        command: Command,
        renderer: &mut dyn OverlayRenderer,
        activator: &mut dyn Activator,
    ) -> KeyhopResult<()> {
        tracing::debug!("execute_command: {:?}", command);
        match command {
            Command::ToggleOverlay => {
                self.toggle_overlay(renderer);
                Ok(())
            }
            Command::Move(direction) => {
                self.navigate(direction, renderer);
                Ok(())
            }
            Command::Activate => self.activate_selected(renderer, activator),
            Command::Cancel => {
                self.cancel(renderer, activator);
                Ok(())
            }
            Command::Reload => self.request_reload(),
            Command::Quit => {
                self.should_quit = true;
                Ok(())
            }
        }
    }

    /// Show the overlay if hidden, hide it if visible.
    pub fn toggle_overlay(&mut self, renderer: &mut dyn OverlayRenderer) {
        if self.session.is_visible() {
            self.hide_overlay(renderer);
        } else {
            self.show_overlay(renderer);
        }
    }

    /// Open an overlay session from a fresh page measurement.
    fn show_overlay(&mut self, renderer: &mut dyn OverlayRenderer) {
        let highlights = self.page.highlights();
        let viewport_center = self.page.viewport_center();

        match self.session.open(highlights, viewport_center) {
            Some(selected) => {
                renderer.show_overlay(self.session.highlights());
                renderer.select(selected);
                self.status = None;
            }
            None => {
                tracing::debug!("nothing clickable on the page, overlay stays hidden");
                self.status = Some("nothing to select on this page".to_string());
            }
        }
        self.mark_dirty();
    }

    /// Close the current overlay session, if any.
    pub fn hide_overlay(&mut self, renderer: &mut dyn OverlayRenderer) {
        if self.session.is_visible() {
            self.session.close();
            renderer.hide_overlay();
            self.mark_dirty();
        }
    }

    /// Move the selection one step; stays put when the direction has no
    /// qualifying neighbor or the overlay is hidden.
    pub fn navigate(&mut self, direction: Direction, renderer: &mut dyn OverlayRenderer) {
        if let Some(step) = self.session.step(direction) {
            renderer.unselect(step.from);
            renderer.select(step.to);
            self.mark_dirty();
        }
    }

    /// Activate the selected clickable, then close the overlay.
    fn activate_selected(
        &mut self,
        renderer: &mut dyn OverlayRenderer,
        activator: &mut dyn Activator,
    ) -> KeyhopResult<()> {
        let Some(highlight) = self.session.selected_highlight().copied() else {
            return Ok(());
        };

        let clickable = self
            .page
            .clickable(highlight.clickable)
            .cloned()
            .ok_or(KeyhopError::ClickableGone {
                id: highlight.clickable,
            })?;

        let method = activation_method(clickable.kind);
        activator.activate(&clickable, method)?;

        if method == ActivationMethod::Focus {
            self.focused = Some(clickable.id);
        }
        self.status = Some(match method {
            ActivationMethod::Click => format!("clicked \"{}\"", clickable.label),
            ActivationMethod::Focus => format!("focused \"{}\"", clickable.label),
        });

        self.hide_overlay(renderer);
        Ok(())
    }

    /// Close the overlay and drop any simulated focus.
    pub fn cancel(&mut self, renderer: &mut dyn OverlayRenderer, activator: &mut dyn Activator) {
        self.hide_overlay(renderer);
        if let Some(id) = self.focused.take() {
            if let Some(clickable) = self.page.clickable(id) {
                activator.blur(clickable);
            }
            self.mark_dirty();
        }
    }

    /// Ask the background handler to reload the page.
    fn request_reload(&mut self) -> KeyhopResult<()> {
        self.send_request(Request::ReloadRequest)
    }
}
