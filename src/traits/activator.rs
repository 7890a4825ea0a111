//! Activator trait: simulating a click or focus on the selected element.

use crate::error::KeyhopResult;
use crate::highlight::{Clickable, ClickableKind};

/// How a clickable is activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationMethod {
    /// Simulate a click (links, buttons, button-like inputs)
    Click,
    /// Move input focus to the element (text/selection inputs)
    Focus,
}

/// Decide how a clickable should be activated.
///
/// Elements of kind input/select/textarea receive focus so the user can
/// start typing or choosing, unless the input subtype is button-like
/// (button, checkbox, file, image, radio, reset, submit), which clicks.
/// Everything else clicks.
pub fn activation_method(kind: ClickableKind) -> ActivationMethod {
    match kind {
        ClickableKind::Select | ClickableKind::TextArea => ActivationMethod::Focus,
        ClickableKind::Input(input) => {
            if input.is_button_like() {
                ActivationMethod::Click
            } else {
                ActivationMethod::Focus
            }
        }
        ClickableKind::Link | ClickableKind::Button => ActivationMethod::Click,
    }
}

/// Performs activation on behalf of the controller.
///
/// Failures (the element disappeared, the click could not be delivered)
/// are returned to the caller rather than swallowed.
pub trait Activator {
    /// Activate a clickable with the given method.
    fn activate(&mut self, clickable: &Clickable, method: ActivationMethod) -> KeyhopResult<()>;

    /// Drop input focus from a previously focused clickable.
    fn blur(&mut self, clickable: &Clickable);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::InputKind;

    #[test]
    fn text_like_elements_get_focus() {
        assert_eq!(
            activation_method(ClickableKind::Input(InputKind::Text)),
            ActivationMethod::Focus
        );
        assert_eq!(
            activation_method(ClickableKind::Select),
            ActivationMethod::Focus
        );
        assert_eq!(
            activation_method(ClickableKind::TextArea),
            ActivationMethod::Focus
        );
    }

    #[test]
    fn button_like_inputs_get_click() {
        for input in [
            InputKind::Button,
            InputKind::Checkbox,
            InputKind::File,
            InputKind::Image,
            InputKind::Radio,
            InputKind::Reset,
            InputKind::Submit,
        ] {
            assert_eq!(
                activation_method(ClickableKind::Input(input)),
                ActivationMethod::Click,
                "input[type={input:?}] must click, not focus"
            );
        }
    }

    #[test]
    fn links_and_buttons_get_click() {
        assert_eq!(
            activation_method(ClickableKind::Link),
            ActivationMethod::Click
        );
        assert_eq!(
            activation_method(ClickableKind::Button),
            ActivationMethod::Click
        );
    }
}
