//! Trait abstractions for the navigation core's collaborators.
//!
//! The navigator itself is pure; everything that touches a page, a screen
//! or an element goes through one of these contracts, enabling dependency
//! injection and mocking in tests.
//!
//! # Traits
//!
//! - [`ClickableSurface`] - supplies measured, pre-filtered highlights
//! - [`OverlayRenderer`] - draws and restyles the overlay boxes
//! - [`Activator`] - simulates a click or focus on a clickable

pub mod activator;
pub mod renderer;
pub mod surface;

pub use activator::{activation_method, ActivationMethod, Activator};
pub use renderer::OverlayRenderer;
pub use surface::ClickableSurface;
