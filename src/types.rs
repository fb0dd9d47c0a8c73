//! Shared value types passed between controllers and the host page.
//!
//! Controllers never reach into the document. Everything they need arrives as
//! one of these values, and everything they want the host to do (navigate,
//! scroll) leaves as one.

use serde::{Deserialize, Serialize};

/// Field set of the contact form, as the browser would collect it.
///
/// The four required fields drive validation; the remaining ones are optional
/// selections that are forwarded to the relay untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Selected service type (`<select id="service">`), empty when unset.
    pub service: String,
    /// Number-of-people selection: `1`..`4` or `5+`.
    pub people: String,
    /// Portrait size selection: `a4`..`a0`.
    pub size: String,
    pub budget: String,
    pub timeline: String,
    pub message: String,
}

impl ContactFields {
    /// Form field names paired with their values, in document order.
    pub fn form_pairs(&self) -> [(&'static str, &str); 9] {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("service", &self.service),
            ("number-of-people", &self.people),
            ("portrait-size", &self.size),
            ("budget", &self.budget),
            ("timeline", &self.timeline),
            ("message", &self.message),
        ]
    }

    /// Equivalent of `form.reset()`.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// A submit control: its label and whether it accepts clicks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButton {
    pub label: String,
    pub disabled: bool,
}

impl SubmitButton {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            disabled: false,
        }
    }
}

/// A navigation the host must perform on a controller's behalf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Replace the current location (`window.location.href = ...`).
    Redirect(String),
    /// Open an external page in a new tab.
    OpenExternal(String),
}

/// Where a click landed relative to an overlay (modal or lightbox).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayClick {
    /// The dimmed area around the content.
    Backdrop,
    /// Anywhere inside the content panel.
    Content,
    /// The explicit close affordance.
    CloseButton,
}

/// Key name reported by `KeyboardEvent.key` for the escape key.
pub const ESCAPE: &str = "Escape";
