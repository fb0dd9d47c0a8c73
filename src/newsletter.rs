//! Footer newsletter sign-up.
//!
//! There is no subscription backend; a valid address shows a busy button for
//! a moment and then a thank-you notice.

use crate::notify::{Notifier, Severity};
use crate::timers::Timers;
use crate::types::SubmitButton;
use crate::validate::is_valid_email;
use std::time::Duration;

/// Simulated round-trip before the subscription is confirmed.
pub const SUBSCRIBE_DELAY: Duration = Duration::from_millis(1500);

const SUBSCRIBE_LABEL: &str = "Subscribe";
const BUSY_LABEL: &str = "Subscribing...";

#[derive(Debug)]
pub struct NewsletterForm {
    pub email: String,
    button: SubmitButton,
    timers: Timers<()>,
}

impl Default for NewsletterForm {
    fn default() -> Self {
        Self::new()
    }
}

impl NewsletterForm {
    pub fn new() -> Self {
        Self {
            email: String::new(),
            button: SubmitButton::new(SUBSCRIBE_LABEL),
            timers: Timers::new(),
        }
    }

    pub fn button(&self) -> &SubmitButton {
        &self.button
    }

    pub fn is_pending(&self) -> bool {
        !self.timers.is_empty()
    }

    /// Submit handler. Returns whether the subscription started.
    pub fn submit(&mut self, notifier: &mut dyn Notifier) -> bool {
        if self.button.disabled {
            return false;
        }
        if self.email.is_empty() {
            notifier.notify("Please enter your email address", Severity::Error);
            return false;
        }
        if !is_valid_email(&self.email) {
            notifier.notify("Please enter a valid email address", Severity::Error);
            return false;
        }
        self.button.label = BUSY_LABEL.to_string();
        self.button.disabled = true;
        self.timers.schedule(SUBSCRIBE_DELAY, ());
        true
    }

    /// Let virtual time pass; completes a pending subscription when due.
    pub fn advance(&mut self, by: Duration, notifier: &mut dyn Notifier) {
        for () in self.timers.advance(by) {
            tracing::info!("newsletter subscription confirmed");
            notifier.notify("Thank you for subscribing to our newsletter!", Severity::Success);
            self.email.clear();
            self.button = SubmitButton::new(SUBSCRIBE_LABEL);
        }
    }
}
