//! Transient on-screen status messages.
//!
//! Every controller reports to the user through a [`Notifier`]. The primary
//! implementation is [`Notifications`], a stack of dismissible messages that
//! disappear on their own after a timeout. When no notification surface
//! exists, [`AlertNotifier`] delivers the message synchronously instead, the
//! same way a page falls back to `alert()`.
//!
//! ```
//! use leviart::notify::{Notifications, Notifier, Severity};
//! use std::time::Duration;
//!
//! let mut notes = Notifications::new();
//! notes.notify("Saved", Severity::Success);
//! assert_eq!(notes.visible().len(), 1);
//!
//! notes.advance(Duration::from_secs(5));
//! assert!(notes.visible().is_empty());
//! ```

use crate::timers::{TimerId, Timers};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::time::Duration;

/// How long a notification stays up unless dismissed.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Info,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: NotificationId,
    pub text: String,
    pub severity: Severity,
}

/// Anything that can show a message to the user.
pub trait Notifier {
    fn notify(&mut self, text: &str, severity: Severity);
}

/// Visible notifications, newest last.
///
/// Any number may be on screen at once. Each one owns an auto-dismiss timer
/// that is cancelled if the user closes it first.
#[derive(Debug)]
pub struct Notifications {
    visible: Vec<(Notification, TimerId)>,
    timers: Timers<NotificationId>,
    timeout: Duration,
    next_id: u64,
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifications {
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            visible: Vec::new(),
            timers: Timers::new(),
            timeout,
            next_id: 0,
        }
    }

    /// Show a message and start its dismissal timer.
    pub fn push(&mut self, text: impl Into<String>, severity: Severity) -> NotificationId {
        let id = NotificationId(self.next_id);
        self.next_id += 1;
        let timer = self.timers.schedule(self.timeout, id);
        let text = text.into();
        tracing::debug!(severity = %severity, "notification: {}", text);
        self.visible.push((Notification { id, text, severity }, timer));
        id
    }

    /// Close button handler. Returns false if the notification was already gone.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let Some(pos) = self.visible.iter().position(|(n, _)| n.id == id) else {
            return false;
        };
        let (_, timer) = self.visible.remove(pos);
        self.timers.cancel(timer);
        true
    }

    /// Let virtual time pass, removing every notification whose timer ran out.
    pub fn advance(&mut self, by: Duration) {
        for expired in self.timers.advance(by) {
            self.visible.retain(|(n, _)| n.id != expired);
        }
    }

    pub fn visible(&self) -> Vec<&Notification> {
        self.visible.iter().map(|(n, _)| n).collect()
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.visible.last().map(|(n, _)| n)
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}

impl Notifier for Notifications {
    fn notify(&mut self, text: &str, severity: Severity) {
        self.push(text, severity);
    }
}

/// Last-resort notifier: writes each message straight to a blocking sink.
///
/// The CLI uses it with stderr, where there is no notification surface.
#[derive(Debug)]
pub struct AlertNotifier<W: Write> {
    out: W,
}

impl<W: Write> AlertNotifier<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl AlertNotifier<std::io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(std::io::stderr())
    }
}

impl<W: Write> Notifier for AlertNotifier<W> {
    fn notify(&mut self, text: &str, severity: Severity) {
        if let Err(e) = writeln!(self.out, "[{severity}] {text}") {
            tracing::warn!("could not deliver alert: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notifications_coexist() {
        let mut notes = Notifications::new();
        notes.notify("one", Severity::Info);
        notes.notify("two", Severity::Error);
        let texts: Vec<&str> = notes.visible().iter().map(|n| n.text.as_str()).collect();
        assert_eq!(texts, vec!["one", "two"]);
    }

    #[test]
    fn auto_dismiss_after_five_seconds() {
        let mut notes = Notifications::new();
        notes.push("hello", Severity::Success);
        notes.advance(Duration::from_millis(4999));
        assert_eq!(notes.visible().len(), 1);
        notes.advance(Duration::from_millis(1));
        assert!(notes.is_empty());
    }

    #[test]
    fn each_notification_has_its_own_deadline() {
        let mut notes = Notifications::new();
        notes.push("early", Severity::Info);
        notes.advance(Duration::from_secs(3));
        notes.push("late", Severity::Info);
        notes.advance(Duration::from_secs(2));
        assert_eq!(notes.latest().map(|n| n.text.as_str()), Some("late"));
        assert_eq!(notes.visible().len(), 1);
    }

    #[test]
    fn manual_dismiss_is_immediate() {
        let mut notes = Notifications::new();
        let id = notes.push("bye", Severity::Info);
        assert!(notes.dismiss(id));
        assert!(notes.is_empty());
        assert!(!notes.dismiss(id));
        // The cancelled timer must not disturb later notifications.
        notes.push("next", Severity::Info);
        notes.advance(Duration::from_secs(4));
        assert_eq!(notes.visible().len(), 1);
    }

    #[test]
    fn custom_timeout() {
        let mut notes = Notifications::with_timeout(Duration::from_millis(200));
        notes.push("quick", Severity::Info);
        notes.advance(Duration::from_millis(200));
        assert!(notes.is_empty());
    }

    #[test]
    fn alert_fallback_writes_line() {
        let mut alert = AlertNotifier::new(Vec::new());
        alert.notify("Please enter a valid email address.", Severity::Error);
        let out = String::from_utf8(alert.into_inner()).unwrap();
        assert_eq!(out, "[error] Please enter a valid email address.\n");
    }

    #[test]
    fn severity_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Severity::Success).unwrap(), "\"success\"");
        assert_eq!(Severity::Info.to_string(), "info");
    }
}
