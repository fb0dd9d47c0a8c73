//! Shared test utilities for the leviart test suite.
//!
//! Provides fixture builders for form fields and attachments, a stub form
//! relay, and notification assertions.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let mut notes = Notifications::new();
//! let mut upload = FileUpload::new(UploadLimits::default());
//! upload.select(vec![image("a.jpg", 1024), text_file("b.pdf")], &mut notes);
//!
//! let text = assert_single_notice(&notes, Severity::Error);
//! assert_eq!(text, "File \"b.pdf\" is not an image.");
//! ```

use std::sync::Mutex;

use async_trait::async_trait;

use crate::contact::{FormRelay, RelayError};
use crate::notify::{Notifications, Severity};
use crate::portfolio::PortfolioItem;
use crate::types::ContactFields;
use crate::upload::Attachment;

// =========================================================================
// Fixture builders
// =========================================================================

/// A contact form that passes every validation rule.
pub fn valid_fields() -> ContactFields {
    ContactFields {
        name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        service: "portrait".to_string(),
        message: "A charcoal portrait of my grandmother, A3 please.".to_string(),
        ..ContactFields::default()
    }
}

/// An in-memory JPEG attachment of the given size.
pub fn image(name: &str, size_bytes: u64) -> Attachment {
    Attachment::new(name, size_bytes, "image/jpeg")
}

/// A small non-image attachment.
pub fn text_file(name: &str) -> Attachment {
    Attachment::new(name, 2048, "application/pdf")
}

/// A portfolio entry with an image, tagged with `category`.
pub fn artwork(title: &str, category: &str) -> PortfolioItem {
    PortfolioItem::new(category)
        .with_image(format!("images/{title}.jpg"), title)
        .with_title(title)
        .with_description(format!("{title} in {category}"))
}

// =========================================================================
// Stub relay
// =========================================================================

/// A form relay that records every call and answers with a fixed result.
pub struct StubRelay {
    accept: bool,
    received: Mutex<Vec<ContactFields>>,
}

impl StubRelay {
    pub fn accepting() -> Self {
        Self {
            accept: true,
            received: Mutex::new(Vec::new()),
        }
    }

    pub fn rejecting() -> Self {
        Self {
            accept: false,
            received: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.received.lock().unwrap().len()
    }

    pub fn last_email(&self) -> Option<String> {
        self.received.lock().unwrap().last().map(|f| f.email.clone())
    }
}

#[async_trait]
impl FormRelay for StubRelay {
    async fn post(
        &self,
        fields: &ContactFields,
        _attachments: &[Attachment],
    ) -> Result<(), RelayError> {
        self.received.lock().unwrap().push(fields.clone());
        if self.accept {
            Ok(())
        } else {
            Err(RelayError::Status(reqwest::StatusCode::INTERNAL_SERVER_ERROR))
        }
    }
}

// =========================================================================
// Notification assertions (panic with a clear message on mismatch)
// =========================================================================

/// Assert exactly one notification is visible with `severity`; return its text.
pub fn assert_single_notice(notes: &Notifications, severity: Severity) -> String {
    let visible = notes.visible();
    let summary: Vec<(Severity, &str)> =
        visible.iter().map(|n| (n.severity, n.text.as_str())).collect();
    assert_eq!(
        visible.len(),
        1,
        "expected exactly one notification, got {summary:?}"
    );
    assert_eq!(
        visible[0].severity, severity,
        "unexpected severity in {summary:?}"
    );
    visible[0].text.clone()
}
