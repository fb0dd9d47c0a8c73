//! Contact form controller.
//!
//! ## Submission lifecycle
//!
//! ```text
//! Idle ──submit──▶ Validating ──fail──▶ Idle
//!                      │
//!                     pass
//!                      ▼
//!                 Submitting ──relay ok──▶ Success ─┐
//!                      │                            ├──▶ Idle
//!                      └──error/non-2xx──▶ Failed ──┘
//! ```
//!
//! While submitting, the button is disabled and reads `Sending...` and the
//! form is marked busy. Both outcomes restore the button before the
//! controller returns to `Idle`. A success clears the form and schedules a
//! redirect to the thank-you page; a failure keeps the fields so the visitor
//! can try again. There is exactly one relay attempt per submit.
//!
//! The relay is reached through [`FormRelay`]. [`HttpRelay`] posts a
//! multipart body with `reqwest`; tests substitute their own.

use crate::config::FormConfig;
use crate::notify::{Notifier, Severity};
use crate::timers::Timers;
use crate::types::{ContactFields, Navigation, SubmitButton};
use crate::upload::{Attachment, FileUpload};
use crate::validate::validate_contact_form;
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::multipart::{Form, Part};
use std::time::Duration;
use thiserror::Error;

pub const SUCCESS_MESSAGE: &str =
    "Thank you for your inquiry! We'll get back to you within 24 hours.";
pub const FAILURE_MESSAGE: &str =
    "There was an error sending your message. Please try again or contact us directly.";

const SUBMIT_LABEL: &str = "Send Inquiry";
const BUSY_LABEL: &str = "Sending...";

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("form relay answered {0}")]
    Status(reqwest::StatusCode),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// The third-party service that receives contact submissions.
#[async_trait]
pub trait FormRelay: Send + Sync {
    /// Deliver one submission. `Ok` means the relay accepted it.
    async fn post(
        &self,
        fields: &ContactFields,
        attachments: &[Attachment],
    ) -> Result<(), RelayError>;
}

/// Posts submissions as `multipart/form-data`, asking for a JSON answer.
///
/// Success is decided by the status code alone; the body is never read.
#[derive(Debug, Clone)]
pub struct HttpRelay {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpRelay {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl FormRelay for HttpRelay {
    async fn post(
        &self,
        fields: &ContactFields,
        attachments: &[Attachment],
    ) -> Result<(), RelayError> {
        let mut form = Form::new();
        for (name, value) in fields.form_pairs() {
            form = form.text(name, value.to_string());
        }
        for attachment in attachments {
            let bytes = match &attachment.path {
                Some(path) => tokio::fs::read(path).await?,
                None => Vec::new(),
            };
            let part = Part::bytes(bytes)
                .file_name(attachment.filename.clone())
                .mime_str(&attachment.mime_type)?;
            form = form.part("attachments", part);
        }

        tracing::debug!(
            endpoint = %self.endpoint,
            files = attachments.len(),
            "posting contact form"
        );
        let response = self
            .client
            .post(&self.endpoint)
            .header(ACCEPT, "application/json")
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!(%status, "form relay responded");
        if status.is_success() {
            Ok(())
        } else {
            Err(RelayError::Status(status))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Validating,
    Submitting,
    Success,
    Failed,
}

/// How a submit attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent.
    Invalid,
    /// Ignored because a submission is already in flight.
    Busy,
    Sent,
    Failed,
}

#[derive(Debug)]
pub struct ContactForm {
    pub fields: ContactFields,
    upload: Option<FileUpload>,
    state: FormState,
    button: SubmitButton,
    idle_label: String,
    busy: bool,
    thank_you_page: String,
    redirect_delay: Duration,
    timers: Timers<Navigation>,
}

impl ContactForm {
    pub fn new(config: &FormConfig) -> Self {
        Self {
            fields: ContactFields::default(),
            upload: None,
            state: FormState::Idle,
            button: SubmitButton::new(SUBMIT_LABEL),
            idle_label: SUBMIT_LABEL.to_string(),
            busy: false,
            thank_you_page: config.thank_you_page.clone(),
            redirect_delay: config.redirect_delay(),
            timers: Timers::new(),
        }
    }

    /// Attach the form's file input, when the page has one.
    pub fn with_upload(mut self, upload: FileUpload) -> Self {
        self.upload = Some(upload);
        self
    }

    /// Use the label the page markup gives the submit button.
    pub fn with_button_label(mut self, label: impl Into<String>) -> Self {
        self.idle_label = label.into();
        self.button = SubmitButton::new(self.idle_label.clone());
        self
    }

    pub fn upload(&self) -> Option<&FileUpload> {
        self.upload.as_ref()
    }

    pub fn upload_mut(&mut self) -> Option<&mut FileUpload> {
        self.upload.as_mut()
    }

    pub fn attachments(&self) -> &[Attachment] {
        match &self.upload {
            Some(upload) => upload.selected(),
            None => &[],
        }
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn button(&self) -> &SubmitButton {
        &self.button
    }

    /// Whether the form carries its busy marking.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Validate and, on success, enter `Submitting`.
    ///
    /// Returns `false` when the form is invalid or already submitting.
    pub fn begin_submit(&mut self, notifier: &mut dyn Notifier) -> bool {
        if self.state != FormState::Idle {
            return false;
        }
        self.state = FormState::Validating;
        if !validate_contact_form(&self.fields, notifier) {
            self.state = FormState::Idle;
            return false;
        }

        self.state = FormState::Submitting;
        self.button.label = BUSY_LABEL.to_string();
        self.button.disabled = true;
        self.busy = true;
        tracing::debug!("contact form submitting");
        true
    }

    /// Apply the relay's answer and return to `Idle`.
    pub fn finish_submit(
        &mut self,
        result: Result<(), RelayError>,
        notifier: &mut dyn Notifier,
    ) -> SubmitOutcome {
        let outcome = match result {
            Ok(()) => {
                self.state = FormState::Success;
                tracing::info!("contact form delivered");
                notifier.notify(SUCCESS_MESSAGE, Severity::Success);
                self.fields.clear();
                if let Some(upload) = self.upload.as_mut() {
                    upload.clear();
                }
                self.timers.schedule(
                    self.redirect_delay,
                    Navigation::Redirect(self.thank_you_page.clone()),
                );
                SubmitOutcome::Sent
            }
            Err(e) => {
                self.state = FormState::Failed;
                tracing::warn!("contact form delivery failed: {e}");
                notifier.notify(FAILURE_MESSAGE, Severity::Error);
                SubmitOutcome::Failed
            }
        };

        self.button.label = self.idle_label.clone();
        self.button.disabled = false;
        self.busy = false;
        self.state = FormState::Idle;
        outcome
    }

    /// Handle a submit event end to end.
    pub async fn submit<R>(&mut self, relay: &R, notifier: &mut dyn Notifier) -> SubmitOutcome
    where
        R: FormRelay + ?Sized,
    {
        if self.state != FormState::Idle {
            return SubmitOutcome::Busy;
        }
        if !self.begin_submit(notifier) {
            return SubmitOutcome::Invalid;
        }
        let result = relay.post(&self.fields, self.attachments()).await;
        self.finish_submit(result, notifier)
    }

    /// Let virtual time pass; yields the post-success redirect once it is due.
    pub fn advance(&mut self, by: Duration) -> Vec<Navigation> {
        self.timers.advance(by)
    }
}
