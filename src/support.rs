//! "Support the artist" donation modal.
//!
//! The modal offers two payment methods. Picking one highlights it and shows
//! method-specific instructions. Closing the modal (close button, backdrop
//! click, Escape) always forgets the selection.

use crate::config::SupportConfig;
use crate::notify::{Notifier, Severity};
use crate::pricing::ParseError;
use crate::types::{ESCAPE, Navigation, OverlayClick};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const MPESA_THANKS: &str =
    "Thank you! Please complete the M-Pesa transaction as instructed. We appreciate your support! 🎨";
pub const PAYPAL_THANKS: &str = "Thank you for your support! Complete your donation on PayPal.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Mpesa,
    Paypal,
}

impl PaymentMethod {
    /// Value of the `data-method` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            PaymentMethod::Mpesa => "mpesa",
            PaymentMethod::Paypal => "paypal",
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mpesa" => Ok(PaymentMethod::Mpesa),
            "paypal" => Ok(PaymentMethod::Paypal),
            other => Err(ParseError::new("payment method", other)),
        }
    }
}

/// Instructions shown under the selected method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentDetails {
    Mpesa {
        business_number: String,
        account: String,
    },
    Paypal {
        email: String,
        url: String,
    },
}

impl PaymentDetails {
    fn for_method(method: PaymentMethod, config: &SupportConfig) -> Self {
        match method {
            PaymentMethod::Mpesa => PaymentDetails::Mpesa {
                business_number: config.mpesa_business_number.clone(),
                account: config.mpesa_account.clone(),
            },
            PaymentMethod::Paypal => PaymentDetails::Paypal {
                email: config.paypal_email.clone(),
                url: config.paypal_url.clone(),
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct SupportModal {
    config: SupportConfig,
    /// Methods that have a control on this page.
    methods: Vec<PaymentMethod>,
    shown: bool,
    selected: Option<PaymentMethod>,
}

impl SupportModal {
    pub fn new(config: SupportConfig, methods: Vec<PaymentMethod>) -> Self {
        Self {
            config,
            methods,
            shown: false,
            selected: None,
        }
    }

    /// Show the modal, optionally preselecting a method.
    pub fn open(&mut self, method: Option<PaymentMethod>) {
        self.shown = true;
        if let Some(method) = method {
            self.select(method);
        }
    }

    /// Highlight `method` and show its instructions.
    ///
    /// Ignored for methods the page has no control for.
    pub fn select(&mut self, method: PaymentMethod) {
        if !self.methods.contains(&method) {
            return;
        }
        tracing::debug!(method = method.as_str(), "payment method selected");
        self.selected = Some(method);
    }

    /// Click on a `[data-method]` control.
    pub fn select_by_name(&mut self, name: &str) {
        if let Ok(method) = name.parse() {
            self.select(method);
        }
    }

    pub fn close(&mut self) {
        self.shown = false;
        self.selected = None;
    }

    pub fn on_click(&mut self, target: OverlayClick) {
        if matches!(target, OverlayClick::Backdrop | OverlayClick::CloseButton) {
            self.close();
        }
    }

    pub fn on_key(&mut self, key: &str) {
        if key == ESCAPE && self.shown {
            self.close();
        }
    }

    /// "I'll complete on my phone".
    pub fn confirm_mpesa(&mut self, notifier: &mut dyn Notifier) {
        self.close();
        notifier.notify(MPESA_THANKS, Severity::Success);
    }

    /// "Continue to PayPal": the host opens the returned page in a new tab.
    pub fn paypal_redirect(&mut self, notifier: &mut dyn Notifier) -> Navigation {
        let target = Navigation::OpenExternal(self.config.paypal_url.clone());
        self.close();
        notifier.notify(PAYPAL_THANKS, Severity::Success);
        target
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }

    pub fn scroll_locked(&self) -> bool {
        self.shown
    }

    pub fn selected(&self) -> Option<PaymentMethod> {
        self.selected
    }

    pub fn details(&self) -> Option<PaymentDetails> {
        self.selected
            .map(|method| PaymentDetails::for_method(method, &self.config))
    }
}
