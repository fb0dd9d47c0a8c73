//! Wiring for one loaded page.
//!
//! A [`PageLayout`] says which interactive elements the page carries.
//! [`Page::ready`] builds a controller for each element that exists and
//! leaves the others `None`, so a page without a contact form simply has no
//! contact controller.
//!
//! The body starts out marked `loading`; once the controllers are built it
//! is marked `loaded`.

use crate::config::SiteConfig;
use crate::contact::ContactForm;
use crate::faq::Accordion;
use crate::lightbox::LightboxHost;
use crate::nav::MobileMenu;
use crate::newsletter::NewsletterForm;
use crate::notify::Notifications;
use crate::portfolio::{PortfolioFilter, PortfolioItem};
use crate::pricing::PriceEstimator;
use crate::reveal::ScrollReveal;
use crate::support::{PaymentMethod, SupportModal};
use crate::types::Navigation;
use crate::upload::FileUpload;
use serde::Deserialize;
use std::time::Duration;

/// Class on `<body>` telling the stylesheet whether the scripts have run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BodyState {
    #[default]
    Loading,
    Loaded,
}

impl BodyState {
    pub fn class(self) -> &'static str {
        match self {
            BodyState::Loading => "loading",
            BodyState::Loaded => "loaded",
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactLayout {
    /// Label the markup gives the submit button.
    pub button_label: Option<String>,
    pub file_input: bool,
    pub budget_select: bool,
}

/// Interactive elements present on a page.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageLayout {
    pub nav_toggle: bool,
    pub contact_form: Option<ContactLayout>,
    pub newsletter: bool,
    pub faq_items: usize,
    pub support_methods: Vec<PaymentMethod>,
    pub portfolio_filters: Vec<String>,
    pub portfolio_items: Vec<PortfolioItem>,
    pub lightbox: bool,
    /// Number of elements that fade in on first scroll into view.
    pub reveal_targets: usize,
}

#[derive(Debug)]
pub struct Page {
    pub body: BodyState,
    pub notifications: Notifications,
    pub menu: Option<MobileMenu>,
    pub contact: Option<ContactForm>,
    pub estimator: Option<PriceEstimator>,
    pub newsletter: Option<NewsletterForm>,
    pub faq: Option<Accordion>,
    pub support: Option<SupportModal>,
    pub portfolio: Option<PortfolioFilter>,
    pub lightbox: Option<LightboxHost>,
    pub reveal: Option<ScrollReveal>,
}

impl Page {
    pub fn ready(layout: PageLayout, config: &SiteConfig) -> Self {
        let (contact, estimator) = match &layout.contact_form {
            Some(contact_layout) => {
                let mut form = ContactForm::new(&config.form);
                if let Some(label) = &contact_layout.button_label {
                    form = form.with_button_label(label);
                }
                if contact_layout.file_input {
                    form = form.with_upload(FileUpload::new(config.uploads));
                }
                let estimator = PriceEstimator::new(
                    &config.pricing.currency,
                    contact_layout.budget_select.then(Vec::new),
                )
                .with_notice_timeout(config.notifications.timeout());
                (Some(form), Some(estimator))
            }
            None => (None, None),
        };

        let support = (!layout.support_methods.is_empty())
            .then(|| SupportModal::new(config.support.clone(), layout.support_methods.clone()));

        let lightbox = layout
            .lightbox
            .then(|| LightboxHost::new(&config.portfolio.contact_page));

        let mut page = Self {
            body: BodyState::Loading,
            notifications: Notifications::with_timeout(config.notifications.timeout()),
            menu: layout.nav_toggle.then(MobileMenu::new),
            contact,
            estimator,
            newsletter: layout.newsletter.then(NewsletterForm::new),
            faq: (layout.faq_items > 0).then(|| Accordion::new(layout.faq_items)),
            support,
            portfolio: PortfolioFilter::new(layout.portfolio_filters, layout.portfolio_items),
            lightbox,
            reveal: ScrollReveal::new(layout.reveal_targets),
        };
        page.body = BodyState::Loaded;
        tracing::debug!(
            contact = page.contact.is_some(),
            portfolio = page.portfolio.is_some(),
            support = page.support.is_some(),
            "page ready"
        );
        page
    }

    /// Let virtual time pass on every controller. Returns due navigations.
    pub fn advance(&mut self, by: Duration) -> Vec<Navigation> {
        let mut navigations = Vec::new();
        if let Some(contact) = self.contact.as_mut() {
            navigations.extend(contact.advance(by));
        }
        if let Some(estimator) = self.estimator.as_mut() {
            estimator.advance(by);
        }
        if let Some(portfolio) = self.portfolio.as_mut() {
            portfolio.advance(by);
        }
        if let Some(newsletter) = self.newsletter.as_mut() {
            newsletter.advance(by, &mut self.notifications);
        }
        self.notifications.advance(by);
        navigations
    }

    /// Whether any open overlay or menu holds the body scroll lock.
    pub fn scroll_locked(&self) -> bool {
        self.menu.as_ref().is_some_and(MobileMenu::scroll_locked)
            || self.support.as_ref().is_some_and(SupportModal::scroll_locked)
            || self.lightbox.as_ref().is_some_and(LightboxHost::scroll_locked)
    }
}
