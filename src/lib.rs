//! # Leviart
//!
//! The behaviour layer of a static portfolio site for an artist's commission
//! business. The pages themselves are hand-written HTML; this crate holds the
//! logic behind the parts that react to the visitor: the contact form and its
//! price estimator, reference-photo uploads, the portfolio filter and
//! lightbox, the donation modal, the FAQ accordion and the header menu.
//!
//! # Architecture: Controllers Over Explicit Inputs
//!
//! Every behaviour is a plain state object with transition methods. A
//! controller never looks anything up in a document: the host hands it the
//! items and selections it works on and receives back what it should do
//! (notify, navigate, scroll).
//!
//! ```text
//! host event  →  controller method  →  state change
//!                                   ├─ Notifier::notify(text, severity)
//!                                   └─ Navigation / ScrollTo values
//! ```
//!
//! Delays (notification dismissal, filter transitions, the post-submit
//! redirect) run on [`timers::Timers`], a virtual clock the host advances.
//! Tests drive time explicitly and never sleep.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`timers`] | Virtual-time scheduler with cancellable one-shot timers |
//! | [`notify`] | Dismissible notifications and the `Notifier` seam |
//! | [`validate`] | Email and contact form validation rules |
//! | [`pricing`] | Price quote tables, budget options and the live estimator |
//! | [`upload`] | Reference-photo selection limits and preview rows |
//! | [`contact`] | Contact form state machine and the multipart HTTP relay |
//! | [`nav`] | Mobile menu, anchor scrolling, header marking, greeting |
//! | [`newsletter`] | Footer newsletter sign-up |
//! | [`faq`] | Single-open FAQ accordion |
//! | [`support`] | Donation modal with M-Pesa and PayPal instructions |
//! | [`portfolio`] | Category filter with fade transitions, preview links |
//! | [`lightbox`] | Enlarged portfolio item overlay |
//! | [`reveal`] | One-shot fade-in of sections as they scroll into view |
//! | [`render`] | Maud fragments for the dynamic markup |
//! | [`page`] | Builds the controllers a page's elements call for |
//! | [`config`] | `config.toml` loading, merging and validation |
//! | [`types`] | Values shared between controllers and the host |
//! | [`logging`] | `tracing` subscriber setup for the CLI |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Virtual Time
//!
//! The site's timing rules (a notice disappears after five seconds, a hidden
//! portfolio item leaves the layout after its fade) are behaviour, so they are
//! tested like behaviour. Each controller owns its timers; a new selection in
//! the portfolio filter or a new price notice cancels the timer it replaces.
//!
//! ## Maud For Dynamic Markup
//!
//! Fragments that were once built by string concatenation are rendered with
//! [Maud](https://maud.lambda.xyz/). Visitor-supplied text (file names,
//! notification text) is escaped on interpolation.
//!
//! ## One Relay Attempt
//!
//! A contact submission is posted exactly once. A failure leaves the form
//! filled in and tells the visitor; retrying is their call.

pub mod config;
pub mod contact;
pub mod faq;
pub mod lightbox;
pub mod logging;
pub mod nav;
pub mod newsletter;
pub mod notify;
pub mod output;
pub mod page;
pub mod portfolio;
pub mod pricing;
pub mod render;
pub mod reveal;
pub mod support;
pub mod timers;
pub mod types;
pub mod upload;
pub mod validate;

#[cfg(test)]
pub(crate) mod test_helpers;
