//! HTML fragments for the dynamic parts of the site.
//!
//! The static pages are authored by hand. The pieces the controllers change
//! at runtime are rendered here from controller state:
//!
//! - **Notifications**: one `div.notification` per visible message
//! - **File preview**: the list under the reference-photo input
//! - **Budget options**: the `<option>` list of the budget select
//! - **Price notice**: the transient estimate under the budget select
//! - **Payment details**: instructions for the selected donation method
//! - **Lightbox**: the enlarged portfolio item overlay
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating, so
//! every interpolated value is escaped.

use crate::lightbox::Lightbox;
use crate::nav::MenuIcon;
use crate::notify::{Notification, Severity};
use crate::pricing::BudgetOption;
use crate::support::PaymentDetails;
use crate::upload::PreviewRow;
use maud::{Markup, html};

fn severity_icon(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "fa-check-circle",
        Severity::Error => "fa-exclamation-circle",
        Severity::Info => "fa-info-circle",
    }
}

/// A single notification with its close button.
pub fn render_notification(notification: &Notification) -> Markup {
    let severity = notification.severity.as_str();
    html! {
        div class={ "notification notification--" (severity) } role="alert" {
            div.notification__content {
                i class={ "fas " (severity_icon(notification.severity)) } {}
                span.notification__message { (notification.text) }
            }
            button.notification__close type="button" aria-label="Close notification" {
                i.fas.fa-times {}
            }
        }
    }
}

/// Every visible notification, oldest first.
pub fn render_notifications(notifications: &[&Notification]) -> Markup {
    html! {
        div.notifications {
            @for notification in notifications {
                (render_notification(notification))
            }
        }
    }
}

pub fn render_file_preview(rows: &[PreviewRow]) -> Markup {
    html! {
        div.file-preview {
            @for row in rows {
                div.file-item data-index=(row.index) {
                    i.fas.fa-image {}
                    span { (row.filename) }
                    span.file-size { "(" (row.size_label) ")" }
                    button.remove-file type="button" data-index=(row.index) {
                        i.fas.fa-times {}
                    }
                }
            }
        }
    }
}

/// Options of the budget select; the first one is preselected.
pub fn render_budget_options(options: &[BudgetOption]) -> Markup {
    html! {
        @for (i, option) in options.iter().enumerate() {
            option value=(option.value) selected[i == 0] { (option.label) }
        }
    }
}

pub fn render_price_notice(text: &str) -> Markup {
    html! {
        div.price-notice {
            i.fas.fa-calculator {}
            " "
            (text)
        }
    }
}

pub fn render_payment_details(details: &PaymentDetails) -> Markup {
    match details {
        PaymentDetails::Mpesa {
            business_number,
            account,
        } => html! {
            div.payment-details.payment-details--mpesa {
                h4 { "M-Pesa Donation" }
                p { strong { "Follow these steps:" } }
                ol {
                    li { "Go to " strong { "M-Pesa" } " on your phone" }
                    li { "Select " strong { "\"Lipa Na M-Pesa\"" } }
                    li { "Select " strong { "\"Pay Bill\"" } }
                    li { "Business No: " strong { (business_number) } }
                    li { "Account No: " strong { (account) } }
                    li { "Enter amount & PIN" }
                    li { "Confirm payment" }
                }
                button.btn.btn--primary type="button" data-action="confirm-mpesa" {
                    i.fas.fa-check {}
                    " I'll Complete on My Phone"
                }
                p { "You'll receive an M-Pesa confirmation immediately" }
            }
        },
        PaymentDetails::Paypal { email, url } => html! {
            div.payment-details.payment-details--paypal {
                h4 { "PayPal Donation" }
                p { strong { "PayPal Email:" } " " (email) }
                p { "Or click below to be redirected" }
                a.btn href=(url) target="_blank" rel="noopener" data-action="paypal-redirect" {
                    i.fab.fa-paypal {}
                    " Continue to PayPal"
                }
                p { "Secure payment processed by PayPal" }
            }
        },
    }
}

pub fn render_lightbox(lightbox: &Lightbox) -> Markup {
    html! {
        div.lightbox role="dialog" aria-modal="true" {
            div.lightbox__content {
                button.lightbox__close type="button" aria-label="Close" {
                    i.fas.fa-times {}
                }
                img.lightbox__image src=(lightbox.image_src) alt=(lightbox.image_alt);
                div.lightbox__info {
                    h3.lightbox__title { (lightbox.title) }
                    p.lightbox__description { (lightbox.description) }
                    a.btn.btn--primary href=(lightbox.commission_href) { "Commission Similar" }
                }
            }
        }
    }
}

/// The mobile menu toggle's icon.
pub fn render_menu_icon(icon: MenuIcon) -> Markup {
    html! { i class={ "fas " (icon.class()) } {} }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SupportConfig;
    use crate::lightbox::LightboxHost;
    use crate::notify::{Notifications, Notifier};
    use crate::pricing::{budget_options, estimate};
    use crate::support::{PaymentMethod, SupportModal};
    use crate::test_helpers::artwork;

    #[test]
    fn notification_carries_severity_class() {
        let mut notes = Notifications::new();
        notes.notify("Saved", Severity::Success);
        let html = render_notification(notes.latest().unwrap()).into_string();
        assert!(html.contains("notification notification--success"));
        assert!(html.contains("notification__close"));
        assert!(html.contains("<span class=\"notification__message\">Saved</span>"));
    }

    #[test]
    fn notification_text_is_escaped() {
        let mut notes = Notifications::new();
        notes.notify("<script>alert(1)</script>", Severity::Error);
        let html = render_notifications(&notes.visible()).into_string();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn file_preview_lists_rows() {
        let rows = vec![
            PreviewRow {
                index: 0,
                filename: "a.jpg".into(),
                size_label: "1.5 KB".into(),
            },
            PreviewRow {
                index: 1,
                filename: "b.png".into(),
                size_label: "2 MB".into(),
            },
        ];
        let html = render_file_preview(&rows).into_string();
        assert_eq!(html.matches("class=\"file-item\"").count(), 2);
        assert!(html.contains("<span class=\"file-size\">(1.5 KB)</span>"));
        assert_eq!(html.matches("class=\"remove-file\"").count(), 2);
        assert!(html.contains("data-index=\"1\""));
    }

    #[test]
    fn first_budget_option_is_selected() {
        let quote = estimate(Some("a3"), Some("2")).unwrap();
        let html = render_budget_options(&budget_options(&quote, "KSH")).into_string();
        assert!(html.starts_with("<option value=\"6075-7425\" selected>"));
        assert_eq!(html.matches("selected").count(), 1);
        assert!(html.contains("value=\"custom\""));
    }

    #[test]
    fn mpesa_details_show_numbers() {
        let mut modal = SupportModal::new(SupportConfig::default(), vec![PaymentMethod::Mpesa]);
        modal.open(Some(PaymentMethod::Mpesa));
        let html = render_payment_details(&modal.details().unwrap()).into_string();
        assert!(html.contains("000000"));
        assert!(html.contains("LEVIART"));
        assert!(html.contains("Business No: <strong>000000</strong>"));
        assert!(html.contains("Enter amount &amp; PIN"));
        assert!(html.contains("I'll Complete on My Phone"));
    }

    #[test]
    fn paypal_details_link_out() {
        let details = PaymentDetails::Paypal {
            email: "artist@example.com".into(),
            url: "https://paypal.me/artist".into(),
        };
        let html = render_payment_details(&details).into_string();
        assert!(html.contains("href=\"https://paypal.me/artist\""));
        assert!(html.contains("target=\"_blank\""));
        assert!(html.contains("<strong>PayPal Email:</strong> artist@example.com"));
    }

    #[test]
    fn lightbox_markup() {
        let mut host = LightboxHost::new("contact.html");
        host.open(&artwork("Dawn", "painting"));
        let html = render_lightbox(host.current().unwrap()).into_string();
        assert!(html.contains("src=\"images/Dawn.jpg\""));
        assert!(html.contains("Commission Similar"));
        assert!(html.contains("href=\"contact.html\""));
    }

    #[test]
    fn menu_icon_class() {
        assert_eq!(
            render_menu_icon(MenuIcon::Times).into_string(),
            "<i class=\"fas fa-times\"></i>"
        );
    }

    #[test]
    fn price_notice_contains_text() {
        let html = render_price_notice("Estimated price: KSH 4,050 - 4,950").into_string();
        assert!(html.contains("<div class=\"price-notice\">"));
        assert!(html.contains("KSH 4,050 - 4,950"));
    }
}
