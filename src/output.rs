//! CLI output formatting for every subcommand.
//!
//! # Output Format
//!
//! ## Estimate
//!
//! ```text
//! Estimate a3, 2 people
//!     Base price: KSH 4,500
//!     Multiplier: x1.5
//!     Estimated: KSH 6,750
//!     Range: KSH 6,075 - 7,425
//!
//! Budget options
//! 001 Estimated: KSH 6,075 - 7,425 (6075-7425)
//! 002 KSH 1,000 - 2,800 (A4 Size) (1000-2800)
//! ...
//! ```
//!
//! ## Check files
//!
//! ```text
//! Accepted 2 files
//! 001 dawn.jpg (1.5 KB)
//! 002 dusk.png (2 MB)
//! ```
//!
//! ## Submit
//!
//! ```text
//! Submitted to https://formspree.io/f/abc
//! Redirect → thank-you.html
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure.

use crate::contact::SubmitOutcome;
use crate::pricing::{BudgetOption, PriceQuote, format_amount, format_range};
use crate::types::Navigation;
use crate::upload::PreviewRow;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{}", line);
    }
}

// ============================================================================
// Estimate
// ============================================================================

/// Format a quote followed by the budget options it produces.
pub fn format_estimate(
    size: &str,
    people: Option<&str>,
    quote: &PriceQuote,
    currency: &str,
    options: &[BudgetOption],
) -> Vec<String> {
    let people_label = match people {
        Some("1") => "1 person".to_string(),
        Some(p) => format!("{p} people"),
        None => "1 person".to_string(),
    };
    let mut lines = vec![
        format!("Estimate {size}, {people_label}"),
        format!("    Base price: {currency} {}", format_amount(quote.base_price)),
        format!("    Multiplier: x{}", quote.people_multiplier),
        format!("    Estimated: {currency} {}", format_amount(quote.estimated)),
        format!(
            "    Range: {}",
            format_range(currency, quote.min_price, quote.max_price)
        ),
    ];
    if !options.is_empty() {
        lines.push(String::new());
        lines.push("Budget options".to_string());
        for (i, option) in options.iter().enumerate() {
            lines.push(format!("{} {}", format_index(i + 1), option));
        }
    }
    lines
}

/// Machine-readable form of [`format_estimate`].
pub fn estimate_json(
    quote: &PriceQuote,
    currency: &str,
    options: &[BudgetOption],
) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&serde_json::json!({
        "currency": currency,
        "quote": quote,
        "budget_options": options,
    }))
}

pub fn print_estimate(
    size: &str,
    people: Option<&str>,
    quote: &PriceQuote,
    currency: &str,
    options: &[BudgetOption],
) {
    print_lines(format_estimate(size, people, quote, currency, options));
}

// ============================================================================
// Checks
// ============================================================================

pub fn format_email_check(address: &str, valid: bool) -> Vec<String> {
    let verdict = if valid { "valid" } else { "invalid" };
    vec![format!("{address}: {verdict}")]
}

pub fn print_email_check(address: &str, valid: bool) {
    print_lines(format_email_check(address, valid));
}

/// Format the preview list of an accepted selection.
pub fn format_file_preview(rows: &[PreviewRow]) -> Vec<String> {
    let noun = if rows.len() == 1 { "file" } else { "files" };
    let mut lines = vec![format!("Accepted {} {}", rows.len(), noun)];
    for row in rows {
        lines.push(format!(
            "{} {} ({})",
            format_index(row.index + 1),
            row.filename,
            row.size_label
        ));
    }
    lines
}

pub fn print_file_preview(rows: &[PreviewRow]) {
    print_lines(format_file_preview(rows));
}

// ============================================================================
// Submit
// ============================================================================

/// Format the end of a submission and any navigation it triggered.
pub fn format_submit(
    endpoint: &str,
    outcome: SubmitOutcome,
    navigations: &[Navigation],
) -> Vec<String> {
    let mut lines = vec![match outcome {
        SubmitOutcome::Sent => format!("Submitted to {endpoint}"),
        SubmitOutcome::Failed => format!("Submission to {endpoint} failed"),
        SubmitOutcome::Invalid => "Submission not sent: form is invalid".to_string(),
        SubmitOutcome::Busy => "Submission not sent: already in progress".to_string(),
    }];
    for navigation in navigations {
        lines.push(match navigation {
            Navigation::Redirect(url) => format!("Redirect \u{2192} {url}"),
            Navigation::OpenExternal(url) => format!("Open \u{2192} {url}"),
        });
    }
    lines
}

pub fn print_submit(endpoint: &str, outcome: SubmitOutcome, navigations: &[Navigation]) {
    print_lines(format_submit(endpoint, outcome, navigations));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::{budget_options, estimate};

    #[test]
    fn format_index_pads() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
    }

    #[test]
    fn estimate_output() {
        let quote = estimate(Some("a3"), Some("2")).unwrap();
        let options = budget_options(&quote, "KSH");
        let lines = format_estimate("a3", Some("2"), &quote, "KSH", &options);
        assert_eq!(lines[0], "Estimate a3, 2 people");
        assert_eq!(lines[1], "    Base price: KSH 4,500");
        assert_eq!(lines[2], "    Multiplier: x1.5");
        assert_eq!(lines[4], "    Range: KSH 6,075 - 7,425");
        assert_eq!(lines[6], "Budget options");
        assert_eq!(lines[7], "001 Estimated: KSH 6,075 - 7,425 (6075-7425)");
        assert_eq!(lines.len(), 14);
    }

    #[test]
    fn estimate_without_options_has_no_budget_section() {
        let quote = estimate(Some("a4"), None).unwrap();
        let lines = format_estimate("a4", None, &quote, "KSH", &[]);
        assert_eq!(lines[0], "Estimate a4, 1 person");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn estimate_json_carries_quote_and_options() {
        let quote = estimate(Some("a3"), Some("2")).unwrap();
        let options = budget_options(&quote, "KSH");
        let json = estimate_json(&quote, "KSH", &options).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["quote"]["min_price"], 6075);
        assert_eq!(value["budget_options"][0]["value"], "6075-7425");
        assert_eq!(value["budget_options"].as_array().unwrap().len(), 7);
    }

    #[test]
    fn email_check_verdicts() {
        assert_eq!(format_email_check("a@b.co", true), vec!["a@b.co: valid"]);
        assert_eq!(format_email_check("nope", false), vec!["nope: invalid"]);
    }

    #[test]
    fn file_preview_output() {
        let rows = vec![PreviewRow {
            index: 0,
            filename: "dawn.jpg".into(),
            size_label: "1.5 KB".into(),
        }];
        assert_eq!(
            format_file_preview(&rows),
            vec!["Accepted 1 file", "001 dawn.jpg (1.5 KB)"]
        );
    }

    #[test]
    fn submit_output_lists_redirect() {
        let lines = format_submit(
            "https://relay.test/f",
            SubmitOutcome::Sent,
            &[Navigation::Redirect("thank-you.html".into())],
        );
        assert_eq!(
            lines,
            vec!["Submitted to https://relay.test/f", "Redirect \u{2192} thank-you.html"]
        );
    }

    #[test]
    fn failed_submit_output() {
        let lines = format_submit("https://relay.test/f", SubmitOutcome::Failed, &[]);
        assert_eq!(lines, vec!["Submission to https://relay.test/f failed"]);
    }
}
