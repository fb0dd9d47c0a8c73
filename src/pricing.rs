//! Portrait price estimation.
//!
//! A quote is derived from two selections on the contact form, the portrait
//! size and the number of people, through two static tables. The estimator
//! then rewrites the budget select so its first option is the computed range,
//! and shows a short-lived notice with the same range.
//!
//! | Size | Base price |   | People | Multiplier |
//! |------|-----------:|---|--------|-----------:|
//! | a4   |      2 800 |   | 1      | 1.0 |
//! | a3   |      4 500 |   | 2      | 1.5 |
//! | a2   |      6 500 |   | 3      | 2.0 |
//! | a1   |     15 000 |   | 4      | 2.5 |
//! | a0   |     25 000 |   | 5+     | 3.0 |
//!
//! The range is ±10% around `round(base × multiplier)`.

use crate::timers::{TimerId, Timers};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind} \"{value}\"")]
pub struct ParseError {
    kind: &'static str,
    value: String,
}

impl ParseError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Paper size of the commissioned portrait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Size {
    A4,
    A3,
    A2,
    A1,
    A0,
}

impl Size {
    pub fn base_price(self) -> u32 {
        match self {
            Size::A4 => 2800,
            Size::A3 => 4500,
            Size::A2 => 6500,
            Size::A1 => 15000,
            Size::A0 => 25000,
        }
    }
}

impl FromStr for Size {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "a4" => Ok(Size::A4),
            "a3" => Ok(Size::A3),
            "a2" => Ok(Size::A2),
            "a1" => Ok(Size::A1),
            "a0" => Ok(Size::A0),
            other => Err(ParseError::new("size", other)),
        }
    }
}

/// Number of people in the portrait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum People {
    One,
    Two,
    Three,
    Four,
    FiveOrMore,
}

impl People {
    pub fn multiplier(self) -> f64 {
        match self {
            People::One => 1.0,
            People::Two => 1.5,
            People::Three => 2.0,
            People::Four => 2.5,
            People::FiveOrMore => 3.0,
        }
    }
}

impl FromStr for People {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(People::One),
            "2" => Ok(People::Two),
            "3" => Ok(People::Three),
            "4" => Ok(People::Four),
            "5+" => Ok(People::FiveOrMore),
            other => Err(ParseError::new("people count", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceQuote {
    pub base_price: u32,
    pub people_multiplier: f64,
    pub estimated: u32,
    pub min_price: u32,
    pub max_price: u32,
}

/// Estimate a price range from raw select values.
///
/// An absent or unknown size yields no quote. An absent or unknown people
/// count falls back to a multiplier of 1.
pub fn estimate(size: Option<&str>, people: Option<&str>) -> Option<PriceQuote> {
    let base_price = size?.parse::<Size>().ok()?.base_price();
    let people_multiplier = people
        .and_then(|p| p.parse::<People>().ok())
        .map_or(1.0, People::multiplier);

    let estimated = round(f64::from(base_price) * people_multiplier);
    Some(PriceQuote {
        base_price,
        people_multiplier,
        estimated,
        min_price: round(f64::from(estimated) * 0.9),
        max_price: round(f64::from(estimated) * 1.1),
    })
}

// Amounts are non-negative, where half-away-from-zero equals `Math.round`.
fn round(value: f64) -> u32 {
    value.round() as u32
}

/// Group thousands with commas: `25000` → `"25,000"`.
pub fn format_amount(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `"KSH 6,075 - 7,425"`
pub fn format_range(currency: &str, min: u32, max: u32) -> String {
    format!("{currency} {} - {}", format_amount(min), format_amount(max))
}

/// An `<option>` of the budget select.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetOption {
    pub value: String,
    pub label: String,
}

impl fmt::Display for BudgetOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label, self.value)
    }
}

const PRESETS: [(u32, u32, &str); 5] = [
    (1000, 2800, "A4"),
    (4500, 6000, "A3"),
    (6000, 7000, "A2"),
    (10000, 20000, "A1"),
    (20000, 30000, "A0"),
];

/// The budget options shown after an estimate: the computed range first,
/// then the fixed presets, then the custom option.
pub fn budget_options(quote: &PriceQuote, currency: &str) -> Vec<BudgetOption> {
    let mut options = Vec::with_capacity(PRESETS.len() + 2);
    options.push(BudgetOption {
        value: format!("{}-{}", quote.min_price, quote.max_price),
        label: format!(
            "Estimated: {}",
            format_range(currency, quote.min_price, quote.max_price)
        ),
    });
    for (min, max, size) in PRESETS {
        options.push(BudgetOption {
            value: format!("{min}-{max}"),
            label: format!("{} ({size} Size)", format_range(currency, min, max)),
        });
    }
    options.push(BudgetOption {
        value: "custom".to_string(),
        label: "Custom project (Let's discuss)".to_string(),
    });
    options
}

/// The transient notice under the budget select. At most one exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceNotice {
    pub text: String,
    timer: TimerId,
}

/// Live estimator bound to the service, people, size and budget selects.
#[derive(Debug)]
pub struct PriceEstimator {
    currency: String,
    service: Option<String>,
    people: Option<String>,
    size: Option<String>,
    /// `None` when the page has no budget select.
    budget: Option<Vec<BudgetOption>>,
    notice: Option<PriceNotice>,
    notice_timeout: Duration,
    timers: Timers<()>,
}

impl PriceEstimator {
    /// `budget` holds the select's initial options, or `None` if it is absent.
    pub fn new(currency: impl Into<String>, budget: Option<Vec<BudgetOption>>) -> Self {
        Self {
            currency: currency.into(),
            service: None,
            people: None,
            size: None,
            budget,
            notice: None,
            notice_timeout: crate::notify::DEFAULT_TIMEOUT,
            timers: Timers::new(),
        }
    }

    pub fn with_notice_timeout(mut self, timeout: Duration) -> Self {
        self.notice_timeout = timeout;
        self
    }

    pub fn set_service(&mut self, value: &str) -> Option<PriceQuote> {
        self.service = non_empty(value);
        self.update()
    }

    pub fn set_people(&mut self, value: &str) -> Option<PriceQuote> {
        self.people = non_empty(value);
        self.update()
    }

    pub fn set_size(&mut self, value: &str) -> Option<PriceQuote> {
        self.size = non_empty(value);
        self.update()
    }

    /// Recompute after any selection change.
    ///
    /// Nothing happens until a service is chosen, or if there is no budget
    /// select to write into.
    pub fn update(&mut self) -> Option<PriceQuote> {
        self.service.as_ref()?;
        self.budget.as_ref()?;
        let quote = estimate(self.size.as_deref(), self.people.as_deref())?;

        self.budget = Some(budget_options(&quote, &self.currency));
        self.show_notice(&quote);
        tracing::debug!(
            min = quote.min_price,
            max = quote.max_price,
            "price estimate updated"
        );
        Some(quote)
    }

    fn show_notice(&mut self, quote: &PriceQuote) {
        if let Some(old) = self.notice.take() {
            self.timers.cancel(old.timer);
        }
        let timer = self.timers.schedule(self.notice_timeout, ());
        self.notice = Some(PriceNotice {
            text: format!(
                "Estimated price: {}",
                format_range(&self.currency, quote.min_price, quote.max_price)
            ),
            timer,
        });
    }

    pub fn budget_options(&self) -> Option<&[BudgetOption]> {
        self.budget.as_deref()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_ref().map(|n| n.text.as_str())
    }

    pub fn advance(&mut self, by: Duration) {
        if !self.timers.advance(by).is_empty() {
            self.notice = None;
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}
