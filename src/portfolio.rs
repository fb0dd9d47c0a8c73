//! Portfolio category filtering.
//!
//! Each portfolio item carries one category. Selecting a filter shows the
//! items of that category (or all of them for `all`) with a short fade/scale
//! transition:
//!
//! ```text
//! show:  display block, opacity 0, scale 0.8  ──100ms──▶  opacity 1, scale 1
//! hide:  opacity 0, scale 0.8                 ──300ms──▶  display none
//! ```
//!
//! A new selection cancels whatever transition an item still had pending, so a
//! quick re-selection never hides an item that should be visible.

use crate::timers::{TimerId, Timers};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// The catch-all filter value.
pub const ALL: &str = "all";

pub const REVEAL_DELAY: Duration = Duration::from_millis(100);
pub const HIDE_DELAY: Duration = Duration::from_millis(300);
/// Pause between scrolling to the portfolio and activating a category card's filter.
pub const CATEGORY_CARD_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemImage {
    pub src: String,
    #[serde(default)]
    pub alt: String,
}

/// Inline style the filter drives on an item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemStyle {
    pub displayed: bool,
    pub opacity: f32,
    pub scale: f32,
}

impl ItemStyle {
    const SHOWN: Self = Self {
        displayed: true,
        opacity: 1.0,
        scale: 1.0,
    };
    const FADED: Self = Self {
        displayed: true,
        opacity: 0.0,
        scale: 0.8,
    };
}

impl Default for ItemStyle {
    fn default() -> Self {
        Self::SHOWN
    }
}

/// A pre-rendered `.portfolio-item`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioItem {
    pub category: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<ItemImage>,
    #[serde(skip)]
    pub style: ItemStyle,
}

impl PortfolioItem {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            title: None,
            description: None,
            image: None,
            style: ItemStyle::default(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_image(mut self, src: impl Into<String>, alt: impl Into<String>) -> Self {
        self.image = Some(ItemImage {
            src: src.into(),
            alt: alt.into(),
        });
        self
    }

    pub fn matches(&self, filter: &str) -> bool {
        filter == ALL || self.category == filter
    }
}

#[derive(Debug, Clone)]
enum Transition {
    Reveal(usize),
    Conceal(usize),
    Activate(String),
}

/// Filter buttons plus the items they control.
#[derive(Debug)]
pub struct PortfolioFilter {
    filters: Vec<String>,
    active: String,
    items: Vec<PortfolioItem>,
    pending: Vec<Option<TimerId>>,
    timers: Timers<Transition>,
}

impl PortfolioFilter {
    /// Returns `None` when the page has no filter buttons or no items.
    pub fn new(filters: Vec<String>, items: Vec<PortfolioItem>) -> Option<Self> {
        if filters.is_empty() || items.is_empty() {
            return None;
        }
        let pending = vec![None; items.len()];
        Some(Self {
            filters,
            active: ALL.to_string(),
            items,
            pending,
            timers: Timers::new(),
        })
    }

    /// Click on the filter button for `category`.
    pub fn select(&mut self, category: &str) {
        tracing::debug!(category, "portfolio filter selected");
        self.active = category.to_string();

        for (index, item) in self.items.iter_mut().enumerate() {
            if let Some(timer) = self.pending[index].take() {
                self.timers.cancel(timer);
            }
            item.style = ItemStyle {
                displayed: item.style.displayed || item.matches(category),
                ..ItemStyle::FADED
            };
            let transition = if item.matches(category) {
                self.timers.schedule(REVEAL_DELAY, Transition::Reveal(index))
            } else {
                self.timers.schedule(HIDE_DELAY, Transition::Conceal(index))
            };
            self.pending[index] = Some(transition);
        }
    }

    /// Click on a category card: scroll to the portfolio, then activate the
    /// matching filter once the scroll has had time to settle.
    ///
    /// Returns `false` (and does nothing) if no filter button has that category.
    pub fn category_card_clicked(&mut self, category: &str) -> bool {
        if !self.filters.iter().any(|f| f == category) {
            return false;
        }
        self.timers
            .schedule(CATEGORY_CARD_DELAY, Transition::Activate(category.to_string()));
        true
    }

    /// Let virtual time pass, applying every due transition.
    pub fn advance(&mut self, by: Duration) {
        for transition in self.timers.advance(by) {
            match transition {
                Transition::Reveal(index) => {
                    self.pending[index] = None;
                    self.items[index].style = ItemStyle::SHOWN;
                }
                Transition::Conceal(index) => {
                    self.pending[index] = None;
                    self.items[index].style.displayed = false;
                }
                Transition::Activate(category) => self.select(&category),
            }
        }
    }

    /// The filter button currently marked active.
    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn filters(&self) -> &[String] {
        &self.filters
    }

    pub fn items(&self) -> &[PortfolioItem] {
        &self.items
    }

    /// Items whose `display` is not `none`.
    pub fn displayed(&self) -> impl Iterator<Item = &PortfolioItem> {
        self.items.iter().filter(|i| i.style.displayed)
    }
}

/// Target of a home-page preview card.
pub fn preview_link(category: Option<&str>) -> String {
    match category {
        Some(c) if !c.is_empty() => format!("pages/portfolio.html#{c}"),
        _ => "pages/portfolio.html".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::artwork;

    fn gallery() -> PortfolioFilter {
        PortfolioFilter::new(
            vec![ALL.into(), "painting".into(), "sculpture".into()],
            vec![
                artwork("Dawn", "painting"),
                artwork("Bust", "sculpture"),
                artwork("Dusk", "painting"),
                artwork("Torso", "sculpture"),
            ],
        )
        .unwrap()
    }

    fn displayed_titles(filter: &PortfolioFilter) -> Vec<&str> {
        filter
            .displayed()
            .filter_map(|i| i.title.as_deref())
            .collect()
    }

    #[test]
    fn inactive_without_buttons_or_items() {
        assert!(PortfolioFilter::new(vec![], vec![artwork("A", "painting")]).is_none());
        assert!(PortfolioFilter::new(vec![ALL.into()], vec![]).is_none());
    }

    #[test]
    fn sculpture_shows_only_sculptures() {
        let mut filter = gallery();
        filter.select("sculpture");
        filter.advance(HIDE_DELAY);
        assert_eq!(filter.active(), "sculpture");
        assert_eq!(displayed_titles(&filter), vec!["Bust", "Torso"]);
        for item in filter.displayed() {
            assert_eq!(item.style, ItemStyle::SHOWN);
        }
    }

    #[test]
    fn all_shows_everything() {
        let mut filter = gallery();
        filter.select("sculpture");
        filter.advance(HIDE_DELAY);
        filter.select(ALL);
        filter.advance(HIDE_DELAY);
        assert_eq!(displayed_titles(&filter), vec!["Dawn", "Bust", "Dusk", "Torso"]);
    }

    #[test]
    fn transition_timing() {
        let mut filter = gallery();
        filter.select("painting");

        // Immediately: everything faded, nothing hidden yet.
        assert!(filter.items().iter().all(|i| i.style.opacity == 0.0));
        assert_eq!(filter.displayed().count(), 4);

        filter.advance(REVEAL_DELAY);
        assert_eq!(filter.items()[0].style, ItemStyle::SHOWN);
        assert!(filter.items()[1].style.displayed);

        filter.advance(HIDE_DELAY - REVEAL_DELAY);
        assert!(!filter.items()[1].style.displayed);
    }

    #[test]
    fn quick_reselection_does_not_hide_visible_items() {
        let mut filter = gallery();
        filter.select("painting");
        filter.advance(Duration::from_millis(50));
        filter.select(ALL);
        filter.advance(Duration::from_secs(1));
        assert_eq!(filter.displayed().count(), 4);
    }

    #[test]
    fn hidden_item_stays_hidden_until_revealed() {
        let mut filter = gallery();
        filter.select("painting");
        filter.advance(HIDE_DELAY);
        filter.select("painting");
        // Sculptures fade again but were never displayed.
        assert!(!filter.items()[1].style.displayed);
    }

    #[test]
    fn category_card_activates_filter_after_delay() {
        let mut filter = gallery();
        assert!(filter.category_card_clicked("sculpture"));
        filter.advance(Duration::from_millis(499));
        assert_eq!(filter.active(), ALL);
        filter.advance(Duration::from_millis(1));
        assert_eq!(filter.active(), "sculpture");
        filter.advance(HIDE_DELAY);
        assert_eq!(displayed_titles(&filter), vec!["Bust", "Torso"]);
    }

    #[test]
    fn unknown_category_card_is_ignored() {
        let mut filter = gallery();
        assert!(!filter.category_card_clicked("pottery"));
        filter.advance(Duration::from_secs(1));
        assert_eq!(filter.active(), ALL);
    }

    #[test]
    fn preview_links() {
        assert_eq!(preview_link(Some("painting")), "pages/portfolio.html#painting");
        assert_eq!(preview_link(None), "pages/portfolio.html");
        assert_eq!(preview_link(Some("")), "pages/portfolio.html");
    }
}
