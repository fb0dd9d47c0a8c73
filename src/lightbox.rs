//! Enlarged view of a portfolio item.

use crate::portfolio::PortfolioItem;
use crate::types::{ESCAPE, OverlayClick};

const DEFAULT_TITLE: &str = "Portfolio Item";

/// Content of an open lightbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lightbox {
    pub image_src: String,
    pub image_alt: String,
    pub title: String,
    pub description: String,
    /// Target of the "Commission Similar" link.
    pub commission_href: String,
}

impl Lightbox {
    /// Build the lightbox for `item`. Items without an image have none.
    pub fn from_item(item: &PortfolioItem, commission_href: &str) -> Option<Self> {
        let image = item.image.as_ref()?;
        Some(Self {
            image_src: image.src.clone(),
            image_alt: image.alt.clone(),
            title: item
                .title
                .clone()
                .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            description: item.description.clone().unwrap_or_default(),
            commission_href: commission_href.to_string(),
        })
    }
}

/// Owns the single lightbox overlay on a page.
///
/// The body scroll is locked exactly while a lightbox is open.
#[derive(Debug, Clone)]
pub struct LightboxHost {
    commission_href: String,
    current: Option<Lightbox>,
}

impl LightboxHost {
    pub fn new(commission_href: impl Into<String>) -> Self {
        Self {
            commission_href: commission_href.into(),
            current: None,
        }
    }

    /// Click on a portfolio item. Returns whether a lightbox opened.
    pub fn open(&mut self, item: &PortfolioItem) -> bool {
        let Some(lightbox) = Lightbox::from_item(item, &self.commission_href) else {
            tracing::debug!(category = %item.category, "portfolio item has no image");
            return false;
        };
        self.current = Some(lightbox);
        true
    }

    pub fn close(&mut self) {
        self.current = None;
    }

    pub fn on_click(&mut self, target: OverlayClick) {
        if matches!(target, OverlayClick::Backdrop | OverlayClick::CloseButton) {
            self.close();
        }
    }

    pub fn on_key(&mut self, key: &str) {
        if key == ESCAPE {
            self.close();
        }
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    pub fn scroll_locked(&self) -> bool {
        self.is_open()
    }

    pub fn current(&self) -> Option<&Lightbox> {
        self.current.as_ref()
    }
}
