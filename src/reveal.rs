//! Reveal-on-scroll for section headers, cards and call-to-action blocks.
//!
//! Every observed element starts hidden (transparent, shifted 30 px down).
//! The first time enough of it enters the viewport it moves to its resting
//! style and is no longer observed, so scrolling back never hides it again.

/// Selectors of the elements the site observes.
pub const REVEAL_SELECTORS: [&str; 9] = [
    ".section__header",
    ".portfolio-card",
    ".service-card",
    ".blog-card",
    ".about-preview__text",
    ".about-preview__image",
    ".support__text",
    ".support__image",
    ".cta__content",
];

/// Share of an element that must be visible before it reveals.
pub const THRESHOLD: f64 = 0.1;

/// The viewport's bottom edge is pulled up by this much when testing visibility.
pub const BOTTOM_MARGIN: f64 = 50.0;

pub const TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";

/// Inline style an observed element carries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealStyle {
    pub opacity: f32,
    pub translate_y: f32,
}

impl RevealStyle {
    pub const HIDDEN: Self = Self {
        opacity: 0.0,
        translate_y: 30.0,
    };
    pub const SHOWN: Self = Self {
        opacity: 1.0,
        translate_y: 0.0,
    };
}

/// Vertical extent of an element relative to the top of the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementRect {
    pub top: f64,
    pub height: f64,
}

impl ElementRect {
    /// Visible share of the element, with the bottom margin applied.
    pub fn intersection_ratio(&self, viewport_height: f64) -> f64 {
        if self.height <= 0.0 {
            return 0.0;
        }
        let bottom_edge = (viewport_height - BOTTOM_MARGIN).max(0.0);
        let visible = (self.top + self.height).min(bottom_edge) - self.top.max(0.0);
        (visible / self.height).clamp(0.0, 1.0)
    }
}

/// One-shot reveal state for each observed element, in document order.
#[derive(Debug, Clone)]
pub struct ScrollReveal {
    revealed: Vec<bool>,
}

impl ScrollReveal {
    /// Starts observing `count` elements. `None` when there is nothing to observe.
    pub fn new(count: usize) -> Option<Self> {
        (count > 0).then(|| Self {
            revealed: vec![false; count],
        })
    }

    /// Report an intersection ratio for one element.
    ///
    /// Returns `true` only on the call that reveals it. Elements already
    /// revealed, and indices past the end, are ignored.
    pub fn on_intersection(&mut self, index: usize, ratio: f64) -> bool {
        match self.revealed.get_mut(index) {
            Some(revealed) if !*revealed && ratio >= THRESHOLD => {
                *revealed = true;
                tracing::debug!(index, ratio, "element revealed");
                true
            }
            _ => false,
        }
    }

    /// Check every element against the current viewport.
    /// Returns the indices revealed by this scroll position.
    pub fn on_scroll(&mut self, rects: &[ElementRect], viewport_height: f64) -> Vec<usize> {
        rects
            .iter()
            .enumerate()
            .filter_map(|(index, rect)| {
                let ratio = rect.intersection_ratio(viewport_height);
                self.on_intersection(index, ratio).then_some(index)
            })
            .collect()
    }

    /// Whether the element is still waiting for its first intersection.
    pub fn is_observed(&self, index: usize) -> bool {
        self.revealed.get(index).is_some_and(|revealed| !revealed)
    }

    pub fn style(&self, index: usize) -> Option<RevealStyle> {
        self.revealed.get(index).map(|&revealed| {
            if revealed {
                RevealStyle::SHOWN
            } else {
                RevealStyle::HIDDEN
            }
        })
    }

    pub fn pending(&self) -> usize {
        self.revealed.iter().filter(|revealed| !**revealed).count()
    }
}
