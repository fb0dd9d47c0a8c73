//! Site header behaviour: the mobile menu, in-page anchor scrolling, the
//! header's scrolled marking, and the small bits of dynamic text (hero
//! greeting, footer year).

use chrono::{Datelike, Local, Timelike};

/// Scroll offset past which the header switches to its compact style.
pub const SCROLLED_THRESHOLD: f64 = 100.0;

const GREETINGS: [&str; 3] = ["Good morning! ", "Good afternoon! ", "Good evening! "];

/// Glyph shown on the menu toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuIcon {
    Bars,
    Times,
}

impl MenuIcon {
    /// Icon font class.
    pub fn class(self) -> &'static str {
        match self {
            MenuIcon::Bars => "fa-bars",
            MenuIcon::Times => "fa-times",
        }
    }
}

/// Where a document click landed, from the menu's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuClick {
    Toggle,
    /// A `.nav__link` inside the menu.
    Link,
    /// Inside the menu but not on a link.
    Menu,
    Elsewhere,
}

/// The collapsible navigation menu on small screens.
///
/// Open ⇔ the icon shows `fa-times` ⇔ the body scroll is locked.
#[derive(Debug, Clone, Default)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
        tracing::debug!(open = self.open, "mobile menu toggled");
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn on_click(&mut self, target: MenuClick) {
        match target {
            MenuClick::Toggle => self.toggle(),
            MenuClick::Link | MenuClick::Elsewhere => self.close(),
            MenuClick::Menu => {}
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn icon(&self) -> MenuIcon {
        if self.open {
            MenuIcon::Times
        } else {
            MenuIcon::Bars
        }
    }

    pub fn scroll_locked(&self) -> bool {
        self.open
    }
}

/// A smooth `window.scrollTo`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTo {
    pub top: f64,
}

/// What to do with a click on an `<a href="#...">`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnchorClick {
    /// Let the browser handle it (bare `#` or not an in-page link).
    Default,
    /// Default prevented; scroll if the target exists.
    Handled(Option<ScrollTo>),
}

/// Resolve an anchor click to an offset smooth scroll.
///
/// `target_top` looks up the `offsetTop` of an element by selector (`#id`),
/// `header_height` is the fixed header's height if the page has one.
pub fn anchor_click(
    href: &str,
    target_top: impl Fn(&str) -> Option<f64>,
    header_height: Option<f64>,
) -> AnchorClick {
    if !href.starts_with('#') || href.len() <= 1 {
        return AnchorClick::Default;
    }
    let scroll = target_top(href).map(|top| ScrollTo {
        top: top - header_height.unwrap_or(0.0),
    });
    AnchorClick::Handled(scroll)
}

/// Whether the header carries its `scrolled` marking at this offset.
pub fn header_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD
}

/// Greeting for a local hour (0–23).
pub fn greeting(hour: u32) -> &'static str {
    match hour {
        0..=11 => GREETINGS[0],
        12..=17 => GREETINGS[1],
        _ => GREETINGS[2],
    }
}

/// Prefix the hero text with a greeting, unless it already has one.
pub fn with_greeting(text: &str, hour: u32) -> String {
    let greeted = GREETINGS.iter().any(|g| text.starts_with(g.trim_end()));
    if greeted {
        text.to_string()
    } else {
        format!("{}{}", greeting(hour), text)
    }
}

/// [`with_greeting`] using the local clock.
pub fn greet_now(text: &str) -> String {
    with_greeting(text, Local::now().hour())
}

/// Year for the footer copyright line.
pub fn current_year() -> i32 {
    Local::now().year()
}
