//! Scroll-driven styles and observer settings.

/// Scroll offset past which the navbar turns solid.
pub const NAVBAR_SOLID_THRESHOLD: f64 = 100.0;

/// Scroll offset past which the scroll-to-top button appears.
pub const SCROLL_TOP_THRESHOLD: f64 = 300.0;

/// Class of the generated scroll-to-top button.
pub const SCROLL_TOP_CLASS: &str = "scroll-to-top";

/// Inline style of the scroll-to-top button (starts hidden).
pub const SCROLL_TOP_STYLE: &str = "position: fixed; bottom: 30px; right: 30px; width: 50px; \
    height: 50px; border-radius: 50%; background: #2563eb; color: white; border: none; \
    cursor: pointer; opacity: 0; visibility: hidden; transition: all 0.3s ease; z-index: 1000;";

/// Navbar background and shadow for a scroll position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavbarStyle {
    pub background: &'static str,
    pub box_shadow: &'static str,
}

pub fn navbar_style(scroll_y: f64) -> NavbarStyle {
    if scroll_y > NAVBAR_SOLID_THRESHOLD {
        NavbarStyle {
            background: "rgba(255, 255, 255, 0.98)",
            box_shadow: "0 2px 20px rgba(0, 0, 0, 0.1)",
        }
    } else {
        NavbarStyle {
            background: "rgba(255, 255, 255, 0.95)",
            box_shadow: "none",
        }
    }
}

pub fn scroll_top_visible(scroll_y: f64) -> bool {
    scroll_y > SCROLL_TOP_THRESHOLD
}

/// IntersectionObserver settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

/// Skill bars fill once half the section is visible.
pub const SKILLS_OBSERVER: ObserverOptions = ObserverOptions {
    threshold: 0.5,
    root_margin: "0px 0px -100px 0px",
};

/// Project cards fade in as soon as they peek into view.
pub const PROJECT_CARD_OBSERVER: ObserverOptions = ObserverOptions {
    threshold: 0.1,
    root_margin: "0px",
};

/// Project card styles: (opacity, transform) before and after reveal.
pub const PROJECT_CARD_HIDDEN: (&str, &str) = ("0", "translateY(50px)");
pub const PROJECT_CARD_SHOWN: (&str, &str) = ("1", "translateY(0)");
pub const PROJECT_CARD_TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";
