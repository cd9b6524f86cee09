//! State-free visual effects.
//!
//! Each effect here is the pure half of a page initializer: timing, styles
//! and thresholds. The browser crate owns the listeners and timers.

pub mod navigation;
pub mod scroll;
pub mod skills;
pub mod typing;

pub use navigation::anchor_target;
pub use scroll::{navbar_style, scroll_top_visible, NavbarStyle, ObserverOptions};
pub use skills::target_width;
pub use typing::{animate, Frame, RunGuard, RunTicket, Typewriter};
