//! Page effects: listeners, observers and timers.

pub mod navigation;
pub mod observers;
pub mod scroll;
pub mod typing;

pub use observers::VisibilityObserver;
pub use typing::TypingTask;
