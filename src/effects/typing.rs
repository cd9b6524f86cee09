//! Browser driver for the hero typewriter.

use std::time::Duration;

use gloo::timers::future::TimeoutFuture;
use portfolio_core::effects::{animate, RunGuard, Typewriter};
use portfolio_core::{PortfolioError, PortfolioResult};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlElement;

use crate::dom;

/// Element the headline is typed into.
pub const TYPING_SELECTOR: &str = ".typing-text";

/// Runs the typewriter on gloo timers until cancelled or dropped.
pub struct TypingTask {
    element: HtmlElement,
    words: Vec<String>,
    guard: RunGuard,
}

impl TypingTask {
    pub fn locate(words: Vec<String>) -> PortfolioResult<Self> {
        let element = dom::require::<HtmlElement>(TYPING_SELECTOR)?;
        Ok(Self {
            element,
            words,
            guard: RunGuard::new(),
        })
    }

    /// Start from the first word, stopping any earlier run.
    pub fn start(&self) -> PortfolioResult<()> {
        let writer = Typewriter::new(&self.words)
            .ok_or_else(|| PortfolioError::Config("no words to type".into()))?;

        let ticket = self.guard.begin();
        let element = self.element.clone();
        spawn_local(animate(
            writer,
            ticket,
            move |text| element.set_text_content(Some(text)),
            sleep,
        ));
        Ok(())
    }

    pub fn cancel(&self) {
        self.guard.cancel();
    }
}

impl Drop for TypingTask {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn sleep(delay: Duration) -> TimeoutFuture {
    TimeoutFuture::new(u32::try_from(delay.as_millis()).unwrap_or(u32::MAX))
}
