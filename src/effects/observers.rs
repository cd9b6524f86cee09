//! IntersectionObserver-driven reveals.

use js_sys::Array;
use portfolio_core::effects::scroll::{
    ObserverOptions, PROJECT_CARD_HIDDEN, PROJECT_CARD_OBSERVER, PROJECT_CARD_SHOWN,
    PROJECT_CARD_TRANSITION, SKILLS_OBSERVER,
};
use portfolio_core::effects::skills::{SKILL_BAR_CLASS, WIDTH_ATTRIBUTE};
use portfolio_core::effects::target_width;
use portfolio_core::{PortfolioError, PortfolioResult};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::dom;

/// Sections whose skill bars fill when scrolled into view.
pub const SKILL_SECTIONS: [&str; 2] = [".skills", ".certificates"];

/// Owns an observer and its callback; disconnects on drop.
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
    watched: usize,
}

impl VisibilityObserver {
    /// `on_visible` runs for every entry that is intersecting.
    pub fn new(options: ObserverOptions, mut on_visible: impl FnMut(&Element) + 'static) -> PortfolioResult<Self> {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if entry.is_intersecting() {
                        on_visible(&entry.target());
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(options.root_margin);

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(dom::dom_err)?;

        Ok(Self {
            observer,
            _callback: callback,
            watched: 0,
        })
    }

    pub fn observe(&mut self, element: &Element) {
        self.observer.observe(element);
        self.watched += 1;
    }

    pub fn watched(&self) -> usize {
        self.watched
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Grow skill bars to their `data-width` when their section shows.
pub fn skill_bars() -> PortfolioResult<VisibilityObserver> {
    let mut observer = VisibilityObserver::new(SKILLS_OBSERVER, |section| {
        for bar in dom::query_all_in(section, &format!(".{}", SKILL_BAR_CLASS)) {
            let raw = bar.get_attribute(WIDTH_ATTRIBUTE);
            let Some(width) = target_width(raw.as_deref()) else {
                continue;
            };
            if let Some(bar) = bar.dyn_ref::<HtmlElement>() {
                if let Err(e) = dom::set_styles(bar, &[("width", width)]) {
                    tracing::debug!("Skill bar update failed: {}", e);
                }
            }
        }
    })?;

    for selector in SKILL_SECTIONS {
        for section in dom::query_all(selector)? {
            observer.observe(&section);
        }
    }
    tracing::debug!(sections = observer.watched(), "Skill bar observer ready");
    Ok(observer)
}

/// Hide project cards and fade each one in as it enters the viewport.
pub fn project_cards() -> PortfolioResult<VisibilityObserver> {
    let cards = dom::query_all(".project-card")?;
    if cards.is_empty() {
        return Err(PortfolioError::missing(".project-card"));
    }

    let mut observer = VisibilityObserver::new(PROJECT_CARD_OBSERVER, |card| {
        if let Some(card) = card.dyn_ref::<HtmlElement>() {
            let (opacity, transform) = PROJECT_CARD_SHOWN;
            if let Err(e) = dom::set_styles(card, &[("opacity", opacity), ("transform", transform)]) {
                tracing::debug!("Project card reveal failed: {}", e);
            }
        }
    })?;

    let (opacity, transform) = PROJECT_CARD_HIDDEN;
    for card in cards {
        if let Some(html) = card.dyn_ref::<HtmlElement>() {
            dom::set_styles(
                html,
                &[
                    ("opacity", opacity),
                    ("transform", transform),
                    ("transition", PROJECT_CARD_TRANSITION),
                ],
            )?;
        }
        observer.observe(&card);
    }
    Ok(observer)
}
