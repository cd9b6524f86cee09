use gloo::events::{EventListener, EventListenerOptions};
use portfolio_core::effects::anchor_target;
use portfolio_core::effects::navigation::MENU_OPEN_CLASS;
use portfolio_core::PortfolioResult;
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::dom;

/// Hamburger toggle plus close-on-click for every nav link.
pub fn menu_toggle() -> PortfolioResult<Vec<EventListener>> {
    let toggle = dom::by_id::<Element>("nav-toggle")?;
    let menu = dom::by_id::<Element>("nav-menu")?;

    let mut listeners = Vec::new();

    let toggled = menu.clone();
    listeners.push(EventListener::new(&toggle, "click", move |_| {
        if let Err(e) = toggled.class_list().toggle(MENU_OPEN_CLASS) {
            tracing::debug!("Menu toggle failed: {:?}", e);
        }
    }));

    for link in dom::query_all(".nav-link")? {
        let menu = menu.clone();
        listeners.push(EventListener::new(&link, "click", move |_| {
            if let Err(e) = menu.class_list().remove_1(MENU_OPEN_CLASS) {
                tracing::debug!("Menu close failed: {:?}", e);
            }
        }));
    }

    Ok(listeners)
}

/// Smooth scrolling for in-page anchors.
pub fn smooth_scroll() -> PortfolioResult<Vec<EventListener>> {
    let anchors = dom::query_all(r##"a[href^="#"]"##)?;
    tracing::debug!(anchors = anchors.len(), "Installing smooth scroll");

    Ok(anchors
        .into_iter()
        .map(|anchor| {
            let link = anchor.clone();
            let options = EventListenerOptions::enable_prevent_default();
            EventListener::new_with_options(&anchor, "click", options, move |event| {
                event.prevent_default();
                let href = link.get_attribute("href").unwrap_or_default();
                let Some(id) = anchor_target(&href) else {
                    return;
                };
                let Ok(target) = dom::by_id::<Element>(id) else {
                    tracing::debug!(target = id, "Anchor target not on page");
                    return;
                };

                let scroll = ScrollIntoViewOptions::new();
                scroll.set_behavior(ScrollBehavior::Smooth);
                scroll.set_block(ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&scroll);
            })
        })
        .collect())
}
