use gloo::events::EventListener;
use portfolio_core::effects::scroll::{SCROLL_TOP_CLASS, SCROLL_TOP_STYLE};
use portfolio_core::effects::{navbar_style, scroll_top_visible};
use portfolio_core::{PortfolioError, PortfolioResult};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::dom;

const ARROW_ICON: &str = r#"<i class="fas fa-arrow-up"></i>"#;

fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// Solid navbar once the page has scrolled.
pub fn navbar() -> PortfolioResult<EventListener> {
    let window = dom::window()?;
    let navbar = dom::require::<HtmlElement>(".navbar")?;

    let source = window.clone();
    Ok(EventListener::new(&window, "scroll", move |_| {
        let style = navbar_style(scroll_y(&source));
        if let Err(e) = dom::set_styles(
            &navbar,
            &[("background", style.background), ("box-shadow", style.box_shadow)],
        ) {
            tracing::debug!("Navbar restyle failed: {}", e);
        }
    }))
}

/// Append a scroll-to-top button that shows past the first screen.
pub fn scroll_to_top() -> PortfolioResult<Vec<EventListener>> {
    let window = dom::window()?;
    let document = dom::document()?;
    let body = document.body().ok_or_else(|| PortfolioError::missing("body"))?;

    let button = document
        .create_element("button")
        .map_err(dom::dom_err)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| PortfolioError::Dom("button is not an HtmlElement".into()))?;
    button.set_class_name(SCROLL_TOP_CLASS);
    button.set_attribute("style", SCROLL_TOP_STYLE).map_err(dom::dom_err)?;
    button.set_attribute("aria-label", "Scroll to top").map_err(dom::dom_err)?;
    button.set_inner_html(ARROW_ICON);
    body.append_child(&button).map_err(dom::dom_err)?;

    let source = window.clone();
    let shown = button.clone();
    let on_scroll = EventListener::new(&window, "scroll", move |_| {
        let (opacity, visibility) = if scroll_top_visible(scroll_y(&source)) {
            ("1", "visible")
        } else {
            ("0", "hidden")
        };
        if let Err(e) = dom::set_styles(&shown, &[("opacity", opacity), ("visibility", visibility)]) {
            tracing::debug!("Scroll-to-top restyle failed: {}", e);
        }
    });

    let on_click = EventListener::new(&button, "click", move |_| {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    });

    Ok(vec![on_scroll, on_click])
}
