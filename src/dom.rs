//! Thin helpers over `web-sys` lookups.
//!
//! Lookups return `PortfolioError::MissingElement` for absent nodes so that
//! initializers can bail out with `?` and be reported as skipped.

use portfolio_core::{PortfolioError, PortfolioResult};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Window};

pub fn window() -> PortfolioResult<Window> {
    web_sys::window().ok_or_else(|| PortfolioError::Dom("no global window".into()))
}

pub fn document() -> PortfolioResult<Document> {
    window()?
        .document()
        .ok_or_else(|| PortfolioError::Dom("window has no document".into()))
}

/// Convert a thrown JS value into a DOM error.
pub fn dom_err(value: JsValue) -> PortfolioError {
    PortfolioError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

/// `document.getElementById`, cast to `T`.
pub fn by_id<T: JsCast>(id: &str) -> PortfolioResult<T> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| PortfolioError::missing(format!("#{}", id)))?
        .dyn_into::<T>()
        .map_err(|_| PortfolioError::Dom(format!("#{} has an unexpected element type", id)))
}

/// First match for `selector`, or a missing-element error.
pub fn require<T: JsCast>(selector: &str) -> PortfolioResult<T> {
    document()?
        .query_selector(selector)
        .map_err(dom_err)?
        .ok_or_else(|| PortfolioError::missing(selector))?
        .dyn_into::<T>()
        .map_err(|_| PortfolioError::Dom(format!("{} has an unexpected element type", selector)))
}

/// Whether anything on the page matches `selector`.
pub fn exists(selector: &str) -> bool {
    document()
        .ok()
        .and_then(|doc| doc.query_selector(selector).ok().flatten())
        .is_some()
}

/// Every match for `selector` in the document.
pub fn query_all(selector: &str) -> PortfolioResult<Vec<Element>> {
    let list = document()?.query_selector_all(selector).map_err(dom_err)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Every match for `selector` below `root`.
pub fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    match root.query_selector_all(selector) {
        Ok(list) => (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect(),
        Err(e) => {
            tracing::warn!("Invalid selector {}: {:?}", selector, e);
            Vec::new()
        }
    }
}

/// Set several inline style properties, stopping at the first failure.
pub fn set_styles(element: &HtmlElement, properties: &[(&str, &str)]) -> PortfolioResult<()> {
    let style = element.style();
    for (name, value) in properties {
        style.set_property(name, value).map_err(dom_err)?;
    }
    Ok(())
}
