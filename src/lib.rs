//! Portfolio Site
//!
//! Browser entry point. Boots the page once the DOM is ready, then exposes
//! `window.portfolioUtils` for diagnostics:
//!
//! ```text
//! portfolioUtils.getStatus()            // { certificateManager, observer, contactForm, skillsSection }
//! portfolioUtils.refreshCertificates()  // reload the certificate gallery
//! ```

pub mod contact;
pub mod controller;
pub mod dom;
pub mod effects;
pub mod gallery;
pub mod logging;

use std::rc::Rc;

use gloo::events::EventListener;
use portfolio_core::PortfolioConfig;
use wasm_bindgen::prelude::*;

use crate::controller::PageController;

/// Id of the optional inline JSON config block.
pub const CONFIG_SCRIPT_ID: &str = "portfolio-config";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let document = dom::document().map_err(|e| JsValue::from_str(&e.to_string()))?;
    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", |_| boot()).forget();
    } else {
        boot();
    }
    Ok(())
}

/// Diagnostic handle installed as `window.portfolioUtils`.
#[wasm_bindgen]
pub struct PortfolioUtils {
    controller: Rc<PageController>,
}

#[wasm_bindgen]
impl PortfolioUtils {
    #[wasm_bindgen(js_name = refreshCertificates)]
    pub fn refresh_certificates(&self) {
        self.controller.refresh_certificates();
    }

    #[wasm_bindgen(js_name = getStatus)]
    pub fn get_status(&self) -> Result<JsValue, JsValue> {
        let json = serde_json::to_string(&self.controller.status())
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        js_sys::JSON::parse(&json)
    }
}

fn boot() {
    let (config, problem) = read_config();
    logging::init(&config);
    if let Some(problem) = problem {
        tracing::warn!("Ignoring inline portfolio config: {}", problem);
    }

    let controller = Rc::new(PageController::new(config));
    let report = controller.boot();
    tracing::debug!(
        active = report.active(),
        skipped = report.skipped(),
        failed = report.failed(),
        "Boot report"
    );

    let window = match dom::window() {
        Ok(window) => window,
        Err(e) => {
            tracing::error!("Page teardown not wired: {}", e);
            std::mem::forget(controller);
            return;
        }
    };

    let teardown = Rc::clone(&controller);
    EventListener::new(&window, "pagehide", move |_| teardown.shutdown()).forget();

    let utils = JsValue::from(PortfolioUtils { controller });
    let installed = js_sys::Reflect::set(&window, &JsValue::from_str("portfolioUtils"), &utils);

    match installed {
        Ok(true) => {}
        other => {
            tracing::warn!("Could not expose portfolioUtils: {:?}", other);
            // The page components must outlive this call either way.
            std::mem::forget(utils);
        }
    }
}

/// Inline `#portfolio-config` JSON, or defaults plus the reason it was ignored.
fn read_config() -> (PortfolioConfig, Option<String>) {
    let Ok(script) = dom::by_id::<web_sys::Element>(CONFIG_SCRIPT_ID) else {
        return (PortfolioConfig::default(), None);
    };
    let text = script.text_content().unwrap_or_default();
    match PortfolioConfig::from_json(&text) {
        Ok(config) => (config, None),
        Err(e) => (PortfolioConfig::default(), Some(e.to_string())),
    }
}
