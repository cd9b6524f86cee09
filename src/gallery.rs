//! Browser adapters for the certificate gallery.

use std::cell::RefCell;
use std::time::Duration;

use gloo::events::EventListener;
use gloo::net::http::Request;
use gloo::timers::callback::Timeout;
use portfolio_core::template::{self, CARD_CLASS};
use portfolio_core::{
    ConfigSource, FetchOutcome, GalleryRenderer, GallerySurface, PortfolioError, PortfolioResult,
};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::dom;

/// Container id the gallery renders into.
pub const CONTAINER_ID: &str = "certificates-grid";

pub type WebGallery = GalleryRenderer<HttpConfigSource, DomGallerySurface>;

/// Build the gallery for the current page, inactive if the container is absent.
pub fn web_gallery(config_path: &str) -> WebGallery {
    let surface = dom::by_id::<Element>(CONTAINER_ID)
        .ok()
        .map(DomGallerySurface::new);
    GalleryRenderer::new(HttpConfigSource, surface, config_path)
}

/// Fetches the configuration over HTTP relative to the page.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpConfigSource;

impl ConfigSource for HttpConfigSource {
    async fn fetch(&self, path: &str) -> FetchOutcome {
        let response = match Request::get(path).send().await {
            Ok(response) => response,
            Err(e) => return FetchOutcome::Transport(e.to_string()),
        };

        if !response.ok() {
            return FetchOutcome::NotFound {
                status: response.status(),
            };
        }

        match response.text().await {
            Ok(body) => FetchOutcome::Loaded(body),
            Err(e) => FetchOutcome::Transport(e.to_string()),
        }
    }
}

/// The `#certificates-grid` element.
pub struct DomGallerySurface {
    container: Element,
    /// Image error listeners for the current render only
    image_listeners: RefCell<Vec<EventListener>>,
}

impl DomGallerySurface {
    pub fn new(container: Element) -> Self {
        Self {
            container,
            image_listeners: RefCell::new(Vec::new()),
        }
    }

    /// Swap broken certificate images for the fallback icon.
    fn watch_images(&self) {
        let listeners = dom::query_all_in(&self.container, ".certificate-image img")
            .into_iter()
            .map(|image| {
                let target = image.clone();
                EventListener::once(&image, "error", move |_| {
                    if let Some(holder) = target.parent_element() {
                        holder.set_inner_html(template::fallback_icon());
                    }
                })
            });
        self.image_listeners.borrow_mut().extend(listeners);
    }
}

impl GallerySurface for DomGallerySurface {
    fn replace(&self, markup: &str) -> PortfolioResult<()> {
        if !self.container.is_connected() {
            return Err(PortfolioError::missing(format!("#{}", CONTAINER_ID)));
        }
        self.image_listeners.borrow_mut().clear();
        self.container.set_inner_html(markup);
        self.watch_images();
        Ok(())
    }

    fn schedule_reveal(&self, delays: &[Duration]) {
        let cards = dom::query_all_in(&self.container, &format!(".{}", CARD_CLASS));
        for (card, delay) in cards.into_iter().zip(delays) {
            let Ok(card) = card.dyn_into::<HtmlElement>() else {
                continue;
            };
            let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
            Timeout::new(millis, move || {
                if let Err(e) = dom::set_styles(&card, &[("opacity", "1"), ("transform", "translateY(0)")]) {
                    tracing::debug!("Card reveal skipped: {}", e);
                }
            })
            .forget();
        }
    }
}
