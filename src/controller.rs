//! Owns every live component on the page.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use portfolio_core::{BootReport, Bootstrap, ContactSubmitter, PageStatus, PortfolioConfig};
use wasm_bindgen_futures::spawn_local;

use crate::contact::{self, DomContactForm, FetchRelayClient, WebContact};
use crate::dom;
use crate::effects::{navigation, observers, scroll, TypingTask, VisibilityObserver};
use crate::gallery::{self, WebGallery, CONTAINER_ID};

pub struct PageController {
    config: PortfolioConfig,
    gallery: RefCell<Option<Rc<WebGallery>>>,
    skills: RefCell<Option<VisibilityObserver>>,
    cards: RefCell<Option<VisibilityObserver>>,
    typing: RefCell<Option<TypingTask>>,
    contact: RefCell<Option<Rc<WebContact>>>,
    listeners: RefCell<Vec<EventListener>>,
}

impl PageController {
    pub fn new(config: PortfolioConfig) -> Self {
        Self {
            config,
            gallery: RefCell::new(None),
            skills: RefCell::new(None),
            cards: RefCell::new(None),
            typing: RefCell::new(None),
            contact: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
        }
    }

    /// Run every initializer once. A failing one never blocks the rest.
    pub fn boot(&self) -> BootReport {
        Bootstrap::new()
            .step("navigation", || {
                self.keep(navigation::menu_toggle()?);
                Ok(())
            })
            .step("smooth_scroll", || {
                self.keep(navigation::smooth_scroll()?);
                Ok(())
            })
            .step("typing", || {
                let task = TypingTask::locate(self.config.typing_words.clone())?;
                task.start()?;
                *self.typing.borrow_mut() = Some(task);
                Ok(())
            })
            .step("skill_bars", || {
                *self.skills.borrow_mut() = Some(observers::skill_bars()?);
                Ok(())
            })
            .step("navbar_scroll", || {
                self.keep(vec![scroll::navbar()?]);
                Ok(())
            })
            .step("contact_form", || {
                let surface = DomContactForm::locate()?;
                let form = surface.form().clone();
                let submitter = Rc::new(ContactSubmitter::new(
                    FetchRelayClient,
                    surface,
                    &self.config.relay_endpoint,
                ));
                self.keep(vec![contact::install(&submitter, &form)]);
                *self.contact.borrow_mut() = Some(submitter);
                Ok(())
            })
            .step("project_cards", || {
                *self.cards.borrow_mut() = Some(observers::project_cards()?);
                Ok(())
            })
            .step("scroll_to_top", || {
                self.keep(scroll::scroll_to_top()?);
                Ok(())
            })
            .step("certificates", || {
                let gallery = Rc::new(gallery::web_gallery(&self.config.certificates_path));
                if !gallery.is_active() {
                    return Err(portfolio_core::PortfolioError::missing(format!("#{}", CONTAINER_ID)));
                }
                let task = Rc::clone(&gallery);
                spawn_local(async move {
                    task.initialize().await;
                });
                *self.gallery.borrow_mut() = Some(gallery);
                Ok(())
            })
            .run()
    }

    pub fn status(&self) -> PageStatus {
        PageStatus::snapshot(
            self.gallery.borrow().is_some(),
            self.skills.borrow().is_some(),
            dom::exists,
        )
    }

    /// Reload the certificate gallery in the background.
    pub fn refresh_certificates(&self) {
        let Some(gallery) = self.gallery.borrow().clone() else {
            tracing::warn!("Certificate manager not initialized");
            return;
        };
        spawn_local(async move {
            gallery.refresh().await;
        });
    }

    /// Stop the typing animation, disconnect observers and drop listeners.
    pub fn shutdown(&self) {
        if let Some(typing) = self.typing.borrow_mut().take() {
            typing.cancel();
        }
        self.contact.borrow_mut().take();
        self.skills.borrow_mut().take();
        self.cards.borrow_mut().take();
        self.listeners.borrow_mut().clear();
        tracing::debug!("Page controller shut down");
    }

    fn keep(&self, listeners: Vec<EventListener>) {
        self.listeners.borrow_mut().extend(listeners);
    }
}
