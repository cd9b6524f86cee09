//! Browser adapters for the contact form.

use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use gloo::net::http::Request;
use js_sys::Array;
use portfolio_core::contact::{SENDING_LABEL, SUBMIT_LABEL};
use portfolio_core::page::CONTACT_FORM_SELECTOR;
use portfolio_core::{
    ContactSubmitter, ContactSurface, FormFields, FormMessage, PortfolioError, PortfolioResult,
    RelayClient, RelayResponse,
};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{FormData, HtmlButtonElement, HtmlElement, HtmlFormElement};

use crate::dom;

pub type WebContact = ContactSubmitter<FetchRelayClient, DomContactForm>;

/// Posts multipart form data with `fetch`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchRelayClient;

impl RelayClient for FetchRelayClient {
    async fn submit(&self, endpoint: &str, fields: &FormFields) -> PortfolioResult<RelayResponse> {
        let body = FormData::new().map_err(dom::dom_err)?;
        for (name, value) in fields.iter() {
            body.append_with_str(name, value).map_err(dom::dom_err)?;
        }

        let response = Request::post(endpoint)
            .header("Accept", "application/json")
            .body(body)
            .map_err(|e| PortfolioError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| PortfolioError::Transport(e.to_string()))?;

        let text = response
            .text()
            .await
            .map_err(|e| PortfolioError::Transport(e.to_string()))?;
        RelayResponse::from_body(&text)
    }
}

/// The `.contact-form` element and its controls.
pub struct DomContactForm {
    form: HtmlFormElement,
    button: HtmlButtonElement,
    label: Option<HtmlElement>,
    spinner: Option<HtmlElement>,
    message: Option<HtmlElement>,
}

impl DomContactForm {
    /// Locate the form; fails if the form or its submit button is missing.
    pub fn locate() -> PortfolioResult<Self> {
        let form = dom::require::<HtmlFormElement>(CONTACT_FORM_SELECTOR)?;
        let button = dom::by_id::<HtmlButtonElement>("submit-btn")?;
        let label = button
            .query_selector(".btn-text")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        let spinner = button
            .query_selector(".btn-loading")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        let message = dom::by_id::<HtmlElement>("form-message").ok();

        Ok(Self {
            form,
            button,
            label,
            spinner,
            message,
        })
    }

    pub fn form(&self) -> &HtmlFormElement {
        &self.form
    }

    fn display(element: Option<&HtmlElement>, value: &str) {
        if let Some(element) = element {
            if let Err(e) = element.style().set_property("display", value) {
                tracing::debug!("Could not set display: {:?}", e);
            }
        }
    }
}

impl ContactSurface for DomContactForm {
    fn fields(&self) -> FormFields {
        let mut fields = FormFields::new();
        let Ok(data) = FormData::new_with_form(&self.form) else {
            return fields;
        };
        let Ok(Some(entries)) = js_sys::try_iter(&data) else {
            return fields;
        };

        for entry in entries.flatten() {
            let pair = Array::from(&entry);
            // File inputs carry Blob values; only text fields are relayed.
            if let (Some(name), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) {
                fields.push(name, value);
            }
        }
        fields
    }

    fn set_sending(&self, sending: bool) {
        self.button.set_disabled(sending);
        if let Some(label) = &self.label {
            label.set_text_content(Some(if sending { SENDING_LABEL } else { SUBMIT_LABEL }));
        }
        Self::display(self.spinner.as_ref(), if sending { "inline-block" } else { "none" });
    }

    fn show_message(&self, message: FormMessage) {
        if let Some(area) = &self.message {
            area.set_text_content(Some(message.text()));
            area.set_class_name(message.class_name());
        }
        Self::display(self.message.as_ref(), "block");
    }

    fn hide_message(&self) {
        Self::display(self.message.as_ref(), "none");
    }

    fn reset(&self) {
        self.form.reset();
    }
}

/// Wire the form's submit event to `contact`.
pub fn install(contact: &Rc<WebContact>, form: &HtmlFormElement) -> EventListener {
    let contact = Rc::clone(contact);
    let options = EventListenerOptions::enable_prevent_default();
    EventListener::new_with_options(form, "submit", options, move |event| {
        event.prevent_default();
        let contact = Rc::clone(&contact);
        spawn_local(async move {
            contact.submit().await;
        });
    })
}
