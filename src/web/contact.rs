use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::HtmlFormElement;

use super::{Page, dom};
use crate::contact::ContactForm;

pub fn attach(page: &Page) {
    let Some(form) = dom::by_id(&page.document, "inquiryForm")
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
    else {
        return;
    };
    let state = ContactForm::new(page.config.contact.acknowledgment.clone());
    let window = page.window.clone();
    let target = form.clone();
    EventListener::new(&target, "submit", move |event| {
        event.prevent_default();
        let _ = window.alert_with_message(state.submit());
        form.reset();
    })
    .forget();
}
