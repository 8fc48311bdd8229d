use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::{Page, dom};
use crate::reveal::{RevealKind, RevealTracker, SectionStyle, classify_section};

fn apply_style(section: &Element, style: &SectionStyle) {
    dom::set_style(section, "opacity", style.opacity);
    dom::set_style(section, "transform", &style.transform);
    if let Some(transition) = &style.transition {
        dom::set_style(section, "transition", transition);
    }
}

pub fn attach(page: &Page) -> Result<(), JsValue> {
    let sections = Rc::new(dom::query_all(&page.document, "section"));
    if sections.is_empty() {
        return Ok(());
    }
    let tracker = Rc::new(RefCell::new(RevealTracker::new()));

    let callback = {
        let sections = sections.clone();
        let tracker = tracker.clone();
        Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let target = entry.target();
                    let Some(id) = sections.iter().position(|s| *s == target) else {
                        continue;
                    };
                    if tracker
                        .borrow_mut()
                        .on_intersection(id, entry.is_intersecting())
                    {
                        apply_style(&target, &SectionStyle::visible());
                        observer.unobserve(&target);
                    }
                }
            },
        )
    };

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(page.config.reveal.threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for (id, section) in sections.iter().enumerate() {
        let class_name = section.class_name();
        let kind = classify_section(class_name.split_whitespace());
        apply_style(section, &SectionStyle::initial(kind, &page.config.reveal));
        if kind == RevealKind::Deferred {
            tracker.borrow_mut().watch(id);
            observer.observe(section);
        }
    }
    tracing::debug!(
        sections = sections.len(),
        deferred = tracker.borrow().pending_count(),
        "reveal observer attached"
    );
    Ok(())
}
