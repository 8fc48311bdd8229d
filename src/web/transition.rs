use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::PageTransitionEvent;

use super::{Page, dom};
use crate::transition::{ClickAction, FadeInReplay, LinkClick, TransitionController};

pub fn attach(page: &Page, current_page: String) {
    let fade_class = page.config.transition.fade_class.clone();
    // A page left mid-fade can come back with the class still set.
    let _ = page.body.class_list().remove_1(&fade_class);

    let controller = Rc::new(RefCell::new(TransitionController::new(
        Duration::from_millis(u64::from(page.config.transition.delay_ms)),
        page.config.transition.fade_in_animation.clone(),
    )));

    for link in dom::query_all(&page.document, "a") {
        let controller = controller.clone();
        let page = page.clone();
        let fade_class = fade_class.clone();
        let current_page = current_page.clone();
        let anchor = link.clone();
        EventListener::new(&link, "click", move |event| {
            let href = anchor.get_attribute("href");
            let target = anchor.get_attribute("target");
            let click = LinkClick {
                href: href.as_deref(),
                target: target.as_deref(),
            };
            let action = controller.borrow_mut().on_click(click, &current_page);
            let ClickAction::FadeThenNavigate { delay, .. } = action else {
                return;
            };

            event.prevent_default();
            let _ = page.body.class_list().add_1(&fade_class);

            let controller = controller.clone();
            let window = page.window.clone();
            let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
            Timeout::new(millis, move || {
                if let Some(href) = controller.borrow_mut().on_delay_elapsed() {
                    let _ = window.location().set_href(&href);
                }
            })
            .forget();
        })
        .forget();
    }

    let body = page.body.clone();
    EventListener::new(&page.window, "pageshow", move |event| {
        let persisted = event
            .dyn_ref::<PageTransitionEvent>()
            .is_some_and(PageTransitionEvent::persisted);
        let show = controller.borrow_mut().on_page_show(persisted);
        if show.clear_fade {
            let _ = body.class_list().remove_1(&fade_class);
        }
        for phase in show.replay {
            match phase {
                FadeInReplay::Reset => {
                    dom::set_style(&body, "animation", "none");
                    // Reading layout forces the reset to take effect before
                    // the animation is reassigned.
                    let _ = body.offset_width();
                }
                FadeInReplay::Commit(animation) => {
                    dom::set_style(&body, "animation", &animation);
                }
            }
        }
    })
    .forget();
}
