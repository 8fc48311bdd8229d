use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;

use super::{Page, dom};
use crate::chrome::{
    ACTIVE_CLASS, MENU_OPEN_CLASS, MenuUpdate, MobileMenu, SCROLLED_CLASS, active_links,
    current_page_name, header_scrolled,
};

/// Wire the header, active link, and mobile menu. Returns the current page
/// name for the transition controller.
pub fn attach(page: &Page) -> String {
    attach_header(page);

    let pathname = page.window.location().pathname().unwrap_or_default();
    let current = current_page_name(&pathname, &page.config.navigation.home_page).to_string();

    let links = dom::query_all(&page.document, ".nav-link");
    let hrefs: Vec<Option<String>> = links.iter().map(|l| l.get_attribute("href")).collect();
    for idx in active_links(hrefs.iter().map(Option::as_deref), &current) {
        dom::set_class(&links[idx], ACTIVE_CLASS, true);
    }

    let toggle = dom::by_id(&page.document, "mobile-menu");
    let nav = dom::query(&page.document, ".nav");
    let (Some(toggle), Some(nav)) = (toggle, nav) else {
        tracing::debug!("no mobile menu on this page");
        return current;
    };

    let menu = Rc::new(RefCell::new(MobileMenu::new()));
    let apply = {
        let page = page.clone();
        let toggle = toggle.clone();
        move |update: MenuUpdate| {
            dom::set_class(&toggle, MENU_OPEN_CLASS, update.open);
            dom::set_class(&nav, MENU_OPEN_CLASS, update.open);
            page.apply_overflow(update.overflow);
        }
    };
    let apply = Rc::new(apply);

    {
        let menu = menu.clone();
        let lock = page.scroll_lock.clone();
        let apply = apply.clone();
        EventListener::new(&toggle, "click", move |_| {
            let update = menu.borrow_mut().toggle(&mut lock.borrow_mut());
            apply(update);
        })
        .forget();
    }

    for link in &links {
        let menu = menu.clone();
        let lock = page.scroll_lock.clone();
        let apply = apply.clone();
        EventListener::new(link, "click", move |_| {
            let update = menu.borrow_mut().close(&mut lock.borrow_mut());
            apply(update);
        })
        .forget();
    }

    current
}

fn attach_header(page: &Page) {
    let Some(header) = dom::query(&page.document, ".header") else {
        return;
    };
    let threshold = page.config.header.scroll_threshold;
    let window = page.window.clone();
    EventListener::new(&page.window, "scroll", move |_| {
        let y = window.scroll_y().unwrap_or(0.0);
        dom::set_class(&header, SCROLLED_CLASS, header_scrolled(y, threshold));
    })
    .forget();
}
