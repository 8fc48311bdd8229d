use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, ScrollBehavior, ScrollToOptions};

use super::{Page, dom};
use crate::catalog::Catalog;
use crate::gallery::{Direction, Gallery, ModalView};
use crate::render::{ENTRY_ATTR, PAGE_ATTR, parse_index_attr, render_cards, render_pagination};

/// Lightbox elements.
struct ModalDom {
    root: Element,
    image: Element,
    caption: Element,
    counter: Element,
    prev: Option<Element>,
    next: Option<Element>,
}

impl ModalDom {
    fn find(page: &Page) -> Option<Self> {
        let document = &page.document;
        Some(Self {
            root: dom::by_id(document, "portfolioModal")?,
            image: dom::by_id(document, "modalImage")?,
            caption: dom::by_id(document, "modalCaption")?,
            counter: dom::by_id(document, "modalCounter")?,
            prev: dom::query(document, ".modal-prev"),
            next: dom::query(document, ".modal-next"),
        })
    }

    fn show(&self, view: &ModalView) {
        let _ = self.image.set_attribute("src", &view.image);
        self.caption.set_text_content(Some(&view.caption));
        self.counter.set_text_content(Some(&view.counter));
        for control in [&self.prev, &self.next].into_iter().flatten() {
            dom::set_visible(control, view.show_controls);
        }
        dom::set_visible(&self.root, true);
    }

    fn hide(&self) {
        dom::set_visible(&self.root, false);
    }
}

/// Everything the gallery listeners share.
struct GalleryDom {
    page: Page,
    gallery: RefCell<Gallery>,
    container: Element,
    pagination: Option<Element>,
    modal: Option<ModalDom>,
}

impl GalleryDom {
    fn render(&self, page: usize) {
        let mut gallery = self.gallery.borrow_mut();
        let view = gallery.render(page);
        let label = &self.page.config.gallery.overlay_label;
        self.container
            .set_inner_html(&render_cards(&view, label).into_string());
        if let Some(pagination) = &self.pagination {
            pagination.set_inner_html(&render_pagination(&view.buttons()).into_string());
        }
    }

    fn scroll_to_top(&self) {
        let top = self
            .container
            .dyn_ref::<HtmlElement>()
            .map(|el| f64::from(el.offset_top()))
            .unwrap_or(0.0);
        let options = ScrollToOptions::new();
        options.set_top(top - self.page.config.gallery.scroll_offset_px);
        options.set_behavior(ScrollBehavior::Smooth);
        self.page.window.scroll_to_with_scroll_to_options(&options);
    }

    fn open(&self, entry: usize) {
        let Some(modal) = &self.modal else {
            return;
        };
        let opened = self
            .gallery
            .borrow_mut()
            .open_modal(entry, &mut self.page.scroll_lock.borrow_mut());
        if let Some((view, overflow)) = opened {
            modal.show(&view);
            self.page.apply_overflow(overflow);
        }
    }

    fn navigate(&self, direction: Direction) {
        let Some(modal) = &self.modal else {
            return;
        };
        if let Some(view) = self.gallery.borrow_mut().navigate(direction) {
            modal.show(&view);
        }
    }

    fn close(&self) {
        let Some(modal) = &self.modal else {
            return;
        };
        let overflow = self
            .gallery
            .borrow_mut()
            .close_modal(&mut self.page.scroll_lock.borrow_mut());
        modal.hide();
        self.page.apply_overflow(overflow);
    }
}

pub fn attach(page: &Page, catalog: Catalog) {
    let Some(container) = dom::by_id(&page.document, "portfolioItems") else {
        return;
    };
    let modal = ModalDom::find(page);
    if modal.is_none() {
        tracing::debug!("portfolio modal missing, cards will not open");
    }
    let state = Rc::new(GalleryDom {
        page: page.clone(),
        gallery: RefCell::new(Gallery::new(catalog, page.config.gallery.page_size)),
        container: container.clone(),
        pagination: dom::by_id(&page.document, "pagination"),
        modal,
    });

    {
        let state = state.clone();
        EventListener::new(&container, "click", move |event| {
            let Some(card) = dom::closest_target(event, ".portfolio-item") else {
                return;
            };
            if let Some(entry) = parse_index_attr(card.get_attribute(ENTRY_ATTR).as_deref()) {
                state.open(entry);
            }
        })
        .forget();
    }

    if let Some(pagination) = &state.pagination {
        let state = state.clone();
        EventListener::new(pagination, "click", move |event| {
            let Some(button) = dom::closest_target(event, ".page-btn") else {
                return;
            };
            if let Some(page) = parse_index_attr(button.get_attribute(PAGE_ATTR).as_deref()) {
                state.render(page);
                state.scroll_to_top();
            }
        })
        .forget();
    }

    if let Some(modal) = &state.modal {
        for (control, direction) in [(&modal.prev, Direction::Prev), (&modal.next, Direction::Next)] {
            let Some(control) = control else {
                continue;
            };
            let state = state.clone();
            EventListener::new(control, "click", move |event| {
                // Keep the click from reaching the backdrop handler.
                event.stop_propagation();
                state.navigate(direction);
            })
            .forget();
        }

        if let Some(close) = dom::query(&page.document, ".modal-close") {
            let state = state.clone();
            EventListener::new(&close, "click", move |_| state.close()).forget();
        }

        let backdrop = state.clone();
        EventListener::new(&modal.root, "click", move |event| {
            if event.target() == event.current_target() {
                backdrop.close();
            }
        })
        .forget();
    }

    if let Some(count) = dom::by_id(&page.document, "portfolioCount") {
        let total = state.gallery.borrow().total();
        count.set_text_content(Some(&total.to_string()));
    }

    state.render(1);
}
