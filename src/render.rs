//! Gallery markup.
//!
//! Cards and pagination buttons are rendered with
//! [maud](https://maud.lambda.xyz/) from the gallery's view models, both in
//! the browser bundle (inserted as the containers' inner HTML) and in the CLI
//! preview. All interpolation is escaped.
//!
//! Click handling is delegated: cards carry `data-entry` (catalog index) and
//! buttons carry `data-page`, which the binding reads back with
//! [`parse_index_attr`].

use maud::{Markup, html};

use crate::gallery::{PageButton, PageView};

/// Attribute holding a card's catalog index.
pub const ENTRY_ATTR: &str = "data-entry";
/// Attribute holding a pagination button's page number.
pub const PAGE_ATTR: &str = "data-page";

/// Inline style painting the thumbnail behind a card.
fn thumbnail_style(thumbnail: &str) -> String {
    format!("background-image: url('{thumbnail}')")
}

/// Cards for one page of the listing.
pub fn render_cards(view: &PageView<'_>, overlay_label: &str) -> Markup {
    html! {
        @for card in &view.cards {
            div.portfolio-item data-entry=(card.index) {
                div.portfolio-item-image style=(thumbnail_style(&card.entry.thumbnail)) {
                    div.portfolio-item-overlay {
                        span { (overlay_label) }
                    }
                }
                h3 { (card.entry.title) }
                p { (card.entry.description) }
            }
        }
    }
}

/// Pagination buttons, the current page marked `active`.
pub fn render_pagination(buttons: &[PageButton]) -> Markup {
    html! {
        @for button in buttons {
            button.page-btn.active[button.active] type="button" data-page=(button.page) {
                (button.page)
            }
        }
    }
}

/// Standalone preview of one listing page, used by the CLI.
pub fn render_page_preview(view: &PageView<'_>, overlay_label: &str) -> Markup {
    html! {
        div #portfolioItems.portfolio-grid {
            (render_cards(view, overlay_label))
        }
        div #pagination.pagination {
            (render_pagination(&view.buttons()))
        }
    }
}

/// Parse a `data-entry` / `data-page` value.
pub fn parse_index_attr(value: Option<&str>) -> Option<usize> {
    value?.trim().parse().ok()
}
