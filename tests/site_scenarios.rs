//! End-to-end scenarios driven through the public API, the way the browser
//! binding drives it: events in, view models and markup out.

use std::time::Duration;

use after_site::catalog::{Catalog, PortfolioEntry};
use after_site::chrome::MobileMenu;
use after_site::config::SiteConfig;
use after_site::gallery::{Direction, Gallery, GalleryState, PaginationSource};
use after_site::hero::HeroRotator;
use after_site::marquee::duplicate_track;
use after_site::render::{render_cards, render_pagination};
use after_site::scroll_lock::{Overflow, ScrollLock};
use after_site::transition::{ClickAction, LinkClick, TransitionController};

fn numbered_catalog(count: usize) -> Catalog {
    Catalog::from_entries(
        (1..=count)
            .map(|n| {
                PortfolioEntry::new(
                    format!("Event {n}"),
                    format!("Event number {n}"),
                    format!("image/portfolio/{n}.jpg"),
                    vec![],
                )
            })
            .collect(),
    )
}

#[test]
fn thirteen_entries_paginate_into_two_pages() {
    let config = SiteConfig::default();
    let mut gallery = Gallery::new(numbered_catalog(13), config.gallery.page_size);
    assert_eq!(gallery.page_count(), 2);

    let view = gallery.render(2);
    assert_eq!(view.cards.len(), 1);
    assert_eq!(view.cards[0].entry.title, "Event 13");

    let buttons = view.buttons();
    assert_eq!(buttons.len(), 2);
    assert!(!buttons[0].active);
    assert!(buttons[1].active);

    let cards = render_cards(&view, &config.gallery.overlay_label).into_string();
    assert_eq!(cards.matches(r#"class="portfolio-item""#).count(), 1);
    let pagination = render_pagination(&buttons).into_string();
    assert_eq!(pagination.matches("<button").count(), 2);
    assert_eq!(pagination.matches("page-btn active").count(), 1);
}

#[test]
fn stock_catalog_browses_like_the_live_site() {
    let mut gallery = Gallery::new(Catalog::stock().unwrap(), 12);
    let mut lock = ScrollLock::new();
    assert_eq!(gallery.total(), 13);
    assert_eq!(gallery.state(), GalleryState::Listing { page: 1 });
    assert_eq!(gallery.render(1).cards.len(), 12);

    // First entry has three images
    let (view, overflow) = gallery.open_modal(0, &mut lock).unwrap();
    assert!(view.show_controls);
    assert_eq!(view.counter, "1 / 3");
    assert_eq!(overflow, Overflow::Hidden);

    let view = gallery.navigate(Direction::Prev).unwrap();
    assert_eq!(view.counter, "3 / 3");
    assert_eq!(view.image, "image/portfolio/3.jpg");
    let view = gallery.navigate(Direction::Next).unwrap();
    assert_eq!(view.counter, "1 / 3");

    assert_eq!(gallery.close_modal(&mut lock), Overflow::Auto);

    // Last entry has no image list and falls back to its thumbnail
    gallery.render(2);
    let (view, _) = gallery.open_modal(12, &mut lock).unwrap();
    assert!(!view.show_controls);
    assert_eq!(view.counter, "1 / 1");
    gallery.close_modal(&mut lock);
    assert_eq!(gallery.state(), GalleryState::Listing { page: 2 });
}

#[test]
fn menu_and_modal_share_the_scroll_lock() {
    let mut lock = ScrollLock::new();
    let mut menu = MobileMenu::new();
    let mut gallery = Gallery::new(numbered_catalog(3), 12);

    menu.toggle(&mut lock);
    gallery.open_modal(1, &mut lock);

    // Closing the menu underneath the modal keeps the page locked
    assert_eq!(menu.close(&mut lock).overflow, Overflow::Hidden);
    assert_eq!(gallery.close_modal(&mut lock), Overflow::Auto);
}

#[test]
fn internal_link_fades_then_navigates() {
    let config = SiteConfig::default();
    let mut controller = TransitionController::new(
        Duration::from_millis(u64::from(config.transition.delay_ms)),
        config.transition.fade_in_animation.clone(),
    );

    let action = controller.on_click(
        LinkClick {
            href: Some("portfolio.html"),
            target: None,
        },
        "index.html",
    );
    assert_eq!(
        action,
        ClickAction::FadeThenNavigate {
            href: "portfolio.html".to_string(),
            delay: Duration::from_millis(800),
        }
    );
    assert_eq!(controller.on_delay_elapsed().as_deref(), Some("portfolio.html"));

    let action = controller.on_click(
        LinkClick {
            href: Some("index.html"),
            target: None,
        },
        "index.html",
    );
    assert_eq!(action, ClickAction::Immediate);
}

#[test]
fn hero_and_marquee_on_the_home_page() {
    let mut rotator = HeroRotator::new(4).unwrap();
    let mut active = vec![true, false, false, false];
    for k in 1..=10 {
        let change = rotator.tick();
        active[change.deactivate] = false;
        active[change.activate] = true;
        assert_eq!(active.iter().filter(|a| **a).count(), 1);
        assert!(active[k % 4]);
    }

    let track = "<li>A</li><li>B</li>";
    assert_eq!(duplicate_track(track), "<li>A</li><li>B</li><li>A</li><li>B</li>");
}
