//! Page chrome: header scroll state, active navigation link, mobile menu.

use crate::scroll_lock::{LockHolder, Overflow, ScrollLock};

/// Class applied to the header once the page has scrolled past the threshold.
pub const SCROLLED_CLASS: &str = "scrolled";
/// Class marking the navigation link for the current page.
pub const ACTIVE_CLASS: &str = "active";
/// Class shared by the menu toggle and the nav panel while the menu is open.
pub const MENU_OPEN_CLASS: &str = "is-active";

/// Whether the header should carry [`SCROLLED_CLASS`] at scroll offset `y`.
pub fn header_scrolled(y: f64, threshold: f64) -> bool {
    y > threshold
}

/// File name of the current document, e.g. `/about/company.html` → `company.html`.
///
/// Paths ending in `/` (or empty) resolve to `home_page`.
pub fn current_page_name<'a>(pathname: &'a str, home_page: &'a str) -> &'a str {
    match pathname.rsplit('/').next() {
        Some(name) if !name.is_empty() => name,
        _ => home_page,
    }
}

/// A navigation link is active only when its `href` equals the page name exactly.
pub fn is_active_link(href: &str, current_page: &str) -> bool {
    href == current_page
}

/// Index of every link in `hrefs` that should be marked active.
pub fn active_links<'a, I>(hrefs: I, current_page: &str) -> Vec<usize>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    hrefs
        .into_iter()
        .enumerate()
        .filter_map(|(idx, href)| match href {
            Some(href) if is_active_link(href, current_page) => Some(idx),
            _ => None,
        })
        .collect()
}

/// Mobile navigation menu: closed or open, nothing in between.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

/// What the binding must apply after a menu transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuUpdate {
    /// Whether toggle and panel carry [`MENU_OPEN_CLASS`].
    pub open: bool,
    pub overflow: Overflow,
}

impl MobileMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the menu, claiming the scroll lock while open.
    pub fn toggle(&mut self, lock: &mut ScrollLock) -> MenuUpdate {
        self.open = !self.open;
        let overflow = if self.open {
            lock.acquire(LockHolder::Menu)
        } else {
            lock.release(LockHolder::Menu)
        };
        tracing::trace!(open = self.open, "mobile menu toggled");
        MenuUpdate {
            open: self.open,
            overflow,
        }
    }

    /// Close the menu (nav link clicked). Closing a closed menu still
    /// releases the menu's hold.
    pub fn close(&mut self, lock: &mut ScrollLock) -> MenuUpdate {
        self.open = false;
        MenuUpdate {
            open: false,
            overflow: lock.release(LockHolder::Menu),
        }
    }
}
