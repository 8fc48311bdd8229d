//! Portfolio gallery: pagination and the lightbox state machine.
//!
//! The gallery is in one of two states:
//!
//! ```text
//!   Listing(page)  ──open_modal(entry)──▶  ModalOpen(entry, image)
//!        ▲                                        │
//!        └───────────────close_modal()────────────┘
//! ```
//!
//! `navigate` moves between images of the open entry, wrapping at both ends.
//! The page being listed survives a trip through the modal unchanged.
//!
//! Rendering works from view models ([`PageView`], [`ModalView`]) so the
//! browser binding only copies values into the DOM; see [`crate::render`] for
//! the markup.

use std::ops::Range;

use crate::catalog::{Catalog, PortfolioEntry};
use crate::scroll_lock::{LockHolder, Overflow, ScrollLock};

/// Narrow read interface the pagination controls render from.
pub trait PaginationSource {
    type Item;

    /// Number of pages; 0 when there is nothing to show.
    fn page_count(&self) -> usize;

    /// Items on the 1-based `page`; empty when `page` is out of range.
    fn items_for_page(&self, page: usize) -> &[Self::Item];
}

/// `ceil(total / page_size)`.
pub fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size)
}

/// Catalog index range shown on the 1-based `page`, clipped to `total`.
pub fn page_range(page: usize, total: usize, page_size: usize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(total);
    let end = start.saturating_add(page_size).min(total);
    start..end
}

/// Clamp a requested page into `[1, page_count]` (1 for an empty catalog).
pub fn clamp_page(page: usize, page_count: usize) -> usize {
    page.clamp(1, page_count.max(1))
}

/// Lightbox counter text, e.g. `"2 / 3"`.
pub fn counter_text(index: usize, count: usize) -> String {
    format!("{} / {}", index + 1, count)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

/// Image browsing state; only exists while the modal is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalBrowseState {
    pub entry: usize,
    pub title: String,
    pub images: Vec<String>,
    pub index: usize,
}

impl ModalBrowseState {
    fn open(entry: usize, data: &PortfolioEntry) -> Self {
        let images = if data.images.is_empty() {
            vec![data.thumbnail.clone()]
        } else {
            data.images.clone()
        };
        Self {
            entry,
            title: data.title.clone(),
            images,
            index: 0,
        }
    }

    fn step(&mut self, direction: Direction) {
        let len = self.images.len();
        self.index = match direction {
            Direction::Next => (self.index + 1) % len,
            Direction::Prev => (self.index + len - 1) % len,
        };
    }

    pub fn current_image(&self) -> &str {
        &self.images[self.index]
    }

    pub fn shows_controls(&self) -> bool {
        self.images.len() > 1
    }

    pub fn view(&self) -> ModalView {
        ModalView {
            image: self.current_image().to_string(),
            caption: self.title.clone(),
            counter: counter_text(self.index, self.images.len()),
            show_controls: self.shows_controls(),
        }
    }
}

/// What the lightbox displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalView {
    pub image: String,
    pub caption: String,
    pub counter: String,
    /// Prev/next buttons are only shown for multi-image entries.
    pub show_controls: bool,
}

/// Current state of the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryState {
    Listing { page: usize },
    ModalOpen { entry: usize, image: usize },
}

/// One card in the listing, with its position in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card<'a> {
    pub index: usize,
    pub entry: &'a PortfolioEntry,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageButton {
    pub page: usize,
    pub active: bool,
}

/// Everything needed to draw one page of the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView<'a> {
    pub page: usize,
    pub page_count: usize,
    pub cards: Vec<Card<'a>>,
}

impl PageView<'_> {
    /// One button per page, the current page marked active.
    pub fn buttons(&self) -> Vec<PageButton> {
        (1..=self.page_count)
            .map(|page| PageButton {
                page,
                active: page == self.page,
            })
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct Gallery {
    catalog: Catalog,
    page_size: usize,
    current_page: usize,
    modal: Option<ModalBrowseState>,
}

impl Gallery {
    /// A gallery listing page 1. `page_size` of 0 is treated as 1.
    pub fn new(catalog: Catalog, page_size: usize) -> Self {
        Self {
            catalog,
            page_size: page_size.max(1),
            current_page: 1,
            modal: None,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Total number of entries, shown once in the summary counter.
    pub fn total(&self) -> usize {
        self.catalog.len()
    }

    pub fn state(&self) -> GalleryState {
        match &self.modal {
            Some(modal) => GalleryState::ModalOpen {
                entry: modal.entry,
                image: modal.index,
            },
            None => GalleryState::Listing {
                page: self.current_page,
            },
        }
    }

    pub fn modal(&self) -> Option<&ModalBrowseState> {
        self.modal.as_ref()
    }

    /// Show `page`, clamped into range, and make it the current page.
    pub fn render(&mut self, page: usize) -> PageView<'_> {
        let page_count = self.page_count();
        let clamped = clamp_page(page, page_count);
        if clamped != page {
            tracing::warn!(requested = page, page = clamped, "page out of range, clamped");
        }
        self.current_page = clamped;
        self.view()
    }

    /// The current page, without changing state.
    pub fn view(&self) -> PageView<'_> {
        let range = page_range(self.current_page, self.catalog.len(), self.page_size);
        let cards = self.catalog.entries()[range.clone()]
            .iter()
            .zip(range)
            .map(|(entry, index)| Card { index, entry })
            .collect();
        PageView {
            page: self.current_page,
            page_count: self.page_count(),
            cards,
        }
    }

    /// Open the lightbox on catalog entry `index` at its first image.
    ///
    /// Returns `None` (and changes nothing) for an unknown index.
    pub fn open_modal(
        &mut self,
        index: usize,
        lock: &mut ScrollLock,
    ) -> Option<(ModalView, Overflow)> {
        let entry = self.catalog.get(index)?;
        let modal = ModalBrowseState::open(index, entry);
        let view = modal.view();
        tracing::debug!(entry = index, images = modal.images.len(), "modal opened");
        self.modal = Some(modal);
        Some((view, lock.acquire(LockHolder::Modal)))
    }

    /// Move to the previous or next image, wrapping. `None` when closed.
    pub fn navigate(&mut self, direction: Direction) -> Option<ModalView> {
        let modal = self.modal.as_mut()?;
        modal.step(direction);
        Some(modal.view())
    }

    /// Close the lightbox and return to the listing on the same page.
    pub fn close_modal(&mut self, lock: &mut ScrollLock) -> Overflow {
        if self.modal.take().is_some() {
            tracing::debug!(page = self.current_page, "modal closed");
        }
        lock.release(LockHolder::Modal)
    }
}

impl PaginationSource for Gallery {
    type Item = PortfolioEntry;

    fn page_count(&self) -> usize {
        page_count(self.catalog.len(), self.page_size)
    }

    fn items_for_page(&self, page: usize) -> &[PortfolioEntry] {
        if page == 0 || page > PaginationSource::page_count(self) {
            return &[];
        }
        &self.catalog.entries()[page_range(page, self.catalog.len(), self.page_size)]
    }
}
