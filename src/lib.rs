//! # After Site
//!
//! Client-side presentation logic for the After Entertainment marketing site:
//! header scroll styling, active-nav highlighting, the mobile menu, the
//! inquiry form, scroll-triggered reveals, page-transition fades, the logo
//! marquee, the hero slider, and the paginated portfolio gallery with its
//! lightbox.
//!
//! # Architecture: Pure Core, Thin Binding
//!
//! ```text
//! catalog.toml ──▶ Catalog ──▶ Gallery ──▶ PageView / ModalView ──▶ render (maud)
//!                                  ▲                                   │
//!          DOM events ──▶ web ─────┘          innerHTML, classes ◀─────┘
//! ```
//!
//! Every component is a small state object with pure operations that return
//! what should change on the page. The `web` binding (compiled for
//! `wasm32` only) owns those objects, feeds them DOM events and timer ticks,
//! and copies the results back into the document. Nothing in the core touches
//! the DOM, so the whole behavior is tested natively.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`chrome`] | Header scroll state, active nav link, mobile menu |
//! | [`transition`] | Fade-out before internal navigation, back/forward cache restore |
//! | [`reveal`] | One-shot fade-in of sections entering the viewport |
//! | [`marquee`] | Track duplication for the infinite logo slider |
//! | [`hero`] | Timed hero slide rotation |
//! | [`gallery`] | Portfolio pagination and lightbox state machine |
//! | [`catalog`] | Portfolio entries loaded from TOML, stock catalog embedded |
//! | [`render`] | Maud markup for gallery cards and pagination |
//! | [`contact`] | Inquiry form acknowledgment |
//! | [`scroll_lock`] | Page scroll lock shared by the menu and the lightbox |
//! | [`config`] | `after-site.toml` loading, validation, and stock defaults |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Scroll Lock Is Reference Counted
//!
//! The mobile menu and the lightbox both stop the page from scrolling. Each
//! holds the lock under its own name and the page unlocks only when neither
//! does, so closing one never frees scrolling while the other is still open.
//!
//! ## Markup From Maud
//!
//! Gallery cards are rendered with Maud rather than assembled with DOM calls.
//! The same functions serve the browser bundle and the CLI preview, and all
//! catalog text is escaped on the way in.
//!
//! ## Catalog As Configuration
//!
//! The portfolio lives in `static/portfolio.toml` and is compiled into the
//! bundle. Adding a project is a one-table edit at the top of the file; no
//! request is made at runtime.

pub mod catalog;
pub mod chrome;
pub mod config;
pub mod contact;
pub mod gallery;
pub mod hero;
pub mod marquee;
pub mod output;
pub mod render;
pub mod reveal;
pub mod scroll_lock;
pub mod transition;

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::{start, start_with};

#[cfg(test)]
pub(crate) mod test_helpers;
