//! Browser binding.
//!
//! Wires the pure components to the DOM. Each component looks up the
//! elements it needs and quietly skips itself when they are missing, so the
//! same bundle serves every page of the site.
//!
//! The host page loads the bundle as a module and calls `start()` (stock
//! settings) or `startWith(configToml, catalogToml)`:
//!
//! ```js
//! import init, { start } from "./pkg/after_site.js";
//! await init();
//! start();
//! ```
//!
//! Listeners and timers live for the lifetime of the page and are forgotten
//! after registration.

mod chrome;
mod contact;
mod dom;
mod gallery;
mod hero;
mod marquee;
mod reveal;
mod transition;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, Window};

use crate::catalog::Catalog;
use crate::config::{self, SiteConfig};
use crate::scroll_lock::{Overflow, ScrollLock};

/// Handles shared by every component on the page.
#[derive(Clone)]
pub(crate) struct Page {
    pub window: Window,
    pub document: Document,
    pub body: HtmlElement,
    pub config: Rc<SiteConfig>,
    pub scroll_lock: Rc<RefCell<ScrollLock>>,
}

impl Page {
    fn new(config: SiteConfig) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let body = document
            .body()
            .ok_or_else(|| JsValue::from_str("no body"))?;
        Ok(Self {
            window,
            document,
            body,
            config: Rc::new(config),
            scroll_lock: Rc::new(RefCell::new(ScrollLock::new())),
        })
    }

    /// Write the scroll lock's current state to `body.style.overflow`.
    pub fn apply_overflow(&self, overflow: Overflow) {
        dom::set_style(&self.body, "overflow", overflow.as_css());
    }
}

/// Attach every component using the stock configuration and catalog.
#[wasm_bindgen]
pub fn start() -> Result<(), JsValue> {
    let catalog = Catalog::stock().map_err(js_error)?;
    attach(SiteConfig::default(), catalog)
}

/// Attach every component with a custom `after-site.toml` and catalog.
/// Either argument may be empty to use the stock one.
#[wasm_bindgen(js_name = startWith)]
pub fn start_with(config_toml: &str, catalog_toml: &str) -> Result<(), JsValue> {
    let config = if config_toml.trim().is_empty() {
        SiteConfig::default()
    } else {
        config::parse_config(config_toml).map_err(js_error)?
    };
    let catalog = if catalog_toml.trim().is_empty() {
        Catalog::stock()
    } else {
        Catalog::parse(catalog_toml)
    }
    .map_err(js_error)?;
    attach(config, catalog)
}

fn js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn attach(config: SiteConfig, catalog: Catalog) -> Result<(), JsValue> {
    #[cfg(feature = "panic-hook")]
    console_error_panic_hook::set_once();

    let page = Page::new(config)?;
    let current_page = chrome::attach(&page);
    contact::attach(&page);
    reveal::attach(&page)?;
    transition::attach(&page, current_page);
    marquee::attach(&page);
    hero::attach(&page);
    gallery::attach(&page, catalog);
    tracing::debug!("site components attached");
    Ok(())
}
