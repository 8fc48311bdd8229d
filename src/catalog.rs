//! Portfolio catalog.
//!
//! The catalog is authored as TOML (`[[entries]]` tables) and compiled into
//! the bundle, so the browser never fetches it. Entry order in the file is
//! display order; new work goes at the top.
//!
//! ```toml
//! [[entries]]
//! title = "Nexus launch showcase"
//! description = "Media facade and vehicle performance"
//! thumbnail = "image/portfolio/1.jpg"
//! images = ["image/portfolio/1.jpg", "image/portfolio/2.jpg"]  # optional
//! ```
//!
//! Every entry has at least one viewable image: when `images` is absent or
//! empty it becomes `[thumbnail]` at load time, so the lightbox never sees an
//! empty set.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

const STOCK_CATALOG: &str = include_str!("../static/portfolio.toml");

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Catalog validation error: {0}")]
    Validation(String),
}

/// A single portfolio project shown as a card and browsable in the lightbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortfolioEntry {
    pub title: String,
    pub description: String,
    pub thumbnail: String,
    /// Never empty.
    pub images: Vec<String>,
}

impl PortfolioEntry {
    /// Build an entry, falling back to `[thumbnail]` for an empty image list.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        thumbnail: impl Into<String>,
        images: Vec<String>,
    ) -> Self {
        let thumbnail = thumbnail.into();
        let images = if images.is_empty() {
            vec![thumbnail.clone()]
        } else {
            images
        };
        Self {
            title: title.into(),
            description: description.into(),
            thumbnail,
            images,
        }
    }

    /// Whether the lightbox needs prev/next controls for this entry.
    pub fn has_multiple_images(&self) -> bool {
        self.images.len() > 1
    }
}

/// On-disk shape of an entry before normalization.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawEntry {
    title: String,
    #[serde(default)]
    description: String,
    thumbnail: String,
    #[serde(default)]
    images: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    #[serde(default)]
    entries: Vec<RawEntry>,
}

/// The ordered, read-only list of portfolio entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Catalog {
    entries: Vec<PortfolioEntry>,
}

impl Catalog {
    pub fn from_entries(entries: Vec<PortfolioEntry>) -> Self {
        Self { entries }
    }

    /// The catalog compiled into the crate from `static/portfolio.toml`.
    pub fn stock() -> Result<Self, CatalogError> {
        Self::parse(STOCK_CATALOG)
    }

    /// Parse and validate a TOML catalog document.
    pub fn parse(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(content)?;
        let mut entries = Vec::with_capacity(file.entries.len());
        for (idx, raw) in file.entries.into_iter().enumerate() {
            if raw.title.trim().is_empty() {
                return Err(CatalogError::Validation(format!(
                    "entry {} has an empty title",
                    idx + 1
                )));
            }
            if raw.thumbnail.trim().is_empty() {
                return Err(CatalogError::Validation(format!(
                    "entry {} ({}) has an empty thumbnail",
                    idx + 1,
                    raw.title
                )));
            }
            let images = raw.images.unwrap_or_default();
            if images.iter().any(|path| path.trim().is_empty()) {
                return Err(CatalogError::Validation(format!(
                    "entry {} ({}) lists an empty image path",
                    idx + 1,
                    raw.title
                )));
            }
            entries.push(PortfolioEntry::new(
                raw.title,
                raw.description,
                raw.thumbnail,
                images,
            ));
        }
        tracing::debug!(entries = entries.len(), "catalog parsed");
        Ok(Self { entries })
    }

    /// Load a catalog file from disk.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn entries(&self) -> &[PortfolioEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&PortfolioEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
