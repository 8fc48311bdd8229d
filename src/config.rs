//! Site configuration module.
//!
//! Handles loading, validating, and merging `after-site.toml`. Every knob the
//! browser components use (thresholds, delays, page size, labels) lives here
//! so the markup and timing can be tuned without touching code. Stock
//! defaults are overridden by a sparse user file.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [header]
//! scroll_threshold = 50          # px scrolled before the header turns solid
//!
//! [navigation]
//! home_page = "index.html"       # page name used when the path is empty
//!
//! [transition]
//! delay_ms = 800                 # fade-out duration before navigating
//! fade_class = "fade-out"
//! fade_in_animation = "fadeInPage 1.2s ease-out forwards"
//!
//! [reveal]
//! threshold = 0.1                # visible fraction that triggers a reveal
//! offset_px = 40                 # initial downward offset of hidden sections
//! transition = "all 1.2s cubic-bezier(0.2, 0, 0.2, 1)"
//!
//! [hero]
//! interval_ms = 3000
//!
//! [gallery]
//! page_size = 12
//! scroll_offset_px = 100
//! overlay_label = "자세히 보기"
//!
//! [contact]
//! acknowledgment = "문의가 정상적으로 접수되었습니다. 담당자가 곧 연락드리겠습니다."
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// File name looked up by [`load_config`].
pub const CONFIG_FILE: &str = "after-site.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `after-site.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub header: HeaderConfig,
    pub navigation: NavigationConfig,
    pub transition: TransitionConfig,
    pub reveal: RevealConfig,
    pub hero: HeroConfig,
    pub gallery: GalleryConfig,
    pub contact: ContactConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gallery.page_size == 0 {
            return Err(ConfigError::Validation(
                "gallery.page_size must be greater than 0".into(),
            ));
        }
        if self.hero.interval_ms == 0 {
            return Err(ConfigError::Validation(
                "hero.interval_ms must be greater than 0".into(),
            ));
        }
        if !(self.reveal.threshold > 0.0 && self.reveal.threshold <= 1.0) {
            return Err(ConfigError::Validation(
                "reveal.threshold must be in (0, 1]".into(),
            ));
        }
        if self.navigation.home_page.trim().is_empty() {
            return Err(ConfigError::Validation(
                "navigation.home_page must not be empty".into(),
            ));
        }
        if self.transition.fade_class.trim().is_empty() {
            return Err(ConfigError::Validation(
                "transition.fade_class must not be empty".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeaderConfig {
    /// Vertical scroll offset above which the header gets `scrolled`.
    pub scroll_threshold: f64,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: 50.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavigationConfig {
    /// Page name assumed when the location path has no file segment.
    pub home_page: String,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            home_page: "index.html".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TransitionConfig {
    /// Time between applying the fade class and navigating.
    pub delay_ms: u32,
    /// Class added to `<body>` while fading out.
    pub fade_class: String,
    /// `animation` value replayed after a back/forward cache restore.
    pub fade_in_animation: String,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            delay_ms: 800,
            fade_class: "fade-out".to_string(),
            fade_in_animation: "fadeInPage 1.2s ease-out forwards".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RevealConfig {
    /// Fraction of a section that must be visible before it reveals.
    pub threshold: f64,
    /// Initial `translateY` offset of deferred sections, in px.
    pub offset_px: u32,
    /// CSS `transition` applied to deferred sections.
    pub transition: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            offset_px: 40,
            transition: "all 1.2s cubic-bezier(0.2, 0, 0.2, 1)".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeroConfig {
    pub interval_ms: u32,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self { interval_ms: 3000 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    /// Cards per page (3 columns x 4 rows).
    pub page_size: usize,
    /// Gap kept above the gallery when scrolling to it after paging.
    pub scroll_offset_px: f64,
    /// Text on the hover overlay of each card.
    pub overlay_label: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            page_size: 12,
            scroll_offset_px: 100.0,
            overlay_label: "자세히 보기".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactConfig {
    /// Message shown after the inquiry form is submitted.
    pub acknowledgment: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            acknowledgment: "문의가 정상적으로 접수되었습니다. 담당자가 곧 연락드리겠습니다."
                .to_string(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// Used as the base layer for merging user overrides on top.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(SiteConfig::default())
        .map_err(|e| ConfigError::Validation(format!("stock config does not serialize: {e}")))
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Parse a config document and resolve it against the stock defaults.
pub fn parse_config(content: &str) -> Result<SiteConfig, ConfigError> {
    let overlay: toml::Value = toml::from_str(content)?;
    resolve_config(stock_defaults_value()?, Some(overlay))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from a file path.
///
/// A missing file yields the stock defaults; a present file is merged on top
/// of them, rejecting unknown keys and validating the result.
pub fn load_config(path: &Path) -> Result<SiteConfig, ConfigError> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using stock defaults");
        return resolve_config(stock_defaults_value()?, None);
    }
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Returns a fully-commented stock `after-site.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# After Site Configuration
# ========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys cause an error.

# ---------------------------------------------------------------------------
# Header
# ---------------------------------------------------------------------------
[header]
# Pixels scrolled before the header switches to its "scrolled" style.
scroll_threshold = 50.0

# ---------------------------------------------------------------------------
# Navigation
# ---------------------------------------------------------------------------
[navigation]
# Page name assumed when the URL path ends in "/".
home_page = "index.html"

# ---------------------------------------------------------------------------
# Page transitions
# ---------------------------------------------------------------------------
[transition]
# Milliseconds between starting the fade-out and navigating.
delay_ms = 800
fade_class = "fade-out"
# Animation replayed when a page is restored from the back/forward cache.
fade_in_animation = "fadeInPage 1.2s ease-out forwards"

# ---------------------------------------------------------------------------
# Scroll reveal
# ---------------------------------------------------------------------------
[reveal]
# Fraction of a section that must be visible before it fades in.
threshold = 0.1
offset_px = 40
transition = "all 1.2s cubic-bezier(0.2, 0, 0.2, 1)"

# ---------------------------------------------------------------------------
# Hero slider
# ---------------------------------------------------------------------------
[hero]
interval_ms = 3000

# ---------------------------------------------------------------------------
# Portfolio gallery
# ---------------------------------------------------------------------------
[gallery]
# Cards per page.
page_size = 12
# Space kept above the gallery when scrolling to it after changing page.
scroll_offset_px = 100.0
overlay_label = "자세히 보기"

# ---------------------------------------------------------------------------
# Contact form
# ---------------------------------------------------------------------------
[contact]
acknowledgment = "문의가 정상적으로 접수되었습니다. 담당자가 곧 연락드리겠습니다."
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_matches_site_behavior() {
        let config = SiteConfig::default();
        assert_eq!(config.header.scroll_threshold, 50.0);
        assert_eq!(config.navigation.home_page, "index.html");
        assert_eq!(config.transition.delay_ms, 800);
        assert_eq!(config.reveal.threshold, 0.1);
        assert_eq!(config.hero.interval_ms, 3000);
        assert_eq!(config.gallery.page_size, 12);
        assert_eq!(config.gallery.scroll_offset_px, 100.0);
    }

    #[test]
    fn parse_partial_config() {
        let config = parse_config(
            r#"
[gallery]
page_size = 6
"#,
        )
        .unwrap();
        assert_eq!(config.gallery.page_size, 6);
        // Untouched keys keep their defaults
        assert_eq!(config.gallery.scroll_offset_px, 100.0);
        assert_eq!(config.transition.delay_ms, 800);
    }

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(&tmp.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config.hero.interval_ms, 3000);
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE);
        fs::write(
            &path,
            r#"
[transition]
delay_ms = 500

[hero]
interval_ms = 5000
"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.transition.delay_ms, 500);
        assert_eq!(config.hero.interval_ms, 5000);
        assert_eq!(config.transition.fade_class, "fade-out");
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE);
        fs::write(&path, "this is not valid toml [[[").unwrap();

        let result = load_config(&path);
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn unknown_key_rejected() {
        let result = parse_config(
            r#"
[gallery]
pagesize = 12
"#,
        );
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }

    #[test]
    fn unknown_section_rejected() {
        assert!(parse_config("[footer]\nheight = 3\n").is_err());
    }

    #[test]
    fn validate_zero_page_size() {
        let mut config = SiteConfig::default();
        config.gallery.page_size = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("page_size"));
    }

    #[test]
    fn validate_threshold_bounds() {
        let mut config = SiteConfig::default();
        config.reveal.threshold = 1.0;
        assert!(config.validate().is_ok());

        config.reveal.threshold = 0.0;
        assert!(config.validate().is_err());

        config.reveal.threshold = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_zero_interval() {
        let mut config = SiteConfig::default();
        config.hero.interval_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_blank_home_page() {
        let mut config = SiteConfig::default();
        config.navigation.home_page = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn parse_config_validates_values() {
        let result = parse_config("[hero]\ninterval_ms = 0\n");
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn merge_toml_table_merge() {
        let base: toml::Value = toml::from_str(
            r#"
[gallery]
page_size = 12
scroll_offset_px = 100.0
"#,
        )
        .unwrap();
        let overlay: toml::Value = toml::from_str("[gallery]\npage_size = 9\n").unwrap();
        let merged = merge_toml(base, overlay);
        let gallery = merged.get("gallery").unwrap();
        assert_eq!(gallery.get("page_size").unwrap().as_integer(), Some(9));
        assert_eq!(
            gallery.get("scroll_offset_px").unwrap().as_float(),
            Some(100.0)
        );
    }

    #[test]
    fn merge_toml_scalar_replaces_table() {
        let base: toml::Value = toml::from_str("[hero]\ninterval_ms = 3000\n").unwrap();
        let overlay: toml::Value = toml::from_str("hero = 1\n").unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged.get("hero").unwrap().as_integer(), Some(1));
    }

    #[test]
    fn stock_config_toml_roundtrips_to_defaults() {
        let config: SiteConfig = toml::from_str(stock_config_toml()).unwrap();
        let defaults = SiteConfig::default();
        assert_eq!(config.gallery.page_size, defaults.gallery.page_size);
        assert_eq!(config.gallery.overlay_label, defaults.gallery.overlay_label);
        assert_eq!(config.contact.acknowledgment, defaults.contact.acknowledgment);
        assert_eq!(
            config.transition.fade_in_animation,
            defaults.transition.fade_in_animation
        );
        assert_eq!(config.reveal.transition, defaults.reveal.transition);
    }

    #[test]
    fn stock_defaults_value_has_all_sections() {
        let val = stock_defaults_value().unwrap();
        for section in [
            "header",
            "navigation",
            "transition",
            "reveal",
            "hero",
            "gallery",
            "contact",
        ] {
            assert!(val.get(section).is_some(), "missing [{section}]");
        }
    }
}
