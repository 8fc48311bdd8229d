//! Scroll-triggered section reveal.
//!
//! Banner sections (`hero`, `sub-visual`) are visible from the start. Every
//! other section starts hidden and offset, and fades in the first time enough
//! of it scrolls into view. A revealed section never hides again.

use std::collections::HashSet;

use crate::config::RevealConfig;

/// Sections with either class are shown immediately.
pub const IMMEDIATE_CLASSES: [&str; 2] = ["hero", "sub-visual"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealKind {
    Immediate,
    Deferred,
}

/// Classify a section by its class names.
pub fn classify_section<'a, I>(classes: I) -> RevealKind
where
    I: IntoIterator<Item = &'a str>,
{
    if classes
        .into_iter()
        .any(|class| IMMEDIATE_CLASSES.contains(&class))
    {
        RevealKind::Immediate
    } else {
        RevealKind::Deferred
    }
}

/// Inline style values for a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionStyle {
    pub opacity: &'static str,
    pub transform: String,
    pub transition: Option<String>,
}

impl SectionStyle {
    pub fn visible() -> Self {
        Self {
            opacity: "1",
            transform: "translateY(0)".to_string(),
            transition: None,
        }
    }

    pub fn hidden(config: &RevealConfig) -> Self {
        Self {
            opacity: "0",
            transform: format!("translateY({}px)", config.offset_px),
            transition: Some(config.transition.clone()),
        }
    }

    /// Starting style for a section of the given kind.
    pub fn initial(kind: RevealKind, config: &RevealConfig) -> Self {
        match kind {
            RevealKind::Immediate => Self::visible(),
            RevealKind::Deferred => Self::hidden(config),
        }
    }
}

/// One-shot reveal bookkeeping for deferred sections, keyed by section index.
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    pending: HashSet<usize>,
    revealed: HashSet<usize>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a deferred section for observation.
    pub fn watch(&mut self, id: usize) {
        if !self.revealed.contains(&id) {
            self.pending.insert(id);
        }
    }

    /// Handle an intersection notification. Returns true exactly once per
    /// section: the first time it is reported intersecting.
    pub fn on_intersection(&mut self, id: usize, is_intersecting: bool) -> bool {
        if !is_intersecting || !self.pending.remove(&id) {
            return false;
        }
        self.revealed.insert(id);
        tracing::trace!(section = id, "section revealed");
        true
    }

    pub fn is_revealed(&self, id: usize) -> bool {
        self.revealed.contains(&id)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}
