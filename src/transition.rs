//! Page transitions.
//!
//! Internal page links fade the page out before navigating. Everything else
//! (external URLs, new-tab links, the page's own link, anchors) navigates
//! normally. When the page is shown again, including restores from the
//! back/forward cache, the fade is cleared so the page never stays invisible.

use std::time::Duration;

/// A clicked anchor, reduced to the attributes that decide interception.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkClick<'a> {
    pub href: Option<&'a str>,
    pub target: Option<&'a str>,
}

/// How a link click should be handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickAction {
    /// Let the browser follow the link.
    Immediate,
    /// Prevent default, apply the fade, navigate to `href` after `delay`.
    FadeThenNavigate { href: String, delay: Duration },
}

/// Whether `href` points at another page of this site.
pub fn is_internal_page(href: &str) -> bool {
    href.ends_with(".html") && !href.starts_with("http")
}

/// Decide whether a click is intercepted for the fade-out transition.
pub fn classify_click(click: LinkClick<'_>, current_page: &str, delay: Duration) -> ClickAction {
    let Some(href) = click.href else {
        return ClickAction::Immediate;
    };
    if is_internal_page(href) && href != current_page && click.target != Some("_blank") {
        ClickAction::FadeThenNavigate {
            href: href.to_string(),
            delay,
        }
    } else {
        ClickAction::Immediate
    }
}

/// One phase of replaying the page fade-in after a cache restore.
///
/// The animation only restarts if it is cleared and the layout flushed
/// before the animation is assigned again, so the two phases must be applied
/// in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FadeInReplay {
    /// Set `animation: none` and force a layout flush.
    Reset,
    /// Assign the fade-in animation.
    Commit(String),
}

/// Effects to apply when the page is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageShow {
    /// Always true: the fade class is removed on every show.
    pub clear_fade: bool,
    /// Empty for fresh loads, `[Reset, Commit]` for cache restores.
    pub replay: Vec<FadeInReplay>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TransitionState {
    #[default]
    Idle,
    FadingOut {
        href: String,
    },
}

/// Tracks the fade-out in progress, if any.
#[derive(Debug, Clone)]
pub struct TransitionController {
    state: TransitionState,
    delay: Duration,
    fade_in_animation: String,
}

impl TransitionController {
    pub fn new(delay: Duration, fade_in_animation: impl Into<String>) -> Self {
        Self {
            state: TransitionState::Idle,
            delay,
            fade_in_animation: fade_in_animation.into(),
        }
    }

    pub fn state(&self) -> &TransitionState {
        &self.state
    }

    /// Handle a click. An intercepted click moves to `FadingOut`; the caller
    /// applies the fade class right away and navigates after the delay.
    pub fn on_click(&mut self, click: LinkClick<'_>, current_page: &str) -> ClickAction {
        let action = classify_click(click, current_page, self.delay);
        if let ClickAction::FadeThenNavigate { href, .. } = &action {
            tracing::debug!(%href, "fading out before navigation");
            self.state = TransitionState::FadingOut { href: href.clone() };
        }
        action
    }

    /// Called when the timer fires; returns the URL to navigate to.
    pub fn on_delay_elapsed(&mut self) -> Option<String> {
        match std::mem::take(&mut self.state) {
            TransitionState::FadingOut { href } => Some(href),
            TransitionState::Idle => None,
        }
    }

    /// Handle `pageshow`. `persisted` is true when the page came from the
    /// back/forward cache rather than a fresh load.
    pub fn on_page_show(&mut self, persisted: bool) -> PageShow {
        self.state = TransitionState::Idle;
        let replay = if persisted {
            tracing::debug!("page restored from cache, replaying fade-in");
            vec![
                FadeInReplay::Reset,
                FadeInReplay::Commit(self.fade_in_animation.clone()),
            ]
        } else {
            Vec::new()
        };
        PageShow {
            clear_fade: true,
            replay,
        }
    }
}
