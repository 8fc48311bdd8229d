//! Infinite logo slider.
//!
//! The track's CSS animation translates it by exactly one copy's width, so
//! appending a single duplicate makes the loop seamless.

/// Return the track content followed by one copy of itself.
pub fn duplicate_track(content: &str) -> String {
    let mut doubled = String::with_capacity(content.len() * 2);
    doubled.push_str(content);
    doubled.push_str(content);
    doubled
}
