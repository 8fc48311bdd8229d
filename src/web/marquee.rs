use super::{Page, dom};
use crate::marquee::duplicate_track;

pub fn attach(page: &Page) {
    if let Some(track) = dom::by_id(&page.document, "sliderTrack") {
        track.set_inner_html(&duplicate_track(&track.inner_html()));
    }
}
