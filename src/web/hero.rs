use gloo::timers::callback::Interval;

use super::{Page, dom};
use crate::hero::{ACTIVE_SLIDE_CLASS, HeroRotator};

pub fn attach(page: &Page) {
    let slides = dom::query_all(&page.document, ".hero-slide");
    let Some(mut rotator) = HeroRotator::new(slides.len()) else {
        return;
    };
    Interval::new(page.config.hero.interval_ms, move || {
        let change = rotator.tick();
        dom::set_class(&slides[change.deactivate], ACTIVE_SLIDE_CLASS, false);
        dom::set_class(&slides[change.activate], ACTIVE_SLIDE_CLASS, true);
    })
    .forget();
}
