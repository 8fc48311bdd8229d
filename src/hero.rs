//! Hero image slider: one active slide, advancing on a fixed interval.

/// Class carried by the single visible slide.
pub const ACTIVE_SLIDE_CLASS: &str = "active";

/// Result of one rotation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideChange {
    pub deactivate: usize,
    pub activate: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroRotator {
    index: usize,
    count: usize,
}

impl HeroRotator {
    /// A rotator over `count` slides, starting at slide 0. `None` when there
    /// are no slides to rotate.
    pub fn new(count: usize) -> Option<Self> {
        (count > 0).then_some(Self { index: 0, count })
    }

    pub fn active(&self) -> usize {
        self.index
    }

    /// Advance to the next slide, wrapping at the end.
    pub fn tick(&mut self) -> SlideChange {
        let deactivate = self.index;
        self.index = (self.index + 1) % self.count;
        SlideChange {
            deactivate,
            activate: self.index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_slides_no_rotator() {
        assert!(HeroRotator::new(0).is_none());
    }

    #[test]
    fn starts_at_first_slide() {
        let rotator = HeroRotator::new(3).unwrap();
        assert_eq!(rotator.active(), 0);
    }

    #[test]
    fn active_index_after_k_ticks() {
        for count in 1..=5 {
            let mut rotator = HeroRotator::new(count).unwrap();
            for k in 1..=12 {
                rotator.tick();
                assert_eq!(rotator.active(), k % count);
            }
        }
    }

    #[test]
    fn tick_hands_over_between_consecutive_slides() {
        let mut rotator = HeroRotator::new(3).unwrap();
        assert_eq!(
            rotator.tick(),
            SlideChange {
                deactivate: 0,
                activate: 1
            }
        );
        rotator.tick();
        assert_eq!(
            rotator.tick(),
            SlideChange {
                deactivate: 2,
                activate: 0
            }
        );
    }

    #[test]
    fn single_slide_stays_active() {
        let mut rotator = HeroRotator::new(1).unwrap();
        let change = rotator.tick();
        assert_eq!(change.deactivate, 0);
        assert_eq!(change.activate, 0);
    }
}
