use crate::api::Project;
use crate::mvi::Intent;

/// Navigation keys the carousel reacts to while its view is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowLeft,
    ArrowRight,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CarouselIntent {
    /// Fetched projects arrived; (re)initialize at index 0.
    Load {
        items: Vec<Project>,
        autoplay: bool,
        swipe_threshold_px: f32,
    },
    Next,
    Previous,
    /// Jump to a specific index. Out-of-range is rejected silently.
    GoTo(usize),
    /// Autoplay timer fired.
    Tick,
    PointerEnter,
    PointerLeave,
    /// Touch sequence started at the given x coordinate.
    TouchStart(f32),
    /// Touch released at the given x coordinate.
    TouchEnd(f32),
}

impl Intent for CarouselIntent {}

impl CarouselIntent {
    /// Keyboard mapping: left arrow steps back, right arrow forward.
    pub fn from_key(key: NavKey) -> Self {
        match key {
            NavKey::ArrowLeft => CarouselIntent::Previous,
            NavKey::ArrowRight => CarouselIntent::Next,
        }
    }
}
