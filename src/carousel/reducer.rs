use crate::carousel::intent::CarouselIntent;
use crate::carousel::state::{CarouselState, Direction};
use crate::mvi::Reducer;

pub struct CarouselReducer;

impl Reducer for CarouselReducer {
    type State = CarouselState;
    type Intent = CarouselIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CarouselIntent::Load {
                mut items,
                autoplay,
                swipe_threshold_px,
            } => match items.len() {
                0 => CarouselState::Empty,
                1 => CarouselState::Inactive {
                    item: Box::new(items.remove(0)),
                },
                _ => CarouselState::Active {
                    items,
                    index: 0,
                    direction: Direction::Forward,
                    autoplay,
                    hovering: false,
                    touch_origin: None,
                    swipe_threshold_px,
                    epoch: 0,
                },
            },

            CarouselIntent::Next => step(state, Direction::Forward, Activity::Manual),
            CarouselIntent::Previous => step(state, Direction::Backward, Activity::Manual),

            CarouselIntent::GoTo(target) => match state {
                CarouselState::Active {
                    items,
                    index,
                    autoplay,
                    hovering,
                    swipe_threshold_px,
                    epoch,
                    ..
                } if target < items.len() => {
                    let direction = if target > index {
                        Direction::Forward
                    } else {
                        Direction::Backward
                    };
                    CarouselState::Active {
                        items,
                        index: target,
                        direction,
                        autoplay,
                        hovering,
                        touch_origin: None,
                        swipe_threshold_px,
                        epoch: epoch + 1,
                    }
                }
                other => other,
            },

            CarouselIntent::Tick => match state {
                CarouselState::Active {
                    autoplay: true,
                    hovering: false,
                    ..
                } => step(state, Direction::Forward, Activity::Timer),
                other => other,
            },

            CarouselIntent::PointerEnter => with_hovering(state, true),
            CarouselIntent::PointerLeave => with_hovering(state, false),

            CarouselIntent::TouchStart(x) => match state {
                CarouselState::Active {
                    items,
                    index,
                    direction,
                    autoplay,
                    hovering,
                    swipe_threshold_px,
                    epoch,
                    ..
                } => CarouselState::Active {
                    items,
                    index,
                    direction,
                    autoplay,
                    hovering,
                    touch_origin: Some(x),
                    swipe_threshold_px,
                    epoch,
                },
                other => other,
            },

            CarouselIntent::TouchEnd(x) => match state {
                CarouselState::Active {
                    items,
                    index,
                    direction,
                    autoplay,
                    hovering,
                    touch_origin: Some(start),
                    swipe_threshold_px,
                    epoch,
                } => {
                    let travel = start - x;
                    let cleared = CarouselState::Active {
                        items,
                        index,
                        direction,
                        autoplay,
                        hovering,
                        touch_origin: None,
                        swipe_threshold_px,
                        epoch,
                    };
                    if travel.abs() <= swipe_threshold_px {
                        // Below threshold: release without navigating.
                        cleared
                    } else if travel > 0.0 {
                        // Finger moved left: advance.
                        step(cleared, Direction::Forward, Activity::Manual)
                    } else {
                        step(cleared, Direction::Backward, Activity::Manual)
                    }
                }
                other => other,
            },
        }
    }
}

/// Whether a step came from the user or from the autoplay timer.
/// Manual steps bump the epoch so the timer restarts its interval.
#[derive(PartialEq)]
enum Activity {
    Manual,
    Timer,
}

fn step(state: CarouselState, direction: Direction, activity: Activity) -> CarouselState {
    match state {
        CarouselState::Active {
            items,
            index,
            autoplay,
            hovering,
            swipe_threshold_px,
            epoch,
            ..
        } => {
            let len = items.len();
            let index = match direction {
                Direction::Forward => (index + 1) % len,
                Direction::Backward => (index + len - 1) % len,
            };
            let epoch = if activity == Activity::Manual {
                epoch + 1
            } else {
                epoch
            };
            CarouselState::Active {
                items,
                index,
                direction,
                autoplay,
                hovering,
                touch_origin: None,
                swipe_threshold_px,
                epoch,
            }
        }
        other => other,
    }
}

fn with_hovering(state: CarouselState, hovering: bool) -> CarouselState {
    match state {
        CarouselState::Active {
            items,
            index,
            direction,
            autoplay,
            touch_origin,
            swipe_threshold_px,
            epoch,
            ..
        } => CarouselState::Active {
            items,
            index,
            direction,
            autoplay,
            hovering,
            touch_origin,
            swipe_threshold_px,
            epoch,
        },
        other => other,
    }
}
