use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::carousel::intent::CarouselIntent;
use crate::carousel::reducer::CarouselReducer;
use crate::carousel::state::CarouselState;
use crate::mvi::Reducer;
use crate::view::ViewHandle;

/// Shared carousel handle: event sources dispatch intents, the
/// presentation layer reads state snapshots, the autoplay driver
/// observes activity through a watch channel.
#[derive(Clone)]
pub struct Carousel {
    state: Arc<Mutex<CarouselState>>,
    activity: Arc<watch::Sender<u64>>,
}

impl Carousel {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(0);
        Self {
            state: Arc::new(Mutex::new(CarouselState::default())),
            activity: Arc::new(tx),
        }
    }

    /// Run an intent through the reducer and publish the new epoch.
    /// Returns the resulting state snapshot.
    pub fn dispatch(&self, intent: CarouselIntent) -> CarouselState {
        let mut state = self.state.lock();
        let next = CarouselReducer::reduce(state.clone(), intent);
        *state = next.clone();
        drop(state);

        // Unconditional send: every dispatch wakes the driver so the
        // full interval re-elapses after any interaction.
        self.activity.send_replace(next.epoch());
        next
    }

    pub fn state(&self) -> CarouselState {
        self.state.lock().clone()
    }

    fn subscribe(&self) -> watch::Receiver<u64> {
        self.activity.subscribe()
    }
}

impl Default for Carousel {
    fn default() -> Self {
        Self::new()
    }
}

/// Timer task firing `Tick` every `interval` while the owning view is
/// active and the carousel has something to rotate.
///
/// Spawn it after the project list has been loaded. The task ends on
/// view deactivation, or when a reload leaves the carousel without an
/// autoplay-worthy list (0–1 items, or autoplay disabled). Any
/// dispatch restarts the interval from zero, so 5 seconds always
/// re-elapse after manual navigation.
pub fn spawn_autoplay(
    carousel: Carousel,
    view: ViewHandle,
    interval: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut activity = carousel.subscribe();
        loop {
            if !carousel.state().wants_autoplay() {
                debug!("autoplay stopping: nothing to rotate");
                break;
            }
            tokio::select! {
                _ = view.wait_deactivated() => {
                    debug!("autoplay stopping: view deactivated");
                    break;
                }
                // Any interaction restarts the timer. A tick's own
                // dispatch also lands here on the next iteration, which
                // just restarts the freshly started interval.
                _ = activity.changed() => {}
                _ = tokio::time::sleep(interval) => {
                    carousel.dispatch(CarouselIntent::Tick);
                }
            }
        }
    })
}
