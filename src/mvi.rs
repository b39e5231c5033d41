//! Minimal MVI contract: immutable view state, intents, pure reducers.
//!
//! The carousel is the only stateful control in this crate; keeping the
//! contract as traits keeps its transitions testable without any UI
//! framework attached.

/// Marker trait for view state objects.
///
/// States are immutable snapshots: cloning produces the next state,
/// `PartialEq` detects whether a re-render is needed.
pub trait ViewState: Clone + PartialEq + Default + Send + 'static {}

/// Marker trait for intents: user actions (taps, key presses,
/// gestures) and system events (timer ticks).
pub trait Intent: Send + 'static {}

/// Transforms state in response to intents.
///
/// `reduce` is the only place transitions happen and must stay a pure
/// function of `(state, intent)`.
pub trait Reducer {
    type State: ViewState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
