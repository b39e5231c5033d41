//! Explicit mount/unmount lifecycle for routed views.

mod lifecycle;
mod scope;

pub use lifecycle::{ViewHandle, ViewLifecycle};
pub use scope::ViewScope;
