//! Chronological archive index derived from the fetched post list.

mod grouper;

pub use grouper::{adjacent, ChronoIndex, MonthGroup, YearGroup};
