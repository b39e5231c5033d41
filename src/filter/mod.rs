//! Predicate-based list filtering: free-text search plus facets.

mod criteria;
mod engine;

pub use criteria::{FacetSelection, FilterCriteria};
pub use engine::{apply, Facetable};
