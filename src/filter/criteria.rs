use std::collections::BTreeMap;

/// A facet selection: the `All` wildcard matches everything, a value
/// must match the item's field exactly.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FacetSelection {
    #[default]
    All,
    Value(String),
}

impl FacetSelection {
    pub fn is_all(&self) -> bool {
        matches!(self, FacetSelection::All)
    }
}

/// Free-text search plus categorical facet selections, applied as a
/// pure predicate over a fetched collection.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterCriteria {
    pub search: String,
    pub facets: BTreeMap<String, FacetSelection>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_facet(mut self, facet: impl Into<String>, value: impl Into<String>) -> Self {
        self.facets
            .insert(facet.into(), FacetSelection::Value(value.into()));
        self
    }

    /// True when the criteria cannot exclude anything.
    pub fn is_passthrough(&self) -> bool {
        self.search.is_empty() && self.facets.values().all(FacetSelection::is_all)
    }
}
