use crate::api::{Project, Solution};
use crate::filter::criteria::{FacetSelection, FilterCriteria};

/// Items a [`FilterCriteria`] can be applied to.
pub trait Facetable {
    /// Text the free-text search runs over, lowercased by the engine.
    fn search_text(&self) -> String;

    /// Whether this item's `name` facet equals `expected`. The default
    /// rejects unknown facets; multi-valued facets override this.
    fn matches_facet(&self, name: &str, expected: &str) -> bool;
}

/// Pure, order-preserving reduction of `items` by `criteria`.
///
/// An item matches when the search text is empty or contained
/// case-insensitively in its searchable text, and every facet with a
/// concrete selection equals the item's value exactly. O(n × f) per
/// call; the expected collections are tens to low hundreds of records.
pub fn apply<'a, T: Facetable>(items: &'a [T], criteria: &FilterCriteria) -> Vec<&'a T> {
    let needle = criteria.search.to_lowercase();
    items
        .iter()
        .filter(|item| matches(*item, &needle, criteria))
        .collect()
}

fn matches<T: Facetable>(item: &T, needle: &str, criteria: &FilterCriteria) -> bool {
    if !needle.is_empty() && !item.search_text().to_lowercase().contains(needle) {
        return false;
    }
    criteria
        .facets
        .iter()
        .all(|(name, selection)| match selection {
            FacetSelection::All => true,
            FacetSelection::Value(expected) => item.matches_facet(name, expected),
        })
}

impl Facetable for Solution {
    fn search_text(&self) -> String {
        format!("{} {}", self.title, self.problem_number)
    }

    fn matches_facet(&self, name: &str, expected: &str) -> bool {
        match name {
            "difficulty" => self.difficulty == expected,
            "language" => self.language == expected,
            _ => false,
        }
    }
}

impl Facetable for Project {
    fn search_text(&self) -> String {
        format!("{} {}", self.title, self.description)
    }

    fn matches_facet(&self, name: &str, expected: &str) -> bool {
        match name {
            // Tags are multi-valued: any tag equal to the selection matches.
            "tag" => self.tag.iter().any(|t| t == expected),
            _ => false,
        }
    }
}
