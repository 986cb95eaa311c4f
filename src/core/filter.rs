use crate::domain::model::Listing;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compare {
    Exact,
    CaseInsensitive,
}

/// One dropdown dimension of a listing grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetSpec {
    pub key: String,
    pub compare: Compare,
}

impl FacetSpec {
    pub fn exact(key: &str) -> Self {
        Self {
            key: key.to_string(),
            compare: Compare::Exact,
        }
    }

    pub fn case_insensitive(key: &str) -> Self {
        Self {
            key: key.to_string(),
            compare: Compare::CaseInsensitive,
        }
    }

    fn matches(&self, item_value: Option<&str>, selected: &str) -> bool {
        match (item_value, self.compare) {
            (None, _) => false,
            (Some(value), Compare::Exact) => value == selected,
            (Some(value), Compare::CaseInsensitive) => {
                value.to_lowercase() == selected.to_lowercase()
            }
        }
    }
}

/// Current control values of a grid. Rebuilt from the controls on every pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search: String,
    pub facets: BTreeMap<String, String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: &str) -> Self {
        self.search = search.to_string();
        self
    }

    pub fn with_facet(mut self, key: &str, value: &str) -> Self {
        self.set_facet(key, value);
        self
    }

    /// An empty value unsets the facet.
    pub fn set_facet(&mut self, key: &str, value: &str) {
        if value.is_empty() {
            self.facets.remove(key);
        } else {
            self.facets.insert(key.to_string(), value.to_string());
        }
    }

    pub fn is_unconstrained(&self) -> bool {
        self.search.is_empty() && self.facets.is_empty()
    }
}

pub fn matches_search<T: Listing>(item: &T, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    item.name().to_lowercase().contains(needle)
        || item
            .tags()
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
        || item.description().to_lowercase().contains(needle)
}

/// Stable filter: search text AND every set facet must match.
///
/// Facets in `state` that are not declared in `facets` are ignored.
pub fn filter<'a, T: Listing>(items: &'a [T], state: &FilterState, facets: &[FacetSpec]) -> Vec<&'a T> {
    let needle = state.search.to_lowercase();

    items
        .iter()
        .filter(|item| matches_search(*item, &needle))
        .filter(|item| {
            facets.iter().all(|facet| match state.facets.get(&facet.key) {
                None => true,
                Some(selected) if selected.is_empty() => true,
                Some(selected) => facet.matches(item.facet(&facet.key), selected),
            })
        })
        .collect()
}
