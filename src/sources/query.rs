//! Query encoder: filter state plus pagination to wire parameters.

use crate::state::FilterState;

/// Sort key sent when none is configured.
pub const DEFAULT_SORT: &str = "recent";
/// Sort direction sent when none is configured.
pub const DEFAULT_ORDER: &str = "desc";

/// Sort key and direction attached to every request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortSpec {
    /// Sort key (e.g. `recent`).
    pub sort: String,
    /// Direction (`asc` or `desc`).
    pub order: String,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            sort: DEFAULT_SORT.to_string(),
            order: DEFAULT_ORDER.to_string(),
        }
    }
}

/// Wire parameters of one search request, in emission order.
///
/// The endpoint treats them as an unordered map; the order is fixed only to
/// keep logged URLs stable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    /// Value for `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Key/value pairs in emission order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.pairs.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// `true` when no parameter is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    fn push_non_empty(&mut self, key: &'static str, value: String) {
        if !value.is_empty() {
            self.pairs.push((key, value));
        }
    }
}

/// What: Encode filters, page and size into search query parameters.
///
/// Inputs:
/// - `filters`: Current filter state.
/// - `page`: Requested page (1-based).
/// - `size`: Page size.
/// - `sort`: Sort key and direction.
///
/// Output:
/// - Parameters with only the non-empty filter fields, then `page`, `size`, `sort` and `order`.
///
/// Details:
/// - Values are passed through verbatim; multi-select facets use their comma-joined form.
/// - Percent-encoding happens when the parameters are attached to a URL.
#[must_use]
pub fn encode_query(filters: &FilterState, page: u32, size: u32, sort: &SortSpec) -> QueryParams {
    let mut params = QueryParams::default();
    params.push_non_empty("query", filters.query.clone());
    params.push_non_empty("Geography", filters.geography.clone().unwrap_or_default());
    params.push_non_empty("sectors", filters.sectors.joined());
    params.push_non_empty("tags", filters.tags.joined());
    params.push_non_empty("formats", filters.formats.joined());
    params.pairs.push(("page", page.to_string()));
    params.pairs.push(("size", size.to_string()));
    params.pairs.push(("sort", sort.sort.clone()));
    params.pairs.push(("order", sort.order.clone()));
    params
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Facet;

    #[test]
    /// What: Empty filter fields are omitted; pagination and sort are always sent.
    fn empty_filters_encode_only_paging_and_sort() {
        let params = encode_query(&FilterState::default(), 1, 9, &SortSpec::default());
        let keys: Vec<&str> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["page", "size", "sort", "order"]);
        assert_eq!(params.get("page"), Some("1"));
        assert_eq!(params.get("size"), Some("9"));
        assert_eq!(params.get("sort"), Some("recent"));
        assert_eq!(params.get("order"), Some("desc"));
        assert!(!params.contains_key("query"));
        assert!(!params.contains_key("Geography"));
    }

    #[test]
    /// What: Populated filters map onto their wire keys with comma-joined multi-selects.
    ///
    /// Inputs:
    /// - Query text, a geography, two sectors, one tag, no formats.
    ///
    /// Output:
    /// - `query`, `Geography`, `sectors`, `tags` present verbatim; `formats` absent.
    fn populated_filters_use_wire_keys() {
        let filters = FilterState::default()
            .with_query("river water")
            .with_option(Facet::Geography, "Assam", true)
            .with_option(Facet::Sectors, "Public Finance", true)
            .with_option(Facet::Sectors, "Gender", true)
            .with_option(Facet::Tags, "Budget", true);
        let sort = SortSpec {
            sort: "title".into(),
            order: "asc".into(),
        };
        let params = encode_query(&filters, 3, 20, &sort);
        assert_eq!(params.get("query"), Some("river water"));
        assert_eq!(params.get("Geography"), Some("Assam"));
        assert_eq!(params.get("sectors"), Some("Public Finance,Gender"));
        assert_eq!(params.get("tags"), Some("Budget"));
        assert!(!params.contains_key("formats"));
        assert_eq!(params.get("page"), Some("3"));
        assert_eq!(params.get("size"), Some("20"));
        assert_eq!(params.get("sort"), Some("title"));
        assert_eq!(params.get("order"), Some("asc"));
        assert_eq!(params.len(), 8);
    }
}
