//! Sidebar facet sections derived from the latest aggregation snapshot.

use crate::state::{Aggregations, Facet, FilterState};

/// Most options listed for facets that can grow unbounded (tags, geography).
pub const OPTION_CAP: usize = 10;

/// What: Options listed for `facet` when the server reports none.
#[must_use]
pub const fn fallback_options(facet: Facet) -> &'static [&'static str] {
    match facet {
        Facet::Sectors => &[
            "Public Finance",
            "Law And Justice",
            "Climate Action",
            "Urban Development",
            "Gender",
        ],
        Facet::Formats => &["CSV", "PDF", "XLSX", "JSON"],
        Facet::Tags => &["Budget", "Law", "Justice", "Courts"],
        Facet::Geography => &["India", "Assam", "Asia-Pacific", "Bangkok"],
    }
}

/// Whether `facet` lists at most [`OPTION_CAP`] options.
const fn is_capped(facet: Facet) -> bool {
    matches!(facet, Facet::Tags | Facet::Geography)
}

/// One selectable row in a facet section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FacetOption {
    /// Option label, sent verbatim when selected.
    pub label: String,
    /// Matching dataset count; only present for non-zero aggregation entries.
    pub count: Option<u64>,
    /// Whether the option is active in the current filters.
    pub checked: bool,
}

/// A titled group of options in the sidebar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FacetSection {
    /// Facet this section controls.
    pub facet: Facet,
    /// Options to display, already capped.
    pub options: Vec<FacetOption>,
    /// Number of options before capping.
    pub available: usize,
}

/// What: Build the option list for one facet.
///
/// Inputs:
/// - `facet`: Facet to describe.
/// - `filters`: Current filter selection (source of checked state).
/// - `aggregations`: Latest server counts.
///
/// Output:
/// - Section with aggregation keys in server order, or the fallback list when
///   the server reported none for this facet.
///
/// Details:
/// - Checked state is recomputed on every call, never cached.
/// - Selected labels absent from the snapshot are not listed but remain in `filters`.
#[must_use]
pub fn facet_section(facet: Facet, filters: &FilterState, aggregations: &Aggregations) -> FacetSection {
    let counts = aggregations.counts(facet);
    let labels: Vec<&str> = if counts.is_empty() {
        fallback_options(facet).to_vec()
    } else {
        counts.labels().collect()
    };
    let available = labels.len();
    let shown = if is_capped(facet) {
        available.min(OPTION_CAP)
    } else {
        available
    };
    let options = labels
        .into_iter()
        .take(shown)
        .map(|label| FacetOption {
            label: label.to_string(),
            count: counts.get(label).filter(|&c| c > 0),
            checked: filters.is_checked(facet, label),
        })
        .collect();
    FacetSection {
        facet,
        options,
        available,
    }
}

/// All sidebar sections in display order.
#[must_use]
pub fn sidebar_sections(filters: &FilterState, aggregations: &Aggregations) -> Vec<FacetSection> {
    Facet::ALL
        .iter()
        .map(|&f| facet_section(f, filters, aggregations))
        .collect()
}

/// Total selectable rows across `sections`.
#[must_use]
pub fn option_row_count(sections: &[FacetSection]) -> usize {
    sections.iter().map(|s| s.options.len()).sum()
}

/// What: Resolve a flat sidebar cursor to its facet and option.
///
/// Output:
/// - `None` when `cursor` is past the last option.
#[must_use]
pub fn option_at(sections: &[FacetSection], cursor: usize) -> Option<(Facet, &FacetOption)> {
    let mut remaining = cursor;
    for section in sections {
        if let Some(opt) = section.options.get(remaining) {
            return Some((section.facet, opt));
        }
        remaining -= section.options.len();
    }
    None
}
