//! Non-UI logic: filter edits, facet derivation, paging and request issuing.

pub mod facets;
pub mod filters;
pub mod pager;
pub mod query;

pub use facets::{FacetOption, FacetSection, option_at, option_row_count, sidebar_sections};
pub use filters::{clear_all_filters, go_to_page, set_facet_option, set_query_text, toggle_facet_option};
pub use pager::{PagerView, pager_view, total_pages};
pub use query::send_fetch;
