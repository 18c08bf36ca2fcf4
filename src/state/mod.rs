//! Application state: filter selection, pagination, fetched results and UI focus.

pub mod app_state;
pub mod modal;
pub mod types;

pub use app_state::AppState;
pub use modal::Modal;
pub use types::{
    Aggregations, Dataset, Facet, FacetCounts, FacetSelection, FetchRequest, FetchResponse,
    FilterState, Focus, ResultsStatus, SearchPage, ViewMode,
};
