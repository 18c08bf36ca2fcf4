//! Bundled sample payload shown when the search API cannot be reached.

use crate::state::{
    Aggregations, Dataset, FacetCounts, SearchPage,
    types::{MetadataItem, MetadataLabel, Organization},
};

/// Identifier of the single sample dataset.
pub const MOCK_DATASET_ID: &str = "mock-1";

fn meta(label: &str, value: &str) -> MetadataItem {
    MetadataItem {
        metadata_item: MetadataLabel {
            label: label.to_string(),
        },
        value: value.to_string(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

/// What: Build the fixed sample page.
///
/// Output:
/// - One dataset with id [`MOCK_DATASET_ID`], `total = 1`, and canned counts for every facet.
#[must_use]
pub fn sample_page() -> SearchPage {
    let dataset = Dataset {
        id: MOCK_DATASET_ID.to_string(),
        title: "Sample Dataset - Assam Budget Data".to_string(),
        description: "This is a sample dataset for development purposes. Contains budget \
                      allocation data for various sectors in Assam."
            .to_string(),
        slug: "sample-dataset-assam-budget".to_string(),
        created: "2025-01-15T10:00:00Z".to_string(),
        modified: "2025-01-20T15:30:00Z".to_string(),
        status: "PUBLISHED".to_string(),
        metadata: vec![
            meta("Geography", "Assam"),
            meta("Source Website", "https://fin.assam.gov.in/"),
        ],
        tags: strings(&["Budget", "Finance", "Government"]),
        sectors: strings(&["Public Finance", "Governance"]),
        formats: strings(&["CSV", "PDF"]),
        has_charts: true,
        download_count: 25,
        trending_score: 85.5,
        is_individual_dataset: false,
        organization: Some(Organization {
            name: "Finance Department, Government of Assam".to_string(),
            logo: Some("/assets/assam-govt-logo.png".to_string()),
        }),
        user: None,
        extra: serde_json::Map::new(),
    };
    SearchPage {
        results: vec![dataset],
        total: 1,
        aggregations: Aggregations {
            geography: FacetCounts::from_iter([("Assam", 15), ("India", 8), ("Asia-Pacific", 5)]),
            sectors: FacetCounts::from_iter([
                ("Public Finance", 12),
                ("Climate Action", 8),
                ("Urban Development", 6),
            ]),
            tags: FacetCounts::from_iter([("Budget", 10), ("Climate", 7), ("Health", 5)]),
            formats: FacetCounts::from_iter([("CSV", 15), ("PDF", 12), ("XLSX", 8)]),
        },
    }
}
