//! Core value types used by civicdata state.

use serde::de::{self, DeserializeOwned, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Facet category a dataset can be filtered by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Facet {
    /// Multi-select sector labels.
    Sectors,
    /// Multi-select data formats ("Data Type" in the sidebar).
    Formats,
    /// Multi-select free-form tags.
    Tags,
    /// Single-select geography.
    Geography,
}

impl Facet {
    /// Sidebar display order.
    pub const ALL: [Self; 4] = [Self::Sectors, Self::Formats, Self::Tags, Self::Geography];

    /// Query-string key and aggregation key used by the search API.
    #[must_use]
    pub const fn wire_key(self) -> &'static str {
        match self {
            Self::Sectors => "sectors",
            Self::Formats => "formats",
            Self::Tags => "tags",
            Self::Geography => "Geography",
        }
    }

    /// Section heading shown in the filter sidebar.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Sectors => "Sectors",
            Self::Formats => "Data Type",
            Self::Tags => "Tags",
            Self::Geography => "Geographies",
        }
    }

    /// Whether only one option of this facet can be active (radio semantics).
    #[must_use]
    pub const fn is_single_select(self) -> bool {
        matches!(self, Self::Geography)
    }
}

/// Insertion-ordered set of selected option labels for one multi-select facet.
///
/// The wire form is the comma-joined label list; an empty selection means the
/// facet does not constrain the query.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FacetSelection {
    labels: Vec<String>,
}

impl FacetSelection {
    /// What: Parse a comma-joined selection string.
    ///
    /// Inputs:
    /// - `raw`: Labels separated by commas (e.g. `"Budget,Health"`).
    ///
    /// Output:
    /// - Selection with entries trimmed, blank entries and repeated labels dropped,
    ///   first occurrence kept.
    #[must_use]
    pub fn from_joined(raw: &str) -> Self {
        raw.split(',').map(|l| l.trim().to_string()).collect()
    }

    /// Whether `label` is currently selected.
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    /// What: Return a copy of this selection with `label` set or unset.
    ///
    /// Inputs:
    /// - `label`: Option label to toggle.
    /// - `checked`: `true` to add, `false` to remove.
    ///
    /// Output:
    /// - New selection; adding an already present label or removing an absent one is a no-op.
    ///
    /// Details:
    /// - Blank labels are ignored so the wire form never contains empty entries.
    #[must_use]
    pub fn toggled(&self, label: &str, checked: bool) -> Self {
        let mut next = self.clone();
        if checked {
            if !label.trim().is_empty() && !next.contains(label) {
                next.labels.push(label.to_string());
            }
        } else {
            next.labels.retain(|l| l != label);
        }
        next
    }

    /// Number of selected labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// `true` when nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Selected labels in the order they were added.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    /// Comma-joined wire form.
    #[must_use]
    pub fn joined(&self) -> String {
        self.labels.join(",")
    }
}

impl FromIterator<String> for FacetSelection {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::default(), |acc, label| acc.toggled(&label, true))
    }
}

/// Complete filter selection driving a search request.
///
/// Every edit produces a fresh value through one of the `with_*` methods; the
/// current value is then replaced wholesale in [`crate::state::AppState`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Free-text query.
    pub query: String,
    /// Selected geography, if any.
    pub geography: Option<String>,
    /// Selected sectors.
    pub sectors: FacetSelection,
    /// Selected tags.
    pub tags: FacetSelection,
    /// Selected data formats.
    pub formats: FacetSelection,
}

impl FilterState {
    /// Copy with the free-text query replaced.
    #[must_use]
    pub fn with_query(&self, text: &str) -> Self {
        Self {
            query: text.to_string(),
            ..self.clone()
        }
    }

    /// What: Copy with one facet option checked or unchecked.
    ///
    /// Inputs:
    /// - `facet`: Facet the option belongs to.
    /// - `label`: Option label.
    /// - `checked`: Desired state of the option.
    ///
    /// Output:
    /// - New filter state; other fields are untouched.
    ///
    /// Details:
    /// - Geography uses radio semantics and delegates to [`Self::with_geography`].
    #[must_use]
    pub fn with_option(&self, facet: Facet, label: &str, checked: bool) -> Self {
        match facet {
            Facet::Geography => self.with_geography(label, checked),
            Facet::Sectors => Self {
                sectors: self.sectors.toggled(label, checked),
                ..self.clone()
            },
            Facet::Tags => Self {
                tags: self.tags.toggled(label, checked),
                ..self.clone()
            },
            Facet::Formats => Self {
                formats: self.formats.toggled(label, checked),
                ..self.clone()
            },
        }
    }

    /// Copy with geography set to `label` when checked, cleared otherwise.
    #[must_use]
    pub fn with_geography(&self, label: &str, checked: bool) -> Self {
        Self {
            geography: (checked && !label.is_empty()).then(|| label.to_string()),
            ..self.clone()
        }
    }

    /// Multi-select selection for `facet`; `None` for geography.
    #[must_use]
    pub const fn selection(&self, facet: Facet) -> Option<&FacetSelection> {
        match facet {
            Facet::Sectors => Some(&self.sectors),
            Facet::Tags => Some(&self.tags),
            Facet::Formats => Some(&self.formats),
            Facet::Geography => None,
        }
    }

    /// Whether `label` is currently active for `facet`.
    #[must_use]
    pub fn is_checked(&self, facet: Facet, label: &str) -> bool {
        match self.selection(facet) {
            Some(sel) => sel.contains(label),
            None => self.geography.as_deref() == Some(label),
        }
    }

    /// `true` when no field constrains the search.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
            && self.geography.is_none()
            && self.sectors.is_empty()
            && self.tags.is_empty()
            && self.formats.is_empty()
    }

    /// Number of active facet options plus one for a non-empty query.
    #[must_use]
    pub fn active_count(&self) -> usize {
        usize::from(!self.query.is_empty())
            + usize::from(self.geography.is_some())
            + self.sectors.len()
            + self.tags.len()
            + self.formats.len()
    }
}

/// Order-preserving option counts for one facet as returned by the server.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FacetCounts {
    entries: Vec<(String, u64)>,
}

impl FacetCounts {
    /// Count for `label`, if the server reported it.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, c)| *c)
    }

    /// Option labels in server order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(l, _)| l.as_str())
    }

    /// Number of distinct options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when the server reported no options.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for FacetCounts {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(l, c)| (l.into(), c)).collect(),
        }
    }
}

/// Interpret a JSON count leniently: non-negative integers and floats are
/// accepted, anything else counts as zero.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn count_of(v: &Value) -> u64 {
    v.as_u64()
        .or_else(|| {
            v.as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0)
                .map(|f| f.trunc() as u64)
        })
        .unwrap_or(0)
}

impl<'de> Deserialize<'de> for FacetCounts {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        /// Visitor that keeps the object's key order.
        struct CountsVisitor;

        impl<'de> Visitor<'de> for CountsVisitor {
            type Value = FacetCounts;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a map of option label to count")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries: Vec<(String, u64)> = Vec::new();
                while let Some((label, raw)) = map.next_entry::<String, Value>()? {
                    let count = count_of(&raw);
                    if let Some(slot) = entries.iter_mut().find(|(l, _)| *l == label) {
                        slot.1 = count;
                    } else {
                        entries.push((label, count));
                    }
                }
                Ok(FacetCounts { entries })
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                while seq.next_element::<IgnoredAny>()?.is_some() {}
                Ok(FacetCounts::default())
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(FacetCounts::default())
            }

            fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(FacetCounts::default())
            }
        }

        deserializer.deserialize_any(CountsVisitor)
    }
}

/// Per-facet option counts for the current query.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Aggregations {
    /// Geography counts (`Geography` on the wire).
    #[serde(rename = "Geography", default)]
    pub geography: FacetCounts,
    /// Sector counts.
    #[serde(default)]
    pub sectors: FacetCounts,
    /// Tag counts.
    #[serde(default)]
    pub tags: FacetCounts,
    /// Format counts.
    #[serde(default)]
    pub formats: FacetCounts,
}

impl Aggregations {
    /// Counts for a single facet.
    #[must_use]
    pub const fn counts(&self, facet: Facet) -> &FacetCounts {
        match facet {
            Facet::Sectors => &self.sectors,
            Facet::Formats => &self.formats,
            Facet::Tags => &self.tags,
            Facet::Geography => &self.geography,
        }
    }
}

/// Label attached to a dataset metadata value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MetadataLabel {
    /// Human-readable label (e.g. "Geography").
    #[serde(default, deserialize_with = "lenient_string")]
    pub label: String,
}

/// One metadata row of a dataset.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MetadataItem {
    /// Metadata key description.
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub metadata_item: MetadataLabel,
    /// Value as published; numbers and booleans are kept in their text form.
    #[serde(default, deserialize_with = "lenient_string")]
    pub value: String,
}

/// Publishing organisation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    /// Display name.
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    /// Logo path or URL.
    #[serde(
        default,
        deserialize_with = "lenient_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub logo: Option<String>,
}

/// Individual publisher account.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Publisher {
    /// Account identifier.
    #[serde(default, deserialize_with = "id_from_string_or_number")]
    pub id: String,
    /// Display name.
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    /// Contact address, when published.
    #[serde(
        default,
        deserialize_with = "lenient_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub email: Option<String>,
}

/// A dataset record as returned by the search endpoint.
///
/// Only `id`, `title` and `description` carry meaning for the browser; the
/// rest is shown in the details modal, and unknown fields ride along in
/// `extra`. Every field decodes leniently: a value of an unexpected type
/// falls back to its default instead of rejecting the whole response.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Unique identifier (string or number on the wire).
    #[serde(default, deserialize_with = "id_from_string_or_number")]
    pub id: String,
    /// Display title.
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    /// Display description.
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: String,
    /// URL slug.
    #[serde(default, deserialize_with = "lenient_string")]
    pub slug: String,
    /// Creation timestamp (RFC 3339).
    #[serde(default, deserialize_with = "lenient_string")]
    pub created: String,
    /// Last modification timestamp (RFC 3339).
    #[serde(default, deserialize_with = "lenient_string")]
    pub modified: String,
    /// Publication status (e.g. `PUBLISHED`).
    #[serde(default, deserialize_with = "lenient_string")]
    pub status: String,
    /// Free-form metadata rows; entries that are not objects are dropped.
    #[serde(default, deserialize_with = "lenient_list")]
    pub metadata: Vec<MetadataItem>,
    /// Tags attached to the dataset.
    #[serde(default, deserialize_with = "lenient_strings")]
    pub tags: Vec<String>,
    /// Sectors the dataset belongs to.
    #[serde(default, deserialize_with = "lenient_strings")]
    pub sectors: Vec<String>,
    /// Resource formats available for download.
    #[serde(default, deserialize_with = "lenient_strings")]
    pub formats: Vec<String>,
    /// Whether charts are attached.
    #[serde(default, deserialize_with = "lenient_bool")]
    pub has_charts: bool,
    /// Download counter.
    #[serde(default, deserialize_with = "u64_from_value")]
    pub download_count: u64,
    /// Trending score computed by the server.
    #[serde(default, deserialize_with = "f64_from_value")]
    pub trending_score: f64,
    /// Whether it was published by an individual rather than an organisation.
    #[serde(default, deserialize_with = "lenient_bool")]
    pub is_individual_dataset: bool,
    /// Publishing organisation.
    #[serde(
        default,
        deserialize_with = "lenient_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub organization: Option<Organization>,
    /// Publishing user.
    #[serde(
        default,
        deserialize_with = "lenient_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub user: Option<Publisher>,
    /// Fields the browser does not interpret.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl Dataset {
    /// Value of the metadata row labelled `label` (case-insensitive).
    #[must_use]
    pub fn metadata_value(&self, label: &str) -> Option<&str> {
        self.metadata
            .iter()
            .find(|m| m.metadata_item.label.eq_ignore_ascii_case(label))
            .map(|m| m.value.as_str())
            .filter(|v| !v.is_empty())
    }

    /// Name of whoever published the dataset, organisation first.
    #[must_use]
    pub fn publisher_name(&self) -> Option<&str> {
        self.organization
            .as_ref()
            .map(|o| o.name.as_str())
            .or_else(|| self.user.as_ref().map(|u| u.name.as_str()))
            .filter(|n| !n.is_empty())
    }
}

/// Normalized search response.
///
/// Missing or `null` fields default so that consumers never see undefined
/// facets: no results, a total of zero, empty aggregations.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SearchPage {
    /// Datasets on the requested page.
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<Dataset>,
    /// Total number of matching datasets across all pages.
    #[serde(default, deserialize_with = "u64_from_value")]
    pub total: u64,
    /// Facet counts for the query.
    #[serde(default, deserialize_with = "null_as_default")]
    pub aggregations: Aggregations,
}

/// Deserialize `null` as the type's default value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Text form of a scalar JSON value; `None` for null, arrays and objects.
fn scalar_text(v: Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Accept identifiers sent as either strings or numbers.
fn id_from_string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

/// Any scalar as text; null and containers become the empty string.
fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(scalar_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

/// Strings only; anything else is treated as absent.
fn lenient_opt_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// Array of scalars as text; other elements are dropped and a non-array is empty.
fn lenient_strings<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items.into_iter().filter_map(scalar_text).collect(),
        _ => Vec::new(),
    })
}

/// Booleans only; any other value reads as `false`.
fn lenient_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(Value::deserialize(deserializer)?.as_bool().unwrap_or(false))
}

/// Decode a nested record, falling back to its default when the shape is wrong.
fn lenient_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(serde_json::from_value(Value::deserialize(deserializer)?).unwrap_or_default())
}

/// Decode an optional nested record; only a JSON object can produce `Some`.
fn lenient_opt<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Value::deserialize(deserializer)? {
        v @ Value::Object(_) => serde_json::from_value(v).ok(),
        _ => None,
    })
}

/// Decode a list of records, keeping only the entries that decode.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter(Value::is_object)
            .filter_map(|v| serde_json::from_value(v).ok())
            .collect(),
        _ => Vec::new(),
    })
}

/// Accept counts sent as integers, floats, numeric strings or `null`.
fn u64_from_value<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let raw = Value::deserialize(deserializer)?;
    Ok(match &raw {
        Value::String(s) => s.trim().parse().unwrap_or(0),
        other => count_of(other),
    })
}

/// Accept scores sent as numbers or numeric strings; anything else is zero.
fn f64_from_value<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let raw = Value::deserialize(deserializer)?;
    let score = match &raw {
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        other => other.as_f64().unwrap_or(0.0),
    };
    Ok(if score.is_finite() { score } else { 0.0 })
}

/// Fetch request sent to the background fetch worker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchRequest {
    /// Monotonic identifier used to correlate responses.
    pub id: u64,
    /// Filters at the time the request was issued.
    pub filters: FilterState,
    /// Requested page (1-based).
    pub page: u32,
    /// Page size.
    pub size: u32,
}

/// Response corresponding to a prior [`FetchRequest`].
#[derive(Debug)]
pub struct FetchResponse {
    /// Echoed identifier from the originating request.
    pub id: u64,
    /// What the fetch produced.
    pub outcome: crate::sources::FetchOutcome,
}

/// How the results area lays out datasets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// Grid of cards.
    #[default]
    Cards,
    /// One dataset per row.
    List,
}

impl ViewMode {
    /// The other view.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Cards => Self::List,
            Self::List => Self::Cards,
        }
    }

    /// Return the string key used in settings files for this view.
    #[must_use]
    pub const fn as_config_key(self) -> &'static str {
        match self {
            Self::Cards => "card",
            Self::List => "list",
        }
    }

    /// Parse a view from its settings key or aliases (case-insensitive).
    #[must_use]
    pub fn from_config_key(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "card" | "cards" | "grid" => Some(Self::Cards),
            "list" | "rows" => Some(Self::List),
            _ => None,
        }
    }
}

/// Which pane receives keyboard input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    /// Free-text search box.
    Search,
    /// Facet sidebar.
    Filters,
    /// Results and pager.
    #[default]
    Results,
}

impl Focus {
    /// Next pane in Tab order.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Search => Self::Filters,
            Self::Filters => Self::Results,
            Self::Results => Self::Search,
        }
    }

    /// Previous pane in Tab order.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Search => Self::Results,
            Self::Filters => Self::Search,
            Self::Results => Self::Filters,
        }
    }
}

/// What the results area should communicate besides the datasets themselves.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ResultsStatus {
    /// No request issued yet.
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// Live results are shown.
    Ready,
    /// The server answered with no matches.
    Empty,
    /// The request failed and bundled sample data is shown instead.
    SampleData {
        /// Failure description.
        reason: String,
    },
    /// The request failed and nothing can be shown.
    Failed {
        /// Failure description.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Toggling a label on then off restores the exact prior selection.
    ///
    /// Inputs:
    /// - Selection `Budget,Health`, toggling `Law` on/off and `Budget` off/on.
    ///
    /// Output:
    /// - Joined string returns to its original value after each pair of toggles
    ///   (order is insertion order, so re-adding moves a label to the end).
    fn facet_selection_toggle_is_its_own_inverse() {
        let base = FacetSelection::from_joined("Budget,Health");
        let round = base.toggled("Law", true).toggled("Law", false);
        assert_eq!(round.joined(), "Budget,Health");

        let single = FacetSelection::from_joined("Budget");
        let back = single.toggled("Budget", false).toggled("Budget", true);
        assert_eq!(back, single);
    }

    #[test]
    /// What: Double-checking a label does not create duplicates.
    fn facet_selection_is_a_set() {
        let sel = FacetSelection::default()
            .toggled("CSV", true)
            .toggled("CSV", true);
        assert_eq!(sel.joined(), "CSV");
        assert_eq!(sel.len(), 1);
        assert!(FacetSelection::default().toggled("  ", true).is_empty());
    }

    #[test]
    /// What: Parsing a joined string drops blanks and repeats.
    fn facet_selection_from_joined_normalizes() {
        let sel = FacetSelection::from_joined(",CSV,, PDF ,CSV,");
        assert_eq!(sel.iter().collect::<Vec<_>>(), vec!["CSV", "PDF"]);
        assert!(FacetSelection::from_joined("").is_empty());
    }

    #[test]
    /// What: Geography behaves like a radio group.
    ///
    /// Inputs:
    /// - Select `Assam`, then `India`, then uncheck.
    ///
    /// Output:
    /// - Only the last checked value is kept; unchecking clears the field.
    fn geography_is_single_select() {
        let f = FilterState::default().with_option(Facet::Geography, "Assam", true);
        assert_eq!(f.geography.as_deref(), Some("Assam"));
        let f = f.with_option(Facet::Geography, "India", true);
        assert_eq!(f.geography.as_deref(), Some("India"));
        assert!(f.is_checked(Facet::Geography, "India"));
        assert!(!f.is_checked(Facet::Geography, "Assam"));
        let f = f.with_geography("India", false);
        assert!(f.geography.is_none());
    }

    #[test]
    /// What: Edits replace only the targeted field.
    fn filter_state_edits_leave_other_fields_alone() {
        let f = FilterState::default()
            .with_option(Facet::Sectors, "Gender", true)
            .with_option(Facet::Tags, "Budget", true)
            .with_query("water");
        assert_eq!(f.query, "water");
        assert_eq!(f.sectors.joined(), "Gender");
        assert_eq!(f.tags.joined(), "Budget");
        assert!(f.formats.is_empty());
        assert_eq!(f.active_count(), 3);
        assert!(!f.is_empty());
    }

    #[test]
    /// What: Aggregation maps keep server key order and tolerate odd counts.
    fn facet_counts_preserve_order_and_coerce_values() {
        let raw = r#"{"Zeta": 3, "Alpha": 1.0, "Mid": "n/a", "Neg": -4}"#;
        let counts: FacetCounts = serde_json::from_str(raw).expect("valid map");
        assert_eq!(
            counts.labels().collect::<Vec<_>>(),
            vec!["Zeta", "Alpha", "Mid", "Neg"]
        );
        assert_eq!(counts.get("Zeta"), Some(3));
        assert_eq!(counts.get("Alpha"), Some(1));
        assert_eq!(counts.get("Mid"), Some(0));
        assert_eq!(counts.get("Neg"), Some(0));
        assert_eq!(counts.get("Missing"), None);
    }

    #[test]
    /// What: Missing and null fields in a search response default to empty values.
    fn search_page_defaults_missing_fields() {
        let page: SearchPage = serde_json::from_str("{}").expect("empty object");
        assert_eq!(page, SearchPage::default());

        let page: SearchPage = serde_json::from_str(
            r#"{"results": null, "total": null, "aggregations": {"sectors": null, "tags": {"Budget": 2}}}"#,
        )
        .expect("nulls accepted");
        assert!(page.results.is_empty());
        assert_eq!(page.total, 0);
        assert!(page.aggregations.sectors.is_empty());
        assert!(page.aggregations.geography.is_empty());
        assert_eq!(page.aggregations.tags.get("Budget"), Some(2));
    }

    #[test]
    /// What: Dataset ids parse from strings and numbers; unknown fields are retained.
    fn dataset_accepts_numeric_ids_and_keeps_extra_fields() {
        let raw = r#"[
            {"id": 42, "title": "Rainfall", "description": "Daily", "license": "CC-BY"},
            {"id": "abc", "title": "Budget", "organization": {"name": "Finance Dept"}}
        ]"#;
        let items: Vec<Dataset> = serde_json::from_str(raw).expect("valid datasets");
        assert_eq!(items[0].id, "42");
        assert_eq!(
            items[0].extra.get("license").and_then(Value::as_str),
            Some("CC-BY")
        );
        assert_eq!(items[1].id, "abc");
        assert_eq!(items[1].publisher_name(), Some("Finance Dept"));
        assert!(items[1].description.is_empty());
    }

    #[test]
    /// What: Nested records with null or mistyped fields still decode.
    ///
    /// Inputs:
    /// - `organization.name: null`, a numeric metadata value, a null metadata label,
    ///   a metadata entry that is not an object, and a `user` given as a string.
    ///
    /// Output:
    /// - Empty organisation name, metadata value as text, the bad entry dropped, no user.
    fn dataset_tolerates_odd_nested_records() {
        let raw = r#"{
            "id": 1,
            "title": "Rainfall",
            "organization": {"name": null, "logo": 5},
            "metadata": [
                {"metadata_item": {"label": "Year"}, "value": 2024},
                {"metadata_item": {"label": null}, "value": true},
                {"metadata_item": null, "value": null},
                "Geography: Assam"
            ],
            "user": "someone"
        }"#;
        let ds: Dataset = serde_json::from_str(raw).expect("lenient dataset");
        let org = ds.organization.as_ref().expect("organisation kept");
        assert!(org.name.is_empty());
        assert_eq!(org.logo, None);
        assert_eq!(ds.metadata.len(), 3);
        assert_eq!(ds.metadata_value("year"), Some("2024"));
        assert_eq!(ds.metadata[1].metadata_item.label, "");
        assert_eq!(ds.metadata[1].value, "true");
        assert_eq!(ds.metadata[2], MetadataItem::default());
        assert_eq!(ds.user, None);
        assert_eq!(ds.publisher_name(), None);
    }

    #[test]
    /// What: Scalar fields accept numeric strings and fall back on wrong types.
    ///
    /// Inputs:
    /// - `download_count: "25"`, `trending_score: "85.5"`, `has_charts: "yes"`,
    ///   `is_individual_dataset: 1`, `tags` mixing strings, numbers and null, `formats: "CSV"`,
    ///   `title: 42`, `status: {}`.
    ///
    /// Output:
    /// - Counts parsed, booleans false, scalar tags kept as text, formats empty,
    ///   title as text, status empty.
    fn dataset_coerces_scalar_fields() {
        let raw = r#"{
            "id": "x",
            "title": 42,
            "status": {},
            "download_count": "25",
            "trending_score": "85.5",
            "has_charts": "yes",
            "is_individual_dataset": 1,
            "tags": ["Budget", 2024, null, {"a": 1}],
            "formats": "CSV"
        }"#;
        let ds: Dataset = serde_json::from_str(raw).expect("lenient dataset");
        assert_eq!(ds.title, "42");
        assert!(ds.status.is_empty());
        assert_eq!(ds.download_count, 25);
        assert!((ds.trending_score - 85.5).abs() < f64::EPSILON);
        assert!(!ds.has_charts);
        assert!(!ds.is_individual_dataset);
        assert_eq!(ds.tags, vec!["Budget".to_string(), "2024".to_string()]);
        assert!(ds.formats.is_empty());

        let ds: Dataset =
            serde_json::from_str(r#"{"download_count": "many", "trending_score": null}"#)
                .expect("lenient dataset");
        assert_eq!(ds.download_count, 0);
        assert!(ds.trending_score.abs() < f64::EPSILON);
    }

    #[test]
    /// What: View mode config keys round-trip and accept aliases.
    fn view_mode_config_keys() {
        assert_eq!(ViewMode::from_config_key("Cards"), Some(ViewMode::Cards));
        assert_eq!(ViewMode::from_config_key(" list "), Some(ViewMode::List));
        assert_eq!(ViewMode::from_config_key("table"), None);
        assert_eq!(
            ViewMode::from_config_key(ViewMode::List.as_config_key()),
            Some(ViewMode::List)
        );
        assert_eq!(ViewMode::Cards.toggled(), ViewMode::List);
    }
}
