//! Modal dialogs layered over the main screen.

use crate::state::types::Dataset;

/// Active modal dialog, if any.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Modal {
    /// No modal is shown.
    #[default]
    None,
    /// Key binding reference.
    Help,
    /// Full record of one dataset.
    DatasetDetails {
        /// Dataset being shown.
        dataset: Box<Dataset>,
        /// Vertical scroll offset in lines.
        scroll: u16,
    },
}
