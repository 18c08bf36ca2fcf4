/// Dataset search worker.
pub mod search;
