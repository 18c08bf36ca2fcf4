pub mod search;

pub use search::handle_fetch_response;
