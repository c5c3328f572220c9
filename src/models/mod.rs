//! Data models shared across the crate.

mod paper;
mod search;

pub use paper::Paper;
pub use search::{SearchQuery, SortBy};
