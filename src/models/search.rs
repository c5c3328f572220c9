//! Search request models.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::sources::SourceError;

/// Sort order for search results, using the arXiv API wire names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortBy {
    #[default]
    #[serde(rename = "relevance")]
    Relevance,
    #[serde(rename = "lastUpdatedDate")]
    LastUpdatedDate,
    #[serde(rename = "submittedDate")]
    SubmittedDate,
}

impl SortBy {
    /// The value passed to the arXiv API's `sortBy` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Relevance => "relevance",
            SortBy::LastUpdatedDate => "lastUpdatedDate",
            SortBy::SubmittedDate => "submittedDate",
        }
    }
}

impl FromStr for SortBy {
    type Err = SourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "relevance" => Ok(SortBy::Relevance),
            "lastUpdatedDate" => Ok(SortBy::LastUpdatedDate),
            "submittedDate" => Ok(SortBy::SubmittedDate),
            other => Err(SourceError::InvalidRequest(format!(
                "Invalid sort_by value: {}",
                other
            ))),
        }
    }
}

/// Search query parameters for the arXiv API.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    /// Main search query string
    pub query: String,

    /// Maximum number of results to return
    pub max_results: usize,

    /// Sort order for results
    pub sort_by: SortBy,
}

impl SearchQuery {
    /// Create a new search query with defaults (10 results, relevance order).
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            max_results: 10,
            sort_by: SortBy::default(),
        }
    }

    /// Set maximum results
    pub fn max_results(mut self, max: usize) -> Self {
        self.max_results = max;
        self
    }

    /// Set sort order
    pub fn sort_by(mut self, sort: SortBy) -> Self {
        self.sort_by = sort;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_by_parses_wire_names() {
        assert_eq!("relevance".parse::<SortBy>().unwrap(), SortBy::Relevance);
        assert_eq!(
            "lastUpdatedDate".parse::<SortBy>().unwrap(),
            SortBy::LastUpdatedDate
        );
        assert_eq!(
            "submittedDate".parse::<SortBy>().unwrap(),
            SortBy::SubmittedDate
        );
        assert!("citations".parse::<SortBy>().is_err());
    }

    #[test]
    fn query_builder_defaults() {
        let query = SearchQuery::new("transformer");
        assert_eq!(query.max_results, 10);
        assert_eq!(query.sort_by, SortBy::Relevance);

        let query = query.max_results(2).sort_by(SortBy::SubmittedDate);
        assert_eq!(query.max_results, 2);
        assert_eq!(query.sort_by.as_str(), "submittedDate");
    }
}
