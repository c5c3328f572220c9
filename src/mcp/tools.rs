//! Tool descriptors and name dispatch.

use std::str::FromStr;

use serde::Serialize;
use serde_json::json;

/// The closed set of tools this server exposes.
///
/// Dispatch happens on this enum, not on raw strings; anything outside it is
/// rejected at the HTTP boundary with a 400.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolName {
    ArxivSearch,
    ArxivGetPaper,
    DownloadPaperPdf,
}

impl ToolName {
    /// Wire name of the tool.
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolName::ArxivSearch => "arxiv_search",
            ToolName::ArxivGetPaper => "arxiv_get_paper",
            ToolName::DownloadPaperPdf => "download_paper_pdf",
        }
    }
}

impl FromStr for ToolName {
    type Err = UnknownTool;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "arxiv_search" => Ok(ToolName::ArxivSearch),
            "arxiv_get_paper" => Ok(ToolName::ArxivGetPaper),
            "download_paper_pdf" => Ok(ToolName::DownloadPaperPdf),
            other => Err(UnknownTool(other.to_string())),
        }
    }
}

impl std::fmt::Display for ToolName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a tool name outside the closed set.
#[derive(Debug, Clone, thiserror::Error)]
#[error("Unknown tool: {0}")]
pub struct UnknownTool(pub String);

/// Static metadata describing one callable tool.
#[derive(Debug, Clone, Serialize)]
pub struct Tool {
    /// Tool name (e.g. "arxiv_search")
    pub name: String,

    /// Human-readable description
    pub description: String,

    /// JSON Schema for input parameters
    pub input_schema: serde_json::Value,
}

/// Ordered registry of the three tool descriptors.
///
/// The list is returned verbatim on a list-tools request.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    tools: Vec<Tool>,
}

impl ToolRegistry {
    /// Build the registry with the static descriptors.
    pub fn new() -> Self {
        let tools = vec![
            Tool {
                name: "arxiv_search".to_string(),
                description: "Search ArXiv for research papers".to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "query": {
                            "type": "string",
                            "description": "Search query for papers"
                        },
                        "max_results": {
                            "type": "integer",
                            "default": 10,
                            "description": "Maximum number of results to return"
                        },
                        "sort_by": {
                            "type": "string",
                            "enum": ["relevance", "lastUpdatedDate", "submittedDate"],
                            "default": "relevance",
                            "description": "Sort order for results"
                        }
                    },
                    "required": ["query"]
                }),
            },
            Tool {
                name: "arxiv_get_paper".to_string(),
                description: "Get detailed information about a specific ArXiv paper"
                    .to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "arxiv_id": {
                            "type": "string",
                            "description": "ArXiv ID (e.g., 2301.07041)"
                        },
                        "include_abstract": {
                            "type": "boolean",
                            "default": true,
                            "description": "Include paper abstract"
                        }
                    },
                    "required": ["arxiv_id"]
                }),
            },
            Tool {
                name: "download_paper_pdf".to_string(),
                description: "Download PDF of an ArXiv paper".to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "arxiv_id": {
                            "type": "string",
                            "description": "ArXiv ID (e.g., 2301.07041)"
                        }
                    },
                    "required": ["arxiv_id"]
                }),
            },
        ];

        Self { tools }
    }

    /// The descriptors, in registration order.
    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_name_round_trip() {
        for name in ["arxiv_search", "arxiv_get_paper", "download_paper_pdf"] {
            assert_eq!(name.parse::<ToolName>().unwrap().as_str(), name);
        }
    }

    #[test]
    fn test_unknown_tool_rejected() {
        let err = "foo".parse::<ToolName>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown tool: foo");
    }

    #[test]
    fn test_registry_has_three_ordered_descriptors() {
        let registry = ToolRegistry::new();
        let names: Vec<_> = registry.tools().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["arxiv_search", "arxiv_get_paper", "download_paper_pdf"]
        );
    }

    #[test]
    fn test_required_parameters_per_schema() {
        let registry = ToolRegistry::new();
        let required: Vec<_> = registry
            .tools()
            .iter()
            .map(|t| t.input_schema["required"][0].as_str().unwrap())
            .collect();
        assert_eq!(required, vec!["query", "arxiv_id", "arxiv_id"]);
    }

    #[test]
    fn test_search_schema_defaults() {
        let registry = ToolRegistry::new();
        let schema = &registry.tools()[0].input_schema;
        assert_eq!(schema["properties"]["max_results"]["default"], 10);
        assert_eq!(schema["properties"]["sort_by"]["default"], "relevance");
        assert_eq!(
            schema["properties"]["sort_by"]["enum"],
            serde_json::json!(["relevance", "lastUpdatedDate", "submittedDate"])
        );
    }
}
