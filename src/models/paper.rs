//! Paper model representing a single arXiv entry.

use serde::{Deserialize, Serialize};

/// A research paper returned by the arXiv search API.
///
/// All fields except `arxiv_id` and the derived URLs come straight from the
/// upstream Atom feed; missing entry fields fall back to empty strings or
/// empty vectors rather than being treated as errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paper {
    /// arXiv identifier with any trailing version suffix (v1, v2, ...) stripped
    pub arxiv_id: String,

    /// Paper title
    pub title: String,

    /// Author names in feed order
    pub authors: Vec<String>,

    /// Abstract text. `None` only when the caller asked for it to be
    /// omitted; feed parsing always fills it in (possibly with "").
    #[serde(rename = "abstract", skip_serializing_if = "Option::is_none")]
    pub abstract_text: Option<String>,

    /// Publication timestamp as reported upstream (not reparsed)
    pub published: String,

    /// Last-updated timestamp as reported upstream
    pub updated: String,

    /// Category tags in feed order
    pub categories: Vec<String>,

    /// Direct PDF URL, derived from the identifier
    pub pdf_url: String,

    /// Abstract page URL, derived from the identifier
    pub abs_url: String,
}

impl Paper {
    /// Drop the abstract so the serialized object carries no `abstract` key.
    pub fn without_abstract(mut self) -> Self {
        self.abstract_text = None;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Paper {
        Paper {
            arxiv_id: "1706.03762".to_string(),
            title: "Attention Is All You Need".to_string(),
            authors: vec!["Ashish Vaswani".to_string()],
            abstract_text: Some(String::new()),
            published: "2017-06-12T17:57:34Z".to_string(),
            updated: "2017-06-12T17:57:34Z".to_string(),
            categories: vec!["cs.CL".to_string()],
            pdf_url: "https://arxiv.org/pdf/1706.03762.pdf".to_string(),
            abs_url: "https://arxiv.org/abs/1706.03762".to_string(),
        }
    }

    #[test]
    fn abstract_serializes_under_wire_name() {
        let value = serde_json::to_value(sample()).unwrap();
        assert!(value.get("abstract").is_some());
        assert!(value.get("abstract_text").is_none());
    }

    #[test]
    fn without_abstract_removes_the_key() {
        let value = serde_json::to_value(sample().without_abstract()).unwrap();
        assert!(value.get("abstract").is_none());
    }
}
