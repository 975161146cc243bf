//! Data types for site documents and ranked retrieval results.

/// A short piece of site content that can be retrieved as chat context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Unique identifier for the document.
    pub id: String,
    /// Human-readable title, also searched during retrieval.
    pub title: String,
    /// Site path the document describes (e.g. `/services`).
    pub url: String,
    /// Free-form text content.
    pub text: String,
}

impl Document {
    /// Create a new document.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        url: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self { id: id.into(), title: title.into(), url: url.into(), text: text.into() }
    }

    /// The text searched by the retriever: title and body on separate lines.
    pub fn searchable_text(&self) -> String {
        format!("{}\n{}", self.title, self.text)
    }

    /// Render the document as a context block.
    pub fn render(&self) -> String {
        format!("{}\nURL: {}\n{}", self.title, self.url, self.text).trim().to_string()
    }
}

/// A [`Document`] paired with its keyword score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredDocument {
    /// The scored document.
    pub document: Document,
    /// Keyword overlap score (higher is more relevant, 0 means no match).
    pub score: usize,
}
