//! Keyword retrieval over a [`KnowledgeBase`].
//!
//! Scoring is plain bag-of-words overlap: each distinct query term found in
//! a document's title or text adds [`MATCH_WEIGHT`]. Documents are ranked by
//! a stable descending sort, so ties keep knowledge base order. When nothing
//! matches, the first documents are used instead so the context is never
//! empty.
//!
//! # Example
//!
//! ```rust
//! use cloudom_rag::build_context_for_query;
//!
//! let context = build_context_for_query("how much does a mobile app cost", 3);
//! assert!(context.starts_with("Services\nURL: /services"));
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use crate::config::{DEFAULT_MAX_DOCS, RetrievalConfig};
use crate::document::{Document, ScoredDocument};
use crate::error::Result;
use crate::site::{KnowledgeBase, SiteKnowledge};
use crate::tokenize::Tokenizer;

/// Score added for every distinct query term present in a document.
pub const MATCH_WEIGHT: usize = 2;

/// Selects context documents for a query by keyword overlap.
#[derive(Clone)]
pub struct KeywordRetriever {
    knowledge: Arc<dyn KnowledgeBase>,
    config: RetrievalConfig,
    tokenizer: Tokenizer,
}

impl std::fmt::Debug for KeywordRetriever {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeywordRetriever").field("config", &self.config).finish_non_exhaustive()
    }
}

impl Default for KeywordRetriever {
    fn default() -> Self {
        Self::new(Arc::new(SiteKnowledge))
    }
}

impl KeywordRetriever {
    /// Create a retriever over `knowledge` with the default configuration.
    pub fn new(knowledge: Arc<dyn KnowledgeBase>) -> Self {
        let config = RetrievalConfig::default();
        Self { knowledge, tokenizer: Tokenizer::from_config(&config), config }
    }

    /// Replace the retrieval configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RagError::ConfigError`](crate::RagError::ConfigError) if the
    /// configuration does not pass [`RetrievalConfig::validate`].
    pub fn with_config(mut self, config: RetrievalConfig) -> Result<Self> {
        config.validate()?;
        self.tokenizer = Tokenizer::from_config(&config);
        self.config = config;
        Ok(self)
    }

    /// Return the retrieval configuration.
    pub fn config(&self) -> &RetrievalConfig {
        &self.config
    }

    /// Score one document against a set of distinct query terms.
    pub fn score(&self, query_terms: &HashSet<String>, document: &Document) -> usize {
        let doc_terms = self.tokenizer.term_set(&document.searchable_text());
        query_terms.iter().filter(|term| doc_terms.contains(*term)).count() * MATCH_WEIGHT
    }

    /// Score every document and return them ranked by descending score.
    ///
    /// Documents with equal scores keep their knowledge base order.
    pub fn rank(&self, query: &str) -> Vec<ScoredDocument> {
        let query_terms = self.tokenizer.term_set(query);
        let mut scored: Vec<ScoredDocument> = self
            .knowledge
            .documents()
            .into_iter()
            .map(|document| {
                let score = self.score(&query_terms, &document);
                ScoredDocument { document, score }
            })
            .collect();
        // `sort_by` is stable, which makes original order the tie-break.
        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored
    }

    /// Choose up to `max_docs` documents for `query`.
    ///
    /// Only documents with a positive score are chosen. If none match, the
    /// first `max_docs` documents are returned in knowledge base order. A
    /// `max_docs` of zero is treated as one.
    pub fn select(&self, query: &str, max_docs: usize) -> Vec<Document> {
        let max_docs = max_docs.max(1);
        let terms = self.tokenizer.term_set(query).len();
        let ranked = self.rank(query);

        let chosen: Vec<Document> = ranked
            .iter()
            .filter(|s| s.score > 0)
            .take(max_docs)
            .map(|s| s.document.clone())
            .collect();

        if !chosen.is_empty() {
            debug!(terms, matched = chosen.len(), max_docs, fallback = false, "selected context documents");
            return chosen;
        }

        let fallback: Vec<Document> = self.knowledge.documents().into_iter().take(max_docs).collect();
        debug!(terms, matched = 0, max_docs, fallback = true, "selected context documents");
        fallback
    }

    /// Build the context block for `query` using at most `max_docs` documents.
    pub fn build_context(&self, query: &str, max_docs: usize) -> String {
        render_context(&self.select(query, max_docs))
    }

    /// Build the context block using the configured `max_docs`.
    pub fn context_for(&self, query: &str) -> String {
        self.build_context(query, self.config.max_docs)
    }
}

/// Render documents as one context string, separated by blank lines.
pub fn render_context(documents: &[Document]) -> String {
    documents.iter().map(Document::render).collect::<Vec<_>>().join("\n\n")
}

/// Build the context block for `query` from the site knowledge base.
///
/// Pass [`DEFAULT_MAX_DOCS`] for the standard context size.
pub fn build_context_for_query(query: &str, max_docs: usize) -> String {
    KeywordRetriever::default().build_context(query, max_docs)
}

/// Build the context block for `query` with [`DEFAULT_MAX_DOCS`] documents.
pub fn build_default_context(query: &str) -> String {
    build_context_for_query(query, DEFAULT_MAX_DOCS)
}
