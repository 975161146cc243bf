//! # cloudom-rag
//!
//! Site knowledge base and keyword retrieval for Cloudom Systems AI support.
//!
//! ## Overview
//!
//! - [`site_documents`] turns the marketing [`catalog`] into a fixed list of [`Document`]s.
//! - [`KeywordRetriever`] scores documents by distinct-term overlap with a query
//!   and renders the best matches as a context block for the chat proxy.
//!
//! ## Quick Start
//!
//! ```rust
//! use cloudom_rag::{DEFAULT_MAX_DOCS, build_context_for_query};
//!
//! let context = build_context_for_query("do you build shopify stores?", DEFAULT_MAX_DOCS);
//! assert!(context.contains("Shopify Store"));
//! ```

pub mod catalog;
pub mod config;
pub mod document;
pub mod error;
pub mod retriever;
pub mod site;
pub mod tokenize;

pub use config::{DEFAULT_MAX_DOCS, RetrievalConfig, RetrievalConfigBuilder};
pub use document::{Document, ScoredDocument};
pub use error::{RagError, Result};
pub use retriever::{
    KeywordRetriever, MATCH_WEIGHT, build_context_for_query, build_default_context, render_context,
};
pub use site::{KnowledgeBase, SiteKnowledge, StaticKnowledgeBase, site_documents};
pub use tokenize::Tokenizer;
