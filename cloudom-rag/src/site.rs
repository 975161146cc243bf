//! Knowledge base assembled from the site's marketing content.
//!
//! [`site_documents`] renders the [`catalog`](crate::catalog) constants into a
//! fixed, ordered list of [`Document`]s. Nothing is cached; every call builds
//! the list again.

use std::collections::HashSet;

use crate::catalog::{
    ABOUT_CONTENT, COMPANY_NAME, CONTACT, HERO_CONTENT, INDUSTRIES, PORTFOLIO, PRICING_SECTIONS,
    PricingCard, PricingSection, Project, SERVICES,
};
use crate::document::Document;
use crate::error::{RagError, Result};

/// A source of documents for retrieval.
pub trait KnowledgeBase: Send + Sync {
    /// Return all documents in canonical order.
    fn documents(&self) -> Vec<Document>;
}

/// The Cloudom Systems site knowledge base.
#[derive(Debug, Clone, Copy, Default)]
pub struct SiteKnowledge;

impl KnowledgeBase for SiteKnowledge {
    fn documents(&self) -> Vec<Document> {
        site_documents()
    }
}

/// A knowledge base over a fixed list of documents.
#[derive(Debug, Clone, Default)]
pub struct StaticKnowledgeBase {
    documents: Vec<Document>,
}

impl StaticKnowledgeBase {
    /// Wrap `documents`, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`RagError::DuplicateDocument`] if two documents share an id.
    pub fn new(documents: Vec<Document>) -> Result<Self> {
        let mut seen = HashSet::new();
        for doc in &documents {
            if !seen.insert(doc.id.as_str()) {
                return Err(RagError::DuplicateDocument { id: doc.id.clone() });
            }
        }
        Ok(Self { documents })
    }
}

impl KnowledgeBase for StaticKnowledgeBase {
    fn documents(&self) -> Vec<Document> {
        self.documents.clone()
    }
}

/// Build the site documents: overview, services and pricing, industries,
/// portfolio, blog, careers, contact and legal pages, in that order.
pub fn site_documents() -> Vec<Document> {
    let services_text = SERVICES
        .iter()
        .map(|s| format!("• {}: {}", s.title, s.description))
        .collect::<Vec<_>>()
        .join("\n");
    let industries_text = INDUSTRIES
        .iter()
        .map(|i| format!("• {}: {}", i.name, i.description))
        .collect::<Vec<_>>()
        .join("\n");
    let pricing_text =
        PRICING_SECTIONS.iter().map(render_pricing_section).collect::<Vec<_>>().join("\n\n");
    let portfolio_text = PORTFOLIO.iter().map(render_project).collect::<Vec<_>>().join("\n\n");

    vec![
        Document::new(
            "company_overview",
            format!("{COMPANY_NAME} overview"),
            "/",
            format!(
                "{COMPANY_NAME} is a digital product agency.\n\
                 Headline: {} {}\n\
                 Subheadline: {}\n\
                 About: {}\n{}\n\
                 Website: {}",
                HERO_CONTENT.headline_start,
                HERO_CONTENT.headline_end,
                HERO_CONTENT.subheadline,
                ABOUT_CONTENT.p1,
                ABOUT_CONTENT.p2,
                CONTACT.website,
            ),
        ),
        Document::new("services", "Services", "/services", format!("{services_text}\n\n{pricing_text}")),
        Document::new("industries", "Industries", "/#industries", industries_text),
        Document::new("portfolio", "Work portfolio", "/#portfolio", portfolio_text),
        Document::new(
            "blog",
            "Blog",
            "/blog",
            "The blog is powered by Hashnode and rendered on the site.\n\
             Blog URLs look like /blog/:slug.\n\
             If a user asks for a specific post, suggest visiting the Blog page if needed.",
        ),
        Document::new(
            "careers",
            "Careers",
            "/careers",
            "Careers are pulled from GitHub Issues labeled \"job\" in a public repo.\n\
             Roles are listed at /careers and details at /careers/:id.\n\
             Applicants can apply via the Apply button on the job detail page.",
        ),
        Document::new(
            "contact",
            "Contact",
            "/#contact",
            format!(
                "Email: {}\n\
                 Headquarters: {}\n\
                 For inquiries, users can use the contact form on the site or email directly.",
                CONTACT.email, CONTACT.address,
            ),
        ),
        Document::new("legal", "Legal pages", "/privacy", "Legal pages available: /privacy and /terms."),
    ]
}

fn render_pricing_section(section: &PricingSection) -> String {
    let cards = section.cards.iter().map(render_pricing_card).collect::<Vec<_>>().join("\n");
    format!("{} {}\n{}", section.title, section.highlight_word, cards)
}

fn render_pricing_card(card: &PricingCard) -> String {
    let meta = [card.price, card.subtitle]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" · ");
    let features = card.features.iter().map(|f| format!("  • {f}")).collect::<Vec<_>>().join("\n");
    if meta.is_empty() {
        format!("• {}\n{}", card.title, features)
    } else {
        format!("• {} ({})\n{}", card.title, meta, features)
    }
}

fn render_project(project: &Project) -> String {
    let stack = if project.tech_stack.is_empty() {
        String::new()
    } else {
        format!("Tech: {}", project.tech_stack.join(", "))
    };
    format!(
        "• {} ({}): {}\n  Problem: {}\n  Solution: {}\n  Outcome: {}\n  {}",
        project.title,
        project.category,
        project.description,
        project.problem.unwrap_or_default(),
        project.solution.unwrap_or_default(),
        project.outcome.unwrap_or_default(),
        stack,
    )
    .trim()
    .to_string()
}
