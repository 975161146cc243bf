//! Property tests for keyword retrieval.

use std::collections::HashSet;
use std::sync::Arc;

use cloudom_rag::document::Document;
use cloudom_rag::retriever::{KeywordRetriever, render_context};
use cloudom_rag::site::{KnowledgeBase, SiteKnowledge, StaticKnowledgeBase};
use proptest::prelude::*;

/// Generate a document list with unique ids and lowercase word text.
fn arb_documents() -> impl Strategy<Value = Vec<Document>> {
    proptest::collection::vec(("[a-z]{3,8}", "[a-z ]{5,40}"), 1..12).prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(idx, (title, text))| {
                Document::new(format!("doc_{idx}"), title, format!("/doc/{idx}"), text)
            })
            .collect()
    })
}

fn retriever(docs: &[Document]) -> KeywordRetriever {
    KeywordRetriever::new(Arc::new(StaticKnowledgeBase::new(docs.to_vec()).unwrap()))
}

/// *For any* non-empty knowledge base and any query, the context is non-empty.
mod prop_context_never_empty {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn context_is_non_empty(
            docs in arb_documents(),
            query in ".{0,40}",
            max_docs in 0usize..8,
        ) {
            let context = retriever(&docs).build_context(&query, max_docs);
            prop_assert!(!context.is_empty());
        }
    }
}

/// *For any* query that shares no token with the documents, the context is the
/// first `max_docs` documents in original order.
mod prop_fallback_uses_original_order {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn unmatched_query_renders_first_documents(
            docs in arb_documents(),
            max_docs in 1usize..8,
        ) {
            // Documents only contain letters, so a digit-only query never matches.
            let context = retriever(&docs).build_context("12345 67890", max_docs);
            let expected = render_context(&docs[..max_docs.min(docs.len())]);
            prop_assert_eq!(context, expected);
        }
    }
}

/// *For any* query, repeating its tokens never changes any document's score.
mod prop_duplicate_terms_do_not_add_score {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn repeated_query_scores_match_single_query(
            docs in arb_documents(),
            query in "[a-z ]{1,30}",
            repeats in 2usize..5,
        ) {
            let r = retriever(&docs);
            let once = r.rank(&query);
            let repeated = r.rank(&vec![query.as_str(); repeats].join(" "));
            prop_assert_eq!(once, repeated);
        }
    }
}

/// *For any* ranking, scores are even, descending, and bounded by twice the
/// number of distinct query terms.
mod prop_rank_ordering {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn scores_descend_and_are_bounded(
            docs in arb_documents(),
            query in "[a-z ]{1,30}",
        ) {
            let distinct: HashSet<&str> = query
                .split_whitespace()
                .filter(|t| (2..=32).contains(&t.len()))
                .collect();
            let ranked = retriever(&docs).rank(&query);
            prop_assert_eq!(ranked.len(), docs.len());
            for window in ranked.windows(2) {
                prop_assert!(window[0].score >= window[1].score);
            }
            for scored in &ranked {
                prop_assert_eq!(scored.score % 2, 0);
                prop_assert!(scored.score <= 2 * distinct.len());
            }
        }
    }
}

#[test]
fn token_unique_to_one_document_selects_it() {
    let docs = vec![
        Document::new("a", "Alpha", "/a", "shared words here"),
        Document::new("b", "Beta", "/b", "shared words plus zeppelin"),
        Document::new("c", "Gamma", "/c", "shared words again"),
    ];
    let chosen = retriever(&docs).select("zeppelin", 1);
    assert_eq!(chosen.len(), 1);
    assert_eq!(chosen[0].id, "b");
}

#[test]
fn mobile_app_cost_ranks_pricing_ahead_of_legal() {
    let r = KeywordRetriever::default();
    let context = r.build_context("how much does a mobile app cost", 5);

    let services = context.find("Services\nURL: /services").expect("services document selected");
    assert!(context.contains("MVP Mobile App"));
    assert!(context.contains("$15,000 - $25,000"));
    if let Some(legal) = context.find("Legal pages") {
        assert!(services < legal);
    }
}

#[test]
fn nonsense_query_falls_back_to_site_overview() {
    let context = KeywordRetriever::default().build_context("qqqq zzzz", 2);
    let docs = SiteKnowledge.documents();
    assert_eq!(context, render_context(&docs[..2]));
    assert!(context.starts_with("Cloudom Systems overview\nURL: /"));
}

#[test]
fn careers_question_finds_careers_document() {
    let chosen = KeywordRetriever::default().select("are there any careers open?", 5);
    assert!(chosen.iter().any(|d| d.id == "careers"));
}
