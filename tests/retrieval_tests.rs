mod common;

use std::sync::Arc;

use aegis::retrieval::answerer::ProductAnswerer;
use aegis::retrieval::index::{KeywordIndex, Passage, PassageIndex};

use common::{catalog_passages, ScriptedGenerator};

fn passage(source: &str, text: &str) -> Passage {
    Passage {
        source: source.to_string(),
        text: text.to_string(),
    }
}

#[test]
fn test_keyword_index_ranks_rare_terms_higher() {
    let index = KeywordIndex::new(vec![
        passage("a", "life insurance with protection benefits"),
        passage("b", "education fund insurance for children"),
        passage("c", "critical illness insurance coverage"),
    ]);

    let hits = index.search("education fund for my children", 3);

    assert!(!hits.is_empty());
    assert_eq!(hits[0].source, "b", "the education passage should rank first");
}

#[test]
fn test_keyword_index_honours_top_k() {
    let index = KeywordIndex::new(vec![
        passage("a", "insurance plan one"),
        passage("b", "insurance plan two"),
        passage("c", "insurance plan three"),
    ]);

    let hits = index.search("insurance plan", 2);
    assert_eq!(hits.len(), 2);
}

#[test]
fn test_keyword_index_returns_nothing_without_overlap() {
    let index = KeywordIndex::new(catalog_passages());

    let hits = index.search("zzz qqq", 10);
    assert!(hits.is_empty(), "no shared tokens means no hits");
}

#[tokio::test]
async fn test_answerer_composes_context_from_hits() {
    let generator = Arc::new(ScriptedGenerator::replies(&["summary text"]));
    let index = Arc::new(KeywordIndex::new(catalog_passages()));
    let answerer = ProductAnswerer::new(index, generator.clone(), 10);

    let answer = answerer
        .answer("what education plans do you offer?")
        .await
        .expect("scripted success");

    assert_eq!(answer, "summary text");
    let request = generator.request(0);
    assert!(
        request.user.contains("Học Vấn Tương Lai"),
        "education query should pull the education plan passage"
    );
    assert!(request.user.contains("Query: what education plans do you offer?"));
}

#[tokio::test]
async fn test_answerer_propagates_service_errors() {
    let generator = Arc::new(ScriptedGenerator::new());
    generator.push_err("boom");
    let index = Arc::new(KeywordIndex::new(catalog_passages()));
    let answerer = ProductAnswerer::new(index, generator, 10);

    let result = answerer.answer("term life").await;
    assert!(result.is_err(), "the router owns the apology, not the answerer");
}
