mod common;

use std::sync::Arc;

use aegis::intent::classifier::{IntentClassifier, FALLBACK_INTENT};
use aegis::intent::types::Intent;

use common::ScriptedGenerator;

#[tokio::test]
async fn test_every_label_resolves() {
    for intent in Intent::ALL {
        let generator = Arc::new(ScriptedGenerator::replies(&[intent.label()]));
        let classifier = IntentClassifier::new(generator);

        let got = classifier.classify("some user text").await;
        assert_eq!(got, intent, "label {} should round-trip", intent.label());
    }
}

#[tokio::test]
async fn test_trailing_token_is_parsed() {
    // A chatty service answers with preamble; only the trailing token counts.
    let generator = Arc::new(ScriptedGenerator::replies(&["Your answer: product_info"]));
    let classifier = IntentClassifier::new(generator);

    let got = classifier.classify("tell me about coverage").await;
    assert_eq!(got, Intent::ProductInfo);
}

#[tokio::test]
async fn test_schema_constrained_quoting_is_stripped() {
    // Constrained decoding returns a JSON string literal.
    let generator = Arc::new(ScriptedGenerator::replies(&["\"purchase_intent\""]));
    let classifier = IntentClassifier::new(generator);

    let got = classifier.classify("I want to buy a policy").await;
    assert_eq!(got, Intent::PurchaseIntent);
}

#[tokio::test]
async fn test_label_match_is_case_insensitive() {
    let generator = Arc::new(ScriptedGenerator::replies(&["RECOMMENDATION_REQUEST"]));
    let classifier = IntentClassifier::new(generator);

    let got = classifier.classify("what should I get?").await;
    assert_eq!(got, Intent::RecommendationRequest);
}

#[tokio::test]
async fn test_garbage_output_falls_back() {
    let generator = Arc::new(ScriptedGenerator::replies(&["I think the user is curious"]));
    let classifier = IntentClassifier::new(generator);

    let got = classifier.classify("hmm").await;
    assert_eq!(got, FALLBACK_INTENT, "unparseable output must use the fallback");
}

#[tokio::test]
async fn test_empty_output_falls_back() {
    let generator = Arc::new(ScriptedGenerator::replies(&[""]));
    let classifier = IntentClassifier::new(generator);

    let got = classifier.classify("hello").await;
    assert_eq!(got, FALLBACK_INTENT);
}

#[tokio::test]
async fn test_service_error_falls_back() {
    let generator = Arc::new(ScriptedGenerator::new());
    generator.push_err("service down");
    let classifier = IntentClassifier::new(generator);

    let got = classifier.classify("hello").await;
    assert_eq!(got, FALLBACK_INTENT, "service errors must not surface to the caller");
}

#[tokio::test]
async fn test_whitespace_only_input_still_resolves() {
    let generator = Arc::new(ScriptedGenerator::replies(&["general_interest"]));
    let classifier = IntentClassifier::new(generator);

    let got = classifier.classify("   ").await;
    assert_eq!(got, Intent::GeneralInterest);
}

#[tokio::test]
async fn test_request_carries_label_constraint() {
    let generator = Arc::new(ScriptedGenerator::replies(&["general_interest"]));
    let classifier = IntentClassifier::new(generator.clone());

    classifier.classify("hello there").await;

    assert_eq!(generator.calls(), 1);
    let request = generator.request(0);
    assert_eq!(request.temperature, 0.0, "classification must be deterministic");
    let labels = request.labels.expect("classifier should constrain the label set");
    assert_eq!(labels.len(), 4);
    assert!(labels.contains(&"purchase_intent".to_string()));
    assert!(request.user.contains("hello there"));
}
