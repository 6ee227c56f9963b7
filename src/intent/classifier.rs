use std::sync::Arc;

use tracing::{debug, warn};

use crate::services::llm::{GenerationRequest, TextGenerator};

use super::types::Intent;

/// Default classification when the result cannot be determined reliably.
pub const FALLBACK_INTENT: Intent = Intent::GeneralInterest;

/// Classifies a user utterance into the closed intent set by delegating to
/// the generation service. The service call is a soft contract: the label
/// constraint is requested, but the trailing-token parse plus the fallback
/// intent are what make `classify` total.
pub struct IntentClassifier {
    generator: Arc<dyn TextGenerator>,
}

impl IntentClassifier {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Classify free text. Never fails: a service error or unparseable
    /// output both collapse to `FALLBACK_INTENT`.
    pub async fn classify(&self, text: &str) -> Intent {
        let request = GenerationRequest {
            system: instructions(),
            user: format!("Current user input: {}", text),
            temperature: 0.0,
            max_tokens: 8,
            labels: Some(Intent::ALL.iter().map(|i| i.label().to_string()).collect()),
        };

        match self.generator.generate(request).await {
            Ok(raw) => {
                debug!(%raw, "classifier output");
                match parse_label(&raw) {
                    Some(intent) => intent,
                    None => {
                        warn!(%raw, "classifier output matched no label, using fallback");
                        FALLBACK_INTENT
                    }
                }
            }
            Err(e) => {
                warn!(error = %e, "classification call failed, using fallback");
                FALLBACK_INTENT
            }
        }
    }
}

fn instructions() -> String {
    let mut out = String::from(
        "You are an intelligent router for a life insurance conversation. Analyze \
         the user's input to determine their primary intent. Consider the following \
         categories:\n",
    );
    for (i, intent) in Intent::ALL.iter().enumerate() {
        out.push_str(&format!("{}. {}: {}\n", i + 1, intent.label(), intent.description()));
    }
    out.push_str(
        "\nAnalyze the input carefully, considering both explicit and implicit \
         indications of the user's intent. If unsure, default to general_interest.\n\
         Respond with only one of these words: \"general_interest\", \"product_info\", \
         \"purchase_intent\", or \"recommendation_request\".",
    );
    out
}

/// Take the trailing token of the response and match it against the label
/// set. Quote and punctuation noise is stripped so a schema-constrained
/// `"purchase_intent"` still matches.
fn parse_label(raw: &str) -> Option<Intent> {
    let tail = raw.split_whitespace().last()?;
    let tail = tail.trim_matches(|c: char| !c.is_ascii_alphanumeric() && c != '_');
    Intent::from_label(tail)
}
