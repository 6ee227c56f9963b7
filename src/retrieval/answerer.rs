use std::sync::Arc;

use tracing::debug;

use crate::services::llm::{GenerationRequest, ServiceError, TextGenerator};

use super::index::PassageIndex;

const SUMMARIZER: &str =
    "You are an AI assistant specializing in insurance plans. Provide a \
     comprehensive summary of ALL different insurance plans mentioned in the \
     context. Focus on key features and differences between plans. If only one \
     plan is mentioned, state that clearly.";

/// Retrieval-augmented answerer for product questions: a generation call
/// over the concatenated nearest passages.
pub struct ProductAnswerer {
    index: Arc<dyn PassageIndex>,
    generator: Arc<dyn TextGenerator>,
    top_k: usize,
}

impl ProductAnswerer {
    pub fn new(index: Arc<dyn PassageIndex>, generator: Arc<dyn TextGenerator>, top_k: usize) -> Self {
        Self {
            index,
            generator,
            top_k,
        }
    }

    pub async fn answer(&self, query: &str) -> Result<String, ServiceError> {
        let passages = self.index.search(query, self.top_k);
        debug!(hits = passages.len(), "retrieved context");

        let context = passages
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("\n");

        let request = GenerationRequest {
            system: SUMMARIZER.to_string(),
            user: format!(
                "Context: {}\n\nQuery: {}\n\nProvide a summary of the insurance plans mentioned:",
                context, query
            ),
            temperature: 0.0,
            max_tokens: 512,
            labels: None,
        };

        self.generator.generate(request).await
    }
}
