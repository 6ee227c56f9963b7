use std::sync::Arc;

use tracing::{info, warn};

use crate::assess::engine::QuestionnaireEngine;
use crate::intent::classifier::IntentClassifier;
use crate::intent::types::Intent;
use crate::retrieval::answerer::ProductAnswerer;
use crate::services::llm::{GenerationRequest, TextGenerator};

use super::reply::TurnReply;
use super::session::SessionState;

/// Friendly degradation when a reply could not be generated. The session
/// is left untouched so the user can simply try again.
pub const SERVICE_APOLOGY: &str = "Xin lỗi, hệ thống đang gặp sự cố. Vui lòng thử lại sau.";

const PERSONA: &str =
    "You are a friendly and empathetic life insurance sales agent. Build rapport \
     and keep the conversation short. Listen actively and respond to the customer's \
     comments or questions. Provide brief, easy-to-understand information about \
     life insurance when appropriate. Stay natural and patient, never pushy, and \
     keep your reply around 50 words. Always end by asking whether the customer \
     wants to buy life insurance or learn more about it.";

/// Composition root: one `route` call per user turn. The router itself is
/// stateless; everything mutable lives in the `SessionState` it threads.
pub struct DialogueRouter {
    classifier: IntentClassifier,
    engine: QuestionnaireEngine,
    answerer: ProductAnswerer,
    generator: Arc<dyn TextGenerator>,
}

impl DialogueRouter {
    pub fn new(
        classifier: IntentClassifier,
        engine: QuestionnaireEngine,
        answerer: ProductAnswerer,
        generator: Arc<dyn TextGenerator>,
    ) -> Self {
        Self {
            classifier,
            engine,
            answerer,
            generator,
        }
    }

    pub async fn route(&self, session: &mut SessionState, input: &str) -> TurnReply {
        // A mid-flight questionnaire takes precedence over classification:
        // raw input is an answer, not an utterance to route.
        if session.assessment_active {
            session.last_intent = Some(Intent::PurchaseIntent);
            return self.engine.submit(session, input).await;
        }

        let intent = self.classifier.classify(input).await;
        info!(label = intent.label(), "routed turn");
        session.last_intent = Some(intent);

        match intent {
            Intent::GeneralInterest => self.sales_reply(input).await,
            Intent::ProductInfo => match self.answerer.answer(input).await {
                Ok(text) => TurnReply::text(text),
                Err(e) => {
                    warn!(error = %e, "product answer failed");
                    TurnReply::text(SERVICE_APOLOGY)
                }
            },
            Intent::PurchaseIntent => self.engine.start(session),
            Intent::RecommendationRequest => {
                if session.answers.is_empty() {
                    // Nothing to recommend from yet; run the assessment.
                    self.engine.start(session)
                } else {
                    self.engine.recommend_again(session).await
                }
            }
        }
    }

    /// Short empathetic reply that always ends by asking whether the user
    /// wants to buy or learn more. No session mutation.
    async fn sales_reply(&self, input: &str) -> TurnReply {
        let request = GenerationRequest {
            system: PERSONA.to_string(),
            user: input.to_string(),
            temperature: 0.7,
            max_tokens: 160,
            labels: None,
        };

        match self.generator.generate(request).await {
            Ok(text) => TurnReply::text(text),
            Err(e) => {
                warn!(error = %e, "sales reply generation failed");
                TurnReply::text(SERVICE_APOLOGY)
            }
        }
    }
}
