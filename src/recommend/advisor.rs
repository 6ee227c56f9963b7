use std::collections::HashMap;
use std::sync::Arc;

use crate::assess::question::{AnswerValue, QuestionSpec};
use crate::services::llm::{GenerationRequest, ServiceError, TextGenerator};

use super::catalog::render_catalog;

/// Returned to the user when the recommendation call fails. The session
/// still completes; asking for recommendations again re-runs the step.
pub const RECOMMENDATION_APOLOGY: &str =
    "Xin lỗi, đã có lỗi xảy ra trong quá trình tạo đề xuất. Vui lòng thử lại sau.";

const SPECIALIST: &str =
    "You are an MB Ageas Life insurance specialist. Your task is to analyze the \
     customer profile and recommend suitable insurance products. Focus on the \
     customer's specific needs and circumstances, recommend relevant products from \
     the provided product information, and explain why each product is suitable for \
     their situation. Present all information in Vietnamese and keep explanations \
     clear and concise.";

/// The terminal recommendation step: one generation call over the full
/// answer map and the product catalog.
pub struct Advisor {
    generator: Arc<dyn TextGenerator>,
}

impl Advisor {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Interpolate every recorded answer into the specialist template and
    /// return the service text unmodified.
    pub async fn recommend(
        &self,
        questions: &[QuestionSpec],
        answers: &HashMap<String, AnswerValue>,
    ) -> Result<String, ServiceError> {
        let request = GenerationRequest {
            system: SPECIALIST.to_string(),
            user: profile_prompt(questions, answers),
            temperature: 0.0,
            max_tokens: 3000,
            labels: None,
        };
        self.generator.generate(request).await
    }
}

fn profile_prompt(questions: &[QuestionSpec], answers: &HashMap<String, AnswerValue>) -> String {
    let mut out = String::from("Customer Profile:\n");
    // Question order, not map order, so the profile reads like the
    // assessment did.
    for question in questions {
        if let Some(value) = answers.get(&question.key) {
            out.push_str(&format!("{}: {}\n", question.key, render_value(value)));
        }
    }
    out.push_str("\nProduct Information:\n");
    out.push_str(&render_catalog());
    out.push_str("\nVui lòng đề xuất các sản phẩm bảo hiểm phù hợp và giải thích lý do lựa chọn:");
    out
}

fn render_value(value: &AnswerValue) -> String {
    match value {
        AnswerValue::Number(n) => n.to_string(),
        AnswerValue::Choice(choice) => choice.clone(),
        AnswerValue::Selections(items) => items.join(", "),
    }
}
