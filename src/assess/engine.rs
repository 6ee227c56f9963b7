use std::sync::Arc;

use tracing::{info, warn};

use crate::dialogue::reply::{DisplayHint, TurnReply};
use crate::dialogue::session::SessionState;
use crate::recommend::advisor::{Advisor, RECOMMENDATION_APOLOGY};

use super::log::{ProfileRecord, ProfileSink};
use super::question::{AnswerKind, QuestionSpec};

/// Shown once, before the first question.
const WELCOME: &str = "As you want to buy insurance, please answer a few questions \
                       so that I can suggest plans suited for you.";

/// State machine over AWAITING_ANSWER(cursor) for each question, with a
/// terminal COMPLETE once every answer is recorded. The cursor lives in the
/// `SessionState` threaded through each call; the engine itself holds only
/// the static catalog and its collaborators.
pub struct QuestionnaireEngine {
    questions: Vec<QuestionSpec>,
    advisor: Advisor,
    sink: Arc<dyn ProfileSink>,
}

impl QuestionnaireEngine {
    pub fn new(questions: Vec<QuestionSpec>, advisor: Advisor, sink: Arc<dyn ProfileSink>) -> Self {
        Self {
            questions,
            advisor,
            sink,
        }
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// Enter the questionnaire. At step 0 this leads with the welcome line;
    /// entry after completion returns the cached terminal text instead.
    pub fn start(&self, session: &mut SessionState) -> TurnReply {
        if session.cursor >= self.questions.len() {
            return self.completed_reply(session);
        }

        session.assessment_active = true;
        let question = &self.questions[session.cursor];
        let text = if session.cursor == 0 {
            format!("{}\n\n{}", WELCOME, render_question(question))
        } else {
            // Resuming mid-flight: re-ask the pending question.
            render_question(question)
        };

        TurnReply::with_hint(text, self.progress(session.cursor))
    }

    /// Feed one raw answer through the machine. Exactly one of three
    /// things happens: a re-prompt (validation failure, no state change),
    /// an advance to the next question, or the terminal transition.
    pub async fn submit(&self, session: &mut SessionState, raw: &str) -> TurnReply {
        let total = self.questions.len();

        // Submitting past COMPLETE is a caller bug; answer it with the
        // cached terminal text, never a second generation or write.
        if session.cursor >= total {
            return self.completed_reply(session);
        }

        let question = &self.questions[session.cursor];
        let value = match question.kind.coerce(raw) {
            Ok(value) => value,
            Err(reason) => {
                info!(key = %question.key, %reason, "answer rejected");
                let text = format!("{}\n{}", reason, render_question(question));
                return TurnReply::with_hint(text, self.progress(session.cursor));
            }
        };

        session.record_answer(&question.key, value);

        if session.cursor < total {
            let next = &self.questions[session.cursor];
            return TurnReply::with_hint(render_question(next), self.progress(session.cursor));
        }

        self.complete(session).await
    }

    /// Re-invoke the recommendation step over the recorded answers. Used
    /// when the user asks for recommendations again; a success replaces
    /// the cached terminal text.
    pub async fn recommend_again(&self, session: &mut SessionState) -> TurnReply {
        match self.advisor.recommend(&self.questions, &session.answers).await {
            Ok(text) => {
                session.recommendation = Some(text.clone());
                TurnReply::with_hint(text, DisplayHint::ShowSchedulingForm)
            }
            Err(e) => {
                warn!(error = %e, "recommendation generation failed");
                TurnReply::text(RECOMMENDATION_APOLOGY)
            }
        }
    }

    /// Terminal transition: persist once, generate once, cache the text.
    async fn complete(&self, session: &mut SessionState) -> TurnReply {
        let record = ProfileRecord {
            session: session.id,
            answers: session.answers.clone(),
        };
        if let Err(e) = self.sink.append(&record) {
            // Durability is best effort; the reply must still go out.
            warn!(error = %e, "profile append failed");
        }

        let text = match self.advisor.recommend(&self.questions, &session.answers).await {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "recommendation generation failed");
                RECOMMENDATION_APOLOGY.to_string()
            }
        };

        session.completed = true;
        session.assessment_active = false;
        session.recommendation = Some(text.clone());
        info!(session = %session.id, "needs assessment complete");

        TurnReply::with_hint(text, DisplayHint::ShowSchedulingForm)
    }

    fn completed_reply(&self, session: &mut SessionState) -> TurnReply {
        session.assessment_active = false;
        let text = session
            .recommendation
            .clone()
            .unwrap_or_else(|| "Your needs assessment is already complete.".to_string());
        TurnReply::with_hint(text, DisplayHint::ShowSchedulingForm)
    }

    fn progress(&self, cursor: usize) -> DisplayHint {
        DisplayHint::Progress {
            current: cursor + 1,
            total: self.questions.len(),
        }
    }
}

/// Prompt plus the input shape, so a plain-text surface can render the
/// question without inspecting the answer kind itself.
fn render_question(question: &QuestionSpec) -> String {
    match &question.kind {
        AnswerKind::Number { min, max } => format!("{} ({}-{})", question.prompt, min, max),
        AnswerKind::SingleChoice { choices } => {
            format!("{} [{}]", question.prompt, choices.join(" / "))
        }
        AnswerKind::MultiChoice { choices } => format!(
            "{} (choose any, comma separated) [{}]",
            question.prompt,
            choices.join(" / ")
        ),
    }
}
