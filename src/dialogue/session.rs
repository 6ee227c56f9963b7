use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::assess::question::AnswerValue;
use crate::intent::types::Intent;

/// All per-conversation mutable data. Owned by the caller and threaded
/// explicitly through every routed turn; nothing here is global. One
/// session is mutated by at most one turn at a time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    pub id: Uuid,
    /// Index into the question catalog.
    /// Invariant: 0 <= cursor <= N, monotonically non-decreasing.
    pub cursor: usize,
    /// Typed answers keyed by question key, each written once.
    /// Invariant: holds exactly the keys of questions with index < cursor.
    pub answers: HashMap<String, AnswerValue>,
    /// True once the questionnaire finished and a terminal text was
    /// produced. Monotonic; never reverts.
    pub completed: bool,
    /// Intent the router assigned on the last classified turn.
    pub last_intent: Option<Intent>,
    /// Set while the questionnaire is mid-flight. Routing forwards raw
    /// input to the engine instead of classifying while this holds.
    pub assessment_active: bool,
    /// Terminal text cached for idempotent completion.
    pub recommendation: Option<String>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            cursor: 0,
            answers: HashMap::new(),
            completed: false,
            last_intent: None,
            assessment_active: false,
            recommendation: None,
        }
    }

    /// Record the answer for the question at the cursor and advance.
    pub fn record_answer(&mut self, key: &str, value: AnswerValue) {
        // Write-once: a key already present keeps its value.
        self.answers.entry(key.to_string()).or_insert(value);
        self.cursor += 1;
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
