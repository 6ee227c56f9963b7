#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use aegis::assess::engine::QuestionnaireEngine;
use aegis::assess::log::{PersistError, ProfileRecord, ProfileSink};
use aegis::assess::question::{AnswerKind, QuestionSpec};
use aegis::dialogue::router::DialogueRouter;
use aegis::intent::classifier::IntentClassifier;
use aegis::recommend::advisor::Advisor;
use aegis::recommend::catalog::CATALOG;
use aegis::retrieval::answerer::ProductAnswerer;
use aegis::retrieval::index::{KeywordIndex, Passage};
use aegis::services::llm::{GenerationRequest, ServiceError, TextGenerator};

/// Scripted generator: pops canned results front to back and records every
/// request it saw. An exhausted script fails the call.
pub struct ScriptedGenerator {
    script: Mutex<VecDeque<Result<String, String>>>,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl ScriptedGenerator {
    pub fn new() -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn replies(replies: &[&str]) -> Self {
        let generator = Self::new();
        for reply in replies {
            generator.push_ok(reply);
        }
        generator
    }

    pub fn push_ok(&self, text: &str) {
        self.script.lock().unwrap().push_back(Ok(text.to_string()));
    }

    pub fn push_err(&self, reason: &str) {
        self.script.lock().unwrap().push_back(Err(reason.to_string()));
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn request(&self, index: usize) -> GenerationRequest {
        self.requests.lock().unwrap()[index].clone()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, request: GenerationRequest) -> Result<String, ServiceError> {
        self.requests.lock().unwrap().push(request);
        match self.script.lock().unwrap().pop_front() {
            Some(Ok(text)) => Ok(text),
            Some(Err(reason)) => Err(ServiceError::Malformed(reason)),
            None => Err(ServiceError::Malformed("script exhausted".to_string())),
        }
    }
}

/// Sink that records appended profiles; optionally fails every write.
pub struct RecordingSink {
    records: Mutex<Vec<ProfileRecord>>,
    fail: bool,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn count(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub fn record(&self, index: usize) -> ProfileRecord {
        self.records.lock().unwrap()[index].clone()
    }
}

impl ProfileSink for RecordingSink {
    fn append(&self, record: &ProfileRecord) -> Result<(), PersistError> {
        if self.fail {
            return Err(PersistError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "sink offline",
            )));
        }
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}

fn choices(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The short assessment used by the scenario tests.
pub fn four_questions() -> Vec<QuestionSpec> {
    vec![
        QuestionSpec::new(
            "Age",
            "How old are you?",
            AnswerKind::Number { min: 18, max: 100 },
        ),
        QuestionSpec::new(
            "MaritalStatus",
            "What is your marital status?",
            AnswerKind::SingleChoice {
                choices: choices(&["Single", "Married"]),
            },
        ),
        QuestionSpec::new(
            "HasChildren",
            "Do you have children?",
            AnswerKind::SingleChoice {
                choices: choices(&["Yes", "No"]),
            },
        ),
        QuestionSpec::new(
            "Income",
            "What is your monthly income range?",
            AnswerKind::SingleChoice {
                choices: choices(&[
                    "Less than 10 million VND",
                    "10-20 million VND",
                    "20-50 million VND",
                    "Above 50 million VND",
                ]),
            },
        ),
    ]
}

pub fn catalog_passages() -> Vec<Passage> {
    CATALOG
        .iter()
        .map(|entry| Passage {
            source: entry.name.to_string(),
            text: entry.render(),
        })
        .collect()
}

/// Full wiring over the scripted generator and recording sink.
pub fn build_router(
    generator: Arc<ScriptedGenerator>,
    sink: Arc<RecordingSink>,
    questions: Vec<QuestionSpec>,
) -> DialogueRouter {
    let generator: Arc<dyn TextGenerator> = generator;
    let index = Arc::new(KeywordIndex::new(catalog_passages()));

    DialogueRouter::new(
        IntentClassifier::new(generator.clone()),
        QuestionnaireEngine::new(questions, Advisor::new(generator.clone()), sink),
        ProductAnswerer::new(index, generator.clone(), 10),
        generator,
    )
}
