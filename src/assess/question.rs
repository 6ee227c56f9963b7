use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How a raw answer is coerced. One variant per input shape of the
/// needs-assessment flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AnswerKind {
    Number { min: i64, max: i64 },
    SingleChoice { choices: Vec<String> },
    MultiChoice { choices: Vec<String> },
}

/// One assessment question. The catalog is static, ordered, and immutable
/// for the process lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionSpec {
    /// Unique key the answer is recorded under.
    pub key: String,
    pub prompt: String,
    pub kind: AnswerKind,
}

impl QuestionSpec {
    pub fn new(key: &str, prompt: &str, kind: AnswerKind) -> Self {
        Self {
            key: key.to_string(),
            prompt: prompt.to_string(),
            kind,
        }
    }
}

/// Typed answer value. Written once per key, never mutated for the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Number(i64),
    Choice(String),
    Selections(Vec<String>),
}

/// Rejection of a raw answer. Recovered locally: the engine re-prompts the
/// same question and the cursor does not advance.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Please answer with a whole number.")]
    NotANumber,
    #[error("Please enter a value between {min} and {max}.")]
    OutOfRange { min: i64, max: i64 },
    #[error("\"{got}\" is not one of the offered options.")]
    UnknownChoice { got: String },
}

impl AnswerKind {
    /// Coerce raw user text into a typed value.
    pub fn coerce(&self, raw: &str) -> Result<AnswerValue, ValidationError> {
        match self {
            AnswerKind::Number { min, max } => {
                let value: i64 = raw
                    .trim()
                    .parse()
                    .map_err(|_| ValidationError::NotANumber)?;
                // Reject, never clamp: the user must re-enter.
                if value < *min || value > *max {
                    return Err(ValidationError::OutOfRange { min: *min, max: *max });
                }
                Ok(AnswerValue::Number(value))
            }
            AnswerKind::SingleChoice { choices } => {
                let wanted = raw.trim();
                choices
                    .iter()
                    .find(|c| c.eq_ignore_ascii_case(wanted))
                    .map(|c| AnswerValue::Choice(c.clone()))
                    .ok_or_else(|| ValidationError::UnknownChoice {
                        got: wanted.to_string(),
                    })
            }
            AnswerKind::MultiChoice { choices } => {
                let mut picked: Vec<String> = Vec::new();
                for token in split_selections(raw) {
                    match choices.iter().find(|c| c.eq_ignore_ascii_case(&token)) {
                        // Store the canonical spelling, not the user's casing
                        Some(c) => {
                            if !picked.contains(c) {
                                picked.push(c.clone());
                            }
                        }
                        None => return Err(ValidationError::UnknownChoice { got: token }),
                    }
                }
                Ok(AnswerValue::Selections(picked))
            }
        }
    }
}

/// Multi-select answers arrive either as a JSON array (forms post one) or
/// as comma-separated text. Empty input is the empty selection.
fn split_selections(raw: &str) -> Vec<String> {
    let raw = raw.trim();
    if raw.starts_with('[') {
        if let Ok(items) = serde_json::from_str::<Vec<String>>(raw) {
            return items
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }
    }
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn choices(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The default needs-assessment catalog.
pub fn default_questions() -> Vec<QuestionSpec> {
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
        QuestionSpec::new(
            "PaymentPreference",
            "What is your preferred premium payment method?",
            AnswerKind::SingleChoice {
                choices: choices(&["One-time payment", "Regular payments"]),
            },
        ),
        QuestionSpec::new(
            "InsuranceNeeds",
            "What are your primary insurance needs?",
            AnswerKind::MultiChoice {
                choices: choices(&[
                    "Basic life protection",
                    "Savings and investment",
                    "Children's education fund",
                    "Health protection",
                    "Accident protection",
                    "Critical illness coverage",
                    "Family income protection",
                ]),
            },
        ),
        QuestionSpec::new(
            "HealthConcerns",
            "Do you have any specific health concerns?",
            AnswerKind::MultiChoice {
                choices: choices(&[
                    "Cancer risks",
                    "Critical illnesses",
                    "Hospital and surgery expenses",
                    "No specific concerns",
                ]),
            },
        ),
    ]
}
