use serde::{Deserialize, Serialize};

/// Advisory flags for the presentation layer. The core never acts on them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayHint {
    Progress { current: usize, total: usize },
    ShowSchedulingForm,
}

/// What a routed turn hands back to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnReply {
    pub text: String,
    pub hints: Vec<DisplayHint>,
}

impl TurnReply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            hints: Vec::new(),
        }
    }

    pub fn with_hint(text: impl Into<String>, hint: DisplayHint) -> Self {
        Self {
            text: text.into(),
            hints: vec![hint],
        }
    }
}
