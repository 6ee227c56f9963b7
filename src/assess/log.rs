use std::collections::HashMap;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::question::AnswerValue;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("profile log io: {0}")]
    Io(#[from] std::io::Error),
    #[error("profile log serialization: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// One completed needs assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub session: Uuid,
    pub answers: HashMap<String, AnswerValue>,
}

/// Append-only sink for completed profiles. The engine writes exactly one
/// record per completed session; the core has no read path.
pub trait ProfileSink: Send + Sync {
    fn append(&self, record: &ProfileRecord) -> Result<(), PersistError>;
}

/// Durable sink: one JSON line per record.
pub struct JsonlProfileLog {
    path: PathBuf,
}

impl JsonlProfileLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ProfileSink for JsonlProfileLog {
    fn append(&self, record: &ProfileRecord) -> Result<(), PersistError> {
        let mut line = serde_json::to_string(record)?;
        line.push('\n');
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;
        Ok(())
    }
}
