use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

/// One retrievable text chunk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Passage {
    /// Plan or document the chunk came from.
    pub source: String,
    pub text: String,
}

/// Nearest-passage lookup boundary. Index construction is upstream of this
/// core; implementations only owe the query contract.
pub trait PassageIndex: Send + Sync {
    fn search(&self, query: &str, top_k: usize) -> Vec<Passage>;
}

/// IDF-weighted keyword index over the seeded plan passages. Stands in for
/// a vector index behind the same contract.
pub struct KeywordIndex {
    passages: Vec<Passage>,
    tokens: Vec<HashSet<String>>,
    idf: HashMap<String, f32>,
}

impl KeywordIndex {
    pub fn new(passages: Vec<Passage>) -> Self {
        let tokens: Vec<HashSet<String>> =
            passages.iter().map(|p| tokenize(&p.text)).collect();

        let mut doc_freq: HashMap<String, usize> = HashMap::new();
        for set in &tokens {
            for token in set {
                *doc_freq.entry(token.clone()).or_insert(0) += 1;
            }
        }

        let n = passages.len().max(1) as f32;
        let idf = doc_freq
            .into_iter()
            .map(|(token, df)| (token, (n / df as f32).ln() + 1.0))
            .collect();

        Self {
            passages,
            tokens,
            idf,
        }
    }
}

impl PassageIndex for KeywordIndex {
    fn search(&self, query: &str, top_k: usize) -> Vec<Passage> {
        let query_tokens = tokenize(query);

        // Sum the IDF weights of matched tokens per passage.
        let mut scored: Vec<(f32, usize)> = self
            .tokens
            .iter()
            .enumerate()
            .map(|(i, set)| {
                let score: f32 = query_tokens
                    .iter()
                    .filter(|t| set.contains(*t))
                    .map(|t| self.idf.get(t).copied().unwrap_or(1.0))
                    .sum();
                (score, i)
            })
            .filter(|(score, _)| *score > 0.0)
            .collect();

        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));

        scored
            .into_iter()
            .take(top_k)
            .map(|(_, i)| self.passages[i].clone())
            .collect()
    }
}

fn tokenize(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.len() > 1)
        .map(str::to_string)
        .collect()
}
