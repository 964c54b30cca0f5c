//! JSON-driven batch evaluation.
//!
//! A batch file lists queries tagged by `kind`:
//!
//! ```json
//! { "queries": [
//!     { "kind": "knight_distance", "source": 19, "destination": 36 },
//!     { "kind": "decode_cipher", "text": "vmxibkgrlm" },
//!     { "kind": "payment_gap", "total": 143 },
//!     { "kind": "partition_count", "n": 200 }
//! ] }
//! ```
//!
//! Failing queries are reported next to the others; they do not stop the batch.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::cipher::decode_cipher;
use crate::error::PuzzleError;
use crate::partition::partition_count;
use crate::payment::payment_gap;
use crate::search::knight::{knight_distance, knight_route};

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Query {
    KnightDistance { source: i64, destination: i64 },
    KnightRoute { source: i64, destination: i64 },
    DecodeCipher { text: String },
    PaymentGap { total: i64 },
    PartitionCount { n: i64 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Answer {
    Number(i64),
    Text(String),
    /// Square indices, source first. `null` when there is no route.
    Route(Option<Vec<usize>>),
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Batch {
    #[serde(default)]
    pub queries: Vec<Query>,
}

impl Batch {
    pub fn from_json_str(s: &str) -> Result<Self, BatchError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, BatchError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Entry {
    pub query: Query,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<Answer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub entries: Vec<Entry>,
    pub failures: usize,
}

pub fn evaluate(query: &Query) -> Result<Answer, PuzzleError> {
    let answer = match query {
        Query::KnightDistance {
            source,
            destination,
        } => Answer::Number(knight_distance(*source, *destination)?.into()),
        Query::KnightRoute {
            source,
            destination,
        } => {
            let route = knight_route(*source, *destination)?;
            Answer::Route(route.map(|r| r.into_iter().map(usize::from).collect()))
        }
        Query::DecodeCipher { text } => Answer::Text(decode_cipher(text)),
        Query::PaymentGap { total } => Answer::Number(payment_gap(*total)?),
        Query::PartitionCount { n } => Answer::Number(partition_count(*n)),
    };
    debug!(?query, ?answer, "evaluated");
    Ok(answer)
}

pub fn run_batch(batch: &Batch) -> Report {
    let mut failures = 0;
    let entries: Vec<Entry> = batch
        .queries
        .iter()
        .map(|q| match evaluate(q) {
            Ok(a) => Entry {
                query: q.clone(),
                answer: Some(a),
                error: None,
            },
            Err(e) => {
                failures += 1;
                Entry {
                    query: q.clone(),
                    answer: None,
                    error: Some(e.to_string()),
                }
            }
        })
        .collect();

    info!(queries = entries.len(), failures, "batch finished");
    Report { entries, failures }
}
