use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::VerificationResult;
use crate::Error;

pub type BatchId = u64;
pub type ListId = u64;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BatchStatus {
    Pending,
    Processing,
    Completed,
    Failed,
}

impl BatchStatus {
    /// `completed` and `failed` never change again; stop polling once seen.
    pub fn is_terminal(&self) -> bool {
        matches!(self, BatchStatus::Completed | BatchStatus::Failed)
    }
}

impl std::fmt::Display for BatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            BatchStatus::Pending => "pending",
            BatchStatus::Processing => "processing",
            BatchStatus::Completed => "completed",
            BatchStatus::Failed => "failed",
        })
    }
}

/// Snapshot of a server-side batch. Returned on submission, by status
/// polling and by the list endpoint.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct BatchJob {
    pub id: BatchId,

    pub status: BatchStatus,

    #[serde(default)]
    pub name: Option<String>,

    /// Percent complete, 0-100.
    #[serde(default)]
    pub progress: f64,

    #[serde(default)]
    pub total_emails: u64,

    #[serde(default)]
    pub processed_emails: u64,

    #[serde(default)]
    pub valid_emails: u64,

    #[serde(default)]
    pub invalid_emails: u64,

    #[serde(default)]
    pub unknown_emails: u64,
}

/// Downloaded batch results.
///
/// `Json` holds the envelope-unwrapped payload; `Text` holds CSV or plain
/// text exactly as the server sent it.
#[derive(Clone, Debug, PartialEq)]
pub enum BatchResults {
    Json(Value),
    Text(String),
}

impl BatchResults {
    /// Decodes per-address records from a JSON download.
    ///
    /// Accepts both a bare array and a paged object holding the array under
    /// `data`. Text downloads yield an empty list.
    pub fn records(&self) -> Result<Vec<VerificationResult>, Error> {
        let items = match self {
            BatchResults::Text(_) => return Ok(Vec::new()),
            BatchResults::Json(Value::Array(items)) => items,
            BatchResults::Json(value) => match value.get("data") {
                Some(Value::Array(items)) => items,
                _ => {
                    return Err(Error::Decode {
                        message: "batch results contain no record array".to_string(),
                    })
                }
            },
        };
        items
            .iter()
            .map(|item| {
                serde_json::from_value(item.clone()).map_err(|e| Error::Decode {
                    message: e.to_string(),
                })
            })
            .collect()
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            BatchResults::Text(text) => Some(text),
            BatchResults::Json(_) => None,
        }
    }
}
