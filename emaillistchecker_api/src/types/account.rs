use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Credits {
    pub balance: i64,
    #[serde(default)]
    pub used_this_month: i64,
    #[serde(default)]
    pub plan: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Usage {
    pub total_requests: u64,
    #[serde(default)]
    pub successful_requests: u64,
    #[serde(default)]
    pub failed_requests: u64,
}

impl Usage {
    /// Percentage of successful requests, or `None` when nothing was sent yet.
    pub fn success_rate(&self) -> Option<f64> {
        if self.total_requests == 0 {
            return None;
        }
        Some(self.successful_requests as f64 / self.total_requests as f64 * 100.0)
    }
}

/// Confirmation returned by `DELETE /lists/{id}`.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct DeleteListResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
}
