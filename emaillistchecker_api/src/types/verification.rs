use serde::{Deserialize, Serialize};

/// Deliverability verdict for a single address.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    Deliverable,
    Undeliverable,
    Risky,
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            VerificationStatus::Deliverable => "deliverable",
            VerificationStatus::Undeliverable => "undeliverable",
            VerificationStatus::Risky => "risky",
            VerificationStatus::Unknown => "unknown",
        })
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct VerificationResult {
    pub email: String,

    pub result: VerificationStatus,

    #[serde(default)]
    pub reason: Option<String>,

    /// Quality score, 0-100.
    #[serde(default)]
    pub score: Option<u32>,

    #[serde(default)]
    pub disposable: bool,

    /// Role-based mailbox such as `info@` or `support@`.
    #[serde(default)]
    pub role: bool,

    /// Free webmail provider.
    #[serde(default)]
    pub free: bool,

    #[serde(default)]
    pub smtp_provider: Option<String>,

    #[serde(default)]
    pub domain: Option<String>,

    #[serde(default)]
    pub mx_records: Vec<String>,
}
