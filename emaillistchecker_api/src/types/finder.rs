use serde::{Deserialize, Serialize};

/// Best guess for a person's address at a domain.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct FoundEmail {
    pub email: Option<String>,

    /// Confidence percentage, 0-100.
    #[serde(default)]
    pub confidence: Option<u32>,

    #[serde(default)]
    pub pattern: Option<String>,

    #[serde(default)]
    pub verified: bool,

    #[serde(default)]
    pub alternatives: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct DomainEmail {
    pub email: String,
    #[serde(default)]
    pub last_verified: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct DomainSearchResult {
    pub domain: String,

    #[serde(default)]
    pub total_found: u64,

    /// Common address patterns seen at the domain, e.g. `{first}.{last}`.
    #[serde(default)]
    pub patterns: Vec<String>,

    #[serde(default)]
    pub emails: Vec<DomainEmail>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CompanyEmail {
    pub email: String,
    #[serde(default)]
    pub domain: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CompanySearchResult {
    pub company: String,

    #[serde(default)]
    pub total_found: u64,

    #[serde(default)]
    pub possible_domains: Vec<String>,

    #[serde(default)]
    pub emails: Vec<CompanyEmail>,
}
