use emaillistchecker_api::types::{
    BatchJob, CompanyEmail, DomainEmail, FoundEmail, VerificationResult,
};
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Tabled)]
struct VerificationRow {
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Result")]
    result: String,
    #[tabled(rename = "Score")]
    score: String,
    #[tabled(rename = "Reason")]
    reason: String,
    #[tabled(rename = "Flags")]
    flags: String,
    #[tabled(rename = "Provider")]
    provider: String,
}

#[derive(Tabled)]
struct BatchRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Progress")]
    progress: String,
    #[tabled(rename = "Total")]
    total: u64,
    #[tabled(rename = "Valid")]
    valid: u64,
    #[tabled(rename = "Invalid")]
    invalid: u64,
    #[tabled(rename = "Unknown")]
    unknown: u64,
}

#[derive(Tabled)]
struct FoundEmailRow {
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Confidence")]
    confidence: String,
    #[tabled(rename = "Pattern")]
    pattern: String,
    #[tabled(rename = "Verified")]
    verified: String,
}

#[derive(Tabled)]
struct DomainEmailRow {
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Last Verified")]
    last_verified: String,
}

#[derive(Tabled)]
struct CompanyEmailRow {
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Domain")]
    domain: String,
}

// -- Row builders --

fn build_verification_rows(results: &[VerificationResult]) -> Vec<VerificationRow> {
    results
        .iter()
        .map(|r| VerificationRow {
            email: r.email.clone(),
            result: r.result.to_string(),
            score: r.score.map(|s| s.to_string()).unwrap_or_default(),
            reason: r.reason.clone().unwrap_or_default(),
            flags: format_flags(r),
            provider: r.smtp_provider.clone().unwrap_or_default(),
        })
        .collect()
}

fn build_batch_rows(jobs: &[BatchJob]) -> Vec<BatchRow> {
    jobs.iter()
        .map(|j| BatchRow {
            id: j.id,
            name: j.name.clone().unwrap_or_default(),
            status: j.status.to_string(),
            progress: format_progress(j.progress),
            total: j.total_emails,
            valid: j.valid_emails,
            invalid: j.invalid_emails,
            unknown: j.unknown_emails,
        })
        .collect()
}

fn build_found_email_rows(found: &FoundEmail) -> Vec<FoundEmailRow> {
    let mut rows = vec![FoundEmailRow {
        email: found.email.clone().unwrap_or_else(|| "(none)".to_string()),
        confidence: found
            .confidence
            .map(|c| format!("{}%", c))
            .unwrap_or_default(),
        pattern: found.pattern.clone().unwrap_or_default(),
        verified: if found.verified { "yes" } else { "no" }.to_string(),
    }];
    rows.extend(found.alternatives.iter().map(|alt| FoundEmailRow {
        email: alt.clone(),
        confidence: String::new(),
        pattern: "alternative".to_string(),
        verified: String::new(),
    }));
    rows
}

fn build_domain_email_rows(emails: &[DomainEmail]) -> Vec<DomainEmailRow> {
    emails
        .iter()
        .map(|e| DomainEmailRow {
            email: e.email.clone(),
            last_verified: e.last_verified.clone().unwrap_or_else(|| "-".to_string()),
        })
        .collect()
}

fn build_company_email_rows(emails: &[CompanyEmail]) -> Vec<CompanyEmailRow> {
    emails
        .iter()
        .map(|e| CompanyEmailRow {
            email: e.email.clone(),
            domain: e.domain.clone().unwrap_or_default(),
        })
        .collect()
}

// -- Table output --

pub fn print_verification_table(results: &[VerificationResult]) {
    println!("{}", Table::new(build_verification_rows(results)));
}

pub fn print_batch_table(jobs: &[BatchJob]) {
    println!("{}", Table::new(build_batch_rows(jobs)));
}

pub fn print_found_email_table(found: &FoundEmail) {
    println!("{}", Table::new(build_found_email_rows(found)));
}

pub fn print_domain_emails_table(emails: &[DomainEmail]) {
    println!("{}", Table::new(build_domain_email_rows(emails)));
}

pub fn print_company_emails_table(emails: &[CompanyEmail]) {
    println!("{}", Table::new(build_company_email_rows(emails)));
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

fn format_flags(r: &VerificationResult) -> String {
    let mut flags = Vec::new();
    if r.disposable {
        flags.push("disposable");
    }
    if r.role {
        flags.push("role");
    }
    if r.free {
        flags.push("free");
    }
    flags.join(",")
}

pub fn format_progress(progress: f64) -> String {
    format!("{:.0}%", progress)
}

#[cfg(test)]
mod tests {
    use super::*;
    use emaillistchecker_api::types::{BatchStatus, VerificationStatus};

    fn verification(email: &str, result: VerificationStatus) -> VerificationResult {
        VerificationResult {
            email: email.to_string(),
            result,
            reason: None,
            score: None,
            disposable: false,
            role: false,
            free: false,
            smtp_provider: None,
            domain: None,
            mx_records: Vec::new(),
        }
    }

    #[test]
    fn verification_row_mapping() {
        let mut r = verification("info@example.com", VerificationStatus::Risky);
        r.score = Some(55);
        r.role = true;
        r.free = true;
        r.reason = Some("role_account".to_string());

        let rows = build_verification_rows(&[r]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].result, "risky");
        assert_eq!(rows[0].score, "55");
        assert_eq!(rows[0].flags, "role,free");
        assert_eq!(rows[0].reason, "role_account");
        assert_eq!(rows[0].provider, "");
    }

    #[test]
    fn batch_row_mapping() {
        let job = BatchJob {
            id: 12,
            status: BatchStatus::Processing,
            name: None,
            progress: 33.4,
            total_emails: 3,
            processed_emails: 1,
            valid_emails: 1,
            invalid_emails: 0,
            unknown_emails: 0,
        };
        let rows = build_batch_rows(&[job]);
        assert_eq!(rows[0].status, "processing");
        assert_eq!(rows[0].progress, "33%");
        assert_eq!(rows[0].name, "");
    }

    #[test]
    fn found_email_rows_include_alternatives() {
        let found = FoundEmail {
            email: Some("john.doe@example.com".to_string()),
            confidence: Some(87),
            pattern: Some("{first}.{last}".to_string()),
            verified: true,
            alternatives: vec!["jdoe@example.com".to_string()],
        };
        let rows = build_found_email_rows(&found);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].confidence, "87%");
        assert_eq!(rows[0].verified, "yes");
        assert_eq!(rows[1].email, "jdoe@example.com");
        assert_eq!(rows[1].pattern, "alternative");
    }

    #[test]
    fn found_email_without_match() {
        let found = FoundEmail {
            email: None,
            confidence: None,
            pattern: None,
            verified: false,
            alternatives: Vec::new(),
        };
        let rows = build_found_email_rows(&found);
        assert_eq!(rows[0].email, "(none)");
        assert_eq!(rows[0].verified, "no");
    }

    #[test]
    fn domain_rows_default_last_verified() {
        let rows = build_domain_email_rows(&[DomainEmail {
            email: "sales@example.com".to_string(),
            last_verified: None,
        }]);
        assert_eq!(rows[0].last_verified, "-");
    }
}
