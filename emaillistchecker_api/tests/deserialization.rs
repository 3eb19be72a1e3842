use emaillistchecker_api::types::{
    BatchJob, BatchStatus, CompanySearchResult, Credits, DomainSearchResult, FoundEmail, Usage,
    VerificationResult, VerificationStatus,
};
use emaillistchecker_api::unwrap_envelope;
use serde::de::DeserializeOwned;

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

fn parse<T: DeserializeOwned>(name: &str) -> T {
    let value: serde_json::Value = serde_json::from_str(&load_fixture(name)).unwrap();
    serde_json::from_value(unwrap_envelope(value)).unwrap()
}

#[test]
fn deserialize_verification_full() {
    let result: VerificationResult = parse("verify.json");
    assert_eq!(result.email, "test@example.com");
    assert_eq!(result.result, VerificationStatus::Deliverable);
    assert_eq!(result.reason.as_deref(), Some("accepted_email"));
    assert_eq!(result.score, Some(95));
    assert!(!result.disposable);
    assert_eq!(result.smtp_provider.as_deref(), Some("google"));
    assert_eq!(result.mx_records.len(), 2);
}

#[test]
fn deserialize_verification_minimal() {
    let json = r#"{"email":"x@y.io","result":"catch_all_unreachable"}"#;
    let result: VerificationResult = serde_json::from_str(json).unwrap();
    assert_eq!(result.result, VerificationStatus::Unknown);
    assert_eq!(result.score, None);
    assert!(result.mx_records.is_empty());
}

#[test]
fn deserialize_batch_status() {
    let job: BatchJob = parse("batch_status.json");
    assert_eq!(job.id, 4821);
    assert_eq!(job.status, BatchStatus::Processing);
    assert_eq!(job.progress, 40.0);
    assert_eq!(job.processed_emails, 2);
    assert_eq!(job.name.as_deref(), Some("My Test Batch"));
    assert!(!job.status.is_terminal());
}

#[test]
fn deserialize_lists_with_sparse_entries() {
    let lists: Vec<BatchJob> = parse("lists.json");
    assert_eq!(lists.len(), 2);
    assert_eq!(lists[0].status, BatchStatus::Completed);
    assert_eq!(lists[0].valid_emails, 3);
    assert_eq!(lists[1].status, BatchStatus::Pending);
    assert_eq!(lists[1].total_emails, 10000);
    assert_eq!(lists[1].processed_emails, 0);
}

#[test]
fn deserialize_credits_and_usage() {
    let credits: Credits = parse("credits.json");
    assert_eq!(credits.balance, 12500);
    assert_eq!(credits.used_this_month, 730);
    assert_eq!(credits.plan.as_deref(), Some("growth"));

    // usage fixture has no envelope
    let usage: Usage = parse("usage.json");
    assert_eq!(usage.total_requests, 1200);
    assert_eq!(usage.success_rate(), Some(95.0));
}

#[test]
fn deserialize_finder_results() {
    let found: FoundEmail = parse("find_email.json");
    assert_eq!(found.email.as_deref(), Some("john.doe@example.com"));
    assert_eq!(found.confidence, Some(87));
    assert!(found.verified);
    assert_eq!(found.alternatives, vec!["jdoe@example.com", "john@example.com"]);

    let domain: DomainSearchResult = parse("find_domain.json");
    assert_eq!(domain.total_found, 2);
    assert_eq!(domain.emails[1].last_verified, None);

    let company: CompanySearchResult = parse("find_company.json");
    assert_eq!(company.company, "Acme Corporation");
    assert_eq!(company.possible_domains.len(), 2);
    assert_eq!(company.emails[0].domain.as_deref(), Some("acme.com"));
}
