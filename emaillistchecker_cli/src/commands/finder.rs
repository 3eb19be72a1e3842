//! The `find-email`, `find-domain` and `find-company` subcommands.

use anyhow::Result;
use clap::Args;
use emaillistchecker_api::{Client, CompanySearch, DomainSearch};

use crate::output::{
    print_company_emails_table, print_domain_emails_table, print_found_email_table, print_json,
    OutputFormat,
};

#[derive(Args)]
pub struct FindEmailArgs {
    pub first_name: String,
    pub last_name: String,
    /// Domain to search, e.g. example.com
    pub domain: String,
}

#[derive(Args)]
pub struct FindDomainArgs {
    pub domain: String,

    /// Results per request (1-100)
    #[arg(long, default_value = "10")]
    pub limit: u32,

    /// Pagination offset
    #[arg(long, default_value = "0")]
    pub offset: u32,
}

#[derive(Args)]
pub struct FindCompanyArgs {
    pub company: String,

    /// Results limit (1-100)
    #[arg(long, default_value = "10")]
    pub limit: u32,
}

pub async fn run_email(args: &FindEmailArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let found = client
        .find_email(&args.first_name, &args.last_name, &args.domain)
        .await?;

    match format {
        OutputFormat::Table => print_found_email_table(&found),
        OutputFormat::Json => print_json(&found),
    }
    Ok(())
}

pub async fn run_domain(args: &FindDomainArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let search = DomainSearch::default()
        .with_limit(args.limit)
        .with_offset(args.offset);
    let resp = client.find_by_domain(&args.domain, &search).await?;

    match format {
        OutputFormat::Table => {
            eprintln!("Domain: {} ({} total found)", resp.domain, resp.total_found);
            if !resp.patterns.is_empty() {
                eprintln!("Common patterns: {}", resp.patterns.join(", "));
            }
            print_domain_emails_table(&resp.emails);
        }
        OutputFormat::Json => print_json(&resp),
    }
    Ok(())
}

pub async fn run_company(
    args: &FindCompanyArgs,
    client: &Client,
    format: &OutputFormat,
) -> Result<()> {
    let search = CompanySearch::default().with_limit(args.limit);
    let resp = client.find_by_company(&args.company, &search).await?;

    match format {
        OutputFormat::Table => {
            eprintln!("Company: {} ({} total found)", resp.company, resp.total_found);
            if !resp.possible_domains.is_empty() {
                eprintln!("Possible domains: {}", resp.possible_domains.join(", "));
            }
            print_company_emails_table(&resp.emails);
        }
        OutputFormat::Json => print_json(&resp),
    }
    Ok(())
}
