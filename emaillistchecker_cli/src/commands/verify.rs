//! The `verify` subcommand: check one or more addresses, one request each.

use anyhow::Result;
use clap::Args;
use emaillistchecker_api::{Client, VerifyOptions};

use crate::output::{print_json, print_verification_table, OutputFormat};

#[derive(Args)]
pub struct VerifyArgs {
    /// Email addresses to verify
    #[arg(required = true)]
    pub emails: Vec<String>,

    /// Server-side verification timeout in seconds (5-60)
    #[arg(long)]
    pub timeout: Option<u32>,

    /// Skip the SMTP mailbox check
    #[arg(long)]
    pub no_smtp: bool,
}

pub async fn run(args: &VerifyArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let mut options = VerifyOptions::default().with_smtp_check(!args.no_smtp);
    if let Some(timeout) = args.timeout {
        options = options.with_timeout(timeout);
    }

    let mut results = Vec::with_capacity(args.emails.len());
    for email in &args.emails {
        results.push(client.verify(email, &options).await?);
    }

    match format {
        OutputFormat::Table => {
            print_verification_table(&results);
            for result in results.iter().filter(|r| !r.mx_records.is_empty()) {
                println!("MX records for {}: {}", result.email, result.mx_records.join(", "));
            }
        }
        OutputFormat::Json => print_json(&results),
    }

    Ok(())
}
