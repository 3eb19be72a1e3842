mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use emaillistchecker_api::{Client, ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "emaillistchecker")]
#[command(about = "Verify and find email addresses with the EmailListChecker API")]
struct Cli {
    /// API key
    #[arg(long, env = "EMAILLISTCHECKER_API_KEY", hide_env_values = true)]
    api_key: String,

    /// API base URL
    #[arg(long, env = "EMAILLISTCHECKER_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Connect and read timeout for each HTTP request, in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    http_timeout: u64,

    /// Output format: table or json
    #[arg(long, default_value = "table", global = true)]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify one or more email addresses
    Verify(commands::verify::VerifyArgs),
    /// Submit a list of addresses for batch verification
    Batch(commands::batch::BatchArgs),
    /// Upload a CSV, TXT or XLSX file for batch verification
    Upload(commands::batch::UploadArgs),
    /// Show the status of a batch
    Status(commands::batch::StatusArgs),
    /// Download batch results
    Results(commands::batch::ResultsArgs),
    /// Find a person's email address by name and domain
    FindEmail(commands::finder::FindEmailArgs),
    /// Find email addresses at a domain
    FindDomain(commands::finder::FindDomainArgs),
    /// Find email addresses by company name
    FindCompany(commands::finder::FindCompanyArgs),
    /// Show the credit balance
    Credits,
    /// Show API usage statistics
    Usage,
    /// List verification batches
    Lists,
    /// Delete a verification list
    DeleteList(commands::account::DeleteListArgs),
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("emaillistchecker=info".parse().unwrap()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        report_error(&e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Table,
    };

    let config = ClientConfig::new(&cli.api_key)
        .with_base_url(&cli.base_url)
        .with_timeout_secs(cli.http_timeout);
    let client = Client::with_config(config)?;

    match &cli.command {
        Commands::Verify(args) => commands::verify::run(args, &client, &format).await?,
        Commands::Batch(args) => commands::batch::run_submit(args, &client, &format).await?,
        Commands::Upload(args) => commands::batch::run_upload(args, &client, &format).await?,
        Commands::Status(args) => commands::batch::run_status(args, &client, &format).await?,
        Commands::Results(args) => commands::batch::run_results(args, &client, &format).await?,
        Commands::FindEmail(args) => commands::finder::run_email(args, &client, &format).await?,
        Commands::FindDomain(args) => commands::finder::run_domain(args, &client, &format).await?,
        Commands::FindCompany(args) => {
            commands::finder::run_company(args, &client, &format).await?
        }
        Commands::Credits => commands::account::run_credits(&client, &format).await?,
        Commands::Usage => commands::account::run_usage(&client, &format).await?,
        Commands::Lists => commands::account::run_lists(&client, &format).await?,
        Commands::DeleteList(args) => {
            commands::account::run_delete_list(args, &client, &format).await?
        }
    }

    Ok(())
}

fn report_error(e: &anyhow::Error) {
    eprintln!("Error: {}", e);
    if let Some(api_err) = e.downcast_ref::<emaillistchecker_api::Error>() {
        if let Some(status) = api_err.status_code() {
            eprintln!("Status Code: {}", status);
        }
        if let Some(retry_after) = api_err.retry_after() {
            eprintln!("Retry after: {} seconds", retry_after);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_results_options() {
        let cli = Cli::try_parse_from([
            "emaillistchecker",
            "--api-key",
            "k",
            "results",
            "42",
            "--format",
            "csv",
            "--filter",
            "risky",
        ])
        .unwrap();
        match cli.command {
            Commands::Results(args) => {
                assert_eq!(args.batch_id, 42);
                assert_eq!(args.format, emaillistchecker_api::ResultFormat::Csv);
                assert_eq!(args.filter, emaillistchecker_api::ResultFilter::Risky);
            }
            _ => panic!("expected results subcommand"),
        }
    }

    #[test]
    fn http_timeout_flag_sets_request_timeout() {
        let cli = Cli::try_parse_from(["emaillistchecker", "--api-key", "k", "credits"]).unwrap();
        assert_eq!(cli.http_timeout, DEFAULT_TIMEOUT_SECS);

        let cli = Cli::try_parse_from([
            "emaillistchecker",
            "--api-key",
            "k",
            "--http-timeout",
            "5",
            "lists",
        ])
        .unwrap();
        assert_eq!(cli.http_timeout, 5);
        assert!(matches!(cli.command, Commands::Lists));
    }

    #[test]
    fn rejects_unknown_result_format() {
        let parsed = Cli::try_parse_from([
            "emaillistchecker",
            "--api-key",
            "k",
            "results",
            "42",
            "--format",
            "xml",
        ]);
        assert!(parsed.is_err());
    }
}
