//! Batch subcommands: `batch`, `upload`, `status` and `results`.
//!
//! Polling lives here, not in the library. `--wait` re-reads the batch
//! status on a fixed interval until it reaches `completed` or `failed`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Args;
use emaillistchecker_api::types::{BatchId, BatchJob, BatchResults, BatchStatus};
use emaillistchecker_api::{BatchOptions, Client, ResultFilter, ResultFormat};

use crate::output::{format_progress, print_batch_table, print_json, print_verification_table, OutputFormat};

/// The API rejects larger batches.
const MAX_BATCH_EMAILS: usize = 10_000;

#[derive(Args)]
pub struct SubmitOptionsArgs {
    /// Name for this batch
    #[arg(long)]
    pub name: Option<String>,

    /// Webhook URL notified on completion
    #[arg(long)]
    pub callback_url: Option<String>,

    /// Create the batch without starting verification
    #[arg(long)]
    pub no_auto_start: bool,
}

impl SubmitOptionsArgs {
    fn to_options(&self) -> BatchOptions {
        let mut options = BatchOptions::default().with_auto_start(!self.no_auto_start);
        if let Some(name) = &self.name {
            options = options.with_name(name);
        }
        if let Some(callback_url) = &self.callback_url {
            options = options.with_callback_url(callback_url);
        }
        options
    }
}

#[derive(Args)]
pub struct WaitArgs {
    /// Poll until the batch completes or fails
    #[arg(long)]
    pub wait: bool,

    /// Seconds between status checks when waiting
    #[arg(long, default_value = "2")]
    pub interval: u64,
}

#[derive(Args)]
pub struct BatchArgs {
    /// Email addresses to verify
    pub emails: Vec<String>,

    /// Read addresses from a file, one per line
    #[arg(long)]
    pub from_file: Option<PathBuf>,

    #[command(flatten)]
    pub submit: SubmitOptionsArgs,

    #[command(flatten)]
    pub wait: WaitArgs,
}

#[derive(Args)]
pub struct UploadArgs {
    /// CSV, TXT or XLSX file to upload
    pub file: PathBuf,

    #[command(flatten)]
    pub submit: SubmitOptionsArgs,

    #[command(flatten)]
    pub wait: WaitArgs,
}

#[derive(Args)]
pub struct StatusArgs {
    pub batch_id: BatchId,

    #[command(flatten)]
    pub wait: WaitArgs,
}

#[derive(Args)]
pub struct ResultsArgs {
    pub batch_id: BatchId,

    /// Download format: json, csv or txt
    #[arg(long, default_value = "json")]
    pub format: ResultFormat,

    /// Which results to include: all, valid, invalid, risky or unknown
    #[arg(long, default_value = "all")]
    pub filter: ResultFilter,

    /// Write the download to a file instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub async fn run_submit(args: &BatchArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let mut emails = args.emails.clone();
    if let Some(path) = &args.from_file {
        emails.extend(read_email_list(path)?);
    }
    if emails.is_empty() {
        bail!("No email addresses given. Pass them as arguments or with --from-file.");
    }
    if emails.len() > MAX_BATCH_EMAILS {
        eprintln!(
            "Warning: {} addresses exceeds the {} per-batch limit; the API will likely reject it",
            emails.len(),
            MAX_BATCH_EMAILS
        );
    }

    eprintln!("Submitting batch of {} emails...", emails.len());
    let job = client
        .verify_batch(&emails, &args.submit.to_options())
        .await?;
    finish_submission(job, &args.wait, client, format).await
}

pub async fn run_upload(args: &UploadArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    eprintln!("Uploading {}...", args.file.display());
    let job = client
        .verify_batch_file(&args.file, &args.submit.to_options())
        .await?;
    finish_submission(job, &args.wait, client, format).await
}

pub async fn run_status(args: &StatusArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let job = if args.wait.wait {
        wait_for_batch(client, args.batch_id, args.wait.interval).await?
    } else {
        client.get_batch_status(args.batch_id).await?
    };
    print_job(&job, format);
    Ok(())
}

pub async fn run_results(args: &ResultsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let results = client
        .get_batch_results(args.batch_id, args.format, args.filter)
        .await?;

    if let Some(path) = &args.out {
        let contents = match &results {
            BatchResults::Text(text) => text.clone(),
            BatchResults::Json(value) => serde_json::to_string_pretty(value)?,
        };
        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        eprintln!("Saved results to {}", path.display());
        return Ok(());
    }

    match (&results, format) {
        (BatchResults::Text(text), _) => print!("{}", text),
        (BatchResults::Json(value), OutputFormat::Json) => print_json(value),
        (BatchResults::Json(_), OutputFormat::Table) => {
            print_verification_table(&results.records()?)
        }
    }
    Ok(())
}

async fn finish_submission(
    job: BatchJob,
    wait: &WaitArgs,
    client: &Client,
    format: &OutputFormat,
) -> Result<()> {
    eprintln!(
        "Batch {} submitted: {} ({} emails)",
        job.id, job.status, job.total_emails
    );
    let job = if wait.wait {
        wait_for_batch(client, job.id, wait.interval).await?
    } else {
        job
    };
    print_job(&job, format);
    Ok(())
}

/// Polls the batch until it reaches a terminal status.
///
/// There is no deadline: the loop ends only on `completed`, `failed` or
/// an API error. Interrupt the process to stop waiting.
async fn wait_for_batch(client: &Client, batch_id: BatchId, interval_secs: u64) -> Result<BatchJob> {
    let interval = Duration::from_secs(interval_secs.max(1));
    let mut previous_progress = None;

    loop {
        let job = client.get_batch_status(batch_id).await?;

        if previous_progress != Some(job.progress) {
            eprintln!(
                "Progress: {} ({}/{} processed)",
                format_progress(job.progress),
                job.processed_emails,
                job.total_emails
            );
            previous_progress = Some(job.progress);
        }

        match job.status {
            BatchStatus::Completed => {
                eprintln!("Batch verification completed");
                return Ok(job);
            }
            BatchStatus::Failed => bail!("Batch {} verification failed", batch_id),
            BatchStatus::Pending | BatchStatus::Processing => {}
        }

        tokio::time::sleep(interval).await;
    }
}

fn print_job(job: &BatchJob, format: &OutputFormat) {
    match format {
        OutputFormat::Table => print_batch_table(std::slice::from_ref(job)),
        OutputFormat::Json => print_json(job),
    }
}

fn read_email_list(path: &Path) -> Result<Vec<String>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(parse_email_lines(&contents))
}

/// One address per line; blank lines and `#` comments are skipped.
fn parse_email_lines(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
