//! Account subcommands: `credits`, `usage`, `lists` and `delete-list`.

use anyhow::Result;
use clap::Args;
use emaillistchecker_api::types::ListId;
use emaillistchecker_api::Client;

use crate::output::{print_batch_table, print_json, OutputFormat};

#[derive(Args)]
pub struct DeleteListArgs {
    /// ID of the list to delete
    pub list_id: ListId,
}

pub async fn run_credits(client: &Client, format: &OutputFormat) -> Result<()> {
    let credits = client.get_credits().await?;
    match format {
        OutputFormat::Table => {
            println!("Available credits: {}", credits.balance);
            println!("Used this month:   {}", credits.used_this_month);
            println!(
                "Current plan:      {}",
                credits.plan.as_deref().unwrap_or("-")
            );
        }
        OutputFormat::Json => print_json(&credits),
    }
    Ok(())
}

pub async fn run_usage(client: &Client, format: &OutputFormat) -> Result<()> {
    let usage = client.get_usage().await?;
    match format {
        OutputFormat::Table => {
            println!("Total API requests:  {}", usage.total_requests);
            println!("Successful requests: {}", usage.successful_requests);
            println!("Failed requests:     {}", usage.failed_requests);
            if let Some(rate) = usage.success_rate() {
                println!("Success rate:        {:.2}%", rate);
            }
        }
        OutputFormat::Json => print_json(&usage),
    }
    Ok(())
}

pub async fn run_lists(client: &Client, format: &OutputFormat) -> Result<()> {
    let lists = client.get_lists().await?;
    match format {
        OutputFormat::Table => {
            eprintln!("{} lists", lists.len());
            print_batch_table(&lists);
        }
        OutputFormat::Json => print_json(&lists),
    }
    Ok(())
}

pub async fn run_delete_list(
    args: &DeleteListArgs,
    client: &Client,
    format: &OutputFormat,
) -> Result<()> {
    let resp = client.delete_list(args.list_id).await?;
    match format {
        OutputFormat::Table => println!(
            "{}",
            resp.message
                .unwrap_or_else(|| format!("List {} deleted", args.list_id))
        ),
        OutputFormat::Json => print_json(&resp),
    }
    Ok(())
}
