//! Status command implementation

use crate::cli::output::format_metrics_table;
use crate::cli::StatusArgs;
use crate::dose::DoseMetrics;

/// Handle `radgate status` command
pub async fn handle_status(args: &StatusArgs) -> Result<String, Box<dyn std::error::Error>> {
    let url = format!("{}/latest", args.url.trim_end_matches('/'));

    let response = reqwest::get(&url).await?;
    if !response.status().is_success() {
        return Err(format!("Server returned {}", response.status()).into());
    }

    if args.json {
        return Ok(response.text().await?);
    }

    let metrics: DoseMetrics = response.json().await?;
    Ok(format_metrics_table(&metrics))
}
