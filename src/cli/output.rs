//! Output formatting helpers for CLI commands

use crate::dose::DoseMetrics;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};

/// Format dose metrics as a table
pub fn format_metrics_table(metrics: &DoseMetrics) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Field", "Value"]);

    let status = if metrics.offline {
        "OFFLINE".red().bold().to_string()
    } else {
        "online".green().to_string()
    };
    table.add_row(vec!["Status".to_string(), status]);

    table.add_row(vec![
        "Instantaneous".to_string(),
        format!("{:.4} {}", metrics.instant_usv, metrics.unit),
    ]);
    table.add_row(vec![
        "Average".to_string(),
        format!("{:.4} {}", metrics.avg_usv, metrics.unit),
    ]);
    table.add_row(vec!["CPM (windowed)".to_string(), format!("{:.2}", metrics.cpm)]);

    let last_seen = match metrics.last_seen_ago {
        Some(ms) => format!("{}s ago", ms / 1000),
        None => "never".dimmed().to_string(),
    };
    table.add_row(vec!["Last seen".to_string(), last_seen]);

    if let Some(latest) = metrics.latest {
        table.add_row(vec!["Latest clicks".to_string(), latest.clicks.to_string()]);
    }

    table.to_string()
}
