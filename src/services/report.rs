use anyhow::{Context, Result};
use colored::{ColoredString, Colorize};
use log::info;

use crate::api::ChessComClient;
use crate::config::settings::AppConfig;
use crate::domain::{Category, CategoryDelta, RatingReport};
use crate::rating::{format_change, RatingHistoryResolver};

/// One-shot resolution printed to stdout
pub struct ReportService {
    client: ChessComClient,
    config: AppConfig,
}

impl ReportService {
    pub fn new(config: AppConfig) -> Result<Self> {
        let client = ChessComClient::new(&config.chess, &config.http)
            .context("Failed to create chess.com client")?;
        Ok(Self { client, config })
    }

    pub async fn run(&self, json: bool) -> Result<()> {
        let username = &self.config.chess.username;
        info!("Resolving chess ratings for {}", username);

        let resolver = RatingHistoryResolver::new(&self.client, &self.client, username);
        let report = resolver.resolve().await;

        if json {
            let rendered = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
            println!("{}", rendered);
        } else {
            print_report(username, &report);
        }
        Ok(())
    }
}

fn print_report(username: &str, report: &RatingReport) {
    println!("{}", username.bold());

    if report.is_empty() {
        println!("  {}", "no ratings available".dimmed());
        return;
    }

    for category in Category::ALL {
        if let Some(delta) = report.get(category) {
            println!("  {}  {}", describe(category, delta), colored_change(delta.change));
        }
    }
}

fn describe(category: Category, delta: CategoryDelta) -> String {
    format!("{:<6} {:>5}", category.label(), delta.current)
}

fn colored_change(change: i32) -> ColoredString {
    let text = format_change(change);
    match change {
        c if c > 0 => text.green(),
        c if c < 0 => text.red(),
        _ => text.dimmed(),
    }
}
