//! One-shot terminal analysis command.

use anyhow::Result;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use simplistock_gemini::GeminiClient;

use crate::output;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Company name to analyze
    pub name: String,

    /// Print the raw analysis JSON instead of formatted output
    #[arg(long)]
    pub json: bool,
}

pub async fn execute(args: AnalyzeArgs) -> Result<()> {
    let client = GeminiClient::from_env()?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!("Analyzing '{}'...", args.name));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = client.analyze(&args.name).await;
    spinner.finish_and_clear();

    let analysis = result?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        output::print_analysis(&args.name, &analysis);
    }

    Ok(())
}
