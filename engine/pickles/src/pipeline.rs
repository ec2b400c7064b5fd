//! One pipeline run: fetch, analyze, deliver

use crate::args::CliArgs;
use crate::config::PicklesConfig;
use anyhow::{Context, Result};
use document_analyzer::DocumentAnalyzer;
use notion_input::NotionInput;
use report_delivery::ReportDelivery;
use tracing::info;

/// Orchestrates a single fetch-analyze-deliver cycle
pub struct Pipeline {
    config: PicklesConfig,
}

impl Pipeline {
    /// Create a new pipeline
    pub fn new(config: PicklesConfig) -> Self {
        Self { config }
    }

    /// Run the pipeline once with the parsed arguments
    pub async fn run(&self, args: &CliArgs) -> Result<()> {
        println!("\u{1f952} Pickles Personal Insight Analytics System");
        println!("{}", "=".repeat(50));

        println!(
            "\u{1f4e5} Fetching data... (source: {}, days: {})",
            args.source, args.days
        );
        let input =
            NotionInput::new(self.config.notion.clone()).context("Failed to set up Notion input")?;
        let documents = input
            .fetch(args.source, args.days)
            .await
            .context("Failed to fetch data")?;

        if documents.is_empty() {
            println!(
                "\u{26a0}\u{fe0f}  No data found for the last {} days.",
                args.days
            );
            return Ok(());
        }
        println!("\u{2705} Fetched {} documents", documents.len());

        println!("\u{1f504} Running analysis... (type: {})", args.analysis);
        let analyzer = DocumentAnalyzer::new(self.config.analyzer.clone())
            .context("Failed to set up analyzer")?;
        let report = analyzer
            .analyze(&documents, args.analysis, true)
            .await
            .context("Analysis failed")?;
        println!(
            "\u{2705} Analysis complete ({} documents analyzed)",
            report.data_count
        );

        let method_list = args
            .delivery
            .iter()
            .map(|m| m.as_str())
            .collect::<Vec<_>>()
            .join(",");
        println!(
            "\u{1f4e4} Delivering report... (methods: {})",
            method_list
        );
        let delivery = ReportDelivery::new(self.config.delivery.clone());
        let results = delivery.deliver(&report, &args.delivery).await;

        println!("\n{}", "=".repeat(50));
        println!("\u{1f4cb} Delivery results:");
        for (method, outcome) in &results {
            println!("  {}: {}", method, outcome);
        }

        info!("Pipeline run complete");
        Ok(())
    }
}
