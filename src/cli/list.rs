// ABOUTME: `shipmate list` - print the step catalog

use anyhow::Result;
use serde::Serialize;

use super::OutputFormat;
use crate::guide::{self, StepId};

#[derive(Serialize)]
struct StepSummary {
    id: StepId,
    title: &'static str,
    description: &'static str,
    snippets: usize,
}

pub fn execute(format: OutputFormat) -> Result<()> {
    let summaries: Vec<StepSummary> = guide::steps()
        .iter()
        .map(|step| StepSummary {
            id: step.id,
            title: step.title,
            description: step.description,
            snippets: step.all_snippets().len(),
        })
        .collect();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summaries)?),
        OutputFormat::Text => {
            println!("Deploy Next.js to Vercel - {} steps", summaries.len());
            println!();
            for summary in &summaries {
                println!("  {}. {}", summary.id, summary.title);
                println!("     {}", summary.description);
            }
        }
    }

    Ok(())
}
