// ABOUTME: `shipmate show` - print one step's content to stdout

use anyhow::{anyhow, Result};

use super::{OutputFormat, ShowArgs};
use crate::guide::steps::{self, ContentBlock, Step, StepId};

pub fn execute(args: &ShowArgs, format: OutputFormat) -> Result<()> {
    let step = steps::step(StepId(args.step))
        .ok_or_else(|| anyhow!("unknown step {} (valid: 1-5)", args.step))?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(step)?),
        OutputFormat::Text => print!("{}", render_plain(step)),
    }
    Ok(())
}

/// Plain-text rendering of a step, all tabs included
fn render_plain(step: &Step) -> String {
    let mut out = String::new();
    out.push_str(&format!("Step {}: {}\n", step.id, step.title));
    out.push_str(&format!("{}\n\n", step.description));
    push_blocks(&mut out, step.blocks, 0);
    out
}

fn push_blocks(out: &mut String, blocks: &[ContentBlock], indent: usize) {
    let pad = "  ".repeat(indent);
    for block in blocks {
        match block {
            ContentBlock::Paragraph(text) => {
                out.push_str(&format!("{pad}{text}\n\n"));
            }
            ContentBlock::Snippet(snippet) => {
                for line in snippet.command.lines() {
                    out.push_str(&format!("{pad}  $ {line}\n"));
                }
                out.push('\n');
            }
            ContentBlock::Note {
                title,
                body,
                bullets,
            } => {
                out.push_str(&format!("{pad}{title}\n"));
                for paragraph in *body {
                    out.push_str(&format!("{pad}{paragraph}\n"));
                }
                for bullet in *bullets {
                    out.push_str(&format!("{pad}  - {bullet}\n"));
                }
                out.push('\n');
            }
            ContentBlock::Numbered(entries) => {
                for (idx, entry) in entries.iter().enumerate() {
                    out.push_str(&format!("{pad}  {}. {}\n", idx + 1, entry.title));
                    out.push_str(&format!("{pad}     {}\n", entry.body));
                }
                out.push('\n');
            }
            ContentBlock::Cards(cards) => {
                for card in *cards {
                    out.push_str(&format!("{pad}  {}: {}\n", card.title, card.body));
                }
                out.push('\n');
            }
            ContentBlock::Tabs(tabs) => {
                for tab in *tabs {
                    out.push_str(&format!("{pad}[{}]\n", tab.label));
                    push_blocks(out, tab.blocks, indent + 1);
                }
            }
            ContentBlock::Links(links) => {
                for link in *links {
                    out.push_str(&format!("{pad}  {} <{}>\n", link.label, link.url));
                }
                out.push('\n');
            }
        }
    }
}
