mod config;
mod core;
mod filter;
mod input;
mod rules;
mod scanner;
mod service;

use anyhow::Result;
use clap::Parser;
use config::Config;
use input::{FileRuleReader, RuleReader, StdinRuleReader};
use service::FilterService;

#[derive(Parser)]
#[command(
    name = "srcskip",
    about = "Filters a firmware source tree against an exclusion list and prints the compilation set",
    version = "1.0.0"
)]
struct Args {
    /// Root of the source tree to scan
    source_root: String,

    /// Rules file with one path pattern per line, '#' disables a rule
    /// (uses the built-in list if not provided; '-' reads from stdin)
    #[arg(short = 'f', long = "rules")]
    rules_file: Option<String>,

    /// Disable progress output
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,

    /// Require pattern matches to align to path-segment boundaries
    #[arg(long = "segment-match")]
    segment_match: bool,

    /// Also print files excluded from the compilation set
    #[arg(long = "show-excluded")]
    show_excluded: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::builder()
        .source_root(Some(&args.source_root))
        .rules_path(args.rules_file.as_deref(), true)
        .show_progress(!args.quiet)
        .segment_match(args.segment_match)
        .show_excluded(args.show_excluded)
        .build()?;

    // Create reader based on the rules source; no reader means the
    // built-in list
    let reader: Option<Box<dyn RuleReader>> = match config.rules_path.as_deref() {
        Some("-") => Some(Box::new(StdinRuleReader::new())),
        Some(path) => Some(Box::new(FileRuleReader::new(path))),
        None => None,
    };

    let service = FilterService::new(reader, config);
    service.run().await?;

    Ok(())
}
