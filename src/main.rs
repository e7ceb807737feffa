mod corpus;
mod node;
mod report;
mod trie;

use anyhow::Context as _;
use clap::{Parser as _, ValueEnum as _};
use std::io::Write as _;

#[derive(clap::ValueEnum, Clone, Debug, PartialEq)]
enum Format {
    /// One suggestion per line
    Lines,
    /// A single JSON object with the suggestions and load statistics
    Json,
}

#[derive(serde::Serialize)]
struct JsonOutput<'a> {
    prefix: &'a str,
    suggestions: &'a [String],
    stats: corpus::LoadStats,
}

/// Suggest the most frequent words of a text that start with a prefix.
#[derive(clap::Parser, Debug)]
struct Args {
    /// Text file to index
    path: std::path::PathBuf,

    /// Prefix to complete
    prefix: String,

    /// Maximum number of suggestions
    count: std::num::NonZeroUsize,

    #[arg(long, default_value = "lines")]
    format: Format,

    /// Dump the whole index before the suggestions
    #[arg(long)]
    tree: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();

    let file = std::fs::File::open(&args.path)
        .with_context(|| format!("could not open {}", args.path.display()))?;
    let (trie, stats) = corpus::load(std::io::BufReader::new(file))
        .with_context(|| format!("could not read {}", args.path.display()))?;
    report::loaded(&args.path, &stats, &trie);

    if args.tree {
        trie.print_tree();
    }

    if !trie.has_prefix(&args.prefix) {
        log::warn!(prefix = args.prefix.as_str(); "prefix not in index");
    }

    let suggestions = trie.suggest(&args.prefix, args.count.get());

    log::info!(prefix = args.prefix.as_str(), is_word = trie.contains(&args.prefix), found = suggestions.len(), format = args.format.to_possible_value().unwrap().get_name(); "suggest");

    match args.format {
        Format::Lines => {
            let mut stdout = std::io::stdout().lock();
            for suggestion in &suggestions {
                writeln!(stdout, "{suggestion}")?;
            }
        }
        Format::Json => {
            println!(
                "{}",
                serde_json::to_string(&JsonOutput {
                    prefix: &args.prefix,
                    suggestions: &suggestions,
                    stats,
                })?
            );
        }
    }

    Ok(())
}
