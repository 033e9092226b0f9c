//! Minimal CLI to inspect classification decisions for content records.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use nuggets_classifier::{CardType, ClassificationEngine, DecisionTraceMode};
use nuggets_content::ContentRecord;
use nuggets_layouts::{
    CardRenderer, FeedRenderer, GridRenderer, MasonryRenderer, UtilityRenderer,
};

#[derive(Parser)]
#[command(name = "nuggets-inspector")]
#[command(about = "Inspect rendering decisions for content records", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decide one record (JSON file, or stdin when omitted) and print the
    /// decision.
    Decide {
        #[arg(long, value_name = "RECORD_JSON")]
        record: Option<PathBuf>,
        /// Capture and print the decision trace.
        #[arg(long)]
        trace: bool,
        /// Also print the four per-variant card views.
        #[arg(long)]
        views: bool,
    },
    /// Decide every .json record in a directory and print a summary.
    Batch {
        #[arg(long, value_name = "DIR")]
        dir: PathBuf,
    },
    /// Print the content-record JSON schema.
    Schema,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Decide {
            record,
            trace,
            views,
        } => decide(record, trace, views),
        Command::Batch { dir } => batch(&dir),
        Command::Schema => schema(),
    }
}

fn read_record(path: Option<&PathBuf>) -> Result<ContentRecord> {
    let raw = match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("read record file {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            if buf.trim().is_empty() {
                bail!("record JSON required via --record or stdin");
            }
            buf
        }
    };
    let record: ContentRecord = serde_json::from_str(&raw).context("parse record JSON")?;
    record.validate().context("invalid record")?;
    Ok(record)
}

fn decide(path: Option<PathBuf>, trace: bool, views: bool) -> Result<()> {
    let record = read_record(path.as_ref())?;
    let mode = if trace {
        DecisionTraceMode::Capture
    } else {
        DecisionTraceMode::Off
    };
    let decision = ClassificationEngine::decide_fresh(&record, mode);
    println!("{}", serde_json::to_string_pretty(&decision)?);

    if views {
        let rendered = serde_json::json!({
            "grid": GridRenderer.render(&record, &decision),
            "feed": FeedRenderer.render(&record, &decision),
            "masonry": MasonryRenderer.render(&record, &decision),
            "utility": UtilityRenderer.render(&record, &decision),
        });
        println!("{}", serde_json::to_string_pretty(&rendered)?);
    }
    Ok(())
}

fn batch(dir: &PathBuf) -> Result<()> {
    let mut engine = ClassificationEngine::new();
    let mut hybrid = 0usize;
    let mut media_only = 0usize;
    let mut failed = 0usize;

    let mut entries: Vec<_> = fs::read_dir(dir)
        .with_context(|| format!("read directory {}", dir.display()))?
        .collect::<io::Result<Vec<_>>>()?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    entries.sort();

    for path in &entries {
        let parsed = fs::read_to_string(path)
            .map_err(anyhow::Error::from)
            .and_then(|raw| serde_json::from_str::<ContentRecord>(&raw).map_err(Into::into));
        let record = match parsed {
            Ok(record) => record,
            Err(err) => {
                eprintln!("{}: {err:#}", path.display());
                failed += 1;
                continue;
            }
        };
        let decision = engine.decide(&record);
        match decision.card_type {
            CardType::Hybrid => hybrid += 1,
            CardType::MediaOnly => media_only += 1,
        }
        println!(
            "{}\t{}\t{}",
            record.id,
            match decision.card_type {
                CardType::Hybrid => "hybrid",
                CardType::MediaOnly => "media_only",
            },
            decision.supporting_count
        );
    }

    println!(
        "decided {} records: {hybrid} hybrid, {media_only} media_only, {failed} unreadable",
        hybrid + media_only
    );
    Ok(())
}

fn schema() -> Result<()> {
    let schema = schemars::schema_for!(ContentRecord);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
