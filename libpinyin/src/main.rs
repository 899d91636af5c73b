use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use t9search_pinyin::{
    count_segments, is_valid_t9_key, CandidateSet, PinyinConfig, Readings, T9KeyBuilder,
};

#[derive(Parser)]
#[command(name = "t9search", about = "Encode names into T9 keypad search keys")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode text into its T9 key candidates
    Encode {
        /// Text to encode; several words are joined with a space
        #[arg(required = true)]
        text: Vec<String>,

        /// Reading table file (defaults to the built-in demo table)
        #[arg(long)]
        table: Option<PathBuf>,

        /// TOML configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Candidate ceiling
        #[arg(long, conflicts_with = "unbounded")]
        max_candidates: Option<usize>,

        /// Disable the candidate ceiling
        #[arg(long)]
        unbounded: bool,

        /// Print one candidate per line instead of the joined key
        #[arg(long)]
        split: bool,
    },
    /// Check whether a query only uses keypad characters
    Check { query: String },
    /// Count word starts in a rendered key over [start, end)
    Segments {
        key: String,
        start: usize,
        end: usize,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    match args.command {
        Command::Encode {
            text,
            table,
            config,
            max_candidates,
            unbounded,
            split,
        } => {
            let mut cfg = match config {
                Some(path) => PinyinConfig::load_toml(&path)?,
                None => PinyinConfig::default(),
            };
            if table.is_some() {
                cfg.table_path = table;
            }
            if let Some(n) = max_candidates {
                cfg.base_mut().max_candidates = Some(n);
            }
            if unbounded {
                cfg.base_mut().max_candidates = None;
            }

            let readings = Readings::from_config(&cfg)?;
            let builder = T9KeyBuilder::new(cfg.into_base())?;
            let text = text.join(" ");
            let key = builder
                .build_t9_key(&text, &readings)
                .with_context(|| format!("encode {:?}", text))?;

            if split {
                for candidate in CandidateSet::parse(&key) {
                    println!("{}", candidate);
                }
            } else {
                println!("{}", key);
            }
        }
        Command::Check { query } => {
            if !is_valid_t9_key(&query) {
                bail!("{:?} contains non-keypad characters", query);
            }
            println!("ok");
        }
        Command::Segments { key, start, end } => {
            println!("{}", count_segments(&key, start, end));
        }
    }
    Ok(())
}
