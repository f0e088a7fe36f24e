use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use report_match_engine::{normalize, CandidateDocument, MatchEngine, MatchOptions, ScorerKind};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "report-match")]
#[command(about = "Pair report filenames with pending documents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Options file (JSON); falls back to REPORT_MATCH_* environment variables
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Override the pairwise scorer
    #[arg(long, global = true, value_enum)]
    scorer: Option<ScorerArg>,
}

#[derive(Clone, Copy, ValueEnum)]
enum ScorerArg {
    Levenshtein,
    Rapidfuzz,
}

impl From<ScorerArg> for ScorerKind {
    fn from(arg: ScorerArg) -> Self {
        match arg {
            ScorerArg::Levenshtein => ScorerKind::Levenshtein,
            ScorerArg::Rapidfuzz => ScorerKind::Rapidfuzz,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the comparison key of each filename
    Normalize {
        /// Filenames
        #[arg(required = true)]
        filenames: Vec<String>,
    },

    /// Similarity (0-100) of two filenames
    Score {
        a: String,
        b: String,

        /// Compare the strings as given, without normalizing
        #[arg(long)]
        raw: bool,
    },

    /// Rank pending documents for one filename
    Rank {
        /// Report filename
        query: String,

        /// JSON array of candidate documents
        #[arg(long)]
        candidates: PathBuf,

        /// Minimum confidence (defaults to the configured value)
        #[arg(short, long)]
        min_confidence: Option<u8>,
    },

    /// Preview matches for a batch of report filenames
    Preview {
        /// JSON array of candidate documents
        #[arg(long)]
        candidates: PathBuf,

        /// File with one report filename per line
        #[arg(long, conflicts_with = "reports")]
        reports_file: Option<PathBuf>,

        /// Report filenames
        reports: Vec<String>,

        /// Score reports in parallel
        #[arg(long)]
        parallel: bool,
    },
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr, JSON results to stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut options = match &cli.config {
        Some(path) => MatchOptions::from_file(path)
            .with_context(|| format!("Failed to load options from {}", path.display()))?,
        None => MatchOptions::from_env()?,
    };
    if let Some(scorer) = cli.scorer {
        options.scorer = scorer.into();
    }

    let engine = MatchEngine::with_options(options)?;

    match cli.command {
        Commands::Normalize { filenames } => {
            for filename in filenames {
                println!("{}", normalize(&filename));
            }
        }

        Commands::Score { a, b, raw } => {
            let score = if raw {
                engine.similarity(&a, &b)
            } else {
                engine.similarity(&normalize(&a), &normalize(&b))
            };
            println!("{}", score);
        }

        Commands::Rank { query, candidates, min_confidence } => {
            let pool = load_candidates(&candidates)?;
            let ranked = match min_confidence {
                Some(min) => engine.find_match_candidates_with(&query, &pool, min),
                None => engine.find_match_candidates(&query, &pool),
            };

            println!("{}", serde_json::to_string_pretty(&ranked)?);
        }

        Commands::Preview { candidates, reports_file, reports, parallel } => {
            let pool = load_candidates(&candidates)?;
            let reports = match reports_file {
                Some(path) => load_reports(&path)?,
                None => reports,
            };

            if reports.is_empty() {
                anyhow::bail!("No report filenames given");
            }

            let previews = if parallel {
                engine.preview_matches_par(&reports, &pool)
            } else {
                engine.preview_matches(&reports, &pool)
            };

            for preview in &previews {
                tracing::info!("{}", preview.display());
            }

            println!("{}", serde_json::to_string_pretty(&previews)?);
        }
    }

    Ok(())
}

fn load_candidates(path: &Path) -> anyhow::Result<Vec<CandidateDocument>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let candidates: Vec<CandidateDocument> = serde_json::from_str(&contents)
        .with_context(|| format!("Invalid candidate JSON in {}", path.display()))?;

    tracing::debug!("Loaded {} candidates from {}", candidates.len(), path.display());
    Ok(candidates)
}

fn load_reports(path: &Path) -> anyhow::Result<Vec<String>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    Ok(contents
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect())
}
