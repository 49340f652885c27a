use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::info;

use pareto_core::config::{CliOverrides, ParetoConfig};
use pareto_core::constants::VERSION;
use pareto_core::models::{ClusterStats, RankedProblem, ReportFilters};
use pareto_core::tracing_setup::init_tracing;
use pareto_ranking::{InMemoryReportSource, RankingEngine, RankingService};

#[derive(Parser, Debug)]
#[command(name = "pareto")]
#[command(version, about = "Rank recurring problem reports by risk priority", long_about = None)]
struct Cli {
    /// TOML config file (defaults apply when omitted)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Clustering similarity threshold in [0, 1]
    #[arg(long, global = true)]
    threshold: Option<f64>,

    /// Reference date for recency scoring (YYYY-MM-DD, default today UTC)
    #[arg(long, global = true)]
    as_of: Option<NaiveDate>,

    /// Recency decay window in days
    #[arg(long, global = true)]
    recency_window_days: Option<u32>,

    /// Maximum words in a cluster description
    #[arg(long, global = true)]
    key_phrase_words: Option<usize>,

    /// Log level: trace, debug, info, warn or error
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            clustering_threshold: self.threshold,
            recency_window_days: self.recency_window_days,
            key_phrase_words: self.key_phrase_words,
            log_level: self.log_level.clone(),
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Cluster reports and print the top problems by RPN
    Rank {
        /// JSON array of report records
        #[arg(short, long)]
        input: PathBuf,

        /// Number of problems to return
        #[arg(short, long)]
        limit: Option<usize>,

        /// Wrap output with clustering stats
        #[arg(long)]
        stats: bool,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Print corpus-wide keyword frequencies
    WordCloud {
        /// JSON array of report records
        #[arg(short, long)]
        input: PathBuf,

        /// Number of words to return
        #[arg(short, long)]
        limit: Option<usize>,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Print pairwise similarity breakdown for the leading reports
    Debug {
        /// JSON array of report records
        #[arg(short, long)]
        input: PathBuf,

        #[command(flatten)]
        filters: FilterArgs,
    },
}

#[derive(Args, Debug, Default)]
struct FilterArgs {
    /// Department contains (case-insensitive)
    #[arg(long)]
    department: Option<String>,

    /// Category contains (case-insensitive)
    #[arg(long)]
    category: Option<String>,

    /// Assignee contains (case-insensitive)
    #[arg(long)]
    assignee: Option<String>,

    /// Reporter contains (case-insensitive)
    #[arg(long)]
    reporter: Option<String>,

    /// Exact status
    #[arg(long)]
    status: Option<String>,

    /// Free-text search over text, department and reporter
    #[arg(long)]
    search: Option<String>,

    /// Earliest report date, inclusive
    #[arg(long)]
    from: Option<NaiveDate>,

    /// Latest report date, inclusive
    #[arg(long)]
    to: Option<NaiveDate>,
}

impl From<FilterArgs> for ReportFilters {
    fn from(args: FilterArgs) -> Self {
        Self {
            department: args.department,
            category: args.category,
            assignee: args.assignee,
            reporter: args.reporter,
            status: args.status,
            search: args.search,
            start_date: args.from,
            end_date: args.to,
        }
    }
}

#[derive(Serialize)]
struct RankOutput<'a> {
    problems: &'a [RankedProblem],
    stats: &'a ClusterStats,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let overrides = cli.overrides();
    let config = ParetoConfig::load(cli.config.as_deref(), Some(&overrides))
        .context("failed to load configuration")?;
    init_tracing(&config.observability);
    info!(version = VERSION, "pareto starting");

    let mut engine = RankingEngine::new(config);
    if let Some(date) = cli.as_of {
        engine = engine.with_reference_date(date);
    }

    match cli.command {
        Commands::Rank {
            input,
            limit,
            stats,
            filters,
        } => {
            let source = load_source(&input)?;
            let service = RankingService::new(&source, engine);
            let outcome = service.top_problems(&filters.into(), limit)?;
            if stats {
                print_json(&RankOutput {
                    problems: &outcome.problems,
                    stats: &outcome.stats,
                })
            } else {
                print_json(&outcome.problems)
            }
        }
        Commands::WordCloud {
            input,
            limit,
            filters,
        } => {
            let source = load_source(&input)?;
            let service = RankingService::new(&source, engine);
            print_json(&service.word_cloud(&filters.into(), limit)?)
        }
        Commands::Debug { input, filters } => {
            let source = load_source(&input)?;
            let service = RankingService::new(&source, engine);
            print_json(&service.debug_info(&filters.into())?)
        }
    }
}

fn load_source(path: &Path) -> Result<InMemoryReportSource> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let source = InMemoryReportSource::from_json(path.display().to_string(), &content)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    info!(path = %path.display(), records = source.len(), "loaded reports");
    Ok(source)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{json}");
    Ok(())
}
