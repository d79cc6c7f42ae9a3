use anyhow::{Context, Result};
use cancerstats::{
    config::Config,
    query,
    table::{self, load_csv},
    views::{self, Measure},
};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::{io, path::PathBuf, time::Instant};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(
    name = "cancerstats",
    version,
    about = "Query US cancer case/death statistics and print chart data as JSON"
)]
struct Cli {
    /// YAML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// CSV data file (overrides the config)
    #[arg(long)]
    data: Option<PathBuf>,

    /// Row cap for bar-chart views (overrides the config)
    #[arg(long)]
    top: Option<usize>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Per-cancer totals in one state, largest first
    StateTotals {
        #[arg(long)]
        state: String,
        #[arg(long, default_value_t = Measure::CaseCount)]
        measure: Measure,
    },

    /// A state's rows ranked by a measure, without grouping
    StateRows {
        #[arg(long)]
        state: String,
        #[arg(long, default_value_t = Measure::CaseCount)]
        measure: Measure,
    },

    /// Cases of one cancer type against state population
    Population {
        #[arg(long)]
        cancer: String,
    },

    /// Per-state values of one cancer type for a US map
    Map {
        #[arg(long)]
        cancer: String,
        #[arg(long, default_value_t = Measure::CaseCount)]
        measure: Measure,
    },

    /// Nationwide cases and deaths per cancer type
    CasesVsDeaths,

    /// Distinct values of a selector column
    Options {
        #[arg(long, value_enum)]
        field: Selector,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Selector {
    Area,
    CancerType,
}

impl Selector {
    fn column(self) -> &'static str {
        match self {
            Selector::Area => table::AREA,
            Selector::CancerType => table::CANCER_TYPE,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ─── 1) config ───────────────────────────────────────────────────
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(data) = cli.data {
        config.data_path = data;
    }
    if let Some(top) = cli.top {
        config.top_n = top;
    }

    // ─── 2) init logging (stderr; stdout carries the JSON) ───────────
    let env = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter.as_str()));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(io::stderr)
        .init();
    info!(data = %config.data_path.display(), top_n = config.top_n, "startup");

    // ─── 3) load the table once ──────────────────────────────────────
    let start = Instant::now();
    let base = load_csv(&config.data_path)?;
    info!(rows = base.num_rows(), elapsed = ?start.elapsed(), "table ready");

    // ─── 4) run the requested view ───────────────────────────────────
    let top = Some(config.top_n);
    match cli.cmd {
        Command::StateTotals { state, measure } => {
            emit(&views::state_cancer_totals(&base, &state, measure, top)?)
        }
        Command::StateRows { state, measure } => {
            emit(&views::state_top_rows(&base, &state, measure, top)?)
        }
        Command::Population { cancer } => emit(&views::cases_by_population(&base, &cancer)?),
        Command::Map { cancer, measure } => emit(&views::choropleth(&base, &cancer, measure)?),
        Command::CasesVsDeaths => emit(&views::cases_vs_deaths(&base)?),
        Command::Options { field } => emit(&query::distinct_values(&base, field.column())?),
    }
}

fn emit<T: Serialize>(value: &T) -> Result<()> {
    let stdout = io::stdout();
    serde_json::to_writer_pretty(stdout.lock(), value).context("writing JSON to stdout")?;
    println!();
    Ok(())
}
