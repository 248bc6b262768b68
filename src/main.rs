//! metrics-plot: render hardware telemetry charts from a remote metrics service.
//!
//! Run with:  `RUST_LOG=info metrics-plot recent`

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use plot_config::{default_path, load as load_config, PlotConfig};
use plot_fetch::MetricsClient;
use plot_pipeline::{composer_from_config, PassOutcome, Plotter};
use plot_renderer::PngRenderer;
use plot_theme::Theme;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "metrics-plot", version, about = "Plot CPU, RAM, disk and temperature telemetry")]
struct Cli {
    /// Config file (default: $XDG_CONFIG_HOME/metrics-plot/metrics-plot.toml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Skip the rolling-average line.
    #[arg(long, global = true)]
    no_smooth: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Plot the configured recent ranges (e.g. last hour, all history).
    Recent {
        /// Only plot the range served by this endpoint.
        #[arg(long)]
        endpoint: Option<String>,
    },
    /// Plot an explicit timestamp range.
    Range {
        /// Inclusive lower bound, epoch seconds.
        #[arg(long)]
        start: i64,
        /// Inclusive upper bound, epoch seconds.
        #[arg(long)]
        stop: i64,
        /// Sampling interval in seconds.
        #[arg(long)]
        step: Option<u64>,
        /// File prefix (default: `range_{start}_{stop}`).
        #[arg(long)]
        prefix: Option<String>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Structured logging. RUST_LOG controls verbosity (default: info).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("metrics-plot v{} starting", env!("CARGO_PKG_VERSION"));

    let mut config = load_config(cli.config.clone().unwrap_or_else(default_path))?;
    if cli.no_smooth {
        config.smoothing.enabled = false;
    }

    std::fs::create_dir_all(&config.output.dir).with_context(|| {
        format!("cannot create output directory '{}'", config.output.dir.display())
    })?;

    let plotter = build_plotter(&config)?;

    let outcomes = match cli.command.unwrap_or(Command::Recent { endpoint: None }) {
        Command::Recent { endpoint } => {
            let ranges: Vec<_> = config
                .ranges
                .iter()
                .filter(|r| endpoint.as_deref().map_or(true, |e| r.endpoint == e))
                .cloned()
                .collect();
            if ranges.is_empty() {
                match endpoint {
                    Some(e) => anyhow::bail!("no configured range uses endpoint '{e}'"),
                    None => anyhow::bail!("no ranges configured"),
                }
            }
            plotter.plot_recent(&ranges).await?
        }
        Command::Range { start, stop, step, prefix } => {
            anyhow::ensure!(start <= stop, "--start ({start}) must not be after --stop ({stop})");
            vec![plotter.plot_range(start, stop, step, prefix.as_deref()).await?]
        }
    };

    let written: usize = outcomes.iter().map(|o| o.artifacts().len()).sum();
    let empty = outcomes.iter().filter(|o| **o == PassOutcome::NoData).count();
    tracing::info!("done: {written} chart(s) written, {empty} range(s) without data");
    Ok(())
}

fn build_plotter(config: &PlotConfig) -> Result<Plotter<MetricsClient, PngRenderer>> {
    let source = MetricsClient::new(&config.source.base_url);
    let renderer = PngRenderer::new(
        Theme::from_config(&config.theme),
        config.output.width,
        config.output.height,
    )?;

    Ok(Plotter::new(
        source,
        renderer,
        composer_from_config(config),
        &config.source.range_endpoint,
    ))
}
