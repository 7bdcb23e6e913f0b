//! # Best Stories
//!
//! HTTP service returning the highest-scored Hacker News best stories

mod bootstrap;
mod di;
mod server;

use best_stories_domain::CliOverrides;
use best_stories_jobs::{CacheCompactionJob, JobRunner};
use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::info;

#[derive(Parser)]
#[command(name = "best-stories")]
#[command(version)]
#[command(about = "Aggregates the best Hacker News stories behind a cached HTTP API")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Web server port
    #[arg(short = 'w', long)]
    web_port: Option<u16>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short = 'l', long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        bind_address: cli.bind,
        web_port: cli.web_port,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);
    bootstrap::log_config_summary(&config, cli.config.as_deref());

    let caches = di::Caches::new(&config);
    let upstream = di::build_upstream(&config)?;
    let use_cases = di::UseCases::new(&config, upstream, &caches);

    let shutdown = CancellationToken::new();

    JobRunner::new()
        .with_cache_compaction(
            CacheCompactionJob::new(use_cases.compact_caches.clone())
                .with_interval(config.cache.compaction_interval_secs)
                .with_cancellation(shutdown.clone()),
        )
        .start()
        .await;

    server::start_web_server(&config, use_cases.app_state(), shutdown.clone()).await?;

    shutdown.cancel();
    info!("Best Stories stopped");

    Ok(())
}
