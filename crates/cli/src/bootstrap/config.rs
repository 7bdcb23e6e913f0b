use best_stories_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}

/// Runs after logging is up, loading happens before.
pub fn log_config_summary(config: &Config, config_path: Option<&str>) {
    info!(
        config_file = config_path.unwrap_or("default"),
        web_port = config.server.web_port,
        bind = %config.server.bind_address,
        upstream = %config.hacker_news.api_root(),
        max_concurrency = config.aggregator.max_concurrency,
        cache_size_limit = config.cache.size_limit,
        "Configuration loaded"
    );
}
