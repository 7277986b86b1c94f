//! Novanest Dashboard CLI – one fetch-filter-render cycle in the terminal.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use novanest_client::{render, Dashboard, HttpStartupSource};
use novanest_common::config::{self, Config};
use novanest_common::{Credential, Filter, FilterValue};

#[derive(Debug, Parser)]
#[command(name = "novanest-dashboard")]
#[command(about = "Browse startups from the Novanest backend", long_about = None)]
struct Cli {
    /// KEY=VALUE config file (defaults to /etc/novanest/dashboard.conf if present).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Bearer token. Falls back to NOVANEST_TOKEN, then TOKEN_FILE.
    #[arg(long)]
    token: Option<String>,

    #[arg(long)]
    industry: Option<String>,

    #[arg(long)]
    stage: Option<String>,

    /// Minimum funding goal.
    #[arg(long)]
    min_funding: Option<f64>,

    /// Extra criteria as KEY=VALUE, repeatable.
    #[arg(short, long = "filter", value_parser = parse_filter_pair)]
    filters: Vec<(String, FilterValue)>,
}

impl Cli {
    fn filter(&self) -> Filter {
        let mut filter = Filter::new();
        filter.set("industry", self.industry.clone());
        filter.set("stage", self.stage.clone());
        filter.set("fundingGoal", self.min_funding);
        for (key, value) in &self.filters {
            filter.set(key.clone(), value.clone());
        }
        filter
    }
}

fn parse_filter_pair(s: &str) -> Result<(String, FilterValue), String> {
    Filter::parse_pair(s).ok_or_else(|| format!("expected KEY=VALUE, got `{s}`"))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "novanest_client=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // ── load config ──────────────────────────────────────────────────
    let config = load_config(cli.config.as_deref())?;
    let config = apply_env_override(config, std::env::var("NOVANEST_API_BASE_URL").ok())?;
    info!("Novanest dashboard (api={})", config.api_base_url);

    let credential = resolve_credential(cli.token.clone(), &config);
    let filter = cli.filter();

    // ── fetch and render ─────────────────────────────────────────────
    let source = HttpStartupSource::new(&config)?;
    let dashboard = Dashboard::new(source);
    dashboard.fetch_startups(&credential, &filter).await;

    print!("{}", render::render(&dashboard.view()));
    Ok(())
}

/// An explicit path must be readable; the default path is optional.
fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => config::load(path).context("Config load failed"),
        None => {
            let default = Path::new(Config::default_path());
            if default.exists() {
                config::load(default).context("Config load failed")
            } else {
                Ok(Config::default())
            }
        }
    }
}

/// `NOVANEST_API_BASE_URL` replaces the configured backend, if set.
fn apply_env_override(config: Config, url: Option<String>) -> Result<Config> {
    match url {
        Some(url) => config
            .try_with_api_base_url(&url)
            .with_context(|| format!("Invalid NOVANEST_API_BASE_URL: {url}")),
        None => Ok(config),
    }
}

/// The token is read once, here, and passed down explicitly.
fn resolve_credential(flag: Option<String>, config: &Config) -> Credential {
    if let Some(token) = flag.or_else(|| std::env::var("NOVANEST_TOKEN").ok()) {
        return Credential::bearer(token);
    }
    let Some(path) = &config.token_file else {
        return Credential::missing();
    };
    match std::fs::read_to_string(path) {
        Ok(text) => Credential::bearer(text),
        Err(e) => {
            warn!("Cannot read token file {}: {e}", path.display());
            Credential::missing()
        }
    }
}
