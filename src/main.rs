use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use escape_epic::cli::Cli;
use escape_epic::config::Config;
use escape_epic::contact::{ContactSubmitter, LoggingSubmitter, OutboxSubmitter};
use escape_epic::content::SiteCatalog;
use escape_epic::error::{self, Error};
use escape_epic::logging;
use escape_epic::ui::{self, RunOptions};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config_path();
    let config = load_config(&cli)
        .with_context(|| format!("loading config from {}", config_path.display()))?;

    let catalog = SiteCatalog::escape_epic().with_home_hero(config.hero.clone());

    if cli.list_pages {
        for path in catalog.paths() {
            println!("{}", path);
        }
        return Ok(());
    }

    let start_page = match cli.start_page(&catalog) {
        Ok(path) => path,
        Err(err @ Error::PageNotFound { .. }) => {
            eprintln!("Error: {}", err);
            eprintln!("Available pages:");
            for path in catalog.paths() {
                eprintln!("  {}", path);
            }
            process::exit(1);
        }
        Err(err) => return Err(err.into()),
    };

    let log_path = cli.log_file.clone().unwrap_or_else(logging::default_log_path);
    if let Err(err) = logging::init_tracing(&log_path) {
        eprintln!("Warning: logging disabled ({}): {}", log_path.display(), err);
    }

    let submitter = contact_submitter(&config).context("opening contact outbox")?;

    ui::run(RunOptions {
        config,
        catalog,
        start_page,
        submitter,
    })
    .await
    .context("terminal session failed")?;

    Ok(())
}

fn load_config(cli: &Cli) -> error::Result<Config> {
    let mut config = Config::load_from(&cli.config_path())?;
    cli.apply_overrides(&mut config);
    Ok(config)
}

/// Appends to the configured outbox file, or only logs when none is set.
fn contact_submitter(config: &Config) -> error::Result<Arc<dyn ContactSubmitter>> {
    Ok(match &config.contact.outbox {
        Some(path) => Arc::new(OutboxSubmitter::open(path)?),
        None => Arc::new(LoggingSubmitter),
    })
}
