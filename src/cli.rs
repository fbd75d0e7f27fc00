use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;
use crate::content::Router;
use crate::error::{Error, Result};

/// Command-line entry point.
#[derive(Parser, Debug, Clone)]
#[command(name = "escape-epic", version)]
#[command(about = "Escape Epic travel site in the terminal")]
pub struct Cli {
    /// Config file (defaults to the user config directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Page to open first
    #[arg(long, value_name = "PATH", default_value = "/")]
    pub page: String,

    /// Slideshow advance interval in milliseconds (overrides config)
    #[arg(long, value_name = "N")]
    pub interval_ms: Option<u64>,

    /// Log file (defaults to the user cache directory)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Print every page path and exit
    #[arg(long)]
    pub list_pages: bool,
}

impl Cli {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    /// Applies flags that take precedence over the config file.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(interval_ms) = self.interval_ms {
            config.slideshow.interval_ms = interval_ms;
        }
    }

    /// Resolves `--page` against `router`.
    pub fn start_page(&self, router: &dyn Router) -> Result<String> {
        router
            .resolve(&self.page)
            .map(|page| page.path.clone())
            .ok_or_else(|| Error::PageNotFound {
                path: self.page.clone(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SiteCatalog;

    #[test]
    fn defaults_to_home() {
        let cli = Cli::try_parse_from(["escape-epic"]).expect("parse");
        assert_eq!(cli.page, "/");
        assert!(!cli.list_pages);
        assert!(cli.interval_ms.is_none());
    }

    #[test]
    fn interval_flag_overrides_config() {
        let cli = Cli::try_parse_from(["escape-epic", "--interval-ms", "1500"]).expect("parse");
        let mut config = Config::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.slideshow.interval_ms, 1500);
    }

    #[test]
    fn no_override_keeps_config_value() {
        let cli = Cli::try_parse_from(["escape-epic"]).expect("parse");
        let mut config = Config::default();
        config.slideshow.interval_ms = 9000;
        cli.apply_overrides(&mut config);
        assert_eq!(config.slideshow.interval_ms, 9000);
    }

    #[test]
    fn start_page_resolves_known_path() {
        let catalog = SiteCatalog::escape_epic();
        let cli = Cli::try_parse_from(["escape-epic", "--page", "/destinations/japan/"])
            .expect("parse");
        assert_eq!(
            cli.start_page(&catalog).expect("known page"),
            "/destinations/japan"
        );
    }

    #[test]
    fn start_page_rejects_unknown_path() {
        let catalog = SiteCatalog::escape_epic();
        let cli = Cli::try_parse_from(["escape-epic", "--page", "/mars"]).expect("parse");
        match cli.start_page(&catalog) {
            Err(Error::PageNotFound { path }) => assert_eq!(path, "/mars"),
            other => panic!("expected PageNotFound, got {:?}", other),
        }
    }

    #[test]
    fn rejects_non_numeric_interval() {
        assert!(Cli::try_parse_from(["escape-epic", "--interval-ms", "soon"]).is_err());
    }
}
