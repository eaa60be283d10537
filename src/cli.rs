//! Command line front end: stdin lines are text changes, stdout is the screen.

use std::path::PathBuf;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::catalog::JsonFileRepository;
use crate::config::{Config, ConfigError};
use crate::ui::movies::MoviesViewModel;
use crate::ui::{text_input, Binder, IntentSource, TerminalSurface};

#[derive(Debug, Parser)]
#[command(
    name = "moviesdecade",
    version,
    about = "Browse and search a movie catalog; each stdin line is the current search text"
)]
pub struct Cli {
    /// Config file (default: ~/.config/moviesdecade/config.toml).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// JSON movie catalog, overrides `catalog.path`.
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Search debounce window in milliseconds, overrides `search.debounce_ms`.
    #[arg(long)]
    pub debounce_ms: Option<u64>,

    /// Log filter directive, overrides `logging.level`.
    #[arg(long)]
    pub log_level: Option<String>,
}

/// Config after file loading and command line overrides.
#[derive(Debug, Clone)]
pub struct Settings {
    pub config: Config,
    pub catalog_path: PathBuf,
}

impl Cli {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    pub fn resolve(&self) -> Result<Settings, ConfigError> {
        let config_path = self.config_path();
        let config = self.apply(Config::load_from(&config_path)?);
        config.validate()?;
        let catalog_path = config.catalog_path(&config_path);
        Ok(Settings {
            config,
            catalog_path,
        })
    }

    fn apply(&self, mut config: Config) -> Config {
        if let Some(catalog) = &self.catalog {
            config.catalog.path = Some(catalog.clone());
        }
        if let Some(debounce_ms) = self.debounce_ms {
            config.search.debounce_ms = debounce_ms;
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        config
    }
}

/// Run the screen until stdin ends or Ctrl-C.
///
/// On end of input the pending search is flushed and its results rendered
/// before the view detaches.
pub async fn run(settings: Settings) -> anyhow::Result<()> {
    tracing::info!(catalog = %settings.catalog_path.display(), "Starting");
    let view_model = MoviesViewModel::new(JsonFileRepository::new(settings.catalog_path));
    let (text, input) = text_input();
    let mut binder = Binder::new(
        view_model,
        TerminalSurface::stdout(),
        IntentSource::new(input, settings.config.search.debounce()),
    );
    binder.attach()?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);
    loop {
        tokio::select! {
            _ = &mut ctrl_c => {
                tracing::info!("Interrupted");
                binder.detach();
                return Ok(());
            }
            line = lines.next_line() => match line? {
                Some(line) => {
                    text.set_text(line);
                }
                None => break,
            },
        }
    }

    drop(text);
    binder.view_model().finished().await;
    binder.view_model().close();
    binder.rendered_all().await;
    binder.detach();
    Ok(())
}
